//! Windowing driver
//!
//! Binds the toolkit's window and canvas capabilities to the native
//! windowing library. The driver owns the native library handle and the
//! window registry; all native events are pumped by [`Driver::run`] on
//! the calling thread and dispatched to the event adapters.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────┐
//! │     Application Code            │
//! └─────────────┬───────────────────┘
//!               │ Uses
//!        ┌──────▼──────┐
//!        │ ui::Window /│  ← Capability traits (ui module)
//!        │ ui::Canvas  │
//!        └──────┬──────┘
//!               │ Implemented by
//!      ┌────────▼────────┐
//!      │ Driver /        │  ← This module
//!      │ WindowRef       │
//!      └────────┬────────┘
//!               │ Wraps
//!   ┌───────────▼───────────┐
//!   │ native::NativeWindow  │  ← GLFW (native/mod boundary)
//!   └───────────────────────┘
//! ```

mod adapters;
pub mod canvas;
mod native;
mod registry;
mod scale;

pub use canvas::WindowCanvas;
pub use native::{WindowError, WindowResult};
pub use registry::WindowId;
pub use scale::SCALE_ENV_VAR;

use log::{debug, error, info, trace, warn};
use thiserror::Error;

use crate::core::config::DriverConfig;
use crate::driver::native::NativeWindow;
use crate::driver::registry::{WindowRecord, WindowRegistry};
use crate::ui::canvas::Canvas;
use crate::ui::window::Window;

/// Geometry of a freshly created window
///
/// Windows open hidden at this size; applications apply their real
/// geometry before showing them.
const PLACEHOLDER_SIZE: (u32, u32) = (10, 10);

/// Upper bound on one native event wait
///
/// Keeps quit requests prompt even when no native events arrive.
const EVENT_WAIT_SECONDS: f64 = 0.1;

/// Driver-level errors
#[derive(Error, Debug)]
pub enum DriverError {
    /// Configuration rejected before any native state was touched
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Native library failure during driver construction
    #[error(transparent)]
    Window(#[from] WindowError),
}

/// The windowing driver
///
/// Owns the native library handle and the registry of live windows. One
/// driver instance is one independent windowing context; nothing here is
/// process-global, so tests can run several drivers side by side.
pub struct Driver {
    glfw: glfw::Glfw,
    registry: WindowRegistry,
    running: bool,
    config: DriverConfig,
}

impl Driver {
    /// Create a driver, initializing the native windowing library
    pub fn new(config: DriverConfig) -> Result<Self, DriverError> {
        config.validate().map_err(DriverError::Config)?;

        let glfw = native::init()?;
        info!("native windowing library initialized");

        Ok(Self {
            glfw,
            registry: WindowRegistry::default(),
            running: true,
            config,
        })
    }

    /// Create a new window and register it
    ///
    /// The window opens hidden with a small placeholder geometry, unit
    /// canvas scale, and empty content. A native creation failure is
    /// unrecoverable here: no window exists to report through, so the
    /// failure is logged and the process terminates.
    pub fn create_window(&mut self, title: &str) -> WindowId {
        let (width, height) = PLACEHOLDER_SIZE;
        let native = match NativeWindow::open(
            &mut self.glfw,
            title,
            width,
            height,
            self.config.window.resizable,
        ) {
            Ok(native) => native,
            Err(err) => {
                error!("unable to create native window, perhaps a platform windowing module is missing: {err}");
                std::process::exit(1);
            }
        };

        let id = self.registry.insert(WindowRecord::new(native, title));
        debug!("created window {id:?} ({title:?})");
        id
    }

    /// Borrow a window by handle
    ///
    /// Returns `None` once the window has been closed.
    pub fn window(&mut self, id: WindowId) -> Option<WindowRef<'_>> {
        self.registry
            .contains_key(id)
            .then_some(WindowRef { driver: self, id })
    }

    /// Snapshot of all registered windows, in unspecified order
    pub fn all_windows(&self) -> Vec<WindowId> {
        self.registry.keys().collect()
    }

    /// Run the native event loop until quit
    ///
    /// Blocks the calling thread, waking on native events, dispatching
    /// them to the adapters, and flushing canvases that asked for a
    /// repaint. Every registry and canvas mutation happens on this
    /// thread; the driver itself spawns nothing.
    pub fn run(&mut self) {
        info!("entering native event loop");

        while self.running {
            self.glfw.wait_events_timeout(EVENT_WAIT_SECONDS);

            // Drain first, dispatch after: adapters may mutate the
            // registry (close removes entries) while queues are tied to
            // the records being iterated.
            let pending = self.drain_native_events();
            for (id, event) in pending {
                self.dispatch(id, event);
            }

            self.present();
        }

        info!("native event loop stopped");
    }

    /// Stop the event loop
    ///
    /// The global quit path: reached directly, or by closing the master
    /// or last remaining window.
    pub fn quit(&mut self) {
        info!("driver shutdown requested");
        self.running = false;
    }

    /// Collect pending native events, tagged with their window's handle
    fn drain_native_events(&mut self) -> Vec<(WindowId, glfw::WindowEvent)> {
        let mut pending = Vec::new();
        for (id, record) in &self.registry {
            for event in record.native.drain_events() {
                pending.push((id, event));
            }
        }
        pending
    }

    /// Route one native event to its adapter
    fn dispatch(&mut self, id: WindowId, event: glfw::WindowEvent) {
        match event {
            glfw::WindowEvent::FramebufferSize(_, _) => self.on_resize(id),
            glfw::WindowEvent::Pos(_, _) => self.on_move(id),
            glfw::WindowEvent::Close => self.on_close(id),
            glfw::WindowEvent::Key(
                key,
                scancode,
                glfw::Action::Press | glfw::Action::Repeat,
                mods,
            ) => self.on_key_down(Some(id), key, scancode, mods),
            _ => {}
        }
    }

    /// Flush canvases that requested a repaint since the last pass
    ///
    /// Painting itself is the rendering layer's concern; the driver only
    /// clears the per-canvas dirty state once per loop pass.
    fn present(&mut self) {
        for (id, record) in &mut self.registry {
            if record.canvas.take_dirty() {
                trace!("presenting window {id:?}");
            }
        }
    }

    /// Close lifecycle shared by `WindowRef::close` and the close adapter
    pub(crate) fn close_window(&mut self, id: WindowId) {
        let window_count = self.registry.len();
        let Some(record) = self.registry.get_mut(id) else {
            warn!("close requested for unregistered window");
            return;
        };

        record.native.hide();

        match close_disposition(record.master, window_count) {
            CloseAction::Quit => {
                debug!("closed the master or last window");
                self.quit();
            }
            CloseAction::Remove => {
                self.registry.remove(id);
                debug!("closed window {id:?}, {} windows remain", self.registry.len());
            }
        }
    }
}

/// What closing a window does to the rest of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CloseAction {
    /// Tear the whole application down
    Quit,
    /// Remove just this window, others keep running
    Remove,
}

/// Closing the master window, or the last window, quits the application
const fn close_disposition(is_master: bool, window_count: usize) -> CloseAction {
    if is_master || window_count <= 1 {
        CloseAction::Quit
    } else {
        CloseAction::Remove
    }
}

/// Borrowed handle to one live window
///
/// Implements the toolkit's window capability. Obtained from
/// [`Driver::window`] and valid for the duration of the borrow. After
/// `close`, remaining lifecycle operations on the same borrow are logged
/// and ignored; accessing the canvas of a closed window is a programming
/// error and panics.
pub struct WindowRef<'a> {
    driver: &'a mut Driver,
    id: WindowId,
}

impl WindowRef<'_> {
    /// The handle this reference points at
    pub fn id(&self) -> WindowId {
        self.id
    }
}

impl Window for WindowRef<'_> {
    fn title(&self) -> String {
        self.driver
            .registry
            .get(self.id)
            .map(|record| record.title.clone())
            .unwrap_or_default()
    }

    fn set_title(&mut self, title: &str) {
        let Some(record) = self.driver.registry.get_mut(self.id) else {
            warn!("title change for closed window");
            return;
        };
        record.native.set_title(title);
        record.title = title.to_string();
    }

    fn fullscreen(&self) -> bool {
        self.driver
            .registry
            .get(self.id)
            .is_some_and(|record| record.fullscreen)
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        let Some(record) = self.driver.registry.get_mut(self.id) else {
            warn!("fullscreen change for closed window");
            return;
        };
        if record.fullscreen == fullscreen {
            return;
        }

        if fullscreen {
            match record.native.enter_fullscreen(&mut self.driver.glfw) {
                Some(geometry) => {
                    record.windowed_geometry = Some(geometry);
                    record.fullscreen = true;
                }
                None => warn!("no monitor available for fullscreen"),
            }
        } else {
            if let Some(geometry) = record.windowed_geometry.take() {
                record.native.exit_fullscreen(geometry);
            }
            record.fullscreen = false;
        }
    }

    fn show(&mut self) {
        let only_window = self.driver.registry.len() == 1;
        let Some(record) = self.driver.registry.get_mut(self.id) else {
            warn!("show for closed window");
            return;
        };

        record.native.show();

        // The first window shown alone owns the application lifetime
        if only_window && !record.master {
            record.master = true;
            debug!("window {:?} promoted to master", self.id);
        }
    }

    fn hide(&mut self) {
        let Some(record) = self.driver.registry.get_mut(self.id) else {
            warn!("hide for closed window");
            return;
        };
        record.native.hide();
    }

    fn close(&mut self) {
        self.driver.close_window(self.id);
    }

    fn canvas(&mut self) -> &mut dyn Canvas {
        self.driver
            .registry
            .get_mut(self.id)
            .map(|record| &mut record.canvas as &mut dyn Canvas)
            .expect("canvas accessed after window close")
    }

    fn size(&self) -> (u32, u32) {
        self.driver
            .registry
            .get(self.id)
            .map_or((0, 0), |record| record.native.size())
    }

    fn set_size(&mut self, width: u32, height: u32) {
        let Some(record) = self.driver.registry.get_mut(self.id) else {
            warn!("resize for closed window");
            return;
        };
        record.native.set_size(width, height);
    }

    fn position(&self) -> (i32, i32) {
        self.driver
            .registry
            .get(self.id)
            .map_or((0, 0), |record| record.native.position())
    }

    fn set_position(&mut self, x: i32, y: i32) {
        let Some(record) = self.driver.registry.get_mut(self.id) else {
            warn!("move for closed window");
            return;
        };
        record.native.set_position(x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closing_the_master_window_quits() {
        assert_eq!(close_disposition(true, 3), CloseAction::Quit);
        assert_eq!(close_disposition(true, 1), CloseAction::Quit);
    }

    #[test]
    fn closing_the_last_window_quits() {
        assert_eq!(close_disposition(false, 1), CloseAction::Quit);
        assert_eq!(close_disposition(false, 0), CloseAction::Quit);
    }

    #[test]
    fn closing_a_secondary_window_only_removes_it() {
        assert_eq!(close_disposition(false, 2), CloseAction::Remove);
        assert_eq!(close_disposition(false, 10), CloseAction::Remove);
    }
}
