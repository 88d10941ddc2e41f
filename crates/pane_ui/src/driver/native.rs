//! Native window management using GLFW
//!
//! Owns the native window handle and its event queue. All other driver
//! code goes through this wrapper instead of touching GLFW directly.

use thiserror::Error;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    #[error("GLFW initialization failed")]
    InitializationFailed,

    #[error("window creation failed")]
    CreationFailed,
}

pub type WindowResult<T> = Result<T, WindowError>;

/// Saved windowed geometry, restored when leaving fullscreen
pub(crate) type WindowedGeometry = (i32, i32, u32, u32);

/// Initialize the native windowing library
///
/// Safe to call when the library is already active; GLFW makes repeated
/// initialization a no-op.
pub(crate) fn init() -> WindowResult<glfw::Glfw> {
    glfw::init(glfw::fail_on_errors).map_err(|_| WindowError::InitializationFailed)
}

/// GLFW window wrapper with proper resource management
pub(crate) struct NativeWindow {
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl NativeWindow {
    /// Open a hidden native window and enable event reporting
    ///
    /// Reporting is enabled for the four event classes the driver
    /// dispatches: framebuffer resize, move, close request, and key.
    pub fn open(
        glfw: &mut glfw::Glfw,
        title: &str,
        width: u32,
        height: u32,
        resizable: bool,
    ) -> WindowResult<Self> {
        // Windows start hidden; visibility is a separate lifecycle step
        glfw.window_hint(glfw::WindowHint::Visible(false));
        glfw.window_hint(glfw::WindowHint::Resizable(resizable));

        let (mut window, events) = glfw
            .create_window(width, height, title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed)?;

        window.set_key_polling(true);
        window.set_close_polling(true);
        window.set_size_polling(true);
        window.set_framebuffer_size_polling(true);
        window.set_pos_polling(true);

        Ok(Self { window, events })
    }

    pub fn show(&mut self) {
        self.window.show();
    }

    pub fn hide(&mut self) {
        self.window.hide();
    }

    pub fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    pub fn size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_size();
        (width.max(0) as u32, height.max(0) as u32)
    }

    pub fn set_size(&mut self, width: u32, height: u32) {
        self.window.set_size(width as i32, height as i32);
    }

    /// Drawable surface size in native pixels
    ///
    /// May differ from `size` on monitors where window coordinates are
    /// not pixels.
    pub fn framebuffer_size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_framebuffer_size();
        (width.max(0) as u32, height.max(0) as u32)
    }

    pub fn position(&self) -> (i32, i32) {
        self.window.get_pos()
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.window.set_pos(x, y);
    }

    /// Switch to fullscreen on the primary monitor
    ///
    /// Returns the windowed geometry to restore later. Without a usable
    /// monitor the window is left untouched and `None` is returned.
    pub fn enter_fullscreen(&mut self, glfw: &mut glfw::Glfw) -> Option<WindowedGeometry> {
        let (x, y) = self.window.get_pos();
        let (width, height) = self.size();

        let entered = glfw.with_primary_monitor(|_, monitor| {
            let monitor = monitor?;
            let (mode_width, mode_height, refresh_rate) = match monitor.get_video_mode() {
                Some(mode) => (mode.width, mode.height, Some(mode.refresh_rate)),
                None => (width, height, None),
            };
            self.window.set_monitor(
                glfw::WindowMode::FullScreen(monitor),
                0,
                0,
                mode_width,
                mode_height,
                refresh_rate,
            );
            Some(())
        });

        entered.map(|()| (x, y, width, height))
    }

    /// Switch back to windowed mode at the given geometry
    pub fn exit_fullscreen(&mut self, geometry: WindowedGeometry) {
        let (x, y, width, height) = geometry;
        self.window
            .set_monitor(glfw::WindowMode::Windowed, x, y, width, height, None);
    }

    /// Drain all pending native events for this window
    pub fn drain_events(&self) -> Vec<glfw::WindowEvent> {
        glfw::flush_messages(&self.events)
            .map(|(_, event)| event)
            .collect()
    }
}
