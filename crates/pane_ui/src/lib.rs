//! # Pane UI
//!
//! A windowing driver for the Pane UI toolkit, built on GLFW.
//!
//! The crate binds the toolkit's window and canvas capability interfaces
//! to a native windowing and event library. It creates native windows,
//! forwards native input, resize, move, and close events into the
//! toolkit's event model, and manages per-window state such as the title,
//! fullscreen mode, and the DPI-derived scale factor.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pane_ui::core::config::DriverConfig;
//! use pane_ui::ui::Window;
//! use pane_ui::Driver;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     pane_ui::foundation::logging::init();
//!
//!     let mut driver = Driver::new(DriverConfig::default())?;
//!     let id = driver.create_window("Hello");
//!     if let Some(mut window) = driver.window(id) {
//!         window.set_size(800, 600);
//!         window.show();
//!     }
//!     driver.run();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod core;
pub mod foundation;
pub mod ui;

pub mod driver;

pub use driver::{Driver, DriverError, WindowId, WindowRef};

/// Common imports for toolkit users
pub mod prelude {
    pub use crate::{
        core::config::{Config, DriverConfig, WindowConfig},
        driver::{Driver, DriverError, WindowId, WindowRef},
        ui::{
            input::{Focusable, KeyEvent, KeyModifiers},
            Canvas, CanvasObject, Container, Size, Window,
        },
    };
}
