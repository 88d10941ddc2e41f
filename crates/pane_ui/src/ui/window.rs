//! Window capability interface
//!
//! The contract between applications and a windowing driver. A driver
//! hands out values implementing [`Window`]; applications never see the
//! native windowing library behind it.

use crate::ui::canvas::Canvas;

/// Driver-backed window
///
/// All operations act on the live native window. Operations on a window
/// that has already been closed are logged and ignored rather than
/// propagated, since the native event path they would feed carries no
/// error channel.
pub trait Window {
    /// Get the current window title
    fn title(&self) -> String;

    /// Set the window title text shown in the title bar
    fn set_title(&mut self, title: &str);

    /// Check whether the window is in fullscreen mode
    fn fullscreen(&self) -> bool;

    /// Switch between fullscreen and windowed mode
    ///
    /// Entering fullscreen saves the windowed geometry; leaving it
    /// restores the saved geometry.
    fn set_fullscreen(&mut self, fullscreen: bool);

    /// Make the window visible
    ///
    /// The first window shown becomes the master window: closing it later
    /// tears down the whole application.
    fn show(&mut self);

    /// Make the window invisible without destroying it
    fn hide(&mut self);

    /// Close the window
    ///
    /// Closing the master window, or the last remaining window, stops the
    /// driver's event loop. Closing any other window only removes it,
    /// leaving the remaining windows running.
    fn close(&mut self);

    /// Get the window's drawable canvas
    ///
    /// The canvas reference is stable for the lifetime of the window.
    fn canvas(&mut self) -> &mut dyn Canvas;

    /// Get the current window size in native pixels
    fn size(&self) -> (u32, u32);

    /// Set the window size in native pixels
    fn set_size(&mut self, width: u32, height: u32);

    /// Get the window position on screen
    fn position(&self) -> (i32, i32);

    /// Set the window position on screen
    fn set_position(&mut self, x: i32, y: i32);
}
