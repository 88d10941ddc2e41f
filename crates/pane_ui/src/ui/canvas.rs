//! Canvas capability interface
//!
//! A canvas is the toolkit-side drawable surface and input-focus holder
//! associated with one window. The interface exposes exactly the
//! operations the driver's event adapters need (size, scale, refresh, and
//! the key-input accessors), so adapters never depend on a concrete
//! canvas implementation.

use crate::ui::input::{Focusable, KeyEvent};
use crate::ui::Size;

/// An object that can be placed on a canvas
///
/// The full widget model lives outside this crate; the driver only needs
/// something it can hold as content and query for a minimum size.
pub trait CanvasObject: std::fmt::Debug {
    /// The smallest logical size this object can be laid out in
    fn min_size(&self) -> Size {
        Size::ZERO
    }
}

/// An empty content container
///
/// The default content of every freshly created window.
#[derive(Debug, Default)]
pub struct Container;

impl CanvasObject for Container {}

/// Drawable surface owned by a window
pub trait Canvas {
    /// Current logical size (native pixels divided by the scale factor)
    fn size(&self) -> Size;

    /// Current scale factor
    fn scale(&self) -> f32;

    /// Apply a new scale factor
    ///
    /// Rescaling recomputes the logical size from the last known native
    /// geometry and refreshes the content, so scale-dependent layout
    /// follows automatically.
    fn set_scale(&mut self, scale: f32);

    /// The current content object
    fn content(&self) -> &dyn CanvasObject;

    /// Replace the content object and refresh
    fn set_content(&mut self, content: Box<dyn CanvasObject>);

    /// Request a full repaint of the content
    fn refresh(&mut self);

    /// Give key focus to a target
    ///
    /// The focused target receives every key event delivered to this
    /// canvas until another target takes focus or focus is cleared.
    fn focus(&mut self, target: Box<dyn Focusable>);

    /// Clear the key focus
    fn unfocus(&mut self);

    /// Check whether a focused target is set
    fn focused(&self) -> bool;

    /// Install a canvas-level key observer
    ///
    /// The observer fires for every key event delivered to this canvas,
    /// after the focused target (both may see the same event).
    fn set_on_key_down(&mut self, handler: Box<dyn FnMut(&KeyEvent)>);

    /// Remove the canvas-level key observer
    fn clear_on_key_down(&mut self);
}
