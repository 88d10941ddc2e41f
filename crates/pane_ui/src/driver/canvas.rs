//! Driver-side canvas implementation
//!
//! Holds the per-window drawing state the event adapters mutate: logical
//! size, scale factor, content, key focus, and the repaint bookkeeping
//! the event loop drains once per pass.

use crate::ui::canvas::{Canvas, CanvasObject, Container};
use crate::ui::input::{Focusable, KeyEvent};
use crate::ui::Size;

/// Canvas associated with one driver window
pub struct WindowCanvas {
    logical_size: Size,
    pixel_size: (u32, u32),
    scale: f32,
    content: Box<dyn CanvasObject>,
    focused: Option<Box<dyn Focusable>>,
    on_key_down: Option<Box<dyn FnMut(&KeyEvent)>>,
    dirty: bool,
    repaints: u64,
}

impl WindowCanvas {
    /// New canvas with unit scale and empty content
    pub(crate) fn new() -> Self {
        Self {
            logical_size: Size::ZERO,
            pixel_size: (0, 0),
            scale: 1.0,
            content: Box::new(Container),
            focused: None,
            on_key_down: None,
            dirty: false,
            repaints: 0,
        }
    }

    /// Apply a new native pixel geometry
    ///
    /// Stores the pixel size, derives the logical size from the current
    /// scale, and refreshes the content exactly once.
    pub(crate) fn resize_pixels(&mut self, width: u32, height: u32) {
        self.pixel_size = (width, height);
        self.logical_size = logical_size(self.pixel_size, self.scale);
        self.refresh();
    }

    /// Whether any key-event sink is installed
    pub(crate) fn has_key_interest(&self) -> bool {
        self.focused.is_some() || self.on_key_down.is_some()
    }

    /// Deliver a key event to the focused target, then to the observer
    ///
    /// Both sinks may fire for the same event.
    pub(crate) fn deliver_key(&mut self, event: &KeyEvent) {
        if let Some(focused) = self.focused.as_mut() {
            focused.on_key_down(event);
        }
        if let Some(handler) = self.on_key_down.as_mut() {
            handler(event);
        }
    }

    /// Clear the dirty flag, reporting whether a repaint was pending
    pub(crate) fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Number of refreshes requested so far
    pub fn repaint_count(&self) -> u64 {
        self.repaints
    }
}

impl Canvas for WindowCanvas {
    fn size(&self) -> Size {
        self.logical_size
    }

    fn scale(&self) -> f32 {
        self.scale
    }

    fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
        // Rescaling relayouts: the same native geometry maps to a new
        // logical size, and the content must repaint at the new density.
        self.logical_size = logical_size(self.pixel_size, self.scale);
        self.refresh();
    }

    fn content(&self) -> &dyn CanvasObject {
        self.content.as_ref()
    }

    fn set_content(&mut self, content: Box<dyn CanvasObject>) {
        self.content = content;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.dirty = true;
        self.repaints += 1;
    }

    fn focus(&mut self, target: Box<dyn Focusable>) {
        self.focused = Some(target);
    }

    fn unfocus(&mut self) {
        self.focused = None;
    }

    fn focused(&self) -> bool {
        self.focused.is_some()
    }

    fn set_on_key_down(&mut self, handler: Box<dyn FnMut(&KeyEvent)>) {
        self.on_key_down = Some(handler);
    }

    fn clear_on_key_down(&mut self) {
        self.on_key_down = None;
    }
}

/// Native pixels divided by the scale factor
fn logical_size(pixel_size: (u32, u32), scale: f32) -> Size {
    Size::new(pixel_size.0 as f32 / scale, pixel_size.1 as f32 / scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::input::KeyModifiers;
    use std::cell::Cell;
    use std::rc::Rc;

    fn key_event() -> KeyEvent {
        KeyEvent {
            string: "a".to_string(),
            name: "A".to_string(),
            code: 38,
            modifiers: KeyModifiers::empty(),
        }
    }

    struct CountingTarget(Rc<Cell<u32>>);

    impl Focusable for CountingTarget {
        fn on_key_down(&mut self, _event: &KeyEvent) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn resize_divides_pixels_by_scale() {
        let mut canvas = WindowCanvas::new();
        canvas.set_scale(2.0);
        canvas.resize_pixels(800, 600);

        assert_eq!(canvas.size(), Size::new(400.0, 300.0));
    }

    #[test]
    fn resize_refreshes_exactly_once() {
        let mut canvas = WindowCanvas::new();
        let before = canvas.repaint_count();
        canvas.resize_pixels(640, 480);

        assert_eq!(canvas.repaint_count(), before + 1);
        assert!(canvas.take_dirty());
        assert!(!canvas.take_dirty());
    }

    #[test]
    fn rescale_recomputes_logical_size() {
        let mut canvas = WindowCanvas::new();
        canvas.resize_pixels(900, 600);
        assert_eq!(canvas.size(), Size::new(900.0, 600.0));

        canvas.set_scale(1.5);
        assert_eq!(canvas.size(), Size::new(600.0, 400.0));
    }

    #[test]
    fn key_delivery_reaches_focused_target_and_observer() {
        let mut canvas = WindowCanvas::new();
        let focused_hits = Rc::new(Cell::new(0));
        let observer_hits = Rc::new(Cell::new(0));

        canvas.focus(Box::new(CountingTarget(focused_hits.clone())));
        let observed = observer_hits.clone();
        canvas.set_on_key_down(Box::new(move |_| observed.set(observed.get() + 1)));

        assert!(canvas.has_key_interest());
        canvas.deliver_key(&key_event());

        assert_eq!(focused_hits.get(), 1);
        assert_eq!(observer_hits.get(), 1);
    }

    #[test]
    fn key_delivery_with_single_sink() {
        let mut canvas = WindowCanvas::new();
        let hits = Rc::new(Cell::new(0));
        canvas.focus(Box::new(CountingTarget(hits.clone())));

        canvas.deliver_key(&key_event());
        assert_eq!(hits.get(), 1);

        canvas.unfocus();
        assert!(!canvas.has_key_interest());
    }

    #[test]
    fn no_sinks_means_no_key_interest() {
        let mut canvas = WindowCanvas::new();
        assert!(!canvas.has_key_interest());

        canvas.set_on_key_down(Box::new(|_| {}));
        assert!(canvas.has_key_interest());

        canvas.clear_on_key_down();
        assert!(!canvas.has_key_interest());
    }

    #[test]
    fn set_content_refreshes() {
        let mut canvas = WindowCanvas::new();
        let before = canvas.repaint_count();
        canvas.set_content(Box::new(Container));

        assert_eq!(canvas.repaint_count(), before + 1);
    }
}
