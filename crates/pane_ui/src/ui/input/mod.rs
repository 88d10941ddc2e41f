//! Input value types delivered to applications

use bitflags::bitflags;

bitflags! {
    /// Modifier keys held during an input event
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct KeyModifiers: u8 {
        /// Shift key
        const SHIFT = 1;
        /// Control key
        const CONTROL = 1 << 1;
        /// Alt key
        const ALT = 1 << 2;
    }
}

/// A key press event
///
/// Built per native key callback and delivered to the focused target and
/// the canvas observer. Not persisted anywhere.
#[derive(Debug, Clone)]
pub struct KeyEvent {
    /// Printable text for the key, empty for non-printing keys
    pub string: String,

    /// Symbolic key name, such as `"Escape"` or `"A"`
    pub name: String,

    /// Platform key code reported by the native library
    pub code: i32,

    /// Modifier keys held when the key went down
    pub modifiers: KeyModifiers,
}

/// A key-event sink that can hold the canvas focus
pub trait Focusable {
    /// Handle a key press while focused
    fn on_key_down(&mut self, event: &KeyEvent);
}
