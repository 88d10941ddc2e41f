//! Event adapters translating native events into toolkit events
//!
//! The native event loop invokes these; nothing else does. Each adapter
//! resolves its window handle through the registry and tolerates firing
//! at any time between window creation and teardown. Lookup misses are
//! logged and the event is dropped: native events carry no error channel,
//! so there is nothing to propagate and no retry.

use log::{debug, warn};

use crate::driver::{scale, Driver, WindowId};
use crate::ui::canvas::Canvas;
use crate::ui::input::{KeyEvent, KeyModifiers};

impl Driver {
    /// Native framebuffer resize
    ///
    /// Reads the new pixel geometry from the native window and pushes the
    /// derived logical size into the canvas, refreshing its content once.
    pub(crate) fn on_resize(&mut self, id: WindowId) {
        let Some(record) = self.registry.get_mut(id) else {
            warn!("resize event for unregistered window");
            return;
        };

        let (width, height) = record.native.framebuffer_size();
        record.canvas.resize_pixels(width, height);
    }

    /// Native window move
    ///
    /// Moving can land the window on a monitor with a different pixel
    /// density, so the scale factor is recomputed and applied when it
    /// changed.
    pub(crate) fn on_move(&mut self, id: WindowId) {
        let new_scale = scale::scale_by_dpi(&mut self.glfw);

        let Some(record) = self.registry.get_mut(id) else {
            warn!("move event for unregistered window");
            return;
        };

        if (new_scale - record.canvas.scale()).abs() > f32::EPSILON {
            debug!("window {id:?} scale changed to {new_scale}");
            record.canvas.set_scale(new_scale);
        }
    }

    /// Native close request (window button, Alt+F4, and similar)
    pub(crate) fn on_close(&mut self, id: WindowId) {
        if !self.registry.contains_key(id) {
            warn!("close event for unregistered window");
            return;
        }
        self.close_window(id);
    }

    /// Native key press
    ///
    /// Events without a window, or for a window that is no longer
    /// registered, are logged and dropped. The key event is only built
    /// when the canvas has someone to deliver it to: a focused target, a
    /// key observer, or both.
    pub(crate) fn on_key_down(
        &mut self,
        id: Option<WindowId>,
        key: glfw::Key,
        scancode: glfw::Scancode,
        mods: glfw::Modifiers,
    ) {
        let Some(id) = id else {
            warn!("keystroke missing window");
            return;
        };
        let Some(record) = self.registry.get_mut(id) else {
            warn!("keystroke for unregistered window");
            return;
        };

        if !record.canvas.has_key_interest() {
            return;
        }

        let event = KeyEvent {
            string: printable_string(key, mods),
            name: key_name(key),
            code: scancode,
            modifiers: translate_modifiers(mods),
        };
        record.canvas.deliver_key(&event);
    }
}

/// Translate native modifier bitflags into toolkit modifier flags
pub(crate) fn translate_modifiers(native: glfw::Modifiers) -> KeyModifiers {
    let mut modifiers = KeyModifiers::empty();
    if native.contains(glfw::Modifiers::Shift) {
        modifiers |= KeyModifiers::SHIFT;
    }
    if native.contains(glfw::Modifiers::Control) {
        modifiers |= KeyModifiers::CONTROL;
    }
    if native.contains(glfw::Modifiers::Alt) {
        modifiers |= KeyModifiers::ALT;
    }
    modifiers
}

/// Symbolic name of a native key
pub(crate) fn key_name(key: glfw::Key) -> String {
    format!("{key:?}")
}

/// Printable text for a native key, empty for non-printing keys
///
/// Covers the layout-independent ASCII range; shift only affects letter
/// case. Full text input would come from native character events, which
/// this driver does not consume.
pub(crate) fn printable_string(key: glfw::Key, mods: glfw::Modifiers) -> String {
    use glfw::Key;

    let base = match key {
        Key::Space => Some(' '),
        Key::Apostrophe => Some('\''),
        Key::Comma => Some(','),
        Key::Minus => Some('-'),
        Key::Period => Some('.'),
        Key::Slash => Some('/'),
        Key::Semicolon => Some(';'),
        Key::Equal => Some('='),
        Key::LeftBracket => Some('['),
        Key::Backslash => Some('\\'),
        Key::RightBracket => Some(']'),
        Key::GraveAccent => Some('`'),
        Key::Num0 => Some('0'),
        Key::Num1 => Some('1'),
        Key::Num2 => Some('2'),
        Key::Num3 => Some('3'),
        Key::Num4 => Some('4'),
        Key::Num5 => Some('5'),
        Key::Num6 => Some('6'),
        Key::Num7 => Some('7'),
        Key::Num8 => Some('8'),
        Key::Num9 => Some('9'),
        Key::A => Some('a'),
        Key::B => Some('b'),
        Key::C => Some('c'),
        Key::D => Some('d'),
        Key::E => Some('e'),
        Key::F => Some('f'),
        Key::G => Some('g'),
        Key::H => Some('h'),
        Key::I => Some('i'),
        Key::J => Some('j'),
        Key::K => Some('k'),
        Key::L => Some('l'),
        Key::M => Some('m'),
        Key::N => Some('n'),
        Key::O => Some('o'),
        Key::P => Some('p'),
        Key::Q => Some('q'),
        Key::R => Some('r'),
        Key::S => Some('s'),
        Key::T => Some('t'),
        Key::U => Some('u'),
        Key::V => Some('v'),
        Key::W => Some('w'),
        Key::X => Some('x'),
        Key::Y => Some('y'),
        Key::Z => Some('z'),
        _ => None,
    };

    match base {
        Some(c) if c.is_ascii_alphabetic() && mods.contains(glfw::Modifiers::Shift) => {
            c.to_ascii_uppercase().to_string()
        }
        Some(c) => c.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_flags_translate_independently() {
        assert_eq!(
            translate_modifiers(glfw::Modifiers::Shift),
            KeyModifiers::SHIFT
        );
        assert_eq!(
            translate_modifiers(glfw::Modifiers::Control),
            KeyModifiers::CONTROL
        );
        assert_eq!(translate_modifiers(glfw::Modifiers::Alt), KeyModifiers::ALT);
    }

    #[test]
    fn modifier_flags_combine() {
        let native = glfw::Modifiers::Shift | glfw::Modifiers::Control;
        let translated = translate_modifiers(native);

        assert!(translated.contains(KeyModifiers::SHIFT));
        assert!(translated.contains(KeyModifiers::CONTROL));
        assert!(!translated.contains(KeyModifiers::ALT));
    }

    #[test]
    fn unmapped_native_modifiers_are_ignored() {
        assert_eq!(
            translate_modifiers(glfw::Modifiers::Super),
            KeyModifiers::empty()
        );
    }

    #[test]
    fn letters_respect_shift_case() {
        assert_eq!(printable_string(glfw::Key::A, glfw::Modifiers::empty()), "a");
        assert_eq!(printable_string(glfw::Key::A, glfw::Modifiers::Shift), "A");
    }

    #[test]
    fn non_printing_keys_produce_empty_strings() {
        assert_eq!(
            printable_string(glfw::Key::Escape, glfw::Modifiers::empty()),
            ""
        );
        assert_eq!(printable_string(glfw::Key::F5, glfw::Modifiers::empty()), "");
    }

    #[test]
    fn key_names_are_symbolic() {
        assert_eq!(key_name(glfw::Key::Escape), "Escape");
        assert_eq!(key_name(glfw::Key::Num7), "Num7");
    }
}
