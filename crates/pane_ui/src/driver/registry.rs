//! Window registry
//!
//! Maps opaque window handles to live window records. The registry is
//! owned by the driver instance, so independent drivers (for example in
//! tests) never share state.

use slotmap::{new_key_type, SlotMap};

use crate::driver::canvas::WindowCanvas;
use crate::driver::native::{NativeWindow, WindowedGeometry};

new_key_type! {
    /// Opaque handle identifying one window
    ///
    /// This is the single canonical window identifier: applications hold
    /// it, and every event adapter resolves it through the registry.
    /// Handles of closed windows simply miss the registry; they are never
    /// reused for a different window.
    pub struct WindowId;
}

/// Registry mapping handles to live window records
///
/// Invariant: every live native window has exactly one entry, and every
/// entry corresponds to a live native window. Entries are inserted
/// synchronously at creation and removed at close.
pub(crate) type WindowRegistry = SlotMap<WindowId, WindowRecord>;

/// Per-window driver state
pub(crate) struct WindowRecord {
    /// The native window behind this record
    pub native: NativeWindow,

    /// The toolkit-side canvas, owned exclusively by this record
    pub canvas: WindowCanvas,

    /// Cached title, kept in sync by `set_title`
    pub title: String,

    /// Cached fullscreen flag, kept in sync by `set_fullscreen`
    pub fullscreen: bool,

    /// Windowed geometry saved while fullscreen
    pub windowed_geometry: Option<WindowedGeometry>,

    /// Whether this is the master window; closing it quits the driver
    pub master: bool,
}

impl WindowRecord {
    pub fn new(native: NativeWindow, title: &str) -> Self {
        Self {
            native,
            canvas: WindowCanvas::new(),
            title: title.to_string(),
            fullscreen: false,
            windowed_geometry: None,
            master: false,
        }
    }
}
