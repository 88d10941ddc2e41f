//! DPI-derived scale factor heuristic
//!
//! The scale factor applied to new and moved windows is chosen from the
//! horizontal DPI of the primary monitor, unless the override environment
//! variable pins it to an explicit value.

/// Environment variable overriding the DPI heuristic
///
/// When set to a parseable number the value is used as the scale factor
/// directly; DPI is not queried at all. Intended for manual tuning and
/// testing.
pub const SCALE_ENV_VAR: &str = "PANE_SCALE";

const MM_PER_INCH: f32 = 25.4;
const FALLBACK_DPI: f32 = 96.0;

/// Scale factor for the current environment and primary monitor
pub(crate) fn scale_by_dpi(glfw: &mut glfw::Glfw) -> f32 {
    let env_override = std::env::var(SCALE_ENV_VAR).ok();
    scale_for(env_override.as_deref(), primary_monitor_dpi(glfw))
}

/// Pick a scale factor from an optional override and a measured DPI
///
/// An unparseable override falls through to the DPI thresholds.
pub(crate) fn scale_for(env_override: Option<&str>, dpi: f32) -> f32 {
    if let Some(raw) = env_override {
        if let Ok(scale) = raw.trim().parse::<f32>() {
            return scale;
        }
        log::warn!("ignoring unparseable {SCALE_ENV_VAR} value {raw:?}");
    }

    if dpi > 250.0 {
        1.5
    } else if dpi > 120.0 {
        1.2
    } else {
        1.0
    }
}

/// Horizontal DPI of the primary monitor
///
/// Falls back to 96 DPI when no monitor is connected or the monitor does
/// not report a physical size.
fn primary_monitor_dpi(glfw: &mut glfw::Glfw) -> f32 {
    glfw.with_primary_monitor(|_, monitor| {
        monitor
            .and_then(|monitor| {
                let (width_mm, _) = monitor.get_physical_size();
                if width_mm <= 0 {
                    return None;
                }
                let mode = monitor.get_video_mode()?;
                Some(mode.width as f32 / (width_mm as f32 / MM_PER_INCH))
            })
            .unwrap_or(FALLBACK_DPI)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_dpi_maps_to_unit_scale() {
        assert_eq!(scale_for(None, 72.0), 1.0);
        assert_eq!(scale_for(None, 96.0), 1.0);
        assert_eq!(scale_for(None, 120.0), 1.0);
    }

    #[test]
    fn medium_dpi_maps_to_1_2() {
        assert_eq!(scale_for(None, 121.0), 1.2);
        assert_eq!(scale_for(None, 200.0), 1.2);
        assert_eq!(scale_for(None, 250.0), 1.2);
    }

    #[test]
    fn high_dpi_maps_to_1_5() {
        assert_eq!(scale_for(None, 251.0), 1.5);
        assert_eq!(scale_for(None, 400.0), 1.5);
    }

    #[test]
    fn override_wins_regardless_of_dpi() {
        assert_eq!(scale_for(Some("2.5"), 72.0), 2.5);
        assert_eq!(scale_for(Some("0.8"), 400.0), 0.8);
        assert_eq!(scale_for(Some(" 1.4 "), 300.0), 1.4);
    }

    #[test]
    fn unparseable_override_falls_through_to_dpi() {
        assert_eq!(scale_for(Some("huge"), 300.0), 1.5);
        assert_eq!(scale_for(Some(""), 96.0), 1.0);
    }
}
