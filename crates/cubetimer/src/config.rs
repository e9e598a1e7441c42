//! Application configuration.
//!
//! Plain structs with defaults; there is no config file.

use std::path::PathBuf;

use cubetimer_engine::coords::Vec2;
use cubetimer_engine::device::GpuInit;
use cubetimer_engine::input::Key;
use cubetimer_engine::paint::Color;
use cubetimer_engine::window::{LogicalSize, RuntimeConfig};

use crate::store::FileStore;

/// Common monospace system fonts, tried in order.
const MONOSPACE_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu-sans-mono-fonts/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/usr/share/fonts/liberation-mono/LiberationMono-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSansMono-Regular.ttf",
    "/usr/share/fonts/noto/NotoSansMono-Regular.ttf",
    "/System/Library/Fonts/Menlo.ttc",
    "C:\\Windows\\Fonts\\consola.ttf",
];

/// Layout and colours of the timer screen.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayStyle {
    pub background: Color,
    pub text_color: Color,
    /// Size of the centred `MM:SS.mmm` display.
    pub timer_size: f32,
    /// Size of the state and best-time lines.
    pub status_size: f32,
    /// Top-left corner of the state line.
    pub status_origin: Vec2,
    /// Vertical distance from the state line to the best-time line.
    pub status_line_spacing: f32,
}

impl Default for DisplayStyle {
    fn default() -> Self {
        Self {
            background: Color::from_rgb_u8(234, 234, 234),
            text_color: Color::BLACK,
            timer_size: 96.0,
            status_size: 24.0,
            status_origin: Vec2::new(5.0, 5.0),
            status_line_spacing: 24.0,
        }
    }
}

/// Behaviour of the timer controller.
#[derive(Debug, Clone, PartialEq)]
pub struct TimerConfig {
    /// The single key that primes, starts and stops the timer.
    pub trigger: Key,
    pub display: DisplayStyle,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            trigger: Key::Space,
            display: DisplayStyle::default(),
        }
    }
}

/// Everything `app::run` needs.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub window: RuntimeConfig,
    pub gpu: GpuInit,
    pub timer: TimerConfig,
    /// Location of the best-time record.
    pub save_path: PathBuf,
    /// Font candidates; the first one that loads is used.
    pub font_paths: Vec<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: RuntimeConfig {
                title: "Speed Cube Timer".to_string(),
                initial_size: LogicalSize::new(800.0, 600.0),
                resizable: true,
            },
            gpu: GpuInit::default(),
            timer: TimerConfig::default(),
            save_path: FileStore::default_path(),
            font_paths: MONOSPACE_FONTS.iter().map(PathBuf::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_layout() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.window.title, "Speed Cube Timer");
        assert_eq!(cfg.window.initial_size, LogicalSize::new(800.0, 600.0));
        assert_eq!(cfg.timer.trigger, Key::Space);
        assert_eq!(cfg.timer.display.status_origin, Vec2::new(5.0, 5.0));
        assert!(cfg.save_path.ends_with(".best_cube_time.txt"));
        assert!(!cfg.font_paths.is_empty());
    }

    #[test]
    fn background_shows_as_234_grey_on_srgb_surface() {
        let bg = DisplayStyle::default().background;
        assert_eq!(bg.r, bg.g);
        assert_eq!(bg.g, bg.b);
        assert_eq!(bg.a, 1.0);

        // The surface applies the sRGB encode to the linear clear value.
        let linear = bg.to_wgpu().r;
        let shown = (1.055 * linear.powf(1.0 / 2.4) - 0.055) * 255.0;
        assert_eq!(shown.round(), 234.0);
    }
}
