//! Editor configuration
//!
//! Tunables of the envelope editor (padding, drag sensitivity, colors, time
//! scale), stored as YAML. Every section uses `#[serde(default)]`, so a
//! partial file only overrides what it names. Values the layout or renderer
//! cannot use are repaired on load (see [`EditorConfig::sanitize`]).
//!
//! # Usage
//!
//! ```ignore
//! use adsr_core::config::{default_config_path, load_config, save_config};
//!
//! let path = default_config_path("adsr-designer");
//! let config = load_config(&path);
//! save_config(&config, &path)?;
//! ```

mod io;
mod paths;

pub use io::{load_config, save_config};
pub use paths::{app_config_dir, default_config_path, CONFIG_FILENAME};

use serde::{Deserialize, Serialize};

use crate::gesture::DEFAULT_DRAG_SLEW;
use crate::layout::LayoutConfig;
use crate::render::EnvelopeStyle;
use crate::units::TimeScale;

/// Root configuration of an envelope editor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Padding fractions around the envelope
    pub layout: LayoutConfig,
    /// Drag sensitivity in parameter units per pixel (lower is slower)
    pub drag_slew: f32,
    /// Colors, stroke width, gradient and marker flags
    pub style: EnvelopeStyle,
    /// Time scale for millisecond readouts
    pub time_scale: TimeScale,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            drag_slew: DEFAULT_DRAG_SLEW,
            style: EnvelopeStyle::default(),
            time_scale: TimeScale::default(),
        }
    }
}

/// A repaired config field and the value that replaced it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Repair {
    pub field: &'static str,
    pub was: f32,
    pub now: f32,
}

fn repair(field: &'static str, value: &mut f32, fixed: f32, repairs: &mut Vec<Repair>) {
    // NaN never compares equal, so a NaN field is always reported
    if *value != fixed {
        repairs.push(Repair {
            field,
            was: *value,
            now: fixed,
        });
        *value = fixed;
    }
}

fn positive_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

fn non_negative_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        fallback
    }
}

impl EditorConfig {
    /// Repair values the layout, gesture mapper or renderer cannot use
    ///
    /// Pads are clamped to `[0, MAX_PAD]`. A non-finite or non-positive drag
    /// slew or time scale, and a negative or non-finite stroke width or marker
    /// radius, fall back to the default. Returns what was changed.
    pub fn sanitize(&mut self) -> Vec<Repair> {
        let defaults = Self::default();
        let mut repairs = Vec::new();

        let layout = self.layout.sanitized();
        repair("layout.attack_pad", &mut self.layout.attack_pad, layout.attack_pad, &mut repairs);
        repair("layout.release_pad", &mut self.layout.release_pad, layout.release_pad, &mut repairs);

        let slew = positive_or(self.drag_slew, defaults.drag_slew);
        repair("drag_slew", &mut self.drag_slew, slew, &mut repairs);

        let pps = positive_or(self.time_scale.pixels_per_second, defaults.time_scale.pixels_per_second);
        repair("time_scale.pixels_per_second", &mut self.time_scale.pixels_per_second, pps, &mut repairs);

        let stroke = non_negative_or(self.style.curve_stroke_width, defaults.style.curve_stroke_width);
        repair("style.curve_stroke_width", &mut self.style.curve_stroke_width, stroke, &mut repairs);

        let radius = non_negative_or(self.style.marker_radius, defaults.style.marker_radius);
        repair("style.marker_radius", &mut self.style.marker_radius, radius, &mut repairs);

        repairs
    }
}
