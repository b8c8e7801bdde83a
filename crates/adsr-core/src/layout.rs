//! Layout solver
//!
//! Converts normalized envelope parameters into canvas-space anchor points
//! and cubic Bezier control points for a given canvas size.
//!
//! ## Width budget
//!
//! ```text
//! |pad| attack | decay |  sustain  | release |pad|
//! 0   ^        ^       ^           ^         ^   width
//!     initial  high    sustain     release   end
//! ```
//!
//! Attack, decay and release each get at most `section_max` pixels. The
//! divisor 3.3 (not 3.0) keeps the sustain plateau from collapsing even when
//! the other three stages are at their maximum.

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};
use crate::params::EnvelopeParameters;
use crate::types::{CanvasSize, Point, CEILING_BUFFER};

/// Divisor splitting the unpadded width into per-stage budgets
pub const SECTION_DIVISOR: f32 = 3.3;

/// Largest padding fraction accepted on either side
///
/// Two pads at this limit still leave the zones non-overlapping.
pub const MAX_PAD: f32 = 0.45;

/// Layout configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Fraction of canvas width left before the attack so it stays draggable at amount 0
    pub attack_pad: f32,
    /// Fraction of canvas width left after the release
    pub release_pad: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            attack_pad: 0.06,
            release_pad: 0.01,
        }
    }
}

impl LayoutConfig {
    /// Pads clamped to `[0, MAX_PAD]`; non-finite pads fall back to their defaults
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        Self {
            attack_pad: sanitize_pad(self.attack_pad, defaults.attack_pad),
            release_pad: sanitize_pad(self.release_pad, defaults.release_pad),
        }
    }
}

fn sanitize_pad(pad: f32, fallback: f32) -> f32 {
    if pad.is_finite() {
        pad.clamp(0.0, MAX_PAD)
    } else {
        fallback
    }
}

/// Solved envelope geometry for one canvas size and parameter set
///
/// Recomputed on every layout pass and never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasGeometry {
    pub size: CanvasSize,
    /// Top margin (y of every ceiling projection)
    pub buffer: f32,
    pub attack_click_room: f32,
    pub release_click_room: f32,
    pub end_point_max: f32,
    pub section_max: f32,

    /// Start of the attack, on the canvas bottom
    pub initial: Point,
    /// End of the attack / start of the decay, on the ceiling
    pub high_point: Point,
    /// End of the decay / start of the sustain plateau
    pub sustain_point: Point,
    /// End of the sustain plateau / start of the release
    pub release_point: Point,
    /// End of the release, on the canvas bottom
    pub end_point: Point,

    pub attack_control: Point,
    pub decay_control: Point,
    pub release_control: Point,
}

impl CanvasGeometry {
    /// Project a point onto the canvas bottom (same x)
    #[inline]
    pub fn axis(&self, point: Point) -> Point {
        Point::new(point.x, self.size.height)
    }

    /// Project a point onto the ceiling (same x, top-margin y)
    #[inline]
    pub fn ceiling(&self, point: Point) -> Point {
        Point::new(point.x, self.buffer)
    }

    /// Stage-boundary anchors in timeline order
    pub fn anchors(&self) -> [Point; 5] {
        [
            self.initial,
            self.high_point,
            self.sustain_point,
            self.release_point,
            self.end_point,
        ]
    }
}

/// Per-stage width budget in pixels for a canvas width
///
/// Pads are sanitized first. Returns 0 for an empty canvas.
pub fn section_max(width: f32, config: &LayoutConfig) -> f32 {
    let config = config.sanitized();
    (width * (1.0 - config.attack_pad - config.release_pad) / SECTION_DIVISOR)
        .floor()
        .max(0.0)
}

/// Y coordinate of the sustain plateau
///
/// Higher sustain means nearer the ceiling (smaller y).
pub fn sustain_y(sustain: f32, height: f32) -> f32 {
    ((1.0 - sustain) * (height - CEILING_BUFFER) + CEILING_BUFFER).floor()
}

/// Solve the envelope geometry for a canvas size
///
/// Pure: identical inputs always produce identical output. Canvases that
/// cannot hold an envelope below the ceiling buffer are rejected so the
/// caller can keep its previous geometry. Out-of-range pads are clamped
/// through [`LayoutConfig::sanitized`].
pub fn solve(
    size: CanvasSize,
    params: &EnvelopeParameters,
    config: &LayoutConfig,
) -> LayoutResult<CanvasGeometry> {
    let CanvasSize { width, height } = size;
    if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= CEILING_BUFFER {
        return Err(LayoutError::DegenerateCanvas { width, height });
    }

    let config = &config.sanitized();
    let buffer = CEILING_BUFFER;
    let attack_click_room = (config.attack_pad * width).floor();
    let release_click_room = (config.release_pad * width).floor();
    let end_point_max = width - release_click_room;
    let section_max = section_max(width, config);

    let attack_size = (params.attack() * section_max).floor();
    let decay_size = (params.decay() * section_max).floor();
    let release_size = (params.release() * section_max).floor();

    let plateau_y = sustain_y(params.sustain(), height);

    let initial = Point::new(attack_click_room, height);
    let high_point = Point::new(attack_click_room + attack_size, buffer);
    let release_point = Point::new(end_point_max - section_max, plateau_y);
    let sustain_point = Point::new(
        high_point.x.max(attack_click_room + attack_size + decay_size),
        plateau_y,
    );
    let end_point = Point::new(end_point_max.min(release_point.x + release_size), height);

    // Full-bend corners: source anchor's x, target anchor's y
    let attack_corner = Point::new(initial.x, high_point.y);
    let decay_corner = Point::new(high_point.x, sustain_point.y);
    let release_corner = Point::new(release_point.x, end_point.y);

    Ok(CanvasGeometry {
        size,
        buffer,
        attack_click_room,
        release_click_room,
        end_point_max,
        section_max,
        initial,
        high_point,
        sustain_point,
        release_point,
        end_point,
        attack_control: attack_corner.blend(initial, params.attack_curve()),
        decay_control: decay_corner.blend(high_point, params.decay_curve()),
        release_control: release_corner.blend(release_point, params.release_curve()),
    })
}
