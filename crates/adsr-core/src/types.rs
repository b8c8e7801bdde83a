//! Common types for the envelope editor
//!
//! Canvas-space primitives (points, sizes, colors) and the stage identifiers
//! shared by the layout solver, region builder and gesture mapper.
//! Canvas space has its origin at the top-left corner with y growing downward.

use serde::{Deserialize, Serialize};

/// Fixed top margin reserved so curve strokes near the ceiling are not clipped
pub const CEILING_BUFFER: f32 = 10.0;

/// Number of envelope stages (Attack, Decay, Sustain, Release)
pub const NUM_STAGES: usize = 4;

/// Intrinsic canvas size of the editor widget
pub const DEFAULT_CANVAS_SIZE: CanvasSize = CanvasSize {
    width: 440.0,
    height: 150.0,
};

/// A point in canvas space
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linear blend between `self` (weight `amount`) and `other` (weight `1 - amount`)
    #[inline]
    pub fn blend(self, other: Point, amount: f32) -> Point {
        Point {
            x: amount * self.x + (1.0 - amount) * other.x,
            y: amount * self.y + (1.0 - amount) * other.y,
        }
    }
}

/// Canvas dimensions
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    /// Create a new canvas size
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// RGBA color with components in 0.0-1.0
///
/// Kept renderer-neutral so the core crate does not depend on a UI toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Rgba = Rgba::rgb(0.0, 0.0, 0.0);

    /// Create a color from RGBA components
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB components
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// Envelope stages, in timeline order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Stage {
    Attack = 0,
    Decay = 1,
    Sustain = 2,
    Release = 3,
}

impl Stage {
    /// All stages in timeline order
    pub const ALL: [Stage; NUM_STAGES] = [Stage::Attack, Stage::Decay, Stage::Sustain, Stage::Release];

    /// Get the name of this stage
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Attack => "Attack",
            Stage::Decay => "Decay",
            Stage::Sustain => "Sustain",
            Stage::Release => "Release",
        }
    }
}
