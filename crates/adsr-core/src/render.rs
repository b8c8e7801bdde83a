//! Render description
//!
//! Backend-neutral list of what to paint for one layout pass: stage fills
//! (back to front), the envelope stroke and optional anchor markers. A
//! renderer only has to understand [`Shape`] commands and [`Paint`].

use serde::{Deserialize, Serialize};

use crate::layout::CanvasGeometry;
use crate::regions::{envelope_curve, FillPaths, Shape};
use crate::types::{Point, Rgba, Stage};

/// Painting order of the stage fills
pub const FILL_ORDER: [Stage; 4] = [Stage::Release, Stage::Sustain, Stage::Decay, Stage::Attack];

/// Per-stage fill colors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageColors {
    pub attack: Rgba,
    pub decay: Rgba,
    pub sustain: Rgba,
    pub release: Rgba,
}

impl Default for StageColors {
    fn default() -> Self {
        Self {
            attack: Rgba::rgb(0.259, 0.757, 0.969),
            decay: Rgba::rgb(0.176, 0.498, 0.757),
            sustain: Rgba::rgb(0.059, 0.180, 0.247),
            release: Rgba::rgb(0.475, 0.839, 0.976),
        }
    }
}

impl StageColors {
    /// Same color for every stage
    pub fn uniform(color: Rgba) -> Self {
        Self {
            attack: color,
            decay: color,
            sustain: color,
            release: color,
        }
    }

    pub fn stage(&self, stage: Stage) -> Rgba {
        match stage {
            Stage::Attack => self.attack,
            Stage::Decay => self.decay,
            Stage::Sustain => self.sustain,
            Stage::Release => self.release,
        }
    }
}

/// Visual style of the envelope
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvelopeStyle {
    pub colors: StageColors,
    pub background: Rgba,
    pub curve_color: Rgba,
    pub curve_stroke_width: f32,
    /// Fade each stage fill from its color at the ceiling to the background at the bottom
    pub gradient: bool,
    /// Draw dots on the stage-boundary anchors
    pub show_markers: bool,
    pub marker_radius: f32,
    pub marker_color: Rgba,
}

impl Default for EnvelopeStyle {
    fn default() -> Self {
        Self {
            colors: StageColors::default(),
            background: Rgba::TRANSPARENT,
            curve_color: Rgba::BLACK,
            curve_stroke_width: 2.0,
            gradient: false,
            show_markers: false,
            marker_radius: 3.0,
            marker_color: Rgba::rgb(1.0, 1.0, 1.0),
        }
    }
}

/// How a fill region is painted
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    /// Vertical gradient from `top` at `from` to `bottom` at `to`
    Gradient {
        from: Point,
        to: Point,
        top: Rgba,
        bottom: Rgba,
    },
}

/// One filled stage region
#[derive(Debug, Clone, PartialEq)]
pub struct FillRegion {
    pub stage: Stage,
    pub shape: Shape,
    pub paint: Paint,
}

/// The envelope stroke
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePath {
    pub shape: Shape,
    pub color: Rgba,
    pub width: f32,
}

/// Anchor marker dot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub center: Point,
    pub radius: f32,
    pub color: Rgba,
}

/// Everything a renderer needs to paint one frame
#[derive(Debug, Clone, PartialEq)]
pub struct RenderDescription {
    pub background: Rgba,
    pub fills: Vec<FillRegion>,
    pub curve: StrokePath,
    pub markers: Vec<Marker>,
}

/// Describe a frame from solved geometry and its fill paths
pub fn describe(geometry: &CanvasGeometry, fills: &FillPaths, style: &EnvelopeStyle) -> RenderDescription {
    let top = Point::new(0.0, geometry.buffer);
    let bottom = Point::new(0.0, geometry.size.height);

    let fills = FILL_ORDER
        .iter()
        .map(|&stage| {
            let color = style.colors.stage(stage);
            let paint = if style.gradient {
                Paint::Gradient {
                    from: top,
                    to: bottom,
                    top: color,
                    bottom: style.background,
                }
            } else {
                Paint::Solid(color)
            };
            FillRegion {
                stage,
                shape: fills.stage(stage).clone(),
                paint,
            }
        })
        .collect();

    let markers = if style.show_markers {
        geometry
            .anchors()
            .iter()
            .map(|&center| Marker {
                center,
                radius: style.marker_radius,
                color: style.marker_color,
            })
            .collect()
    } else {
        Vec::new()
    };

    RenderDescription {
        background: style.background,
        fills,
        curve: StrokePath {
            shape: envelope_curve(geometry),
            color: style.curve_color,
            width: style.curve_stroke_width,
        },
        markers,
    }
}
