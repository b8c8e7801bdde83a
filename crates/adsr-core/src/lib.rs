//! ADSR Core - Geometry engine for draggable envelope editors
//!
//! Converts normalized Attack/Decay/Sustain/Release parameters into
//! canvas-space geometry, and pointer drags back into parameter changes.
//! Nothing here depends on a UI toolkit; renderers consume the
//! [`render::RenderDescription`].
//!
//! ## Pipeline
//!
//! ```text
//! pointer events ─▶ gesture ─▶ params ─▶ layout::solve ─▶ regions::build ─▶ render::describe
//!                     ▲                                        │
//!                     └──────────── hit regions ◀──────────────┘
//! ```

pub mod config;
pub mod editor;
pub mod error;
pub mod gesture;
pub mod layout;
pub mod params;
pub mod regions;
pub mod render;
pub mod types;
pub mod units;

pub use editor::{EnvelopeEditor, EnvelopeLayout};
pub use error::{LayoutError, LayoutResult};
pub use gesture::{DragState, GestureMapper, DEFAULT_DRAG_SLEW};
pub use layout::{solve, CanvasGeometry, LayoutConfig};
pub use params::{AdsrValues, EnvelopeParameters};
pub use regions::{HitRegions, HitZone, PathCommand, Shape};
pub use render::{EnvelopeStyle, Paint, RenderDescription};
pub use types::*;
