//! iced widgets for ADSR envelope editing
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! - **State**: parameters and config are owned by the application
//! - **View functions**: take state + callbacks, return `Element<Message>`
//! - **Canvas Program**: renders the envelope and turns drags into callbacks
//!
//! Geometry, hit-testing and drag mapping come from `adsr-core`; this crate
//! only translates between iced and the core types.

pub mod envelope;
pub mod theme;

pub use envelope::{adsr_envelope, adsr_envelope_sized, EnvelopeCanvas, EnvelopeInteraction, ENVELOPE_HEIGHT};
pub use theme::{from_point, to_color, to_point, CANVAS_BACKGROUND, LABEL_COLOR};
