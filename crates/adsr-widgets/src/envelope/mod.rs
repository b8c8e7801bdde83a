//! Draggable ADSR envelope canvas
//!
//! - `canvas`: iced `Program` mapping pointer events through the core gesture mapper
//! - `paint`: draws a core render description onto a canvas frame
//! - `view`: view functions returning `Element<Message>`

mod canvas;
mod paint;
mod view;

pub use canvas::{EnvelopeCanvas, EnvelopeInteraction};
pub use paint::{paint, to_fill, to_path};
pub use view::{adsr_envelope, adsr_envelope_sized, ENVELOPE_HEIGHT};
