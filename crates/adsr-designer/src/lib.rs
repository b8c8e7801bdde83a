//! ADSR Designer - interactive envelope editing demo
//!
//! Shows a draggable envelope above a slider panel. Dragging the envelope
//! moves the sliders and moving the sliders reshapes the envelope.

pub mod cli;
pub mod ui;

/// Application name, used for the config directory
pub const APP_NAME: &str = "adsr-designer";
