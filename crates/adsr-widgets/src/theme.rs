//! Shared theme constants for envelope UI components
//!
//! Bridges the toolkit-neutral core types (`Rgba`, `Point`) into iced and
//! holds the few colors the widgets paint on their own.

use adsr_core::Rgba;
use iced::{Color, Point};

/// Canvas backdrop used by the designer behind a transparent envelope
pub const CANVAS_BACKGROUND: Color = Color::from_rgb(0.1, 0.1, 0.12);

/// Label color for parameter readouts
pub const LABEL_COLOR: Color = Color::from_rgb(0.75, 0.75, 0.78);

/// Convert a core color to an iced color
pub fn to_color(rgba: Rgba) -> Color {
    Color::from_rgba(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// Convert a core point to an iced point
pub fn to_point(point: adsr_core::Point) -> Point {
    Point::new(point.x, point.y)
}

/// Convert an iced point to a core point
pub fn from_point(point: Point) -> adsr_core::Point {
    adsr_core::Point::new(point.x, point.y)
}
