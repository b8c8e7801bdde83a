//! Slider panel widgets

use adsr_widgets::LABEL_COLOR;
use iced::widget::{column, slider, text};
use iced::Element;

use super::message::Message;

/// Slider resolution
pub const SLIDER_STEP: f32 = 0.001;

/// Label for a plain 0-1 amount
pub fn amount_label(name: &str, value: f32) -> String {
    format!("{}: {:.2}", name, value)
}

/// Label for a time stage with its duration
pub fn duration_label(name: &str, value: f32, ms: f32) -> String {
    format!("{}: {:.2} ({:.0} ms)", name, value, ms)
}

/// A labeled 0-1 slider
pub fn param_slider<'a>(
    label: String,
    value: f32,
    on_change: impl Fn(f32) -> Message + 'a,
) -> Element<'a, Message> {
    column![
        text(label).size(12).color(LABEL_COLOR),
        slider(0.0..=1.0, value, on_change).step(SLIDER_STEP),
    ]
    .spacing(4)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_label() {
        assert_eq!(amount_label("Sustain", 0.5), "Sustain: 0.50");
    }

    #[test]
    fn test_duration_label_rounds_ms() {
        assert_eq!(duration_label("Attack", 0.25, 310.4), "Attack: 0.25 (310 ms)");
    }
}
