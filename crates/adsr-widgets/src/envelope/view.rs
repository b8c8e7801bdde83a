//! Envelope view function
//!
//! ## Usage
//!
//! ```ignore
//! fn view(&self) -> Element<Message> {
//!     let envelope = adsr_envelope(&self.params, &self.config, Message::EnvelopeChanged);
//!     column![envelope, /* sliders */].into()
//! }
//! ```

use adsr_core::config::EditorConfig;
use adsr_core::{AdsrValues, EnvelopeParameters, DEFAULT_CANVAS_SIZE};
use iced::widget::Canvas;
use iced::{Element, Length};

use super::canvas::EnvelopeCanvas;

/// Envelope canvas height in pixels
pub const ENVELOPE_HEIGHT: f32 = DEFAULT_CANVAS_SIZE.height;

/// Create a draggable ADSR envelope element
///
/// # Arguments
///
/// * `params` - Current envelope parameters (owned by the caller)
/// * `config` - Layout padding, drag slew and visual style
/// * `on_change` - Callback closure called with the new values on every drag step
pub fn adsr_envelope<'a, Message>(
    params: &'a EnvelopeParameters,
    config: &'a EditorConfig,
    on_change: impl Fn(AdsrValues) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    Canvas::new(EnvelopeCanvas {
        params,
        config,
        on_change,
    })
    .width(Length::Fill)
    .height(Length::Fixed(ENVELOPE_HEIGHT))
    .into()
}

/// Create an envelope element with a fixed size
pub fn adsr_envelope_sized<'a, Message>(
    params: &'a EnvelopeParameters,
    config: &'a EditorConfig,
    width: f32,
    height: f32,
    on_change: impl Fn(AdsrValues) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    Canvas::new(EnvelopeCanvas {
        params,
        config,
        on_change,
    })
    .width(Length::Fixed(width))
    .height(Length::Fixed(height))
    .into()
}
