//! Duration-based parameterization
//!
//! Some hosts think of attack, decay and release in milliseconds drawn at a
//! fixed pixel-per-second scale. This layer converts such durations into the
//! normalized amounts the layout solver works with, and back, for a given
//! per-stage pixel budget (`section_max`).

use serde::{Deserialize, Serialize};

use crate::params::{clamp_unit, AdsrValues};

/// Horizontal time scale of the envelope display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeScale {
    pub pixels_per_second: f32,
}

impl Default for TimeScale {
    fn default() -> Self {
        Self {
            pixels_per_second: 100.0,
        }
    }
}

/// Envelope expressed in milliseconds (sustain stays a 0-1 level)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationEnvelope {
    pub attack_ms: f32,
    pub decay_ms: f32,
    pub sustain: f32,
    pub release_ms: f32,
}

impl TimeScale {
    /// Longest duration that fits in one stage budget
    pub fn max_duration_ms(&self, section_max: f32) -> f32 {
        if self.pixels_per_second <= 0.0 {
            return 0.0;
        }
        section_max / self.pixels_per_second * 1000.0
    }

    /// Milliseconds → normalized amount (clamped to the stage budget)
    pub fn amount_from_ms(&self, ms: f32, section_max: f32) -> f32 {
        if section_max <= 0.0 {
            return 0.0;
        }
        clamp_unit(ms / 1000.0 * self.pixels_per_second / section_max)
    }

    /// Normalized amount → milliseconds
    pub fn ms_from_amount(&self, amount: f32, section_max: f32) -> f32 {
        clamp_unit(amount) * self.max_duration_ms(section_max)
    }

    /// Convert a duration envelope into normalized values
    pub fn to_values(&self, envelope: &DurationEnvelope, section_max: f32) -> AdsrValues {
        AdsrValues {
            attack: self.amount_from_ms(envelope.attack_ms, section_max),
            decay: self.amount_from_ms(envelope.decay_ms, section_max),
            sustain: clamp_unit(envelope.sustain),
            release: self.amount_from_ms(envelope.release_ms, section_max),
        }
    }

    /// Convert normalized values into a duration envelope
    pub fn to_durations(&self, values: &AdsrValues, section_max: f32) -> DurationEnvelope {
        DurationEnvelope {
            attack_ms: self.ms_from_amount(values.attack, section_max),
            decay_ms: self.ms_from_amount(values.decay, section_max),
            sustain: clamp_unit(values.sustain),
            release_ms: self.ms_from_amount(values.release, section_max),
        }
    }
}
