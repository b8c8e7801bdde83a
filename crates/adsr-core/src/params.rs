//! Envelope parameters
//!
//! The authoritative state of an envelope editor. All fields are normalized
//! to 0.0-1.0 and every setter clamps, so the struct can never hold an
//! out-of-range value. Setters return whether the stored value changed, which
//! is the owner's cue to re-run the layout.

/// Clamp a value to 0.0-1.0, mapping NaN to 0.0
#[inline]
pub fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// The four gesture-editable envelope values
///
/// This is the payload handed to change callbacks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdsrValues {
    pub attack: f32,
    pub decay: f32,
    pub sustain: f32,
    pub release: f32,
}

/// Normalized envelope amounts plus per-stage curve bend
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvelopeParameters {
    attack: f32,
    decay: f32,
    /// Sustain is a level, not a duration
    sustain: f32,
    release: f32,
    attack_curve: f32,
    decay_curve: f32,
    release_curve: f32,
}

impl Default for EnvelopeParameters {
    fn default() -> Self {
        Self {
            attack: 0.5,
            decay: 0.5,
            sustain: 0.5,
            release: 0.5,
            attack_curve: 1.0,
            decay_curve: 1.0,
            release_curve: 1.0,
        }
    }
}

fn store(slot: &mut f32, value: f32) -> bool {
    let value = clamp_unit(value);
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

impl EnvelopeParameters {
    /// Create parameters from the four envelope values (curves at full bend)
    pub fn new(attack: f32, decay: f32, sustain: f32, release: f32) -> Self {
        let mut params = Self::default();
        params.set_values(AdsrValues {
            attack,
            decay,
            sustain,
            release,
        });
        params
    }

    pub fn attack(&self) -> f32 {
        self.attack
    }

    pub fn decay(&self) -> f32 {
        self.decay
    }

    pub fn sustain(&self) -> f32 {
        self.sustain
    }

    pub fn release(&self) -> f32 {
        self.release
    }

    pub fn attack_curve(&self) -> f32 {
        self.attack_curve
    }

    pub fn decay_curve(&self) -> f32 {
        self.decay_curve
    }

    pub fn release_curve(&self) -> f32 {
        self.release_curve
    }

    pub fn set_attack(&mut self, value: f32) -> bool {
        store(&mut self.attack, value)
    }

    pub fn set_decay(&mut self, value: f32) -> bool {
        store(&mut self.decay, value)
    }

    pub fn set_sustain(&mut self, value: f32) -> bool {
        store(&mut self.sustain, value)
    }

    pub fn set_release(&mut self, value: f32) -> bool {
        store(&mut self.release, value)
    }

    pub fn set_attack_curve(&mut self, value: f32) -> bool {
        store(&mut self.attack_curve, value)
    }

    pub fn set_decay_curve(&mut self, value: f32) -> bool {
        store(&mut self.decay_curve, value)
    }

    pub fn set_release_curve(&mut self, value: f32) -> bool {
        store(&mut self.release_curve, value)
    }

    /// Set all three curve bend amounts at once
    pub fn set_all_curves(&mut self, value: f32) -> bool {
        // Non-short-circuiting: every curve must be written
        self.set_attack_curve(value) | self.set_decay_curve(value) | self.set_release_curve(value)
    }

    /// Get the four gesture-editable values
    pub fn values(&self) -> AdsrValues {
        AdsrValues {
            attack: self.attack,
            decay: self.decay,
            sustain: self.sustain,
            release: self.release,
        }
    }

    /// Write the four gesture-editable values (each clamped)
    pub fn set_values(&mut self, values: AdsrValues) -> bool {
        self.set_attack(values.attack)
            | self.set_decay(values.decay)
            | self.set_sustain(values.sustain)
            | self.set_release(values.release)
    }
}
