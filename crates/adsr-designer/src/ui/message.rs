//! Application messages

use adsr_core::AdsrValues;

/// Application messages
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Drag on the envelope produced new values
    EnvelopeChanged(AdsrValues),

    // Sliders
    SetAttack(f32),
    SetAttackCurve(f32),
    SetDecay(f32),
    SetDecayCurve(f32),
    SetSustain(f32),
    SetRelease(f32),
    SetReleaseCurve(f32),
    /// Sets attack, decay and release curves together
    SetAllCurves(f32),

    // Style
    ToggleGradient(bool),
    ToggleMarkers(bool),

    /// Write the current config to disk
    SaveConfig,
}
