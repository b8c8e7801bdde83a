//! Envelope editor model
//!
//! Owns one envelope's parameters and keeps the derived layout (geometry,
//! hit regions, fill paths) in sync with them. Hosts that are not driven by
//! the iced canvas program feed pointer events here directly.
//!
//! Every parameter write re-runs the layout against the last known canvas
//! size. A degenerate resize keeps the previous layout.

use std::fmt;

use crate::config::EditorConfig;
use crate::error::LayoutResult;
use crate::gesture::GestureMapper;
use crate::layout::{solve, CanvasGeometry};
use crate::params::{AdsrValues, EnvelopeParameters};
use crate::regions::{build, FillPaths, HitRegions, HitZone};
use crate::render::{describe, RenderDescription};
use crate::types::{CanvasSize, Point};

/// Change callback invoked after every gesture-driven update
pub type ChangeCallback = Box<dyn FnMut(AdsrValues)>;

/// Derived state of one layout pass
#[derive(Debug, Clone, PartialEq)]
pub struct EnvelopeLayout {
    pub geometry: CanvasGeometry,
    pub regions: HitRegions,
    pub fills: FillPaths,
}

impl EnvelopeLayout {
    /// Solve and build a full layout
    pub fn compute(
        size: CanvasSize,
        params: &EnvelopeParameters,
        config: &EditorConfig,
    ) -> LayoutResult<Self> {
        let geometry = solve(size, params, &config.layout)?;
        let (regions, fills) = build(&geometry, size);
        Ok(Self {
            geometry,
            regions,
            fills,
        })
    }
}

/// Interactive envelope editor state
pub struct EnvelopeEditor {
    params: EnvelopeParameters,
    config: EditorConfig,
    size: Option<CanvasSize>,
    layout: Option<EnvelopeLayout>,
    gesture: GestureMapper,
    on_change: Option<ChangeCallback>,
}

impl fmt::Debug for EnvelopeEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvelopeEditor")
            .field("params", &self.params)
            .field("size", &self.size)
            .field("gesture", &self.gesture)
            .field("has_layout", &self.layout.is_some())
            .field("has_callback", &self.on_change.is_some())
            .finish()
    }
}

impl Default for EnvelopeEditor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EnvelopeEditor {
    /// Create an editor with default parameters
    pub fn new(config: EditorConfig) -> Self {
        Self {
            params: EnvelopeParameters::default(),
            config,
            size: None,
            layout: None,
            gesture: GestureMapper::new(config.drag_slew),
            on_change: None,
        }
    }

    /// Set the change callback
    pub fn with_callback(mut self, callback: impl FnMut(AdsrValues) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn set_callback(&mut self, callback: Option<ChangeCallback>) {
        self.on_change = callback;
    }

    pub fn params(&self) -> &EnvelopeParameters {
        &self.params
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Last successful layout, if any
    pub fn layout(&self) -> Option<&EnvelopeLayout> {
        self.layout.as_ref()
    }

    pub fn active_zone(&self) -> Option<HitZone> {
        self.gesture.active_zone()
    }

    /// Replace the configuration and re-run the layout
    pub fn set_config(&mut self, config: EditorConfig) {
        self.config = config;
        self.gesture.set_drag_slew(config.drag_slew);
        self.relayout();
    }

    /// Update the canvas size
    ///
    /// Degenerate sizes are ignored and the previous layout is kept.
    pub fn resize(&mut self, size: CanvasSize) {
        match EnvelopeLayout::compute(size, &self.params, &self.config) {
            Ok(layout) => {
                self.size = Some(size);
                self.layout = Some(layout);
            }
            Err(e) => log::debug!("resize: {}, keeping previous layout", e),
        }
    }

    fn relayout(&mut self) {
        if let Some(size) = self.size {
            self.resize(size);
        }
    }

    /// Apply a parameter mutation and re-layout when something changed
    pub fn update_params(&mut self, f: impl FnOnce(&mut EnvelopeParameters) -> bool) -> bool {
        let changed = f(&mut self.params);
        if changed {
            self.relayout();
        }
        changed
    }

    pub fn set_attack(&mut self, value: f32) -> bool {
        self.update_params(|p| p.set_attack(value))
    }

    pub fn set_decay(&mut self, value: f32) -> bool {
        self.update_params(|p| p.set_decay(value))
    }

    pub fn set_sustain(&mut self, value: f32) -> bool {
        self.update_params(|p| p.set_sustain(value))
    }

    pub fn set_release(&mut self, value: f32) -> bool {
        self.update_params(|p| p.set_release(value))
    }

    pub fn set_attack_curve(&mut self, value: f32) -> bool {
        self.update_params(|p| p.set_attack_curve(value))
    }

    pub fn set_decay_curve(&mut self, value: f32) -> bool {
        self.update_params(|p| p.set_decay_curve(value))
    }

    pub fn set_release_curve(&mut self, value: f32) -> bool {
        self.update_params(|p| p.set_release_curve(value))
    }

    pub fn set_all_curves(&mut self, value: f32) -> bool {
        self.update_params(|p| p.set_all_curves(value))
    }

    /// Pointer pressed at a canvas point
    ///
    /// Uses the hit regions of the last layout; without a layout nothing is hit.
    pub fn pointer_down(&mut self, point: Point) -> Option<HitZone> {
        match &self.layout {
            Some(layout) => self.gesture.pointer_down(point, &layout.regions),
            None => {
                self.gesture.pointer_up();
                None
            }
        }
    }

    /// Pointer moved to a canvas point
    ///
    /// While dragging, updates the parameters, re-runs the layout and invokes
    /// the change callback with the new values.
    pub fn pointer_move(&mut self, point: Point) -> Option<AdsrValues> {
        let values = self.gesture.pointer_move(point, &mut self.params)?;
        self.relayout();
        if let Some(callback) = self.on_change.as_mut() {
            callback(values);
        }
        Some(values)
    }

    /// Pointer released or gesture cancelled
    pub fn pointer_up(&mut self) {
        self.gesture.pointer_up();
    }

    /// Describe the current frame for a renderer
    pub fn render(&self) -> Option<RenderDescription> {
        self.layout
            .as_ref()
            .map(|layout| describe(&layout.geometry, &layout.fills, &self.config.style))
    }
}
