//! Gesture mapper
//!
//! State machine turning pointer events into parameter adjustments:
//!
//! ```text
//!            pointer_down (in zone)
//!   Idle ─────────────────────────────▶ Dragging { zone, last }
//!    ▲                                      │  pointer_move: adjust, last = P
//!    └──────────── pointer_up / cancel ─────┘
//! ```
//!
//! The drag session only remembers the zone and the last pointer position,
//! never geometry, so parameters may be rewritten between events (for example
//! by a host mirroring values back) without invalidating it.

use crate::params::{AdsrValues, EnvelopeParameters};
use crate::regions::{HitRegions, HitZone};
use crate::types::Point;

/// Default drag sensitivity (parameter units per pixel)
pub const DEFAULT_DRAG_SLEW: f32 = 0.005;

fn finite_slew(drag_slew: f32) -> f32 {
    if drag_slew.is_finite() {
        drag_slew
    } else {
        DEFAULT_DRAG_SLEW
    }
}

/// Current drag state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { zone: HitZone, last: Point },
}

/// Pointer gesture state machine for one editor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureMapper {
    state: DragState,
    drag_slew: f32,
}

impl Default for GestureMapper {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_SLEW)
    }
}

impl GestureMapper {
    /// Create a mapper with the given drag sensitivity (smaller = slower)
    ///
    /// A non-finite slew falls back to [`DEFAULT_DRAG_SLEW`].
    pub fn new(drag_slew: f32) -> Self {
        Self {
            state: DragState::Idle,
            drag_slew: finite_slew(drag_slew),
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// The zone being dragged, if any
    pub fn active_zone(&self) -> Option<HitZone> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging { zone, .. } => Some(zone),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn drag_slew(&self) -> f32 {
        self.drag_slew
    }

    pub fn set_drag_slew(&mut self, drag_slew: f32) {
        self.drag_slew = finite_slew(drag_slew);
    }

    /// Start a drag session if the point falls in a hit zone
    ///
    /// Any session already in progress is replaced. Returns the zone hit.
    pub fn pointer_down(&mut self, point: Point, regions: &HitRegions) -> Option<HitZone> {
        let zone = regions.classify(point);
        self.state = match zone {
            Some(zone) => {
                log::debug!("gesture: drag {:?} started at ({:.1}, {:.1})", zone, point.x, point.y);
                DragState::Dragging { zone, last: point }
            }
            None => DragState::Idle,
        };
        zone
    }

    /// Apply a pointer move to the parameters
    ///
    /// Returns the updated values when a drag is in progress, `None` when idle.
    pub fn pointer_move(
        &mut self,
        point: Point,
        params: &mut EnvelopeParameters,
    ) -> Option<AdsrValues> {
        let DragState::Dragging { zone, last } = self.state else {
            return None;
        };

        let dx = (point.x - last.x) * self.drag_slew;
        let dy = (point.y - last.y) * self.drag_slew;
        log::trace!("gesture: {:?} moved dx={:.4} dy={:.4}", zone, dx, dy);

        let mut values = params.values();
        match zone {
            HitZone::Attack => {
                values.attack += dx;
                values.attack -= dy;
            }
            HitZone::DecaySustain => {
                values.sustain -= dy;
                values.decay += dx;
            }
            HitZone::Release => {
                values.release += dx;
                values.release -= dy;
            }
        }
        params.set_values(values);

        self.state = DragState::Dragging { zone, last: point };
        Some(params.values())
    }

    /// End the drag session (pointer up or cancel)
    pub fn pointer_up(&mut self) {
        if let DragState::Dragging { zone, .. } = self.state {
            log::debug!("gesture: drag {:?} ended", zone);
        }
        self.state = DragState::Idle;
    }
}
