//! Region builder
//!
//! Turns solved geometry into the three hit-test polygons used for gesture
//! classification, the four per-stage fill paths and the envelope stroke.
//!
//! ```text
//!  buffer ┌──────────┬─────────────────────┬───────────┐
//!         │  attack  │    decay/sustain    │  release  │
//!         │   zone   │        zone         │   zone    │
//!  height └──────────┴─────────────────────┴───────────┘
//!         0       high.x              release.x      width
//! ```
//!
//! Hit zones are straight-edged regardless of curve bend; fill paths follow
//! the Bezier curves.
//!
//! Zones span `y ∈ [buffer, height)`, not the full canvas height. A press in
//! the top `buffer` strip (above the ceiling) hits no zone and starts no drag.

use crate::layout::CanvasGeometry;
use crate::types::{CanvasSize, Point, Stage};

// ─────────────────────────────────────────────────────────────────────────────
// Hit testing
// ─────────────────────────────────────────────────────────────────────────────

/// Closed polygon for point containment tests
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Even-odd containment test
    ///
    /// Points on a right or bottom edge count as outside, so two polygons
    /// sharing an edge never both claim a point on it.
    pub fn contains(&self, point: Point) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }

        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[j];
            if (a.y > point.y) != (b.y > point.y) {
                let x_cross = (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
                if point.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Horizontal extent `(min_x, max_x)`
    pub fn x_span(&self) -> (f32, f32) {
        self.vertices
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.x), hi.max(p.x))
            })
    }
}

/// Draggable zone of the envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitZone {
    Attack,
    DecaySustain,
    Release,
}

impl HitZone {
    /// Pointer-down classification order; the first containing zone wins
    pub const PRIORITY: [HitZone; 3] = [HitZone::Release, HitZone::Attack, HitZone::DecaySustain];
}

/// The three hit-test polygons for one layout pass
#[derive(Debug, Clone, PartialEq)]
pub struct HitRegions {
    pub attack_zone: Polygon,
    pub decay_sustain_zone: Polygon,
    pub release_zone: Polygon,
}

impl HitRegions {
    /// Get the polygon for a zone
    pub fn zone(&self, zone: HitZone) -> &Polygon {
        match zone {
            HitZone::Attack => &self.attack_zone,
            HitZone::DecaySustain => &self.decay_sustain_zone,
            HitZone::Release => &self.release_zone,
        }
    }

    /// Classify a canvas point (release, then attack, then decay/sustain)
    pub fn classify(&self, point: Point) -> Option<HitZone> {
        HitZone::PRIORITY
            .into_iter()
            .find(|&zone| self.zone(zone).contains(point))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Paths
// ─────────────────────────────────────────────────────────────────────────────

/// A single path drawing command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo {
        control_a: Point,
        control_b: Point,
        to: Point,
    },
    Close,
}

/// Renderer-neutral path made of drawing commands
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shape {
    commands: Vec<PathCommand>,
}

impl Shape {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, to: Point) -> Self {
        self.commands.push(PathCommand::MoveTo(to));
        self
    }

    pub fn line_to(mut self, to: Point) -> Self {
        self.commands.push(PathCommand::LineTo(to));
        self
    }

    pub fn cubic_to(mut self, control_a: Point, control_b: Point, to: Point) -> Self {
        self.commands.push(PathCommand::CubicTo {
            control_a,
            control_b,
            to,
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }
}

/// Per-stage fill regions
#[derive(Debug, Clone, PartialEq)]
pub struct FillPaths {
    pub attack: Shape,
    pub decay: Shape,
    pub sustain: Shape,
    pub release: Shape,
}

impl FillPaths {
    /// Get the fill for a stage
    pub fn stage(&self, stage: Stage) -> &Shape {
        match stage {
            Stage::Attack => &self.attack,
            Stage::Decay => &self.decay,
            Stage::Sustain => &self.sustain,
            Stage::Release => &self.release,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Builders
// ─────────────────────────────────────────────────────────────────────────────

/// Build hit regions and fill paths from solved geometry
pub fn build(geometry: &CanvasGeometry, size: CanvasSize) -> (HitRegions, FillPaths) {
    (hit_regions(geometry, size), fill_paths(geometry))
}

/// Build the three hit-test polygons
pub fn hit_regions(geometry: &CanvasGeometry, size: CanvasSize) -> HitRegions {
    let g = geometry;
    let high_axis = g.axis(g.high_point);
    let high_ceiling = g.ceiling(g.high_point);
    let release_axis = g.axis(g.release_point);
    let release_ceiling = g.ceiling(g.release_point);

    HitRegions {
        attack_zone: Polygon::new(vec![
            Point::new(0.0, size.height),
            high_axis,
            high_ceiling,
            Point::new(0.0, g.buffer),
        ]),
        decay_sustain_zone: Polygon::new(vec![high_axis, release_axis, release_ceiling, high_ceiling]),
        release_zone: Polygon::new(vec![
            release_axis,
            Point::new(size.width, size.height),
            Point::new(size.width, g.buffer),
            release_ceiling,
        ]),
    }
}

/// Build the four per-stage fill paths
pub fn fill_paths(geometry: &CanvasGeometry) -> FillPaths {
    let g = geometry;
    let high_axis = g.axis(g.high_point);
    let sustain_axis = g.axis(g.sustain_point);
    let release_axis = g.axis(g.release_point);

    let release = Shape::new()
        .move_to(release_axis)
        .cubic_to(release_axis, g.end_point, g.end_point)
        .cubic_to(g.release_control, g.release_point, g.release_point)
        .line_to(release_axis)
        .close();

    let sustain = Shape::new()
        .move_to(sustain_axis)
        .line_to(release_axis)
        .line_to(g.release_point)
        .line_to(g.sustain_point)
        .line_to(sustain_axis)
        .close();

    let decay = Shape::new()
        .move_to(high_axis)
        .line_to(sustain_axis)
        .cubic_to(sustain_axis, g.sustain_point, g.sustain_point)
        .cubic_to(g.decay_control, g.high_point, g.high_point)
        .line_to(high_axis)
        .close();

    let attack = Shape::new()
        .move_to(g.initial)
        .line_to(high_axis)
        .line_to(g.high_point)
        .cubic_to(g.attack_control, g.initial, g.initial)
        .close();

    FillPaths {
        attack,
        decay,
        sustain,
        release,
    }
}

/// Build the open envelope stroke through all five anchors
pub fn envelope_curve(geometry: &CanvasGeometry) -> Shape {
    let g = geometry;
    Shape::new()
        .move_to(g.initial)
        .cubic_to(g.initial, g.attack_control, g.high_point)
        .cubic_to(g.high_point, g.decay_control, g.sustain_point)
        .line_to(g.release_point)
        .cubic_to(g.release_point, g.release_control, g.end_point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{solve, LayoutConfig};
    use crate::params::EnvelopeParameters;

    const SIZE: CanvasSize = CanvasSize {
        width: 440.0,
        height: 150.0,
    };

    fn geometry(params: &EnvelopeParameters) -> CanvasGeometry {
        solve(SIZE, params, &LayoutConfig::default()).unwrap()
    }

    #[test]
    fn test_polygon_contains_interior_not_exterior() {
        let square = Polygon::new(vec![
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 0.0),
        ]);

        assert!(square.contains(Point::new(5.0, 5.0)));
        assert!(!square.contains(Point::new(15.0, 5.0)));
        assert!(!square.contains(Point::new(5.0, -1.0)));
        // Left edge is inside, right edge outside
        assert!(square.contains(Point::new(0.0, 5.0)));
        assert!(!square.contains(Point::new(10.0, 5.0)));
    }

    #[test]
    fn test_degenerate_polygon_contains_nothing() {
        let line = Polygon::new(vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)]);
        assert!(!line.contains(Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_zones_partition_width() {
        let geo = geometry(&EnvelopeParameters::new(0.3, 0.8, 0.2, 0.6));
        let (regions, _) = build(&geo, SIZE);

        let (a_lo, a_hi) = regions.attack_zone.x_span();
        let (ds_lo, ds_hi) = regions.decay_sustain_zone.x_span();
        let (r_lo, r_hi) = regions.release_zone.x_span();

        assert_eq!(a_lo, 0.0);
        assert_eq!(a_hi, ds_lo);
        assert_eq!(ds_hi, r_lo);
        assert_eq!(r_hi, SIZE.width);
    }

    #[test]
    fn test_every_column_classified_exactly_once() {
        let geo = geometry(&EnvelopeParameters::default());
        let regions = hit_regions(&geo, SIZE);
        let y = SIZE.height / 2.0;

        for x in 0..(SIZE.width as usize) {
            let point = Point::new(x as f32 + 0.5, y);
            let hits = [HitZone::Attack, HitZone::DecaySustain, HitZone::Release]
                .into_iter()
                .filter(|&zone| regions.zone(zone).contains(point))
                .count();
            assert_eq!(hits, 1, "column {x} claimed by {hits} zones");
        }
    }

    #[test]
    fn test_zones_partition_width_for_any_padding() {
        let configs = [
            (0.0, 0.0),
            (0.06, 0.01),
            (0.3, 0.3),
            (0.45, 0.45),
            (0.9, 0.9),
            (f32::NAN, 0.2),
        ];
        let params = [
            EnvelopeParameters::new(0.0, 0.0, 0.0, 0.0),
            EnvelopeParameters::new(1.0, 1.0, 1.0, 1.0),
            EnvelopeParameters::new(1.0, 0.0, 0.5, 1.0),
            EnvelopeParameters::new(0.3, 0.8, 0.2, 0.6),
        ];

        for (attack_pad, release_pad) in configs {
            let config = LayoutConfig {
                attack_pad,
                release_pad,
            };
            for p in &params {
                let geo = solve(SIZE, p, &config).unwrap();
                let regions = hit_regions(&geo, SIZE);

                let (a_lo, a_hi) = regions.attack_zone.x_span();
                let (ds_lo, ds_hi) = regions.decay_sustain_zone.x_span();
                let (r_lo, r_hi) = regions.release_zone.x_span();
                assert_eq!(a_lo, 0.0);
                assert_eq!(a_hi, ds_lo, "pads ({attack_pad}, {release_pad})");
                assert_eq!(ds_hi, r_lo, "pads ({attack_pad}, {release_pad})");
                assert_eq!(r_hi, SIZE.width);

                for x in 0..(SIZE.width as usize) {
                    let point = Point::new(x as f32 + 0.5, 100.0);
                    let hits = [HitZone::Attack, HitZone::DecaySustain, HitZone::Release]
                        .into_iter()
                        .filter(|&zone| regions.zone(zone).contains(point))
                        .count();
                    assert_eq!(hits, 1, "pads ({attack_pad}, {release_pad}), column {x}");
                }
            }
        }
    }

    #[test]
    fn test_ceiling_strip_hits_nothing() {
        let geo = geometry(&EnvelopeParameters::default());
        let regions = hit_regions(&geo, SIZE);

        assert_eq!(regions.classify(Point::new(geo.sustain_point.x, geo.buffer - 1.0)), None);
        assert_eq!(
            regions.classify(Point::new(geo.sustain_point.x, geo.buffer)),
            Some(HitZone::DecaySustain)
        );
    }

    #[test]
    fn test_classify_by_stage() {
        let geo = geometry(&EnvelopeParameters::default());
        let regions = hit_regions(&geo, SIZE);
        let y = 100.0;

        assert_eq!(regions.classify(Point::new(geo.high_point.x - 5.0, y)), Some(HitZone::Attack));
        assert_eq!(
            regions.classify(Point::new(geo.sustain_point.x, y)),
            Some(HitZone::DecaySustain)
        );
        assert_eq!(regions.classify(Point::new(geo.end_point.x, y)), Some(HitZone::Release));
        assert_eq!(regions.classify(Point::new(-20.0, y)), None);
        assert_eq!(regions.classify(Point::new(100.0, SIZE.height + 5.0)), None);
    }

    #[test]
    fn test_shared_edge_goes_to_right_hand_zone() {
        let geo = geometry(&EnvelopeParameters::default());
        let regions = hit_regions(&geo, SIZE);

        let on_peak = Point::new(geo.high_point.x, 80.0);
        assert_eq!(regions.classify(on_peak), Some(HitZone::DecaySustain));

        let on_release = Point::new(geo.release_point.x, 80.0);
        assert_eq!(regions.classify(on_release), Some(HitZone::Release));
    }

    #[test]
    fn test_zones_ignore_curve_bend() {
        let mut params = EnvelopeParameters::default();
        let bent = hit_regions(&geometry(&params), SIZE);
        params.set_all_curves(0.0);
        let straight = hit_regions(&geometry(&params), SIZE);

        assert_eq!(bent, straight);
    }

    #[test]
    fn test_fill_paths_are_closed() {
        let geo = geometry(&EnvelopeParameters::default());
        let fills = fill_paths(&geo);

        for stage in Stage::ALL {
            assert!(fills.stage(stage).is_closed(), "{} fill is open", stage.name());
        }
    }

    #[test]
    fn test_fill_curves_use_control_points() {
        let geo = geometry(&EnvelopeParameters::default());
        let fills = fill_paths(&geo);

        assert!(fills.attack.commands().contains(&PathCommand::CubicTo {
            control_a: geo.attack_control,
            control_b: geo.initial,
            to: geo.initial,
        }));
        assert!(fills.decay.commands().contains(&PathCommand::CubicTo {
            control_a: geo.decay_control,
            control_b: geo.high_point,
            to: geo.high_point,
        }));
        assert!(fills.release.commands().contains(&PathCommand::CubicTo {
            control_a: geo.release_control,
            control_b: geo.release_point,
            to: geo.release_point,
        }));
    }

    #[test]
    fn test_envelope_curve_visits_anchors_in_order() {
        let geo = geometry(&EnvelopeParameters::default());
        let curve = envelope_curve(&geo);

        let targets: Vec<Point> = curve
            .commands()
            .iter()
            .filter_map(|cmd| match *cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
                PathCommand::CubicTo { to, .. } => Some(to),
                PathCommand::Close => None,
            })
            .collect();

        assert_eq!(targets, geo.anchors().to_vec());
        assert!(!curve.is_closed());
    }
}
