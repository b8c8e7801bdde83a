//! Painting of a core render description onto an iced canvas frame

use adsr_core::render::{FillRegion, Marker, StrokePath};
use adsr_core::{Paint, PathCommand, RenderDescription, Shape};
use iced::widget::canvas::{fill, gradient, Fill, Frame, Gradient, Path, Stroke, Style};
use iced::Point;

use crate::theme::{to_color, to_point};

/// Build an iced path from shape commands
pub fn to_path(shape: &Shape) -> Path {
    Path::new(|builder| {
        for command in shape.commands() {
            match *command {
                PathCommand::MoveTo(to) => builder.move_to(to_point(to)),
                PathCommand::LineTo(to) => builder.line_to(to_point(to)),
                PathCommand::CubicTo {
                    control_a,
                    control_b,
                    to,
                } => builder.bezier_curve_to(to_point(control_a), to_point(control_b), to_point(to)),
                PathCommand::Close => builder.close(),
            }
        }
    })
}

/// Convert a paint into an iced fill
pub fn to_fill(paint: Paint) -> Fill {
    match paint {
        Paint::Solid(color) => Fill::from(to_color(color)),
        Paint::Gradient {
            from,
            to,
            top,
            bottom,
        } => {
            let linear = gradient::Linear::new(to_point(from), to_point(to))
                .add_stop(0.0, to_color(top))
                .add_stop(1.0, to_color(bottom));
            Fill {
                style: Style::Gradient(Gradient::Linear(linear)),
                rule: fill::Rule::NonZero,
            }
        }
    }
}

fn fill_region(frame: &mut Frame, region: &FillRegion) {
    frame.fill(&to_path(&region.shape), to_fill(region.paint));
}

fn stroke_curve(frame: &mut Frame, curve: &StrokePath) {
    frame.stroke(
        &to_path(&curve.shape),
        Stroke::default()
            .with_color(to_color(curve.color))
            .with_width(curve.width),
    );
}

fn draw_marker(frame: &mut Frame, marker: &Marker) {
    frame.fill(
        &Path::circle(to_point(marker.center), marker.radius),
        to_color(marker.color),
    );
}

/// Paint a full frame: background, stage fills back to front, curve, markers
pub fn paint(frame: &mut Frame, description: &RenderDescription) {
    if description.background.a > 0.0 {
        frame.fill_rectangle(Point::ORIGIN, frame.size(), to_color(description.background));
    }

    for region in &description.fills {
        fill_region(frame, region);
    }

    stroke_curve(frame, &description.curve);

    for marker in &description.markers {
        draw_marker(frame, marker);
    }
}
