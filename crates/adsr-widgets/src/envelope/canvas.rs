//! Canvas Program implementation for the envelope editor
//!
//! Each frame re-solves the layout from the caller's parameters. During a
//! drag the canvas state carries its own running copy of the parameters:
//! iced delivers a whole event batch to the same program before the
//! application sees any published message, so every move in the batch must
//! build on the previous one rather than on the program's `params`.

use adsr_core::config::EditorConfig;
use adsr_core::render::describe;
use adsr_core::{AdsrValues, CanvasSize, EnvelopeLayout, EnvelopeParameters, GestureMapper, HitRegions};
use iced::widget::canvas::{self, Event, Frame, Geometry, Program};
use iced::{mouse, touch, Point, Rectangle, Theme};

use super::paint::paint;
use crate::theme::from_point;

/// Canvas state for tracking envelope drags
#[derive(Debug, Clone, Default)]
pub struct EnvelopeInteraction {
    /// Drag session (zone and last pointer position)
    pub gesture: GestureMapper,
    /// Hit regions of the last non-degenerate layout
    pub regions: Option<HitRegions>,
    /// Parameters being edited, seeded on press and cleared on release
    pub working: Option<EnvelopeParameters>,
}

/// Pointer input normalized to canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum PointerInput {
    Down(Point),
    Move(Point),
    Up,
}

/// Map a mouse or touch event to pointer input
///
/// Presses only count inside the canvas. Moves are tracked outside it too,
/// so a drag keeps working when the pointer leaves the widget.
pub(crate) fn pointer_input(
    event: &Event,
    bounds: Rectangle,
    cursor: mouse::Cursor,
) -> Option<PointerInput> {
    let local = |p: Point| Point::new(p.x - bounds.x, p.y - bounds.y);

    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            cursor.position_in(bounds).map(PointerInput::Down)
        }
        Event::Mouse(mouse::Event::CursorMoved { .. }) => {
            cursor.position_from(bounds.position()).map(PointerInput::Move)
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => Some(PointerInput::Up),
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            bounds.contains(*position).then(|| PointerInput::Down(local(*position)))
        }
        Event::Touch(touch::Event::FingerMoved { position, .. }) => {
            Some(PointerInput::Move(local(*position)))
        }
        Event::Touch(
            touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. },
        ) => Some(PointerInput::Up),
        _ => None,
    }
}

/// Canvas program for a draggable ADSR envelope
///
/// Takes a callback closure `on_change` that's called with the new
/// parameter values after every drag step.
pub struct EnvelopeCanvas<'a, Message, F>
where
    F: Fn(AdsrValues) -> Message,
{
    pub params: &'a EnvelopeParameters,
    pub config: &'a EditorConfig,
    pub on_change: F,
}

impl<'a, Message, F> EnvelopeCanvas<'a, Message, F>
where
    F: Fn(AdsrValues) -> Message,
{
    fn layout(&self, bounds: Rectangle) -> Option<EnvelopeLayout> {
        let size = CanvasSize::new(bounds.width, bounds.height);
        match EnvelopeLayout::compute(size, self.params, self.config) {
            Ok(layout) => Some(layout),
            Err(e) => {
                log::debug!("envelope canvas: {}", e);
                None
            }
        }
    }
}

impl<'a, Message, F> Program<Message> for EnvelopeCanvas<'a, Message, F>
where
    Message: Clone,
    F: Fn(AdsrValues) -> Message,
{
    type State = EnvelopeInteraction;

    fn update(
        &self,
        interaction: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        let input = pointer_input(event, bounds, cursor)?;
        interaction.gesture.set_drag_slew(self.config.drag_slew);

        match input {
            PointerInput::Down(position) => {
                if let Some(layout) = self.layout(bounds) {
                    interaction.regions = Some(layout.regions);
                }
                let regions = interaction.regions.as_ref()?;
                let zone = interaction.gesture.pointer_down(from_point(position), regions);
                interaction.working = zone.map(|_| *self.params);
                zone.map(|_| canvas::Action::capture())
            }
            PointerInput::Move(position) => {
                let params = interaction.working.as_mut()?;
                let values = interaction.gesture.pointer_move(from_point(position), params)?;
                Some(canvas::Action::publish((self.on_change)(values)).and_capture())
            }
            PointerInput::Up => {
                interaction.gesture.pointer_up();
                interaction.working = None;
                None
            }
        }
    }

    fn mouse_interaction(
        &self,
        interaction: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if interaction.gesture.is_dragging() {
            return mouse::Interaction::Grabbing;
        }

        let Some(position) = cursor.position_in(bounds) else {
            return mouse::Interaction::default();
        };

        // Zones from the current params; the cached ones may predate a slider change
        let hovered = match self.layout(bounds) {
            Some(layout) => layout.regions.classify(from_point(position)),
            None => interaction
                .regions
                .as_ref()
                .and_then(|regions| regions.classify(from_point(position))),
        };

        if hovered.is_some() {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }

    fn draw(
        &self,
        _interaction: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        if let Some(layout) = self.layout(bounds) {
            let description = describe(&layout.geometry, &layout.fills, &self.config.style);
            paint(&mut frame, &description);
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Size;
    use std::cell::RefCell;

    fn bounds() -> Rectangle {
        Rectangle::new(Point::new(20.0, 40.0), Size::new(440.0, 150.0))
    }

    #[test]
    fn test_press_inside_maps_to_local_point() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let cursor = mouse::Cursor::Available(Point::new(30.0, 100.0));

        assert_eq!(
            pointer_input(&event, bounds(), cursor),
            Some(PointerInput::Down(Point::new(10.0, 60.0)))
        );
    }

    #[test]
    fn test_press_outside_is_ignored() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let cursor = mouse::Cursor::Available(Point::new(5.0, 5.0));
        assert_eq!(pointer_input(&event, bounds(), cursor), None);
    }

    #[test]
    fn test_right_button_is_ignored() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right));
        let cursor = mouse::Cursor::Available(Point::new(30.0, 100.0));
        assert_eq!(pointer_input(&event, bounds(), cursor), None);
    }

    #[test]
    fn test_move_outside_still_tracked() {
        let event = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(500.0, 10.0),
        });
        let cursor = mouse::Cursor::Available(Point::new(500.0, 10.0));

        assert_eq!(
            pointer_input(&event, bounds(), cursor),
            Some(PointerInput::Move(Point::new(480.0, -30.0)))
        );
    }

    #[test]
    fn test_touch_lifecycle() {
        let finger = touch::Finger(0);
        let pressed = Event::Touch(touch::Event::FingerPressed {
            id: finger,
            position: Point::new(120.0, 140.0),
        });
        let moved = Event::Touch(touch::Event::FingerMoved {
            id: finger,
            position: Point::new(130.0, 120.0),
        });
        let lost = Event::Touch(touch::Event::FingerLost {
            id: finger,
            position: Point::new(130.0, 120.0),
        });

        assert_eq!(
            pointer_input(&pressed, bounds(), mouse::Cursor::Unavailable),
            Some(PointerInput::Down(Point::new(100.0, 100.0)))
        );
        assert_eq!(
            pointer_input(&moved, bounds(), mouse::Cursor::Unavailable),
            Some(PointerInput::Move(Point::new(110.0, 80.0)))
        );
        assert_eq!(
            pointer_input(&lost, bounds(), mouse::Cursor::Unavailable),
            Some(PointerInput::Up)
        );
    }

    #[test]
    fn test_release_anywhere_ends_drag() {
        let event = Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left));
        assert_eq!(
            pointer_input(&event, bounds(), mouse::Cursor::Unavailable),
            Some(PointerInput::Up)
        );
    }

    fn origin_bounds() -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::new(440.0, 150.0))
    }

    fn press(x: f32, y: f32) -> (Event, mouse::Cursor) {
        (
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            mouse::Cursor::Available(Point::new(x, y)),
        )
    }

    fn move_to(x: f32, y: f32) -> (Event, mouse::Cursor) {
        let position = Point::new(x, y);
        (
            Event::Mouse(mouse::Event::CursorMoved { position }),
            mouse::Cursor::Available(position),
        )
    }

    #[test]
    fn test_moves_in_one_batch_accumulate() {
        let params = EnvelopeParameters::default();
        let config = EditorConfig::default();
        let published = RefCell::new(Vec::new());
        let program = EnvelopeCanvas {
            params: &params,
            config: &config,
            on_change: |values: AdsrValues| {
                published.borrow_mut().push(values.attack);
                values
            },
        };
        let mut interaction = EnvelopeInteraction::default();

        // No view rebuild between events: the program keeps its original params
        for (event, cursor) in [press(40.0, 100.0), move_to(60.0, 100.0), move_to(80.0, 100.0)] {
            let _ = program.update(&mut interaction, &event, origin_bounds(), cursor);
        }

        let attack = published.borrow().clone();
        assert_eq!(attack.len(), 2);
        assert!((attack[0] - 0.6).abs() < 1e-5);
        assert!((attack[1] - 0.7).abs() < 1e-5);
    }

    #[test]
    fn test_release_ends_drag_and_clears_working_copy() {
        let params = EnvelopeParameters::default();
        let config = EditorConfig::default();
        let published = RefCell::new(0);
        let program = EnvelopeCanvas {
            params: &params,
            config: &config,
            on_change: |values: AdsrValues| {
                *published.borrow_mut() += 1;
                values
            },
        };
        let mut interaction = EnvelopeInteraction::default();
        let release = Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left));

        let (event, cursor) = press(40.0, 100.0);
        let _ = program.update(&mut interaction, &event, origin_bounds(), cursor);
        assert!(interaction.working.is_some());

        let _ = program.update(&mut interaction, &release, origin_bounds(), cursor);
        assert!(interaction.working.is_none());
        assert!(!interaction.gesture.is_dragging());

        let (event, cursor) = move_to(90.0, 100.0);
        let _ = program.update(&mut interaction, &event, origin_bounds(), cursor);
        assert_eq!(*published.borrow(), 0);
    }

    #[test]
    fn test_press_above_ceiling_starts_no_drag() {
        let params = EnvelopeParameters::default();
        let config = EditorConfig::default();
        let program = EnvelopeCanvas {
            params: &params,
            config: &config,
            on_change: |values: AdsrValues| values,
        };
        let mut interaction = EnvelopeInteraction::default();

        let (event, cursor) = press(40.0, 5.0);
        let _ = program.update(&mut interaction, &event, origin_bounds(), cursor);
        assert!(interaction.working.is_none());
        assert!(!interaction.gesture.is_dragging());
    }

    #[test]
    fn test_hover_uses_current_params_without_a_press() {
        let params = EnvelopeParameters::new(0.0, 0.2, 0.8, 0.3);
        let config = EditorConfig::default();
        let program = EnvelopeCanvas {
            params: &params,
            config: &config,
            on_change: |values: AdsrValues| values,
        };
        let interaction = EnvelopeInteraction::default();
        assert!(interaction.regions.is_none());

        let over_zone = mouse::Cursor::Available(Point::new(40.0, 100.0));
        assert_eq!(
            program.mouse_interaction(&interaction, origin_bounds(), over_zone),
            mouse::Interaction::Grab
        );

        let above_ceiling = mouse::Cursor::Available(Point::new(40.0, 5.0));
        assert_eq!(
            program.mouse_interaction(&interaction, origin_bounds(), above_ceiling),
            mouse::Interaction::default()
        );
    }
}
