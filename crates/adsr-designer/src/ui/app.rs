//! Main application state and update loop

use std::path::PathBuf;

use adsr_core::config::{load_config, save_config, EditorConfig};
use adsr_core::layout::section_max;
use adsr_core::params::clamp_unit;
use adsr_core::units::DurationEnvelope;
use adsr_core::{EnvelopeParameters, DEFAULT_CANVAS_SIZE};
use adsr_widgets::{adsr_envelope_sized, CANVAS_BACKGROUND};
use iced::widget::{button, checkbox, column, container, row, text, Space};
use iced::{Alignment, Element, Length, Task, Theme};

use super::controls::{amount_label, duration_label, param_slider};
use super::message::Message;

/// Envelope designer application
pub struct DesignerApp {
    params: EnvelopeParameters,
    config: EditorConfig,
    config_path: PathBuf,
    /// Position of the combined curve slider
    all_curves: f32,
}

impl DesignerApp {
    /// Create a new application instance, loading config from `config_path`
    pub fn new(config_path: PathBuf) -> (Self, Task<Message>) {
        let config: EditorConfig = load_config(&config_path);
        log::info!(
            "Loaded config: drag slew {}, {} px/s",
            config.drag_slew,
            config.time_scale.pixels_per_second
        );

        (Self::with_config(config, config_path), Task::none())
    }

    /// Create an instance from an already loaded config
    pub fn with_config(config: EditorConfig, config_path: PathBuf) -> Self {
        let params = EnvelopeParameters::default();
        Self {
            all_curves: params.attack_curve(),
            params,
            config,
            config_path,
        }
    }

    pub fn params(&self) -> &EnvelopeParameters {
        &self.params
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn all_curves(&self) -> f32 {
        self.all_curves
    }

    /// Current envelope in milliseconds at the configured time scale
    pub fn durations(&self) -> DurationEnvelope {
        let budget = section_max(DEFAULT_CANVAS_SIZE.width, &self.config.layout);
        self.config.time_scale.to_durations(&self.params.values(), budget)
    }

    /// Update state based on message
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::EnvelopeChanged(values) => {
                self.params.set_values(values);
            }

            Message::SetAttack(value) => {
                self.params.set_attack(value);
            }
            Message::SetAttackCurve(value) => {
                self.params.set_attack_curve(value);
            }
            Message::SetDecay(value) => {
                self.params.set_decay(value);
            }
            Message::SetDecayCurve(value) => {
                self.params.set_decay_curve(value);
            }
            Message::SetSustain(value) => {
                self.params.set_sustain(value);
            }
            Message::SetRelease(value) => {
                self.params.set_release(value);
            }
            Message::SetReleaseCurve(value) => {
                self.params.set_release_curve(value);
            }
            Message::SetAllCurves(value) => {
                self.all_curves = clamp_unit(value);
                self.params.set_all_curves(value);
            }

            Message::ToggleGradient(enabled) => {
                self.config.style.gradient = enabled;
            }
            Message::ToggleMarkers(enabled) => {
                self.config.style.show_markers = enabled;
            }

            Message::SaveConfig => {
                if let Err(e) = save_config(&self.config, &self.config_path) {
                    log::error!("Failed to save config: {:#}", e);
                }
            }
        }

        Task::none()
    }

    /// Render the UI
    pub fn view(&self) -> Element<'_, Message> {
        let envelope = container(adsr_envelope_sized(
            &self.params,
            &self.config,
            DEFAULT_CANVAS_SIZE.width,
            DEFAULT_CANVAS_SIZE.height,
            Message::EnvelopeChanged,
        ))
        .style(|_theme| container::Style {
            background: Some(CANVAS_BACKGROUND.into()),
            ..Default::default()
        });

        let p = &self.params;
        let ms = self.durations();

        let left = column![
            param_slider(duration_label("Attack", p.attack(), ms.attack_ms), p.attack(), Message::SetAttack),
            param_slider(amount_label("Attack Curve", p.attack_curve()), p.attack_curve(), Message::SetAttackCurve),
            param_slider(duration_label("Decay", p.decay(), ms.decay_ms), p.decay(), Message::SetDecay),
            param_slider(amount_label("Decay Curve", p.decay_curve()), p.decay_curve(), Message::SetDecayCurve),
        ]
        .spacing(10)
        .width(Length::Fill);

        let right = column![
            param_slider(amount_label("Sustain", p.sustain()), p.sustain(), Message::SetSustain),
            param_slider(duration_label("Release", p.release(), ms.release_ms), p.release(), Message::SetRelease),
            param_slider(amount_label("Release Curve", p.release_curve()), p.release_curve(), Message::SetReleaseCurve),
            param_slider(amount_label("All Curves", self.all_curves), self.all_curves, Message::SetAllCurves),
        ]
        .spacing(10)
        .width(Length::Fill);

        let footer = row![
            checkbox(self.config.style.gradient)
                .label("Gradient")
                .on_toggle(Message::ToggleGradient)
                .size(14),
            checkbox(self.config.style.show_markers)
                .label("Markers")
                .on_toggle(Message::ToggleMarkers)
                .size(14),
            Space::new().width(Length::Fill),
            button(text("Save Settings").size(12)).on_press(Message::SaveConfig),
        ]
        .spacing(16)
        .align_y(Alignment::Center);

        let main = column![envelope, row![left, right].spacing(24), footer].spacing(16);

        container(main)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(20)
            .into()
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adsr_core::AdsrValues;
    use adsr_core::units::TimeScale;

    fn app() -> DesignerApp {
        DesignerApp::with_config(EditorConfig::default(), PathBuf::from("/nonexistent/config.yaml"))
    }

    #[test]
    fn test_envelope_change_mirrors_into_sliders() {
        let mut app = app();
        let values = AdsrValues {
            attack: 0.9,
            decay: 0.1,
            sustain: 0.3,
            release: 0.7,
        };
        let _ = app.update(Message::EnvelopeChanged(values));
        assert_eq!(app.params().values(), values);
    }

    #[test]
    fn test_slider_writes_are_clamped() {
        let mut app = app();
        let _ = app.update(Message::SetSustain(1.5));
        let _ = app.update(Message::SetRelease(-0.2));
        assert_eq!(app.params().sustain(), 1.0);
        assert_eq!(app.params().release(), 0.0);
    }

    #[test]
    fn test_all_curves_sets_every_curve() {
        let mut app = app();
        let _ = app.update(Message::SetDecayCurve(0.9));
        let _ = app.update(Message::SetAllCurves(0.2));

        assert_eq!(app.all_curves(), 0.2);
        assert_eq!(app.params().attack_curve(), 0.2);
        assert_eq!(app.params().decay_curve(), 0.2);
        assert_eq!(app.params().release_curve(), 0.2);
    }

    #[test]
    fn test_durations_follow_time_scale() {
        let mut app = app();
        let _ = app.update(Message::SetAttack(0.25));

        let budget = section_max(DEFAULT_CANVAS_SIZE.width, &app.config().layout);
        let expected = TimeScale::default().ms_from_amount(0.25, budget);
        assert_eq!(app.durations().attack_ms, expected);
        assert_eq!(app.durations().sustain, 0.5);
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let (app, _) = DesignerApp::new(PathBuf::from("/nonexistent/adsr/config.yaml"));
        assert_eq!(*app.config(), EditorConfig::default());
    }

    #[test]
    fn test_save_config_persists_style() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("adsr-designer").join("config.yaml");
        let mut app = DesignerApp::with_config(EditorConfig::default(), path.clone());

        let _ = app.update(Message::ToggleGradient(true));
        let _ = app.update(Message::ToggleMarkers(true));
        let _ = app.update(Message::SaveConfig);

        let loaded: EditorConfig = load_config(&path);
        assert!(loaded.style.gradient);
        assert!(loaded.style.show_markers);
    }
}
