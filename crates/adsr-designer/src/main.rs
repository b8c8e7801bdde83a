//! ADSR Designer - envelope editor GUI
//!
//! ## Command line flags
//!
//! - `--config <path>`: load and save settings at `<path>`

use adsr_designer::cli::config_path_from_args;
use adsr_designer::ui::DesignerApp;

fn title(_app: &DesignerApp) -> String {
    String::from("ADSR Designer")
}

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config_path = config_path_from_args(std::env::args());
    log::info!("adsr-designer starting up (config: {:?})", config_path);

    iced::application(
        move || DesignerApp::new(config_path.clone()),
        DesignerApp::update,
        DesignerApp::view,
    )
    .title(title)
    .window_size(iced::Size::new(520.0, 520.0))
    .theme(DesignerApp::theme)
    .run()
}
