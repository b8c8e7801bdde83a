//! User interface modules for adsr-designer

pub mod app;
pub mod controls;
pub mod message;

pub use app::DesignerApp;
pub use message::Message;
