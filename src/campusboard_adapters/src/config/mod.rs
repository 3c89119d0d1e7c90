pub mod constants;
pub mod settings;

pub use settings::{ApiSettings, ClientSettings, HttpSettings, SessionSettings, default_builder};
