// Domain layer: pages served by the site and the settings payload rules.

pub mod errors;
pub mod pages;
pub mod settings;

pub use errors::SettingsError;
pub use pages::Page;
pub use settings::{SettingsPayload, parse_settings_payload};
