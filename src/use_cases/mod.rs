// Use cases layer: application workflows for the site.

pub mod save_settings;

pub use save_settings::{SettingsSubmission, save_settings};
