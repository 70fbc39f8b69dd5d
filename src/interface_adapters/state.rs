use std::path::PathBuf;
use std::sync::Arc;

// Shared application state for the HTTP handlers. Immutable after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    // Site name shown in every rendered page.
    pub site_name: Arc<str>,
    // Upper bound on settings bodies read by the intake handler.
    pub max_body_bytes: usize,
    // Root of the browser assets served under the static route.
    pub static_dir: PathBuf,
}
