use serde::Serialize;

// Outcome reported by the settings endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

// JSON envelope returned by the settings endpoint. Always sent with 200.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsStatusResponse {
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SettingsStatusResponse {
    pub fn success() -> Self {
        Self {
            status: ResponseStatus::Success,
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: Some(message.into()),
        }
    }
}
