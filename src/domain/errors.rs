use std::fmt;

// Domain-level errors for the settings intake flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    // Anything other than POST reached the settings endpoint.
    InvalidMethod,
    // Body was read but is not JSON; carries the parser's description.
    MalformedPayload(String),
    // Body could not be read at all (e.g. over the size limit).
    UnreadableBody(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::InvalidMethod => f.write_str("Invalid method"),
            SettingsError::MalformedPayload(detail) | SettingsError::UnreadableBody(detail) => {
                f.write_str(detail)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
