use crate::domain::errors::SettingsError;
use serde_json::Value;

// Arbitrary JSON submitted by the settings screen. No field is read and the
// value is dropped once the request completes.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsPayload(Value);

impl SettingsPayload {
    // Shape of the submitted JSON, used for request logging only.
    pub fn kind(&self) -> &'static str {
        match &self.0 {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

// Parse a raw request body as JSON. This is the only step allowed to fail
// with a malformed payload.
pub fn parse_settings_payload(body: &[u8]) -> Result<SettingsPayload, SettingsError> {
    serde_json::from_slice::<Value>(body)
        .map(SettingsPayload)
        .map_err(|err| SettingsError::MalformedPayload(err.to_string()))
}
