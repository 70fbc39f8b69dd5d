use crate::domain::{SettingsError, SettingsPayload, parse_settings_payload};

// What reached the settings endpoint, reduced to the parts the workflow
// branches on.
#[derive(Debug)]
pub enum SettingsSubmission<'a> {
    // POST with a body that was read successfully.
    Post(&'a [u8]),
    // POST whose body could not be read; carries the read failure text.
    PostUnreadable(String),
    // Any other method. The body is never looked at.
    OtherMethod,
}

// Accept a settings submission. Nothing is persisted: a successful result
// only means the body was valid JSON.
pub fn save_settings(submission: SettingsSubmission<'_>) -> Result<SettingsPayload, SettingsError> {
    match submission {
        SettingsSubmission::Post(body) => parse_settings_payload(body),
        SettingsSubmission::PostUnreadable(detail) => Err(SettingsError::UnreadableBody(detail)),
        SettingsSubmission::OtherMethod => Err(SettingsError::InvalidMethod),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_post_body_is_valid_json_then_submission_is_accepted() {
        let result = save_settings(SettingsSubmission::Post(br#"{"volume": 80}"#));

        assert!(result.is_ok());
    }

    #[test]
    fn when_same_body_is_posted_twice_then_both_are_accepted() {
        let body = br#"{"difficulty":"hard","sound":true}"#;

        let first = save_settings(SettingsSubmission::Post(body)).expect("expected first save");
        let second = save_settings(SettingsSubmission::Post(body)).expect("expected second save");

        assert_eq!(first, second);
    }

    #[test]
    fn when_post_body_is_malformed_then_returns_malformed_payload() {
        let result = save_settings(SettingsSubmission::Post(b"not-json"));

        assert!(matches!(result, Err(SettingsError::MalformedPayload(_))));
    }

    #[test]
    fn when_method_is_not_post_then_returns_invalid_method() {
        let result = save_settings(SettingsSubmission::OtherMethod);

        assert_eq!(result, Err(SettingsError::InvalidMethod));
    }

    #[test]
    fn when_post_body_is_unreadable_then_returns_unreadable_body() {
        let result = save_settings(SettingsSubmission::PostUnreadable("length limit exceeded".into()));

        assert_eq!(
            result,
            Err(SettingsError::UnreadableBody("length limit exceeded".into()))
        );
    }
}
