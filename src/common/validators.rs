// Copyright (c) 2023 Afonso Barracha
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use serde_json::Value;
use unicode_segmentation::UnicodeSegmentation;

use super::error_handling::ServiceError;

pub const MAX_MESSAGE_LENGTH: usize = 200;
pub const TEXT_REQUIRED: &str = "Message text is required";
pub const TEXT_TOO_LONG: &str = "Message too long (max 200 chars)";

#[derive(Debug, PartialEq, Eq)]
pub enum ValidatorEnum {
    Valid,
    Invalid(String),
}

pub fn validate_not_blank(value: &str) -> ValidatorEnum {
    if value.trim().is_empty() {
        return ValidatorEnum::Invalid(TEXT_REQUIRED.to_string());
    }

    ValidatorEnum::Valid
}

pub fn validate_max_length(value: &str, max: usize) -> ValidatorEnum {
    if value.graphemes(true).count() > max {
        return ValidatorEnum::Invalid(TEXT_TOO_LONG.to_string());
    }

    ValidatorEnum::Valid
}

/// Checks the raw `text` field of a new message and returns it trimmed.
///
/// Rules run in order and the first failure wins, so a blank value never
/// reports a length error.
pub fn validate_message_text(value: Option<&Value>) -> Result<String, ServiceError> {
    let text = match value {
        Some(Value::String(text)) => text.trim(),
        _ => return Err(ServiceError::invalid_input(TEXT_REQUIRED)),
    };
    validations_handler(&[
        validate_not_blank(text),
        validate_max_length(text, MAX_MESSAGE_LENGTH),
    ])?;
    Ok(text.to_string())
}

fn validations_handler(validations: &[ValidatorEnum]) -> Result<(), ServiceError> {
    let first_error = validations.iter().find_map(|validator| {
        if let ValidatorEnum::Invalid(message) = validator {
            Some(message.as_str())
        } else {
            None
        }
    });

    match first_error {
        Some(message) => Err(ServiceError::invalid_input(message)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_missing_or_non_string_text_is_required() {
        let missing = validate_message_text(None);
        assert_eq!(
            missing,
            Err(ServiceError::InvalidInput(TEXT_REQUIRED.to_string()))
        );

        for value in [json!(null), json!(42), json!(["hi"]), json!({"text": "hi"})] {
            let result = validate_message_text(Some(&value));
            assert_eq!(
                result,
                Err(ServiceError::InvalidInput(TEXT_REQUIRED.to_string()))
            );
        }
    }

    #[test]
    fn test_blank_text_is_required() {
        for value in ["", " ", "\n\t  "] {
            let result = validate_message_text(Some(&json!(value)));
            assert_eq!(
                result,
                Err(ServiceError::InvalidInput(TEXT_REQUIRED.to_string()))
            );
        }
    }

    #[test]
    fn test_text_is_trimmed() {
        let result = validate_message_text(Some(&json!("  hello  ")));
        assert_eq!(result, Ok("hello".to_string()));
    }

    #[test]
    fn test_length_is_checked_after_trimming() {
        let exact = "a".repeat(MAX_MESSAGE_LENGTH);
        let padded = format!("   {}   ", exact);
        assert_eq!(validate_message_text(Some(&json!(padded))), Ok(exact));

        let too_long = "a".repeat(MAX_MESSAGE_LENGTH + 1);
        assert_eq!(
            validate_message_text(Some(&json!(too_long))),
            Err(ServiceError::InvalidInput(TEXT_TOO_LONG.to_string()))
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let accented = "é".repeat(MAX_MESSAGE_LENGTH);
        assert!(accented.len() > MAX_MESSAGE_LENGTH);
        assert_eq!(validate_max_length(&accented, MAX_MESSAGE_LENGTH), ValidatorEnum::Valid);
    }

    #[test]
    fn test_length_counts_graphemes_at_the_limit() {
        let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";
        let combined = "e\u{301}";

        for cluster in [family, combined] {
            let at_limit = cluster.repeat(MAX_MESSAGE_LENGTH);
            assert!(at_limit.chars().count() > MAX_MESSAGE_LENGTH);
            assert_eq!(
                validate_message_text(Some(&json!(at_limit))),
                Ok(at_limit.clone())
            );

            let over_limit = cluster.repeat(MAX_MESSAGE_LENGTH + 1);
            assert_eq!(
                validate_message_text(Some(&json!(over_limit))),
                Err(ServiceError::InvalidInput(TEXT_TOO_LONG.to_string()))
            );
        }
    }
}
