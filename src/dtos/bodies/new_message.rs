// Copyright (c) 2023 Afonso Barracha
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::{validate_message_text, ServiceError};

/// Body of `POST /messages`. Any JSON value is accepted and only an
/// object's `text` field is kept, so arrays, scalars and a missing or
/// non-string `text` all end up as a validation error.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(from = "Value")]
pub struct NewMessage {
    pub text: Option<Value>,
}

impl From<Value> for NewMessage {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(mut fields) => Self {
                text: fields.remove("text"),
            },
            _ => Self::default(),
        }
    }
}

impl NewMessage {
    pub fn validate(self) -> Result<String, ServiceError> {
        validate_message_text(self.text.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_only_objects_carry_text() {
        let body: NewMessage = serde_json::from_value(json!({ "text": "hi" })).unwrap();
        assert_eq!(body.text, Some(json!("hi")));

        for value in [json!(["hi"]), json!("hi"), json!(null), json!(3)] {
            let body: NewMessage = serde_json::from_value(value).unwrap();
            assert_eq!(body.text, None);
        }
    }
}
