// Copyright (c) 2023 Afonso Barracha
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde_json::json;
use thiserror::Error;

use crate::dtos::{objects::Message, responses};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ApiError(pub String);

/// The two calls a chat view makes against the gateway.
#[async_trait]
pub trait MessagesApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Message>, ApiError>;

    async fn append(&self, text: &str) -> Result<Message, ApiError>;
}

#[derive(Clone, Debug)]
pub struct HttpMessagesApi {
    client: Client,
    messages_url: String,
}

impl HttpMessagesApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            messages_url: format!("{}/messages", base_url.trim_end_matches('/')),
        }
    }
}

fn reason(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}

/// Prefers the gateway's `{"error": ...}` body, falling back to
/// `"<prefix>: <status reason>"` when it is missing or unreadable.
async fn error_from_response(response: Response, prefix: &str) -> ApiError {
    let fallback = format!("{}: {}", prefix, reason(response.status()));

    match response.json::<responses::Error>().await {
        Ok(body) if !body.error.is_empty() => ApiError(body.error),
        _ => ApiError(fallback),
    }
}

#[async_trait]
impl MessagesApi for HttpMessagesApi {
    async fn list(&self) -> Result<Vec<Message>, ApiError> {
        let response = self
            .client
            .get(&self.messages_url)
            .send()
            .await
            .map_err(|e| ApiError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(error_from_response(response, "Failed to fetch messages").await);
        }

        response
            .json::<Vec<Message>>()
            .await
            .map_err(|e| ApiError(e.to_string()))
    }

    async fn append(&self, text: &str) -> Result<Message, ApiError> {
        let response = self
            .client
            .post(&self.messages_url)
            .json(&json!({ "text": text }))
            .send()
            .await
            .map_err(|e| ApiError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(error_from_response(response, "Failed to post message").await);
        }

        response
            .json::<Message>()
            .await
            .map_err(|e| ApiError(e.to_string()))
    }
}
