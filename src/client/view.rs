// Copyright (c) 2023 Afonso Barracha
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use chrono::Local;

use crate::dtos::objects::Message;

use super::api::{ApiError, MessagesApi};

pub const LOADING: &str = "Loading messages...";
pub const NO_MESSAGES: &str = "No messages yet. Start the conversation!";

/// Session-local state of the chat page.
///
/// The list is loaded once, oldest first. Sent messages are appended from the
/// gateway's response and the list is never fetched again, so messages from
/// other senders only show up on the next load. Load and submit failures are
/// tracked separately; a failed send never touches the loaded list.
pub struct ChatView<A: MessagesApi> {
    api: A,
    messages: Vec<Message>,
    input: String,
    is_loading: bool,
    load_error: Option<String>,
    is_submitting: bool,
    submit_error: Option<String>,
    scroll_target: Option<String>,
}

impl<A: MessagesApi> ChatView<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            messages: Vec::new(),
            input: String::new(),
            is_loading: true,
            load_error: None,
            is_submitting: false,
            submit_error: None,
            scroll_target: None,
        }
    }

    pub async fn mount(&mut self) {
        self.is_loading = true;
        self.load_error = None;
        let result = self.api.list().await;
        self.finish_load(result);
    }

    fn finish_load(&mut self, result: Result<Vec<Message>, ApiError>) {
        match result {
            Ok(mut messages) => {
                messages.reverse();
                self.messages = messages;
                self.scroll_to_latest();
            }
            Err(err) => {
                tracing::error!(error.message = %err, "Fetch messages error");
                self.load_error = Some(err.0);
            }
        }
        self.is_loading = false;
    }

    pub fn set_input(&mut self, value: &str) {
        self.input = value.to_string();
    }

    pub fn can_submit(&self) -> bool {
        !self.is_submitting && !self.input.trim().is_empty()
    }

    /// Marks a send as in flight and hands back the text to send, or `None`
    /// when the input is blank or a send is already pending.
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }

        self.is_submitting = true;
        self.submit_error = None;
        Some(self.input.clone())
    }

    pub fn finish_submit(&mut self, result: Result<Message, ApiError>) {
        match result {
            Ok(message) => {
                self.messages.push(message);
                self.input.clear();
                self.scroll_to_latest();
            }
            Err(err) => {
                tracing::error!(error.message = %err, "Submit message error");
                self.submit_error = Some(err.0);
            }
        }
        self.is_submitting = false;
    }

    pub async fn submit(&mut self) {
        if let Some(text) = self.begin_submit() {
            let result = self.api.append(&text).await;
            self.finish_submit(result);
        }
    }

    pub fn dismiss_submit_error(&mut self) {
        self.submit_error = None;
    }

    fn scroll_to_latest(&mut self) {
        self.scroll_target = self.messages.last().map(|message| message.id.clone());
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Id of the entry the list should be scrolled to.
    pub fn scroll_target(&self) -> Option<&str> {
        self.scroll_target.as_deref()
    }

    pub fn send_label(&self) -> &'static str {
        if self.is_submitting {
            "Sending..."
        } else {
            "Send"
        }
    }

    pub fn render(&self) -> String {
        let mut lines = Vec::<String>::new();

        if self.is_loading {
            lines.push(LOADING.to_string());
        }
        if let Some(error) = &self.load_error {
            lines.push(format!("Error: {}", error));
        }
        if !self.is_loading && self.load_error.is_none() {
            if self.messages.is_empty() {
                lines.push(NO_MESSAGES.to_string());
            }
            for message in &self.messages {
                lines.push(format!(
                    "[{}] {}",
                    message.timestamp.with_timezone(&Local).format("%H:%M"),
                    message.text
                ));
            }
        }
        if let Some(error) = &self.submit_error {
            lines.push(format!("Failed to send: {}", error));
        }

        lines.join("\n")
    }
}
