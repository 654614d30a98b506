// Copyright (c) 2023 Afonso Barracha
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::Display;

use actix_web::{error, http::StatusCode, HttpResponse};
use derive_more::Display;

use crate::dtos::responses;

pub const FAILED_TO_FETCH: &str = "Failed to fetch messages";
pub const FAILED_TO_POST: &str = "Failed to post message";
pub const INVALID_BODY: &str = "Invalid request body";

#[derive(Debug, Display, PartialEq, Eq)]
pub enum ServiceError {
    InvalidInput(String),
    StoreUnavailable(String),
    DataCorruption(String),
}

impl ServiceError {
    pub fn invalid_input(message: &str) -> Self {
        tracing::debug!(reason = %message, "Rejected invalid input");
        Self::InvalidInput(message.to_string())
    }

    pub fn store_unavailable<E: Display>(message: &str, cause: Option<E>) -> Self {
        if let Some(cause) = cause {
            tracing::error!(error.message = %cause, "{}", message);
        }

        Self::StoreUnavailable(message.to_string())
    }

    pub fn data_corruption<E: Display>(message: &str, cause: Option<E>) -> Self {
        if let Some(cause) = cause {
            tracing::error!(error.message = %cause, "{}: stored record is unreadable", message);
        }

        Self::DataCorruption(message.to_string())
    }

    pub fn message(&self) -> &str {
        match self {
            ServiceError::InvalidInput(message)
            | ServiceError::StoreUnavailable(message)
            | ServiceError::DataCorruption(message) => message,
        }
    }
}

impl error::ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match *self {
            ServiceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ServiceError::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::DataCorruption(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(responses::Error::new(self.message()))
    }
}
