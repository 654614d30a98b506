// Copyright (c) 2023 Afonso Barracha
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("list store connection failed: {0}")]
    Connection(String),
    #[error("list store command failed: {0}")]
    Command(String),
}

/// A named-list backend. Records are opaque serialized strings; the head of
/// the list is the most recently pushed record.
#[async_trait]
pub trait ListStore: Send + Sync {
    /// Inserts `record` at the head of `key` as a single atomic step. When
    /// `cap` is set the list is trimmed to its first `cap` entries in the
    /// same step.
    async fn push_front(&self, key: &str, record: String, cap: Option<usize>)
        -> Result<(), StoreError>;

    /// Returns every record of `key` in native order, empty when the key
    /// does not exist.
    async fn range_all(&self, key: &str) -> Result<Vec<String>, StoreError>;
}
