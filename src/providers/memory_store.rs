// Copyright (c) 2023 Afonso Barracha
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::list_store::{ListStore, StoreError};

/// In-process stand-in for Redis lists.
#[derive(Default)]
pub struct MemoryStore {
    lists: Mutex<HashMap<String, Vec<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self, key: &str) -> usize {
        self.lists
            .lock()
            .unwrap()
            .get(key)
            .map(Vec::len)
            .unwrap_or(0)
    }

    pub fn seed(&self, key: &str, records: Vec<String>) {
        self.lists.lock().unwrap().insert(key.to_string(), records);
    }
}

#[async_trait]
impl ListStore for MemoryStore {
    async fn push_front(
        &self,
        key: &str,
        record: String,
        cap: Option<usize>,
    ) -> Result<(), StoreError> {
        let mut lists = self.lists.lock().unwrap();
        let list = lists.entry(key.to_string()).or_default();
        list.insert(0, record);

        if let Some(cap) = cap {
            list.truncate(cap);
        }

        Ok(())
    }

    async fn range_all(&self, key: &str) -> Result<Vec<String>, StoreError> {
        Ok(self
            .lists
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .unwrap_or_default())
    }
}

/// A store whose server never answers.
pub struct UnreachableStore;

#[async_trait]
impl ListStore for UnreachableStore {
    async fn push_front(&self, _: &str, _: String, _: Option<usize>) -> Result<(), StoreError> {
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn range_all(&self, _: &str) -> Result<Vec<String>, StoreError> {
        Err(StoreError::Connection("connection refused".to_string()))
    }
}
