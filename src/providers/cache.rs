// Copyright (c) 2023 Afonso Barracha
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::sync::Arc;

use anyhow::Error;
use async_trait::async_trait;
use redis::{aio::MultiplexedConnection, AsyncCommands, Client, RedisError};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::Mutex;

use super::list_store::{ListStore, StoreError};

/// Redis-backed list store. The client is built at startup; the connection
/// is opened on first use and shared by every request afterwards. A failed
/// connect is reported at once and only attempted again by the next request.
#[derive(Clone)]
pub struct Cache {
    client: Client,
    connection: Arc<Mutex<Option<MultiplexedConnection>>>,
}

impl Cache {
    pub fn new(url: &Secret<String>) -> Result<Self, Error> {
        let client = Client::open(url.expose_secret().to_owned())?;

        Ok(Self {
            client,
            connection: Default::default(),
        })
    }

    pub async fn get_connection(&self) -> Result<MultiplexedConnection, StoreError> {
        let mut connection = self.connection.lock().await;

        if let Some(con) = connection.as_ref() {
            return Ok(con.clone());
        }

        tracing::info!("Connecting to Redis");
        match self.client.get_multiplexed_tokio_connection().await {
            Ok(con) => {
                tracing::info!("Successfully connected to Redis");
                *connection = Some(con.clone());
                Ok(con)
            }
            Err(err) => Err(StoreError::Connection(err.to_string())),
        }
    }

    /// Maps a command failure, forgetting the shared connection when it is
    /// the connection that broke.
    async fn command_error(&self, err: RedisError) -> StoreError {
        if err.is_connection_dropped() || err.is_connection_refusal() || err.is_timeout() {
            tracing::warn!(error.message = %err, "Dropping Redis connection");
            *self.connection.lock().await = None;
            StoreError::Connection(err.to_string())
        } else {
            StoreError::Command(err.to_string())
        }
    }
}

#[async_trait]
impl ListStore for Cache {
    async fn push_front(
        &self,
        key: &str,
        record: String,
        cap: Option<usize>,
    ) -> Result<(), StoreError> {
        let mut con = self.get_connection().await?;

        match cap {
            Some(cap) => {
                let stop = isize::try_from(cap).unwrap_or(isize::MAX) - 1;
                let result = redis::pipe()
                    .atomic()
                    .lpush(key, record)
                    .ignore()
                    .ltrim(key, 0, stop)
                    .ignore()
                    .query_async::<_, ()>(&mut con)
                    .await;
                match result {
                    Ok(()) => Ok(()),
                    Err(err) => Err(self.command_error(err).await),
                }
            }
            None => match con.lpush::<_, _, ()>(key, record).await {
                Ok(()) => Ok(()),
                Err(err) => Err(self.command_error(err).await),
            },
        }
    }

    async fn range_all(&self, key: &str) -> Result<Vec<String>, StoreError> {
        let mut con = self.get_connection().await?;
        match con.lrange::<_, Vec<String>>(key, 0, -1).await {
            Ok(records) => Ok(records),
            Err(err) => Err(self.command_error(err).await),
        }
    }
}
