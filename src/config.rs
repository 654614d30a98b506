// Copyright (c) 2023 Afonso Barracha
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::env;

use anyhow::{anyhow, Error};
use secrecy::Secret;

const DEFAULT_MESSAGES_KEY: &str = "guestbook_messages";
const DEFAULT_PORT: u16 = 8080;

#[derive(Clone, Debug)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        match self {
            Environment::Development => false,
            Environment::Production => true,
        }
    }
}

/// The list that holds every message, plus the optional length cap applied
/// on each insert. No cap unless `MESSAGES_MAX_LENGTH` is set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collection {
    pub key: String,
    pub max_length: Option<usize>,
}

impl Collection {
    pub fn new(key: &str, max_length: Option<usize>) -> Self {
        Self {
            key: key.to_string(),
            max_length,
        }
    }
}

impl Default for Collection {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGES_KEY, None)
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    environment: Environment,
    host: String,
    port: u16,
    redis_url: Secret<String>,
    collection: Collection,
}

type Host = String;
type Port = u16;

fn parse_max_length(value: Option<String>) -> Result<Option<usize>, Error> {
    let value = match value {
        Some(value) if !value.trim().is_empty() => value,
        _ => return Ok(None),
    };

    match value.trim().parse::<usize>() {
        Ok(0) | Err(_) => Err(anyhow!(
            "MESSAGES_MAX_LENGTH must be a positive integer, got {:?}.",
            value
        )),
        Ok(max_length) => Ok(Some(max_length)),
    }
}

fn parse_port(value: Option<String>) -> Result<u16, Error> {
    let value = match value {
        Some(value) if !value.trim().is_empty() => value,
        _ => return Ok(DEFAULT_PORT),
    };

    value
        .trim()
        .parse::<u16>()
        .map_err(|_| anyhow!("PORT must be a port number, got {:?}.", value))
}

impl Config {
    pub fn new() -> Result<Self, Error> {
        let mut environment = Environment::Development;

        if dotenvy::dotenv().is_err() {
            environment = Environment::Production;
        }

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = parse_port(env::var("PORT").ok())?;
        let redis_url = env::var("REDIS_URL")
            .map_err(|_| anyhow!("Missing the REDIS_URL environment variable."))?;
        let messages_key =
            env::var("MESSAGES_KEY").unwrap_or_else(|_| DEFAULT_MESSAGES_KEY.to_string());
        let max_length = parse_max_length(env::var("MESSAGES_MAX_LENGTH").ok())?;

        Ok(Self {
            environment,
            host,
            port,
            redis_url: Secret::new(redis_url),
            collection: Collection::new(&messages_key, max_length),
        })
    }

    pub fn app_config(&self) -> (Host, Port) {
        (self.host.to_owned(), self.port)
    }

    pub fn cache_config(&self) -> &Secret<String> {
        &self.redis_url
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn get_environment(&self) -> Environment {
        self.environment.to_owned()
    }
}
