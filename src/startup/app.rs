// Copyright (c) 2023 Afonso Barracha
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::{io, net::TcpListener, sync::Arc};

use actix_web::{dev::Server, error::JsonPayloadError, web, HttpRequest, HttpServer};
use anyhow::Error;
use tracing_actix_web::TracingLogger;

use crate::common::{ServiceError, INVALID_BODY};
use crate::config::{Collection, Config};
use crate::controllers::{health_controller::health_router, messages_controller::messages_router};
use crate::providers::{Cache, ListStore};

pub struct App {
    port: u16,
    server: Server,
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error.message = %err, "Rejected request body");
    ServiceError::invalid_input(INVALID_BODY).into()
}

impl App {
    pub async fn new(config: &Config) -> Result<Self, Error> {
        let (host, port) = config.app_config();
        let store: Arc<dyn ListStore> = Arc::new(Cache::new(config.cache_config())?);
        let collection = config.collection().to_owned();
        let listener = TcpListener::bind(format!("{}:{}", host, port))?;
        let port = listener.local_addr()?.port();
        tracing::info!(
            host = %host,
            port = port,
            key = %collection.key,
            max_length = ?collection.max_length,
            "Starting messages gateway"
        );
        let server = HttpServer::new(move || {
            actix_web::App::new()
                .wrap(TracingLogger::default())
                .configure(Self::build_app_config(store.clone(), collection.clone()))
        })
        .listen(listener)?
        .run();
        Ok(Self { port, server })
    }

    /// Registers the routes and their shared state. The store is injected so
    /// tests can swap Redis for an in-process list.
    pub fn build_app_config(
        store: Arc<dyn ListStore>,
        collection: Collection,
    ) -> impl FnOnce(&mut web::ServiceConfig) {
        move |cfg| {
            cfg.app_data(web::Data::from(store))
                .app_data(web::Data::new(collection))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .service(health_router())
                .service(messages_router());
        }
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn start_server(self) -> Result<(), io::Error> {
        self.server.await
    }
}
