// Copyright (c) 2023 Afonso Barracha
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use actix_web::{web, HttpResponse, Resource};

use crate::common::ServiceError;
use crate::config::Collection;
use crate::dtos::bodies;
use crate::providers::ListStore;
use crate::services::messages_service;

async fn list_messages(
    store: web::Data<dyn ListStore>,
    collection: web::Data<Collection>,
) -> Result<HttpResponse, ServiceError> {
    let messages = messages_service::list_messages(store.get_ref(), collection.get_ref()).await?;
    Ok(HttpResponse::Ok().json(messages))
}

async fn append_message(
    store: web::Data<dyn ListStore>,
    collection: web::Data<Collection>,
    body: web::Json<bodies::NewMessage>,
) -> Result<HttpResponse, ServiceError> {
    let message = messages_service::append_message(
        store.get_ref(),
        collection.get_ref(),
        body.into_inner(),
    )
    .await?;
    Ok(HttpResponse::Created().json(message))
}

pub fn messages_router() -> Resource {
    web::resource("/messages")
        .route(web::get().to(list_messages))
        .route(web::post().to(append_message))
}
