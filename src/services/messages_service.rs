// Copyright (c) 2023 Afonso Barracha
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::common::{ServiceError, FAILED_TO_FETCH, FAILED_TO_POST};
use crate::config::Collection;
use crate::dtos::{bodies, objects::Message};
use crate::providers::ListStore;

#[tracing::instrument(skip_all, fields(key = %collection.key))]
pub async fn list_messages(
    store: &dyn ListStore,
    collection: &Collection,
) -> Result<Vec<Message>, ServiceError> {
    let records = store
        .range_all(&collection.key)
        .await
        .map_err(|e| ServiceError::store_unavailable(FAILED_TO_FETCH, Some(e)))?;

    records
        .iter()
        .map(|record| {
            serde_json::from_str::<Message>(record)
                .map_err(|e| ServiceError::data_corruption(FAILED_TO_FETCH, Some(e)))
        })
        .collect()
}

#[tracing::instrument(skip_all, fields(key = %collection.key))]
pub async fn append_message(
    store: &dyn ListStore,
    collection: &Collection,
    body: bodies::NewMessage,
) -> Result<Message, ServiceError> {
    let text = body.validate()?;
    let message = Message::new(text);
    let record = serde_json::to_string(&message)
        .map_err(|e| ServiceError::store_unavailable(FAILED_TO_POST, Some(e)))?;

    store
        .push_front(&collection.key, record, collection.max_length)
        .await
        .map_err(|e| ServiceError::store_unavailable(FAILED_TO_POST, Some(e)))?;
    tracing::trace!(id = %message.id, "Message stored");
    Ok(message)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use serde_json::json;
    use tracing::instrument::WithSubscriber;
    use tracing::span::{Attributes, Id};
    use tracing::Subscriber;
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
    use tracing_subscriber::Registry;

    use crate::providers::memory_store::MemoryStore;

    use super::*;

    #[derive(Clone, Default)]
    struct SpanNames(Arc<Mutex<Vec<String>>>);

    impl<S: Subscriber> Layer<S> for SpanNames {
        fn on_new_span(&self, attrs: &Attributes<'_>, _: &Id, _: Context<'_, S>) {
            self.0
                .lock()
                .unwrap()
                .push(attrs.metadata().name().to_string());
        }
    }

    #[tokio::test]
    async fn test_operations_run_inside_spans() {
        let store = MemoryStore::new();
        let collection = Collection::default();
        let names = SpanNames::default();
        let subscriber = Registry::default().with(names.clone());

        async {
            let body = bodies::NewMessage {
                text: Some(json!("hello")),
            };
            append_message(&store, &collection, body).await.unwrap();
            list_messages(&store, &collection).await.unwrap();
        }
        .with_subscriber(subscriber)
        .await;

        assert_eq!(
            *names.0.lock().unwrap(),
            vec!["append_message".to_string(), "list_messages".to_string()]
        );
    }
}
