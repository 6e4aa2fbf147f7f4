//! # Remote Collection Engine
//!
//! This module models the hosted keyed document database the inventory
//! component talks to.
//!
//! ## Key Types
//!
//! - [`DocumentFields`]: Bound for document payload types.
//! - [`DatabaseActor`]: The engine task owning all collections.
//! - [`DatabaseClient`]: The handle used to issue store calls.
//! - [`StoreError`]: Store-level failures (e.g. Unavailable).
//!
//! The engine is a single task processing requests sequentially off an mpsc
//! channel, so each individual `get`/`set`/`delete`/`list` call is atomic.
//! Nothing here makes a read-then-write *pair* atomic; callers composing the
//! two get exactly the per-call guarantees a remote document service offers.

use std::collections::HashMap;
use std::fmt::Debug;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

/// Bound for document payload types stored under a key.
///
/// Blanket-implemented; any cloneable, printable, thread-safe type qualifies.
pub trait DocumentFields: Clone + Debug + Send + Sync + 'static {}

impl<T: Clone + Debug + Send + Sync + 'static> DocumentFields for T {}

/// Errors surfaced by store calls.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// The remote call failed. Carries a human-readable reason.
    #[error("store unavailable: {0}")]
    Unavailable(String),
    /// The engine task has shut down and no longer accepts requests.
    #[error("database engine closed")]
    EngineClosed,
    /// The engine dropped the response channel mid-request.
    #[error("database engine dropped response channel")]
    EngineDropped,
}

/// One-shot response channel used by the engine.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Request message sent to the database engine.
///
/// The variants mirror the four calls a hosted document store exposes:
/// list a collection, and get/set/delete a single keyed document. Every
/// variant names its collection so one engine can serve several collections,
/// the way one database instance backs many logical collections remotely.
#[derive(Debug)]
pub enum DatabaseRequest<F: DocumentFields> {
    List {
        collection: String,
        respond_to: Response<Vec<(String, F)>>,
    },
    Get {
        collection: String,
        key: String,
        respond_to: Response<Option<F>>,
    },
    Set {
        collection: String,
        key: String,
        fields: F,
        respond_to: Response<()>,
    },
    Delete {
        collection: String,
        key: String,
        respond_to: Response<()>,
    },
}

/// The engine task owning all collections.
///
/// State lives exclusively inside this task; requests are processed one at a
/// time off the channel, so no locks are needed and each call is atomic with
/// respect to every other call.
pub struct DatabaseActor<F: DocumentFields> {
    receiver: mpsc::Receiver<DatabaseRequest<F>>,
    collections: HashMap<String, HashMap<String, F>>,
}

impl<F: DocumentFields> DatabaseActor<F> {
    pub fn new(buffer_size: usize) -> (Self, DatabaseClient<F>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            collections: HashMap::new(),
        };
        (actor, DatabaseClient::new(sender))
    }

    /// Runs the engine's event loop until every client handle is dropped.
    pub async fn run(mut self) {
        info!("Database engine started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                DatabaseRequest::List {
                    collection,
                    respond_to,
                } => {
                    let docs: Vec<(String, F)> = self
                        .collections
                        .get(&collection)
                        .map(|col| {
                            col.iter()
                                .map(|(k, f)| (k.clone(), f.clone()))
                                .collect()
                        })
                        .unwrap_or_default();
                    debug!(%collection, count = docs.len(), "List");
                    let _ = respond_to.send(Ok(docs));
                }
                DatabaseRequest::Get {
                    collection,
                    key,
                    respond_to,
                } => {
                    let fields = self
                        .collections
                        .get(&collection)
                        .and_then(|col| col.get(&key))
                        .cloned();
                    debug!(%collection, %key, found = fields.is_some(), "Get");
                    let _ = respond_to.send(Ok(fields));
                }
                DatabaseRequest::Set {
                    collection,
                    key,
                    fields,
                    respond_to,
                } => {
                    debug!(%collection, %key, ?fields, "Set");
                    let col = self.collections.entry(collection.clone()).or_default();
                    col.insert(key.clone(), fields);
                    info!(%collection, %key, size = col.len(), "Document written");
                    let _ = respond_to.send(Ok(()));
                }
                DatabaseRequest::Delete {
                    collection,
                    key,
                    respond_to,
                } => {
                    debug!(%collection, %key, "Delete");
                    match self.collections.get_mut(&collection) {
                        Some(col) => {
                            // Deleting an absent document succeeds, matching
                            // remote document-store semantics.
                            let removed = col.remove(&key).is_some();
                            if removed {
                                info!(%collection, %key, size = col.len(), "Document deleted");
                            } else {
                                warn!(%collection, %key, "Delete of absent document");
                            }
                        }
                        None => {
                            warn!(%collection, %key, "Delete in absent collection");
                        }
                    }
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(collections = self.collections.len(), "Database engine shutdown");
    }
}

/// Client handle for issuing store calls to a [`DatabaseActor`].
///
/// Cloneable; every clone talks to the same engine task. Channel failures
/// (engine gone) surface as [`StoreError`] values rather than panics.
#[derive(Clone)]
pub struct DatabaseClient<F: DocumentFields> {
    sender: mpsc::Sender<DatabaseRequest<F>>,
}

impl<F: DocumentFields> DatabaseClient<F> {
    pub fn new(sender: mpsc::Sender<DatabaseRequest<F>>) -> Self {
        Self { sender }
    }

    /// Fetches every `(key, fields)` pair in a collection.
    ///
    /// Iteration order is not guaranteed stable between calls.
    pub async fn list(&self, collection: &str) -> Result<Vec<(String, F)>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(DatabaseRequest::List {
                collection: collection.to_string(),
                respond_to,
            })
            .await
            .map_err(|_| StoreError::EngineClosed)?;
        response.await.map_err(|_| StoreError::EngineDropped)?
    }

    /// Fetches a single document's fields, or `None` if the key is absent.
    pub async fn get(&self, collection: &str, key: &str) -> Result<Option<F>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(DatabaseRequest::Get {
                collection: collection.to_string(),
                key: key.to_string(),
                respond_to,
            })
            .await
            .map_err(|_| StoreError::EngineClosed)?;
        response.await.map_err(|_| StoreError::EngineDropped)?
    }

    /// Writes a document, creating or overwriting it.
    pub async fn set(&self, collection: &str, key: &str, fields: F) -> Result<(), StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(DatabaseRequest::Set {
                collection: collection.to_string(),
                key: key.to_string(),
                fields,
                respond_to,
            })
            .await
            .map_err(|_| StoreError::EngineClosed)?;
        response.await.map_err(|_| StoreError::EngineDropped)?
    }

    /// Deletes a document. Succeeds even if the key is absent.
    pub async fn delete(&self, collection: &str, key: &str) -> Result<(), StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(DatabaseRequest::Delete {
                collection: collection.to_string(),
                key: key.to_string(),
                respond_to,
            })
            .await
            .map_err(|_| StoreError::EngineClosed)?;
        response.await.map_err(|_| StoreError::EngineDropped)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Fields {
        quantity: u32,
    }

    #[tokio::test]
    async fn test_document_crud() {
        let (actor, client) = DatabaseActor::<Fields>::new(10);
        let handle = tokio::spawn(actor.run());

        // Empty collection lists as empty, absent key reads as None
        assert_eq!(client.list("inventory").await.unwrap(), vec![]);
        assert_eq!(client.get("inventory", "Apple").await.unwrap(), None);

        // Write then read back
        client
            .set("inventory", "Apple", Fields { quantity: 2 })
            .await
            .unwrap();
        assert_eq!(
            client.get("inventory", "Apple").await.unwrap(),
            Some(Fields { quantity: 2 })
        );

        // Overwrite replaces fields
        client
            .set("inventory", "Apple", Fields { quantity: 5 })
            .await
            .unwrap();
        assert_eq!(
            client.get("inventory", "Apple").await.unwrap(),
            Some(Fields { quantity: 5 })
        );

        // Delete removes the document; deleting again still succeeds
        client.delete("inventory", "Apple").await.unwrap();
        assert_eq!(client.get("inventory", "Apple").await.unwrap(), None);
        client.delete("inventory", "Apple").await.unwrap();

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_collections_are_isolated() {
        let (actor, client) = DatabaseActor::<Fields>::new(10);
        tokio::spawn(actor.run());

        client
            .set("inventory", "Apple", Fields { quantity: 1 })
            .await
            .unwrap();
        client
            .set("archive", "Banana", Fields { quantity: 9 })
            .await
            .unwrap();

        assert_eq!(client.list("inventory").await.unwrap().len(), 1);
        assert_eq!(client.list("archive").await.unwrap().len(), 1);
        assert_eq!(client.get("archive", "Apple").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_closed_engine_surfaces_error() {
        let (actor, client) = DatabaseActor::<Fields>::new(10);
        // Engine never runs; drop it so the channel closes.
        drop(actor);

        let err = client.get("inventory", "Apple").await.unwrap_err();
        assert_eq!(err, StoreError::EngineClosed);
    }
}
