//! # Inventory Store Sync
//!
//! The core component: owns the in-memory snapshot of the remote inventory
//! collection and keeps it consistent by fully reloading after every
//! mutation. There is no incremental patching and no cache beyond the one
//! snapshot; the remote collection is always the source of truth.
//!
//! ## Consistency model
//!
//! Each mutation is a read, a write, then a resync, issued as three separate
//! store calls. A failure at any step surfaces an [`InventoryError`] and the
//! later steps are skipped; the snapshot stays whatever the last successful
//! load produced.
//!
//! The read-then-write pair is **not** atomic. Two sessions incrementing the
//! same key can both read quantity N and both write N+1, losing an
//! increment. The store only guarantees per-call atomicity, and this
//! component holds no lock across the pair. That window is inherent to the
//! design and demonstrated in the integration tests rather than papered
//! over. Within one session, callers are expected to await each mutation
//! before issuing the next.

use crate::inventory::error::InventoryError;
use crate::inventory::name::normalize_name;
use crate::model::{filter_items, Item, ItemFields};
use crate::store::DatabaseClient;
use tracing::{debug, info, instrument};

/// Default collection name backing the inventory.
pub const DEFAULT_COLLECTION: &str = "inventory";

/// State container for the inventory view of one remote collection.
///
/// Owns the snapshot explicitly; tests drive it without any UI harness by
/// handing it a scripted [`DatabaseClient`].
pub struct InventorySync {
    client: DatabaseClient<ItemFields>,
    collection: String,
    snapshot: Vec<Item>,
}

impl InventorySync {
    /// Creates a sync component over the default `"inventory"` collection.
    pub fn new(client: DatabaseClient<ItemFields>) -> Self {
        Self::with_collection(client, DEFAULT_COLLECTION)
    }

    /// Creates a sync component over a named collection.
    pub fn with_collection(client: DatabaseClient<ItemFields>, collection: &str) -> Self {
        Self {
            client,
            collection: collection.to_string(),
            snapshot: Vec::new(),
        }
    }

    /// The snapshot from the last successful [`load`](Self::load).
    pub fn snapshot(&self) -> &[Item] {
        &self.snapshot
    }

    /// Replaces the snapshot with the remote collection's current contents.
    ///
    /// Document order is whatever the store returns; callers must not rely
    /// on it being stable. On failure the previous snapshot is kept.
    #[instrument(skip(self))]
    pub async fn load(&mut self) -> Result<(), InventoryError> {
        let docs = self.client.list(&self.collection).await?;
        self.snapshot = docs
            .into_iter()
            .map(|(name, fields)| Item::new(name, fields.quantity))
            .collect();
        debug!(size = self.snapshot.len(), "Snapshot reloaded");
        Ok(())
    }

    /// Adds one unit of the named item, creating the document at quantity 1
    /// if it does not exist, then resyncs the snapshot.
    ///
    /// The name is canonicalized first, so "apple", "Apple" and "APPLE" all
    /// land on one key. Rejects names without letters before touching the
    /// store.
    #[instrument(skip(self))]
    pub async fn add(&mut self, raw_name: &str) -> Result<(), InventoryError> {
        let key = normalize_name(raw_name)?;

        debug!(%key, "Reading current quantity");
        let existing = self.client.get(&self.collection, &key).await?;
        let quantity = existing.map(|f| f.quantity.saturating_add(1)).unwrap_or(1);

        debug!(%key, quantity, "Writing incremented quantity");
        self.client
            .set(&self.collection, &key, ItemFields { quantity })
            .await?;
        info!(%key, quantity, "Item added");

        self.load().await
    }

    /// Removes one unit of the exact key given, deleting the document when
    /// the count would reach zero, then resyncs the snapshot.
    ///
    /// The key is taken verbatim because the view hands back names from the
    /// snapshot, which are already canonical. An absent key is a no-op that
    /// still resyncs.
    #[instrument(skip(self))]
    pub async fn remove(&mut self, name: &str) -> Result<(), InventoryError> {
        debug!(key = %name, "Reading current quantity");
        match self.client.get(&self.collection, name).await? {
            None => {
                debug!(key = %name, "Item absent, nothing to remove");
            }
            Some(fields) if fields.quantity <= 1 => {
                debug!(key = %name, "Quantity reached zero, deleting document");
                self.client.delete(&self.collection, name).await?;
                info!(key = %name, "Item deleted");
            }
            Some(fields) => {
                let quantity = fields.quantity - 1;
                debug!(key = %name, quantity, "Writing decremented quantity");
                self.client
                    .set(&self.collection, name, ItemFields { quantity })
                    .await?;
                info!(key = %name, quantity, "Item removed");
            }
        }

        self.load().await
    }

    /// Filters the last-loaded snapshot by case-insensitive substring.
    ///
    /// Pure and synchronous; never touches the store. An empty query returns
    /// the full snapshot, order preserved.
    pub fn search(&self, query: &str) -> Vec<&Item> {
        filter_items(&self.snapshot, query)
    }
}
