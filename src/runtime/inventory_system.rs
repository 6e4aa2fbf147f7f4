//! System orchestration: engine startup, session wiring, graceful shutdown.

use crate::inventory::InventorySync;
use crate::model::ItemFields;
use crate::store::{DatabaseActor, DatabaseClient};
use crate::view::InventoryView;
use tracing::{error, info};

/// Default request-channel capacity for the database engine.
const DEFAULT_BUFFER_SIZE: usize = 32;

/// Runtime orchestrator for the inventory application.
///
/// Spawns the database engine in its own task and hands out per-session
/// sync components over it. Sessions share the engine but nothing else:
/// there is no cross-session ordering or mutual exclusion, the same way
/// separate browser tabs share only the hosted store.
///
/// # Example
///
/// ```ignore
/// let system = InventorySystem::new();
/// let mut view = system.view_session();
/// view.refresh().await?;
/// system.shutdown().await?;
/// ```
pub struct InventorySystem {
    db_client: DatabaseClient<ItemFields>,
    handle: tokio::task::JoinHandle<()>,
}

impl InventorySystem {
    /// Starts the database engine with the default channel capacity.
    pub fn new() -> Self {
        Self::with_buffer_size(DEFAULT_BUFFER_SIZE)
    }

    /// Starts the database engine with an explicit channel capacity.
    pub fn with_buffer_size(buffer_size: usize) -> Self {
        let (actor, db_client) = DatabaseActor::new(buffer_size);
        let handle = tokio::spawn(actor.run());
        Self { db_client, handle }
    }

    /// A raw client handle to the shared engine.
    pub fn db_client(&self) -> DatabaseClient<ItemFields> {
        self.db_client.clone()
    }

    /// A fresh sync component over the default inventory collection.
    pub fn session(&self) -> InventorySync {
        InventorySync::new(self.db_client.clone())
    }

    /// A fresh view-model wired to its own sync component.
    pub fn view_session(&self) -> InventoryView {
        InventoryView::new(self.session())
    }

    /// Gracefully shuts down the engine.
    ///
    /// Dropping the last client closes the request channel; the engine
    /// drains what it has and exits. Outstanding session handles keep the
    /// engine alive until they are dropped too.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down inventory system...");
        drop(self.db_client);

        if let Err(e) = self.handle.await {
            error!("Database engine task failed: {:?}", e);
            return Err(format!("Database engine task failed: {:?}", e));
        }

        info!("Inventory system shutdown complete.");
        Ok(())
    }
}

impl Default for InventorySystem {
    fn default() -> Self {
        Self::new()
    }
}
