//! Sync component against a scripted store: exact call sequences and
//! failure paths, isolated from a running engine.

use pantry_sync::inventory::{InventoryError, InventorySync, DEFAULT_COLLECTION};
use pantry_sync::model::{Item, ItemFields};
use pantry_sync::store::mock::MockDatabase;
use pantry_sync::store::StoreError;

/// `add` of a new name issues exactly get, set, list — in that order.
#[tokio::test]
async fn test_add_new_item_call_sequence() {
    let mut mock = MockDatabase::<ItemFields>::new();
    mock.expect_get(DEFAULT_COLLECTION, "Apple").return_ok(None);
    mock.expect_set(DEFAULT_COLLECTION, "Apple").return_ok();
    mock.expect_list(DEFAULT_COLLECTION)
        .return_ok(vec![("Apple".to_string(), ItemFields { quantity: 1 })]);

    let mut sync = InventorySync::new(mock.client());
    sync.add("apple").await.expect("Add failed");

    assert_eq!(sync.snapshot(), &[Item::new("Apple", 1)]);
    mock.verify();
}

/// `remove` of a quantity-1 item deletes instead of writing zero.
#[tokio::test]
async fn test_remove_last_unit_deletes_document() {
    let mut mock = MockDatabase::<ItemFields>::new();
    mock.expect_get(DEFAULT_COLLECTION, "Apple")
        .return_ok(Some(ItemFields { quantity: 1 }));
    mock.expect_delete(DEFAULT_COLLECTION, "Apple").return_ok();
    mock.expect_list(DEFAULT_COLLECTION).return_ok(vec![]);

    let mut sync = InventorySync::new(mock.client());
    sync.remove("Apple").await.expect("Remove failed");

    assert!(sync.snapshot().is_empty());
    mock.verify();
}

/// `remove` with quantity above 1 writes the decrement, no delete.
#[tokio::test]
async fn test_remove_decrements_document() {
    let mut mock = MockDatabase::<ItemFields>::new();
    mock.expect_get(DEFAULT_COLLECTION, "Apple")
        .return_ok(Some(ItemFields { quantity: 3 }));
    mock.expect_set(DEFAULT_COLLECTION, "Apple").return_ok();
    mock.expect_list(DEFAULT_COLLECTION)
        .return_ok(vec![("Apple".to_string(), ItemFields { quantity: 2 })]);

    let mut sync = InventorySync::new(mock.client());
    sync.remove("Apple").await.expect("Remove failed");

    assert_eq!(sync.snapshot(), &[Item::new("Apple", 2)]);
    mock.verify();
}

/// `remove` of an absent key issues no write at all, but still resyncs.
#[tokio::test]
async fn test_remove_absent_key_skips_write_but_resyncs() {
    let mut mock = MockDatabase::<ItemFields>::new();
    mock.expect_get(DEFAULT_COLLECTION, "Durian").return_ok(None);
    mock.expect_list(DEFAULT_COLLECTION)
        .return_ok(vec![("Apple".to_string(), ItemFields { quantity: 2 })]);

    let mut sync = InventorySync::new(mock.client());
    sync.remove("Durian").await.expect("No-op remove failed");

    assert_eq!(sync.snapshot(), &[Item::new("Apple", 2)]);
    mock.verify();
}

/// A failed reload surfaces the error and keeps the previous snapshot.
#[tokio::test]
async fn test_load_failure_keeps_previous_snapshot() {
    let mut mock = MockDatabase::<ItemFields>::new();
    mock.expect_list(DEFAULT_COLLECTION)
        .return_ok(vec![("Apple".to_string(), ItemFields { quantity: 2 })]);
    mock.expect_list(DEFAULT_COLLECTION)
        .return_err(StoreError::Unavailable("backend offline".to_string()));

    let mut sync = InventorySync::new(mock.client());
    sync.load().await.expect("First load failed");
    assert_eq!(sync.snapshot(), &[Item::new("Apple", 2)]);

    let err = sync.load().await.unwrap_err();
    assert!(matches!(err, InventoryError::Store(_)));
    assert_eq!(
        sync.snapshot(),
        &[Item::new("Apple", 2)],
        "Snapshot must survive a failed reload"
    );
    mock.verify();
}

/// A failure at the write stage stops the mutation before the resync.
#[tokio::test]
async fn test_add_write_failure_skips_resync() {
    let mut mock = MockDatabase::<ItemFields>::new();
    mock.expect_get(DEFAULT_COLLECTION, "Apple")
        .return_ok(Some(ItemFields { quantity: 1 }));
    mock.expect_set(DEFAULT_COLLECTION, "Apple")
        .return_err(StoreError::Unavailable("write refused".to_string()));
    // Deliberately no list expectation: reaching the resync stage would
    // panic the mock's responder task.

    let mut sync = InventorySync::new(mock.client());
    let err = sync.add("apple").await.unwrap_err();
    assert!(matches!(err, InventoryError::Store(_)));
    assert!(sync.snapshot().is_empty(), "Snapshot untouched on failure");
    mock.verify();
}

/// A failure at the read stage stops the mutation before any write.
#[tokio::test]
async fn test_remove_read_failure_skips_write() {
    let mut mock = MockDatabase::<ItemFields>::new();
    mock.expect_get(DEFAULT_COLLECTION, "Apple")
        .return_err(StoreError::Unavailable("backend offline".to_string()));

    let mut sync = InventorySync::new(mock.client());
    let err = sync.remove("Apple").await.unwrap_err();
    assert!(matches!(err, InventoryError::Store(_)));
    mock.verify();
}

/// The sync component honors a non-default collection name end to end.
#[tokio::test]
async fn test_named_collection_is_used_for_every_call() {
    let mut mock = MockDatabase::<ItemFields>::new();
    mock.expect_get("pantry", "Apple").return_ok(None);
    mock.expect_set("pantry", "Apple").return_ok();
    mock.expect_list("pantry")
        .return_ok(vec![("Apple".to_string(), ItemFields { quantity: 1 })]);

    let mut sync = InventorySync::with_collection(mock.client(), "pantry");
    sync.add("apple").await.expect("Add failed");

    assert_eq!(sync.snapshot(), &[Item::new("Apple", 1)]);
    mock.verify();
}
