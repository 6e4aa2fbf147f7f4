//! # Pantry Sync
//!
//! > **A headless inventory-tracking core over a keyed document store.**
//!
//! Users sign up with email and password, then manage a list of named items
//! with integer quantities persisted in a remote keyed collection. This crate
//! implements the inventory mutation and view-sync component of that page,
//! plus typed seams for the two external collaborators it depends on: the
//! identity provider and the document database.
//!
//! ## Consistency model
//!
//! The sync component keeps a single in-memory snapshot of the remote
//! collection and replaces it wholesale after every mutation — no incremental
//! patching, no offline queue, no cache hierarchy. The remote store is always
//! the source of truth.
//!
//! Every mutation is a read-then-write pair followed by a full reload, built
//! on per-call atomicity only. Two sessions racing on one key can lose an
//! increment; this is a documented property of the design, demonstrated in
//! the integration tests, not silently corrected. Within one session, callers
//! serialize mutations by awaiting each before issuing the next.
//!
//! ## Module Tour
//!
//! ### The Store ([`store`])
//! An in-process model of the hosted document database: a single engine task
//! owning all collections, processing `list`/`get`/`set`/`delete` requests
//! sequentially off a channel. [`store::mock`] provides a scripted client for
//! testing consumers without a running engine.
//!
//! ### The Core ([`inventory`])
//! [`InventorySync`](inventory::InventorySync) — the state container owning
//! the snapshot and the `load`/`add`/`remove`/`search` operations — together
//! with the name normalizer that folds "apple", "Apple" and "APPLE" onto one
//! document key, and the [`InventoryError`](inventory::InventoryError)
//! taxonomy the view consumes.
//!
//! ### The Collaborators ([`auth`])
//! The [`IdentityProvider`](auth::IdentityProvider) sign-up contract and an
//! in-memory stand-in. Authentication internals are out of scope; only the
//! seam lives here.
//!
//! ### The Glue ([`view`], [`runtime`])
//! [`InventoryView`](view::InventoryView) carries the search text and
//! add-dialog state a UI would bind to. [`InventorySystem`](runtime::InventorySystem)
//! spawns the engine, hands out sessions, and shuts down gracefully.
//!
//! ## Running Tests
//!
//! ```bash
//! RUST_LOG=info cargo test
//! ```

pub mod auth;
pub mod inventory;
pub mod model;
pub mod runtime;
pub mod store;
pub mod view;
