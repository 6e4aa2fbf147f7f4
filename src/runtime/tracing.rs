//! Observability setup.
//!
//! Structured logging via the `tracing` crate. Log level comes from the
//! `RUST_LOG` environment variable; the compact format shows span hierarchy
//! inline (e.g. `add: Writing incremented quantity key="Apple"`).
//!
//! ```bash
//! # Operation-level events
//! RUST_LOG=info cargo test
//!
//! # Every store call with full payloads
//! RUST_LOG=debug cargo test
//! ```

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Module paths add noise; the fields carry context
        .compact()
        .init();
}
