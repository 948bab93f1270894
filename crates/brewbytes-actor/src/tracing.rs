//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber.
//!
//! The runtime logs with structured fields: the actor logs startup and
//! shutdown at `info` and each request at `debug`, clients open a span per
//! call via `#[instrument]`.
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Every request with its payload
//! RUST_LOG=brewbytes=debug cargo run
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for the application.
///
/// The filter comes from `RUST_LOG`; when it is unset or invalid, `info` is used.
/// Call once at startup; a second call panics.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths - we use state_type instead
        .compact()
        .init();
}
