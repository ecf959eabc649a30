//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! ## What Gets Traced
//!
//! - **Operations**: every call runs in a span carrying `service` and `operation`
//! - **Interceptions**: `Mock intercepted action=...` at `info`
//! - **Rejections**: `Rejected status=... message=...` at `warn`, with the raw error
//! - **HTTP**: request/response spans from the adapter's trace layer
//!
//! ## Usage Examples
//!
//! ```bash
//! # Default: info and above
//! cargo run
//!
//! # Show full parameter objects
//! RUST_LOG=debug cargo run
//!
//! # Only the operation framework
//! RUST_LOG=oss_register::framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` a rejected lookup reads:
//!
//! ```text
//! DEBUG handle{service="RepositoriesService" operation="getRepositoryById"}: handle called params=GetRepositoryParams { id: "42" }
//! INFO handle{service="RepositoriesService" operation="getRepositoryById"}: Mock intercepted action=reject
//! WARN handle{service="RepositoriesService" operation="getRepositoryById"}: Rejected status=404 message=Repository not found
//! ```
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Call once, at startup.
///
/// Falls back to `info` when `RUST_LOG` is unset or invalid.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
