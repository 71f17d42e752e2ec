//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for binaries built on the framework.
//!
//! ## Configuration
//!
//! The subscriber uses a compact format that hides the crate/module prefix
//! (`with_target(false)`); the dispatcher records a `component` field instead. Levels are
//! read from the `RUST_LOG` environment variable.
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Show every input and action payload
//! RUST_LOG=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Inputs**: `DEBUG Input component="OrderLedger" input=SelectItem(Some(Apples))`
//! - **Actions**: `DEBUG Action ...` on entry, then `INFO Action ok` or `WARN Action rejected`
//! - **Replays**: start and finish, with event and rejection counts
//!
//! With `RUST_LOG=info` a short session looks like:
//!
//! ```text
//! INFO Session started tax_rate=0.07
//! INFO Item added item=Apples qty=3 amount=$3.69
//! INFO Action ok component="OrderLedger" seq=3
//! WARN Action rejected component="OrderLedger" seq=4 error=Please select an item from the list.
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
