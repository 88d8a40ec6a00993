//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the subscriber used by every binary built on the framework.
//!
//! The framework logs with structured fields rather than formatted strings:
//!
//! - **Actor lifecycle**: `Actor started` / `Shutdown` with `entity_type` and the final store size
//! - **Entity operations**: `Create`, `Get`, `Update`, `Delete`, `Action`, `Query` at `debug`,
//!   their outcomes at `info`, refusals and failures at `warn`
//! - **Client calls**: `#[instrument]` spans on the resource clients
//!
//! ```bash
//! RUST_LOG=info cargo run      # outcomes only
//! RUST_LOG=debug cargo run     # full payloads
//! RUST_LOG=my_app=debug,actor_framework=info cargo run
//! ```
//!
//! With `RUST_LOG=info` an actor that creates an entity and then acts on it logs:
//!
//! ```text
//! INFO Actor started entity_type="Account"
//! INFO Created entity_type="Account" id=7 size=1
//! INFO Action ok entity_type="Account" id=7
//! ```

/// Initializes the global `tracing` subscriber.
///
/// Levels come from `RUST_LOG`. The compact format shows span hierarchy inline and hides
/// module paths, since every framework event already carries `entity_type`.
///
/// Calling this twice panics, as `tracing_subscriber::fmt().init()` does.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
