//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber` formatter filtered by
//! `RUST_LOG`. Module paths are hidden (`with_target(false)`); the actor loop
//! tags every event with `entity_type` instead.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: `Actor started`, `Shutdown` with the final store size
//! - **Requests**: `Create`, `Get`, `Delete`, `Action`, `Query` at `debug`,
//!   outcomes (`Created`, `Action ok`, `Not found`, ...) at `info`/`warn`
//! - **Client calls**: `#[instrument]` spans around every domain client method
//!
//! ```bash
//! RUST_LOG=info cargo run -p storefront -- order 2=3
//! RUST_LOG=debug cargo run -p storefront -- order 2=3    # full payloads
//! RUST_LOG=actor_framework=debug cargo run -p storefront -- dashboard
//! ```
//!
//! With `RUST_LOG=info`, one order looks like:
//!
//! ```text
//! INFO Actor started entity_type="Session"
//! INFO Session opened session_id=session_1 products=30
//! INFO Created entity_type="Session" id=session_1 size=1
//! INFO Order recorded order_id=order_1700000000000 lines=1 total=150.0
//! INFO Action ok entity_type="Session" id=session_1
//! ```

/// Installs the global subscriber. Call once, at the top of `main`.
///
/// Uses `try_init` so a second call (e.g. from tests sharing a process) is a
/// no-op instead of a panic.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
