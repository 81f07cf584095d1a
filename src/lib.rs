#![doc(test(attr(deny(warnings))))]

//! Finance Pal Core offers the reconciliation and aggregation primitives
//! that power transaction review workflows and their UIs.

pub mod engine;
pub mod errors;
pub mod session;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Pal Core tracing initialized.");
    });
}
