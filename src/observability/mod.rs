//! # Observability
//!
//! Logging setup for the sync run.
//!
//! - `logging`: `tracing` subscriber writing text or JSON to stderr

pub mod logging;

pub use logging::{init_logging, LogFormat};
