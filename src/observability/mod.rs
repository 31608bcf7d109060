//! Observability: structured logging for CLI runs.

pub mod logging;

pub use logging::{LogFormat, init_logging};
