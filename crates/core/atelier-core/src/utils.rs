//! Utility functions and helpers

pub mod logger;

pub use self::logger::{init_logging, scrub_message};
