//! Application initialization.
//!
//! This module provides logger setup. Everything else the tool touches (task
//! directory, course tree) is plain file reading handled by its own module.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
