//! CLI command implementations.

pub mod extract;
pub mod format;
pub mod key;
pub mod serve;
pub mod study;
