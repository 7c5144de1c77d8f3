//! Utility modules: configuration, logging, diagnostics and the batch check

pub mod check;
pub mod config;
pub mod diagnostic;
pub mod logger;
pub mod span;
