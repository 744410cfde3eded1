//! Shared automation runtime services.

pub mod artifacts;
pub mod config;
pub mod context;
pub mod error;
