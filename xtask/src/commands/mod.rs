//! Command family implementations.

pub mod connect;
