//! The integration tests

pub mod pool;
