//! Test utilities

pub mod devnet;
pub mod transactions;
