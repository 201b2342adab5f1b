//! Scripts for deploying and initializing the token & liquidity pool contracts.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod artifacts;
pub mod cli;
pub mod commands;
pub mod constants;
pub mod errors;
pub mod networks;
mod solidity;
pub mod types;
pub mod utils;
