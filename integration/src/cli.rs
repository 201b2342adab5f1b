//! Definition of the CLI arguments for integration tests

use std::path::PathBuf;

use clap::Parser;

use crate::constants::{DEFAULT_DEVNET_HOSTPORT, DEFAULT_DEVNET_PKEY};

/// CLI tool for running integration tests against a running devnet node.
///
/// Deploys a fresh contract suite through the deploy scripts before the
/// tests run; assumes the compiled contract artifacts are available in the
/// artifacts directory.
#[derive(Parser)]
pub(crate) struct Cli {
    /// Run only the named test
    #[arg(short, long)]
    pub(crate) test: Option<String>,

    /// Path of the deployments file the setup run writes
    #[arg(short, long, default_value = "deployed-addresses.json")]
    pub(crate) deployments_path: PathBuf,

    /// Directory containing the compiled contract artifacts
    #[arg(short, long, default_value = "artifacts")]
    pub(crate) artifacts_dir: PathBuf,

    /// Devnet private key, defaults to the stock devnet key
    #[arg(short, long, default_value = DEFAULT_DEVNET_PKEY)]
    pub(crate) priv_key: String,

    /// Devnet RPC URL
    #[arg(short, long, default_value = DEFAULT_DEVNET_HOSTPORT)]
    pub(crate) rpc_url: String,
}
