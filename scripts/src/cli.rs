//! Definitions of CLI arguments and commands for deploy scripts

use std::path::PathBuf;

use alloy::providers::DynProvider;
use clap::{Args, Parser, Subcommand};

use crate::{
    commands::{create_token, deploy_factory, deploy_pool, deploy_tokens},
    constants::{DEFAULT_ARTIFACTS_DIR, DEFAULT_DEPLOYMENTS_PATH, LOCALHOST_NETWORK},
    errors::ScriptError,
    types::ScriptContext,
};

/// Deploy the token & liquidity pool contracts to a configured network
#[derive(Parser)]
pub struct Cli {
    /// Name of the network profile to deploy against
    #[arg(short, long, default_value = LOCALHOST_NETWORK)]
    pub network: String,

    /// Override the profile's RPC URL
    #[arg(short, long)]
    pub rpc_url: Option<String>,

    /// Override the profile's signing key
    // TODO: Better key management
    #[arg(short, long)]
    pub priv_key: Option<String>,

    /// Path of the deployments file addresses are recorded in
    #[arg(short, long, default_value = DEFAULT_DEPLOYMENTS_PATH)]
    pub deployments_path: PathBuf,

    /// Directory containing the compiled contract artifacts
    #[arg(short, long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts_dir: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The deploy script commands
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the USDCoF, ETHoF & AnJuX tokens, in that order
    DeployTokens(DeployTokensArgs),
    /// Deploy the token factory
    DeployFactory(DeployFactoryArgs),
    /// Deploy the liquidity pool over the AnJuX / ETHoF pair
    DeployPool(DeployPoolArgs),
    /// Create a token through the recorded factory
    CreateToken(CreateTokenArgs),
}

impl Command {
    /// Run the command against the given client
    pub async fn run(
        self,
        client: &DynProvider,
        ctx: &ScriptContext,
    ) -> Result<(), ScriptError> {
        match self {
            Command::DeployTokens(args) => deploy_tokens(args, client, ctx).await,
            Command::DeployFactory(_) => deploy_factory(client, ctx).await,
            Command::DeployPool(args) => deploy_pool(args, client, ctx).await,
            Command::CreateToken(args) => create_token(args, client, ctx).await,
        }
    }
}

/// Arguments to the token suite deployment
#[derive(Args)]
pub struct DeployTokensArgs {
    /// Address transfer fees are diverted to, in hex.
    /// Defaults to the deployer.
    #[arg(short, long)]
    pub fee_receiver: Option<String>,
}

/// Arguments to the factory deployment
#[derive(Args)]
pub struct DeployFactoryArgs {}

/// Arguments to the pool deployment
#[derive(Args)]
pub struct DeployPoolArgs {
    /// First pooled token address in hex.
    /// Defaults to the recorded AnJuX token.
    #[arg(long)]
    pub token_a: Option<String>,

    /// Second pooled token address in hex.
    /// Defaults to the recorded ETHoF token.
    #[arg(long)]
    pub token_b: Option<String>,

    /// Address of the pool owner. Defaults to the deployer.
    #[arg(short, long)]
    pub owner: Option<String>,
}

/// Arguments to the factory token creation
#[derive(Args)]
pub struct CreateTokenArgs {
    /// The token name
    #[arg(long)]
    pub name: String,

    /// The token symbol
    #[arg(long)]
    pub symbol: String,

    /// The initial supply in base units, decimal
    #[arg(long)]
    pub initial_supply: String,
}
