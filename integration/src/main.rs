//! Integration tests for the token & liquidity pool contracts. These assume
//! that a devnet node is already running locally and that the compiled
//! contract artifacts are available.

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use eyre::{eyre, Result};
use scripts::{
    cli::{DeployPoolArgs, DeployTokensArgs},
    commands::{deploy_factory, deploy_pool, deploy_tokens},
    constants::{
        ANJUX_CONTRACT_KEY, ETHOF_CONTRACT_KEY, POOL_CONTRACT_KEY, TOKEN_FACTORY_CONTRACT_KEY,
        USDCOF_CONTRACT_KEY,
    },
    networks::NetworkProfile,
    types::ScriptContext,
    utils::{read_deployment_record, setup_client},
};
use test_inventory::{IntegrationTest, TestArgs};

use crate::constants::FEE_RECEIVER_ADDRESS;

mod abis;
mod cli;
mod constants;
mod test_inventory;
mod tests;
mod util;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let args = setup_contracts(&cli).await?;

    let mut failures = 0;
    for test in inventory::iter::<IntegrationTest> {
        if let Some(filter) = &cli.test {
            if test.name != filter {
                continue;
            }
        }

        print!("Running {}... ", test.name);
        match (test.test_fn)(args.clone()).await {
            Ok(()) => println!("{}", "PASSED".green()),
            Err(e) => {
                failures += 1;
                println!("{}: {e}", "FAILED".red());
            }
        }
    }

    if failures > 0 {
        return Err(eyre!("{failures} test(s) failed"));
    }
    Ok(())
}

/// Deploy a fresh contract suite through the deploy scripts and collect
/// the recorded addresses for the tests
async fn setup_contracts(cli: &Cli) -> Result<TestArgs> {
    let profile = NetworkProfile {
        name: "devnet".to_string(),
        rpc_url: cli.rpc_url.clone(),
        accounts: vec![cli.priv_key.clone()],
        chain_id: None,
        explorer_api_key: None,
    };
    let (client, deployer) = setup_client(&profile).await?;
    let ctx = ScriptContext {
        deployer,
        deployments_path: cli.deployments_path.clone(),
        artifacts_dir: cli.artifacts_dir.clone(),
    };

    // Start from a clean record so the file holds exactly this suite
    if ctx.deployments_path.exists() {
        std::fs::remove_file(&ctx.deployments_path)?;
    }

    deploy_tokens(
        DeployTokensArgs {
            fee_receiver: Some(FEE_RECEIVER_ADDRESS.to_string()),
        },
        &client,
        &ctx,
    )
    .await?;
    deploy_factory(&client, &ctx).await?;
    deploy_pool(
        DeployPoolArgs {
            token_a: None,
            token_b: None,
            owner: None,
        },
        &client,
        &ctx,
    )
    .await?;

    let record = read_deployment_record(&ctx.deployments_path)?;
    let address = |key: &str| {
        record
            .address(key)
            .ok_or_else(|| eyre!("missing `{key}` in the deployments file"))
    };

    Ok(TestArgs {
        client,
        deployer,
        fee_receiver: FEE_RECEIVER_ADDRESS.parse()?,
        usdcof: address(USDCOF_CONTRACT_KEY)?,
        ethof: address(ETHOF_CONTRACT_KEY)?,
        anjux: address(ANJUX_CONTRACT_KEY)?,
        factory: address(TOKEN_FACTORY_CONTRACT_KEY)?,
        pool: address(POOL_CONTRACT_KEY)?,
        deployments_path: ctx.deployments_path,
        artifacts_dir: ctx.artifacts_dir,
    })
}
