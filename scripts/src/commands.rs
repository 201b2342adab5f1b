//! Implementations of the deploy scripts.
//!
//! Each command is a single linear pipeline: deploy (or call) sequentially,
//! then persist the resulting addresses in one write. A failed step aborts
//! the remainder of the run and leaves the deployments file untouched; there
//! is no rollback of contracts already created on chain.

use std::collections::BTreeMap;

use alloy::providers::{DynProvider, Provider};
use alloy_primitives::{Address, U256};
use alloy_sol_types::SolConstructor;
use tracing::{info, warn};

use crate::{
    artifacts::load_artifact,
    cli::{CreateTokenArgs, DeployPoolArgs, DeployTokensArgs},
    constants::{
        ANJUX_CONTRACT_KEY, CREATED_TOKEN_KEY_PREFIX, ETHOF_CONTRACT_KEY,
        TOKEN_FACTORY_CONTRACT_KEY, USDCOF_INITIAL_SUPPLY_TOKENS,
    },
    errors::ScriptError,
    solidity::{LiquidityPool, TokenFactory, UsdCofToken},
    types::{DeployStep, DeploymentRecord, ScriptContext, ScriptContract},
    utils::{
        deploy_contract, load_or_default_record, parse_addr, parse_addr_from_deployments_file,
        tokens, write_deployment_record,
    },
};

/// Deploy the given steps strictly in order, then record every resulting
/// address in the deployments file.
///
/// All-or-nothing: the file is only written once the full sequence has
/// succeeded, so a failed run never leaves a partial record behind.
pub async fn deploy_and_record(
    client: &DynProvider,
    ctx: &ScriptContext,
    steps: Vec<DeployStep>,
) -> Result<DeploymentRecord, ScriptError> {
    let mut deployments = BTreeMap::new();
    let mut supplies = BTreeMap::new();

    for step in steps {
        info!("deploying {}...", step.contract);
        let address = deploy_contract(client, step.code).await?;
        info!("{} deployed at {:#x}", step.contract, address);

        let key = step.contract.deployments_key().to_string();
        if let Some(supply) = step.initial_supply {
            supplies.insert(key.clone(), supply);
        }
        deployments.insert(key, address);
    }

    record_deployments(client, ctx, deployments, supplies).await
}

/// Merge the given entries into the deployments file and write it back.
///
/// A record is only valid for the chain it was produced against; that is an
/// operational convention rather than an enforced guarantee, so a chain
/// mismatch with a pre-existing file is surfaced as a warning.
async fn record_deployments(
    client: &DynProvider,
    ctx: &ScriptContext,
    deployments: BTreeMap<String, Address>,
    supplies: BTreeMap<String, U256>,
) -> Result<DeploymentRecord, ScriptError> {
    let chain_id = client
        .get_chain_id()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let mut record = load_or_default_record(&ctx.deployments_path)?;
    if let Some(prior) = record.merge(chain_id, ctx.deployer, deployments, supplies) {
        warn!(
            "{} was produced against chain {prior}, now writing entries for chain {chain_id}",
            ctx.deployments_path.display()
        );
    }

    write_deployment_record(&ctx.deployments_path, &record)?;
    info!("addresses saved to {}", ctx.deployments_path.display());

    Ok(record)
}

/// Deploy the three fee tokens in a fixed order: USDCoF (premines 1M tokens
/// to the deployer), then ETHoF, then AnJuX
pub async fn deploy_tokens(
    args: DeployTokensArgs,
    client: &DynProvider,
    ctx: &ScriptContext,
) -> Result<(), ScriptError> {
    let fee_receiver = match &args.fee_receiver {
        Some(addr) => parse_addr(addr)?,
        None => ctx.deployer,
    };

    let usdcof = load_artifact(&ctx.artifacts_dir, ScriptContract::UsdCofToken.artifact_name())?;
    let ethof = load_artifact(&ctx.artifacts_dir, ScriptContract::EthOfToken.artifact_name())?;
    let anjux = load_artifact(&ctx.artifacts_dir, ScriptContract::AnJuxToken.artifact_name())?;

    let usdcof_ctor = UsdCofToken::constructorCall {
        feeReceiver: fee_receiver,
    }
    .abi_encode();

    let steps = vec![
        DeployStep {
            contract: ScriptContract::UsdCofToken,
            code: usdcof.deploy_code(&usdcof_ctor),
            initial_supply: Some(tokens(USDCOF_INITIAL_SUPPLY_TOKENS)),
        },
        DeployStep {
            contract: ScriptContract::EthOfToken,
            code: ethof.deploy_code(&[]),
            initial_supply: None,
        },
        DeployStep {
            contract: ScriptContract::AnJuxToken,
            code: anjux.deploy_code(&[]),
            initial_supply: None,
        },
    ];

    deploy_and_record(client, ctx, steps).await.map(|_| ())
}

/// Deploy the token factory
pub async fn deploy_factory(
    client: &DynProvider,
    ctx: &ScriptContext,
) -> Result<(), ScriptError> {
    let artifact =
        load_artifact(&ctx.artifacts_dir, ScriptContract::TokenFactory.artifact_name())?;

    let steps = vec![DeployStep {
        contract: ScriptContract::TokenFactory,
        code: artifact.deploy_code(&[]),
        initial_supply: None,
    }];

    deploy_and_record(client, ctx, steps).await.map(|_| ())
}

/// Deploy the liquidity pool over the AnJuX / ETHoF pair.
///
/// The token addresses default to the entries a prior token deployment wrote
/// to the deployments file; the pool owner defaults to the deployer.
pub async fn deploy_pool(
    args: DeployPoolArgs,
    client: &DynProvider,
    ctx: &ScriptContext,
) -> Result<(), ScriptError> {
    let token_a = match &args.token_a {
        Some(addr) => parse_addr(addr)?,
        None => parse_addr_from_deployments_file(&ctx.deployments_path, ANJUX_CONTRACT_KEY)?,
    };
    let token_b = match &args.token_b {
        Some(addr) => parse_addr(addr)?,
        None => parse_addr_from_deployments_file(&ctx.deployments_path, ETHOF_CONTRACT_KEY)?,
    };
    let owner = match &args.owner {
        Some(addr) => parse_addr(addr)?,
        None => ctx.deployer,
    };

    let artifact = load_artifact(
        &ctx.artifacts_dir,
        ScriptContract::SimpleLiquidityPool.artifact_name(),
    )?;
    let ctor = LiquidityPool::constructorCall {
        tokenA: token_a,
        tokenB: token_b,
        owner,
    }
    .abi_encode();

    let steps = vec![DeployStep {
        contract: ScriptContract::SimpleLiquidityPool,
        code: artifact.deploy_code(&ctor),
        initial_supply: None,
    }];

    deploy_and_record(client, ctx, steps).await.map(|_| ())
}

/// Create a token through the recorded factory and record the address
/// the `TokenCreated` event reports
pub async fn create_token(
    args: CreateTokenArgs,
    client: &DynProvider,
    ctx: &ScriptContext,
) -> Result<(), ScriptError> {
    let factory_addr =
        parse_addr_from_deployments_file(&ctx.deployments_path, TOKEN_FACTORY_CONTRACT_KEY)?;
    let supply: U256 = args.initial_supply.parse().map_err(|e| {
        ScriptError::CalldataConstruction(format!(
            "invalid initial supply `{}`: {e}",
            args.initial_supply
        ))
    })?;

    let factory = TokenFactory::new(factory_addr, client);
    info!(
        "creating token {} ({}) via factory at {:#x}",
        args.name, args.symbol, factory_addr
    );

    let receipt = factory
        .createToken(args.name.clone(), args.symbol.clone(), supply)
        .send()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    if !receipt.status() {
        return Err(ScriptError::ContractInteraction(
            "createToken transaction reverted".to_string(),
        ));
    }

    let created = receipt
        .inner
        .logs()
        .iter()
        .find_map(|log| log.log_decode::<TokenFactory::TokenCreated>().ok())
        .ok_or_else(|| {
            ScriptError::ContractInteraction("no TokenCreated event in receipt".to_string())
        })?;
    let token_address = created.inner.data.tokenAddress;
    info!("token {} created at {:#x}", args.symbol, token_address);

    let key = format!("{CREATED_TOKEN_KEY_PREFIX}{}", args.symbol);
    record_deployments(
        client,
        ctx,
        BTreeMap::from([(key.clone(), token_address)]),
        BTreeMap::from([(key, supply)]),
    )
    .await
    .map(|_| ())
}
