//! Entry point for the deploy scripts

use clap::Parser;
use scripts::{
    cli::Cli,
    errors::ScriptError,
    networks::{resolve_network, EnvSecrets},
    types::ScriptContext,
    utils::setup_client,
};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    let Cli {
        network,
        rpc_url,
        priv_key,
        deployments_path,
        artifacts_dir,
        command,
    } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    // The environment is read exactly once; everything downstream
    // works off the resolved profile
    let secrets = EnvSecrets::from_env();
    let mut profile = resolve_network(&network, &secrets)?;
    if let Some(url) = rpc_url {
        profile.rpc_url = url;
    }
    if let Some(key) = priv_key {
        profile.accounts = vec![key];
    }

    let (client, deployer) = setup_client(&profile).await?;
    let ctx = ScriptContext {
        deployer,
        deployments_path,
        artifacts_dir,
    };

    command.run(&client, &ctx).await
}
