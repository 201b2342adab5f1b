//! Network profiles for the deploy scripts.
//!
//! The environment is snapshotted once at startup into [`EnvSecrets`]; the
//! resulting [`NetworkProfile`] is immutable and passed into the commands
//! explicitly, so no code below `main` reads the process environment.

use std::env;

use crate::{
    constants::{
        ALCHEMY_API_KEY_ENV_VAR, ARBISCAN_API_KEY_ENV_VAR, ARBITRUM_SEPOLIA_CHAIN_ID,
        ARBITRUM_SEPOLIA_NETWORK, ARBITRUM_SEPOLIA_RPC_URL_BASE, DEFAULT_DEVNET_PKEY,
        ETHERSCAN_API_KEY_ENV_VAR, LOCALHOST_NETWORK, LOCALHOST_RPC_URL, LUKSO_TESTNET_CHAIN_ID,
        LUKSO_TESTNET_NETWORK, LUKSO_TESTNET_RPC_URL, PRIVATE_KEY_ENV_VAR, SEPOLIA_CHAIN_ID,
        SEPOLIA_NETWORK, SEPOLIA_RPC_URL_BASE, SONIC_API_KEY_ENV_VAR, SONIC_NETWORK,
        SONIC_PRIVATE_KEY_ENV_VAR, SONIC_RPC_URL,
    },
    errors::ScriptError,
};

/// A snapshot of the environment-supplied secrets consumed
/// by the network profiles
#[derive(Clone, Debug, Default)]
pub struct EnvSecrets {
    /// The Alchemy API key, used to complete the Alchemy RPC URLs
    pub alchemy_api_key: Option<String>,
    /// The deployer private key for most networks
    pub private_key: Option<String>,
    /// The deployer private key for the Sonic network
    pub sonic_private_key: Option<String>,
    /// The Etherscan API key, used for contract verification on Sepolia
    pub etherscan_api_key: Option<String>,
    /// The Arbiscan API key, used for contract verification on Arbitrum Sepolia
    pub arbiscan_api_key: Option<String>,
    /// The Sonicscan API key, used for contract verification on Sonic
    pub sonic_api_key: Option<String>,
}

impl EnvSecrets {
    /// Snapshot the secrets from the process environment
    pub fn from_env() -> Self {
        Self {
            alchemy_api_key: env::var(ALCHEMY_API_KEY_ENV_VAR).ok(),
            private_key: env::var(PRIVATE_KEY_ENV_VAR).ok(),
            sonic_private_key: env::var(SONIC_PRIVATE_KEY_ENV_VAR).ok(),
            etherscan_api_key: env::var(ETHERSCAN_API_KEY_ENV_VAR).ok(),
            arbiscan_api_key: env::var(ARBISCAN_API_KEY_ENV_VAR).ok(),
            sonic_api_key: env::var(SONIC_API_KEY_ENV_VAR).ok(),
        }
    }
}

/// A fully-resolved connection profile for a named network.
///
/// Immutable once built. An unset private-key variable resolves to an empty
/// `accounts` list rather than an error; the failure surfaces when a signer
/// is first needed.
#[derive(Clone, Debug)]
pub struct NetworkProfile {
    /// The network name
    pub name: String,
    /// The RPC endpoint URL
    pub rpc_url: String,
    /// The signing keys available for this network, in hex.
    /// The first entry is used as the deployer key.
    pub accounts: Vec<String>,
    /// The expected chain ID, where the network pins one
    pub chain_id: Option<u64>,
    /// The block-explorer API key for contract verification, if configured.
    /// Carried in the profile but not consumed by the deploy commands.
    pub explorer_api_key: Option<String>,
}

impl NetworkProfile {
    /// The key used to sign deployment transactions, if any is configured
    pub fn signing_key(&self) -> Option<&str> {
        self.accounts.first().map(String::as_str)
    }
}

/// Resolve the named network into a connection profile.
///
/// The set of known networks mirrors the tooling configuration the contracts
/// are deployed with; an unknown name is a resolution error.
pub fn resolve_network(name: &str, secrets: &EnvSecrets) -> Result<NetworkProfile, ScriptError> {
    match name {
        SEPOLIA_NETWORK => Ok(NetworkProfile {
            name: name.to_string(),
            rpc_url: alchemy_url(SEPOLIA_RPC_URL_BASE, secrets)?,
            accounts: key_list(&secrets.private_key),
            chain_id: Some(SEPOLIA_CHAIN_ID),
            explorer_api_key: secrets.etherscan_api_key.clone(),
        }),
        ARBITRUM_SEPOLIA_NETWORK => Ok(NetworkProfile {
            name: name.to_string(),
            rpc_url: alchemy_url(ARBITRUM_SEPOLIA_RPC_URL_BASE, secrets)?,
            accounts: key_list(&secrets.private_key),
            chain_id: Some(ARBITRUM_SEPOLIA_CHAIN_ID),
            explorer_api_key: secrets.arbiscan_api_key.clone(),
        }),
        SONIC_NETWORK => Ok(NetworkProfile {
            name: name.to_string(),
            rpc_url: SONIC_RPC_URL.to_string(),
            accounts: key_list(&secrets.sonic_private_key),
            chain_id: None,
            explorer_api_key: secrets.sonic_api_key.clone(),
        }),
        LUKSO_TESTNET_NETWORK => Ok(NetworkProfile {
            name: name.to_string(),
            rpc_url: LUKSO_TESTNET_RPC_URL.to_string(),
            accounts: key_list(&secrets.private_key),
            chain_id: Some(LUKSO_TESTNET_CHAIN_ID),
            explorer_api_key: None,
        }),
        LOCALHOST_NETWORK => Ok(NetworkProfile {
            name: name.to_string(),
            rpc_url: LOCALHOST_RPC_URL.to_string(),
            accounts: vec![secrets
                .private_key
                .clone()
                .unwrap_or_else(|| DEFAULT_DEVNET_PKEY.to_string())],
            chain_id: None,
            explorer_api_key: None,
        }),
        _ => Err(ScriptError::NetworkResolution(format!(
            "unknown network `{name}`"
        ))),
    }
}

/// Complete an Alchemy RPC URL with the API key from the environment
fn alchemy_url(base: &str, secrets: &EnvSecrets) -> Result<String, ScriptError> {
    let key = secrets.alchemy_api_key.as_deref().ok_or_else(|| {
        ScriptError::NetworkResolution(format!("{ALCHEMY_API_KEY_ENV_VAR} is not set"))
    })?;

    Ok(format!("{base}{key}"))
}

/// The account list for an optional private key: one entry when the
/// key is set, empty otherwise
fn key_list(key: &Option<String>) -> Vec<String> {
    key.iter().cloned().collect()
}
