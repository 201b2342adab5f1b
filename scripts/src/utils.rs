//! Utilities for the deploy scripts

use std::{fs, path::Path};

use alloy::{
    network::{EthereumWallet, TransactionBuilder},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
};
use alloy_primitives::{Address, U256};

use crate::{errors::ScriptError, networks::NetworkProfile, types::DeploymentRecord};

/// Set up the RPC client for the given network profile, returning the
/// client and the deployer address derived from the signing key.
///
/// A profile with no configured accounts fails here, at the first point
/// a signer is needed.
pub async fn setup_client(profile: &NetworkProfile) -> Result<(DynProvider, Address), ScriptError> {
    let key = profile.signing_key().ok_or_else(|| {
        ScriptError::ClientInitialization(format!(
            "no signing accounts configured for network `{}`",
            profile.name
        ))
    })?;

    let signer: PrivateKeySigner = key
        .parse()
        .map_err(|e| ScriptError::ClientInitialization(format!("invalid private key: {e}")))?;
    let deployer = signer.address();
    let wallet = EthereumWallet::from(signer);

    let url = profile
        .rpc_url
        .parse()
        .map_err(|e| ScriptError::ClientInitialization(format!("invalid RPC URL: {e}")))?;
    let provider = ProviderBuilder::new().wallet(wallet).on_http(url);

    Ok((provider.erased(), deployer))
}

/// Submit a contract-creation transaction and block until it is mined,
/// returning the assigned address
pub async fn deploy_contract(client: &DynProvider, code: Vec<u8>) -> Result<Address, ScriptError> {
    let tx = TransactionRequest::default().with_deploy_code(code);

    let receipt = client
        .send_transaction(tx)
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

    if !receipt.status() {
        return Err(ScriptError::ContractDeployment(
            "creation transaction reverted".to_string(),
        ));
    }

    receipt.contract_address.ok_or_else(|| {
        ScriptError::ContractDeployment("receipt carries no contract address".to_string())
    })
}

/// Read the deployment record at the given path
pub fn read_deployment_record(path: &Path) -> Result<DeploymentRecord, ScriptError> {
    let contents =
        fs::read_to_string(path).map_err(|e| ScriptError::ReadDeployments(e.to_string()))?;
    serde_json::from_str(&contents).map_err(|e| ScriptError::ReadDeployments(e.to_string()))
}

/// Read the deployment record at the given path, or start a fresh one
/// if no file exists yet
pub fn load_or_default_record(path: &Path) -> Result<DeploymentRecord, ScriptError> {
    if path.exists() {
        read_deployment_record(path)
    } else {
        Ok(DeploymentRecord::default())
    }
}

/// Write the deployment record to the given path, replacing any prior content
pub fn write_deployment_record(
    path: &Path,
    record: &DeploymentRecord,
) -> Result<(), ScriptError> {
    let json =
        serde_json::to_string_pretty(record).map_err(|e| ScriptError::Serde(e.to_string()))?;
    fs::write(path, json).map_err(|e| ScriptError::WriteDeployments(e.to_string()))
}

/// Look up a contract address in the deployments file
pub fn parse_addr_from_deployments_file(
    path: &Path,
    contract_key: &str,
) -> Result<Address, ScriptError> {
    read_deployment_record(path)?.address(contract_key).ok_or_else(|| {
        ScriptError::ReadDeployments(format!(
            "no `{contract_key}` entry in {}",
            path.display()
        ))
    })
}

/// Parse a hex Ethereum address from a CLI argument
pub fn parse_addr(addr: &str) -> Result<Address, ScriptError> {
    addr.parse()
        .map_err(|e| ScriptError::CalldataConstruction(format!("invalid address `{addr}`: {e}")))
}

/// Convert a whole-token count to base units at 18 decimals
pub fn tokens(count: u64) -> U256 {
    U256::from(count) * U256::from(10u64).pow(U256::from(crate::constants::TOKEN_DECIMALS))
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{Address, U256};

    use super::*;
    use crate::constants::ANJUX_CONTRACT_KEY;

    /// A unique temp path for a deployments file
    fn temp_record_path() -> std::path::PathBuf {
        std::env::temp_dir().join(format!("deployments-test-{}.json", rand::random::<u64>()))
    }

    /// Records round-trip through the file and addresses are
    /// recoverable by key
    #[test]
    fn test_record_file_round_trip() {
        let path = temp_record_path();
        let address = Address::random();

        let mut record = DeploymentRecord {
            chain_id: Some(31337),
            ..Default::default()
        };
        record
            .deployments
            .insert(ANJUX_CONTRACT_KEY.to_string(), address);

        write_deployment_record(&path, &record).unwrap();
        assert_eq!(read_deployment_record(&path).unwrap(), record);
        assert_eq!(
            parse_addr_from_deployments_file(&path, ANJUX_CONTRACT_KEY).unwrap(),
            address
        );
        assert!(parse_addr_from_deployments_file(&path, "verifier").is_err());

        std::fs::remove_file(&path).unwrap();
    }

    /// A missing file is an error for reads but a fresh
    /// record for load-or-default
    #[test]
    fn test_load_or_default() {
        let path = temp_record_path();
        assert!(read_deployment_record(&path).is_err());
        assert_eq!(
            load_or_default_record(&path).unwrap(),
            DeploymentRecord::default()
        );
    }

    /// Whole-token conversion applies the 18-decimal scale
    #[test]
    fn test_tokens_scale() {
        assert_eq!(tokens(1), U256::from(10u64).pow(U256::from(18u64)));
        assert_eq!(
            tokens(1_000_000).to_string(),
            "1000000000000000000000000"
        );
    }

    /// CLI address parsing accepts hex addresses and rejects garbage
    #[test]
    fn test_parse_addr() {
        let addr = parse_addr("0x32c00bD194B3ea78B9799394984DF8dB7397B834").unwrap();
        assert_eq!(
            addr,
            "0x32c00bD194B3ea78B9799394984DF8dB7397B834"
                .parse::<Address>()
                .unwrap()
        );
        assert!(parse_addr("0x1234").is_err());
    }
}
