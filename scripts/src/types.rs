//! Type definitions used throughout the scripts

use std::{
    collections::BTreeMap,
    fmt::{self, Display},
    path::PathBuf,
};

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// The contracts deployable by the scripts
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScriptContract {
    /// The USDCoF fee token
    UsdCofToken,
    /// The ETHoF fee token
    EthOfToken,
    /// The AnJuX fee token
    AnJuxToken,
    /// The token factory
    TokenFactory,
    /// The two-asset liquidity pool
    SimpleLiquidityPool,
}

impl ScriptContract {
    /// The contract name under which the compilation artifact is stored
    pub fn artifact_name(self) -> &'static str {
        match self {
            ScriptContract::UsdCofToken => "USDCoFToken",
            ScriptContract::EthOfToken => "ETHoFToken",
            ScriptContract::AnJuxToken => "AnJuXToken",
            ScriptContract::TokenFactory => "TokenFactory",
            ScriptContract::SimpleLiquidityPool => "SimpleLiquidityPool",
        }
    }

    /// The key under which the deployed address is recorded
    /// in the deployments file
    pub fn deployments_key(self) -> &'static str {
        match self {
            ScriptContract::UsdCofToken => crate::constants::USDCOF_CONTRACT_KEY,
            ScriptContract::EthOfToken => crate::constants::ETHOF_CONTRACT_KEY,
            ScriptContract::AnJuxToken => crate::constants::ANJUX_CONTRACT_KEY,
            ScriptContract::TokenFactory => crate::constants::TOKEN_FACTORY_CONTRACT_KEY,
            ScriptContract::SimpleLiquidityPool => crate::constants::POOL_CONTRACT_KEY,
        }
    }
}

impl Display for ScriptContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptContract::UsdCofToken => write!(f, "usdcof-token"),
            ScriptContract::EthOfToken => write!(f, "ethof-token"),
            ScriptContract::AnJuxToken => write!(f, "anjux-token"),
            ScriptContract::TokenFactory => write!(f, "token-factory"),
            ScriptContract::SimpleLiquidityPool => write!(f, "liquidity-pool"),
        }
    }
}

/// A fully-prepared deployment step: the contract to create and its
/// creation payload (bytecode + ABI-encoded constructor arguments)
#[derive(Clone, Debug)]
pub struct DeployStep {
    /// The contract being deployed
    pub contract: ScriptContract,
    /// The creation payload
    pub code: Vec<u8>,
    /// The token supply premined by the constructor, recorded in the
    /// deployments file for downstream consumers
    pub initial_supply: Option<U256>,
}

/// The immutable per-run context passed into the commands
#[derive(Clone, Debug)]
pub struct ScriptContext {
    /// The address of the deployer account
    pub deployer: Address,
    /// The path of the deployments file
    pub deployments_path: PathBuf,
    /// The directory containing the compiled contract artifacts
    pub artifacts_dir: PathBuf,
}

/// The persisted record of a deployment run.
///
/// A record is only valid for the chain it was produced against; the chain ID
/// is recorded so that downstream runs can flag (but not prevent) a mismatch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRecord {
    /// The chain ID the record was produced against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
    /// The address of the deployer account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployer: Option<Address>,
    /// The deployed addresses, keyed by logical contract name
    #[serde(default)]
    pub deployments: BTreeMap<String, Address>,
    /// The premined token supplies in base units, keyed like `deployments`.
    /// Serialized as decimal strings: the quantities exceed what a JSON
    /// number can faithfully carry.
    #[serde(
        default,
        skip_serializing_if = "BTreeMap::is_empty",
        with = "amount"
    )]
    pub initial_supplies: BTreeMap<String, U256>,
}

impl DeploymentRecord {
    /// Look up a deployed address by its deployments-file key
    pub fn address(&self, key: &str) -> Option<Address> {
        self.deployments.get(key).copied()
    }

    /// Merge newly-deployed entries into the record and refresh the chain &
    /// deployer metadata. Entries under pre-existing keys are overwritten;
    /// unrelated entries are preserved.
    ///
    /// Returns the previously-recorded chain ID when it differs from the
    /// one being written, so the caller can surface the mismatch.
    pub fn merge(
        &mut self,
        chain_id: u64,
        deployer: Address,
        deployments: BTreeMap<String, Address>,
        supplies: BTreeMap<String, U256>,
    ) -> Option<u64> {
        let mismatch = self.chain_id.filter(|&prior| prior != chain_id);

        self.chain_id = Some(chain_id);
        self.deployer = Some(deployer);
        self.deployments.extend(deployments);
        self.initial_supplies.extend(supplies);

        mismatch
    }
}

/// String-encoded serde for maps of arbitrary-precision token amounts.
///
/// Applied to every persisted [`U256`] map: JSON numbers cannot represent
/// the full 256-bit range, so amounts round-trip as decimal strings.
pub mod amount {
    use std::collections::BTreeMap;

    use alloy_primitives::U256;
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Serialize a map of amounts with decimal-string values
    pub fn serialize<S: Serializer>(
        amounts: &BTreeMap<String, U256>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_map(amounts.iter().map(|(key, amount)| (key, amount.to_string())))
    }

    /// Deserialize a map of amounts from decimal-string values
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<String, U256>, D::Error> {
        let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
        raw.into_iter()
            .map(|(key, repr)| {
                repr.parse::<U256>()
                    .map(|amount| (key, amount))
                    .map_err(de::Error::custom)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use alloy_primitives::{Address, U256};
    use serde::{Deserialize, Serialize};

    use super::DeploymentRecord;

    /// A wrapper exercising the amount-map serde module
    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct SupplyWrapper {
        /// The wrapped amounts
        #[serde(with = "super::amount")]
        supplies: BTreeMap<String, U256>,
    }

    /// Amounts above `u64::MAX` round-trip through decimal strings
    #[test]
    fn test_amount_round_trip() {
        // 1M tokens at 18 decimals, well past u64::MAX
        let amount = U256::from(1_000_000u64) * U256::from(10u64).pow(U256::from(18u64));
        let mut supplies = BTreeMap::new();
        supplies.insert("premine".to_string(), amount);
        let wrapper = SupplyWrapper { supplies };

        let json = serde_json::to_string(&wrapper).unwrap();
        assert_eq!(json, r#"{"supplies":{"premine":"1000000000000000000000000"}}"#);
        assert_eq!(serde_json::from_str::<SupplyWrapper>(&json).unwrap(), wrapper);
    }

    /// Non-decimal amount strings are rejected
    #[test]
    fn test_amount_rejects_garbage() {
        assert!(
            serde_json::from_str::<SupplyWrapper>(r#"{"supplies":{"premine":"12.5"}}"#).is_err()
        );
        assert!(
            serde_json::from_str::<SupplyWrapper>(r#"{"supplies":{"premine":"twelve"}}"#).is_err()
        );
    }

    /// Merging preserves unrelated entries, overwrites same-key entries,
    /// and refreshes the metadata without flagging a same-chain write
    #[test]
    fn test_record_merge() {
        let stale = Address::repeat_byte(0x11);
        let unrelated = Address::repeat_byte(0x22);
        let fresh = Address::repeat_byte(0x33);
        let deployer = Address::repeat_byte(0x44);

        let mut record = DeploymentRecord {
            chain_id: Some(31337),
            ..Default::default()
        };
        record.deployments.insert("anjux_token".to_string(), stale);
        record.deployments.insert("token_factory".to_string(), unrelated);
        record
            .initial_supplies
            .insert("anjux_token".to_string(), U256::from(1u64));

        let mismatch = record.merge(
            31337,
            deployer,
            BTreeMap::from([("anjux_token".to_string(), fresh)]),
            BTreeMap::from([("anjux_token".to_string(), U256::from(2u64))]),
        );

        assert!(mismatch.is_none());
        assert_eq!(record.address("anjux_token"), Some(fresh));
        assert_eq!(record.address("token_factory"), Some(unrelated));
        assert_eq!(
            record.initial_supplies.get("anjux_token"),
            Some(&U256::from(2u64))
        );
        assert_eq!(record.deployer, Some(deployer));
        assert_eq!(record.chain_id, Some(31337));
    }

    /// Merging against a record from another chain reports the prior chain
    /// ID and still writes the new one
    #[test]
    fn test_record_merge_chain_mismatch() {
        let mut record = DeploymentRecord {
            chain_id: Some(11155111),
            ..Default::default()
        };

        let mismatch = record.merge(
            31337,
            Address::repeat_byte(0x44),
            BTreeMap::new(),
            BTreeMap::new(),
        );

        assert_eq!(mismatch, Some(11155111));
        assert_eq!(record.chain_id, Some(31337));
    }

    /// The record serializes with hex addresses, string amounts, and
    /// omits absent metadata
    #[test]
    fn test_record_json_shape() {
        let mut record = DeploymentRecord {
            chain_id: Some(31337),
            ..Default::default()
        };
        record
            .deployments
            .insert("anjux_token".to_string(), Address::repeat_byte(0x42));
        record
            .initial_supplies
            .insert("anjux_token".to_string(), U256::from(10u64).pow(U256::from(24u64)));

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["chain_id"], 31337);
        assert!(json.get("deployer").is_none());
        assert_eq!(
            json["deployments"]["anjux_token"],
            "0x4242424242424242424242424242424242424242"
        );
        assert_eq!(
            json["initial_supplies"]["anjux_token"],
            "1000000000000000000000000"
        );

        let round_tripped: DeploymentRecord =
            serde_json::from_value(json).unwrap();
        assert_eq!(round_tripped, record);
    }

    /// Empty supply maps are omitted from the serialized record
    #[test]
    fn test_record_omits_empty_supplies() {
        let json = serde_json::to_value(DeploymentRecord::default()).unwrap();
        assert!(json.get("initial_supplies").is_none());
        assert!(json.get("deployments").is_some());
    }
}
