//! Loading and parsing of contract compilation artifacts.
//!
//! The contract sources are compiled out-of-band (Hardhat); the scripts only
//! consume the resulting artifact JSON, which carries the creation bytecode.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::errors::ScriptError;

/// The raw shape of a Hardhat compilation artifact,
/// reduced to the fields the scripts consume
#[derive(Deserialize)]
struct RawArtifact {
    /// The name of the compiled contract
    #[serde(rename = "contractName")]
    contract_name: Option<String>,
    /// The hex-encoded creation bytecode
    bytecode: String,
}

/// A parsed compilation artifact for a single contract
#[derive(Clone, Debug)]
pub struct ContractArtifact {
    /// The name of the compiled contract, when the artifact carries one
    pub contract_name: Option<String>,
    /// The decoded creation bytecode
    pub bytecode: Vec<u8>,
}

impl ContractArtifact {
    /// Parse an artifact from its JSON representation
    pub fn parse(json: &str) -> Result<Self, ScriptError> {
        let raw: RawArtifact =
            serde_json::from_str(json).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

        let hex_bytecode = raw.bytecode.strip_prefix("0x").unwrap_or(&raw.bytecode);
        let bytecode =
            hex::decode(hex_bytecode).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

        // An interface or abstract contract compiles to empty bytecode
        if bytecode.is_empty() {
            return Err(ScriptError::ArtifactParsing(
                "artifact contains no creation bytecode".to_string(),
            ));
        }

        Ok(ContractArtifact {
            contract_name: raw.contract_name,
            bytecode,
        })
    }

    /// The full creation payload: bytecode followed by the
    /// ABI-encoded constructor arguments
    pub fn deploy_code(&self, constructor_args: &[u8]) -> Vec<u8> {
        [self.bytecode.as_slice(), constructor_args].concat()
    }
}

/// Load the artifact for the named contract from the artifacts directory.
///
/// Looks for the Hardhat layout `<dir>/contracts/<name>.sol/<name>.json`
/// first, then for a flat `<dir>/<name>.json`.
pub fn load_artifact(dir: &Path, name: &str) -> Result<ContractArtifact, ScriptError> {
    let candidates = [
        dir.join("contracts")
            .join(format!("{name}.sol"))
            .join(format!("{name}.json")),
        dir.join(format!("{name}.json")),
    ];

    let path = candidates
        .iter()
        .find(|path| path.exists())
        .ok_or_else(|| {
            ScriptError::ArtifactParsing(format!(
                "no artifact for `{name}` under {}",
                dir.display()
            ))
        })?;

    let contents =
        fs::read_to_string(path).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;
    let artifact = ContractArtifact::parse(&contents)?;

    if let Some(artifact_name) = &artifact.contract_name {
        if artifact_name != name {
            return Err(ScriptError::ArtifactParsing(format!(
                "artifact at {} is for `{artifact_name}`, expected `{name}`",
                path.display()
            )));
        }
    }

    Ok(artifact)
}
