//! Devnet-only RPC helpers

use alloy::providers::{DynProvider, Provider};
use eyre::Result;

/// Advance the devnet clock by the given number of seconds and
/// mine a block so the new timestamp takes effect
pub async fn increase_time(client: &DynProvider, seconds: u64) -> Result<()> {
    let _: serde_json::Value = client
        .raw_request("evm_increaseTime".into(), (seconds,))
        .await?;
    let _: serde_json::Value = client.raw_request("evm_mine".into(), ()).await?;

    Ok(())
}
