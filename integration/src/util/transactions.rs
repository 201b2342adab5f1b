//! Utilities for sending and waiting on transactions

use alloy::{network::Ethereum, providers::DynProvider, rpc::types::TransactionReceipt};
use alloy_contract::{CallBuilder, CallDecoder};
use eyre::{ensure, Result};

/// The call builder type for the tests
pub type TestCallBuilder<'a, C> = CallBuilder<(), &'a DynProvider, C, Ethereum>;

/// Send a transaction and wait for it to be mined
pub async fn send_tx<C: CallDecoder>(tx: TestCallBuilder<'_, C>) -> Result<TransactionReceipt> {
    let pending_tx = tx.send().await?;
    let receipt = pending_tx.get_receipt().await?;
    Ok(receipt)
}

/// Wait for a transaction receipt and ensure it was successful
pub async fn wait_for_tx_success<C: CallDecoder>(
    tx: TestCallBuilder<'_, C>,
) -> Result<TransactionReceipt> {
    let receipt = send_tx(tx).await?;
    ensure!(receipt.status(), "transaction reverted");
    Ok(receipt)
}
