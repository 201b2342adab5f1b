//! Constants used in the integration tests

/// The default devnet private key, i.e. the first pre-funded account
/// of a stock `anvil` / `hardhat node` instance
pub(crate) const DEFAULT_DEVNET_PKEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// The default devnet RPC URL
pub(crate) const DEFAULT_DEVNET_HOSTPORT: &str = "http://localhost:8545";

/// The address the token transfer fees are diverted to during the tests:
/// the second pre-funded devnet account, which the tests never spend from
pub(crate) const FEE_RECEIVER_ADDRESS: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";

/// The mint cooldown the fee tokens enforce, in seconds
pub(crate) const MINT_COOLDOWN_SECS: u64 = 24 * 60 * 60;

/// The per-mint amount the fee tokens credit, in base units (0.4 tokens)
pub(crate) const MINT_AMOUNT_WEI: u64 = 400_000_000_000_000_000;

/// The transfer fee the tokens charge, in percent
pub(crate) const FEE_PERCENT: u64 = 1;
