//! Types and utilities for managing the inventory of integration tests

use std::{future::Future, path::PathBuf, pin::Pin};

use alloy::providers::DynProvider;
use alloy_primitives::Address;
use eyre::Result;

/// The arguments provided to each integration test
#[derive(Clone)]
pub struct TestArgs {
    /// The RPC client
    pub client: DynProvider,
    /// The address of the deployer account
    pub deployer: Address,
    /// The address transfer fees are diverted to
    pub fee_receiver: Address,
    /// The address of the USDCoF token
    pub usdcof: Address,
    /// The address of the ETHoF token
    pub ethof: Address,
    /// The address of the AnJuX token
    pub anjux: Address,
    /// The address of the token factory
    pub factory: Address,
    /// The address of the liquidity pool
    pub pool: Address,
    /// The path of the deployments file the setup run wrote
    pub deployments_path: PathBuf,
    /// The directory containing the compiled contract artifacts
    pub artifacts_dir: PathBuf,
}

/// The signature of an integration test
type TestFn = fn(TestArgs) -> Pin<Box<dyn Future<Output = Result<()>>>>;

/// A struct representing an integration test
pub struct IntegrationTest {
    /// The name of the test
    pub name: &'static str,
    /// The test function
    pub test_fn: TestFn,
}

// Collect the integration tests into an iterable
inventory::collect!(IntegrationTest);

/// Macro to register an integration test
#[macro_export]
macro_rules! integration_test {
    ($test_fn:ident) => {
        inventory::submit!($crate::test_inventory::IntegrationTest {
            name: stringify!($test_fn),
            test_fn: move |args| std::boxed::Box::pin($test_fn(args)),
        });
    };
}
