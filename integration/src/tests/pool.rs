//! Tests of the liquidity pool

use alloy_primitives::U256;
use eyre::{ensure, Result};
use scripts::utils::tokens;

use crate::{
    abis::{FeeToken, LiquidityPool},
    integration_test,
    test_inventory::TestArgs,
    util::transactions::wait_for_tx_success,
};

/// A swap against seeded reserves emits a single `Swapped` event whose
/// amounts match the observed reserve deltas, and the constant-product
/// invariant holds across the swap. Exercised in both directions
async fn test_swap(args: TestArgs) -> Result<()> {
    let anjux = FeeToken::new(args.anjux, args.client.clone());
    let ethof = FeeToken::new(args.ethof, args.client.clone());
    let pool = LiquidityPool::new(args.pool, args.client.clone());

    ensure!(pool.tokenA().call().await?._0 == args.anjux, "wrong token A");
    ensure!(pool.tokenB().call().await?._0 == args.ethof, "wrong token B");

    // Seed the deployer and the pool
    wait_for_tx_success(anjux.bridgeMint(args.deployer, tokens(10_000))).await?;
    wait_for_tx_success(ethof.bridgeMint(args.deployer, tokens(10_000))).await?;
    wait_for_tx_success(anjux.approve(args.pool, tokens(1_000))).await?;
    wait_for_tx_success(ethof.approve(args.pool, tokens(2_000))).await?;
    wait_for_tx_success(pool.addLiquidity(tokens(1_000), tokens(2_000))).await?;

    let reserve_a = pool.reserveA().call().await?._0;
    let reserve_b = pool.reserveB().call().await?._0;
    ensure!(
        reserve_a >= tokens(1_000) && reserve_b >= tokens(2_000),
        "liquidity not reflected in the reserves"
    );

    let amount_in = tokens(100);
    wait_for_tx_success(anjux.approve(args.pool, amount_in)).await?;
    let receipt = wait_for_tx_success(pool.swap(args.anjux, amount_in)).await?;

    let swaps: Vec<_> = receipt
        .inner
        .logs()
        .iter()
        .filter_map(|log| log.log_decode::<LiquidityPool::Swapped>().ok())
        .collect();
    ensure!(swaps.len() == 1, "expected exactly one Swapped event, got {}", swaps.len());

    let event = &swaps[0].inner.data;
    ensure!(event.user == args.deployer, "wrong swap user");
    ensure!(event.tokenIn == args.anjux, "wrong input token");
    ensure!(event.tokenOut == args.ethof, "wrong output token");
    ensure!(event.amountIn == amount_in, "wrong input amount");

    let reserve_a_after = pool.reserveA().call().await?._0;
    let reserve_b_after = pool.reserveB().call().await?._0;
    ensure!(event.amountOut > U256::ZERO, "swap produced no output");
    ensure!(
        reserve_b - reserve_b_after == event.amountOut,
        "event output does not match the reserve delta"
    );
    ensure!(
        reserve_a_after * reserve_b_after >= reserve_a * reserve_b,
        "constant-product invariant violated"
    );

    // Reverse direction: ETHoF in, AnJuX out
    wait_for_tx_success(ethof.approve(args.pool, amount_in)).await?;
    let receipt = wait_for_tx_success(pool.swap(args.ethof, amount_in)).await?;

    let reverse_swaps: Vec<_> = receipt
        .inner
        .logs()
        .iter()
        .filter_map(|log| log.log_decode::<LiquidityPool::Swapped>().ok())
        .collect();
    ensure!(
        reverse_swaps.len() == 1,
        "expected exactly one Swapped event, got {}",
        reverse_swaps.len()
    );

    let event = &reverse_swaps[0].inner.data;
    ensure!(event.user == args.deployer, "wrong reverse-swap user");
    ensure!(event.tokenIn == args.ethof, "wrong reverse-swap input token");
    ensure!(event.tokenOut == args.anjux, "wrong reverse-swap output token");
    ensure!(event.amountIn == amount_in, "wrong reverse-swap input amount");

    let reserve_a_final = pool.reserveA().call().await?._0;
    let reserve_b_final = pool.reserveB().call().await?._0;
    ensure!(event.amountOut > U256::ZERO, "reverse swap produced no output");
    ensure!(
        reserve_a_after - reserve_a_final == event.amountOut,
        "reverse-swap output does not match the reserve delta"
    );
    ensure!(
        reserve_a_final * reserve_b_final >= reserve_a_after * reserve_b_after,
        "constant-product invariant violated on the reverse swap"
    );

    Ok(())
}
integration_test!(test_swap);
