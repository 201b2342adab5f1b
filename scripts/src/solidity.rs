//! Definitions of Solidity constructors & methods called during deployment

use alloy::sol;

sol! {
    /// The USDCoF token constructor, taking the address
    /// that transfer fees are diverted to
    contract UsdCofToken {
        constructor(address feeReceiver);
    }

    /// The liquidity pool constructor, taking the paired token
    /// addresses and the pool owner
    contract LiquidityPool {
        constructor(address tokenA, address tokenB, address owner);
    }

    /// The token factory surface used by the `create-token` command
    #[sol(rpc)]
    contract TokenFactory {
        event TokenCreated(address tokenAddress, string name, string symbol, uint256 initialSupply);

        function createToken(string memory name, string memory symbol, uint256 initialSupply) external returns (address);
    }
}
