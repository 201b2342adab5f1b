//! Solidity ABI definitions for the contracts exercised by the integration tests

use alloy::sol;

sol! {
    /// The shared surface of the fee tokens (USDCoF / ETHoF / AnJuX and
    /// factory-created tokens): an ERC20 with a time-gated faucet mint,
    /// a transfer fee, bridge custody operations, and a one-way
    /// ownership lock
    #[sol(rpc)]
    interface FeeToken {
        event Transfer(address indexed from, address indexed to, uint256 value);

        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function balanceOf(address account) external view returns (uint256);
        function transfer(address to, uint256 amount) external returns (bool);
        function approve(address spender, uint256 amount) external returns (bool);

        function mint(address to) external;
        function mintAmount() external view returns (uint256);
        function mintEnabled() external view returns (bool);

        function bridgeMint(address to, uint256 amount) external;
        function bridgeLock(uint256 amount) external;
        function bridgeUnlock(uint256 amount) external;

        function owner() external view returns (address);
        function feeReceiver() external view returns (address);
        function immutableMode() external view returns (bool);
        function setFeePercent(uint256 feePercent) external;
        function setMintEnabled(bool enabled) external;
        function setMintAmount(uint256 amount) external;
        function lockOwnership() external;
        function transferOwnershipSecurely(address newOwner) external;
    }

    /// The token factory
    #[sol(rpc)]
    interface TokenFactory {
        event TokenCreated(address tokenAddress, string name, string symbol, uint256 initialSupply);

        function createToken(string memory name, string memory symbol, uint256 initialSupply) external returns (address);
        function getDeployedTokens() external view returns (address[] memory);
    }

    /// The two-asset liquidity pool
    #[sol(rpc)]
    interface LiquidityPool {
        event LiquidityAdded(address indexed provider, uint256 amountA, uint256 amountB);
        event Swapped(address indexed user, address tokenIn, address tokenOut, uint256 amountIn, uint256 amountOut);

        function tokenA() external view returns (address);
        function tokenB() external view returns (address);
        function reserveA() external view returns (uint256);
        function reserveB() external view returns (uint256);
        function addLiquidity(uint256 amountA, uint256 amountB) external;
        function swap(address tokenIn, uint256 amountIn) external;
    }
}
