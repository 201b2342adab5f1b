//! Constants used in the deploy scripts

/// The default path of the deployments file.
///
/// All scripts read & write the same file so that e.g. the pool deployment
/// can pick up the token addresses written by a prior token deployment.
pub const DEFAULT_DEPLOYMENTS_PATH: &str = "deployed-addresses.json";

/// The default directory containing the compiled contract artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// The USDCoF token contract key in the deployments file
pub const USDCOF_CONTRACT_KEY: &str = "usdcof_token";

/// The ETHoF token contract key in the deployments file
pub const ETHOF_CONTRACT_KEY: &str = "ethof_token";

/// The AnJuX token contract key in the deployments file
pub const ANJUX_CONTRACT_KEY: &str = "anjux_token";

/// The token factory contract key in the deployments file
pub const TOKEN_FACTORY_CONTRACT_KEY: &str = "token_factory";

/// The liquidity pool contract key in the deployments file
pub const POOL_CONTRACT_KEY: &str = "liquidity_pool";

/// The prefix under which factory-created tokens are recorded
/// in the deployments file, followed by the token symbol
pub const CREATED_TOKEN_KEY_PREFIX: &str = "token:";

/// The name of the environment variable holding the Alchemy API key
pub const ALCHEMY_API_KEY_ENV_VAR: &str = "ALCHEMY_API_KEY";

/// The name of the environment variable holding the deployer private key
pub const PRIVATE_KEY_ENV_VAR: &str = "PRIVATE_KEY";

/// The name of the environment variable holding the Sonic deployer private key
pub const SONIC_PRIVATE_KEY_ENV_VAR: &str = "SONIC_PRIVATE_KEY";

/// The name of the environment variable holding the Etherscan API key
pub const ETHERSCAN_API_KEY_ENV_VAR: &str = "ETHERSCAN_API_KEY";

/// The name of the environment variable holding the Arbiscan API key
pub const ARBISCAN_API_KEY_ENV_VAR: &str = "ARBISCAN_API_KEY";

/// The name of the environment variable holding the Sonicscan API key
pub const SONIC_API_KEY_ENV_VAR: &str = "SONIC_API_KEY";

/// The name of the Sepolia network profile
pub const SEPOLIA_NETWORK: &str = "sepolia";

/// The name of the Arbitrum Sepolia network profile
pub const ARBITRUM_SEPOLIA_NETWORK: &str = "arbitrum-sepolia";

/// The name of the Sonic Blaze network profile
pub const SONIC_NETWORK: &str = "sonic";

/// The name of the LUKSO testnet network profile
pub const LUKSO_TESTNET_NETWORK: &str = "lukso-testnet";

/// The name of the local devnet network profile
pub const LOCALHOST_NETWORK: &str = "localhost";

/// The base of the Alchemy Sepolia RPC URL, completed by the Alchemy API key
pub const SEPOLIA_RPC_URL_BASE: &str = "https://eth-sepolia.g.alchemy.com/v2/";

/// The base of the Alchemy Arbitrum Sepolia RPC URL,
/// completed by the Alchemy API key
pub const ARBITRUM_SEPOLIA_RPC_URL_BASE: &str = "https://arb-sepolia.g.alchemy.com/v2/";

/// The Sonic Blaze testnet RPC URL
pub const SONIC_RPC_URL: &str = "https://rpc.blaze.soniclabs.com";

/// The LUKSO testnet RPC URL
pub const LUKSO_TESTNET_RPC_URL: &str = "https://rpc.testnet.lukso.network";

/// The local devnet RPC URL
pub const LOCALHOST_RPC_URL: &str = "http://localhost:8545";

/// The Sepolia chain ID
pub const SEPOLIA_CHAIN_ID: u64 = 11155111;

/// The Arbitrum Sepolia chain ID
pub const ARBITRUM_SEPOLIA_CHAIN_ID: u64 = 421614;

/// The LUKSO testnet chain ID
pub const LUKSO_TESTNET_CHAIN_ID: u64 = 4201;

/// The default devnet private key, i.e. the first pre-funded
/// account of a stock `anvil` / `hardhat node` instance
pub const DEFAULT_DEVNET_PKEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// The number of base units per whole token (18 decimals)
pub const TOKEN_DECIMALS: u8 = 18;

/// The number of whole tokens premined to the deployer
/// by the USDCoF token constructor
pub const USDCOF_INITIAL_SUPPLY_TOKENS: u64 = 1_000_000;
