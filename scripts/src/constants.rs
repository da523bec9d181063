//! Constants used by the deploy scripts

use alloy::primitives::{uint, U256};

/// Key of the object holding contract addresses in the deployments file
pub const DEPLOYMENTS_KEY: &str = "deployments";

/// Deployments file key of the non-upgradeable token
pub const MY_TOKEN_KEY: &str = "my_token";
/// Deployments file key of the first implementation
pub const MY_TOKEN_V1_KEY: &str = "my_token_v1";
/// Deployments file key of the second implementation
pub const MY_TOKEN_V2_KEY: &str = "my_token_v2";
/// Deployments file key of the proxy
pub const MY_TOKEN_PROXY_KEY: &str = "my_token_proxy";

/// Crate name, under `tokens/`, of the non-upgradeable token
pub const MY_TOKEN_CONTRACT: &str = "my-token";
/// Crate name of the first implementation
pub const MY_TOKEN_V1_CONTRACT: &str = "my-token-v1";
/// Crate name of the second implementation
pub const MY_TOKEN_V2_CONTRACT: &str = "my-token-v2";
/// Crate name of the proxy
pub const MY_TOKEN_PROXY_CONTRACT: &str = "my-token-proxy";

/// Token name set at initialization
pub const TOKEN_NAME: &str = "MyToken";
/// Token symbol set at initialization
pub const TOKEN_SYMBOL: &str = "MTK";

/// Gas token sent to each user account created on a local node (0.1 ETH)
pub const USER_FUNDING: U256 = uint!(100_000_000_000_000_000_U256);

/// Width of the banner lines
pub const BANNER_WIDTH: usize = 60;
