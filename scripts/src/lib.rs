//! Scripts deploying the `MyToken` contracts and walking an upgradeable
//! deployment from V1 to V2.
pub mod abi;
pub mod cli;
pub mod commands;
pub mod constants;
pub mod deployments;
pub mod utils;
