//! Definitions of CLI arguments and commands for deploy scripts

use std::{
    fmt::{self, Display},
    path::PathBuf,
};

use alloy::primitives::{Address, U256};
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::{
    commands::{deploy, deploy_upgradeable, ScriptContext},
    utils::parse_tokens,
};

#[derive(Parser)]
#[command(about = "Deploy and upgrade the MyToken contracts")]
pub struct Cli {
    /// Private key of the deployer
    #[arg(short, long, env = "PRIVATE_KEY")]
    pub private_key: String,

    /// Network RPC URL
    #[arg(
        short,
        long,
        env = "RPC_URL",
        default_value = "http://localhost:8547"
    )]
    pub rpc_url: String,

    /// Network the contracts are deployed to
    #[arg(short, long, value_enum, default_value_t = Network::Local)]
    pub network: Network,

    /// Address of the `StylusDeployer` contract running constructors.
    /// Defaults to the one `cargo stylus` knows about
    #[arg(long, env = "DEPLOYER_ADDRESS")]
    pub deployer_address: Option<Address>,

    /// Path to a JSON file recording the deployed addresses
    #[arg(short, long)]
    pub deployments_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Deploy the non-upgradeable `MyToken`
    Deploy(DeployArgs),
    /// Deploy `MyTokenV1` behind a proxy, exercise it and upgrade it to
    /// `MyTokenV2`
    DeployUpgradeable(DeployUpgradeableArgs),
}

impl Command {
    /// Run the command.
    ///
    /// # Errors
    ///
    /// Fails if any deployment or contract interaction fails, or if balances
    /// change across the upgrade.
    pub async fn run(self, ctx: &ScriptContext) -> eyre::Result<()> {
        match self {
            Command::Deploy(args) => deploy(args, ctx).await,
            Command::DeployUpgradeable(args) => {
                deploy_upgradeable(args, ctx).await
            }
        }
    }
}

#[derive(Args)]
pub struct DeployArgs {
    /// Whole tokens minted to the deployer
    #[arg(long, default_value = "1000000", value_parser = parse_tokens)]
    pub initial_supply: U256,
}

#[derive(Args)]
pub struct DeployUpgradeableArgs {
    /// Whole tokens minted to the deployer when the proxy is initialized
    #[arg(long, default_value = "1000000", value_parser = parse_tokens)]
    pub initial_supply: U256,

    /// Whole tokens minted to user1
    #[arg(long, default_value = "5000", value_parser = parse_tokens)]
    pub mint_amount: U256,

    /// Whole tokens transferred from user1 to user2
    #[arg(long, default_value = "1000", value_parser = parse_tokens)]
    pub transfer_amount: U256,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Network {
    /// A local nitro dev node
    Local,
    /// Arbitrum Sepolia testnet
    ArbitrumSepolia,
}

impl Network {
    /// Whether fresh user accounts can be funded from the deployer. Public
    /// networks only get the deployer's key.
    #[must_use]
    pub fn creates_users(self) -> bool {
        matches!(self, Network::Local)
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Local => write!(f, "local"),
            Network::ArbitrumSepolia => write!(f, "arbitrum-sepolia"),
        }
    }
}
