use std::{
    path::PathBuf,
    process::{Command, Output},
};

use alloy::{
    hex,
    primitives::{keccak256, Address, TxHash},
    providers::{Provider, ProviderBuilder},
};
use eyre::{bail, Context, ContextCompat};
use regex::Regex;

use crate::{
    constructor_macro::Constructor, environment::contract_dir,
    receipt::Receipt, system::DEPLOYER_ADDRESS_ENV_VAR_NAME,
};

const CONTRACT_INITIALIZATION_ERROR: &str =
    "ContractInitializationError(address)";

/// Raised by the `StylusDeployer` when a contract's constructor reverts.
#[derive(Debug)]
pub struct ContractInitializationError {
    /// Address the contract was deployed to before its constructor reverted.
    pub contract_address: Address,
    /// Hex encoded revert data.
    pub revert_data: String,
}

impl ContractInitializationError {
    /// Convert [`eyre::Report`] into [`ContractInitializationError`].
    #[must_use]
    pub fn from_report(report: &eyre::Report) -> Option<&Self> {
        report.downcast_ref::<ContractInitializationError>()
    }
}

impl std::fmt::Display for ContractInitializationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "contract initialization at {} failed: {}",
            self.contract_address, self.revert_data
        )
    }
}

impl std::error::Error for ContractInitializationError {}

/// A basic smart contract deployer.
#[derive(Clone, Debug)]
pub struct Deployer {
    rpc_url: String,
    private_key: String,
    constructor: Option<Constructor>,
    contract_name: Option<String>,
    deployer_address: Option<Address>,
}

impl Deployer {
    /// Deployer sending transactions signed with `private_key` to `rpc_url`.
    #[must_use]
    pub fn new(rpc_url: String, private_key: String) -> Self {
        Self {
            rpc_url,
            private_key,
            constructor: None,
            contract_name: None,
            deployer_address: None,
        }
    }

    /// Add solidity constructor to the deployer.
    #[must_use]
    pub fn with_constructor(mut self, constructor: Constructor) -> Self {
        self.constructor = Some(constructor);
        self
    }

    /// Deploy the contract crate `name` of this workspace instead of the crate
    /// the current directory belongs to.
    #[must_use]
    pub fn with_contract_name(mut self, name: &str) -> Self {
        self.contract_name = Some(name.to_string());
        self
    }

    /// Run constructors through the `StylusDeployer` at `address` instead of
    /// the one named by [`DEPLOYER_ADDRESS_ENV_VAR_NAME`].
    #[must_use]
    pub fn with_deployer_address(mut self, address: Address) -> Self {
        self.deployer_address = Some(address);
        self
    }

    /// Deploy and activate the contract.
    /// Consumes currently configured deployer.
    ///
    /// # Errors
    ///
    /// May error if:
    ///
    /// - `cargo stylus deploy` can't be run or fails.
    /// - The constructor reverts, see [`ContractInitializationError`].
    /// - The deployment receipt can't be fetched.
    pub async fn deploy(self) -> eyre::Result<Receipt> {
        let dir = self.contract_dir()?;

        let output = Command::new("cargo")
            .current_dir(&dir)
            .args(["stylus", "deploy"])
            .args(self.deploy_args()?)
            .output()
            .context("failed to execute `cargo stylus deploy` command")?;

        if !output.status.success() {
            return Err(deployment_error(&output));
        }

        let stdout = strip_color(&String::from_utf8_lossy(&output.stdout));
        let (contract_address, tx_hash) = extract_deploy_result(&stdout)?;
        self.get_receipt(contract_address, tx_hash).await
    }

    fn contract_dir(&self) -> eyre::Result<PathBuf> {
        match &self.contract_name {
            Some(name) => contract_dir(name),
            None => std::env::current_dir().context("failed to get current dir"),
        }
    }

    fn deploy_args(&self) -> eyre::Result<Vec<String>> {
        let mut args = vec![
            "--no-verify".to_owned(),
            "-e".to_owned(),
            self.rpc_url.clone(),
            "--private-key".to_owned(),
            self.private_key.clone(),
        ];

        if let Some(constructor) = &self.constructor {
            if let Some(deployer) = self.stylus_deployer()? {
                args.push("--deployer-address".to_owned());
                args.push(deployer.to_string());
            }
            // Must be last.
            args.push("--constructor-args".to_owned());
            args.extend(constructor.args.iter().cloned());
        }

        Ok(args)
    }

    /// Explicit deployer address, else the environment's, else `cargo
    /// stylus`'s default.
    fn stylus_deployer(&self) -> eyre::Result<Option<Address>> {
        if let Some(address) = self.deployer_address {
            return Ok(Some(address));
        }
        match std::env::var(DEPLOYER_ADDRESS_ENV_VAR_NAME) {
            Ok(address) => Ok(Some(
                address.parse().context("failed to parse deployer address")?,
            )),
            Err(_) => Ok(None),
        }
    }

    async fn get_receipt(
        &self,
        contract_address: Address,
        tx_hash: TxHash,
    ) -> eyre::Result<Receipt> {
        let provider = ProviderBuilder::new()
            .on_http(self.rpc_url.parse().context("invalid rpc url")?);

        let receipt = provider
            .get_transaction_receipt(tx_hash)
            .await
            .context("failed to fetch deployment receipt")?
            .context("deployment receipt not found")?;

        Ok(Receipt { inner: receipt, contract_address })
    }
}

/// Turn a failed `cargo stylus deploy` run into a report, typed as
/// [`ContractInitializationError`] when the constructor reverted.
fn deployment_error(output: &Output) -> eyre::Report {
    let stderr = strip_color(&String::from_utf8_lossy(&output.stderr));
    match parse_initialization_error(&stderr) {
        Some(err) => eyre::Report::new(err),
        None => eyre::eyre!("deployment failed: {stderr}"),
    }
}

fn parse_initialization_error(
    stderr: &str,
) -> Option<ContractInitializationError> {
    let re = Regex::new(r#"data: Some\(String\("0x([a-fA-F0-9]+)"\)\)"#).ok()?;
    let revert_data = re.captures(stderr)?.get(1)?.as_str();
    let data = hex::decode(revert_data).ok()?;

    let selector = &keccak256(CONTRACT_INITIALIZATION_ERROR)[..4];
    if data.len() < 36 || &data[..4] != selector {
        return None;
    }

    // Address is the right-aligned last 20 bytes of the first word.
    let contract_address = Address::from_slice(&data[16..36]);
    Some(ContractInitializationError {
        contract_address,
        revert_data: revert_data.to_string(),
    })
}

fn extract_deploy_result(stdout: &str) -> eyre::Result<(Address, TxHash)> {
    let mut address = None;
    let mut tx_hash = None;
    for line in stdout.lines() {
        if let Some((_, rest)) = line.split_once("deployed code at address: ")
        {
            address = Some(rest.trim());
        } else if let Some((_, rest)) = line.split_once("deployment tx hash: ")
        {
            tx_hash = Some(rest.trim());
        }
    }

    let (Some(address), Some(tx_hash)) = (address, tx_hash) else {
        bail!("failed to extract deployed address and tx hash from {stdout}");
    };

    let address =
        address.parse().context("failed to parse deployment address")?;
    let tx_hash =
        tx_hash.parse().context("failed to parse deployment tx hash")?;
    Ok((address, tx_hash))
}

/// Remove ANSI color codes from `cargo stylus` output.
fn strip_color(s: &str) -> String {
    match Regex::new(r"\x1b\[[0-9;]*[a-zA-Z]") {
        Ok(re) => re.replace_all(s, "").into_owned(),
        Err(_) => s.to_owned(),
    }
}
