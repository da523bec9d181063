use std::str::FromStr;

use alloy::{
    network::TransactionBuilder,
    primitives::{uint, Address, U256},
    providers::Provider,
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use eyre::WrapErr;
use once_cell::sync::Lazy;
use tokio::sync::{Mutex, MutexGuard};

use crate::{
    deploy::Deployer,
    system::{self, Wallet},
};

/// Pre-funded account of the nitro dev node.
const MASTER_PRIVATE_KEY: &str =
    "0xb6b15c8cb491557369f3c7d2c287b053eb229daa9c22138887752191c9520659";
const DEFAULT_FUNDING_ETH: U256 = uint!(100_000_000_000_000_000_U256);

/// An externally owned account together with a provider that signs on its
/// behalf.
#[derive(Clone, Debug)]
pub struct Account {
    /// The account's local private key wrapper.
    pub signer: PrivateKeySigner,
    /// The account's wallet -- an `alloy` provider with a `WalletFiller`.
    pub wallet: Wallet,
    rpc_url: Url,
}

impl Account {
    /// Create a new random account funded with [`DEFAULT_FUNDING_ETH`] by the
    /// dev node's master account. The node is read from `RPC_URL`.
    ///
    /// # Errors
    ///
    /// May fail if `RPC_URL` is missing or funding the account fails.
    pub async fn new() -> eyre::Result<Self> {
        let rpc_url = system::rpc_url()?;
        let master =
            Self::from_private_key(MASTER_PRIVATE_KEY, rpc_url.as_str())
                .wrap_err("failed to create master account")?;
        AccountFactory::create(&master, DEFAULT_FUNDING_ETH).await
    }

    /// Wrap an existing private key connected to `rpc_url`.
    ///
    /// # Errors
    ///
    /// May fail if the key or the URL cannot be parsed.
    pub fn from_private_key(
        private_key: &str,
        rpc_url: &str,
    ) -> eyre::Result<Self> {
        let signer = PrivateKeySigner::from_str(private_key)
            .wrap_err("failed to parse private key")?;
        let rpc_url: Url =
            rpc_url.parse().wrap_err("failed to parse rpc url")?;
        let wallet = system::wallet(&signer, rpc_url.clone());
        Ok(Self { signer, wallet, rpc_url })
    }

    /// Create a new random account funded with `value` by this account.
    ///
    /// # Errors
    ///
    /// May fail if the funding transaction fails.
    pub async fn fund_new(&self, value: U256) -> eyre::Result<Self> {
        AccountFactory::create(self, value).await
    }

    /// Get a hex-encoded String representing this account's private key.
    #[must_use]
    pub fn pk(&self) -> String {
        alloy::hex::encode_prefixed(self.signer.to_bytes())
    }

    /// Retrieve this account's address.
    #[must_use]
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// The rpc endpoint this account's provider is connected to.
    #[must_use]
    pub fn url(&self) -> &str {
        self.rpc_url.as_str()
    }

    /// Create a configurable smart contract deployer on behalf of this account.
    #[must_use]
    pub fn as_deployer(&self) -> Deployer {
        Deployer::new(self.url().to_string(), self.pk())
    }

    /// Get gas token balance.
    ///
    /// # Errors
    ///
    /// May fail if the node cannot be queried.
    pub async fn balance(&self) -> eyre::Result<U256> {
        self.wallet
            .get_balance(self.address())
            .await
            .wrap_err("should get balance")
    }

    /// Send gas token to an address and wait for inclusion.
    ///
    /// # Errors
    ///
    /// May fail if the transaction is rejected or never mined.
    pub async fn send_value(
        &self,
        to: Address,
        value: U256,
    ) -> eyre::Result<()> {
        let tx = TransactionRequest::default()
            .with_from(self.address())
            .with_to(to)
            .with_value(value);

        self.wallet
            .send_transaction(tx)
            .await?
            .watch()
            .await
            .wrap_err(format!("funds were not sent to {to}"))?;

        Ok(())
    }
}

/// A unit struct used as a synchronization mechanism in
/// [`AccountFactory::lock`].
struct AccountFactory;

impl AccountFactory {
    /// Get access to the factory in a synchronized manner.
    async fn lock() -> MutexGuard<'static, Self> {
        /// New accounts are funded from a single wallet, so their creation
        /// must be serialized (otherwise the nonce will be too low).
        static SYNC_ACCOUNT_FACTORY: Lazy<Mutex<AccountFactory>> =
            Lazy::new(|| Mutex::new(AccountFactory));

        SYNC_ACCOUNT_FACTORY.lock().await
    }

    /// Create a random account and fund it with `value` from `funder`.
    async fn create(funder: &Account, value: U256) -> eyre::Result<Account> {
        let _lock = AccountFactory::lock().await;

        let signer = PrivateKeySigner::random();
        let account_address = signer.address();

        funder.send_value(account_address, value).await.wrap_err(format!(
            "account's wallet wasn't funded - address is {account_address}"
        ))?;

        let rpc_url = funder.rpc_url.clone();
        let wallet = system::wallet(&signer, rpc_url.clone());

        Ok(Account { signer, wallet, rpc_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEV_ADDRESS: Address =
        alloy::primitives::address!("3f1Eae7D46d88F08fc2F8ed27FCb2AB183EB2d0E");

    #[test]
    fn wraps_existing_private_key() {
        let account =
            Account::from_private_key(MASTER_PRIVATE_KEY, "http://localhost:8547")
                .expect("should build account");

        assert_eq!(account.address(), DEV_ADDRESS);
        assert_eq!(account.pk(), MASTER_PRIVATE_KEY);
        assert_eq!(account.url(), "http://localhost:8547/");
    }

    #[test]
    fn rejects_malformed_private_key() {
        let err = Account::from_private_key("0xnot-a-key", "http://localhost:8547")
            .expect_err("should reject the key");
        assert!(err.to_string().contains("private key"));
    }

    #[test]
    fn rejects_malformed_url() {
        let err = Account::from_private_key(MASTER_PRIVATE_KEY, "not a url")
            .expect_err("should reject the url");
        assert!(err.to_string().contains("rpc url"));
    }
}
