use alloy::{
    network::{Ethereum, EthereumWallet},
    providers::{
        fillers::{
            BlobGasFiller, ChainIdFiller, FillProvider, GasFiller, JoinFill,
            NonceFiller, WalletFiller,
        },
        Identity, ProviderBuilder, RootProvider,
    },
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use eyre::WrapErr;

/// Name of the environment variable holding the node's RPC endpoint.
pub const RPC_URL_ENV_VAR_NAME: &str = "RPC_URL";

/// Name of the environment variable holding the address of the
/// `StylusDeployer` contract used to run constructors.
pub const DEPLOYER_ADDRESS_ENV_VAR_NAME: &str = "DEPLOYER_ADDRESS";

/// Convenience type alias that represents an Ethereum wallet.
pub type Wallet = FillProvider<
    JoinFill<
        JoinFill<
            Identity,
            JoinFill<
                GasFiller,
                JoinFill<BlobGasFiller, JoinFill<NonceFiller, ChainIdFiller>>,
            >,
        >,
        WalletFiller<EthereumWallet>,
    >,
    RootProvider<Ethereum>,
    Ethereum,
>;

/// Build a signing provider for `signer` connected to `rpc_url`.
pub(crate) fn wallet(signer: &PrivateKeySigner, rpc_url: Url) -> Wallet {
    ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer.clone()))
        .on_http(rpc_url)
}

/// Load the `name` environment variable.
pub(crate) fn env(name: &str) -> eyre::Result<String> {
    std::env::var(name).wrap_err(format!("failed to load {name}"))
}

/// Load and parse the node's RPC endpoint from [`RPC_URL_ENV_VAR_NAME`].
pub(crate) fn rpc_url() -> eyre::Result<Url> {
    env(RPC_URL_ENV_VAR_NAME)?
        .parse()
        .wrap_err("failed to parse RPC_URL string into a URL")
}
