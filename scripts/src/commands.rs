//! Implementations of the deploy scripts

use std::path::PathBuf;

use alloy::{
    primitives::{Address, Bytes, U256},
    sol_types::SolCall,
};
use e2e::{constructor, watch, Account, Deployer, Wallet};
use eyre::{bail, WrapErr};
use tracing::{error, info};

use crate::{
    abi::{IErc20Balances, MyTokenV1, MyTokenV2},
    cli::{DeployArgs, DeployUpgradeableArgs, Network},
    constants::{
        MY_TOKEN_CONTRACT, MY_TOKEN_KEY, MY_TOKEN_PROXY_CONTRACT,
        MY_TOKEN_PROXY_KEY, MY_TOKEN_V1_CONTRACT, MY_TOKEN_V1_KEY,
        MY_TOKEN_V2_CONTRACT, MY_TOKEN_V2_KEY, TOKEN_NAME, TOKEN_SYMBOL,
        USER_FUNDING,
    },
    deployments::write_deployed_addresses,
    utils::{format_tokens, log_separator},
};

/// Everything a command needs besides its own arguments.
pub struct ScriptContext {
    /// Account paying for deployments and owning the contracts
    pub deployer: Account,
    /// Network the scripts run against
    pub network: Network,
    /// `StylusDeployer` running constructors, if not the default one
    pub stylus_deployer: Option<Address>,
    /// Where to record deployed addresses, if anywhere
    pub deployments_path: Option<PathBuf>,
}

impl ScriptContext {
    fn contract(&self, name: &str) -> Deployer {
        let deployer = self.deployer.as_deployer().with_contract_name(name);
        match self.stylus_deployer {
            Some(address) => deployer.with_deployer_address(address),
            None => deployer,
        }
    }

    /// Two accounts distinct from the deployer on a local node, the deployer
    /// itself elsewhere.
    async fn users(&self) -> eyre::Result<(Account, Account)> {
        if !self.network.creates_users() {
            return Ok((self.deployer.clone(), self.deployer.clone()));
        }

        let user1 = self
            .deployer
            .fund_new(USER_FUNDING)
            .await
            .wrap_err("failed to fund user1")?;
        let user2 = self
            .deployer
            .fund_new(USER_FUNDING)
            .await
            .wrap_err("failed to fund user2")?;

        for (name, user) in [("User1", &user1), ("User2", &user2)] {
            let balance = user.balance().await?;
            if balance < USER_FUNDING {
                bail!("{name} {} holds {balance} wei", user.address());
            }
            info!("✓ {name} {} funded with {balance} wei", user.address());
        }
        Ok((user1, user2))
    }

    fn record(&self, entries: &[(&str, Address)]) -> eyre::Result<()> {
        let Some(path) = &self.deployments_path else {
            return Ok(());
        };
        write_deployed_addresses(path, entries)?;
        info!("Deployments written to {}", path.display());
        Ok(())
    }
}

/// Balances tracked across the upgrade.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Balances {
    deployer: U256,
    user1: U256,
    user2: U256,
}

impl Balances {
    async fn fetch(
        wallet: &Wallet,
        token: Address,
        accounts: [Address; 3],
    ) -> eyre::Result<Self> {
        let token = IErc20Balances::new(token, wallet);
        let [deployer, user1, user2] = accounts;
        Ok(Self {
            deployer: token.balanceOf(deployer).call().await?.balance,
            user1: token.balanceOf(user1).call().await?.balance,
            user2: token.balanceOf(user2).call().await?.balance,
        })
    }

    fn log(&self, title: &str) {
        info!("{title}:");
        info!("  Deployer: {}", format_tokens(self.deployer));
        info!("  User1: {}", format_tokens(self.user1));
        info!("  User2: {}", format_tokens(self.user2));
    }
}

/// Fails if any balance moved across the upgrade.
fn check_preserved(before: &Balances, after: &Balances) -> eyre::Result<()> {
    if before != after {
        error!("✗ ERROR: Balances changed after upgrade!");
        bail!(
            "balances changed after upgrade: before {before:?}, after {after:?}"
        );
    }
    Ok(())
}

/// Deploy the non-upgradeable `MyToken`, minting the initial supply to the
/// deployer.
///
/// # Errors
///
/// Fails if the deployment fails or the deployments file can't be written.
pub async fn deploy(args: DeployArgs, ctx: &ScriptContext) -> eyre::Result<()> {
    let owner = ctx.deployer.address();
    info!("Deploying contract with account: {owner}");

    let address = ctx
        .contract(MY_TOKEN_CONTRACT)
        .with_constructor(constructor!(owner, args.initial_supply))
        .deploy()
        .await
        .wrap_err("failed to deploy MyToken")?
        .contract_address;

    info!("MyToken deployed to: {address}");
    ctx.record(&[(MY_TOKEN_KEY, address)])
}

/// Deploy `MyTokenV1` behind a `MyTokenProxy`, mint and transfer through the
/// proxy, upgrade it to `MyTokenV2` and check nothing was lost.
///
/// # Errors
///
/// Fails if a deployment or call fails, or if any balance differs after the
/// upgrade.
#[allow(clippy::too_many_lines)]
pub async fn deploy_upgradeable(
    args: DeployUpgradeableArgs,
    ctx: &ScriptContext,
) -> eyre::Result<()> {
    info!("Using network: {}", ctx.network);
    let deployer = &ctx.deployer;
    let (user1, user2) = ctx.users().await?;

    log_separator();
    info!("Deploying Upgradeable ERC20 Token");
    log_separator();
    info!("Deployer address: {}", deployer.address());
    info!("User1 address: {}", user1.address());
    info!("User2 address: {}", user2.address());

    info!("Step 1: Deploying MyTokenV1 implementation...");
    let v1_address = ctx
        .contract(MY_TOKEN_V1_CONTRACT)
        .with_constructor(constructor!(deployer.address()))
        .deploy()
        .await
        .wrap_err("failed to deploy MyTokenV1")?
        .contract_address;
    info!("✓ MyTokenV1 implementation deployed to: {v1_address}");

    info!("Step 2: Deploying MyTokenProxy (ERC1967Proxy)...");
    let init_data: Bytes = MyTokenV1::initializeCall {
        owner: deployer.address(),
        initialSupply: args.initial_supply,
    }
    .abi_encode()
    .into();
    let proxy_address = ctx
        .contract(MY_TOKEN_PROXY_CONTRACT)
        .with_constructor(constructor!(v1_address, init_data))
        .deploy()
        .await
        .wrap_err("failed to deploy MyTokenProxy")?
        .contract_address;
    info!("✓ Proxy deployed to: {proxy_address}");

    info!("Step 3: Connecting to proxy as MyTokenV1...");
    let token_v1 = MyTokenV1::new(proxy_address, &deployer.wallet);
    info!("✓ Token name: {}", token_v1.name().call().await?.name);
    info!("✓ Token symbol: {}", token_v1.symbol().call().await?.symbol);
    info!(
        "✓ Total supply: {}",
        format_tokens(token_v1.totalSupply().call().await?.totalSupply)
    );
    info!(
        "✓ Deployer balance: {}",
        format_tokens(token_v1.balanceOf(deployer.address()).call().await?.balance)
    );

    info!("Step 4: Testing minting and transfers...");
    watch!(token_v1.mint(user1.address(), args.mint_amount))
        .wrap_err("failed to mint to user1")?;
    info!("✓ Minted {} tokens to user1", format_tokens(args.mint_amount));
    info!(
        "✓ User1 balance: {}",
        format_tokens(token_v1.balanceOf(user1.address()).call().await?.balance)
    );

    let token_v1_as_user1 = MyTokenV1::new(proxy_address, &user1.wallet);
    watch!(token_v1_as_user1.transfer(user2.address(), args.transfer_amount))
        .wrap_err("failed to transfer from user1 to user2")?;
    info!(
        "✓ Transferred {} tokens from user1 to user2",
        format_tokens(args.transfer_amount)
    );
    info!(
        "✓ User2 balance: {}",
        format_tokens(token_v1.balanceOf(user2.address()).call().await?.balance)
    );

    let accounts = [deployer.address(), user1.address(), user2.address()];
    let before =
        Balances::fetch(&deployer.wallet, proxy_address, accounts).await?;
    before.log("Balances before upgrade");

    info!("Step 5: Deploying MyTokenV2 implementation...");
    let v2_address = ctx
        .contract(MY_TOKEN_V2_CONTRACT)
        .with_constructor(constructor!(deployer.address()))
        .deploy()
        .await
        .wrap_err("failed to deploy MyTokenV2")?
        .contract_address;
    info!("✓ MyTokenV2 implementation deployed to: {v2_address}");

    info!("Step 6: Upgrading proxy to V2...");
    watch!(token_v1.upgradeToAndCall(v2_address, Bytes::new()))
        .wrap_err("failed to upgrade the proxy")?;
    info!("✓ Upgrade transaction completed");

    info!("Step 7: Verifying upgrade...");
    let token_v2 = MyTokenV2::new(proxy_address, &deployer.wallet);
    let version = token_v2.version().call().await?.version;
    info!("✓ Version function returns: {version}");

    let after =
        Balances::fetch(&deployer.wallet, proxy_address, accounts).await?;
    after.log("Balances after upgrade");

    check_preserved(&before, &after)?;
    info!("✓ All balances preserved after upgrade!");

    info!("✓ Token name: {}", token_v2.name().call().await?.name);
    info!("✓ Token symbol: {}", token_v2.symbol().call().await?.symbol);
    info!(
        "✓ Total supply: {}",
        format_tokens(token_v2.totalSupply().call().await?.totalSupply)
    );

    log_separator();
    info!("Deployment Summary");
    log_separator();
    info!("MyTokenV1 Implementation: {v1_address}");
    info!("MyTokenV2 Implementation: {v2_address}");
    info!("Proxy Address: {proxy_address}");
    info!("Token Name: {TOKEN_NAME}");
    info!("Token Symbol: {TOKEN_SYMBOL}");
    info!("Version: {version}");
    log_separator();

    ctx.record(&[
        (MY_TOKEN_V1_KEY, v1_address),
        (MY_TOKEN_V2_KEY, v2_address),
        (MY_TOKEN_PROXY_KEY, proxy_address),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str =
        "0xb6b15c8cb491557369f3c7d2c287b053eb229daa9c22138887752191c9520659";

    fn context(network: Network) -> ScriptContext {
        ScriptContext {
            deployer: Account::from_private_key(KEY, "http://localhost:8547")
                .unwrap(),
            network,
            stylus_deployer: None,
            deployments_path: None,
        }
    }

    #[tokio::test]
    async fn public_network_reuses_deployer_as_users() {
        let ctx = context(Network::ArbitrumSepolia);

        let (user1, user2) = ctx.users().await.unwrap();

        assert_eq!(user1.address(), ctx.deployer.address());
        assert_eq!(user2.address(), ctx.deployer.address());
    }

    fn balances(deployer: u64, user1: u64, user2: u64) -> Balances {
        Balances {
            deployer: U256::from(deployer),
            user1: U256::from(user1),
            user2: U256::from(user2),
        }
    }

    #[test]
    fn unchanged_balances_are_preserved() {
        let before = balances(994_000, 4_000, 1_000);
        check_preserved(&before, &before).unwrap();
    }

    #[test]
    fn moved_balance_fails_the_upgrade() {
        let before = balances(994_000, 4_000, 1_000);
        let after = balances(994_000, 3_999, 1_000);

        let err = check_preserved(&before, &after).unwrap_err();

        assert!(err.to_string().contains("balances changed after upgrade"));
    }

    #[test]
    fn records_nothing_without_deployments_path() {
        let ctx = context(Network::Local);
        ctx.record(&[(MY_TOKEN_KEY, Address::ZERO)]).unwrap();
    }

    #[test]
    fn records_deployments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        let mut ctx = context(Network::Local);
        ctx.deployments_path = Some(path.clone());

        ctx.record(&[(MY_TOKEN_PROXY_KEY, Address::repeat_byte(7))]).unwrap();

        assert_eq!(
            crate::deployments::read_deployed_address(&path, MY_TOKEN_PROXY_KEY)
                .unwrap(),
            Address::repeat_byte(7)
        );
    }
}
