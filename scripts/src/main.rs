use clap::Parser;
use e2e::Account;
use eyre::WrapErr;
use my_token_scripts::{cli::Cli, commands::ScriptContext};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let Cli {
        private_key,
        rpc_url,
        network,
        deployer_address,
        deployments_path,
        command,
    } = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let deployer = Account::from_private_key(&private_key, &rpc_url)
        .wrap_err("failed to set up the deployer account")?;

    let ctx = ScriptContext {
        deployer,
        network,
        stylus_deployer: deployer_address,
        deployments_path,
    };

    command.run(&ctx).await
}
