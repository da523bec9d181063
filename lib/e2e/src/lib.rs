//! End-to-end harness for Stylus contracts living in this workspace.
//!
//! Provides funded [`Account`]s, a [`Deployer`] driving `cargo stylus
//! deploy`, and helpers to send transactions and assert on reverts and
//! emitted events.
mod account;
mod constructor_macro;
mod deploy;
mod environment;
mod error;
mod event;
mod receipt;
mod system;

pub use account::Account;
pub use constructor_macro::{AbiTypeToString, Constructor};
pub use deploy::{ContractInitializationError, Deployer};
pub use e2e_proc::test;
pub use environment::{contract_dir, workspace_root};
pub use error::Revert;
pub use event::EventExt;
pub use receipt::Receipt;
pub use system::{
    Wallet, DEPLOYER_ADDRESS_ENV_VAR_NAME, RPC_URL_ENV_VAR_NAME,
};

#[doc(hidden)]
pub mod __private {
    pub use alloy;
    pub use eyre;
}
