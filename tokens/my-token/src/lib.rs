//! `MyToken` (`MTK`): an ownable, mintable ERC-20 token.
//!
//! The whole supply passed to the constructor is minted to the initial owner,
//! and only the owner may mint afterwards.
#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
extern crate alloc;

use alloc::{string::String, vec::Vec};

use openzeppelin_stylus::{
    access::ownable::{self, IOwnable, Ownable},
    token::erc20::{
        self,
        extensions::{Erc20Metadata, IErc20Metadata},
        Erc20, IErc20,
    },
    utils::introspection::erc165::IErc165,
};
use stylus_sdk::{
    alloy_primitives::{aliases::B32, Address, U256, U8},
    prelude::*,
};

/// Name reported by [`IErc20Metadata::name`].
pub const TOKEN_NAME: &str = "MyToken";
/// Symbol reported by [`IErc20Metadata::symbol`].
pub const TOKEN_SYMBOL: &str = "MTK";

/// Errors surfaced by [`MyToken`].
#[derive(SolidityError, Debug)]
pub enum Error {
    /// The sender does not hold enough tokens.
    InsufficientBalance(erc20::ERC20InsufficientBalance),
    /// The token sender is invalid.
    InvalidSender(erc20::ERC20InvalidSender),
    /// The token receiver is invalid.
    InvalidReceiver(erc20::ERC20InvalidReceiver),
    /// The spender's allowance is too low.
    InsufficientAllowance(erc20::ERC20InsufficientAllowance),
    /// The spender to be approved is invalid.
    InvalidSpender(erc20::ERC20InvalidSpender),
    /// The approver is invalid.
    InvalidApprover(erc20::ERC20InvalidApprover),
    /// The caller is not the owner.
    UnauthorizedAccount(ownable::OwnableUnauthorizedAccount),
    /// The owner is not a valid owner account.
    InvalidOwner(ownable::OwnableInvalidOwner),
}

impl From<erc20::Error> for Error {
    fn from(value: erc20::Error) -> Self {
        match value {
            erc20::Error::InsufficientBalance(e) => {
                Error::InsufficientBalance(e)
            }
            erc20::Error::InvalidSender(e) => Error::InvalidSender(e),
            erc20::Error::InvalidReceiver(e) => Error::InvalidReceiver(e),
            erc20::Error::InsufficientAllowance(e) => {
                Error::InsufficientAllowance(e)
            }
            erc20::Error::InvalidSpender(e) => Error::InvalidSpender(e),
            erc20::Error::InvalidApprover(e) => Error::InvalidApprover(e),
        }
    }
}

impl From<ownable::Error> for Error {
    fn from(value: ownable::Error) -> Self {
        match value {
            ownable::Error::UnauthorizedAccount(e) => {
                Error::UnauthorizedAccount(e)
            }
            ownable::Error::InvalidOwner(e) => Error::InvalidOwner(e),
        }
    }
}

#[entrypoint]
#[storage]
struct MyToken {
    erc20: Erc20,
    metadata: Erc20Metadata,
    ownable: Ownable,
}

#[public]
#[implements(IErc20<Error = erc20::Error>, IErc20Metadata, IOwnable, IErc165)]
impl MyToken {
    /// Sets the token metadata, hands ownership to `initial_owner` and mints
    /// `initial_supply` to it.
    ///
    /// The owner is passed explicitly: during construction the caller is the
    /// Stylus deployer contract, not the account that requested deployment.
    #[constructor]
    fn constructor(
        &mut self,
        initial_owner: Address,
        initial_supply: U256,
    ) -> Result<(), Error> {
        self.metadata
            .constructor(String::from(TOKEN_NAME), String::from(TOKEN_SYMBOL));
        self.ownable.constructor(initial_owner)?;
        self.erc20._mint(initial_owner, initial_supply)?;
        Ok(())
    }

    /// Creates `value` tokens for `to`. Restricted to the owner.
    fn mint(&mut self, to: Address, value: U256) -> Result<(), Error> {
        self.ownable.only_owner()?;
        self.erc20._mint(to, value)?;
        Ok(())
    }
}

#[public]
impl IErc20 for MyToken {
    type Error = erc20::Error;

    fn total_supply(&self) -> U256 {
        self.erc20.total_supply()
    }

    fn balance_of(&self, account: Address) -> U256 {
        self.erc20.balance_of(account)
    }

    fn transfer(
        &mut self,
        to: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        self.erc20.transfer(to, value)
    }

    fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.erc20.allowance(owner, spender)
    }

    fn approve(
        &mut self,
        spender: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        self.erc20.approve(spender, value)
    }

    fn transfer_from(
        &mut self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        self.erc20.transfer_from(from, to, value)
    }
}

#[public]
impl IErc20Metadata for MyToken {
    fn name(&self) -> String {
        self.metadata.name()
    }

    fn symbol(&self) -> String {
        self.metadata.symbol()
    }

    fn decimals(&self) -> U8 {
        self.metadata.decimals()
    }
}

#[public]
impl IOwnable for MyToken {
    fn owner(&self) -> Address {
        self.ownable.owner()
    }

    fn transfer_ownership(
        &mut self,
        new_owner: Address,
    ) -> Result<(), Vec<u8>> {
        Ok(self.ownable.transfer_ownership(new_owner)?)
    }

    fn renounce_ownership(&mut self) -> Result<(), Vec<u8>> {
        Ok(self.ownable.renounce_ownership()?)
    }
}

#[public]
impl IErc165 for MyToken {
    fn supports_interface(&self, interface_id: B32) -> bool {
        self.erc20.supports_interface(interface_id)
            || self.metadata.supports_interface(interface_id)
            || self.ownable.supports_interface(interface_id)
    }
}
