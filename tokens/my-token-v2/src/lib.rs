//! `MyToken` (`MTK`) logic contract, second version.
//!
//! Keeps the storage layout of the first version unchanged, so a proxy
//! upgraded to it preserves every balance, the owner and the metadata. Adds
//! [`MyTokenV2::version`].
#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
extern crate alloc;

use alloc::{string::String, vec::Vec};

use openzeppelin_stylus::{
    access::ownable::{IOwnable, Ownable},
    proxy::utils::{
        erc1822::IErc1822Proxiable,
        uups_upgradeable::{
            IUUPSUpgradeable, InvalidInitialization, UUPSUpgradeable,
        },
    },
    token::erc20::{
        self,
        extensions::{Erc20Metadata, IErc20Metadata},
        Erc20, IErc20,
    },
    utils::introspection::erc165::IErc165,
};
use stylus_sdk::{
    abi::Bytes,
    alloy_primitives::{aliases::B32, Address, B256, U256, U32, U8},
    prelude::*,
};

/// Name reported by [`IErc20Metadata::name`].
pub const TOKEN_NAME: &str = "MyToken";
/// Symbol reported by [`IErc20Metadata::symbol`].
pub const TOKEN_SYMBOL: &str = "MTK";
/// Value returned by [`MyTokenV2::version`].
pub const VERSION: &str = "V2";

#[path = "../../my-token-v1/src/error.rs"]
mod error;

pub use error::Error;

#[entrypoint]
#[storage]
pub struct MyTokenV2 {
    erc20: Erc20,
    metadata: Erc20Metadata,
    ownable: Ownable,
    uups: UUPSUpgradeable,
}

#[public]
#[implements(IErc20<Error = erc20::Error>, IErc20Metadata, IOwnable, IUUPSUpgradeable, IErc1822Proxiable, IErc165)]
impl MyTokenV2 {
    /// Marks this deployment as the logic contract.
    ///
    /// The owner only administers the logic contract itself. Proxies get their
    /// owner from [`Self::initialize`].
    #[constructor]
    fn constructor(&mut self, owner: Address) -> Result<(), Error> {
        self.uups.constructor();
        self.ownable.constructor(owner)?;
        Ok(())
    }

    /// Sets up the proxy storage: records the UUPS version, sets the token
    /// metadata, hands ownership to `owner` and mints `initial_supply` to it.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidInitialization`] - If the proxy was already
    ///   initialized.
    /// * [`Error::UnauthorizedCallContext`] - If not delegate-called by a
    ///   proxy.
    /// * [`Error::InvalidOwner`] - If `owner` is the zero address.
    fn initialize(
        &mut self,
        owner: Address,
        initial_supply: U256,
    ) -> Result<(), Error> {
        if !self.metadata.name().is_empty() {
            return Err(Error::InvalidInitialization(InvalidInitialization {}));
        }

        self.uups.set_version()?;
        self.metadata
            .constructor(String::from(TOKEN_NAME), String::from(TOKEN_SYMBOL));
        self.ownable.constructor(owner)?;
        self.erc20._mint(owner, initial_supply)?;
        Ok(())
    }

    /// Creates `value` tokens for `to`. Restricted to the owner.
    fn mint(&mut self, to: Address, value: U256) -> Result<(), Error> {
        self.ownable.only_owner()?;
        self.erc20._mint(to, value)?;
        Ok(())
    }

    /// Records the implementation version in the proxy storage. Called by
    /// `upgradeToAndCall` on the new implementation.
    #[selector(name = "setVersion")]
    fn set_version(&mut self) -> Result<(), Error> {
        Ok(self.uups.set_version()?)
    }

    #[selector(name = "getVersion")]
    fn get_version(&self) -> U32 {
        self.uups.get_version()
    }

    /// Human readable version of this implementation.
    #[allow(clippy::unused_self)]
    fn version(&self) -> String {
        String::from(VERSION)
    }
}

#[public]
impl IErc20 for MyTokenV2 {
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
impl IErc20Metadata for MyTokenV2 {
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
impl IOwnable for MyTokenV2 {
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
impl IErc165 for MyTokenV2 {
    fn supports_interface(&self, interface_id: B32) -> bool {
        self.erc20.supports_interface(interface_id)
            || self.metadata.supports_interface(interface_id)
            || self.ownable.supports_interface(interface_id)
    }
}

#[public]
impl IUUPSUpgradeable for MyTokenV2 {
    #[selector(name = "UPGRADE_INTERFACE_VERSION")]
    fn upgrade_interface_version(&self) -> String {
        self.uups.upgrade_interface_version()
    }

    #[payable]
    fn upgrade_to_and_call(
        &mut self,
        new_implementation: Address,
        data: Bytes,
    ) -> Result<(), Vec<u8>> {
        self.ownable.only_owner()?;
        self.uups.upgrade_to_and_call(new_implementation, data)?;
        Ok(())
    }
}

#[public]
impl IErc1822Proxiable for MyTokenV2 {
    #[selector(name = "proxiableUUID")]
    fn proxiable_uuid(&self) -> Result<B256, Vec<u8>> {
        self.uups.proxiable_uuid()
    }
}

#[cfg(test)]
mod tests {
    use motsu::prelude::*;
    use openzeppelin_stylus::proxy::{
        erc1967::utils::IMPLEMENTATION_SLOT,
        utils::uups_upgradeable::UUPSUnauthorizedCallContext,
    };
    use stylus_sdk::alloy_primitives::uint;

    use super::*;

    fn deployed(contract: &Contract<MyTokenV2>, owner: Address) {
        contract
            .sender(owner)
            .constructor(owner)
            .motsu_expect("should construct MyTokenV2");
    }

    #[motsu::test]
    fn version_is_v2(contract: Contract<MyTokenV2>, alice: Address) {
        deployed(&contract, alice);

        assert_eq!(contract.sender(alice).version(), "V2");
    }

    #[motsu::test]
    fn keeps_uups_surface(contract: Contract<MyTokenV2>, alice: Address) {
        deployed(&contract, alice);

        assert_eq!(contract.sender(alice).upgrade_interface_version(), "5.0.0");
        assert_eq!(
            contract.sender(alice).proxiable_uuid().motsu_unwrap(),
            IMPLEMENTATION_SLOT
        );
    }

    #[motsu::test]
    fn initialize_reverts_outside_proxy(
        contract: Contract<MyTokenV2>,
        alice: Address,
    ) {
        deployed(&contract, alice);

        let err = contract
            .sender(alice)
            .initialize(alice, uint!(1_000_U256))
            .motsu_expect_err("logic contract should not be initialized");

        assert!(matches!(
            err,
            Error::UnauthorizedCallContext(UUPSUnauthorizedCallContext {})
        ));
    }

    #[motsu::test]
    fn transfer_reverts_when_exceeding_balance(
        contract: Contract<MyTokenV2>,
        alice: Address,
        bob: Address,
    ) {
        deployed(&contract, alice);
        contract.sender(alice).mint(alice, uint!(10_U256)).motsu_unwrap();

        let err = contract
            .sender(alice)
            .transfer(bob, uint!(11_U256))
            .motsu_expect_err("should not transfer more than the balance");

        assert!(matches!(err, erc20::Error::InsufficientBalance(_)));
        assert_eq!(contract.sender(alice).balance_of(alice), uint!(10_U256));
    }
}
