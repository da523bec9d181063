//! Errors shared by every version of the token.

use openzeppelin_stylus::{
    access::ownable,
    proxy::{erc1967, utils::uups_upgradeable},
    token::erc20,
    utils::address,
};
use stylus_sdk::prelude::*;

/// Errors surfaced by every version of the token.
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
    /// The call is from an unauthorized context.
    UnauthorizedCallContext(uups_upgradeable::UUPSUnauthorizedCallContext),
    /// The storage `slot` is unsupported as a UUID.
    UnsupportedProxiableUUID(uups_upgradeable::UUPSUnsupportedProxiableUUID),
    /// The proxy storage was already initialized.
    InvalidInitialization(uups_upgradeable::InvalidInitialization),
    /// The proxy storage records a newer version than this implementation.
    InvalidVersion(uups_upgradeable::InvalidVersion),
    /// The new implementation is invalid.
    InvalidImplementation(erc1967::utils::ERC1967InvalidImplementation),
    /// The proxy admin is invalid.
    InvalidAdmin(erc1967::utils::ERC1967InvalidAdmin),
    /// The proxy beacon is invalid.
    InvalidBeacon(erc1967::utils::ERC1967InvalidBeacon),
    /// Value sent to a non-payable upgrade.
    NonPayable(erc1967::utils::ERC1967NonPayable),
    /// There's no code at the target address.
    EmptyCode(address::AddressEmptyCode),
    /// A call to the target failed.
    FailedCall(address::FailedCall),
    /// A call to the target failed with a revert reason.
    FailedCallWithReason(address::FailedCallWithReason),
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

impl From<uups_upgradeable::Error> for Error {
    fn from(value: uups_upgradeable::Error) -> Self {
        match value {
            uups_upgradeable::Error::UnauthorizedCallContext(e) => {
                Error::UnauthorizedCallContext(e)
            }
            uups_upgradeable::Error::UnsupportedProxiableUUID(e) => {
                Error::UnsupportedProxiableUUID(e)
            }
            uups_upgradeable::Error::InvalidInitialization(e) => {
                Error::InvalidInitialization(e)
            }
            uups_upgradeable::Error::InvalidVersion(e) => {
                Error::InvalidVersion(e)
            }
            uups_upgradeable::Error::InvalidImplementation(e) => {
                Error::InvalidImplementation(e)
            }
            uups_upgradeable::Error::InvalidAdmin(e) => Error::InvalidAdmin(e),
            uups_upgradeable::Error::InvalidBeacon(e) => {
                Error::InvalidBeacon(e)
            }
            uups_upgradeable::Error::NonPayable(e) => Error::NonPayable(e),
            uups_upgradeable::Error::EmptyCode(e) => Error::EmptyCode(e),
            uups_upgradeable::Error::FailedCall(e) => Error::FailedCall(e),
            uups_upgradeable::Error::FailedCallWithReason(e) => {
                Error::FailedCallWithReason(e)
            }
        }
    }
}
