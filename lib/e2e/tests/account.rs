#![cfg(feature = "e2e")]

use alloy::primitives::{uint, U256};
use e2e::Account;
use eyre::Result;

const FUNDING: U256 = uint!(10_000_000_000_000_000_U256);

#[e2e::test]
async fn fund_new_sends_the_requested_value(alice: Account) -> Result<()> {
    let before = alice.balance().await?;

    let user = alice.fund_new(FUNDING).await?;

    assert_eq!(user.balance().await?, FUNDING);
    // The funder also pays gas for the transfer.
    assert!(alice.balance().await? <= before - FUNDING);
    Ok(())
}

#[e2e::test]
async fn send_value_moves_gas_token(alice: Account, bob: Account) -> Result<()> {
    let before = bob.balance().await?;

    alice.send_value(bob.address(), FUNDING).await?;

    assert_eq!(bob.balance().await?, before + FUNDING);
    Ok(())
}
