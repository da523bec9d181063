#![cfg(feature = "e2e")]

use abi::MyTokenProxy;
use alloy::{
    primitives::{uint, Address, Bytes, U256},
    sol_types::SolCall,
};
use e2e::{constructor, Account, ContractInitializationError, EventExt};
use eyre::Result;

mod abi;

const INITIAL_SUPPLY: U256 = uint!(1_000_U256);

async fn deploy_implementation(account: &Account) -> Result<Address> {
    Ok(account
        .as_deployer()
        .with_contract_name("my-token-v1")
        .with_constructor(constructor!(account.address()))
        .deploy()
        .await?
        .contract_address)
}

fn initialize_data(owner: Address) -> Bytes {
    MyTokenProxy::initializeCall { owner, initialSupply: INITIAL_SUPPLY }
        .abi_encode()
        .into()
}

#[e2e::test]
async fn constructs_and_delegates(alice: Account) -> Result<()> {
    let implementation = deploy_implementation(&alice).await?;

    let receipt = alice
        .as_deployer()
        .with_constructor(constructor!(
            implementation,
            initialize_data(alice.address())
        ))
        .deploy()
        .await?;

    assert!(receipt.emits(MyTokenProxy::Upgraded { implementation }));
    assert!(receipt.emits(MyTokenProxy::Transfer {
        from: Address::ZERO,
        to: alice.address(),
        value: INITIAL_SUPPLY,
    }));

    let proxy = MyTokenProxy::new(receipt.contract_address, &alice.wallet);
    assert_eq!(proxy.implementation().call().await?.implementation, implementation);
    assert_eq!(proxy.name().call().await?.name, "MyToken");
    assert_eq!(proxy.balanceOf(alice.address()).call().await?.balance, INITIAL_SUPPLY);
    assert_eq!(proxy.owner().call().await?.owner, alice.address());

    Ok(())
}

#[e2e::test]
async fn constructor_reverts_without_implementation_code(
    alice: Account,
    bob: Account,
) -> Result<()> {
    let err = alice
        .as_deployer()
        .with_constructor(constructor!(bob.address(), initialize_data(alice.address())))
        .deploy()
        .await
        .expect_err("an account without code is not an implementation");

    assert!(ContractInitializationError::from_report(&err).is_some());

    Ok(())
}
