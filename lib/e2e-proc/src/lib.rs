//! Procedural macros for the `e2e` harness.
use proc_macro::TokenStream;

mod test;

/// Defines an end-to-end stylus contract test that injects funded accounts
/// through its arguments.
///
/// Every argument is constructed with `<Type>::new().await?`, so the test
/// must return a `Result` compatible with `eyre::Report`.
///
/// # Examples
///
/// ```rust,ignore
/// #[e2e::test]
/// async fn transfers(alice: Account, bob: Account) -> eyre::Result<()> {
///     let address = alice
///         .as_deployer()
///         .with_constructor(constructor!(alice.address(), supply))
///         .deploy()
///         .await?
///         .contract_address;
///     let contract = MyToken::new(address, &alice.wallet);
///
///     watch!(contract.transfer(bob.address(), uint!(1_U256)))?;
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn test(attr: TokenStream, input: TokenStream) -> TokenStream {
    test::test(attr, input)
}
