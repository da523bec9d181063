//! ERC-1967 proxy that forwards every call to the current `MyToken`
//! implementation.
#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
extern crate alloc;

use alloc::vec::Vec;

use openzeppelin_stylus::proxy::{
    erc1967::{self, Erc1967Proxy},
    IProxy,
};
use stylus_sdk::{
    abi::Bytes, alloy_primitives::Address, prelude::*, ArbResult,
};

#[entrypoint]
#[storage]
struct MyTokenProxy {
    erc1967: Erc1967Proxy,
}

#[public]
impl MyTokenProxy {
    /// Points the proxy at `implementation` and delegate-calls `data`
    /// (usually an encoded `initialize` call) in the proxy's context.
    #[constructor]
    pub fn constructor(
        &mut self,
        implementation: Address,
        data: Bytes,
    ) -> Result<(), erc1967::Error> {
        self.erc1967.constructor(implementation, &data)
    }

    /// Address of the implementation stored in the ERC-1967 slot.
    fn implementation(&self) -> Result<Address, Vec<u8>> {
        self.erc1967.implementation()
    }

    #[fallback]
    fn fallback(&mut self, calldata: &[u8]) -> ArbResult {
        unsafe { self.erc1967.do_fallback(calldata) }
    }
}

#[cfg(test)]
mod tests {
    use alloy_sol_types::SolError;
    use motsu::prelude::*;
    use openzeppelin_stylus::proxy::erc1967::utils::ERC1967InvalidImplementation;

    use super::*;

    #[motsu::test]
    fn constructor_rejects_implementation_without_code(
        contract: Contract<MyTokenProxy>,
        alice: Address,
        bob: Address,
    ) {
        let err = contract
            .sender(alice)
            .constructor(bob, Bytes::from(vec![]))
            .motsu_expect_err(
                "an account without code is not an implementation",
            );

        let err: Vec<u8> = err.into();
        assert_eq!(
            err,
            ERC1967InvalidImplementation { implementation: bob }.abi_encode()
        );
    }
}
