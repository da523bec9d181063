use alloy::sol_types::SolError;

use crate::deploy::ContractInitializationError;

/// Extension trait for asserting a call reverted with a typed error.
pub trait Revert<E> {
    /// Checks that `Self` corresponds to the typed abi-encoded error
    /// `expected`.
    fn reverted_with(&self, expected: E) -> bool;
}

impl<E: SolError> Revert<E> for alloy::contract::Error {
    fn reverted_with(&self, expected: E) -> bool {
        let Self::TransportError(err) = self else {
            return false;
        };
        err.as_error_resp()
            .and_then(|payload| payload.as_revert_data())
            .is_some_and(|data| data[..] == expected.abi_encode()[..])
    }
}

impl<E: SolError> Revert<E> for eyre::Report {
    fn reverted_with(&self, expected: E) -> bool {
        if let Some(err) = self.downcast_ref::<alloy::contract::Error>() {
            return err.reverted_with(expected);
        }

        let expected = alloy::hex::encode(expected.abi_encode());
        if let Some(err) = ContractInitializationError::from_report(self) {
            return err.revert_data.contains(&expected);
        }

        // Errors wrapped in a context only keep their rendered form.
        format!("{self:?}").contains(&expected)
    }
}
