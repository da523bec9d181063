use alloy::{primitives::Address, rpc::types::TransactionReceipt};

/// Receipt of a contract deployment.
#[derive(Clone, Debug)]
pub struct Receipt {
    /// Receipt of the deployment transaction.
    pub inner: TransactionReceipt,
    /// Address of the deployed contract.
    pub contract_address: Address,
}

/// Send a transaction built by a `sol!` call builder and return the pending
/// transaction.
#[macro_export]
macro_rules! send {
    ($e:expr) => {
        $e.send()
            .await
            .map_err(|err| $crate::__private::eyre::Report::new(err))
    };
}

/// Send a transaction and wait until it is included, returning its hash.
#[macro_export]
macro_rules! watch {
    ($e:expr) => {
        match $crate::send!($e) {
            Ok(pending) => pending
                .watch()
                .await
                .map_err(|err| $crate::__private::eyre::Report::new(err)),
            Err(err) => Err(err),
        }
    };
}

/// Send a transaction and wait for its receipt.
#[macro_export]
macro_rules! receipt {
    ($e:expr) => {
        match $crate::send!($e) {
            Ok(pending) => pending
                .get_receipt()
                .await
                .map_err(|err| $crate::__private::eyre::Report::new(err)),
            Err(err) => Err(err),
        }
    };
}
