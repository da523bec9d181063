use alloy::primitives::{Address, Bytes, U256, U8};

/// Constructor data passed to `cargo stylus deploy`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constructor {
    /// Constructor signature.
    pub signature: String,
    /// Constructor arguments.
    pub args: Vec<String>,
}

/// Helper trait to convert values to the string form `cargo stylus`
/// accepts as constructor arguments.
pub trait AbiTypeToString {
    /// Stringify ABI type.
    fn abi_type_to_string(&self) -> String;
}

macro_rules! impl_to_arg_string {
    ($($abi_type:ident),* $(,)?) => {$(
        impl AbiTypeToString for $abi_type {
            fn abi_type_to_string(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

impl_to_arg_string!(U256, u64, String, U8, Address);

impl AbiTypeToString for Bytes {
    fn abi_type_to_string(&self) -> String {
        alloy::hex::encode_prefixed(self)
    }
}

/// Builds a [`Constructor`] from typed values.
///
/// # Examples
///
/// ```rust,ignore
/// let ctr = constructor!(alice.address(), uint!(1_000_U256));
/// assert_eq!(ctr.signature, "constructor(address,uint256)");
/// ```
#[macro_export]
macro_rules! constructor {
    () => {{
        $crate::Constructor {
            signature: "constructor()".to_string(),
            args: vec![],
        }
    }};

    ($first:expr $(, $rest:expr)* $(,)?) => {{
        use $crate::__private::alloy::sol_types::{SolType, SolValue};

        fn sol_name<T: SolValue>(_: &T) -> &'static str {
            <T::SolType as SolType>::SOL_NAME
        }

        let signature_params = {
            let mut params = vec![sol_name(&$first)];
            $(params.push(sol_name(&$rest));)*
            params.join(",")
        };

        let args = vec![
            $crate::AbiTypeToString::abi_type_to_string(&$first)
            $(, $crate::AbiTypeToString::abi_type_to_string(&$rest))*
        ];

        $crate::Constructor {
            signature: format!("constructor({signature_params})"),
            args,
        }
    }};
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, uint};

    use super::*;

    #[test]
    fn empty_constructor() {
        let ctr = crate::constructor!();
        assert_eq!(ctr.signature, "constructor()");
        assert!(ctr.args.is_empty());
    }

    #[test]
    fn typed_arguments() {
        let owner = address!("3f1Eae7D46d88F08fc2F8ed27FCb2AB183EB2d0E");
        let supply = uint!(1000_U256);
        let data = Bytes::from(vec![0xde, 0xad]);

        let ctr = crate::constructor!(owner, supply, data);

        assert_eq!(ctr.signature, "constructor(address,uint256,bytes)");
        assert_eq!(
            ctr.args,
            vec![owner.to_string(), "1000".to_string(), "0xdead".to_string()]
        );
    }
}
