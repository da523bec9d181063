use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, FnArg, ItemFn};

/// Shorthand to print nice errors.
macro_rules! error {
    ($tokens:expr, $($msg:expr),+ $(,)?) => {{
        let error = syn::Error::new(syn::spanned::Spanned::span(&$tokens), format!($($msg),+));
        return error.to_compile_error().into();
    }};
}

/// Defines an end-to-end test that injects accounts through parameters.
///
/// For more information see [`crate::test`].
pub(crate) fn test(_attr: TokenStream, input: TokenStream) -> TokenStream {
    let item_fn = parse_macro_input!(input as ItemFn);
    let attrs = &item_fn.attrs;
    let sig = &item_fn.sig;
    let fn_name = &sig.ident;
    let fn_return_type = &sig.output;
    let fn_block = &item_fn.block;

    if sig.asyncness.is_none() {
        error!(sig.fn_token, "e2e tests must be async");
    }

    let mut declarations = Vec::with_capacity(sig.inputs.len());
    for arg in &sig.inputs {
        let FnArg::Typed(arg) = arg else {
            error!(arg, "unexpected receiver argument in test signature");
        };
        let binding = &arg.pat;
        let ty = &arg.ty;
        declarations.push(quote! {
            let #binding = <#ty>::new().await?;
        });
    }

    quote! {
        #( #attrs )*
        #[tokio::test]
        async fn #fn_name() #fn_return_type {
            #( #declarations )*
            #fn_block
        }
    }
    .into()
}
