use proc_macro::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::{parse_macro_input, Expr, Token};

/// `log!(entry)` or `log!(entry, context)`, where `entry` is any `loggable!` value.
pub fn log_impl(input: TokenStream) -> TokenStream {
    let arguments =
        parse_macro_input!(input with Punctuated::<Expr, Token![,]>::parse_terminated);
    let mut arguments = arguments.into_iter();

    let expanded = match (arguments.next(), arguments.next(), arguments.next()) {
        (Some(entry), None, None) => quote! { (#entry).log() },
        (Some(entry), Some(context), None) => quote! { (#entry).log_with_context(&#context) },
        _ => quote! { compile_error!("expected log!(entry) or log!(entry, context)") },
    };
    expanded.into()
}
