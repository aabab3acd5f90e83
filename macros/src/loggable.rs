use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{braced, parse_macro_input, Attribute, Expr, FieldsNamed, Ident, LitStr, Token};

/// `Name { #[error("..")] Variant { field: Type } => tracing::Level::X, .. }`
struct LoggableInput {
    enum_name: Ident,
    variants: Vec<LoggableVariant>,
}

struct LoggableVariant {
    docs: Vec<Attribute>,
    message: LitStr,
    name: Ident,
    fields: Option<FieldsNamed>,
    level: Expr,
}

impl Parse for LoggableInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let enum_name = input.parse()?;
        let content;
        braced!(content in input);

        let mut variants = Vec::new();
        while !content.is_empty() {
            variants.push(content.parse()?);
            if !content.is_empty() {
                content.parse::<Token![,]>()?;
            }
        }

        Ok(Self { enum_name, variants })
    }
}

impl Parse for LoggableVariant {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let message = attrs
            .iter()
            .find(|attr| attr.path().is_ident("error"))
            .ok_or_else(|| input.error("expected #[error(\"...\")]"))?
            .parse_args()?;
        let docs = attrs
            .into_iter()
            .filter(|attr| attr.path().is_ident("doc"))
            .collect();

        let name = input.parse()?;
        let fields = if input.peek(syn::token::Brace) {
            Some(input.parse()?)
        } else {
            None
        };
        input.parse::<Token![=>]>()?;
        let level = input.parse()?;

        Ok(Self {
            docs,
            message,
            name,
            fields,
            level,
        })
    }
}

pub fn loggable_impl(input: TokenStream) -> TokenStream {
    let LoggableInput { enum_name, variants } = parse_macro_input!(input as LoggableInput);

    let definitions = variants.iter().map(|variant| {
        let LoggableVariant {
            docs,
            message,
            name,
            fields,
            ..
        } = variant;
        quote! {
            #(#docs)*
            #[error(#message)]
            #name #fields
        }
    });

    let patterns: Vec<_> = variants
        .iter()
        .map(|variant| {
            let name = &variant.name;
            match variant.fields {
                Some(_) => quote! { Self::#name { .. } },
                None => quote! { Self::#name },
            }
        })
        .collect();
    let levels: Vec<_> = variants.iter().map(|variant| &variant.level).collect();

    quote! {
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum #enum_name {
            #(#definitions,)*
        }

        #[allow(dead_code)]
        impl #enum_name {
            pub fn level(&self) -> tracing::Level {
                match self {
                    #(#patterns => #levels,)*
                }
            }

            pub fn log(&self) {
                match self {
                    #(#patterns => tracing::event!(#levels, "{}", self),)*
                }
            }

            pub fn log_with_context(&self, context: &dyn std::fmt::Display) {
                match self {
                    #(#patterns => tracing::event!(#levels, context = %context, "{}", self),)*
                }
            }
        }
    }
    .into()
}
