use proc_macro2::TokenStream;
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::parse::Parser;
use syn::{Error, ItemFn, LitStr, Path, ReturnType, Type};

/// Runtime settings collected from the attribute arguments.
#[derive(Default)]
struct Profile {
    thread_name: Option<LitStr>,
    bootstrap_error: Option<Path>,
}

impl Profile {
    fn parse(&mut self, meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
        if meta.path.is_ident("current_thread") || meta.path.is_ident("default") {
            Ok(())
        } else if meta.path.is_ident("thread_name") {
            self.thread_name = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("bootstrap_error") {
            self.bootstrap_error = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error(
                "Unknown runtime option. Use: current_thread, default, thread_name = \"..\", \
                 bootstrap_error = path::to::handler",
            ))
        }
    }

    fn config_expr(&self) -> TokenStream {
        let base = quote! { ::tss_runtime::RuntimeConfig::current_thread() };
        match &self.thread_name {
            Some(name) => quote! { #base.with_thread_name(#name) },
            None => base,
        }
    }

    /// Either `?` on the build result or a hand-off to the configured handler.
    fn runtime_expr(&self) -> TokenStream {
        let build = quote! { ::tss_runtime::build_runtime(&config) };
        match &self.bootstrap_error {
            Some(handler) => quote! {
                match #build {
                    Ok(rt) => rt,
                    Err(err) => return #handler(err),
                }
            },
            None => quote! { #build? },
        }
    }
}

/// Expands `#[tss_runtime::main(...)]` into a synchronous `main` that blocks on the body.
#[must_use]
pub fn expand_main(args: TokenStream, input: ItemFn) -> TokenStream {
    match expand(args, input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(args: TokenStream, input: ItemFn) -> syn::Result<TokenStream> {
    if input.sig.asyncness.is_none() {
        return Err(Error::new_spanned(
            input.sig.fn_token,
            "#[tss_runtime::main] can only be applied to async functions",
        ));
    }
    if !returns_result(&input.sig.output) {
        return Err(Error::new_spanned(
            &input.sig.output,
            "#[tss_runtime::main] requires a Result return type",
        ));
    }

    let mut profile = Profile::default();
    syn::meta::parser(|meta| profile.parse(&meta)).parse2(args)?;
    let config = profile.config_expr();
    let runtime = profile.runtime_expr();

    let ItemFn { attrs, vis, sig, block } = input;
    let name = &sig.ident;
    let output = &sig.output;

    Ok(quote! {
        #(#attrs)*
        #vis fn #name() #output {
            let config = #config;
            let rt = #runtime;
            rt.block_on(async #block)
        }
    })
}

fn returns_result(output: &ReturnType) -> bool {
    let ReturnType::Type(_, ty) = output else {
        return false;
    };
    let Type::Path(path) = &**ty else {
        return false;
    };
    path.path.segments.last().is_some_and(|seg| seg.ident == "Result")
}
