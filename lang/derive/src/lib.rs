use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Block, FnArg, ItemFn, Pat, PatIdent, PatType, ReturnType, Type, parse::Nothing,
    parse_macro_input, parse_quote,
};

/// Run the body of a free function through `tailrec::tailrec`.
///
/// The body is written as a step function over the parameters: it returns
/// `done(value)` to finish or `call((args, ...))` to go around again, while
/// the signature keeps the plain return type.
///
/// ```ignore
/// #[tailrec]
/// fn sum(n: u64, acc: u64) -> u64 {
///     if n == 0 { done(acc) } else { call((n - 1, acc + n)) }
/// }
/// ```
#[proc_macro_attribute]
pub fn tailrec(attr: TokenStream, item: TokenStream) -> TokenStream {
    let _ = parse_macro_input!(attr as Nothing);
    let item = parse_macro_input!(item as ItemFn);
    match expand(item) {
        | Ok(item) => TokenStream::from(quote!(#item)),
        | Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand(mut item: ItemFn) -> syn::Result<ItemFn> {
    if let Some(token) = &item.sig.asyncness {
        Err(syn::Error::new_spanned(token, "`#[tailrec]` does not support async functions"))?
    }
    let out: Type = match &item.sig.output {
        | ReturnType::Default => parse_quote!(()),
        | ReturnType::Type(_, ty) => (**ty).clone(),
    };
    let mut pats = Vec::new();
    let mut tys = Vec::new();
    let mut names = Vec::new();
    for input in item.sig.inputs.iter_mut() {
        match input {
            | FnArg::Receiver(recv) => Err(syn::Error::new_spanned(
                recv,
                "`#[tailrec]` does not support methods taking `self`",
            ))?,
            | FnArg::Typed(PatType { pat, ty, .. }) => match &mut **pat {
                | Pat::Ident(param @ PatIdent { by_ref: None, subpat: None, .. }) => {
                    pats.push(param.clone());
                    tys.push((**ty).clone());
                    names.push(param.ident.clone());
                    // the outer function only forwards its parameters
                    param.mutability = None;
                }
                | pat => Err(syn::Error::new_spanned(
                    pat,
                    "`#[tailrec]` parameters must be plain identifiers",
                ))?,
            },
        }
    }
    let body = &item.block;
    let block: Block = parse_quote!({
        ::tailrec::tailrec(
            |(#(#pats,)*): (#(#tys,)*)| -> ::tailrec::Step<(#(#tys,)*), #out> #body
        )((#(#names,)*))
    });
    item.block = Box::new(block);
    Ok(item)
}
