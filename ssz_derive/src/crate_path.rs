use std::borrow::Cow;

use proc_macro2::Span;
use proc_macro_crate::FoundCrate;
use syn::{parse_quote, Error, Ident, Path};

// Resolves the path to a crate even if the dependent crate renamed it in `Cargo.toml`.
pub fn crate_path(original_name: &str) -> Result<Path, Error> {
    let call_site = Span::call_site();

    let name = match proc_macro_crate::crate_name(original_name)
        .map_err(|error| Error::new(call_site, error))?
    {
        FoundCrate::Itself => Cow::Borrowed(original_name),
        FoundCrate::Name(renamed) => Cow::Owned(renamed),
    };

    let ident = Ident::new(&name, call_site);

    Ok(parse_quote! { ::#ident })
}
