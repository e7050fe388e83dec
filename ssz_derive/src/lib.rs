//! `#[derive(Ssz)]` for SSZ containers.
//!
//! Only structs with named fields are supported. Every block container in `types` is one.
//! Fields are encoded in declaration order. Variable-size fields are replaced by offsets in the
//! fixed part and appended to the variable part.

use darling::FromDeriveInput as _;
use proc_macro::TokenStream;
use syn::{parse_macro_input, Error};

use crate::ssz_container::SszContainer;

mod crate_path;
mod ssz_container;
mod ssz_field;

#[proc_macro_derive(Ssz, attributes(ssz))]
pub fn derive(input: TokenStream) -> TokenStream {
    match SszContainer::from_derive_input(&parse_macro_input!(input)) {
        Ok(container) => container.impls().unwrap_or_else(Error::into_compile_error),
        Err(error) => error.write_errors(),
    }
    .into()
}
