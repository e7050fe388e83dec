use darling::FromField;
use quote::format_ident;
use syn::{parse_quote, Expr, Ident, Path, Type};

#[derive(FromField)]
#[darling(attributes(ssz))]
pub struct SszField {
    pub ident: Option<Ident>,
    pub ty: Type,
}

impl SszField {
    pub fn size_expr(&self, ssz: &Path) -> Expr {
        let ty = &self.ty;
        parse_quote! { <#ty as #ssz::SszSize>::SIZE }
    }

    pub fn offset_ident(ident: &Ident) -> Ident {
        format_ident!("offset_of_{ident}")
    }

    pub fn value_ident(ident: &Ident) -> Ident {
        format_ident!("value_of_{ident}")
    }
}
