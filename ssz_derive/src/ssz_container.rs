use darling::{ast::Data, FromDeriveInput};
use itertools::Itertools as _;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{parse_quote, Error, Expr, Generics, Ident, Path};

use crate::{crate_path, ssz_field::SszField};

#[derive(FromDeriveInput)]
#[darling(attributes(ssz), supports(struct_named))]
pub struct SszContainer {
    ident: Ident,
    generics: Generics,
    data: Data<(), SszField>,
    // This is needed to make deriving work inside the `ssz` crate itself.
    #[darling(default)]
    internal: bool,
}

impl SszContainer {
    pub fn impls(&self) -> Result<TokenStream, Error> {
        let ssz = self.ssz_path()?;
        let fields = self.fields()?;
        let ident = &self.ident;

        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        // `C` is intentionally unhygienic. Type parameters cannot have definition site hygiene.
        let mut read_generics = self.generics.clone();
        read_generics.params.insert(0, parse_quote! { C });
        let (read_impl_generics, _, _) = read_generics.split_for_impl();

        let size_exprs = fields
            .iter()
            .map(|(_, field)| field.size_expr(&ssz))
            .collect_vec();

        let from_ssz_body = Self::from_ssz_body(&ssz, &fields);
        let write_fixed_body = Self::write_fixed_body(&ssz, &fields);
        let write_variable_body = Self::write_variable_body(&ssz, &fields);

        Ok(quote! {
            impl #impl_generics #ssz::SszSize for #ident #ty_generics #where_clause {
                const SIZE: #ssz::Size = #ssz::Size::for_container([#(#size_exprs,)*]);
            }

            impl #read_impl_generics #ssz::SszRead<C> for #ident #ty_generics #where_clause {
                fn from_ssz_unchecked(
                    context: &C,
                    bytes: &[u8],
                ) -> ::core::result::Result<Self, #ssz::ReadError> {
                    #from_ssz_body
                }
            }

            impl #impl_generics #ssz::SszWrite for #ident #ty_generics #where_clause {
                fn write_fixed(&self, bytes: &mut [u8]) {
                    #write_fixed_body
                }

                fn write_variable(
                    &self,
                    bytes: &mut ::std::vec::Vec<u8>,
                ) -> ::core::result::Result<(), #ssz::WriteError> {
                    #write_variable_body
                }
            }
        })
    }

    fn from_ssz_body(ssz: &Path, fields: &[(&Ident, &SszField)]) -> TokenStream {
        let fixed_part_length = Self::fixed_part_length(ssz, fields);

        let offset_stmts = fields.iter().enumerate().map(|(index, (ident, field))| {
            let size_expr = field.size_expr(ssz);
            let start = Self::position_in_fixed_part(ssz, &fields[..index]);
            let offset_ident = SszField::offset_ident(ident);

            quote! {
                let #offset_ident = match #size_expr {
                    #ssz::Size::Fixed { .. } => #start,
                    #ssz::Size::Variable { .. } => {
                        let start = #start;
                        let end = start + #ssz::BYTES_PER_LENGTH_OFFSET;
                        #ssz::read_offset_unchecked(#ssz::subslice(bytes, start..end)?)?
                    }
                };
            }
        });

        // Fields are read in reverse so that each variable-size field ends
        // where the next one starts.
        let value_stmts = fields.iter().rev().map(|(ident, field)| {
            let size_expr = field.size_expr(ssz);
            let offset_ident = SszField::offset_ident(ident);
            let value_ident = SszField::value_ident(ident);

            quote! {
                let (end_of_variable_part, end) = match #size_expr {
                    #ssz::Size::Fixed { size } => (end_of_variable_part, #offset_ident + size),
                    #ssz::Size::Variable { .. } => (#offset_ident, end_of_variable_part),
                };

                let #value_ident = #ssz::SszRead::from_ssz_unchecked(
                    context,
                    #ssz::subslice(bytes, #offset_ident..end)?,
                )?;
            }
        });

        let members = fields.iter().map(|(ident, _)| {
            let value_ident = SszField::value_ident(ident);
            quote! { #ident: #value_ident, }
        });

        quote! {
            #(#offset_stmts)*

            let end_of_variable_part = bytes.len();

            #(#value_stmts)*

            // The first offset must point right past the fixed part.
            // For containers with no variable-size fields this rejects trailing bytes.
            let expected = #fixed_part_length;
            let actual = end_of_variable_part;

            if actual != expected {
                return ::core::result::Result::Err(
                    #ssz::ReadError::ContainerFirstOffsetMismatch { expected, actual },
                );
            }

            ::core::result::Result::Ok(Self { #(#members)* })
        }
    }

    fn write_fixed_body(ssz: &Path, fields: &[(&Ident, &SszField)]) -> TokenStream {
        let stmts = fields.iter().enumerate().map(|(index, (ident, field))| {
            let size_expr = field.size_expr(ssz);
            let start = Self::position_in_fixed_part(ssz, &fields[..index]);

            quote! {
                let start = #start;
                let end = start + #size_expr.fixed_part();
                #ssz::SszWrite::write_fixed(&self.#ident, &mut bytes[start..end]);
            }
        });

        quote! { #(#stmts)* }
    }

    fn write_variable_body(ssz: &Path, fields: &[(&Ident, &SszField)]) -> TokenStream {
        let fixed_part_length = Self::fixed_part_length(ssz, fields);

        let fixed_stmts = fields.iter().enumerate().map(|(index, (ident, field))| {
            let size_expr = field.size_expr(ssz);
            let start = Self::position_in_fixed_part(ssz, &fields[..index]);

            quote! {
                if let #ssz::Size::Fixed { size } = #size_expr {
                    let start = length_before + #start;
                    #ssz::SszWrite::write_fixed(&self.#ident, &mut bytes[start..start + size]);
                }
            }
        });

        let variable_stmts = fields.iter().enumerate().map(|(index, (ident, field))| {
            let size_expr = field.size_expr(ssz);
            let start = Self::position_in_fixed_part(ssz, &fields[..index]);

            quote! {
                if let #ssz::Size::Variable { .. } = #size_expr {
                    let offset = bytes.len() - length_before;
                    #ssz::write_offset(bytes, length_before + #start, offset)?;
                    #ssz::SszWrite::write_variable(&self.#ident, bytes)?;
                }
            }
        });

        quote! {
            let length_before = bytes.len();

            bytes.resize(length_before + #fixed_part_length, 0);

            #(#fixed_stmts)*
            #(#variable_stmts)*

            ::core::result::Result::Ok(())
        }
    }

    fn position_in_fixed_part(ssz: &Path, preceding: &[(&Ident, &SszField)]) -> Expr {
        let size_exprs = preceding.iter().map(|(_, field)| field.size_expr(ssz));
        parse_quote! { (0 #(+ #size_exprs.fixed_part())*) }
    }

    fn fixed_part_length(ssz: &Path, fields: &[(&Ident, &SszField)]) -> Expr {
        Self::position_in_fixed_part(ssz, fields)
    }

    fn ssz_path(&self) -> Result<Path, Error> {
        if self.internal {
            Ok(parse_quote! { crate })
        } else {
            crate_path::crate_path("ssz")
        }
    }

    fn fields(&self) -> Result<Vec<(&Ident, &SszField)>, Error> {
        let fields = self
            .data
            .as_ref()
            .take_struct()
            .ok_or_else(|| Error::new(Span::call_site(), "SSZ unions are not implemented"))?;

        if fields.is_empty() {
            return Err(Error::new(
                Span::call_site(),
                "SSZ containers with no fields are illegal",
            ));
        }

        fields
            .into_iter()
            .map(|field| {
                let ident = field.ident.as_ref().ok_or_else(|| {
                    Error::new(Span::call_site(), "SSZ container fields must be named")
                })?;

                Ok((ident, field))
            })
            .collect()
    }
}
