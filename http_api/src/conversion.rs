//! Conversion between the JSON wire representation of consensus containers and their SSZ types.
//!
//! Every JSON leaf is a string. Integers are decimal and byte strings are `0x`-prefixed hex.
//! Conversion errors record the path of the field that failed.

use core::fmt::{Display, Formatter, Result as FmtResult};

use anyhow::{anyhow, bail, ensure, Error as AnyhowError, Result};
use bls::{PublicKeyBytes, SignatureBytes};
use easy_ext::ext;
use primitive_types::H384;
use serde::{de::DeserializeOwned, Serialize};
use ssz::{BitList, BitVector, ByteList, ByteVector, ContiguousList, ContiguousVector, Uint256};
use thiserror::Error;
use typenum::Unsigned;
use types::phase0::primitives::{H160, H256};

use crate::uint256;

/// A type with a JSON wire representation.
pub trait Wire: Sized {
    type Json: Serialize + DeserializeOwned + Validate;

    fn from_json(json: Self::Json) -> Result<Self, FieldError>;

    fn to_json(&self) -> Self::Json;
}

/// Checks that a decoded wire value has every required field filled in.
///
/// `serde` already rejects missing and unknown fields. This rejects empty strings.
pub trait Validate {
    fn validate(&self) -> Result<(), FieldError>;
}

#[derive(Debug, Error)]
#[error("{path}")]
pub struct FieldError {
    path: FieldPath,
    source: AnyhowError,
}

impl From<AnyhowError> for FieldError {
    fn from(source: AnyhowError) -> Self {
        Self {
            path: FieldPath::default(),
            source,
        }
    }
}

impl FieldError {
    #[must_use]
    pub fn path(&self) -> String {
        self.path.to_string()
    }

    fn within(mut self, segment: PathSegment) -> Self {
        self.path.0.push(segment);
        self
    }
}

#[ext(FieldResultExt)]
pub impl<T> Result<T, FieldError> {
    fn at(self, field: &'static str) -> Self {
        self.map_err(|error| error.within(PathSegment::Field(field)))
    }

    fn at_index(self, index: usize) -> Self {
        self.map_err(|error| error.within(PathSegment::Index(index)))
    }
}

// Segments are stored innermost first because they are added while the error propagates outward.
#[derive(Default, Debug)]
struct FieldPath(Vec<PathSegment>);

impl Display for FieldPath {
    fn fmt(&self, formatter: &mut Formatter) -> FmtResult {
        if self.0.is_empty() {
            return formatter.write_str("value");
        }

        for (position, segment) in self.0.iter().rev().enumerate() {
            match segment {
                PathSegment::Field(name) if position == 0 => formatter.write_str(name)?,
                PathSegment::Field(name) => write!(formatter, ".{name}")?,
                PathSegment::Index(index) => write!(formatter, "[{index}]")?,
            }
        }

        Ok(())
    }
}

#[derive(Clone, Copy, Debug)]
enum PathSegment {
    Field(&'static str),
    Index(usize),
}

impl Validate for String {
    fn validate(&self) -> Result<(), FieldError> {
        if self.is_empty() {
            return Err(anyhow!("required field is empty").into());
        }

        Ok(())
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), FieldError> {
        self.iter()
            .enumerate()
            .try_for_each(|(index, element)| element.validate().at_index(index))
    }
}

impl Wire for u64 {
    type Json = String;

    fn from_json(json: String) -> Result<Self, FieldError> {
        Ok(decode_decimal(&json)?)
    }

    fn to_json(&self) -> String {
        self.to_string()
    }
}

impl Wire for Uint256 {
    type Json = String;

    fn from_json(json: String) -> Result<Self, FieldError> {
        let bytes = uint256::decimal_to_le_bytes(&json)?;
        Ok(Self::from_le_bytes(bytes))
    }

    fn to_json(&self) -> String {
        uint256::le_bytes_to_decimal(&self.to_le_bytes())
    }
}

macro_rules! impl_wire_for_fixed_bytes {
    ($($type:ty),* $(,)?) => {
        $(
            impl Wire for $type {
                type Json = String;

                fn from_json(json: String) -> Result<Self, FieldError> {
                    Ok(Self(decode_fixed_hex(&json)?))
                }

                fn to_json(&self) -> String {
                    encode_hex(self.as_bytes())
                }
            }
        )*
    };
}

impl_wire_for_fixed_bytes!(H160, H256, H384, PublicKeyBytes, SignatureBytes);

impl<N: Unsigned> Wire for ByteList<N> {
    type Json = String;

    fn from_json(json: String) -> Result<Self, FieldError> {
        let bytes = decode_hex(&json)?;
        Self::try_from(bytes).map_err(|error| AnyhowError::new(error).into())
    }

    fn to_json(&self) -> String {
        encode_hex(self.as_bytes())
    }
}

impl<N: Unsigned> Wire for ByteVector<N> {
    type Json = String;

    fn from_json(json: String) -> Result<Self, FieldError> {
        let bytes = decode_hex(&json)?;
        let expected = N::USIZE;
        let actual = bytes.len();

        if actual != expected {
            return Err(anyhow!("expected {expected} bytes, found {actual} bytes").into());
        }

        Self::try_from(bytes.as_slice()).map_err(|error| AnyhowError::new(error).into())
    }

    fn to_json(&self) -> String {
        encode_hex(self.as_bytes())
    }
}

impl<N: Unsigned> Wire for BitList<N> {
    type Json = String;

    fn from_json(json: String) -> Result<Self, FieldError> {
        let bytes = decode_hex(&json)?;
        Self::try_from(bytes).map_err(|error| AnyhowError::new(error).into())
    }

    fn to_json(&self) -> String {
        encode_hex(self.to_bytes_with_delimiting_bit())
    }
}

impl<N: Unsigned> Wire for BitVector<N> {
    type Json = String;

    fn from_json(json: String) -> Result<Self, FieldError> {
        let bytes = decode_hex(&json)?;
        Self::try_from(bytes.as_slice()).map_err(|error| AnyhowError::new(error).into())
    }

    fn to_json(&self) -> String {
        encode_hex(self.as_bytes())
    }
}

impl<T: Wire, N: Unsigned> Wire for ContiguousList<T, N> {
    type Json = Vec<T::Json>;

    fn from_json(json: Self::Json) -> Result<Self, FieldError> {
        let maximum = N::USIZE;
        let actual = json.len();

        // Checking the length first avoids converting the elements of an oversized list.
        if actual > maximum {
            return Err(anyhow!(
                "expected list to have no more than {maximum} elements, found {actual} elements",
            )
            .into());
        }

        let elements = from_json_elements(json)?;

        Self::try_from(elements).map_err(|error| AnyhowError::new(error).into())
    }

    fn to_json(&self) -> Self::Json {
        self.iter().map(T::to_json).collect()
    }
}

impl<T: Wire, N: Unsigned> Wire for ContiguousVector<T, N> {
    type Json = Vec<T::Json>;

    fn from_json(json: Self::Json) -> Result<Self, FieldError> {
        let elements = from_json_elements(json)?;
        Self::try_from(elements).map_err(|error| AnyhowError::new(error).into())
    }

    fn to_json(&self) -> Self::Json {
        self.iter().map(T::to_json).collect()
    }
}

/// Generates the JSON wire struct of an SSZ container along with conversions in both directions.
///
/// The field list must match the fields of the container. The compiler checks this because the
/// conversions construct and destructure both structs.
macro_rules! wire_container {
    (
        $(#[$attribute:meta])*
        pub struct $wire:ident for $internal:ty {
            $($field:ident: $field_type:ty),* $(,)?
        }
    ) => {
        $(#[$attribute])*
        #[derive(Debug, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct $wire {
            $(pub $field: <$field_type as $crate::conversion::Wire>::Json,)*
        }

        impl $crate::conversion::Validate for $wire {
            fn validate(&self) -> ::core::result::Result<(), $crate::conversion::FieldError> {
                use $crate::conversion::FieldResultExt as _;

                $($crate::conversion::Validate::validate(&self.$field).at(stringify!($field))?;)*

                Ok(())
            }
        }

        impl TryFrom<$wire> for $internal {
            type Error = $crate::conversion::FieldError;

            fn try_from(json: $wire) -> ::core::result::Result<Self, Self::Error> {
                use $crate::conversion::FieldResultExt as _;

                Ok(Self {
                    $(
                        $field: <$field_type as $crate::conversion::Wire>::from_json(json.$field)
                            .at(stringify!($field))?,
                    )*
                })
            }
        }

        impl From<&$internal> for $wire {
            fn from(internal: &$internal) -> Self {
                Self {
                    $($field: $crate::conversion::Wire::to_json(&internal.$field),)*
                }
            }
        }

        impl $crate::conversion::Wire for $internal {
            type Json = $wire;

            fn from_json(
                json: Self::Json,
            ) -> ::core::result::Result<Self, $crate::conversion::FieldError> {
                json.try_into()
            }

            fn to_json(&self) -> Self::Json {
                self.into()
            }
        }
    };
}

pub(crate) use wire_container;

fn from_json_elements<T: Wire>(json: Vec<T::Json>) -> Result<Vec<T>, FieldError> {
    json.into_iter()
        .enumerate()
        .map(|(index, element)| T::from_json(element).at_index(index))
        .collect()
}

pub(crate) fn decode_decimal(string: &str) -> Result<u64> {
    ensure!(
        !string.is_empty() && string.bytes().all(|byte| byte.is_ascii_digit()),
        "expected unsigned decimal integer, found {string:?}",
    );

    string
        .parse()
        .map_err(|_| anyhow!("decimal integer {string} does not fit in 64 bits"))
}

pub(crate) fn decode_hex(string: &str) -> Result<Vec<u8>> {
    let Some(digits) = string.strip_prefix("0x") else {
        bail!("hex string is missing 0x prefix");
    };

    if let Some(invalid) = digits.chars().find(|character| !character.is_ascii_hexdigit()) {
        bail!("invalid character {invalid:?} in hex string");
    }

    Ok(const_hex::decode(digits)?)
}

pub(crate) fn decode_fixed_hex<const N: usize>(string: &str) -> Result<[u8; N]> {
    let bytes = decode_hex(string)?;
    let actual = bytes.len();

    bytes
        .try_into()
        .map_err(|_| anyhow!("expected {N} bytes, found {actual} bytes"))
}

fn encode_hex(bytes: impl AsRef<[u8]>) -> String {
    const_hex::encode_prefixed(bytes)
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;
    use serde_json::json;
    use test_case::test_case;
    use typenum::{U2, U4, U8};

    use super::*;

    wire_container! {
        pub struct Inner for InnerContainer {
            value: u64,
            bytes: ByteList<U4>,
        }
    }

    wire_container! {
        pub struct Outer for OuterContainer {
            root: H256,
            inners: ContiguousList<InnerContainer, U2>,
        }
    }

    #[derive(PartialEq, Eq, Debug)]
    pub struct InnerContainer {
        value: u64,
        bytes: ByteList<U4>,
    }

    #[derive(PartialEq, Eq, Debug)]
    pub struct OuterContainer {
        root: H256,
        inners: ContiguousList<InnerContainer, U2>,
    }

    fn convert(json: serde_json::Value) -> Result<OuterContainer, FieldError> {
        let json = serde_json::from_value::<Outer>(json).map_err(AnyhowError::new)?;
        json.validate()?;
        OuterContainer::from_json(json)
    }

    #[test_case("0" => Some(0))]
    #[test_case("18446744073709551615" => Some(u64::MAX))]
    #[test_case("18446744073709551616" => None)]
    #[test_case("+1" => None)]
    #[test_case("-1" => None)]
    #[test_case("0x1" => None)]
    #[test_case("" => None)]
    fn decimal_must_fit_in_u64(string: &str) -> Option<u64> {
        u64::from_json(string.to_owned()).ok()
    }

    #[test_case("0x" => Some(vec![]))]
    #[test_case("0x0aff" => Some(vec![0x0a, 0xff]))]
    #[test_case("0x0AFF" => Some(vec![0x0a, 0xff]))]
    #[test_case("0aff" => None; "missing prefix")]
    #[test_case("0x0x0aff" => None; "double prefix")]
    #[test_case("0xabc" => None; "odd length")]
    #[test_case("0x0g" => None; "invalid digit")]
    fn hex_must_be_prefixed(string: &str) -> Option<Vec<u8>> {
        decode_hex(string).ok()
    }

    #[test]
    fn fixed_size_bytes_must_have_exact_length() {
        assert!(H160::from_json(encode_hex([1; 20])).is_ok());
        assert!(H160::from_json(encode_hex([1; 19])).is_err());
        assert!(H160::from_json(encode_hex([1; 21])).is_err());
        assert!(SignatureBytes::from_json(encode_hex([0; 95])).is_err());
    }

    #[test]
    fn byte_list_rejects_too_many_bytes() {
        assert!(ByteList::<U4>::from_json("0x01020304".to_owned()).is_ok());
        assert!(ByteList::<U4>::from_json("0x0102030405".to_owned()).is_err());
    }

    #[test]
    fn bit_list_json_includes_delimiting_bit() -> Result<(), FieldError> {
        let bits = BitList::<U8>::from_json("0x0d".to_owned())?;

        assert_eq!(bits.len(), 3);
        assert_eq!(bits.to_json(), "0x0d");
        assert!(BitList::<U8>::from_json("0x00".to_owned()).is_err());

        Ok(())
    }

    #[test]
    fn bit_vector_json_has_exact_length() -> Result<(), FieldError> {
        let bits = BitVector::<U8>::from_json("0x81".to_owned())?;

        assert_eq!(bits.get(0), Some(true));
        assert_eq!(bits.get(7), Some(true));
        assert_eq!(bits.to_json(), "0x81");
        assert!(BitVector::<U8>::from_json("0x8100".to_owned()).is_err());

        Ok(())
    }

    #[test]
    fn container_converts_in_both_directions() -> Result<(), FieldError> {
        let json = json!({
            "root": "0x0101010101010101010101010101010101010101010101010101010101010101",
            "inners": [
                { "value": "7", "bytes": "0x" },
                { "value": "18446744073709551615", "bytes": "0xdeadbeef" },
            ],
        });

        let container = convert(json.clone())?;

        assert_eq!(container.root, H256::repeat_byte(1));
        assert_eq!(container.inners[1].value, u64::MAX);
        assert_eq!(container.inners[1].bytes.as_bytes(), hex!("deadbeef"));

        assert_eq!(
            serde_json::to_value(container.to_json()).map_err(AnyhowError::new)?,
            json,
        );

        Ok(())
    }

    #[test_case(
        json!({
            "root": "0x01",
            "inners": [],
        })
        => "root: expected 32 bytes, found 1 bytes";
        "fixed bytes"
    )]
    #[test_case(
        json!({
            "root": "0x0101010101010101010101010101010101010101010101010101010101010101",
            "inners": [
                { "value": "1", "bytes": "0x" },
                { "value": "x", "bytes": "0x" },
            ],
        })
        => r#"inners[1].value: expected unsigned decimal integer, found "x""#;
        "nested decimal"
    )]
    #[test_case(
        json!({
            "root": "0x0101010101010101010101010101010101010101010101010101010101010101",
            "inners": [
                { "value": "1", "bytes": "0x" },
                { "value": "2", "bytes": "0x" },
                { "value": "3", "bytes": "0x" },
            ],
        })
        => "inners: expected list to have no more than 2 elements, found 3 elements";
        "list too long"
    )]
    #[test_case(
        json!({
            "root": "0x0101010101010101010101010101010101010101010101010101010101010101",
            "inners": [{ "value": "", "bytes": "0x" }],
        })
        => "inners[0].value: required field is empty";
        "empty string"
    )]
    fn conversion_errors_name_field_path(json: serde_json::Value) -> String {
        let error = convert(json).expect_err("conversion should fail");
        format!("{error}: {}", error.source)
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let json = json!({
            "value": "1",
            "bytes": "0x",
            "extra": "0x",
        });

        assert!(serde_json::from_value::<Inner>(json).is_err());
    }
}
