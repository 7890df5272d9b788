use derive_more::{Display, FromStr};
use proc_macro2::TokenStream;
use quote::quote;
use serde::{Deserialize, Serialize};

///
/// Cardinality
///

#[derive(
    Clone, Copy, Default, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize,
)]
pub enum Cardinality {
    #[default]
    One,
    Opt,
    Many,
}

///
/// BasicType
///
/// The closed set of wire value types copied directly between a model and
/// its wrapper. Any declared type name outside this set is a nested model
/// type and gets its own wrapper.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize)]
#[remain::sorted]
pub enum BasicType {
    Bool,
    Char,
    Date,
    Decimal,
    Float32,
    Float64,
    Int8,
    Int16,
    Int32,
    Int64,
    Money,
    Text,
    Timestamp,
}

impl BasicType {
    /// Classify a declared type name. `None` means the type is a nested
    /// model type, not a basic value.
    #[must_use]
    pub fn classify(ty: &str) -> Option<Self> {
        ty.parse::<Self>().ok()
    }

    // Text is the only heap value; everything else copies bitwise.
    #[must_use]
    pub const fn supports_copy(self) -> bool {
        !matches!(self, Self::Text)
    }

    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Decimal
                | Self::Float32
                | Self::Float64
                | Self::Int8
                | Self::Int16
                | Self::Int32
                | Self::Int64
                | Self::Money
        )
    }

    /// The Rust type a generated unit references for this wire value.
    #[must_use]
    pub fn as_type(self) -> TokenStream {
        match self {
            Self::Bool => quote!(bool),
            Self::Char => quote!(char),
            Self::Date => quote!(::wirewrap::types::Date),
            Self::Decimal => quote!(::wirewrap::types::Decimal),
            Self::Float32 => quote!(f32),
            Self::Float64 => quote!(f64),
            Self::Int8 => quote!(i8),
            Self::Int16 => quote!(i16),
            Self::Int32 => quote!(i32),
            Self::Int64 => quote!(i64),
            Self::Money => quote!(::wirewrap::types::Money),
            Self::Text => quote!(::std::string::String),
            Self::Timestamp => quote!(::wirewrap::types::Timestamp),
        }
    }
}

///
/// TESTS
///
