use derive_more::{Add, AddAssign, Display, FromStr, Sub, SubAssign, Sum};
use serde::{Deserialize, Serialize};

pub use rust_decimal::Decimal;

/// Calendar date wire value.
pub type Date = time::Date;

/// Instant wire value.
pub type Timestamp = time::OffsetDateTime;

/// Text wire value.
pub type Text = String;

///
/// Money
///
/// Monetary wire value over an exact decimal amount. Currency handling is
/// the host's concern; wrappers only copy the amount through.
///

#[repr(transparent)]
#[derive(
    Add,
    AddAssign,
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    FromStr,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    Sub,
    SubAssign,
    Sum,
)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Amount in minor units at two decimal places (cents).
    #[must_use]
    pub fn from_minor(minor: i64) -> Self {
        Self(Decimal::new(minor, 2))
    }

    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    #[must_use]
    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

///
/// TESTS
///
