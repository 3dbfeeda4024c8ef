// crates/shared-kernel/src/value_objects/amount.rs
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
};

use serde::{Deserialize, Serialize};

/// Monetary amount of a single appointment or an aggregate of many.
///
/// Amounts are kept in the currency's major unit as `f64`. Negative zero is
/// stored as `0.0`, so equality and ordering agree on every finite value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Amount(f64);

impl Amount {
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value + 0.0)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0.0)
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns `None` for NaN and infinities so that callers can treat them as
    /// non-numeric input.
    #[inline]
    pub fn finite(value: f64) -> Option<Self> {
        value.is_finite().then(|| Self::new(value))
    }
}

impl PartialOrd for Amount {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<i64> for Amount {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self(value as f64)
    }
}

impl From<i32> for Amount {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Amount> for f64 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}
