use salon_agg_shared_kernel::{Amount, DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Inclusive bounds on a row's `Total`. `None` leaves that side open.
///
/// The default range is `[0, ∞)`. A missing total never falls inside a range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TotalRange {
    pub min: Option<Amount>,
    pub max: Option<Amount>,
}

impl TotalRange {
    pub fn new(min: Option<Amount>, max: Option<Amount>) -> DomainResult<Self> {
        if let (Some(lo), Some(hi)) = (min, max) {
            if lo > hi {
                return Err(DomainError::InvalidRange { min: lo.to_string(), max: hi.to_string() });
            }
        }
        Ok(Self { min, max })
    }

    pub const fn unbounded() -> Self {
        Self { min: None, max: None }
    }

    #[inline]
    pub fn contains(&self, total: Option<Amount>) -> bool {
        total.is_some_and(|v| self.min.is_none_or(|m| v >= m) && self.max.is_none_or(|m| v <= m))
    }
}

impl Default for TotalRange {
    fn default() -> Self {
        Self { min: Some(Amount::zero()), max: None }
    }
}
