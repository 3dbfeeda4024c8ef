// src/cli/parsers.rs
use std::{fmt::Display, str::FromStr};

use salon_agg_domain::GroupField;
use salon_agg_shared_kernel::Amount;

/// Rupiah amount typed on the command line (`80000`, `80_000`, `80,000`,
/// `Rp80.000`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountArg(pub Amount);

impl FromStr for AmountArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("Rp")
            .or_else(|| trimmed.strip_prefix("rp"))
            .unwrap_or(trimmed)
            .trim();
        // Thousands separators: `_`, `,`, or `.` when it groups exactly three digits.
        let cleaned: String = if is_dot_grouped(digits) {
            digits.replace('.', "")
        } else {
            digits.replace(['_', ','], "")
        };
        let value: f64 = cleaned.parse().map_err(|_| format!("Invalid amount: {s}"))?;
        Amount::finite(value)
            .map(AmountArg)
            .ok_or_else(|| format!("Amount must be finite: {s}"))
    }
}

fn is_dot_grouped(s: &str) -> bool {
    let mut parts = s.split('.');
    let Some(head) = parts.next() else {
        return false;
    };
    let tail: Vec<_> = parts.collect();
    !tail.is_empty()
        && (1..=3).contains(&head.len())
        && head.bytes().all(|b| b.is_ascii_digit())
        && tail.iter().all(|p| p.len() == 3 && p.bytes().all(|b| b.is_ascii_digit()))
}

/// Comma-separated group-by fields, in selection order.
///
/// An empty string yields an empty list; the pipeline reports that as a
/// warning instead of grouping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupFieldList(pub Vec<GroupField>);

impl FromStr for GroupFieldList {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| p.parse::<GroupField>().map_err(|e| e.to_string()))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

fn parse_bounded_number<T>(s: &str, min: T) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s.parse::<T>().map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    Ok(value)
}

/// Parse a positive `usize` (>= 1) from CLI input.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1)
}
