// Presentation ordering of grouped results.
use std::{cmp::Ordering, str::FromStr};

use salon_agg_shared_kernel::DomainError;

use crate::grouping::{GroupAggregate, GroupKey, GroupedSummary};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl From<bool> for SortOrder {
    #[inline]
    fn from(desc: bool) -> Self {
        if desc { Self::Descending } else { Self::Ascending }
    }
}

/// Attributes a group can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupSortKey {
    /// Transaction count.
    Count,
    /// Payment sum.
    Total,
    /// Group key, component-wise.
    Key,
}

impl GroupSortKey {
    #[inline]
    pub fn compare(self, a: (&GroupKey, &GroupAggregate), b: (&GroupKey, &GroupAggregate)) -> Ordering {
        match self {
            Self::Count => a.1.transactions.cmp(&b.1.transactions),
            Self::Total => a.1.total_payment.value().total_cmp(&b.1.total_payment.value()),
            Self::Key => a.0.cmp(b.0),
        }
    }
}

impl FromStr for GroupSortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "count" | "transactions" => Ok(Self::Count),
            "total" | "sum" | "payment" => Ok(Self::Total),
            "key" | "group" => Ok(Self::Key),
            other => Err(DomainError::InvalidSortSpec { spec: format!("unknown sort key '{other}'") }),
        }
    }
}

/// One `key[:asc|desc]` sort term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    key: GroupSortKey,
    order: SortOrder,
}

impl SortSpec {
    pub fn new(key: GroupSortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    pub fn ascending(key: GroupSortKey) -> Self {
        Self::new(key, SortOrder::Ascending)
    }

    pub fn descending(key: GroupSortKey) -> Self {
        Self::new(key, SortOrder::Descending)
    }

    pub fn key(&self) -> GroupSortKey {
        self.key
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }
}

impl FromStr for SortSpec {
    type Err = DomainError;

    fn from_str(part: &str) -> Result<Self, Self::Err> {
        let (key_str, order) = match part.split_once(':') {
            None => (part, SortOrder::Ascending),
            Some((k, d)) => match d.trim().to_ascii_lowercase().as_str() {
                "desc" => (k, SortOrder::Descending),
                "asc" => (k, SortOrder::Ascending),
                other => {
                    return Err(DomainError::InvalidSortSpec { spec: format!("unknown direction '{other}'") });
                }
            },
        };
        Ok(Self::new(key_str.parse()?, order))
    }
}

/// Multi-key, stable ordering of groups.
///
/// An empty strategy keeps the engine's first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortStrategy {
    specs: Vec<SortSpec>,
}

impl SortStrategy {
    pub fn new(specs: Vec<SortSpec>) -> Self {
        Self { specs }
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn specs(&self) -> &[SortSpec] {
        &self.specs
    }

    /// Borrowed view of `summary`'s groups, ordered and truncated to `limit`.
    pub fn ordered<'a>(
        &self,
        summary: &'a GroupedSummary,
        limit: Option<usize>,
    ) -> Vec<(&'a GroupKey, &'a GroupAggregate)> {
        let mut groups: Vec<_> = summary.iter().collect();
        if !self.specs.is_empty() {
            groups.sort_by(|a, b| self.compare(*a, *b));
        }
        if let Some(n) = limit {
            groups.truncate(n);
        }
        groups
    }

    fn compare(&self, a: (&GroupKey, &GroupAggregate), b: (&GroupKey, &GroupAggregate)) -> Ordering {
        for spec in &self.specs {
            let cmp = spec.key.compare(a, b);
            if cmp != Ordering::Equal {
                return spec.order.apply(cmp);
            }
        }
        Ordering::Equal
    }
}

/// Parses `count:desc,key` style lists.
impl FromStr for SortStrategy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let specs = s
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(SortSpec::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(specs))
    }
}
