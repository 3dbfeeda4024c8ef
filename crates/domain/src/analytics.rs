pub mod sort;

pub use sort::{GroupSortKey, SortOrder, SortSpec, SortStrategy};
