pub mod filter;

pub use filter::{filter_and_sort, FilterCriteria, MenuEntry, SortMode};
