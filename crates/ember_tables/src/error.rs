//! Table loading errors.
//!
//! Every variant is fatal to table loading: a table that fails to load
//! indicates a data/schema mismatch, not a runtime condition.

/// Errors raised while loading tables.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// A binned table received more rows for one category than it can hold.
    #[error("{table}: category {category} exceeds capacity of {capacity} rows")]
    CapacityOverflow {
        table: &'static str,
        category: usize,
        capacity: usize,
    },

    /// A binned row names a category outside `1..=categories`.
    #[error("{table}: category {category} outside 1..={max}")]
    CategoryOutOfRange {
        table: &'static str,
        category: usize,
        max: usize,
    },

    /// Two rows resolved to the same id.
    #[error("{table}: duplicate id {id}")]
    DuplicateId { table: &'static str, id: i32 },

    /// The row bundle could not be parsed.
    #[error("failed to parse table rows: {0}")]
    Parse(#[from] serde_json::Error),

    /// The row bundle could not be read.
    #[error("failed to read table rows: {0}")]
    Io(#[from] std::io::Error),
}
