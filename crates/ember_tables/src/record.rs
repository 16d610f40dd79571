//! Record traits.

/// One immutable row of a static table.
pub trait Record: std::fmt::Debug + Send + Sync + 'static {
    /// Table name used in diagnostics.
    const TABLE: &'static str;

    /// The row's declared numeric id. Rows without one are numbered by their
    /// position in the table.
    fn index(&self) -> Option<i32> {
        None
    }

    /// The row's string key, if the table is addressable by name.
    fn key(&self) -> Option<&str> {
        None
    }
}

/// A record that is also binned by a small categorical key.
pub trait BinnedRecord: Record {
    /// The bin this row belongs to, in `1..=categories`.
    fn category(&self) -> usize;
}
