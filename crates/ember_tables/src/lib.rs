//! # ember_tables
//!
//! Static game-design tables, loaded once at startup and immutable afterwards.
//!
//! - [`Table`]: records by numeric id, optionally by string key.
//! - [`BinnedTable`]: a [`Table`] that also bins rows by a small categorical
//!   key (the act) for O(1) `(category, local index)` lookup.
//! - [`records`]: the row schemas (monsters, objects, levels, warps, missiles).
//! - [`Tables`]: every table the composer joins across, built in one pass
//!   and shared read-only behind an `Arc`.

pub mod binned;
pub mod error;
pub mod record;
pub mod records;
pub mod table;
pub mod tables;

pub use binned::{BinLayout, BinnedTable, BinnedTableBuilder, UNUSED};
pub use error::TableError;
pub use record::{BinnedRecord, Record};
pub use table::{Table, TableBuilder};
pub use tables::{TableRows, Tables};
