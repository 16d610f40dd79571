//! Binned tables.
//!
//! A binned table is a [`Table`] that additionally keeps, per category, an
//! ordered array of global ids. Rows land in their category's bin in table
//! order, so `(category, local index)` resolves to a record with two array
//! reads and no hashing on the bin side.
//!
//! Bins have a fixed capacity. Once every row is in, [`BinnedTableBuilder::finalize`]
//! pads each bin up to capacity with [`UNUSED`]:
//!
//! ```text
//! category 1: [ 0, 1, 2, -1, -1, ... ]   size(1) == 3
//! category 2: [ -1, -1, -1, ... ]        size(2) == 0
//! ```

use std::sync::Arc;

use crate::error::TableError;
use crate::record::BinnedRecord;
use crate::table::{Table, TableBuilder};

/// Bin entry marking "no row at this local index".
pub const UNUSED: i32 = -1;

/// Number of categories and rows per category of a binned table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinLayout {
    /// Categories are numbered `1..=categories`.
    pub categories: usize,
    /// Maximum rows per category.
    pub capacity: usize,
}

impl BinLayout {
    #[must_use]
    pub const fn new(categories: usize, capacity: usize) -> Self {
        Self {
            categories,
            capacity,
        }
    }
}

/// A [`Table`] with O(1) `(category, local index)` lookup.
#[derive(Debug)]
pub struct BinnedTable<R> {
    table: Table<R>,
    layout: BinLayout,
    /// `bins[category][local]` → global id or [`UNUSED`]. Index 0 is never filled.
    bins: Vec<Vec<i32>>,
    /// Real (non-sentinel) entries per category.
    sizes: Vec<usize>,
}

impl<R: BinnedRecord> BinnedTable<R> {
    /// Load every row and finalize in one pass.
    ///
    /// # Errors
    ///
    /// See [`BinnedTableBuilder::insert`].
    pub fn load(layout: BinLayout, rows: impl IntoIterator<Item = R>) -> Result<Self, TableError> {
        let mut builder = BinnedTableBuilder::new(layout);
        for row in rows {
            builder.insert(row)?;
        }
        Ok(builder.finalize())
    }

    /// Look up a record by global id.
    #[must_use]
    pub fn get(&self, id: i32) -> Option<&Arc<R>> {
        self.table.get(id)
    }

    /// Look up a record by `(category, local index)`.
    ///
    /// Returns `None` for local indices at or beyond [`size`](Self::size) and
    /// for categories outside the layout.
    #[must_use]
    pub fn get_in(&self, category: usize, local: usize) -> Option<&Arc<R>> {
        self.global_id(category, local).and_then(|id| self.table.get(id))
    }

    /// Resolve `(category, local index)` to the row's global id.
    #[must_use]
    pub fn global_id(&self, category: usize, local: usize) -> Option<i32> {
        let id = *self.bins.get(category)?.get(local)?;
        (id != UNUSED).then_some(id)
    }

    /// Number of rows loaded under `category`.
    #[must_use]
    pub fn size(&self, category: usize) -> usize {
        self.sizes.get(category).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn layout(&self) -> BinLayout {
        self.layout
    }

    /// The underlying id-indexed table.
    #[must_use]
    pub fn table(&self) -> &Table<R> {
        &self.table
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl<R: BinnedRecord> Default for BinnedTable<R> {
    fn default() -> Self {
        BinnedTableBuilder::new(BinLayout::new(0, 0)).finalize()
    }
}

/// Accumulates rows for a [`BinnedTable`].
#[derive(Debug)]
pub struct BinnedTableBuilder<R> {
    table: TableBuilder<R>,
    layout: BinLayout,
    bins: Vec<Vec<i32>>,
}

impl<R: BinnedRecord> BinnedTableBuilder<R> {
    #[must_use]
    pub fn new(layout: BinLayout) -> Self {
        Self {
            table: TableBuilder::new(),
            layout,
            bins: (0..=layout.categories)
                .map(|_| Vec::with_capacity(layout.capacity))
                .collect(),
        }
    }

    /// Add a row to the table and append its id to its category's bin.
    ///
    /// # Errors
    ///
    /// - [`TableError::CategoryOutOfRange`] if the row's category is 0 or
    ///   beyond the layout.
    /// - [`TableError::CapacityOverflow`] if the category's bin is full.
    /// - [`TableError::DuplicateId`] if the row's id is already taken.
    pub fn insert(&mut self, record: R) -> Result<i32, TableError> {
        let category = record.category();
        if category == 0 || category > self.layout.categories {
            return Err(TableError::CategoryOutOfRange {
                table: R::TABLE,
                category,
                max: self.layout.categories,
            });
        }
        if self.bins[category].len() >= self.layout.capacity {
            return Err(TableError::CapacityOverflow {
                table: R::TABLE,
                category,
                capacity: self.layout.capacity,
            });
        }

        let id = self.table.insert(record)?;
        self.bins[category].push(id);
        Ok(id)
    }

    /// Record each category's size and pad its bin to capacity with [`UNUSED`].
    #[must_use]
    pub fn finalize(mut self) -> BinnedTable<R> {
        let sizes = self.bins.iter().map(Vec::len).collect();
        for bin in self.bins.iter_mut().skip(1) {
            bin.resize(self.layout.capacity, UNUSED);
        }
        BinnedTable {
            table: self.table.build(),
            layout: self.layout,
            bins: self.bins,
            sizes,
        }
    }
}
