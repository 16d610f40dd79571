//! Indexed tables.
//!
//! A [`Table`] maps a numeric id to a shared, immutable record. Tables whose
//! rows carry a string key are also addressable by that key. Tables are built
//! once through a [`TableBuilder`] and never mutated afterwards.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use tracing::warn;

use crate::error::TableError;
use crate::record::Record;

/// Records indexed by numeric id and, optionally, by string key.
#[derive(Debug)]
pub struct Table<R> {
    /// Rows in load order.
    rows: Vec<(i32, Arc<R>)>,
    /// Id → position in `rows`.
    ids: HashMap<i32, usize>,
    /// Key → id.
    keys: HashMap<String, i32>,
}

impl<R: Record> Table<R> {
    /// Build a table from rows in one pass.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::DuplicateId`] if two rows share an id.
    pub fn load(rows: impl IntoIterator<Item = R>) -> Result<Self, TableError> {
        let mut builder = TableBuilder::new();
        for row in rows {
            builder.insert(row)?;
        }
        Ok(builder.build())
    }

    /// Look up a record by id.
    #[must_use]
    pub fn get(&self, id: i32) -> Option<&Arc<R>> {
        self.ids.get(&id).and_then(|&pos| self.rows.get(pos)).map(|(_, r)| r)
    }

    /// Look up a record by its string key.
    #[must_use]
    pub fn get_by_key(&self, key: &str) -> Option<&Arc<R>> {
        self.keys.get(key).and_then(|&id| self.get(id))
    }

    /// Returns the id registered for a string key.
    #[must_use]
    pub fn index_of(&self, key: &str) -> Option<i32> {
        self.keys.get(key).copied()
    }

    /// Iterate `(id, record)` pairs in load order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &Arc<R>)> {
        self.rows.iter().map(|(id, r)| (*id, r))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            ids: HashMap::new(),
            keys: HashMap::new(),
        }
    }
}

/// Accumulates rows for a [`Table`].
#[derive(Debug)]
pub struct TableBuilder<R> {
    table: Table<R>,
    next_row: i32,
}

impl<R: Record> TableBuilder<R> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: Table::default(),
            next_row: 0,
        }
    }

    /// Add a row and return the id it was stored under.
    ///
    /// A row keeps its declared [`Record::index`], otherwise it is numbered by
    /// position. When two rows share a string key the first one keeps it.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::DuplicateId`] if the id is already taken.
    pub fn insert(&mut self, record: R) -> Result<i32, TableError> {
        let row = self.next_row;
        let id = record.index().unwrap_or(row);
        if self.table.ids.contains_key(&id) {
            return Err(TableError::DuplicateId { table: R::TABLE, id });
        }
        self.next_row += 1;

        if let Some(key) = record.key().filter(|key| !key.is_empty()) {
            match self.table.keys.entry(key.to_owned()) {
                Entry::Vacant(slot) => {
                    slot.insert(id);
                }
                Entry::Occupied(slot) => {
                    warn!(table = R::TABLE, key, id, kept = *slot.get(), "duplicate key ignored");
                }
            }
        }

        self.table.ids.insert(id, self.table.rows.len());
        self.table.rows.push((id, Arc::new(record)));
        Ok(id)
    }

    /// Returns `true` if `id` is already taken.
    #[must_use]
    pub fn contains(&self, id: i32) -> bool {
        self.table.ids.contains_key(&id)
    }

    /// Freeze the table.
    #[must_use]
    pub fn build(self) -> Table<R> {
        self.table
    }
}

impl<R: Record> Default for TableBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Row {
        id: Option<i32>,
        name: &'static str,
    }

    impl Record for Row {
        const TABLE: &'static str = "rows";

        fn index(&self) -> Option<i32> {
            self.id
        }

        fn key(&self) -> Option<&str> {
            Some(self.name)
        }
    }

    #[test]
    fn test_rows_without_index_use_row_number() {
        let table = Table::load([
            Row { id: None, name: "a" },
            Row { id: None, name: "b" },
        ])
        .unwrap();
        assert_eq!(table.get(0).unwrap().name, "a");
        assert_eq!(table.get(1).unwrap().name, "b");
        assert!(table.get(2).is_none());
    }

    #[test]
    fn test_declared_index_wins() {
        let table = Table::load([
            Row { id: Some(40), name: "chest" },
            Row { id: Some(7), name: "barrel" },
        ])
        .unwrap();
        assert_eq!(table.get(40).unwrap().name, "chest");
        assert_eq!(table.get(7).unwrap().name, "barrel");
        assert!(table.get(0).is_none());
        let ids: Vec<i32> = table.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![40, 7]);
    }

    #[test]
    fn test_lookup_by_key() {
        let table = Table::load([
            Row { id: None, name: "NU" },
            Row { id: None, name: "WL" },
        ])
        .unwrap();
        assert_eq!(table.index_of("WL"), Some(1));
        assert_eq!(table.get_by_key("NU").unwrap().name, "NU");
        assert!(table.get_by_key("RN").is_none());
    }

    #[test]
    fn test_duplicate_id_is_fatal() {
        let result = Table::load([
            Row { id: Some(1), name: "a" },
            Row { id: Some(1), name: "b" },
        ]);
        assert!(matches!(
            result,
            Err(TableError::DuplicateId { table: "rows", id: 1 })
        ));
    }

    #[test]
    fn test_duplicate_key_keeps_first() {
        let table = Table::load([
            Row { id: None, name: "same" },
            Row { id: None, name: "same" },
        ])
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.index_of("same"), Some(0));
    }

    #[test]
    fn test_empty_key_not_indexed() {
        let table = Table::load([Row { id: None, name: "" }]).unwrap();
        assert!(table.index_of("").is_none());
        assert_eq!(table.len(), 1);
    }
}
