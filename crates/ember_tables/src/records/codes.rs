//! Code tables: a string code per row, looked up by code to get the row index.

use serde::{Deserialize, Serialize};

use crate::record::Record;

macro_rules! code_table {
    ($(#[$meta:meta])* $name:ident, $table:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            #[serde(alias = "Code")]
            pub code: String,
        }

        impl $name {
            #[must_use]
            pub fn new(code: impl Into<String>) -> Self {
                Self { code: code.into() }
            }
        }

        impl Record for $name {
            const TABLE: &'static str = $table;

            fn key(&self) -> Option<&str> {
                Some(&self.code)
            }
        }
    };
}

code_table!(
    /// Monster animation modes (`NU`, `WL`, `RN`, ...).
    MonMode,
    "MonMode"
);

code_table!(
    /// Weapon classes (`HTH`, `1HS`, `BOW`, ...).
    WeaponClass,
    "WeaponClass"
);

code_table!(
    /// Composite component codes (`LIT`, `MED`, `HVY`, ...).
    CompCode,
    "CompCode"
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Table;

    #[test]
    fn test_code_resolves_to_row_index() {
        let modes = Table::load(["DT", "NU", "WL"].map(MonMode::new)).unwrap();
        assert_eq!(modes.index_of("NU"), Some(1));
        assert_eq!(modes.index_of("XX"), None);
    }

    #[test]
    fn test_accepts_capitalized_column() {
        let row: CompCode = serde_json::from_str(r#"{"Code": "HVY"}"#).unwrap();
        assert_eq!(row.code, "HVY");
    }
}
