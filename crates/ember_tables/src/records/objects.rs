//! `objects`: static object definitions.

use serde::{Deserialize, Serialize};

use crate::record::Record;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Objects {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Animation token.
    pub token: String,
    /// Whether the object has a visual representation.
    pub draw: bool,
    /// Interaction range; zero disables interaction.
    pub operate_range: i32,
    /// Per-part selectability.
    pub selectable: Vec<bool>,
    pub size_x: i32,
    pub size_y: i32,
}

impl Objects {
    /// An object can be interacted with when it has a positive operate range
    /// and at least one selectable part.
    #[must_use]
    pub fn is_interactable(&self) -> bool {
        self.operate_range > 0 && self.selectable.contains(&true)
    }
}

impl Record for Objects {
    const TABLE: &'static str = "objects";

    fn index(&self) -> Option<i32> {
        Some(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interactable_needs_range_and_selectable_part() {
        let mut chest = Objects {
            operate_range: 2,
            selectable: vec![false, true],
            ..Objects::default()
        };
        assert!(chest.is_interactable());

        chest.operate_range = 0;
        assert!(!chest.is_interactable());

        chest.operate_range = 2;
        chest.selectable = vec![false; 8];
        assert!(!chest.is_interactable());
    }
}
