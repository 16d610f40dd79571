//! `monstats2`: visual and size data, linked from `monstats.MonStatsEx`.

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Composite component slots (HD, TR, LG, RA, LA, RH, LH, SH, S1..S8).
pub const COMPONENT_SLOTS: usize = 16;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MonStats2 {
    pub id: String,
    /// Base weapon class code.
    pub base_w: String,
    pub size_x: i32,
    pub size_y: i32,
    /// Per slot, a comma-delimited list of candidate component codes, possibly
    /// quoted. Empty means the slot keeps its default.
    pub component_v: Vec<String>,
}

impl MonStats2 {
    /// Candidate component codes for a slot, with quotes stripped.
    pub fn candidates(&self, slot: usize) -> impl Iterator<Item = &str> {
        self.component_v
            .get(slot)
            .map(String::as_str)
            .unwrap_or_default()
            .split(',')
            .map(|code| code.trim_matches(|c: char| c == '"' || c.is_whitespace()))
            .filter(|code| !code.is_empty())
    }
}

impl Record for MonStats2 {
    const TABLE: &'static str = "monstats2";

    fn key(&self) -> Option<&str> {
        Some(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_strip_quotes() {
        let row = MonStats2 {
            component_v: vec![r#""hvy,lit""#.to_string(), "med".to_string(), String::new()],
            ..MonStats2::default()
        };
        assert_eq!(row.candidates(0).collect::<Vec<_>>(), vec!["hvy", "lit"]);
        assert_eq!(row.candidates(1).collect::<Vec<_>>(), vec!["med"]);
        assert_eq!(row.candidates(2).count(), 0);
        assert_eq!(row.candidates(COMPONENT_SLOTS).count(), 0);
    }
}
