//! Behavior identifiers and parameters.

use std::fmt;
use std::str::FromStr;

use crate::error::BehaviorError;

/// The closed set of behaviors a monster can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BehaviorKind {
    /// Stands still.
    Idle,
    /// Shambles toward anything in sight and hits it.
    Zombie,
    /// Town NPC; talks to whoever interacts with it.
    Npc,
}

impl BehaviorKind {
    pub const ALL: [BehaviorKind; 3] = [Self::Idle, Self::Zombie, Self::Npc];

    /// The id used in table data.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Zombie => "Zombie",
            Self::Npc => "Npc",
        }
    }
}

impl FromStr for BehaviorKind {
    type Err = BehaviorError;

    /// Table ids are matched exactly; an empty id is rejected like any other
    /// unknown id.
    fn from_str(id: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == id)
            .ok_or_else(|| BehaviorError::UnknownBehavior(id.to_owned()))
    }
}

impl fmt::Display for BehaviorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The eight per-monster AI parameters.
///
/// What each slot means is up to the strategy reading it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AiParams(pub [i32; AiParams::SLOTS]);

impl AiParams {
    pub const SLOTS: usize = 8;

    /// The value in `slot`, or 0 past the last slot.
    #[must_use]
    pub fn get(&self, slot: usize) -> i32 {
        self.0.get(slot).copied().unwrap_or(0)
    }
}

impl From<[i32; AiParams::SLOTS]> for AiParams {
    fn from(slots: [i32; AiParams::SLOTS]) -> Self {
        Self(slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_kinds() {
        for kind in BehaviorKind::ALL {
            assert_eq!(kind.as_str().parse::<BehaviorKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_kind_is_error() {
        let err = "Vampire".parse::<BehaviorKind>().unwrap_err();
        assert!(matches!(err, BehaviorError::UnknownBehavior(ref id) if id == "Vampire"));
        assert!("".parse::<BehaviorKind>().is_err());
        assert!("zombie".parse::<BehaviorKind>().is_err());
    }

    #[test]
    fn test_params_past_last_slot_read_zero() {
        let params = AiParams::from([1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(params.get(7), 8);
        assert_eq!(params.get(8), 0);
    }
}
