//! Enumeration types for the Weary harness.

use serde::{Deserialize, Serialize};

/// How strenuous an activity is.
///
/// Levels are ordered from least to most strenuous, so comparisons such as
/// `level >= ActivityLevel::Light` read naturally.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Resting, reading, waiting.
    #[default]
    None,
    /// Light chores, walking.
    Light,
    /// Sustained moderate work such as crafting.
    Moderate,
    /// Brisk work such as chopping wood.
    Brisk,
    /// Hard labour such as digging.
    Active,
    /// Maximal effort such as a hard workout.
    Extra,
}

impl ActivityLevel {
    /// All levels, least strenuous first.
    pub const ALL: [Self; 6] = [
        Self::None,
        Self::Light,
        Self::Moderate,
        Self::Brisk,
        Self::Active,
        Self::Extra,
    ];

    /// Exertion points one minute at this level contributes.
    pub const fn points(self) -> u32 {
        match self {
            Self::None => 1,
            Self::Light => 2,
            Self::Moderate => 4,
            Self::Brisk => 6,
            Self::Active => 8,
            Self::Extra => 10,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered_by_effort() {
        for pair in ActivityLevel::ALL.windows(2) {
            if let [lower, higher] = pair {
                assert!(lower < higher);
                assert!(lower.points() < higher.points());
            }
        }
    }

    #[test]
    fn parses_snake_case() {
        let level: ActivityLevel = serde_json::from_str("\"extra\"").unwrap();
        assert_eq!(level, ActivityLevel::Extra);
    }
}
