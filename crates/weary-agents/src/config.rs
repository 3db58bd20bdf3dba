//! Configuration and defaults for the survivor's physiology.
//!
//! The [`SurvivorConfig`] struct bundles every tunable of the weariness and
//! digestion model so that scenario files and tests can override defaults.
//! It deserializes from the `survivor` key of a scenario file; any field
//! left out keeps its default.

use std::collections::BTreeMap;

use serde::Deserialize;
use weary_types::{ActivityId, ActivityLevel, ItemTypeId};

/// Configuration for the survivor's per-minute physiology.
///
/// Rates are whole `u32` values applied once per simulated minute.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SurvivorConfig {
    /// Exertion points that make up one weariness level (default: 300).
    #[serde(default = "default_level_threshold")]
    pub level_threshold: u32,

    /// Highest weariness level reported (default: 8).
    #[serde(default = "default_max_level")]
    pub max_level: u32,

    /// Exertion at or below which an awake survivor recovers instead of
    /// tiring (default: `none`).
    #[serde(default)]
    pub rest_ceiling: ActivityLevel,

    /// Tracker points recovered per minute while awake and resting (default: 1).
    #[serde(default = "default_rest_recovery")]
    pub rest_recovery: u32,

    /// Tracker points recovered per minute while asleep (default: 5).
    #[serde(default = "default_sleep_recovery")]
    pub sleep_recovery: u32,

    /// Exertion multiplier, in percent, applied when stomach and guts are
    /// both empty (default: 150).
    #[serde(default = "default_unfed_exertion_pct")]
    pub unfed_exertion_pct: u32,

    /// Calories moved per minute from stomach to guts, and absorbed per
    /// minute from the guts (default: 2).
    #[serde(default = "default_digestion_rate")]
    pub digestion_rate: u32,

    /// Maximum calories the stomach holds (default: 2500).
    #[serde(default = "default_stomach_capacity")]
    pub stomach_capacity: u32,

    /// Tracker value at or below which a sleeper wakes up (default: 0).
    #[serde(default)]
    pub wake_threshold: u32,

    /// Calories per portion for each known food item.
    #[serde(default = "default_foods")]
    pub foods: BTreeMap<ItemTypeId, u32>,

    /// Exertion level for each known named activity.
    #[serde(default = "default_activities")]
    pub activities: BTreeMap<ActivityId, ActivityLevel>,
}

impl Default for SurvivorConfig {
    fn default() -> Self {
        Self {
            level_threshold: default_level_threshold(),
            max_level: default_max_level(),
            rest_ceiling: ActivityLevel::None,
            rest_recovery: default_rest_recovery(),
            sleep_recovery: default_sleep_recovery(),
            unfed_exertion_pct: default_unfed_exertion_pct(),
            digestion_rate: default_digestion_rate(),
            stomach_capacity: default_stomach_capacity(),
            wake_threshold: 0,
            foods: default_foods(),
            activities: default_activities(),
        }
    }
}

impl SurvivorConfig {
    /// Convert a tracker value into a weariness level.
    ///
    /// The level is `tracker / level_threshold`, capped at `max_level`.
    /// A zero threshold reports the maximum level for any non-zero tracker.
    pub fn level_for(&self, tracker: u32) -> i32 {
        let raw = tracker
            .checked_div(self.level_threshold)
            .unwrap_or(if tracker == 0 { 0 } else { self.max_level });
        i32::try_from(raw.min(self.max_level)).unwrap_or(i32::MAX)
    }
}

const fn default_level_threshold() -> u32 {
    300
}

const fn default_max_level() -> u32 {
    8
}

const fn default_rest_recovery() -> u32 {
    1
}

const fn default_sleep_recovery() -> u32 {
    5
}

const fn default_unfed_exertion_pct() -> u32 {
    150
}

const fn default_digestion_rate() -> u32 {
    2
}

const fn default_stomach_capacity() -> u32 {
    2500
}

fn default_foods() -> BTreeMap<ItemTypeId, u32> {
    [
        ("oatmeal", 300),
        ("sandwich_cheese", 450),
        ("meat_cooked", 400),
        ("water_clean", 0),
    ]
    .into_iter()
    .map(|(id, kcal)| (ItemTypeId::from(id), kcal))
    .collect()
}

fn default_activities() -> BTreeMap<ActivityId, ActivityLevel> {
    [
        ("ACT_WAIT", ActivityLevel::None),
        ("ACT_READ", ActivityLevel::None),
        ("ACT_WORKOUT_LIGHT", ActivityLevel::Light),
        ("ACT_WORKOUT_MODERATE", ActivityLevel::Moderate),
        ("ACT_CHOP_LOGS", ActivityLevel::Brisk),
        ("ACT_WORKOUT_ACTIVE", ActivityLevel::Active),
        ("ACT_WORKOUT_HARD", ActivityLevel::Extra),
    ]
    .into_iter()
    .map(|(id, level)| (ActivityId::from(id), level))
    .collect()
}
