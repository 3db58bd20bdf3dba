//! Per-minute physiology applied to a survivor.
//!
//! This module implements the two body processes that feed the weariness
//! level:
//!
//! - Exertion raises the weariness tracker by the activity's points per
//!   minute, scaled up when the survivor has nothing left to digest
//! - Resting and sleeping lower the tracker at their own rates
//! - Digestion absorbs calories from the guts, then moves calories from the
//!   stomach into the guts
//!
//! All arithmetic uses checked or saturating operations. No panics, no
//! silent overflow.

use weary_types::ActivityLevel;

use crate::config::SurvivorConfig;
use crate::error::AgentError;

/// The body state that changes over time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vitals {
    /// Calories eaten but not yet moved to the guts.
    pub stomach_kcal: u32,
    /// Calories in the guts awaiting absorption.
    pub guts_kcal: u32,
    /// Accumulated exertion points; the weariness level derives from this.
    pub tracker: u32,
}

impl Vitals {
    /// True when both stomach and guts are empty.
    pub const fn is_unfed(&self) -> bool {
        self.stomach_kcal == 0 && self.guts_kcal == 0
    }
}

/// Apply `minutes` of exertion or recovery to the weariness tracker.
///
/// # Order of operations
///
/// 1. Asleep: recover at `sleep_recovery` per minute
/// 2. Awake at or below `rest_ceiling`: recover at `rest_recovery` per minute
/// 3. Otherwise: gain the level's points per minute, scaled by
///    `unfed_exertion_pct` if the survivor is unfed
pub fn apply_exertion(
    vitals: &mut Vitals,
    config: &SurvivorConfig,
    exertion: ActivityLevel,
    asleep: bool,
    minutes: u32,
) -> Result<(), AgentError> {
    if asleep || exertion <= config.rest_ceiling {
        let rate = if asleep {
            config.sleep_recovery
        } else {
            config.rest_recovery
        };
        let recovered = rate.saturating_mul(minutes);
        vitals.tracker = vitals.tracker.saturating_sub(recovered);
        return Ok(());
    }

    let mut gain = exertion
        .points()
        .checked_mul(minutes)
        .ok_or_else(|| AgentError::ArithmeticOverflow {
            context: String::from("exertion gain overflow"),
        })?;

    if vitals.is_unfed() {
        let scaled = gain
            .checked_mul(config.unfed_exertion_pct)
            .ok_or_else(|| AgentError::ArithmeticOverflow {
                context: String::from("unfed exertion scaling overflow"),
            })?;
        gain = scaled / 100;
    }

    vitals.tracker = vitals
        .tracker
        .checked_add(gain)
        .ok_or_else(|| AgentError::ArithmeticOverflow {
            context: String::from("weariness tracker overflow"),
        })?;
    Ok(())
}

/// Run `minutes` of digestion.
///
/// The guts absorb first, so food eaten this minute stays in the body for
/// at least one more step.
pub fn digest(vitals: &mut Vitals, config: &SurvivorConfig, minutes: u32) {
    let budget = config.digestion_rate.saturating_mul(minutes);

    let absorbed = budget.min(vitals.guts_kcal);
    vitals.guts_kcal = vitals.guts_kcal.saturating_sub(absorbed);

    let moved = budget.min(vitals.stomach_kcal);
    vitals.stomach_kcal = vitals.stomach_kcal.saturating_sub(moved);
    vitals.guts_kcal = vitals.guts_kcal.saturating_add(moved);
}

/// Put `kcal` calories into the stomach, clamped to its capacity.
pub fn apply_meal(vitals: &mut Vitals, config: &SurvivorConfig, kcal: u32) {
    vitals.stomach_kcal = vitals
        .stomach_kcal
        .saturating_add(kcal)
        .min(config.stomach_capacity);
}

/// Empty stomach and guts.
pub const fn clear_digestion(vitals: &mut Vitals) {
    vitals.stomach_kcal = 0;
    vitals.guts_kcal = 0;
}
