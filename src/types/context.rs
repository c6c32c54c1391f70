//! Evolution context and tuning configuration
//!
//! The context is the single owned mutable record per session. Only the
//! engine's evaluation and restart operations touch it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::EggState;
use crate::{CHICKEN_STAGE_DAYS, CHICK_STAGE_DAYS, MSG_INITIAL, STEP_GOAL};

/// The pet's full observable state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionContext {
    /// Today's cumulative step count, as last reported
    pub steps: u64,
    /// When the current stage began; `None` only before the first hatch
    pub last_transition: Option<DateTime<Utc>>,
    /// Current life stage
    pub state: EggState,
    /// Display message, always consistent with `state`
    pub message: String,
}

impl Default for EvolutionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl EvolutionContext {
    /// Fresh context: unhatched egg, zero steps, no anchor
    pub fn new() -> Self {
        Self {
            steps: 0,
            last_transition: None,
            state: EggState::Egg,
            message: MSG_INITIAL.to_string(),
        }
    }

    /// Whole days elapsed since the current stage began, if anchored
    pub fn days_since(&self, now: DateTime<Utc>) -> Option<i64> {
        self.last_transition
            .map(|anchor| now.signed_duration_since(anchor).num_days())
    }
}

/// Tuning knobs for the evolution ladder
///
/// Defaults mirror the crate-level constants; tests and callers with
/// different pacing override them wholesale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// Daily step count required to hatch, grow, and survive
    pub step_goal: u64,
    /// Last chick day (inclusive); the day after, the goal evolves the chick
    pub chick_stage_days: i64,
    /// First day a chicken with the goal met lays an egg
    pub chicken_stage_days: i64,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            step_goal: STEP_GOAL,
            chick_stage_days: CHICK_STAGE_DAYS,
            chicken_stage_days: CHICKEN_STAGE_DAYS,
        }
    }
}
