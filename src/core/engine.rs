//! Evolution Engine: the day-count evolution ladder
//!
//! Stage transitions (goal = 10k steps/day, days counted from stage entry):
//! - EGG → CHICK: goal met (anchor set)
//! - CHICK day 1-7: goal met → growing, goal missed → DEAD
//! - CHICK day 8+: goal met → CHICKEN (anchor reset), goal missed → DEAD
//! - CHICKEN day 7-13: goal met → thriving, goal missed → DEAD
//! - CHICKEN day 14+: goal met → EGG again (anchor reset), goal missed → DEAD
//! - DEAD: absorbing, only an explicit restart leaves it
//!
//! Day 0 of a stage never kills: no rule matches, the evaluation is a no-op.

use chrono::{DateTime, Utc};

use crate::types::{EggState, EvolutionConfig, EvolutionContext, EvolutionOutput, ReasonCode};
use crate::{
    MSG_CHICKEN_DIED, MSG_CHICKEN_THRIVING, MSG_CHICK_DIED, MSG_CHICK_GROWING, MSG_CYCLE_RESTART,
    MSG_EVOLVED, MSG_HATCHED,
};

/// Evolution state machine engine
///
/// Owns the single mutable context per session; every mutation goes through
/// `on_step_update` or `restart`. `now` is injected, so evaluation is a pure
/// function of its arguments and the context.
#[derive(Debug)]
pub struct EvolutionEngine {
    /// Current pet state
    context: EvolutionContext,
    /// Threshold and stage-length configuration
    config: EvolutionConfig,
    /// Number of evaluations
    update_count: u64,
}

impl Default for EvolutionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl EvolutionEngine {
    /// Create new engine with default thresholds
    pub fn new() -> Self {
        Self::with_config(EvolutionConfig::default())
    }

    /// Create new engine with custom thresholds
    pub fn with_config(config: EvolutionConfig) -> Self {
        Self {
            context: EvolutionContext::new(),
            config,
            update_count: 0,
        }
    }

    /// Evaluate one step-count report, apply the transition table, return output
    pub fn on_step_update(&mut self, steps: u64, now: DateTime<Utc>) -> EvolutionOutput {
        self.context.steps = steps;
        self.update_count += 1;

        let days_since = self.context.days_since(now);
        let (new_state, message, reason, reset_anchor) =
            self.compute_transition(steps, days_since);

        if reset_anchor {
            self.context.last_transition = Some(now);
        }
        if let Some(msg) = message {
            self.context.message = msg.to_string();
        }
        self.context.state = new_state;

        EvolutionOutput::new(
            now,
            steps,
            self.context.state,
            self.context.message.clone(),
            self.context.days_since(now),
            reason,
        )
    }

    /// Compute state transition based on steps and days since stage entry
    ///
    /// Returns (new state, message override, reason, reset anchor). A `None`
    /// message keeps the current one - the no-op rows of the table.
    fn compute_transition(
        &self,
        steps: u64,
        days_since: Option<i64>,
    ) -> (EggState, Option<&'static str>, ReasonCode, bool) {
        let goal_met = steps >= self.config.step_goal;

        match self.context.state {
            EggState::Egg => {
                if goal_met {
                    (
                        EggState::Chick,
                        Some(MSG_HATCHED),
                        ReasonCode::R005_TRANSITION_HATCHED,
                        true,
                    )
                } else {
                    (EggState::Egg, None, ReasonCode::R002_STATE_EGG, false)
                }
            }

            EggState::Chick => match days_since {
                // Missing anchor: recoverable no-op, never an error
                None => (EggState::Chick, None, ReasonCode::R003_NO_ANCHOR, false),
                // Hatch day itself: no rule matches
                Some(d) if d <= 0 => {
                    (EggState::Chick, None, ReasonCode::R003_SAME_DAY, false)
                }
                Some(d) if d <= self.config.chick_stage_days => {
                    if goal_met {
                        (
                            EggState::Chick,
                            Some(MSG_CHICK_GROWING),
                            ReasonCode::R002_STATE_CHICK,
                            false,
                        )
                    } else {
                        (
                            EggState::Dead,
                            Some(MSG_CHICK_DIED),
                            ReasonCode::R005_TRANSITION_DIED,
                            false,
                        )
                    }
                }
                Some(_) => {
                    if goal_met {
                        (
                            EggState::Chicken,
                            Some(MSG_EVOLVED),
                            ReasonCode::R005_TRANSITION_EVOLVED,
                            true,
                        )
                    } else {
                        (
                            EggState::Dead,
                            Some(MSG_CHICK_DIED),
                            ReasonCode::R005_TRANSITION_DIED,
                            false,
                        )
                    }
                }
            },

            EggState::Chicken => match days_since {
                None => (EggState::Chicken, None, ReasonCode::R003_NO_ANCHOR, false),
                Some(d) if d <= 0 => {
                    (EggState::Chicken, None, ReasonCode::R003_SAME_DAY, false)
                }
                // Below the thriving window: no rule matches
                Some(d) if d < self.config.chick_stage_days => {
                    (EggState::Chicken, None, ReasonCode::R003_GRACE_WINDOW, false)
                }
                Some(d) if d < self.config.chicken_stage_days => {
                    if goal_met {
                        (
                            EggState::Chicken,
                            Some(MSG_CHICKEN_THRIVING),
                            ReasonCode::R002_STATE_CHICKEN,
                            false,
                        )
                    } else {
                        (
                            EggState::Dead,
                            Some(MSG_CHICKEN_DIED),
                            ReasonCode::R005_TRANSITION_DIED,
                            false,
                        )
                    }
                }
                Some(_) => {
                    if goal_met {
                        (
                            EggState::Egg,
                            Some(MSG_CYCLE_RESTART),
                            ReasonCode::R005_TRANSITION_CYCLED,
                            true,
                        )
                    } else {
                        (
                            EggState::Dead,
                            Some(MSG_CHICKEN_DIED),
                            ReasonCode::R005_TRANSITION_DIED,
                            false,
                        )
                    }
                }
            },

            EggState::Dead => (EggState::Dead, None, ReasonCode::R002_STATE_DEAD, false),
        }
    }

    /// Reset to a fresh context (explicit user restart after death)
    pub fn restart(&mut self) {
        self.context = EvolutionContext::new();
    }

    /// Get current stage
    pub fn state(&self) -> EggState {
        self.context.state
    }

    /// Get current display message
    pub fn message(&self) -> &str {
        &self.context.message
    }

    /// Get the full context
    pub fn context(&self) -> &EvolutionContext {
        &self.context
    }

    /// Get threshold configuration
    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// Get evaluation count
    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Get current output without evaluating
    pub fn current_output(&self, now: DateTime<Utc>) -> EvolutionOutput {
        EvolutionOutput::new(
            now,
            self.context.steps,
            self.context.state,
            self.context.message.clone(),
            self.context.days_since(now),
            match self.context.state {
                EggState::Egg => ReasonCode::R002_STATE_EGG,
                EggState::Chick => ReasonCode::R002_STATE_CHICK,
                EggState::Chicken => ReasonCode::R002_STATE_CHICKEN,
                EggState::Dead => ReasonCode::R002_STATE_DEAD,
            },
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
