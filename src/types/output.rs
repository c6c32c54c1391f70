//! Output structures for terminal display

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{EggState, ReasonCode};

/// Output structure for each evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionOutput {
    /// Evaluation timestamp (the injected `now`, not wall clock)
    pub timestamp: DateTime<Utc>,
    /// Step count that drove this evaluation
    pub steps: u64,
    /// Stage after the evaluation
    pub state: EggState,
    /// Display message for the stage
    pub message: String,
    /// Whole days since the current stage began, when anchored
    pub days_since: Option<i64>,
    /// Reason for the decision
    pub reason: ReasonCode,
    /// Is the pet still in play?
    pub alive: bool,
}

impl EvolutionOutput {
    /// Create new output
    pub fn new(
        timestamp: DateTime<Utc>,
        steps: u64,
        state: EggState,
        message: impl Into<String>,
        days_since: Option<i64>,
        reason: ReasonCode,
    ) -> Self {
        Self {
            timestamp,
            steps,
            state,
            message: message.into(),
            days_since,
            reason,
            alive: state.is_alive(),
        }
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let color = self.state.color_code();
        let reset = EggState::color_reset();
        let emoji = self.state.emoji();

        format!(
            "{}{} steps={} | state={} | day={} | {}{}",
            color,
            emoji,
            self.steps,
            self.state,
            self.day_display(),
            self.reason.code(),
            reset
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "steps={} | state={} | day={} | reason={}",
            self.steps,
            self.state,
            self.day_display(),
            self.reason.code()
        )
    }

    fn day_display(&self) -> String {
        match self.days_since {
            Some(d) => d.to_string(),
            None => "-".to_string(),
        }
    }
}
