//! Reason codes for evolution decisions and state changes

use serde::{Deserialize, Serialize};

/// Reason codes for all state changes and decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum ReasonCode {
    // =========================================================================
    // R001: Daily goal
    // =========================================================================
    /// Step goal met today
    R001_GOAL_MET,
    /// Step goal missed today
    R001_GOAL_MISSED,

    // =========================================================================
    // R002: State maintained
    // =========================================================================
    /// Still an egg, goal not yet reached
    R002_STATE_EGG,
    /// Chick growing inside its 7-day window
    R002_STATE_CHICK,
    /// Chicken thriving inside its 14-day window
    R002_STATE_CHICKEN,
    /// Dead is absorbing, no rule fires
    R002_STATE_DEAD,

    // =========================================================================
    // R003: Temporal no-ops
    // =========================================================================
    /// No transition anchor recorded yet, evaluation skipped
    R003_NO_ANCHOR,
    /// Same calendar day as the last transition, no rule matches
    R003_SAME_DAY,
    /// Freshly evolved chicken below its 7-day window, no rule matches
    R003_GRACE_WINDOW,

    // =========================================================================
    // R005: Transitions
    // =========================================================================
    /// Egg hatched into a chick
    R005_TRANSITION_HATCHED,
    /// Chick evolved into a chicken
    R005_TRANSITION_EVOLVED,
    /// Chicken laid an egg, cycle restarts
    R005_TRANSITION_CYCLED,
    /// Goal missed inside a stage window
    R005_TRANSITION_DIED,
    /// Explicit restart after death
    R005_SESSION_RESET,
}

impl ReasonCode {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::R001_GOAL_MET => "R001_GOAL_MET",
            Self::R001_GOAL_MISSED => "R001_GOAL_MISSED",
            Self::R002_STATE_EGG => "R002_STATE_EGG",
            Self::R002_STATE_CHICK => "R002_STATE_CHICK",
            Self::R002_STATE_CHICKEN => "R002_STATE_CHICKEN",
            Self::R002_STATE_DEAD => "R002_STATE_DEAD",
            Self::R003_NO_ANCHOR => "R003_NO_ANCHOR",
            Self::R003_SAME_DAY => "R003_SAME_DAY",
            Self::R003_GRACE_WINDOW => "R003_GRACE_WINDOW",
            Self::R005_TRANSITION_HATCHED => "R005_TRANSITION_HATCHED",
            Self::R005_TRANSITION_EVOLVED => "R005_TRANSITION_EVOLVED",
            Self::R005_TRANSITION_CYCLED => "R005_TRANSITION_CYCLED",
            Self::R005_TRANSITION_DIED => "R005_TRANSITION_DIED",
            Self::R005_SESSION_RESET => "R005_SESSION_RESET",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::R001_GOAL_MET => "Daily step goal met",
            Self::R001_GOAL_MISSED => "Daily step goal missed",
            Self::R002_STATE_EGG => "Egg waiting for first goal day",
            Self::R002_STATE_CHICK => "Chick growing",
            Self::R002_STATE_CHICKEN => "Chicken thriving",
            Self::R002_STATE_DEAD => "Dead - restart to play again",
            Self::R003_NO_ANCHOR => "No transition anchor yet",
            Self::R003_SAME_DAY => "Stage began today, nothing to evaluate",
            Self::R003_GRACE_WINDOW => "Inside post-evolution grace window",
            Self::R005_TRANSITION_HATCHED => "Egg hatched into chick",
            Self::R005_TRANSITION_EVOLVED => "Chick evolved into chicken",
            Self::R005_TRANSITION_CYCLED => "Chicken laid an egg",
            Self::R005_TRANSITION_DIED => "Goal missed, pet died",
            Self::R005_SESSION_RESET => "Session reset after death",
        }
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}
