//! Tamago: a step-powered virtual pet
//!
//! The core is the Evolution Engine:
//! (state, days since last transition, today's steps) → (new state, message)

pub mod core;
pub mod types;

// =============================================================================
// EVOLUTION THRESHOLDS [C]
// =============================================================================

/// Daily step count required to hatch, grow, and survive
pub const STEP_GOAL: u64 = 10_000;

/// Last day of the chick stage (inclusive); day 8 with the goal met evolves
pub const CHICK_STAGE_DAYS: i64 = 7;

/// First day a chicken with the goal met lays an egg and restarts the cycle
pub const CHICKEN_STAGE_DAYS: i64 = 14;

// =============================================================================
// MESSAGES [C] - the display collaborator shows these verbatim
// =============================================================================

/// Greeting while the egg waits for its first 10k-step day
pub const MSG_INITIAL: &str = "🥚 Keep Walking!";

pub const MSG_HATCHED: &str = "🐣 Egg Hatched into a Chick!";
pub const MSG_CHICK_GROWING: &str = "🐥 Chick is Growing! Keep Going!";
pub const MSG_CHICK_DIED: &str = "💀 The Chick has died.";
pub const MSG_EVOLVED: &str = "🐔 Chick Evolved into a Chicken!";
pub const MSG_CHICKEN_THRIVING: &str = "🐔 Chicken is Thriving! Keep Going!";
pub const MSG_CHICKEN_DIED: &str = "💀 The Chicken has died.";
pub const MSG_CYCLE_RESTART: &str = "🐣 Chicken laid an Egg! Start over!";

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
