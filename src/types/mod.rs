//! Core types for Tamago

mod context;
mod output;
mod reason;
mod state;

pub use context::{EvolutionConfig, EvolutionContext};
pub use output::EvolutionOutput;
pub use reason::ReasonCode;
pub use state::EggState;
