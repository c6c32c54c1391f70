//! Core modules for Tamago

pub mod api;
pub mod engine;
pub mod feed;

pub use api::{create_router, run_server};
pub use engine::EvolutionEngine;
pub use feed::{FeedCommand, FeedError, StepFeed};
