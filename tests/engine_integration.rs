//! Integration tests for the evolution core
//!
//! Tests the full path: feed line → StepFeed → EvolutionEngine → output

use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use tamago::core::{EvolutionEngine, FeedCommand, StepFeed};
use tamago::types::{EggState, ReasonCode};
use tamago::{MSG_CYCLE_RESTART, MSG_INITIAL, STEP_GOAL};

/// Test the full path: parse a feed line, drive the engine, check output
#[test]
fn test_full_feed_path() {
    let parser = StepFeed::new();
    let mut engine = EvolutionEngine::new();

    let command = parser.parse("10000").expect("valid feed line");
    let FeedCommand::Steps { steps, at } = command else {
        panic!("expected a steps command");
    };
    assert_eq!(at, None);

    let output = engine.on_step_update(steps, Utc::now());
    assert_eq!(output.state, EggState::Chick);
    assert!(output.alive);
    assert!(!output.reason.code().is_empty());
}

/// Test dated feed lines give deterministic replays
#[test]
fn test_dated_feed_replay() {
    let parser = StepFeed::new();
    let mut engine = EvolutionEngine::new();

    let lines = [
        "10000 @ 2024-03-01", // hatch
        "12000 @ 2024-03-03", // day 2, growing
        "11000 @ 2024-03-09", // day 8, evolve
        "10000 @ 2024-03-23", // day 14, lay egg
    ];

    let mut last = None;
    for line in lines {
        let FeedCommand::Steps { steps, at } = parser.parse(line).expect("valid line") else {
            panic!("expected a steps command");
        };
        last = Some(engine.on_step_update(steps, at.expect("dated line")));
    }

    let last = last.expect("at least one evaluation");
    assert_eq!(last.state, EggState::Egg);
    assert_eq!(last.message, MSG_CYCLE_RESTART);
    assert_eq!(last.reason, ReasonCode::R005_TRANSITION_CYCLED);
}

/// Test hatch boundary: 9999 stays egg, 10000 hatches
#[test]
fn test_hatch_boundary() {
    let now = Utc::now();

    let mut engine = EvolutionEngine::new();
    let output = engine.on_step_update(9_999, now);
    assert_eq!(output.state, EggState::Egg);
    assert_eq!(output.message, MSG_INITIAL);

    let mut engine = EvolutionEngine::new();
    let output = engine.on_step_update(10_000, now);
    assert_eq!(output.state, EggState::Chick);
    assert_eq!(engine.context().last_transition, Some(now));
}

/// Test determinism - same inputs always give the same output
#[test]
fn test_determinism_full_path() {
    let now = Utc::now();
    let hatch = now - Duration::days(3);

    let run = || {
        let mut engine = EvolutionEngine::new();
        engine.on_step_update(STEP_GOAL, hatch);
        engine.on_step_update(STEP_GOAL, now)
    };

    let a = run();
    let b = run();
    assert_eq!(a.state, b.state);
    assert_eq!(a.message, b.message);
    assert_eq!(a.days_since, b.days_since);
    assert_eq!(a.reason, b.reason);
}

/// Test a full life: egg → chick → chicken → egg, then starve → dead → restart
#[test]
fn test_full_life_cycle_and_restart() {
    let mut engine = EvolutionEngine::new();
    let start = Utc::now() - Duration::days(30);

    // Hatch
    engine.on_step_update(STEP_GOAL, start);
    assert_eq!(engine.state(), EggState::Chick);

    // Grow through the chick week
    for day in 1..=7 {
        let output = engine.on_step_update(STEP_GOAL, start + Duration::days(day));
        assert_eq!(output.state, EggState::Chick);
    }

    // Evolve on day 8
    let output = engine.on_step_update(STEP_GOAL, start + Duration::days(8));
    assert_eq!(output.state, EggState::Chicken);

    // Thrive through the chicken week
    for day in 7..=13 {
        let output = engine.on_step_update(STEP_GOAL, start + Duration::days(8 + day));
        assert_eq!(output.state, EggState::Chicken);
    }

    // Lay an egg on day 14
    let output = engine.on_step_update(STEP_GOAL, start + Duration::days(8 + 14));
    assert_eq!(output.state, EggState::Egg);
    assert_eq!(output.message, MSG_CYCLE_RESTART);

    // Second hatch, then a lazy day kills the chick
    engine.on_step_update(STEP_GOAL, start + Duration::days(23));
    assert_eq!(engine.state(), EggState::Chick);
    let output = engine.on_step_update(1_000, start + Duration::days(25));
    assert_eq!(output.state, EggState::Dead);
    assert!(!output.alive);

    // Explicit restart clears death
    engine.restart();
    assert_eq!(engine.state(), EggState::Egg);
    assert_eq!(engine.message(), MSG_INITIAL);
    assert_eq!(engine.context().steps, 0);
    assert!(engine.context().last_transition.is_none());
}

/// Test JSON output is valid
#[test]
fn test_json_output_valid() {
    let mut engine = EvolutionEngine::new();
    let output = engine.on_step_update(10_000, Utc::now());

    // Should serialize without error
    let json = serde_json::to_string(&output).expect("serialize");
    assert!(json.contains("\"state\""));
    assert!(json.contains("\"steps\""));
    assert!(json.contains("\"reason\""));

    // Should deserialize back
    let _: tamago::types::EvolutionOutput = serde_json::from_str(&json).expect("deserialize");
}

/// Test parseable output format
#[test]
fn test_parseable_output_format() {
    let mut engine = EvolutionEngine::new();
    let output = engine.on_step_update(4_200, Utc::now());

    let formatted = output.to_parseable_string();

    // Should contain expected parts
    assert!(formatted.contains("steps="));
    assert!(formatted.contains("state="));
    assert!(formatted.contains("day="));
    assert!(formatted.contains("reason="));
}

/// Test current_output does not mutate
#[test]
fn test_current_output_is_read_only() {
    let mut engine = EvolutionEngine::new();
    engine.on_step_update(10_000, Utc::now());
    let count = engine.update_count();

    let output = engine.current_output(Utc::now());
    assert_eq!(output.state, EggState::Chick);
    assert_eq!(engine.update_count(), count);
}
