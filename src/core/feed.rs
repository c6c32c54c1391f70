//! Step feed parser: raw report lines → engine input
//!
//! The interactive CLI and replay files speak a one-line-per-report format:
//!
//! ```text
//! 8500                  # step count, evaluated at the current time
//! 10000 @ 2024-03-02    # step count with an explicit date (midnight UTC)
//! restart               # explicit reset after death
//! ```

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// One parsed feed line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedCommand {
    /// A step-count report, optionally pinned to an explicit timestamp
    Steps {
        steps: u64,
        at: Option<DateTime<Utc>>,
    },
    /// Explicit restart request
    Restart,
}

/// Feed parse failure, reported to the user and otherwise ignored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    /// Empty input line
    Empty,
    /// Step count is not a non-negative integer
    BadSteps(String),
    /// Date after `@` is not YYYY-MM-DD
    BadDate(String),
}

impl std::fmt::Display for FeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedError::Empty => write!(f, "empty feed line"),
            FeedError::BadSteps(s) => write!(f, "bad step count: '{}'", s),
            FeedError::BadDate(s) => write!(f, "bad date (want YYYY-MM-DD): '{}'", s),
        }
    }
}

impl std::error::Error for FeedError {}

/// Parser for step feed lines
#[derive(Debug, Default)]
pub struct StepFeed;

impl StepFeed {
    /// Create new feed parser
    pub fn new() -> Self {
        Self
    }

    /// Parse one feed line
    pub fn parse(&self, line: &str) -> Result<FeedCommand, FeedError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(FeedError::Empty);
        }

        if line.eq_ignore_ascii_case("restart") {
            return Ok(FeedCommand::Restart);
        }

        let (steps_part, date_part) = match line.split_once('@') {
            Some((s, d)) => (s.trim(), Some(d.trim())),
            None => (line, None),
        };

        let steps: u64 = steps_part
            .parse()
            .map_err(|_| FeedError::BadSteps(steps_part.to_string()))?;

        let at = match date_part {
            Some(d) => Some(parse_date(d)?),
            None => None,
        };

        Ok(FeedCommand::Steps { steps, at })
    }
}

/// Parse YYYY-MM-DD as midnight UTC
pub fn parse_date(s: &str) -> Result<DateTime<Utc>, FeedError> {
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| FeedError::BadDate(s.to_string()))?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}

// =============================================================================
// TESTS
// =============================================================================
