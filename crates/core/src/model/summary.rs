use std::fmt;

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("score {score} exceeds total rounds {total_rounds}")]
    ScoreExceedsRounds { score: u32, total_rounds: u32 },
    #[error("finish time precedes start time")]
    FinishBeforeStart,
}

/// Validated record of one finished quiz run.
///
/// Built by the session when it reaches its terminal state; construction
/// re-checks the invariants so a summary can never describe an impossible
/// run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    score: u32,
    total_rounds: u32,
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
}

impl QuizSummary {
    /// Assemble a summary, validating that the score fits the round count
    /// and that the timestamps are ordered.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::ScoreExceedsRounds` or
    /// `SummaryError::FinishBeforeStart` when the parts describe a run that
    /// cannot have happened.
    pub fn new(
        score: u32,
        total_rounds: u32,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Result<Self, SummaryError> {
        if score > total_rounds {
            return Err(SummaryError::ScoreExceedsRounds {
                score,
                total_rounds,
            });
        }
        if finished_at < started_at {
            return Err(SummaryError::FinishBeforeStart);
        }
        Ok(Self {
            score,
            total_rounds,
            started_at,
            finished_at,
        })
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }
}

impl fmt::Display for QuizSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Finished! Score: {}/{}", self.score, self.total_rounds)
    }
}
