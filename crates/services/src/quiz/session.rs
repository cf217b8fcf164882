use std::fmt;

use chrono::{DateTime, Utc};

use kotoba_core::model::{Question, QuizSummary};

use crate::error::QuizError;

use super::progress::QuizProgress;

pub const MIN_ROUNDS: u32 = 1;
pub const MAX_ROUNDS: u32 = 50;
pub const DEFAULT_ROUNDS: u32 = 10;

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// Where a session is in its lifecycle.
///
/// The three middle phases make up an active run; `Finished` is terminal
/// until `restart`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizPhase {
    #[default]
    NotStarted,
    AwaitingQuestion,
    AwaitingAnswer,
    ShowingFeedback,
    Finished,
}

impl QuizPhase {
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(
            self,
            Self::AwaitingQuestion | Self::AwaitingAnswer | Self::ShowingFeedback
        )
    }
}

//
// ─── FEEDBACK ──────────────────────────────────────────────────────────────────
//

/// Outcome of one submitted answer.
///
/// A miss always carries the expected romaji; revealing the right answer is
/// the point of the feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect { expected: String },
}

impl Feedback {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Correct => f.write_str("Correct"),
            Self::Incorrect { expected } => write!(f, "Incorrect: {expected}"),
        }
    }
}

//
// ─── OUTCOME ───────────────────────────────────────────────────────────────────
//

/// What `advance` moved on to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizOutcome {
    NextRound,
    Finished,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Round-by-round quiz state machine.
///
/// Owned by a single flow of control and mutated through the transitions
/// below; every illegal call is rejected with a `QuizError` and leaves the
/// state untouched. Timestamps come in as parameters so callers keep time
/// deterministic.
///
/// Invariants held between calls: `round_index <= total_rounds`; a question
/// is present exactly in `AwaitingAnswer` and `ShowingFeedback`; feedback is
/// present exactly in `ShowingFeedback`; the input generation never
/// decreases, not even across `restart`.
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    phase: QuizPhase,
    round_index: u32,
    total_rounds: u32,
    score: u32,
    current: Option<Question>,
    feedback: Option<Feedback>,
    input_generation: u64,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a run of `total_rounds` questions.
    ///
    /// Bumps the input generation so any input state captured before the
    /// start is invalidated.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::AlreadyStarted` unless the session is fresh or
    /// restarted, and `QuizError::InvalidRounds` for a round count outside
    /// `[MIN_ROUNDS, MAX_ROUNDS]`; the session state is unchanged in both
    /// cases.
    pub fn start(&mut self, total_rounds: u32, now: DateTime<Utc>) -> Result<(), QuizError> {
        if self.phase != QuizPhase::NotStarted {
            return Err(QuizError::AlreadyStarted);
        }
        if !(MIN_ROUNDS..=MAX_ROUNDS).contains(&total_rounds) {
            return Err(QuizError::InvalidRounds {
                provided: total_rounds,
            });
        }

        self.phase = QuizPhase::AwaitingQuestion;
        self.round_index = 0;
        self.total_rounds = total_rounds;
        self.score = 0;
        self.current = None;
        self.feedback = None;
        self.started_at = Some(now);
        self.finished_at = None;
        self.input_generation += 1;
        Ok(())
    }

    /// Install the question for the current round.
    ///
    /// No-op when a question is already loaded, so driving this twice for
    /// one round keeps the first question (the round's material is fixed
    /// until `advance`).
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotStarted` or `QuizError::Finished` outside an
    /// active run.
    pub fn receive_question(&mut self, question: Question) -> Result<(), QuizError> {
        match self.phase {
            QuizPhase::NotStarted => return Err(QuizError::NotStarted),
            QuizPhase::Finished => return Err(QuizError::Finished),
            QuizPhase::AwaitingQuestion
            | QuizPhase::AwaitingAnswer
            | QuizPhase::ShowingFeedback => {}
        }
        if self.current.is_none() {
            self.current = Some(question);
            self.phase = QuizPhase::AwaitingAnswer;
        }
        Ok(())
    }

    /// Score a raw answer against the current question.
    ///
    /// The answer is trimmed and lowercased, then compared to the question's
    /// romaji with exact equality. Bumps the input generation either way so
    /// the submitted input cannot be replayed.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::QuestionPending` before a question is loaded,
    /// `QuizError::AlreadyAnswered` after one answer this round, and the
    /// usual `NotStarted`/`Finished` rejections outside an active run.
    pub fn submit_answer(&mut self, raw: &str) -> Result<Feedback, QuizError> {
        match self.phase {
            QuizPhase::NotStarted => return Err(QuizError::NotStarted),
            QuizPhase::Finished => return Err(QuizError::Finished),
            QuizPhase::AwaitingQuestion => return Err(QuizError::QuestionPending),
            QuizPhase::ShowingFeedback => return Err(QuizError::AlreadyAnswered),
            QuizPhase::AwaitingAnswer => {}
        }
        let Some(question) = self.current.as_ref() else {
            return Err(QuizError::QuestionPending);
        };

        let normalized = raw.trim().to_lowercase();
        let feedback = if normalized == question.romaji() {
            self.score += 1;
            Feedback::Correct
        } else {
            Feedback::Incorrect {
                expected: question.romaji().to_string(),
            }
        };

        self.feedback = Some(feedback.clone());
        self.input_generation += 1;
        self.phase = QuizPhase::ShowingFeedback;
        Ok(feedback)
    }

    /// Close the round: drop its question and feedback, bump the input
    /// generation, and either arm the next round or finish the run.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotAnswered` unless feedback is showing, plus the
    /// usual `NotStarted`/`Finished` rejections.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<QuizOutcome, QuizError> {
        match self.phase {
            QuizPhase::NotStarted => return Err(QuizError::NotStarted),
            QuizPhase::Finished => return Err(QuizError::Finished),
            QuizPhase::AwaitingQuestion | QuizPhase::AwaitingAnswer => {
                return Err(QuizError::NotAnswered);
            }
            QuizPhase::ShowingFeedback => {}
        }

        self.current = None;
        self.feedback = None;
        self.input_generation += 1;
        self.round_index += 1;

        if self.round_index == self.total_rounds {
            self.phase = QuizPhase::Finished;
            self.finished_at = Some(now);
            Ok(QuizOutcome::Finished)
        } else {
            self.phase = QuizPhase::AwaitingQuestion;
            Ok(QuizOutcome::NextRound)
        }
    }

    /// Throw the run away, from any state.
    ///
    /// Everything resets except the input generation, which stays monotonic
    /// so stale input keyed by an old generation can never come back alive.
    pub fn restart(&mut self) {
        let input_generation = self.input_generation;
        *self = Self {
            input_generation,
            ..Self::default()
        };
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.phase != QuizPhase::NotStarted
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == QuizPhase::Finished
    }

    /// 0-based index of the round being played (equals the number of
    /// completed rounds).
    #[must_use]
    pub fn round_index(&self) -> u32 {
        self.round_index
    }

    #[must_use]
    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Identity of the current input-collection boundary. Present it as the
    /// widget key (or log it, on a terminal) so input captured under an
    /// older generation is discarded instead of resubmitted.
    #[must_use]
    pub fn input_generation(&self) -> u64 {
        self.input_generation
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            total_rounds: self.total_rounds,
            completed_rounds: self.round_index,
            remaining_rounds: self.total_rounds.saturating_sub(self.round_index),
            score: self.score,
            is_complete: self.is_finished(),
        }
    }

    /// Validated summary of a finished run; `None` while the run is open.
    #[must_use]
    pub fn summary(&self) -> Option<QuizSummary> {
        if !self.is_finished() {
            return None;
        }
        let started_at = self.started_at?;
        let finished_at = self.finished_at?;
        QuizSummary::new(self.score, self.total_rounds, started_at, finished_at).ok()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
