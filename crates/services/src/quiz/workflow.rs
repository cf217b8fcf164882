use kotoba_core::model::{Question, QuizSummary};
use kotoba_core::time::Clock;

use crate::error::QuizError;
use crate::question_builder::QuestionBuilder;

use super::progress::QuizProgress;
use super::session::{Feedback, QuizOutcome, QuizPhase, QuizSession};

/// Drives one quiz session end to end: owns the state machine, sources
/// questions through the builder, and stamps transitions with its clock.
///
/// Question fetching is lazy. `ensure_question` is the only async step, and
/// it touches the network only when the current round has no question yet,
/// so callers may invoke it every time they redraw.
pub struct QuizLoopService {
    clock: Clock,
    builder: QuestionBuilder,
    session: QuizSession,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, builder: QuestionBuilder) -> Self {
        Self {
            clock,
            builder,
            session: QuizSession::new(),
        }
    }

    /// # Errors
    ///
    /// Propagates `QuizSession::start` rejections.
    pub fn start(&mut self, total_rounds: u32) -> Result<(), QuizError> {
        self.session.start(total_rounds, self.clock.now())?;
        tracing::debug!(total_rounds, "quiz started");
        Ok(())
    }

    /// Return the current round's question, fetching one first if the round
    /// has none yet.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotStarted` or `QuizError::Finished` outside an
    /// active run; in either case no fetch is attempted.
    pub async fn ensure_question(&mut self) -> Result<Question, QuizError> {
        match self.session.phase() {
            QuizPhase::NotStarted => return Err(QuizError::NotStarted),
            QuizPhase::Finished => return Err(QuizError::Finished),
            QuizPhase::AwaitingQuestion
            | QuizPhase::AwaitingAnswer
            | QuizPhase::ShowingFeedback => {}
        }
        if let Some(question) = self.session.current_question() {
            return Ok(question.clone());
        }

        let question = self.builder.build().await;
        self.session.receive_question(question.clone())?;
        Ok(question)
    }

    /// # Errors
    ///
    /// Propagates `QuizSession::submit_answer` rejections.
    pub fn submit_answer(&mut self, raw: &str) -> Result<Feedback, QuizError> {
        self.session.submit_answer(raw)
    }

    /// # Errors
    ///
    /// Propagates `QuizSession::advance` rejections.
    pub fn advance(&mut self) -> Result<QuizOutcome, QuizError> {
        let outcome = self.session.advance(self.clock.now())?;
        if outcome == QuizOutcome::Finished {
            tracing::debug!(
                score = self.session.score(),
                total_rounds = self.session.total_rounds(),
                "quiz finished"
            );
        }
        Ok(outcome)
    }

    pub fn restart(&mut self) {
        self.session.restart();
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        self.session.progress()
    }

    #[must_use]
    pub fn summary(&self) -> Option<QuizSummary> {
        self.session.summary()
    }
}
