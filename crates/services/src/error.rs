//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by the word and translation providers.
///
/// These never reach the user: `QuestionBuilder` recovers from every
/// variant with a fallback. They exist so the fallback is an explicit,
/// testable branch instead of a blanket catch.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProviderError {
    #[error("provider request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("provider returned no usable payload")]
    EmptyPayload,
    #[error("invalid provider endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by the quiz session state machine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("round count must be in [1, 50], got {provided}")]
    InvalidRounds { provided: u32 },
    #[error("quiz already started; restart it first")]
    AlreadyStarted,
    #[error("quiz has not been started")]
    NotStarted,
    #[error("quiz is finished; restart to play again")]
    Finished,
    #[error("no question loaded for the current round")]
    QuestionPending,
    #[error("answer already submitted for the current round")]
    AlreadyAnswered,
    #[error("no answer submitted for the current round")]
    NotAnswered,
}
