#![forbid(unsafe_code)]

pub mod error;
pub mod providers;
pub mod question_builder;
pub mod quiz;

pub use kotoba_core::Clock;

pub use error::{ProviderError, QuizError};
pub use providers::{
    GoogleTranslateClient, RandomWordClient, TranslationProvider, WordProvider,
};
pub use question_builder::QuestionBuilder;

pub use quiz::{
    DEFAULT_ROUNDS, Feedback, MAX_ROUNDS, MIN_ROUNDS, QuizLoopService, QuizOutcome, QuizPhase,
    QuizProgress, QuizSession,
};
