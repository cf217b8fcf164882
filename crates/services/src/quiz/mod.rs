mod progress;
mod session;
mod workflow;

// Public API of the quiz subsystem.
pub use progress::QuizProgress;
pub use session::{
    DEFAULT_ROUNDS, Feedback, MAX_ROUNDS, MIN_ROUNDS, QuizOutcome, QuizPhase, QuizSession,
};
pub use workflow::QuizLoopService;
