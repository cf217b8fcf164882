mod question;
mod summary;

pub use question::Question;
pub use summary::{QuizSummary, SummaryError};
