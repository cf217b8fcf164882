/// Read-only progress counters copied out of a session at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub total_rounds: u32,
    pub completed_rounds: u32,
    pub remaining_rounds: u32,
    pub score: u32,
    /// True once every round has been played.
    pub is_complete: bool,
}

impl QuizProgress {
    /// 1-based number of the round in play, for "Question 3/10" headers.
    /// Clamps to `total_rounds` once the run completes.
    #[must_use]
    pub fn display_round(&self) -> u32 {
        if self.is_complete {
            self.total_rounds
        } else {
            self.completed_rounds + 1
        }
    }

    /// Share of rounds answered correctly so far, in `[0.0, 1.0]`.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        if self.completed_rounds == 0 {
            return 0.0;
        }
        f64::from(self.score) / f64::from(self.completed_rounds)
    }
}
