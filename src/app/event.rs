use crossterm::event::Event as CrosstermEvent;

/// Identifies one submission run. Events from an earlier run are ignored.
pub type SequenceId = u64;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// The artificial loading delay of a run has elapsed
    LoadingElapsed { sequence: SequenceId },

    /// The mail endpoint accepted the submission
    SubmissionSent { sequence: SequenceId },
    SubmissionFailed { sequence: SequenceId, error: String },

    /// Tick for spinner and fade animation
    Tick,
}
