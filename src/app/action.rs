use crate::app::event::SequenceId;
use crate::form::submission::Submission;
use std::time::Duration;

#[derive(Debug)]
pub enum Action {
    ArmLoadingTimer { sequence: SequenceId, delay: Duration },
    DeliverSubmission { sequence: SequenceId, delay: Duration, submission: Submission },
    Quit,
}
