//! Delivery of form submissions.
//!
//! The [`sequencer::Sequencer`] owns the timed steps of a submission run as
//! abortable tokio tasks and reports back through [`AppEvent`]s. The actual
//! POST goes through a [`MailTransport`], normally [`http::HttpMailer`].
//!
//! [`AppEvent`]: crate::app::event::AppEvent

pub mod http;
pub mod sequencer;

use crate::form::submission::Submission;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("invalid endpoint url `{url}`: {reason}")]
    InvalidEndpoint { url: String, reason: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("endpoint answered with status {status}")]
    Status { status: u16 },
}

/// Sends one submission to the mail endpoint.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, submission: &Submission) -> Result<(), SubmitError>;
}
