//! Contact delivery seam.
//!
//! # Responsibility
//! - Define the contract for handing a validated submission to a mail relay
//!   or form-processing endpoint.
//! - Provide the in-scope relay, which records metadata and discards data.
//!
//! # Invariants
//! - Relays only ever receive submissions that passed form validation.
//! - Message bodies and addresses are never written to logs.

use crate::contact::contact_form::ContactSubmission;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Relay-level delivery failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    /// Endpoint rejected or could not be reached.
    Unavailable(String),
}

impl Display for RelayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(details) => write!(f, "contact relay unavailable: {details}"),
        }
    }
}

impl Error for RelayError {}

pub type RelayResult<T> = Result<T, RelayError>;

/// Delivery contract for contact submissions.
pub trait ContactRelay {
    fn deliver(&mut self, submission: &ContactSubmission) -> RelayResult<()>;
}

/// Relay with no backend: logs field sizes and drops the submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscardingRelay;

impl ContactRelay for DiscardingRelay {
    fn deliver(&mut self, submission: &ContactSubmission) -> RelayResult<()> {
        info!(
            "event=contact_discarded module=contact status=ok submission_id={} name_chars={} message_chars={}",
            submission.submission_id,
            submission.name.chars().count(),
            submission.message.chars().count()
        );
        Ok(())
    }
}
