//! Contact form state and submission.
//!
//! # Responsibility
//! - Hold name/email/message field values between input events.
//! - Validate required fields before any delivery side effect.
//!
//! # Invariants
//! - Failed validation never calls the relay and never edits fields.
//! - A relay failure leaves fields unchanged.
//! - Fields are cleared only after the relay accepts a submission.

use crate::contact::relay::{ContactRelay, RelayError};
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex")
});

/// Editable form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Parses the input `name` attribute used by the page.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "message" => Some(Self::Message),
            _ => None,
        }
    }
}

/// Validated, trimmed submission handed to a relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub submission_id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Receipt for an accepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    pub submission_id: Uuid,
}

/// Form validation and delivery errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactFormError {
    /// Required field is blank after trim.
    MissingField(ContactField),
    /// Email value does not look like `local@domain.tld`.
    InvalidEmail,
    Relay(RelayError),
}

impl Display for ContactFormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "`{}` is required", field.as_str()),
            Self::InvalidEmail => write!(f, "email address is not valid"),
            Self::Relay(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ContactFormError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Relay(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RelayError> for ContactFormError {
    fn from(value: RelayError) -> Self {
        Self::Relay(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces one field value as typed (no trimming).
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => self.name.as_str(),
            ContactField::Email => self.email.as_str(),
            ContactField::Message => self.message.as_str(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Checks required fields in page order, then email shape.
    pub fn validate(&self) -> Result<ContactSubmission, ContactFormError> {
        for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
            if self.get(field).trim().is_empty() {
                return Err(ContactFormError::MissingField(field));
            }
        }
        let email = self.email.trim();
        if !EMAIL_RE.is_match(email) {
            return Err(ContactFormError::InvalidEmail);
        }

        Ok(ContactSubmission {
            submission_id: Uuid::new_v4(),
            name: self.name.trim().to_string(),
            email: email.to_string(),
            message: self.message.trim().to_string(),
        })
    }

    /// Validates and delivers through `relay`, clearing the form on success.
    pub fn submit(
        &mut self,
        relay: &mut impl ContactRelay,
    ) -> Result<SubmissionReceipt, ContactFormError> {
        let submission = match self.validate() {
            Ok(submission) => submission,
            Err(err) => {
                info!(
                    "event=contact_submit module=contact status=rejected reason={}",
                    rejection_reason(&err)
                );
                return Err(err);
            }
        };

        if let Err(err) = relay.deliver(&submission) {
            warn!(
                "event=contact_submit module=contact status=error submission_id={} error={}",
                submission.submission_id, err
            );
            return Err(err.into());
        }

        self.clear();
        info!(
            "event=contact_submit module=contact status=ok submission_id={}",
            submission.submission_id
        );
        Ok(SubmissionReceipt {
            submission_id: submission.submission_id,
        })
    }
}

fn rejection_reason(err: &ContactFormError) -> &'static str {
    match err {
        ContactFormError::MissingField(ContactField::Name) => "missing_name",
        ContactFormError::MissingField(ContactField::Email) => "missing_email",
        ContactFormError::MissingField(ContactField::Message) => "missing_message",
        ContactFormError::InvalidEmail => "invalid_email",
        ContactFormError::Relay(_) => "relay",
    }
}
