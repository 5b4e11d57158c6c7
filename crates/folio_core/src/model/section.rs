//! Page section model.
//!
//! # Responsibility
//! - Define the named scrollable regions of the single-page layout.
//! - Validate section identifiers before they reach tracking/navigation.
//!
//! # Invariants
//! - `id` is non-blank, has no whitespace and no `#`.
//! - Registration order is navigation display order.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier of one page section (`about`, `projects`, ...).
pub type SectionId = String;

/// One named region of the page, rendered as an in-page anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Anchor identifier, unique within one page.
    pub id: SectionId,
    /// Label shown in the navigation bar.
    pub display_name: String,
}

impl Section {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }

    /// In-page anchor target for smooth scrolling, e.g. `#about`.
    pub fn anchor(&self) -> String {
        format!("#{}", self.id)
    }

    /// Validates identifier shape and display label.
    pub fn validate(&self) -> Result<(), SectionValidationError> {
        if self.id.trim().is_empty() {
            return Err(SectionValidationError::EmptyId);
        }
        if !is_valid_section_id(self.id.as_str()) {
            return Err(SectionValidationError::InvalidId(self.id.clone()));
        }
        if self.display_name.trim().is_empty() {
            return Err(SectionValidationError::EmptyDisplayName(self.id.clone()));
        }
        Ok(())
    }
}

/// Section declaration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionValidationError {
    EmptyId,
    InvalidId(String),
    EmptyDisplayName(SectionId),
}

impl Display for SectionValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "section id must not be empty"),
            Self::InvalidId(value) => write!(f, "section id is invalid: `{value}`"),
            Self::EmptyDisplayName(id) => {
                write!(f, "section `{id}` must have a display name")
            }
        }
    }
}

impl Error for SectionValidationError {}

fn is_valid_section_id(value: &str) -> bool {
    value
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_')
}
