//! Content record model.
//!
//! # Responsibility
//! - Define the static records rendered as summary cards and detail overlays.
//! - Keep one tagged shape for experience and project entries.
//!
//! # Invariants
//! - Records are immutable after catalog load.
//! - A record is addressed by `RecordRef` (owning list + position).
//! - Placeholder links (`#`, blank) are normalized to `None`.

use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Owning list of one content record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// Work history entry.
    Experience,
    /// Portfolio project entry.
    Project,
}

impl RecordKind {
    /// Stable string label used by FFI callers.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Experience => "experience",
            Self::Project => "project",
        }
    }

    /// Parses a stable label; matching is exact and lowercase.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "experience" => Some(Self::Experience),
            "project" => Some(Self::Project),
            _ => None,
        }
    }
}

/// Position of one record inside its owning list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordRef {
    pub kind: RecordKind,
    pub index: usize,
}

impl RecordRef {
    pub fn experience(index: usize) -> Self {
        Self {
            kind: RecordKind::Experience,
            index,
        }
    }

    pub fn project(index: usize) -> Self {
        Self {
            kind: RecordKind::Project,
            index,
        }
    }
}

impl Display for RecordRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]", self.kind.as_str(), self.index)
    }
}

/// Optional outbound links attached to one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordLinks {
    /// Source repository.
    #[serde(default, deserialize_with = "deserialize_link")]
    pub source: Option<String>,
    /// Live demo.
    #[serde(default, deserialize_with = "deserialize_link")]
    pub demo: Option<String>,
    /// Written narrative (blog post, case study).
    #[serde(default, deserialize_with = "deserialize_link")]
    pub narrative: Option<String>,
}

impl RecordLinks {
    /// Builds links, dropping placeholder values.
    pub fn new(
        source: Option<&str>,
        demo: Option<&str>,
        narrative: Option<&str>,
    ) -> Self {
        Self {
            source: normalize_link(source),
            demo: normalize_link(demo),
            narrative: normalize_link(narrative),
        }
    }

}

/// Display fields shared by every record variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordHeader {
    pub title: String,
    /// Free-form period label, e.g. `2025 – Present`.
    #[serde(default)]
    pub period: Option<String>,
    pub description: String,
    /// Technology tags in display order.
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub links: RecordLinks,
}

impl RecordHeader {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            period: None,
            description: description.into(),
            technologies: Vec::new(),
            links: RecordLinks::default(),
        }
    }
}

/// Work history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceRecord {
    #[serde(flatten)]
    pub header: RecordHeader,
    pub organization: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

/// Portfolio project entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    #[serde(flatten)]
    pub header: RecordHeader,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
}

/// Tagged content record rendered into a card and, on demand, an overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentRecord {
    Experience(ExperienceRecord),
    Project(ProjectRecord),
}

impl ContentRecord {
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Experience(_) => RecordKind::Experience,
            Self::Project(_) => RecordKind::Project,
        }
    }

    pub fn header(&self) -> &RecordHeader {
        match self {
            Self::Experience(record) => &record.header,
            Self::Project(record) => &record.header,
        }
    }

    pub fn title(&self) -> &str {
        self.header().title.as_str()
    }

    /// Organization for experience entries; projects have none.
    pub fn organization(&self) -> Option<&str> {
        match self {
            Self::Experience(record) => Some(record.organization.as_str()),
            Self::Project(_) => None,
        }
    }

    pub fn technologies(&self) -> &[String] {
        self.header().technologies.as_slice()
    }

    /// Checks display invariants required by card/overlay rendering.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.title().trim().is_empty() {
            return Err(RecordValidationError::EmptyTitle(self.kind()));
        }
        if let Self::Experience(record) = self {
            if record.organization.trim().is_empty() {
                return Err(RecordValidationError::EmptyOrganization(
                    record.header.title.clone(),
                ));
            }
        }
        if self
            .technologies()
            .iter()
            .any(|tag| tag.trim().is_empty())
        {
            return Err(RecordValidationError::EmptyTechnologyTag(
                self.title().to_string(),
            ));
        }
        Ok(())
    }
}

impl From<ExperienceRecord> for ContentRecord {
    fn from(value: ExperienceRecord) -> Self {
        Self::Experience(value)
    }
}

impl From<ProjectRecord> for ContentRecord {
    fn from(value: ProjectRecord) -> Self {
        Self::Project(value)
    }
}

/// Record declaration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    EmptyTitle(RecordKind),
    EmptyOrganization(String),
    EmptyTechnologyTag(String),
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle(kind) => write!(f, "{} record must have a title", kind.as_str()),
            Self::EmptyOrganization(title) => {
                write!(f, "experience `{title}` must have an organization")
            }
            Self::EmptyTechnologyTag(title) => {
                write!(f, "record `{title}` has an empty technology tag")
            }
        }
    }
}

impl Error for RecordValidationError {}

fn normalize_link(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() || trimmed == "#" {
        return None;
    }
    Some(trimmed.to_string())
}

fn deserialize_link<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(normalize_link(raw.as_deref()))
}
