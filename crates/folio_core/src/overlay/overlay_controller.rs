//! Detail overlay state machine.
//!
//! # Responsibility
//! - Track which single record (if any) the modal overlay displays.
//! - Project the open record into a render-ready view.
//!
//! # Invariants
//! - At most one overlay is open; opening another record replaces it.
//! - `close` is unconditional and idempotent.
//! - Refs outside the catalog lists are rejected and leave state untouched.

use crate::content::catalog::Catalog;
use crate::model::record::{ContentRecord, RecordKind, RecordLinks, RecordRef};
use log::{debug, error};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Overlay lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Closed,
    Open(RecordRef),
}

impl OverlayState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn open_ref(&self) -> Option<RecordRef> {
        match self {
            Self::Open(target) => Some(*target),
            Self::Closed => None,
        }
    }
}

/// Overlay transition errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayError {
    /// Ref does not address an existing record.
    RecordOutOfRange { target: RecordRef, len: usize },
}

impl Display for OverlayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RecordOutOfRange { target, len } => write!(
                f,
                "record ref out of range: {target} (list has {len} entries)"
            ),
        }
    }
}

impl Error for OverlayError {}

/// Render-ready projection of the open record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlayView {
    pub target: RecordRef,
    pub title: String,
    pub organization: Option<String>,
    pub period: Option<String>,
    pub description: String,
    pub technologies: Vec<String>,
    pub links: RecordLinks,
    /// Experience only.
    pub achievements: Vec<String>,
    /// Project only.
    pub features: Vec<String>,
    /// Project only.
    pub challenges: Vec<String>,
}

impl OverlayView {
    fn from_record(target: RecordRef, record: &ContentRecord) -> Self {
        let header = record.header();
        let (achievements, features, challenges) = match record {
            ContentRecord::Experience(experience) => {
                (experience.achievements.clone(), Vec::new(), Vec::new())
            }
            ContentRecord::Project(project) => (
                Vec::new(),
                project.features.clone(),
                project.challenges.clone(),
            ),
        };
        Self {
            target,
            title: header.title.clone(),
            organization: record.organization().map(str::to_string),
            period: header.period.clone(),
            description: header.description.clone(),
            technologies: header.technologies.clone(),
            links: header.links.clone(),
            achievements,
            features,
            challenges,
        }
    }
}

/// Single-modal controller sized to one catalog's record lists.
#[derive(Debug, Clone)]
pub struct OverlayController {
    state: OverlayState,
    experience_count: usize,
    project_count: usize,
}

impl OverlayController {
    /// Creates a closed controller bound to the catalog's list lengths.
    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self {
            state: OverlayState::Closed,
            experience_count: catalog.record_count(RecordKind::Experience),
            project_count: catalog.record_count(RecordKind::Project),
        }
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Opens (or replaces) the overlay with one record.
    ///
    /// # Errors
    /// - `RecordOutOfRange` when `target` is past the end of its list.
    pub fn open(&mut self, target: RecordRef) -> Result<OverlayState, OverlayError> {
        let len = match target.kind {
            RecordKind::Experience => self.experience_count,
            RecordKind::Project => self.project_count,
        };
        if target.index >= len {
            error!(
                "event=overlay_open module=overlay status=error reason=out_of_range target={} len={}",
                target, len
            );
            return Err(OverlayError::RecordOutOfRange { target, len });
        }

        if let OverlayState::Open(previous) = self.state {
            debug!(
                "event=overlay_replace module=overlay from={} to={}",
                previous, target
            );
        } else {
            debug!("event=overlay_open module=overlay status=ok target={}", target);
        }
        self.state = OverlayState::Open(target);
        Ok(self.state)
    }

    /// Closes the overlay regardless of current state.
    pub fn close(&mut self) -> OverlayState {
        if let OverlayState::Open(previous) = self.state {
            debug!("event=overlay_close module=overlay target={}", previous);
        }
        self.state = OverlayState::Closed;
        self.state
    }

    /// Resolves the open record against `catalog`.
    pub fn displayed<'c>(&self, catalog: &'c Catalog) -> Option<&'c ContentRecord> {
        catalog.record(self.state.open_ref()?)
    }

    /// Builds the render view for the open record.
    pub fn view(&self, catalog: &Catalog) -> Option<OverlayView> {
        let target = self.state.open_ref()?;
        catalog
            .record(target)
            .map(|record| OverlayView::from_record(target, record))
    }
}
