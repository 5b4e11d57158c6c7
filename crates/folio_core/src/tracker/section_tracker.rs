//! Scroll-driven active-section tracking.
//!
//! # Responsibility
//! - Decide which registered section is "active" for nav highlighting.
//! - Evaluate one scroll frame at a time as a pure state transition.
//!
//! # Invariants
//! - Exactly one registered section is active at any time.
//! - The first section is active before any frame is observed.
//! - A frame with no intersecting section keeps the previous active section.
//! - On overlap, the first section in registration order wins.
//! - Scroll offsets `<= 0` always activate the first section.

use crate::model::section::{Section, SectionId, SectionValidationError};
use log::{debug, trace};
use std::collections::{BTreeSet, HashMap};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Viewport-relative vertical extent of one mounted section anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub section_id: SectionId,
    /// Distance from viewport top to the element's top edge.
    pub top: f64,
    /// Distance from viewport top to the element's bottom edge.
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(section_id: impl Into<String>, top: f64, bottom: f64) -> Self {
        Self {
            section_id: section_id.into(),
            top,
            bottom,
        }
    }

    fn contains_line(&self, line: f64) -> bool {
        self.top.is_finite() && self.bottom.is_finite() && self.top <= line && line < self.bottom
    }
}

/// Layout observed on one scroll tick (or on mount).
///
/// Sections missing from `bounds` are treated as not mounted this frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollFrame {
    pub scroll_y: f64,
    pub bounds: Vec<SectionBounds>,
}

impl ScrollFrame {
    pub fn new(scroll_y: f64, bounds: Vec<SectionBounds>) -> Self {
        Self { scroll_y, bounds }
    }
}

/// Result of evaluating one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerUpdate {
    pub active: SectionId,
    pub changed: bool,
}

/// Section tracker construction/selection errors.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionTrackerError {
    NoSections,
    /// Reference line offset is NaN, infinite, or negative.
    InvalidReferenceLine(f64),
    InvalidSection(SectionValidationError),
    DuplicateSectionId(SectionId),
    UnknownSection(String),
}

impl Display for SectionTrackerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSections => write!(f, "section tracker needs at least one section"),
            Self::InvalidReferenceLine(value) => {
                write!(f, "reference line must be finite and >= 0, got {value}")
            }
            Self::InvalidSection(err) => write!(f, "{err}"),
            Self::DuplicateSectionId(id) => write!(f, "duplicate section id: `{id}`"),
            Self::UnknownSection(id) => write!(f, "section is not registered: `{id}`"),
        }
    }
}

impl Error for SectionTrackerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidSection(err) => Some(err),
            _ => None,
        }
    }
}

/// Owns the ordered section list and the active-section state.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    sections: Vec<Section>,
    reference_line_px: f64,
    active_index: usize,
}

impl SectionTracker {
    /// Registers sections in document order.
    ///
    /// # Errors
    /// - No sections, malformed ids, or duplicate ids.
    /// - Non-finite or negative reference line.
    pub fn new(sections: Vec<Section>, reference_line_px: f64) -> Result<Self, SectionTrackerError> {
        if !reference_line_px.is_finite() || reference_line_px < 0.0 {
            return Err(SectionTrackerError::InvalidReferenceLine(reference_line_px));
        }
        if sections.is_empty() {
            return Err(SectionTrackerError::NoSections);
        }
        let mut seen = BTreeSet::new();
        for section in &sections {
            section
                .validate()
                .map_err(SectionTrackerError::InvalidSection)?;
            if !seen.insert(section.id.clone()) {
                return Err(SectionTrackerError::DuplicateSectionId(section.id.clone()));
            }
        }

        Ok(Self {
            sections,
            reference_line_px,
            active_index: 0,
        })
    }

    pub fn sections(&self) -> &[Section] {
        self.sections.as_slice()
    }

    pub fn reference_line_px(&self) -> f64 {
        self.reference_line_px
    }

    pub fn active_section(&self) -> &Section {
        &self.sections[self.active_index]
    }

    pub fn active_id(&self) -> &str {
        self.active_section().id.as_str()
    }

    pub fn is_active(&self, section_id: &str) -> bool {
        self.active_id() == section_id
    }

    /// Evaluates one scroll frame and updates the active section.
    pub fn observe(&mut self, frame: &ScrollFrame) -> TrackerUpdate {
        let next = self.resolve(frame).unwrap_or(self.active_index);
        self.apply(next)
    }

    /// Looks up a registered section; a leading `#` is accepted.
    pub fn section(&self, section_id: &str) -> Result<&Section, SectionTrackerError> {
        self.position_of(section_id)
            .map(|index| &self.sections[index])
            .ok_or_else(|| SectionTrackerError::UnknownSection(section_id.to_string()))
    }

    fn resolve(&self, frame: &ScrollFrame) -> Option<usize> {
        if frame.scroll_y <= 0.0 {
            return Some(0);
        }

        let mut by_id: HashMap<&str, &SectionBounds> = HashMap::with_capacity(frame.bounds.len());
        for bounds in &frame.bounds {
            // Keep the first rectangle reported for an id.
            by_id.entry(bounds.section_id.as_str()).or_insert(bounds);
        }

        let line = self.reference_line_px;
        let hit = self.sections.iter().position(|section| {
            by_id
                .get(section.id.as_str())
                .is_some_and(|bounds| bounds.contains_line(line))
        });
        if hit.is_none() {
            trace!(
                "event=section_gap module=tracker scroll_y={} mounted={}",
                frame.scroll_y,
                by_id.len()
            );
        }
        hit
    }

    fn apply(&mut self, next: usize) -> TrackerUpdate {
        let changed = next != self.active_index;
        if changed {
            debug!(
                "event=active_section_changed module=tracker from={} to={}",
                self.sections[self.active_index].id, self.sections[next].id
            );
            self.active_index = next;
        }
        TrackerUpdate {
            active: self.sections[self.active_index].id.clone(),
            changed,
        }
    }

    fn position_of(&self, section_id: &str) -> Option<usize> {
        let normalized = section_id.trim().trim_start_matches('#');
        self.sections
            .iter()
            .position(|section| section.id == normalized)
    }
}
