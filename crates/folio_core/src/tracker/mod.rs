//! Active-section tracking for navigation highlighting.

pub mod section_tracker;
