//! Interaction core for the single-page portfolio.
//! This crate owns page state and content; UI hosts render its snapshots.

pub mod config;
pub mod contact;
pub mod content;
pub mod logging;
pub mod model;
pub mod nav;
pub mod overlay;
pub mod service;
pub mod tracker;

pub use config::{ConfigError, PageConfig};
pub use contact::contact_form::{
    ContactField, ContactForm, ContactFormError, ContactSubmission, SubmissionReceipt,
};
pub use contact::relay::{ContactRelay, DiscardingRelay, RelayError, RelayResult};
pub use content::catalog::{
    Catalog, CatalogError, Certification, Profile, SiteMetadata, SkillCategory,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::record::{
    ContentRecord, ExperienceRecord, ProjectRecord, RecordHeader, RecordKind, RecordLinks,
    RecordRef, RecordValidationError,
};
pub use model::section::{Section, SectionId, SectionValidationError};
pub use nav::navigation_bar::{NavigationBar, ScrollRequest};
pub use overlay::overlay_controller::{
    OverlayController, OverlayError, OverlayState, OverlayView,
};
pub use service::page_service::{
    PageEffect, PageError, PageEvent, PageResult, PageSession, PageSnapshot,
};
pub use tracker::section_tracker::{
    ScrollFrame, SectionBounds, SectionTracker, SectionTrackerError, TrackerUpdate,
};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
