//! Page session use-case service.
//!
//! # Responsibility
//! - Own every piece of interactive page state in one container.
//! - Apply UI events in order and report the effects the host must render.
//!
//! # Invariants
//! - State changes only through `dispatch`; the host reads `snapshot`.
//! - Tracker and overlay never observe each other's events.
//! - Contact validation failures are effects, not session errors.

use crate::config::{ConfigError, PageConfig};
use crate::contact::contact_form::{ContactField, ContactForm, ContactFormError, SubmissionReceipt};
use crate::contact::relay::{ContactRelay, DiscardingRelay};
use crate::content::catalog::{Catalog, CatalogError};
use crate::model::record::RecordRef;
use crate::model::section::SectionId;
use crate::nav::navigation_bar::NavigationBar;
use crate::overlay::overlay_controller::{
    OverlayController, OverlayError, OverlayState, OverlayView,
};
use crate::tracker::section_tracker::{ScrollFrame, SectionTracker, SectionTrackerError};
use log::info;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// UI event delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// First layout pass after mount.
    Mounted(ScrollFrame),
    Scrolled(ScrollFrame),
    NavItemSelected(String),
    MenuToggled,
    CardClicked(RecordRef),
    CloseRequested,
    BackdropClicked,
    ContactFieldChanged { field: ContactField, value: String },
    ContactSubmitted,
}

/// Observable consequence of one event.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEffect {
    ActiveSectionChanged(SectionId),
    /// Host should smooth-scroll to this anchor.
    ScrollIntoView { anchor: String },
    MenuChanged(bool),
    OverlayOpened(RecordRef),
    OverlayClosed,
    ContactDelivered(SubmissionReceipt),
    ContactRejected(ContactFormError),
}

/// Owned render snapshot of the session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSnapshot {
    pub active_section: SectionId,
    pub menu_open: bool,
    pub scrolled: bool,
    pub overlay: Option<OverlayView>,
    pub contact: ContactForm,
}

/// Session-level errors. All of them indicate host/programming defects.
#[derive(Debug)]
pub enum PageError {
    Catalog(CatalogError),
    Config(ConfigError),
    Tracker(SectionTrackerError),
    Overlay(OverlayError),
}

impl Display for PageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Catalog(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "{err}"),
            Self::Tracker(err) => write!(f, "{err}"),
            Self::Overlay(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Catalog(err) => Some(err),
            Self::Config(err) => Some(err),
            Self::Tracker(err) => Some(err),
            Self::Overlay(err) => Some(err),
        }
    }
}

impl From<CatalogError> for PageError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<ConfigError> for PageError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<SectionTrackerError> for PageError {
    fn from(value: SectionTrackerError) -> Self {
        Self::Tracker(value)
    }
}

impl From<OverlayError> for PageError {
    fn from(value: OverlayError) -> Self {
        Self::Overlay(value)
    }
}

pub type PageResult<T> = Result<T, PageError>;

/// State container for one page load.
pub struct PageSession<R: ContactRelay> {
    catalog: Catalog,
    tracker: SectionTracker,
    nav: NavigationBar,
    overlay: OverlayController,
    contact: ContactForm,
    relay: R,
}

impl PageSession<DiscardingRelay> {
    /// Session over the built-in catalog with default thresholds.
    pub fn builtin() -> PageResult<Self> {
        Self::new(
            Catalog::builtin().clone(),
            PageConfig::default(),
            DiscardingRelay,
        )
    }
}

impl<R: ContactRelay> PageSession<R> {
    /// Creates a session after validating catalog and config.
    pub fn new(catalog: Catalog, config: PageConfig, relay: R) -> PageResult<Self> {
        catalog.validate()?;
        config.validate()?;
        let tracker = SectionTracker::new(catalog.sections.clone(), config.reference_line_px)?;
        let overlay = OverlayController::for_catalog(&catalog);
        info!(
            "event=page_session_init module=service status=ok sections={} experiences={} projects={} reference_line_px={}",
            catalog.sections.len(),
            catalog.experiences.len(),
            catalog.projects.len(),
            config.reference_line_px
        );
        Ok(Self {
            catalog,
            tracker,
            nav: NavigationBar::new(config.scrolled_threshold_px),
            overlay,
            contact: ContactForm::new(),
            relay,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn tracker(&self) -> &SectionTracker {
        &self.tracker
    }

    pub fn overlay_state(&self) -> OverlayState {
        self.overlay.state()
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn relay(&self) -> &R {
        &self.relay
    }

    /// Applies one event.
    ///
    /// # Errors
    /// - Unknown nav target or out-of-range card ref; state is unchanged.
    pub fn dispatch(&mut self, event: PageEvent) -> PageResult<Vec<PageEffect>> {
        let mut effects = Vec::new();
        match event {
            PageEvent::Mounted(frame) | PageEvent::Scrolled(frame) => {
                self.nav.observe_scroll(frame.scroll_y);
                let update = self.tracker.observe(&frame);
                if update.changed {
                    effects.push(PageEffect::ActiveSectionChanged(update.active));
                }
            }
            PageEvent::NavItemSelected(section_id) => {
                let section = self.tracker.section(section_id.as_str())?;
                let was_open = self.nav.is_menu_open();
                let request = self.nav.select(section);
                if was_open {
                    effects.push(PageEffect::MenuChanged(false));
                }
                effects.push(PageEffect::ScrollIntoView {
                    anchor: request.anchor,
                });
            }
            PageEvent::MenuToggled => {
                effects.push(PageEffect::MenuChanged(self.nav.toggle_menu()));
            }
            PageEvent::CardClicked(target) => {
                self.overlay.open(target)?;
                effects.push(PageEffect::OverlayOpened(target));
            }
            PageEvent::CloseRequested | PageEvent::BackdropClicked => {
                let was_open = self.overlay.is_open();
                self.overlay.close();
                if was_open {
                    effects.push(PageEffect::OverlayClosed);
                }
            }
            PageEvent::ContactFieldChanged { field, value } => {
                self.contact.set(field, value);
            }
            PageEvent::ContactSubmitted => match self.contact.submit(&mut self.relay) {
                Ok(receipt) => effects.push(PageEffect::ContactDelivered(receipt)),
                Err(err) => effects.push(PageEffect::ContactRejected(err)),
            },
        }
        Ok(effects)
    }

    /// Applies queued events in order, stopping at the first error.
    pub fn dispatch_all(
        &mut self,
        events: impl IntoIterator<Item = PageEvent>,
    ) -> PageResult<Vec<PageEffect>> {
        let mut effects = Vec::new();
        for event in events {
            effects.extend(self.dispatch(event)?);
        }
        Ok(effects)
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            active_section: self.tracker.active_id().to_string(),
            menu_open: self.nav.is_menu_open(),
            scrolled: self.nav.is_scrolled(),
            overlay: self.overlay.view(&self.catalog),
            contact: self.contact.clone(),
        }
    }
}
