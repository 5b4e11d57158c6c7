//! Navigation bar chrome state.
//!
//! # Responsibility
//! - Track the mobile menu toggle and the "scrolled" styling flag.
//! - Turn nav item selection into an in-page scroll request.
//!
//! # Invariants
//! - Selecting a nav item always closes the mobile menu.
//! - `scrolled` is a pure function of the last observed offset.

use crate::model::section::Section;

/// Smooth in-page scroll request for the UI host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollRequest {
    pub section_id: String,
    /// Anchor selector, e.g. `#projects`.
    pub anchor: String,
}

#[derive(Debug, Clone)]
pub struct NavigationBar {
    menu_open: bool,
    scrolled: bool,
    scrolled_threshold_px: f64,
}

impl NavigationBar {
    pub fn new(scrolled_threshold_px: f64) -> Self {
        Self {
            menu_open: false,
            scrolled: false,
            scrolled_threshold_px,
        }
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Flips the mobile menu and returns the new state.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Updates the scrolled flag; returns whether it flipped.
    pub fn observe_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > self.scrolled_threshold_px;
        let flipped = scrolled != self.scrolled;
        self.scrolled = scrolled;
        flipped
    }

    /// Selects one nav item.
    pub fn select(&mut self, section: &Section) -> ScrollRequest {
        self.close_menu();
        ScrollRequest {
            section_id: section.id.clone(),
            anchor: section.anchor(),
        }
    }
}
