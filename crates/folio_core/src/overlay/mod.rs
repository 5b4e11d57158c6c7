//! Modal detail overlay for experience/project cards.

pub mod overlay_controller;
