//! Core use-case services.
//!
//! # Responsibility
//! - Compose tracker, overlay, navigation and contact state per page load.
//! - Keep UI/FFI layers decoupled from individual state machines.

pub mod page_service;
