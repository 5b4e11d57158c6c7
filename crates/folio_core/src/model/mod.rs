//! Domain model for the portfolio page.
//!
//! # Responsibility
//! - Define page sections and the static content records shown in cards.
//! - Keep experience/project entries in one tagged record shape.
//!
//! # Invariants
//! - Content records are immutable once loaded.
//! - Records are addressed by list position, never by a separate key.

pub mod record;
pub mod section;
