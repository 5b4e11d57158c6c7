//! Flutter bridge for the portfolio page core.
//!
//! # Responsibility
//! - Host the FRB-exported API module.
//! - Keep Dart-facing types separate from `folio_core` domain types.

pub mod api;
