//! Static page content.
//!
//! Content is supplied as fixed data (built-in or host JSON) and never
//! fetched remotely.

pub mod catalog;
