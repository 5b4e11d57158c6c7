//! Contact form.
//!
//! # Responsibility
//! - Keep form field state and required-field validation in core.
//! - Hand validated submissions to an external relay.
//!
//! # See also
//! - `relay::ContactRelay`

pub mod contact_form;
pub mod relay;
