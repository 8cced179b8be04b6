//! Application layer managing state and business workflows.
//!
//! This module coordinates between the domain layer and presentation layer,
//! managing page state, form submissions, and network completion events.

pub mod state;

pub use state::*;
