//! Concierge - Terminal Client Library
//!
//! A terminal client for the Nicholas Concierge service, built in Rust.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
