//! Presentation layer handling terminal UI and user input.
//!
//! This module manages the terminal user interface using ratatui,
//! handles keyboard input, and renders the page shell and pages.

pub mod ui;
pub mod pages;
pub mod input;

pub use ui::*;
pub use pages::*;
pub use input::*;
