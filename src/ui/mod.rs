//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//! - [`report`] - Validation report rendering (text and JSON)
//!
//! # Design
//!
//! All output goes through this module so that quiet mode and color are
//! handled in one place.

pub mod output;
pub mod report;
