//! core
//!
//! Core domain types, rules and profiles.
//!
//! # Modules
//!
//! - [`types`] - Message contexts, rule metadata and failures
//! - [`footer`] - Footer grammar and vocabulary
//! - [`rules`] - Line and message rules
//! - [`profile`] - Rule assemblies for each hosting convention
//! - [`cleanup`] - Message text splitting and `strip` cleanup
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Rules are pure: same input, same failures
//! - Profiles are validated once at construction and immutable afterwards
//! - Nothing here touches git or the terminal

pub mod cleanup;
pub mod config;
pub mod footer;
pub mod profile;
pub mod rules;
pub mod types;
