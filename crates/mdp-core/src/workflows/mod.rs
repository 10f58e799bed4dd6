//! # Workflows Module
//!
//! Document-level entry points. Each workflow takes the document text (or a
//! single line and a cursor column) together with a borrowed [`crate::Catalog`]
//! and returns plain data; nothing here keeps state between calls.
//!
//! - [`validate`] - The diagnostic pass, exposed through [`validate::Engine`].
//! - [`complete`] - Parameter name and value completions at a cursor.
//! - [`hover`] - Markdown documentation for the parameter under a cursor.
//! - [`format`] - Canonical layout with aligned values and comments.
//! - [`actions`] - Quick fixes for individual diagnostics.
//! - [`outline`] - Sections delimited by `;;;` markers.

pub mod actions;
pub mod complete;
pub mod format;
pub mod hover;
pub mod outline;
pub mod validate;
