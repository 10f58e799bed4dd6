//! # Core Module
//!
//! The stateless foundation of mdpcheck: everything here is either immutable data
//! or a pure function over text.
//!
//! ## Architecture
//!
//! - **Parameter Catalog** ([`catalog`]) - The authoritative table of recognized
//!   mdp parameters, with their types, defaults, valid values and ranges.
//! - **Syntax** ([`syntax`]) - Line classification and assignment records, plus
//!   the `;;;` section markers used for outlines.
//! - **Utilities** ([`utils`]) - Parameter name normalization and similarity-based
//!   suggestions.

pub mod catalog;
pub mod syntax;
pub mod utils;
