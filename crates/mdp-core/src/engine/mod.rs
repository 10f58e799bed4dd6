//! # Engine Module
//!
//! The rule layer of mdpcheck. It knows what a correct parameter file looks like
//! and turns violations into [`diagnostic::Diagnostic`]s, but it never walks a
//! document on its own; that orchestration lives in [`crate::workflows`].
//!
//! ## Architecture
//!
//! - **Diagnostics** ([`diagnostic`]) - Severity, machine-readable codes and
//!   character ranges for every finding.
//! - **Configuration** ([`config`]) - Required and recommended parameter lists,
//!   suggestion tuning and disabled codes.
//! - **Value Validation** ([`validator`]) - Per-type checks of a single value
//!   against its catalog definition.
//! - **Dependencies** ([`dependencies`]) - Rules that look at the whole set of
//!   assignments: duplicates, companion parameters, required and recommended
//!   parameters.
//!
//! ## Key Capabilities
//!
//! - **Fixed priority order** so each line yields at most one value diagnostic
//! - **Case-insensitive enum and boolean matching** mirroring GROMACS itself
//! - **Canonical name comparison** so `tau_t` and `tau-t` count as one parameter

pub mod config;
pub mod dependencies;
pub mod diagnostic;
pub mod validator;
