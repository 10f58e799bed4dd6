//! # Parameter Catalog
//!
//! The catalog is the single source of truth for which parameters exist and what
//! values they accept. It is built once (usually from the table shipped with the
//! library via [`Catalog::builtin`]) and shared by reference afterwards; it is
//! never mutated.
//!
//! ## Key Components
//!
//! - [`definition`] - [`ParameterDefinition`], [`ParameterType`] and [`ValueRange`]
//! - [`registry`] - The [`Catalog`] itself: loading, validation and lookup
//! - [`categories`] - Human-readable titles for category tags
//!
//! ## Name Normalization
//!
//! GROMACS accepts both `tau-t` and `tau_t`. Lookups try the literal spelling
//! first and then both separator variants, so either form resolves to the same
//! definition.

pub mod categories;
pub mod definition;
pub mod registry;

pub use definition::{ParameterDefinition, ParameterType, ValueRange};
pub use registry::{Catalog, CatalogError};
