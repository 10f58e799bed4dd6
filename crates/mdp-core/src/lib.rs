//! # mdpcheck Core Library
//!
//! A validation and editing toolkit for GROMACS molecular dynamics parameter
//! (`.mdp`) files: flat `name = value` configuration text with `;` comments.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer layout so that each concern can be
//! tested on its own and reused by any front end (command line, language server,
//! editor plugin).
//!
//! - **[`core`]: The Foundation.** The immutable parameter [`Catalog`], the line
//!   parser that turns raw text into assignment records, and small pure utilities
//!   such as name normalization and edit-distance suggestions.
//!
//! - **[`engine`]: The Rules.** Diagnostic types, per-type value validation,
//!   cross-parameter dependency checks, and the [`ValidationConfig`] that tunes
//!   them.
//!
//! - **[`workflows`]: The Public API.** Document-level entry points built on the
//!   two layers below: validation through [`Engine`], plus completion, hover,
//!   formatting, quick fixes and section outlines.
//!
//! Nothing in the library performs I/O except [`Catalog::load`]; callers own the
//! text and the catalog and pass them in by reference.
//!
//! ```
//! use mdpcheck::{Catalog, Engine};
//!
//! let catalog = Catalog::builtin()?;
//! let engine = Engine::new(&catalog);
//! let diagnostics = engine.validate("integrator = md\ndt = 0.002\n");
//! assert!(diagnostics.iter().all(|d| !d.is_error()));
//! # Ok::<(), mdpcheck::core::catalog::CatalogError>(())
//! ```

pub mod core;
pub mod engine;
pub mod workflows;

pub use crate::core::catalog::{Catalog, ParameterDefinition, ParameterType};
pub use crate::engine::config::{ValidationConfig, ValidationConfigBuilder};
pub use crate::engine::diagnostic::{Diagnostic, DiagnosticCode, Severity, TextRange};
pub use crate::workflows::validate::Engine;
