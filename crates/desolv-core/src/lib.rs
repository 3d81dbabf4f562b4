//! # desolv
//!
//! A library for reading macromolecular structure files and relating phosphorylation
//! sites to dehydrons, the under-wrapped backbone hydrogen bonds listed in a
//! companion annotation file.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Immutable data models (`Structure`, `Atom`,
//!   `Compound`) and the fixed-column readers that build them.
//!
//! - **[`engine`]: The Logic Core.** Queries over a parsed structure: residue grouping,
//!   chain-aware adjacency, secondary-structure membership, phosphorylation sites and
//!   the desolvation-domain proximity analysis.
//!
//! - **[`workflows`]: The Public API.** End-to-end procedures that read files, run the
//!   engine, aggregate counts and write CSV reports, for single files or whole
//!   directories.

pub mod core;
pub mod engine;
pub mod workflows;
