//! # Core Module
//!
//! This module provides the stateless foundation of the library: the structural data
//! model, the file readers that populate it, and small identifier utilities.
//!
//! ## Architecture
//!
//! - **Structural Representation** ([`models`]) - Atoms, residue views, sequence ids,
//!   secondary-structure ranges and dehydron pairs
//! - **File I/O** ([`io`]) - Fixed-column readers for structure and annotation files
//! - **Identifiers** ([`utils`]) - Insertion-code ordering and residue-name lookups
//!
//! Everything in this module is immutable once built; the query logic that derives
//! compounds, adjacency and proximity lives in [`crate::engine`].

pub mod io;
pub mod models;
pub mod utils;
