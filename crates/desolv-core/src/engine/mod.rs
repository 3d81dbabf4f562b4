//! # Engine Module
//!
//! Structural analysis over a parsed [`Structure`](crate::core::models::structure::Structure).
//!
//! ## Overview
//!
//! The engine turns the passive structural model into answers: which atoms form each
//! residue, which residues are sequence neighbours, which lie in annotated helices and
//! sheets, and which residues of interest sit inside the desolvation domain of a
//! dehydron. All queries borrow the structure and never modify it.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Atom and compound filters, and the analysis settings
//!   shared by the workflows
//! - **Queries** ([`query`]) - Compound grouping, adjacency, secondary-structure membership
//!   and residue lookup
//! - **Proximity** ([`proximity`]) - Distance-based association of residues with dehydrons
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events for batch runs

pub mod config;
pub mod progress;
pub mod proximity;
pub mod query;
