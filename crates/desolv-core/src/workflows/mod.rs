//! # Workflows Module
//!
//! High-level entry points that run the full analysis over files on disk.
//!
//! ## Overview
//!
//! A workflow reads a structure file and its companion bonds file, runs the engine
//! queries and the proximity analysis, and returns owned results that outlive the
//! parsed structure. Reports are written as CSV.
//!
//! ## Architecture
//!
//! - **Single file** ([`analyze`]) - One structure file with an optional bonds file
//! - **Directory** ([`batch`]) - Every structure file in a directory, paired with its
//!   `NAME_bonds.txt` companion, collecting one result per file
//! - **Reports** ([`report`]) - Association and residue-count CSV writers and summaries
//! - **Errors** ([`error`]) - Failures tagged with the offending path

pub mod analyze;
pub mod batch;
pub mod error;
pub mod report;
