//! Provides input functionality for the text formats consumed by the analysis.
//!
//! Readers for the fixed-column structure format ([`pdb`]) and the companion dehydron
//! annotation format ([`bonds`]) share the [`traits::RecordFile`] interface. All column
//! offsets live in [`columns`].

pub mod bonds;
pub mod columns;
pub mod pdb;
pub mod traits;
