//! # Core Models Module
//!
//! Passive data holders describing one parsed structure file and the annotations
//! read alongside it.
//!
//! ## Key Components
//!
//! - [`atom`] - A single ATOM/HETATM record with position and residue identity
//! - [`sequence`] - Residue sequence identifiers with insertion codes and their ordinals
//! - [`compound`] - Borrowed views grouping consecutive atoms into residues
//! - [`secondary`] - Helix and sheet ranges
//! - [`dehydron`] - Residue keys and the dehydron pairs read from annotation files
//! - [`structure`] - The owning container and its builder
//!
//! ## Usage
//!
//! ```
//! use desolv::core::models::{atom::Atom, sequence::SequenceId, structure::StructureBuilder};
//! use nalgebra::Point3;
//!
//! let id = SequenceId::new(5, None);
//! let mut builder = StructureBuilder::new();
//! builder.add_atom(Atom::new("CA", "SEP", id, Some('A'), Point3::origin()));
//! let structure = builder.build();
//! assert_eq!(structure.atom_count(), 1);
//! ```

pub mod atom;
pub mod compound;
pub mod dehydron;
pub mod secondary;
pub mod sequence;
pub mod structure;
