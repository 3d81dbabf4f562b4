use super::columns::{AtomColumns, Columns, RangeColumns};
use super::traits::RecordFile;
use crate::core::models::atom::Atom;
use crate::core::models::secondary::{SecondaryStructureKind, SecondaryStructureRange};
use crate::core::models::sequence::SequenceId;
use crate::core::models::structure::{Structure, StructureBuilder};
use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::{debug, info};

const ATOM_RECORD: &str = "ATOM";
const HETATM_RECORD: &str = "HETATM";
const MODEL_RECORD: &str = "MODEL";
const HELIX_RECORD: &str = "HELIX";
const SHEET_RECORD: &str = "SHEET";

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line} ({record} record): {kind}")]
    Parse {
        line: usize,
        record: &'static str,
        kind: PdbParseErrorKind,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PdbParseErrorKind {
    #[error("Invalid float format for {field} in columns {columns} (value: '{value}')")]
    InvalidFloat {
        field: &'static str,
        columns: String,
        value: String,
    },
    #[error("Invalid {field} in columns {columns} (value: '{value}')")]
    InvalidSequenceNumber {
        field: &'static str,
        columns: String,
        value: String,
    },
}

/// Reader for the fixed-column PDB text format.
///
/// Only the records the analysis needs are interpreted: ATOM/HETATM, HELIX, SHEET
/// and MODEL. Reading stops at the second MODEL record, so only the first model of
/// a multi-model file is kept. Everything else is skipped without validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdbFile;

impl RecordFile for PdbFile {
    type Output = Structure;
    type Error = PdbError;

    fn read_from(&self, reader: &mut impl BufRead) -> Result<Structure, PdbError> {
        let mut builder = StructureBuilder::new();
        let mut seen_model = false;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            if line.starts_with(ATOM_RECORD) || line.starts_with(HETATM_RECORD) {
                builder.add_atom(parse_atom(&line, line_num)?);
            } else if line.starts_with(MODEL_RECORD) {
                if seen_model {
                    debug!(
                        line = line_num,
                        "Second MODEL record; ignoring the rest of the file."
                    );
                    break;
                }
                seen_model = true;
            } else if line.starts_with(HELIX_RECORD) {
                builder.add_range(parse_range(
                    &line,
                    line_num,
                    HELIX_RECORD,
                    SecondaryStructureKind::Helix,
                    &RangeColumns::HELIX,
                )?);
            } else if line.starts_with(SHEET_RECORD) {
                builder.add_range(parse_range(
                    &line,
                    line_num,
                    SHEET_RECORD,
                    SecondaryStructureKind::Sheet,
                    &RangeColumns::SHEET,
                )?);
            }
        }

        let structure = builder.build();
        info!(
            atoms = structure.atom_count(),
            helices = structure.helices().len(),
            sheets = structure.sheets().len(),
            "Loaded structure"
        );
        Ok(structure)
    }
}

fn parse_atom(line: &str, line_num: usize) -> Result<Atom, PdbError> {
    let columns = &AtomColumns::PDB;
    let is_hetero = line.starts_with(HETATM_RECORD);
    let record = if is_hetero {
        HETATM_RECORD
    } else {
        ATOM_RECORD
    };

    let x = parse_coordinate(line, line_num, record, &columns.x)?;
    let y = parse_coordinate(line, line_num, record, &columns.y)?;
    let z = parse_coordinate(line, line_num, record, &columns.z)?;
    let sequence_id = parse_sequence_id(
        line,
        line_num,
        record,
        &columns.sequence_number,
        &columns.insertion_code,
    )?;

    Ok(Atom {
        name: columns.atom_name.slice(line).to_string(),
        residue_name: columns.residue_name.slice(line).to_string(),
        sequence_id,
        chain_id: columns.chain_id.char(line),
        alt_location: columns.alt_location.char(line),
        position: Point3::new(x, y, z),
        is_hetero,
    })
}

fn parse_range(
    line: &str,
    line_num: usize,
    record: &'static str,
    kind: SecondaryStructureKind,
    columns: &RangeColumns,
) -> Result<SecondaryStructureRange, PdbError> {
    let start = parse_sequence_id(
        line,
        line_num,
        record,
        &columns.start_number,
        &columns.start_insertion_code,
    )?;
    let end = parse_sequence_id(
        line,
        line_num,
        record,
        &columns.end_number,
        &columns.end_insertion_code,
    )?;
    let chain_id = columns.chain_id.char(line);
    Ok(SecondaryStructureRange::new(kind, chain_id, start, end))
}

fn parse_coordinate(
    line: &str,
    line_num: usize,
    record: &'static str,
    columns: &Columns,
) -> Result<f64, PdbError> {
    let value = columns.slice(line);
    value.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        record,
        kind: PdbParseErrorKind::InvalidFloat {
            field: columns.name,
            columns: columns.to_string(),
            value: value.into(),
        },
    })
}

fn parse_sequence_id(
    line: &str,
    line_num: usize,
    record: &'static str,
    number: &Columns,
    insertion_code: &Columns,
) -> Result<SequenceId, PdbError> {
    let value = number.slice(line);
    let insertion = insertion_code.slice(line);
    SequenceId::from_fields(value, insertion).map_err(|_| PdbError::Parse {
        line: line_num,
        record,
        kind: PdbParseErrorKind::InvalidSequenceNumber {
            field: number.name,
            columns: number.to_string(),
            value: value.into(),
        },
    })
}
