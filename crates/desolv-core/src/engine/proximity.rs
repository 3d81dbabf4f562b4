use super::query::QueryEngine;
use crate::core::models::atom::Atom;
use crate::core::models::compound::Compound;
use crate::core::models::dehydron::{Dehydron, ResidueKey};
use std::fmt;
use tracing::{debug, instrument};

/// Maximum alpha-carbon distance, in Angstroms, at which a residue lies in a
/// dehydron's desolvation domain. The bound is inclusive.
pub const DESOLVATION_RADIUS: f64 = 6.5;

/// A residue of interest lying within the desolvation domain of both ends of a dehydron.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Association<'a> {
    pub residue: Compound<'a>,
    pub endpoints: (Compound<'a>, Compound<'a>),
    /// Alpha-carbon distances from the residue to the first and second endpoint.
    pub distances: (f64, f64),
    /// Position of the dehydron in the input slice.
    pub dehydron_index: usize,
}

/// Why a dehydron, or one residue tested against it, was left out of the analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    UnresolvedEndpoint {
        dehydron_index: usize,
        key: ResidueKey,
    },
    MissingAlphaCarbon {
        dehydron_index: usize,
        key: ResidueKey,
    },
    ResidueWithoutAlphaCarbon {
        dehydron_index: usize,
        residue: ResidueKey,
    },
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skip::UnresolvedEndpoint {
                dehydron_index,
                key,
            } => write!(
                f,
                "dehydron #{dehydron_index}: endpoint {key} not found in structure"
            ),
            Skip::MissingAlphaCarbon {
                dehydron_index,
                key,
            } => write!(
                f,
                "dehydron #{dehydron_index}: endpoint {key} has no CA atom"
            ),
            Skip::ResidueWithoutAlphaCarbon {
                dehydron_index,
                residue,
            } => write!(
                f,
                "dehydron #{dehydron_index}: residue {residue} has no CA atom"
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProximityReport<'a> {
    pub associations: Vec<Association<'a>>,
    pub skipped: Vec<Skip>,
}

/// Whether a distance lies within the desolvation domain.
#[inline]
pub fn within_desolvation_domain(distance: f64) -> bool {
    distance <= DESOLVATION_RADIUS
}

/// Associates each residue with every dehydron whose two endpoints both lie within
/// [`DESOLVATION_RADIUS`] of it, measured between alpha carbons.
///
/// Dehydrons whose endpoints cannot be resolved, or lack an alpha carbon, are
/// skipped as a whole. A residue without an alpha carbon is skipped for each
/// dehydron it is tested against. Associations are not deduplicated.
#[instrument(skip_all, fields(residues = residues.len(), dehydrons = dehydrons.len()))]
pub fn analyze<'a>(
    engine: &QueryEngine<'a>,
    residues: &[Compound<'a>],
    dehydrons: &[Dehydron],
) -> ProximityReport<'a> {
    let mut report = ProximityReport::default();

    for (index, dehydron) in dehydrons.iter().enumerate() {
        let endpoints = match resolve_endpoints(engine, index, dehydron) {
            Ok(endpoints) => endpoints,
            Err(skip) => {
                debug!(%skip, "Skipping dehydron");
                report.skipped.push(skip);
                continue;
            }
        };
        let ((first, first_ca), (second, second_ca)) = endpoints;

        for residue in residues {
            let Some(ca) = residue.alpha_carbon() else {
                let skip = Skip::ResidueWithoutAlphaCarbon {
                    dehydron_index: index,
                    residue: residue.key(),
                };
                debug!(%skip, "Skipping residue");
                report.skipped.push(skip);
                continue;
            };

            let distances = (ca.distance_to(first_ca), ca.distance_to(second_ca));
            if within_desolvation_domain(distances.0) && within_desolvation_domain(distances.1) {
                report.associations.push(Association {
                    residue: *residue,
                    endpoints: (first, second),
                    distances,
                    dehydron_index: index,
                });
            }
        }
    }

    debug!(
        associations = report.associations.len(),
        skipped = report.skipped.len(),
        "Proximity analysis finished"
    );
    report
}

type Endpoint<'a> = (Compound<'a>, &'a Atom);

fn resolve_endpoints<'a>(
    engine: &QueryEngine<'a>,
    index: usize,
    dehydron: &Dehydron,
) -> Result<(Endpoint<'a>, Endpoint<'a>), Skip> {
    Ok((
        resolve_endpoint(engine, index, &dehydron.first)?,
        resolve_endpoint(engine, index, &dehydron.second)?,
    ))
}

fn resolve_endpoint<'a>(
    engine: &QueryEngine<'a>,
    index: usize,
    key: &ResidueKey,
) -> Result<Endpoint<'a>, Skip> {
    let compound = engine
        .find_compound(key)
        .ok_or_else(|| Skip::UnresolvedEndpoint {
            dehydron_index: index,
            key: key.clone(),
        })?;
    let ca = compound
        .alpha_carbon()
        .ok_or_else(|| Skip::MissingAlphaCarbon {
            dehydron_index: index,
            key: key.clone(),
        })?;
    Ok((compound, ca))
}
