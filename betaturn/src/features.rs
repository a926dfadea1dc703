//! Per-chain residue feature tables.
//!
//! A [`FeatureTable`] is built once per chain and holds, for every amino-acid
//! residue in file order, its backbone torsions, alpha-carbon position and
//! secondary-structure annotation. Windows of the scan are slices of it.

use betaturn_struct::residue::{is_amino_acid, one_letter_code};
use betaturn_struct::torsion::{backbone_torsions, side_chain_torsions};
use betaturn_struct::{BackboneTorsions, Chain, Point3D, SideChainTorsions};
use log::warn;

use crate::annotate::{AnnotationTable, ResidueAnnotation};
use crate::WINDOW;

/// Everything the classifier needs to know about one residue.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ResidueRecord {
    pub chain_id: String,
    /// Author sequence number.
    pub seq_num: i32,
    pub i_code: Option<char>,
    /// Three-letter name.
    pub name: String,
    /// One-letter code, `X` for non-standard residues.
    pub code: char,
    pub torsions: BackboneTorsions,
    /// Side-chain torsions; not used for classification.
    pub chi: SideChainTorsions,
    pub ca: Option<Point3D>,
    pub annotation: ResidueAnnotation,
}

/// Residue records of one chain of one model.
#[derive(Debug, Clone)]
pub struct FeatureTable {
    pub model: u32,
    pub chain_id: String,
    pub residues: Vec<ResidueRecord>,
}

impl FeatureTable {
    /// Build the table for `chain`, keeping amino-acid residues only.
    ///
    /// Returns `None` for chains with fewer amino acids than a turn window.
    /// Residues without a numbering correspondence in `annotations` are
    /// logged and treated as coil.
    pub fn build(model: u32, chain: &Chain, annotations: &AnnotationTable) -> Option<Self> {
        let amino: Vec<_> = chain
            .residues
            .iter()
            .filter(|r| is_amino_acid(&r.name))
            .collect();
        if amino.len() < WINDOW {
            log::debug!(
                "model {} chain '{}': {} amino acid(s), too short for a turn",
                model,
                chain.id,
                amino.len()
            );
            return None;
        }

        let residues = amino
            .iter()
            .enumerate()
            .map(|(i, res)| {
                let prev = i.checked_sub(1).map(|p| amino[p]);
                let next = amino.get(i + 1).copied();
                let annotation = annotations
                    .lookup(&chain.id, res.seq_num)
                    .unwrap_or_else(|| {
                        warn!(
                            "no numbering correspondence for chain '{}' residue {}",
                            chain.id, res.seq_num
                        );
                        ResidueAnnotation::default()
                    });
                ResidueRecord {
                    chain_id: chain.id.clone(),
                    seq_num: res.seq_num,
                    i_code: res.i_code,
                    name: res.name.clone(),
                    code: one_letter_code(&res.name),
                    torsions: backbone_torsions(prev, res, next),
                    chi: side_chain_torsions(res),
                    ca: res.alpha_carbon(),
                    annotation,
                }
            })
            .collect();

        Some(Self {
            model,
            chain_id: chain.id.clone(),
            residues,
        })
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// All candidate windows, in order of their first residue.
    pub fn windows(&self) -> std::slice::Windows<'_, ResidueRecord> {
        self.residues.windows(WINDOW)
    }
}
