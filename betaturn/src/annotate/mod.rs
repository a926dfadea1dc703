//! Per-residue secondary-structure annotation from an external DSSP run.
//!
//! The annotator numbers residues by internal label (`label_asym_id`,
//! `label_seq_id`) while structures are read in author numbering, so an
//! [`AnnotationTable`] carries both the DSSP records and the
//! [`NumberingTable`] that translates between the two.

pub mod dssp;
pub mod mkdssp;

use std::collections::HashMap;
use std::path::Path;

use betaturn_core::{BetaTurnError, Result};

pub use dssp::{parse_struct_summary, DsspRecord, NumberingTable};
pub use mkdssp::{Mkdssp, PrecomputedDssp, DEFAULT_MKDSSP};

/// DSSP secondary-structure code of one residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum SecondaryStructure {
    /// Alpha-helix.
    H,
    /// Isolated beta-bridge residue.
    B,
    /// Extended strand in a beta-sheet.
    E,
    /// 3_10-helix.
    G,
    /// Pi-helix.
    I,
    /// Polyproline II (kappa) helix.
    P,
    /// Hydrogen-bonded turn.
    T,
    /// Bend.
    S,
    /// Coil / loop (none of the above).
    #[default]
    C,
}

impl SecondaryStructure {
    /// Parse a DSSP code. `.`, blank and `C` are coil.
    pub fn from_code(code: char) -> Result<Self> {
        Ok(match code {
            'H' => Self::H,
            'B' => Self::B,
            'E' => Self::E,
            'G' => Self::G,
            'I' => Self::I,
            'P' => Self::P,
            'T' => Self::T,
            'S' => Self::S,
            '.' | ' ' | 'C' => Self::C,
            other => {
                return Err(BetaTurnError::Parse(format!(
                    "unknown secondary structure code '{}'",
                    other
                )))
            }
        })
    }

    /// Single-character code, `C` for coil.
    pub fn code(&self) -> char {
        match self {
            Self::H => 'H',
            Self::B => 'B',
            Self::E => 'E',
            Self::G => 'G',
            Self::I => 'I',
            Self::P => 'P',
            Self::T => 'T',
            Self::S => 'S',
            Self::C => 'C',
        }
    }

    /// Alpha-helix or beta-strand.
    pub fn is_regular(&self) -> bool {
        matches!(self, Self::H | Self::E)
    }
}

impl std::fmt::Display for SecondaryStructure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The annotation attached to one residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ResidueAnnotation {
    pub secondary_structure: SecondaryStructure,
    /// Raw `helix_3_10` column. DSSP writes `3` on the middle residue of a
    /// three-residue 3_10 helix, `>`/`<`/`X` on helix ends, `.` elsewhere.
    pub helix_3_10: char,
}

impl Default for ResidueAnnotation {
    fn default() -> Self {
        Self {
            secondary_structure: SecondaryStructure::C,
            helix_3_10: '.',
        }
    }
}

/// Annotations of a whole structure, addressable by author numbering.
#[derive(Debug, Clone, Default)]
pub struct AnnotationTable {
    numbering: NumberingTable,
    records: HashMap<(String, i32), ResidueAnnotation>,
}

impl AnnotationTable {
    /// Combine a numbering correspondence with DSSP records.
    pub fn new(numbering: NumberingTable, records: Vec<DsspRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|r| {
                (
                    (r.label_asym_id, r.label_seq_id),
                    ResidueAnnotation {
                        secondary_structure: r.secondary_structure,
                        helix_3_10: r.helix_3_10,
                    },
                )
            })
            .collect();
        Self { numbering, records }
    }

    /// Build from the text of an mkdssp mmCIF output file.
    pub fn from_mmcif(input: &str) -> Result<Self> {
        let numbering = NumberingTable::parse(input);
        let records = parse_struct_summary(input)?;
        if numbering.is_empty() {
            log::warn!("no _pdbx_poly_seq_scheme rows; residues will be treated as coil");
        }
        Ok(Self::new(numbering, records))
    }

    /// Build from an mkdssp mmCIF output file, decompressing if needed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = betaturn_core::compress::read_text(path)?;
        Self::from_mmcif(&text)
    }

    /// Annotate a residue directly by author numbering, bypassing DSSP labels.
    pub fn insert(&mut self, chain_id: &str, auth_seq_num: i32, annotation: ResidueAnnotation) {
        let label = (chain_id.trim().to_string(), auth_seq_num);
        self.numbering
            .insert(chain_id, auth_seq_num, label.0.clone(), label.1);
        self.records.insert(label, annotation);
    }

    /// Annotation of the residue with the given author chain and number.
    ///
    /// Returns `None` when the residue has no numbering correspondence. A
    /// residue that maps to a label DSSP did not report gets the coil default.
    pub fn lookup(&self, chain_id: &str, auth_seq_num: i32) -> Option<ResidueAnnotation> {
        let (asym_id, seq_id) = self.numbering.get(chain_id, auth_seq_num)?;
        Some(
            self.records
                .get(&(asym_id.to_string(), seq_id))
                .copied()
                .unwrap_or_default(),
        )
    }

    /// Number of DSSP records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Anything that can annotate the residues of a structure file.
pub trait SecondaryStructureSource {
    /// Produce the annotation table for the structure at `path`.
    fn annotate(&self, path: &Path) -> Result<AnnotationTable>;
}

/// A fixed table annotates every structure the same way.
impl SecondaryStructureSource for AnnotationTable {
    fn annotate(&self, _path: &Path) -> Result<AnnotationTable> {
        Ok(self.clone())
    }
}
