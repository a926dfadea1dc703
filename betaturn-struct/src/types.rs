//! Core types for protein 3D structure representation.

use betaturn_core::Summarizable;

/// A point in 3D Cartesian space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    /// Create a new point.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The origin.
    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point3D) -> f64 {
        self.sub(other).norm()
    }

    /// Dot product.
    pub fn dot(&self, other: &Point3D) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product.
    pub fn cross(&self, other: &Point3D) -> Point3D {
        Point3D {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Vector magnitude.
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction, or zero if magnitude is zero.
    pub fn normalize(&self) -> Point3D {
        let n = self.norm();
        if n < 1e-15 {
            Point3D::zero()
        } else {
            Point3D {
                x: self.x / n,
                y: self.y / n,
                z: self.z / n,
            }
        }
    }

    /// Vector subtraction.
    pub fn sub(&self, other: &Point3D) -> Point3D {
        Point3D {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

/// A single atom in a macromolecular structure.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Atom {
    /// Atom serial number.
    pub serial: u32,
    /// Atom name (e.g. "CA", "N", "CB").
    pub name: String,
    /// Alternate location indicator.
    pub alt_loc: Option<char>,
    /// 3D coordinates in Angstroms.
    pub coords: Point3D,
    /// Occupancy factor.
    pub occupancy: f64,
    /// Temperature factor (B-factor).
    pub temp_factor: f64,
    /// Element symbol.
    pub element: Option<String>,
    /// Whether this is a HETATM record.
    pub is_hetatm: bool,
}

/// A residue of a chain, identified by author numbering.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Residue {
    /// Three-letter residue name (e.g. "ALA", "MSE").
    pub name: String,
    /// Author sequence number.
    pub seq_num: i32,
    /// Insertion code.
    pub i_code: Option<char>,
    /// Atoms belonging to this residue, in file order.
    pub atoms: Vec<Atom>,
}

impl Residue {
    /// Get an atom by name.
    ///
    /// When a residue carries alternate conformers the one with the highest
    /// occupancy is returned; ties go to the first one listed.
    pub fn get_atom(&self, name: &str) -> Option<&Atom> {
        self.atoms
            .iter()
            .filter(|a| a.name.trim() == name)
            .fold(None, |best: Option<&Atom>, a| match best {
                Some(b) if b.occupancy >= a.occupancy => Some(b),
                _ => Some(a),
            })
    }

    /// Whether an atom with this name is present.
    pub fn has_atom(&self, name: &str) -> bool {
        self.get_atom(name).is_some()
    }

    /// Coordinates of the named atom.
    pub fn atom_coords(&self, name: &str) -> Option<Point3D> {
        self.get_atom(name).map(|a| a.coords)
    }

    /// Coordinates of the alpha carbon.
    pub fn alpha_carbon(&self) -> Option<Point3D> {
        self.atom_coords("CA")
    }

    /// Whether every atom of this residue came from HETATM records.
    pub fn is_hetero(&self) -> bool {
        !self.atoms.is_empty() && self.atoms.iter().all(|a| a.is_hetatm)
    }
}

/// A polypeptide chain within one model.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chain {
    /// Author chain identifier (may be longer than one character in mmCIF).
    pub id: String,
    /// Residues in this chain, in file order.
    pub residues: Vec<Residue>,
}

impl Chain {
    /// Create a new chain.
    pub fn new(id: impl Into<String>, residues: Vec<Residue>) -> Self {
        Self {
            id: id.into(),
            residues,
        }
    }

    /// Number of residues.
    pub fn residue_count(&self) -> usize {
        self.residues.len()
    }

    /// Total number of atoms across all residues.
    pub fn atom_count(&self) -> usize {
        self.residues.iter().map(|r| r.atoms.len()).sum()
    }
}

/// One model (conformer set) of a structure. X-ray files normally carry one,
/// NMR ensembles many.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Model {
    /// Model serial number as written in the file (1 when absent).
    pub serial: u32,
    /// Chains in this model.
    pub chains: Vec<Chain>,
}

impl Model {
    /// Create a new model.
    pub fn new(serial: u32, chains: Vec<Chain>) -> Self {
        Self { serial, chains }
    }

    /// Get a chain by its identifier.
    pub fn get_chain(&self, id: &str) -> Option<&Chain> {
        self.chains.iter().find(|c| c.id == id)
    }
}

/// A complete macromolecular structure (one or more models).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Structure {
    /// PDB identifier or user-supplied name.
    pub id: String,
    /// Models in file order.
    pub models: Vec<Model>,
}

impl Structure {
    /// Number of models.
    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    /// Number of chains in the first model.
    pub fn chain_count(&self) -> usize {
        self.models.first().map_or(0, |m| m.chains.len())
    }

    /// Total residues across all models and chains.
    pub fn residue_count(&self) -> usize {
        self.chains().map(|c| c.residue_count()).sum()
    }

    /// Total atoms across all models and chains.
    pub fn atom_count(&self) -> usize {
        self.chains().map(|c| c.atom_count()).sum()
    }

    /// Get a chain of the first model by identifier.
    pub fn get_chain(&self, id: &str) -> Option<&Chain> {
        self.models.first().and_then(|m| m.get_chain(id))
    }

    /// Iterate over every chain of every model.
    pub fn chains(&self) -> impl Iterator<Item = &Chain> {
        self.models.iter().flat_map(|m| m.chains.iter())
    }
}

impl Summarizable for Structure {
    fn summary(&self) -> String {
        format!(
            "Structure {}: {} model(s), {} chain(s), {} residue(s), {} atom(s)",
            self.id,
            self.model_count(),
            self.chain_count(),
            self.residue_count(),
            self.atom_count(),
        )
    }
}
