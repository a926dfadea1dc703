//! Protein 3D structures for beta-turn analysis.
//!
//! - **Structure model** — models, chains, residues and atoms in [`types`]
//! - **PDB parsing** — fixed-column coordinate files with [`pdb::parse_pdb`]
//! - **mmCIF parsing** — `_atom_site` tables with [`mmcif::parse_mmcif`], plus
//!   the generic `loop_` reader in [`cif`]
//! - **Format detection** — [`io::read_structure`] picks the parser by extension
//! - **Torsions** — phi/psi/omega and chi angles with gap detection in [`torsion`]
//!
//! # Quick start
//!
//! ```
//! use betaturn_struct::pdb::parse_pdb;
//! use betaturn_core::Summarizable;
//!
//! let pdb_text = "\
//! HEADER                                                        1TST
//! ATOM      1  N   ALA A   1       1.000   2.000   3.000  1.00  0.00           N
//! ATOM      2  CA  ALA A   1       2.000   2.000   3.000  1.00  0.00           C
//! ATOM      3  C   ALA A   1       3.000   2.000   3.000  1.00  0.00           C
//! ATOM      4  O   ALA A   1       3.000   3.000   3.000  1.00  0.00           O
//! TER
//! END
//! ";
//!
//! let structure = parse_pdb(pdb_text).unwrap();
//! assert_eq!(structure.chain_count(), 1);
//! assert!(structure.summary().contains("1TST"));
//! ```

pub mod cif;
pub mod geometry;
pub mod io;
pub mod mmcif;
pub mod pdb;
pub mod residue;
pub mod torsion;
pub mod types;

pub use geometry::{dihedral_points, distance, distance_points};
pub use io::{read_structure, StructureFormat};
pub use mmcif::parse_mmcif;
pub use pdb::parse_pdb;
pub use residue::{is_amino_acid, one_letter_code};
pub use torsion::{backbone_torsions, side_chain_torsions, BackboneTorsions, SideChainTorsions};
pub use types::{Atom, Chain, Model, Point3D, Residue, Structure};

#[cfg(test)]
mod tests {
    use super::*;
    use betaturn_core::Summarizable;

    #[test]
    fn integration_parse_and_measure() {
        let pdb_text = "\
HEADER                                                        1INT\n\
ATOM      1  N   ALA A   1       0.000   0.000   0.000  1.00  0.00           N\n\
ATOM      2  CA  ALA A   1       1.458   0.000   0.000  1.00  0.00           C\n\
ATOM      3  C   ALA A   1       2.009   1.420   0.000  1.00  0.00           C\n\
ATOM      4  O   ALA A   1       1.246   2.390   0.000  1.00  0.00           O\n\
ATOM      5  N   GLY A   2       3.325   1.506   0.000  1.00  0.00           N\n\
ATOM      6  CA  GLY A   2       3.988   2.802   0.000  1.00  0.00           C\n\
ATOM      7  C   GLY A   2       5.504   2.714   0.000  1.00  0.00           C\n\
ATOM      8  O   GLY A   2       6.092   1.635   0.000  1.00  0.00           O\n\
ATOM      9  N   VAL A   3       6.120   3.898   0.000  1.00  0.00           N\n\
ATOM     10  CA  VAL A   3       7.574   3.984   0.000  1.00  0.00           C\n\
ATOM     11  C   VAL A   3       8.173   2.578   0.000  1.00  0.00           C\n\
ATOM     12  O   VAL A   3       9.398   2.445   0.000  1.00  0.00           O\n\
TER\n\
END\n";

        let s = parse_pdb(pdb_text).unwrap();
        assert_eq!(s.id, "1INT");
        assert_eq!(s.chain_count(), 1);
        assert_eq!(s.residue_count(), 3);
        assert!(s.summary().contains("3 residue"));

        let chain = s.get_chain("A").unwrap();
        let res = &chain.residues;
        let mid = backbone_torsions(Some(&res[0]), &res[1], Some(&res[2]));
        assert!(mid.phi.is_some());
        assert!(mid.psi.is_some());
        // A fully planar backbone has every torsion at 0 or 180.
        let omega = mid.omega.unwrap();
        assert!(omega.abs() < 1e-6 || (omega.abs() - 180.0).abs() < 1e-6);

        let first = backbone_torsions(None, &res[0], Some(&res[1]));
        assert!(first.phi.is_none());
        assert!(first.omega.is_none());
    }
}
