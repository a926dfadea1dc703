//! Synthetic backbones for tests.
//!
//! Chains are grown atom by atom from internal coordinates (bond lengths,
//! bond angles and torsions), so a test can ask for a window with exactly the
//! dihedrals of a library medoid and get coordinates that reproduce them.

use betaturn_struct::{Atom, Chain, Point3D, Residue};

use crate::angle::TURN_ANGLES;
use crate::annotate::{ResidueAnnotation, SecondaryStructure};
use crate::features::ResidueRecord;

const N_CA: f64 = 1.458;
const CA_C: f64 = 1.525;
const C_N: f64 = 1.329;
const ANGLE_N_CA_C: f64 = 111.2;
const ANGLE_CA_C_N: f64 = 116.2;
const ANGLE_C_N_CA: f64 = 121.7;

/// Torsions of a residue in a beta strand.
pub const STRAND: (f64, f64, f64) = (-120.0, 130.0, 180.0);

/// Place atom `d` so that |cd| = `bond`, angle bcd = `angle` and torsion abcd = `torsion`.
fn place(a: Point3D, b: Point3D, c: Point3D, bond: f64, angle: f64, torsion: f64) -> Point3D {
    let (theta, phi) = (angle.to_radians(), torsion.to_radians());
    let bc = c.sub(&b).normalize();
    let n = b.sub(&a).cross(&bc).normalize();
    let m = n.cross(&bc);
    let dx = -bond * theta.cos();
    let dy = bond * theta.sin() * phi.cos();
    let dz = bond * theta.sin() * phi.sin();
    Point3D::new(
        c.x + bc.x * dx + m.x * dy + n.x * dz,
        c.y + bc.y * dx + m.y * dy + n.y * dz,
        c.z + bc.z * dx + m.z * dy + n.z * dz,
    )
}

fn atom(name: &str, coords: Point3D) -> Atom {
    Atom {
        serial: 0,
        name: name.into(),
        alt_loc: None,
        coords,
        occupancy: 1.0,
        temp_factor: 0.0,
        element: Some(name[..1].to_string()),
        is_hetatm: false,
    }
}

/// ALA residues numbered `seq_nums` with (phi, psi, omega) per residue.
///
/// The phi and omega of the first residue and the psi of the last are unused.
pub fn backbone(seq_nums: &[i32], torsions: &[(f64, f64, f64)]) -> Vec<Residue> {
    assert_eq!(seq_nums.len(), torsions.len());
    let mut n = Point3D::zero();
    let mut ca = Point3D::new(N_CA, 0.0, 0.0);
    let t = (180.0 - ANGLE_N_CA_C).to_radians();
    let mut c = Point3D::new(ca.x + CA_C * t.cos(), CA_C * t.sin(), 0.0);

    let mut residues = Vec::with_capacity(seq_nums.len());
    for (i, &seq) in seq_nums.iter().enumerate() {
        if i > 0 {
            let next_n = place(n, ca, c, C_N, ANGLE_CA_C_N, torsions[i - 1].1);
            let next_ca = place(ca, c, next_n, N_CA, ANGLE_C_N_CA, torsions[i].2);
            let next_c = place(c, next_n, next_ca, CA_C, ANGLE_N_CA_C, torsions[i].0);
            n = next_n;
            ca = next_ca;
            c = next_c;
        }
        residues.push(Residue {
            name: "ALA".into(),
            seq_num: seq,
            i_code: None,
            atoms: vec![atom("N", n), atom("CA", ca), atom("C", c)],
        });
    }
    residues
}

/// A beta strand numbered `seq_nums`.
pub fn extended(seq_nums: &[i32]) -> Vec<Residue> {
    backbone(seq_nums, &vec![STRAND; seq_nums.len()])
}

/// Four residues numbered from `first` whose turn angles are `angles`
/// (omega2, phi2, psi2, omega3, phi3, psi3, omega4).
pub fn turn(first: i32, angles: &[f64; TURN_ANGLES]) -> Vec<Residue> {
    let [omega2, phi2, psi2, omega3, phi3, psi3, omega4] = *angles;
    backbone(
        &[first, first + 1, first + 2, first + 3],
        &[
            STRAND,
            (phi2, psi2, omega2),
            (phi3, psi3, omega3),
            (STRAND.0, STRAND.1, omega4),
        ],
    )
}

pub fn chain_from(id: &str, residues: Vec<Residue>) -> Chain {
    Chain::new(id, residues)
}

pub fn water(seq_num: i32) -> Residue {
    let mut o = atom("O", Point3D::new(20.0, 20.0, 20.0));
    o.is_hetatm = true;
    Residue {
        name: "HOH".into(),
        seq_num,
        i_code: None,
        atoms: vec![o],
    }
}

/// Residue records of a window with the given secondary structure and
/// 3_10 markers, geometry taken from `residues`.
pub fn window(residues: &[Residue], ss: &str, helix_3_10: &str) -> Vec<ResidueRecord> {
    let chain = chain_from("A", residues.to_vec());
    let mut annotations = crate::annotate::AnnotationTable::default();
    for ((res, s), h) in residues.iter().zip(ss.chars()).zip(helix_3_10.chars()) {
        annotations.insert(
            "A",
            res.seq_num,
            ResidueAnnotation {
                secondary_structure: SecondaryStructure::from_code(s).unwrap(),
                helix_3_10: h,
            },
        );
    }
    crate::features::FeatureTable::build(1, &chain, &annotations)
        .unwrap()
        .residues
}

/// Residues written as PDB ATOM records of chain `chain_id`.
pub fn pdb_text(chain_id: char, residues: &[Residue]) -> String {
    let mut out = String::from(
        "HEADER    SYNTHETIC                                           1TRN\n",
    );
    let mut serial = 1;
    for res in residues {
        for a in &res.atoms {
            out.push_str(&format!(
                "ATOM  {:>5}  {:<3} {:>3} {}{:>4}    {:>8.3}{:>8.3}{:>8.3}  1.00  0.00          {:>2}\n",
                serial,
                a.name,
                res.name,
                chain_id,
                res.seq_num,
                a.coords.x,
                a.coords.y,
                a.coords.z,
                &a.name[..1]
            ));
            serial += 1;
        }
    }
    out.push_str("TER\nEND\n");
    out
}
