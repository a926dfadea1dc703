//! Backbone and side-chain torsion angles of individual residues.
//!
//! Backbone torsions span two residues and are only defined when the two are
//! covalently adjacent. Adjacency in a residue list is not enough: missing
//! residues, chain breaks and insertion codes all put non-bonded residues
//! next to each other, so the author sequence numbers must differ by exactly
//! one. Any failed precondition yields `None`, never a spurious angle.
//!
//! All angles are in degrees, in (-180, 180], rounded to six decimals.

use crate::geometry::dihedral_points;
use crate::types::{Point3D, Residue};

/// Backbone torsions of one residue.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BackboneTorsions {
    /// C(i-1)-N-CA-C.
    pub phi: Option<f64>,
    /// N-CA-C-N(i+1).
    pub psi: Option<f64>,
    /// CA(i-1)-C(i-1)-N-CA, the peptide bond preceding this residue.
    pub omega: Option<f64>,
}

/// Side-chain torsions chi1 through chi5 of one residue.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideChainTorsions {
    pub chi: [Option<f64>; 5],
}

/// Whether `curr` directly follows `prev` in author numbering.
pub fn is_consecutive(prev: &Residue, curr: &Residue) -> bool {
    curr.seq_num == prev.seq_num + 1
}

/// Phi of `curr` over (prev.C, curr.N, curr.CA, curr.C).
pub fn phi(prev: &Residue, curr: &Residue) -> Option<f64> {
    if !is_consecutive(prev, curr) {
        return None;
    }
    let c_prev = prev.atom_coords("C")?;
    let n = curr.atom_coords("N")?;
    let ca = curr.atom_coords("CA")?;
    let c = curr.atom_coords("C")?;
    Some(torsion(&c_prev, &n, &ca, &c))
}

/// Psi of `curr` over (curr.N, curr.CA, curr.C, next.N).
pub fn psi(curr: &Residue, next: &Residue) -> Option<f64> {
    if !is_consecutive(curr, next) {
        return None;
    }
    let n = curr.atom_coords("N")?;
    let ca = curr.atom_coords("CA")?;
    let c = curr.atom_coords("C")?;
    let n_next = next.atom_coords("N")?;
    Some(torsion(&n, &ca, &c, &n_next))
}

/// Omega of the peptide bond into `curr` over (prev.CA, prev.C, curr.N, curr.CA).
pub fn omega(prev: &Residue, curr: &Residue) -> Option<f64> {
    if !is_consecutive(prev, curr) {
        return None;
    }
    let ca_prev = prev.atom_coords("CA")?;
    let c_prev = prev.atom_coords("C")?;
    let n = curr.atom_coords("N")?;
    let ca = curr.atom_coords("CA")?;
    Some(torsion(&ca_prev, &c_prev, &n, &ca))
}

/// Phi, psi and omega of `curr` given its list neighbours.
pub fn backbone_torsions(
    prev: Option<&Residue>,
    curr: &Residue,
    next: Option<&Residue>,
) -> BackboneTorsions {
    BackboneTorsions {
        phi: prev.and_then(|p| phi(p, curr)),
        psi: next.and_then(|n| psi(curr, n)),
        omega: prev.and_then(|p| omega(p, curr)),
    }
}

// Candidate atom names per side-chain position. When several are present the
// last one listed wins.
const GAMMA: &[&str] = &["CG", "CG1", "OG", "OG1", "SG", "NG", "PG"];
const DELTA: &[&str] = &["CD", "CD1", "OD", "OD1", "ND", "ND1", "SD", "PD"];
const EPSILON: &[&str] = &["CE", "CE1", "OE", "OE1", "NE", "NE1", "SE", "PE"];
const ZETA: &[&str] = &["CZ", "CZ1", "OZ", "OZ1", "NZ", "NZ1"];
const ETA: &[&str] = &["CH", "CH1", "OH", "OH1", "NH", "NH1"];

/// Side-chain torsions of a residue.
///
/// Selenomethionine uses SE in the delta position; phosphoserine and
/// phosphothreonine use P (delta) and OP1 (epsilon). These angles are
/// diagnostics only and play no part in turn classification.
pub fn side_chain_torsions(res: &Residue) -> SideChainTorsions {
    SideChainTorsions {
        chi: [chi1(res), chi2(res), chi3(res), chi4(res), chi5(res)],
    }
}

fn chi1(res: &Residue) -> Option<f64> {
    let n = res.atom_coords("N")?;
    let ca = res.atom_coords("CA")?;
    let cb = res.atom_coords("CB")?;
    let g = last_present(res, GAMMA)?;
    Some(torsion(&n, &ca, &cb, &g))
}

fn chi2(res: &Residue) -> Option<f64> {
    let ca = res.atom_coords("CA")?;
    let cb = res.atom_coords("CB")?;
    let g = last_present(res, GAMMA)?;
    let d = delta_override(res).or_else(|| last_present(res, DELTA))?;
    Some(torsion(&ca, &cb, &g, &d))
}

fn chi3(res: &Residue) -> Option<f64> {
    if matches!(res.name.as_str(), "PHE" | "TYR" | "TRP" | "HIS" | "PTR") {
        return None;
    }
    let cb = res.atom_coords("CB")?;
    let g = last_present(res, &GAMMA[..6])?;
    let d = delta_override(res).or_else(|| last_present(res, &DELTA[..7]))?;
    let e = epsilon_override(res).or_else(|| last_present(res, &EPSILON[..6]))?;
    Some(torsion(&cb, &g, &d, &e))
}

fn chi4(res: &Residue) -> Option<f64> {
    if matches!(
        res.name.as_str(),
        "PHE" | "TYR" | "TRP" | "PTR" | "MET" | "MSE"
    ) {
        return None;
    }
    let g = last_present(res, GAMMA)?;
    let d = last_present(res, DELTA)?;
    let e = last_present(res, EPSILON)?;
    let z = last_present(res, ZETA)?;
    Some(torsion(&g, &d, &e, &z))
}

fn chi5(res: &Residue) -> Option<f64> {
    if matches!(res.name.as_str(), "TYR" | "TRP" | "PTR" | "MSE" | "MET") {
        return None;
    }
    let d = last_present(res, DELTA)?;
    let e = last_present(res, EPSILON)?;
    let z = last_present(res, ZETA)?;
    let h = last_present(res, ETA)?;
    Some(torsion(&d, &e, &z, &h))
}

fn delta_override(res: &Residue) -> Option<Point3D> {
    match res.name.as_str() {
        "MSE" => res.atom_coords("SE"),
        "SEP" | "TPO" => res.atom_coords("P"),
        _ => None,
    }
}

fn epsilon_override(res: &Residue) -> Option<Point3D> {
    match res.name.as_str() {
        "SEP" | "TPO" => res.atom_coords("OP1"),
        _ => None,
    }
}

fn last_present(res: &Residue, names: &[&str]) -> Option<Point3D> {
    names.iter().rev().find_map(|name| res.atom_coords(name))
}

fn torsion(p1: &Point3D, p2: &Point3D, p3: &Point3D, p4: &Point3D) -> f64 {
    round6(dihedral_points(p1, p2, p3, p4))
}

fn round6(x: f64) -> f64 {
    (x * 1e6).round() / 1e6
}
