//! Eligibility checks applied to a four-residue window before scoring.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. both end residues have an alpha carbon;
//! 2. CA(1)-CA(4) is within the distance limit;
//! 3. the secondary-structure string is not `HGGG`, `GGGH` or `GGGG`;
//! 4. neither middle residue is helix (`H`) or strand (`E`);
//! 5. a string starting or ending in `GGG` must carry the `3` marker of a
//!    three-residue 3_10 helix somewhere in the window;
//! 6. all seven turn dihedrals are defined.
//!
//! Rejection is routine and never an error.

use std::fmt;

use crate::angle::{ANGLE_NAMES, TURN_ANGLES};
use crate::features::ResidueRecord;
use crate::options::ScanOptions;

/// DSSP writes this on the middle residue of a three-residue 3_10 helix.
pub const SHORT_HELIX_MARKER: char = '3';

/// Why a window was not scored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rejection {
    /// The window does not hold exactly four residues.
    Length(usize),
    /// An end residue lacks an alpha carbon.
    MissingCa,
    /// CA(1)-CA(4) distance above the limit.
    CaDistance(f64),
    /// 3_10 helix abutting or inside a longer helix.
    HelixRun,
    /// A middle residue is in a helix or strand.
    RegularMiddle,
    /// `GGG` run without the short-helix marker.
    LongHelix310,
    /// A turn dihedral is undefined.
    UndefinedAngle(&'static str),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Length(n) => write!(f, "window of {} residues", n),
            Rejection::MissingCa => write!(f, "missing CA"),
            Rejection::CaDistance(d) => write!(f, "CA1-CA4 {:.2} A", d),
            Rejection::HelixRun => write!(f, "3-10 helix run"),
            Rejection::RegularMiddle => write!(f, "helix or strand in the middle"),
            Rejection::LongHelix310 => write!(f, "GGG without short-helix marker"),
            Rejection::UndefinedAngle(name) => write!(f, "{} undefined", name),
        }
    }
}

/// A window that passed every check.
#[derive(Debug, Clone, PartialEq)]
pub struct EligibleWindow {
    /// omega2, phi2, psi2, omega3, phi3, psi3, omega4.
    pub angles: [f64; TURN_ANGLES],
    pub ca_distance: f64,
    /// Secondary-structure codes of the four residues.
    pub secondary_structure: String,
}

/// Run the eligibility checks on a window of four residue records.
pub fn check_window(
    window: &[ResidueRecord],
    options: &ScanOptions,
) -> Result<EligibleWindow, Rejection> {
    let [r1, r2, r3, r4] = window else {
        return Err(Rejection::Length(window.len()));
    };

    let (Some(ca1), Some(ca4)) = (r1.ca, r4.ca) else {
        return Err(Rejection::MissingCa);
    };
    let ca_distance = ca1.distance_to(&ca4);
    if ca_distance > options.max_ca_distance {
        return Err(Rejection::CaDistance(ca_distance));
    }

    let ss: String = window
        .iter()
        .map(|r| r.annotation.secondary_structure.code())
        .collect();
    if matches!(ss.as_str(), "HGGG" | "GGGH" | "GGGG") {
        return Err(Rejection::HelixRun);
    }
    if r2.annotation.secondary_structure.is_regular()
        || r3.annotation.secondary_structure.is_regular()
    {
        return Err(Rejection::RegularMiddle);
    }
    if (ss.starts_with("GGG") || ss.ends_with("GGG"))
        && !window
            .iter()
            .any(|r| r.annotation.helix_3_10 == SHORT_HELIX_MARKER)
    {
        return Err(Rejection::LongHelix310);
    }

    let values = [
        r2.torsions.omega,
        r2.torsions.phi,
        r2.torsions.psi,
        r3.torsions.omega,
        r3.torsions.phi,
        r3.torsions.psi,
        r4.torsions.omega,
    ];
    let mut angles = [0.0; TURN_ANGLES];
    for ((slot, value), name) in angles.iter_mut().zip(values).zip(ANGLE_NAMES) {
        *slot = value.ok_or(Rejection::UndefinedAngle(name))?;
    }

    Ok(EligibleWindow {
        angles,
        ca_distance,
        secondary_structure: ss,
    })
}
