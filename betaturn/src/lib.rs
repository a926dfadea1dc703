//! Beta-turn identification against the 18-type turn library.
//!
//! A structure is scanned chain by chain with a sliding window of four
//! residues. Each window is screened by secondary structure and geometry
//! ([`gate`]), and the survivors are assigned the library type whose medoid
//! dihedrals lie nearest ([`classify`]), provided the mean angular distance
//! is within the cutoff.
//!
//! - **Library** — the 18 reference types in [`library`]
//! - **Metric** — per-angle and mean angular distance in [`angle`]
//! - **Annotation** — DSSP records, numbering correspondence and the
//!   `mkdssp` runner in [`annotate`]
//! - **Scanning** — per-chain feature tables ([`features`]) and the
//!   [`scan::Scanner`]
//! - **Output** — text and JSON reports in [`report`]
//!
//! # Quick start
//!
//! ```no_run
//! use betaturn::annotate::Mkdssp;
//! use betaturn::{identify_turns, ScanOptions};
//!
//! let turns = identify_turns("1abc.cif", &Mkdssp::default(), &ScanOptions::default())?;
//! for t in &turns {
//!     println!("{} {} {} {}", t.chain_id, t.res1, t.code, t.distance);
//! }
//! # Ok::<(), betaturn_core::BetaTurnError>(())
//! ```

pub mod angle;
pub mod annotate;
pub mod classify;
pub mod features;
pub mod gate;
pub mod library;
pub mod options;
pub mod report;
pub mod scan;

#[cfg(test)]
mod testutil;

use std::path::Path;

use betaturn_core::{Result, Summarizable};

pub use angle::{angular_distance, deviation_degrees, mean_distance, TURN_ANGLES};
pub use annotate::{AnnotationTable, SecondaryStructure, SecondaryStructureSource};
pub use classify::{Classifier, TurnMatch};
pub use library::{TurnCluster, TurnLibrary};
pub use options::ScanOptions;
pub use scan::{Scanner, TurnAssignment};

/// Residues in a turn window.
pub const WINDOW: usize = 4;

/// Read a structure file, annotate it and scan it for turns.
pub fn identify_turns(
    path: impl AsRef<Path>,
    annotator: &dyn SecondaryStructureSource,
    options: &ScanOptions,
) -> Result<Vec<TurnAssignment>> {
    options.validate()?;
    let path = path.as_ref();
    let structure = betaturn_struct::read_structure(path)?;
    log::info!("{}: {}", path.display(), structure.summary());
    let annotations = annotator.annotate(path)?;
    let turns = Scanner::new(*options).scan_structure(&structure, &annotations)?;
    log::info!(
        "{}",
        report::TurnSummary::new(&turns, &TurnLibrary::standard()).summary()
    );
    Ok(turns)
}
