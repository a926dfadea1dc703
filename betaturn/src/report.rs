//! Text and JSON rendering of scan results.
//!
//! The text layout is one header line followed by one fixed-width `turn` line
//! per assignment; columns line up with the header for type codes up to five
//! characters and legacy names up to thirteen.

use std::io::Write;
use std::path::Path;

use betaturn_core::{BetaTurnError, Result, Summarizable};

use crate::library::TurnLibrary;
use crate::scan::TurnAssignment;

/// Short name of a structure file: no directory, no `.gz`/`.zst`, no
/// final extension.
pub fn source_tag(path: impl AsRef<Path>) -> String {
    let name = path
        .as_ref()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = name
        .strip_suffix(".gz")
        .or_else(|| name.strip_suffix(".zst"))
        .unwrap_or(&name);
    Path::new(name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string())
}

/// Column header of the text report.
pub fn header() -> String {
    format!(
        "{:<4} {:>4} {:<4} {:<4} {:<4}    {:<4} {:<4}    {:<5}  {:<13}    {:>6} {:>7} {:>7}    {:>7} {:>7} {:>7}  {:>7} {:>7}  {:>7} {:>7}   {}",
        "turn", "num", "chn", "res1", "res4", "seq", "dssp", "type", "prev_name", "Dist",
        "DistAng", "CA1-CA4", "omega2", "phi2", "psi2", "omega3", "phi3", "psi3", "omega4",
        "filename"
    )
}

/// One line of the text report.
pub fn format_turn(turn: &TurnAssignment, source: &str) -> String {
    let [omega2, phi2, psi2, omega3, phi3, psi3, omega4] = turn.angles;
    format!(
        "turn {:4} {:4} {:4} {:4}    {:4} {:4}    {:5}  {:13}    {:6.4} {:7.2} {:7.2}    {:7.2} {:7.2} {:7.2}  {:7.2} {:7.2}  {:7.2} {:7.2}   {}",
        turn.index,
        turn.chain_id,
        turn.res1,
        turn.res4,
        turn.sequence,
        turn.secondary_structure,
        turn.code,
        turn.prev_name,
        turn.distance,
        turn.deviation,
        turn.ca_distance,
        omega2,
        phi2,
        psi2,
        omega3,
        phi3,
        psi3,
        omega4,
        source
    )
}

/// Write the header and one line per turn.
pub fn write_text<W: Write>(out: &mut W, turns: &[TurnAssignment], source: &str) -> Result<()> {
    writeln!(out, "{}", header())?;
    for turn in turns {
        writeln!(out, "{}", format_turn(turn, source))?;
    }
    Ok(())
}

#[derive(serde::Serialize)]
struct Report<'a> {
    source: &'a str,
    turns: &'a [TurnAssignment],
}

/// Write turns as a pretty-printed JSON object `{ "source", "turns" }`.
pub fn write_json<W: Write>(out: &mut W, turns: &[TurnAssignment], source: &str) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &Report { source, turns })
        .map_err(|e| BetaTurnError::Other(e.to_string()))?;
    writeln!(out)?;
    Ok(())
}

/// Print the reference library, one type per line.
pub fn write_library<W: Write>(out: &mut W, library: &TurnLibrary) -> Result<()> {
    writeln!(
        out,
        "{:>4} {:<5}  {:<13} {:>6} {:>7}    {:>7} {:>7} {:>7}  {:>7} {:>7}  {:>7} {:>7} {:>7}",
        "rank", "type", "prev_name", "size", "freq", "omega2", "phi2", "psi2", "omega3", "phi3",
        "psi3", "omega4", "CA1-CA4"
    )?;
    for c in library.iter() {
        let [omega2, phi2, psi2, omega3, phi3, psi3, omega4] = c.medoid;
        writeln!(
            out,
            "{:4} {:5}  {:13} {:6} {:7.5}    {:7.2} {:7.2} {:7.2}  {:7.2} {:7.2}  {:7.2} {:7.2} {:7.2}",
            c.rank,
            c.code,
            c.prev_name,
            c.cluster_size,
            c.frequency,
            omega2,
            phi2,
            psi2,
            omega3,
            phi3,
            psi3,
            omega4,
            c.ca1_ca4.median_any
        )?;
    }
    Ok(())
}

/// Number of turns found per type, in library order.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnSummary {
    pub total: usize,
    pub counts: Vec<(&'static str, usize)>,
}

impl TurnSummary {
    pub fn new(turns: &[TurnAssignment], library: &TurnLibrary) -> Self {
        let counts = library
            .iter()
            .map(|c| (c.code, turns.iter().filter(|t| t.code == c.code).count()))
            .filter(|&(_, n)| n > 0)
            .collect();
        Self {
            total: turns.len(),
            counts,
        }
    }
}

impl Summarizable for TurnSummary {
    fn summary(&self) -> String {
        if self.counts.is_empty() {
            return format!("{} turns", self.total);
        }
        let per_type: Vec<String> = self
            .counts
            .iter()
            .map(|(code, n)| format!("{} {}", code, n))
            .collect();
        format!("{} turns ({})", self.total, per_type.join(", "))
    }
}
