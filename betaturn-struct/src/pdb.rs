//! PDB format parser.
//!
//! Parses ATOM, HETATM, TER, HEADER and MODEL/ENDMDL records from PDB-format
//! text. Every model of a multi-model (NMR) file is kept.

use betaturn_core::{BetaTurnError, Result};

use crate::types::{Atom, Chain, Model, Point3D, Residue, Structure};

/// Parse a PDB-format string into a [`Structure`].
///
/// # Errors
///
/// Returns an error if no ATOM records are found or if an ATOM record is
/// malformed (wrong column widths, unparseable coordinates).
pub fn parse_pdb(input: &str) -> Result<Structure> {
    let mut id = String::from("UNKN");
    let mut builder = ModelBuilder::new(1);
    let mut models: Vec<Model> = Vec::new();
    let mut atom_count = 0u32;

    for line in input.lines() {
        if line.starts_with("HEADER") && line.len() >= 66 {
            let pdb_id = safe_slice(line, 62, 66).trim();
            if !pdb_id.is_empty() {
                id = pdb_id.into();
            }
        } else if line.starts_with("MODEL") {
            let serial = safe_slice(line, 10, 14)
                .trim()
                .parse::<u32>()
                .unwrap_or(models.len() as u32 + 1);
            builder.finish_into(&mut models);
            builder = ModelBuilder::new(serial);
        } else if line.starts_with("ENDMDL") {
            let next_serial = builder.serial + 1;
            builder.finish_into(&mut models);
            builder = ModelBuilder::new(next_serial);
        } else if line.starts_with("ATOM  ") || line.starts_with("HETATM") {
            let atom = parse_atom_record(line, line.starts_with("HETATM"))?;
            atom_count += 1;
            builder.push(
                parse_chain_id(line),
                parse_residue_seq(line)?,
                parse_insertion_code(line),
                parse_residue_name(line),
                atom,
            );
        } else if line.starts_with("TER") {
            builder.close_chain();
        }
    }
    builder.finish_into(&mut models);

    if atom_count == 0 {
        return Err(BetaTurnError::Parse("no ATOM records found".into()));
    }

    Ok(Structure { id, models })
}

/// Parse a PDB file from disk, decompressing gzip/zstd content transparently.
pub fn parse_pdb_file(path: impl AsRef<std::path::Path>) -> Result<Structure> {
    let contents = betaturn_core::compress::read_text(path)?;
    parse_pdb(&contents)
}

/// Groups consecutive atom records into residues and chains of one model.
struct ModelBuilder {
    serial: u32,
    chains: Vec<Chain>,
    chain_id: Option<String>,
    residues: Vec<Residue>,
    residue: Option<Residue>,
}

impl ModelBuilder {
    fn new(serial: u32) -> Self {
        Self {
            serial,
            chains: Vec::new(),
            chain_id: None,
            residues: Vec::new(),
            residue: None,
        }
    }

    fn push(
        &mut self,
        chain_id: String,
        seq_num: i32,
        i_code: Option<char>,
        name: String,
        atom: Atom,
    ) {
        if self.chain_id.as_deref() != Some(chain_id.as_str()) {
            self.close_chain();
            self.chain_id = Some(chain_id);
        }
        let same_residue = self
            .residue
            .as_ref()
            .is_some_and(|r| r.seq_num == seq_num && r.i_code == i_code && r.name == name);
        if !same_residue {
            self.close_residue();
            self.residue = Some(Residue {
                name,
                seq_num,
                i_code,
                atoms: Vec::new(),
            });
        }
        if let Some(residue) = self.residue.as_mut() {
            residue.atoms.push(atom);
        }
    }

    fn close_residue(&mut self) {
        if let Some(residue) = self.residue.take() {
            self.residues.push(residue);
        }
    }

    /// Residues of a chain id seen again after TER join the earlier chain.
    fn close_chain(&mut self) {
        self.close_residue();
        let Some(id) = self.chain_id.take() else {
            return;
        };
        if self.residues.is_empty() {
            return;
        }
        let residues = std::mem::take(&mut self.residues);
        match self.chains.iter_mut().find(|c| c.id == id) {
            Some(chain) => chain.residues.extend(residues),
            None => self.chains.push(Chain::new(id, residues)),
        }
    }

    fn finish_into(mut self, models: &mut Vec<Model>) {
        self.close_chain();
        if !self.chains.is_empty() {
            models.push(Model::new(self.serial, self.chains));
        }
    }
}

fn parse_atom_record(line: &str, is_hetatm: bool) -> Result<Atom> {
    // PDB format is fixed-width columns. We need at least 54 chars for coords.
    if line.len() < 54 {
        return Err(BetaTurnError::Parse(format!(
            "ATOM record too short ({} chars): {}",
            line.len(),
            line
        )));
    }

    let serial = safe_slice(line, 6, 11)
        .trim()
        .parse::<u32>()
        .map_err(|e| BetaTurnError::Parse(format!("bad atom serial: {}", e)))?;

    let name = safe_slice(line, 12, 16).trim().to_string();

    let alt_loc = safe_slice(line, 16, 17)
        .chars()
        .next()
        .filter(|c| *c != ' ');

    let coord = |start: usize, end: usize, axis: &str| {
        safe_slice(line, start, end)
            .trim()
            .parse::<f64>()
            .map_err(|e| BetaTurnError::Parse(format!("bad {} coordinate: {}", axis, e)))
    };
    let x = coord(30, 38, "x")?;
    let y = coord(38, 46, "y")?;
    let z = coord(46, 54, "z")?;

    let occupancy = safe_slice(line, 54, 60).trim().parse::<f64>().unwrap_or(1.0);
    let temp_factor = safe_slice(line, 60, 66).trim().parse::<f64>().unwrap_or(0.0);

    let element = Some(safe_slice(line, 76, 78).trim())
        .filter(|e| !e.is_empty())
        .map(str::to_string);

    Ok(Atom {
        serial,
        name,
        alt_loc,
        coords: Point3D::new(x, y, z),
        occupancy,
        temp_factor,
        element,
        is_hetatm,
    })
}

fn parse_chain_id(line: &str) -> String {
    safe_slice(line, 21, 22).trim().to_string()
}

fn parse_residue_seq(line: &str) -> Result<i32> {
    safe_slice(line, 22, 26)
        .trim()
        .parse::<i32>()
        .map_err(|e| BetaTurnError::Parse(format!("bad residue seq number: {}", e)))
}

fn parse_insertion_code(line: &str) -> Option<char> {
    safe_slice(line, 26, 27).chars().next().filter(|c| *c != ' ')
}

fn parse_residue_name(line: &str) -> String {
    safe_slice(line, 17, 20).trim().to_string()
}

/// Safe substring that handles short lines gracefully.
fn safe_slice(s: &str, start: usize, end: usize) -> &str {
    let len = s.len();
    if start >= len {
        return "";
    }
    s.get(start..end.min(len)).unwrap_or("")
}
