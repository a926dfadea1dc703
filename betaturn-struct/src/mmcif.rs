//! mmCIF/PDBx format parser.
//!
//! Builds a [`Structure`] from the `_atom_site` loop. Residues and chains use
//! author numbering (`auth_seq_id`, `auth_asym_id`) when present and fall
//! back to the label scheme otherwise, so numbering matches what the PDB
//! parser produces for the same entry.
//!
//! # Example
//!
//! ```
//! use betaturn_struct::mmcif::parse_mmcif;
//!
//! let mmcif_text = "\
//! data_1TST
//! #
//! loop_
//! _atom_site.group_PDB
//! _atom_site.id
//! _atom_site.type_symbol
//! _atom_site.label_atom_id
//! _atom_site.label_comp_id
//! _atom_site.label_asym_id
//! _atom_site.label_seq_id
//! _atom_site.Cartn_x
//! _atom_site.Cartn_y
//! _atom_site.Cartn_z
//! _atom_site.auth_seq_id
//! _atom_site.auth_asym_id
//! ATOM 1 N N ALA A 1 1.000 2.000 3.000 101 H
//! ATOM 2 C CA ALA A 1 2.000 2.000 3.000 101 H
//! #
//! ";
//!
//! let structure = parse_mmcif(mmcif_text).unwrap();
//! assert_eq!(structure.id, "1TST");
//! assert_eq!(structure.get_chain("H").unwrap().residues[0].seq_num, 101);
//! ```

use betaturn_core::{BetaTurnError, Result};

use crate::cif::{self, CifRecord};
use crate::types::{Atom, Chain, Model, Point3D, Residue, Structure};

/// Parse an mmCIF-format string into a [`Structure`].
///
/// # Errors
///
/// Returns an error if no `_atom_site` loop is found, if required fields are
/// missing, or if coordinate values cannot be parsed.
pub fn parse_mmcif(input: &str) -> Result<Structure> {
    let id = cif::data_block_id(input).unwrap_or("UNKN").to_string();

    let table = cif::find_loop(input, "_atom_site")
        .ok_or_else(|| BetaTurnError::Parse("no _atom_site loop found in mmCIF data".into()))?;
    if table.is_empty() {
        return Err(BetaTurnError::Parse(
            "no _atom_site records found in mmCIF".into(),
        ));
    }

    let mut models: Vec<Model> = Vec::new();

    for record in table.records() {
        let site = parse_site(&record)?;

        let mi = match models.iter().position(|m| m.serial == site.model) {
            Some(pos) => pos,
            None => {
                models.push(Model::new(site.model, Vec::new()));
                models.len() - 1
            }
        };
        let model = &mut models[mi];

        let ci = match model.chains.iter().position(|c| c.id == site.chain_id) {
            Some(pos) => pos,
            None => {
                model.chains.push(Chain::new(site.chain_id.clone(), Vec::new()));
                model.chains.len() - 1
            }
        };
        let chain = &mut model.chains[ci];

        let same_residue = chain.residues.last().is_some_and(|r| {
            r.seq_num == site.seq_num && r.i_code == site.i_code && r.name == site.comp_id
        });
        if !same_residue {
            chain.residues.push(Residue {
                name: site.comp_id,
                seq_num: site.seq_num,
                i_code: site.i_code,
                atoms: Vec::new(),
            });
        }
        if let Some(residue) = chain.residues.last_mut() {
            residue.atoms.push(site.atom);
        }
    }

    Ok(Structure { id, models })
}

/// Parse an mmCIF file from disk, decompressing gzip/zstd content transparently.
pub fn parse_mmcif_file(path: impl AsRef<std::path::Path>) -> Result<Structure> {
    let contents = betaturn_core::compress::read_text(path)?;
    parse_mmcif(&contents)
}

/// One `_atom_site` row resolved to the fields the structure model needs.
struct AtomSite {
    model: u32,
    chain_id: String,
    seq_num: i32,
    i_code: Option<char>,
    comp_id: String,
    atom: Atom,
}

fn parse_site(record: &CifRecord<'_>) -> Result<AtomSite> {
    let row = record.index();
    let is_hetatm = record.get("group_PDB") == Some("HETATM");

    let serial = parse_field::<u32>(record, "id")?;
    let name = required(record, "auth_atom_id")
        .or_else(|_| required(record, "label_atom_id"))?
        .to_string();
    let comp_id = required(record, "auth_comp_id")
        .or_else(|_| required(record, "label_comp_id"))?
        .to_string();
    let chain_id = required(record, "auth_asym_id")
        .or_else(|_| required(record, "label_asym_id"))?
        .to_string();
    let seq_num = if record.get("auth_seq_id").is_some() {
        parse_field::<i32>(record, "auth_seq_id")?
    } else {
        parse_field::<i32>(record, "label_seq_id")?
    };
    let model = match record.get("pdbx_PDB_model_num") {
        Some(_) => parse_field::<u32>(record, "pdbx_PDB_model_num")?,
        None => 1,
    };

    let x = parse_field::<f64>(record, "Cartn_x")?;
    let y = parse_field::<f64>(record, "Cartn_y")?;
    let z = parse_field::<f64>(record, "Cartn_z")?;

    let occupancy = record
        .get("occupancy")
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(1.0);
    let temp_factor = record
        .get("B_iso_or_equiv")
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(0.0);

    let atom = Atom {
        serial,
        name,
        alt_loc: record.get("label_alt_id").and_then(|s| s.chars().next()),
        coords: Point3D::new(x, y, z),
        occupancy,
        temp_factor,
        element: record.get("type_symbol").map(str::to_string),
        is_hetatm,
    };

    log::trace!("_atom_site row {} -> {}/{}{}", row, chain_id, seq_num, comp_id);

    Ok(AtomSite {
        model,
        chain_id,
        seq_num,
        i_code: record.get("pdbx_PDB_ins_code").and_then(|s| s.chars().next()),
        comp_id,
        atom,
    })
}

// ---- Field extraction helpers ----

fn required<'a>(record: &CifRecord<'a>, item: &str) -> Result<&'a str> {
    record.get(item).ok_or_else(|| {
        BetaTurnError::Parse(format!(
            "missing field _atom_site.{} in row {}",
            item,
            record.index()
        ))
    })
}

fn parse_field<T>(record: &CifRecord<'_>, item: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let s = required(record, item)?;
    s.parse::<T>().map_err(|e| {
        BetaTurnError::Parse(format!(
            "bad _atom_site.{} value '{}' in row {}: {}",
            item,
            s,
            record.index(),
            e
        ))
    })
}
