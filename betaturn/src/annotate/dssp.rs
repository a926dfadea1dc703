//! Readers for the tables mkdssp writes into its mmCIF output.

use std::collections::HashMap;

use betaturn_core::{BetaTurnError, Result};
use betaturn_struct::cif::{self, CifRecord};

use super::SecondaryStructure;

/// One row of `_dssp_struct_summary`.
#[derive(Debug, Clone, PartialEq)]
pub struct DsspRecord {
    pub label_asym_id: String,
    /// 1-based position within the entity sequence.
    pub label_seq_id: i32,
    pub comp_id: Option<String>,
    pub secondary_structure: SecondaryStructure,
    pub helix_3_10: char,
}

/// Parse the `_dssp_struct_summary` loop.
///
/// A file without the loop yields no records. Rows lacking a label key are
/// skipped; an unknown secondary-structure code is an error.
pub fn parse_struct_summary(input: &str) -> Result<Vec<DsspRecord>> {
    let Some(table) = cif::find_loop(input, "_dssp_struct_summary") else {
        log::warn!("no _dssp_struct_summary loop in annotator output");
        return Ok(Vec::new());
    };

    let mut records = Vec::with_capacity(table.len());
    for row in table.records() {
        let (Some(asym), Some(seq)) = (row.get("label_asym_id"), row.get("label_seq_id")) else {
            continue;
        };
        let label_seq_id = parse_int(&row, "label_seq_id", seq)?;
        let secondary_structure = match row.get("secondary_structure") {
            Some(code) => parse_code(code)?,
            None => SecondaryStructure::C,
        };
        let helix_3_10 = row
            .raw("helix_3_10")
            .and_then(|s| s.chars().next())
            .unwrap_or('.');

        records.push(DsspRecord {
            label_asym_id: asym.to_string(),
            label_seq_id,
            comp_id: row.get("label_comp_id").map(str::to_string),
            secondary_structure,
            helix_3_10,
        });
    }
    Ok(records)
}

fn parse_code(code: &str) -> Result<SecondaryStructure> {
    let mut chars = code.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => SecondaryStructure::from_code(c),
        _ => Err(BetaTurnError::Parse(format!(
            "secondary structure code '{}' is not a single character",
            code
        ))),
    }
}

fn parse_int(row: &CifRecord<'_>, item: &str, value: &str) -> Result<i32> {
    value.parse::<i32>().map_err(|e| {
        BetaTurnError::Parse(format!(
            "bad _dssp_struct_summary.{} value '{}' in row {}: {}",
            item,
            value,
            row.index(),
            e
        ))
    })
}

/// Correspondence between author numbering and the annotator's labels.
///
/// Keyed by (author chain id, author residue number) and read from
/// `_pdbx_poly_seq_scheme`. The chain comes from `pdb_strand_id`, falling
/// back to `asym_id`; the number from `pdb_seq_num`, falling back to
/// `auth_seq_num`. Insertion codes are not part of the key.
#[derive(Debug, Clone, Default)]
pub struct NumberingTable {
    map: HashMap<(String, i32), (String, i32)>,
}

impl NumberingTable {
    /// Parse the `_pdbx_poly_seq_scheme` loop. Rows without a usable residue
    /// number or label are skipped.
    pub fn parse(input: &str) -> Self {
        let mut table = Self::default();
        let Some(scheme) = cif::find_loop(input, "_pdbx_poly_seq_scheme") else {
            return table;
        };

        for row in scheme.records() {
            let chain = row
                .get("pdb_strand_id")
                .or_else(|| row.get("asym_id"))
                .unwrap_or("");
            let auth = row
                .get("pdb_seq_num")
                .or_else(|| row.get("auth_seq_num"))
                .and_then(|s| s.parse::<i32>().ok());
            let label = row
                .get("asym_id")
                .zip(row.get("seq_id").and_then(|s| s.parse::<i32>().ok()));

            match (auth, label) {
                (Some(auth), Some((asym_id, seq_id))) => {
                    table.insert(chain, auth, asym_id.to_string(), seq_id);
                }
                _ => log::debug!(
                    "skipping _pdbx_poly_seq_scheme row {} without numbering",
                    row.index()
                ),
            }
        }
        table
    }

    /// Record that author residue (`chain_id`, `auth_seq_num`) is labelled
    /// (`asym_id`, `seq_id`). A later entry for the same key replaces the earlier one.
    pub fn insert(&mut self, chain_id: &str, auth_seq_num: i32, asym_id: String, seq_id: i32) {
        self.map
            .insert((chain_id.trim().to_string(), auth_seq_num), (asym_id, seq_id));
    }

    /// The label of an author-numbered residue.
    pub fn get(&self, chain_id: &str, auth_seq_num: i32) -> Option<(&str, i32)> {
        self.map
            .get(&(chain_id.trim().to_string(), auth_seq_num))
            .map(|(asym, seq)| (asym.as_str(), *seq))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DSSP_OUTPUT: &str = "\
data_1B9O
#
loop_
_pdbx_poly_seq_scheme.asym_id
_pdbx_poly_seq_scheme.entity_id
_pdbx_poly_seq_scheme.seq_id
_pdbx_poly_seq_scheme.mon_id
_pdbx_poly_seq_scheme.pdb_seq_num
_pdbx_poly_seq_scheme.auth_seq_num
_pdbx_poly_seq_scheme.pdb_mon_id
_pdbx_poly_seq_scheme.pdb_strand_id
A 1 1 LYS 17 17 LYS A
A 1 2 TYR 18 18 TYR A
A 1 3 GLY 19 19 GLY A
A 1 4 GLY 20 20 GLY A
A 1 5 SER 21 ? ? A
#
loop_
_dssp_struct_summary.entry_id
_dssp_struct_summary.label_asym_id
_dssp_struct_summary.label_seq_id
_dssp_struct_summary.label_comp_id
_dssp_struct_summary.secondary_structure
_dssp_struct_summary.ss_bridge
_dssp_struct_summary.helix_3_10
_dssp_struct_summary.helix_alpha
1B9O A 1 LYS . . > .
1B9O A 2 TYR G . X .
1B9O A 3 GLY G . 3 .
1B9O A 4 GLY G . < .
#
";

    #[test]
    fn struct_summary_rows() {
        let records = parse_struct_summary(DSSP_OUTPUT).unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].secondary_structure, SecondaryStructure::C);
        assert_eq!(records[0].helix_3_10, '>');
        assert_eq!(records[2].label_seq_id, 3);
        assert_eq!(records[2].secondary_structure, SecondaryStructure::G);
        assert_eq!(records[2].helix_3_10, '3');
        assert_eq!(records[3].comp_id.as_deref(), Some("GLY"));
    }

    #[test]
    fn missing_helix_column_defaults() {
        let input = "\
loop_
_dssp_struct_summary.label_asym_id
_dssp_struct_summary.label_seq_id
_dssp_struct_summary.secondary_structure
A 1 H
A 2 .
#
";
        let records = parse_struct_summary(input).unwrap();
        assert_eq!(records[0].helix_3_10, '.');
        assert_eq!(records[0].secondary_structure, SecondaryStructure::H);
        assert_eq!(records[1].secondary_structure, SecondaryStructure::C);
    }

    #[test]
    fn bad_code_is_error() {
        let input = "\
loop_
_dssp_struct_summary.label_asym_id
_dssp_struct_summary.label_seq_id
_dssp_struct_summary.secondary_structure
A 1 Z
#
";
        assert!(parse_struct_summary(input).is_err());
    }

    #[test]
    fn absent_summary_is_empty() {
        assert!(parse_struct_summary("data_X\n#\n").unwrap().is_empty());
    }

    #[test]
    fn numbering_by_author_keys() {
        let table = NumberingTable::parse(DSSP_OUTPUT);
        // The SER row has pdb_seq_num 21 even though auth_seq_num is unknown.
        assert_eq!(table.len(), 5);
        assert_eq!(table.get("A", 19), Some(("A", 3)));
        assert_eq!(table.get("A", 21), Some(("A", 5)));
        assert_eq!(table.get("A", 16), None);
        assert_eq!(table.get("B", 19), None);
    }

    #[test]
    fn numbering_falls_back_to_label_chain() {
        let input = "\
loop_
_pdbx_poly_seq_scheme.asym_id
_pdbx_poly_seq_scheme.seq_id
_pdbx_poly_seq_scheme.auth_seq_num
C 1 5
C 2 6
#
";
        let table = NumberingTable::parse(input);
        assert_eq!(table.get("C", 6), Some(("C", 2)));
    }

    #[test]
    fn blank_chain_ids_match() {
        let mut table = NumberingTable::default();
        table.insert(" ", 1, "A".into(), 1);
        assert_eq!(table.get("", 1), Some(("A", 1)));
    }
}
