//! Scanning whole structures for beta turns.

use betaturn_core::{Result, Scored};
use betaturn_struct::Structure;

use crate::angle::{deviation_degrees, TURN_ANGLES};
use crate::annotate::AnnotationTable;
use crate::classify::Classifier;
use crate::features::FeatureTable;
use crate::gate::check_window;
use crate::library::TurnLibrary;
use crate::options::ScanOptions;

/// One accepted turn.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TurnAssignment {
    /// 1-based position among all turns of the run.
    pub index: usize,
    pub model: u32,
    pub chain_id: String,
    /// Author number of the first residue.
    pub res1: i32,
    /// `res1 + 3`.
    pub res4: i32,
    /// One-letter codes of the four residues.
    pub sequence: String,
    /// Secondary-structure codes of the four residues.
    pub secondary_structure: String,
    pub code: &'static str,
    pub prev_name: &'static str,
    /// Mean angular distance to the medoid.
    pub distance: f64,
    /// `distance` as a single angle, in degrees.
    pub deviation: f64,
    /// CA(1)-CA(4) distance in Angstroms.
    pub ca_distance: f64,
    /// omega2, phi2, psi2, omega3, phi3, psi3, omega4.
    pub angles: [f64; TURN_ANGLES],
}

impl Scored for TurnAssignment {
    fn score(&self) -> f64 {
        self.distance
    }
}

/// Classifies every window of every chain of a structure.
#[derive(Debug, Clone, Copy)]
pub struct Scanner {
    classifier: Classifier,
    options: ScanOptions,
}

impl Scanner {
    pub fn new(options: ScanOptions) -> Self {
        Self {
            classifier: Classifier::new(TurnLibrary::standard(), options.distance_cutoff),
            options,
        }
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Scan every model and chain in file order.
    ///
    /// Chains with fewer than four amino acids are skipped. Turn indices run
    /// across the whole structure.
    pub fn scan_structure(
        &self,
        structure: &Structure,
        annotations: &AnnotationTable,
    ) -> Result<Vec<TurnAssignment>> {
        let mut turns = Vec::new();
        for model in &structure.models {
            for chain in &model.chains {
                if let Some(table) = FeatureTable::build(model.serial, chain, annotations) {
                    self.scan_table(&table, &mut turns)?;
                }
            }
        }
        log::info!("{}: {} turn(s)", structure.id, turns.len());
        Ok(turns)
    }

    /// Scan the windows of one chain, appending accepted turns to `turns`.
    ///
    /// Overlapping windows are reported independently.
    pub fn scan_table(&self, table: &FeatureTable, turns: &mut Vec<TurnAssignment>) -> Result<()> {
        let before = turns.len();
        for window in table.windows() {
            let eligible = match check_window(window, &self.options) {
                Ok(eligible) => eligible,
                Err(reason) => {
                    log::trace!(
                        "chain '{}' residue {}: {}",
                        table.chain_id,
                        window[0].seq_num,
                        reason
                    );
                    continue;
                }
            };
            let Some(found) = self.classifier.classify(&eligible.angles) else {
                continue;
            };

            let res1 = window[0].seq_num;
            turns.push(TurnAssignment {
                index: turns.len() + 1,
                model: table.model,
                chain_id: table.chain_id.clone(),
                res1,
                res4: res1 + 3,
                sequence: window.iter().map(|r| r.code).collect(),
                secondary_structure: eligible.secondary_structure,
                code: found.cluster.code,
                prev_name: found.cluster.prev_name,
                distance: found.distance,
                deviation: deviation_degrees(found.distance)?,
                ca_distance: eligible.ca_distance,
                angles: eligible.angles,
            });
        }
        log::debug!(
            "model {} chain '{}': {} residue(s), {} turn(s)",
            table.model,
            table.chain_id,
            table.len(),
            turns.len() - before
        );
        Ok(())
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(ScanOptions::default())
    }
}

/// Scan a structure with default thresholds.
pub fn find_turns(structure: &Structure, annotations: &AnnotationTable) -> Result<Vec<TurnAssignment>> {
    Scanner::default().scan_structure(structure, annotations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::{ResidueAnnotation, SecondaryStructure};
    use crate::testutil::{backbone, chain_from, extended, turn, STRAND};
    use betaturn_struct::{Model, Residue};

    fn medoid(code: &str) -> [f64; TURN_ANGLES] {
        TurnLibrary::standard().get(code).unwrap().medoid
    }

    fn structure(models: Vec<Vec<betaturn_struct::Chain>>) -> Structure {
        Structure {
            id: "TEST".into(),
            models: models
                .into_iter()
                .enumerate()
                .map(|(i, chains)| Model::new(i as u32 + 1, chains))
                .collect(),
        }
    }

    fn annotate(chain: &str, residues: &[Residue], ss: &str) -> AnnotationTable {
        let mut table = AnnotationTable::default();
        for (res, code) in residues.iter().zip(ss.chars()) {
            table.insert(
                chain,
                res.seq_num,
                ResidueAnnotation {
                    secondary_structure: SecondaryStructure::from_code(code).unwrap(),
                    helix_3_10: '.',
                },
            );
        }
        table
    }

    #[test]
    fn four_residue_chain_yields_one_turn() {
        let residues = turn(10, &medoid("AD"));
        let s = structure(vec![vec![chain_from("A", residues.clone())]]);
        let turns = find_turns(&s, &annotate("A", &residues, "CTTC")).unwrap();
        assert_eq!(turns.len(), 1);
        let t = &turns[0];
        assert_eq!(t.index, 1);
        assert_eq!(t.code, "AD");
        assert_eq!(t.prev_name, "I");
        assert_eq!((t.res1, t.res4), (10, 13));
        assert_eq!(t.sequence, "AAAA");
        assert_eq!(t.secondary_structure, "CTTC");
        assert!(t.distance < 1e-8);
        assert!(t.deviation < 0.1);
        assert!((t.ca_distance - 5.0).abs() < 0.1);
        assert_eq!(t.score(), t.distance);
    }

    #[test]
    fn short_chain_yields_nothing() {
        let residues: Vec<Residue> = turn(1, &medoid("AD")).into_iter().take(3).collect();
        let s = structure(vec![vec![chain_from("A", residues)]]);
        assert!(find_turns(&s, &AnnotationTable::default()).unwrap().is_empty());
    }

    #[test]
    fn unannotated_residues_scan_as_coil() {
        let residues = turn(1, &medoid("Pd"));
        let s = structure(vec![vec![chain_from("A", residues)]]);
        let turns = find_turns(&s, &AnnotationTable::default()).unwrap();
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].code, "Pd");
        assert_eq!(turns[0].secondary_structure, "CCCC");
    }

    #[test]
    fn helix_annotation_suppresses_turn() {
        let residues = turn(1, &medoid("AD"));
        let s = structure(vec![vec![chain_from("A", residues.clone())]]);
        let turns = find_turns(&s, &annotate("A", &residues, "HGGG")).unwrap();
        assert!(turns.is_empty());
    }

    #[test]
    fn numbering_gap_prevents_turn() {
        let mut residues = turn(1, &medoid("AD"));
        residues[2].seq_num = 4;
        residues[3].seq_num = 5;
        let s = structure(vec![vec![chain_from("A", residues)]]);
        assert!(find_turns(&s, &AnnotationTable::default()).unwrap().is_empty());
    }

    #[test]
    fn modified_residues_inside_turn_are_kept() {
        for name in ["DSN", "SAR", "MEN", "DCY", "ORN", "MSE"] {
            let mut residues = turn(1, &medoid("AD"));
            residues[2].name = name.into();
            let s = structure(vec![vec![chain_from("A", residues)]]);
            let turns = find_turns(&s, &AnnotationTable::default()).unwrap();
            assert_eq!(turns.len(), 1, "{}", name);
            assert_eq!(turns[0].code, "AD");
            assert_eq!(turns[0].sequence, "AAXA");
        }
    }

    #[test]
    fn non_amino_acid_inside_turn_breaks_it() {
        let mut residues = turn(1, &medoid("AD"));
        residues[2].name = "HOH".into();
        let s = structure(vec![vec![chain_from("A", residues)]]);
        assert!(find_turns(&s, &AnnotationTable::default()).unwrap().is_empty());
    }

    #[test]
    fn strand_has_no_turns() {
        let s = structure(vec![vec![chain_from("A", extended(&[1, 2, 3, 4, 5, 6, 7, 8]))]]);
        assert!(find_turns(&s, &AnnotationTable::default()).unwrap().is_empty());
    }

    #[test]
    fn overlapping_windows_reported_independently() {
        // Two consecutive type I turns share residues 2-4.
        let ad = medoid("AD");
        let residues = backbone(
            &[1, 2, 3, 4, 5],
            &[
                STRAND,
                (ad[1], ad[2], ad[0]),
                (ad[4], ad[5], ad[3]),
                (ad[4], ad[5], ad[6]),
                (STRAND.0, STRAND.1, ad[6]),
            ],
        );
        let s = structure(vec![vec![chain_from("A", residues)]]);
        let turns = find_turns(&s, &AnnotationTable::default()).unwrap();
        assert!(!turns.is_empty());
        assert_eq!(turns[0].res1, 1);
        assert!(turns.windows(2).all(|w| w[1].index == w[0].index + 1));
    }

    #[test]
    fn indices_run_across_chains_and_models() {
        let a = turn(1, &medoid("AD"));
        let b = turn(20, &medoid("ad"));
        let s = structure(vec![
            vec![chain_from("A", a.clone()), chain_from("B", b.clone())],
            vec![chain_from("A", a)],
        ]);
        let turns = find_turns(&s, &AnnotationTable::default()).unwrap();
        let summary: Vec<_> = turns
            .iter()
            .map(|t| (t.index, t.model, t.chain_id.as_str(), t.code))
            .collect();
        assert_eq!(
            summary,
            vec![(1, 1, "A", "AD"), (2, 1, "B", "ad"), (3, 2, "A", "AD")]
        );
    }

    #[test]
    fn every_library_type_recovered_from_coordinates() {
        let lib = TurnLibrary::standard();
        let scanner = Scanner::new(ScanOptions {
            max_ca_distance: 10.0,
            ..Default::default()
        });
        for cluster in lib.iter() {
            let residues = turn(1, &cluster.medoid);
            let s = structure(vec![vec![chain_from("A", residues)]]);
            let turns = scanner.scan_structure(&s, &AnnotationTable::default()).unwrap();
            assert_eq!(turns.len(), 1, "{}", cluster.code);
            assert_eq!(turns[0].code, cluster.code);
            assert!(turns[0].distance < 1e-8, "{}", cluster.code);
        }
    }
}
