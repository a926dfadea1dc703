//! The reference library of 18 beta-turn types.
//!
//! Each type is a cluster of four-residue turns described by the medoid of its
//! seven backbone dihedrals (omega2, phi2, psi2, omega3, phi3, psi3, omega4),
//! from Shapovalov, Vucetic and Dunbrack (2019), *A new clustering and
//! nomenclature for beta turns derived from high-resolution protein
//! structures*, PLoS Comput Biol 15(3): e1006844. Types are listed in
//! descending order of cluster population; classification iterates them in
//! this order.

use betaturn_core::Annotated;

use crate::angle::TURN_ANGLES;

/// A residue window from a deposited structure that represents a cluster.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Exemplar {
    /// One-letter sequence of the four residues.
    pub sequence: &'static str,
    /// DSSP codes of the four residues.
    pub secondary_structure: &'static str,
    pub pdb_id: &'static str,
    pub chain_id: &'static str,
    /// Author number of the first residue.
    pub res1: i32,
}

/// CA(1)-CA(4) distance statistics of a cluster, in Angstroms.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct CaDistanceStats {
    /// Median over members closer than 7 A.
    pub median_below_7a: f64,
    /// Mean over members closer than 7 A.
    pub mean_below_7a: f64,
    pub median_any: f64,
    pub mean_any: f64,
}

/// One beta-turn type.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct TurnCluster {
    /// Type code in the 2019 nomenclature, e.g. `AD`.
    pub code: &'static str,
    /// Name in the older Venkatachalam/Hutchinson-Thornton scheme.
    pub prev_name: &'static str,
    /// 1-based rank by cluster size.
    pub rank: u32,
    pub cluster_size: u32,
    /// Fraction of all clustered turns that fall in this type.
    pub frequency: f64,
    /// Medoid dihedrals used for classification.
    pub medoid: [f64; TURN_ANGLES],
    pub medoid_exemplar: Exemplar,
    /// Density mode of the dihedrals; descriptive only.
    pub mode: [f64; TURN_ANGLES],
    pub mode_exemplar: Exemplar,
    pub ca1_ca4: CaDistanceStats,
}

impl Annotated for TurnCluster {
    fn name(&self) -> &str {
        self.code
    }

    fn description(&self) -> Option<&str> {
        Some(self.prev_name)
    }
}

/// Read-only view over the turn types, in classification order.
#[derive(Debug, Clone, Copy)]
pub struct TurnLibrary {
    clusters: &'static [TurnCluster],
}

impl TurnLibrary {
    /// The 18-type library.
    pub fn standard() -> Self {
        Self {
            clusters: &STANDARD_CLUSTERS,
        }
    }

    /// A library over a caller-supplied table, in the given order.
    pub fn from_static(clusters: &'static [TurnCluster]) -> Self {
        Self { clusters }
    }

    /// Look up a type by its code (case-sensitive: `Pd` and `pD` differ).
    pub fn get(&self, code: &str) -> Option<&'static TurnCluster> {
        self.clusters.iter().find(|c| c.code == code)
    }

    /// Iterate over the types in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &'static TurnCluster> {
        self.clusters.iter()
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}

impl Default for TurnLibrary {
    fn default() -> Self {
        Self::standard()
    }
}

static STANDARD_CLUSTERS: [TurnCluster; 18] = [
    TurnCluster {
        code: "AD",
        prev_name: "I",
        rank: 1,
        cluster_size: 6413,
        frequency: 0.49217,
        medoid: [184.88, -65.27, -23.52, 182.83, -98.73, -18.06, 181.1],
        medoid_exemplar: Exemplar {
            sequence: "PYAR",
            secondary_structure: "TTTG",
            pdb_id: "5A71",
            chain_id: "A",
            res1: 299,
        },
        mode: [185.12, -62.25, -23.48, 181.88, -96.25, -2.44, 179.02],
        mode_exemplar: Exemplar {
            sequence: "DPDG",
            secondary_structure: "CTTC",
            pdb_id: "2EAB",
            chain_id: "A",
            res1: 598,
        },
        ca1_ca4: CaDistanceStats {
            median_below_7a: 5.48,
            mean_below_7a: 5.52,
            median_any: 5.51,
            mean_any: 5.65,
        },
    },
    TurnCluster {
        code: "Pd",
        prev_name: "II",
        rank: 2,
        cluster_size: 1556,
        frequency: 0.11942,
        medoid: [178.69, -55.28, 132.76, 175.53, 82.38, -2.88, 179.6],
        medoid_exemplar: Exemplar {
            sequence: "PDGD",
            secondary_structure: "ETTC",
            pdb_id: "3QZB",
            chain_id: "A",
            res1: 62,
        },
        mode: [179.57, -55.26, 133.1, 179.6, 91.18, -6.22, 180.91],
        mode_exemplar: Exemplar {
            sequence: "TKGT",
            secondary_structure: "CTTC",
            pdb_id: "1W23",
            chain_id: "A",
            res1: 89,
        },
        ca1_ca4: CaDistanceStats {
            median_below_7a: 5.61,
            mean_below_7a: 5.62,
            median_any: 5.61,
            mean_any: 5.68,
        },
    },
    TurnCluster {
        code: "Pa",
        prev_name: "new_prev_II",
        rank: 3,
        cluster_size: 802,
        frequency: 0.06155,
        medoid: [180.97, -79.76, 149.11, 170.92, 61.47, 32.21, 180.14],
        medoid_exemplar: Exemplar {
            sequence: "GDNV",
            secondary_structure: "CTTC",
            pdb_id: "3KWE",
            chain_id: "A",
            res1: 95,
        },
        mode: [176.22, -59.93, 135.21, 178.77, 58.69, 27.54, 177.53],
        mode_exemplar: Exemplar {
            sequence: "GALD",
            secondary_structure: "CTTH",
            pdb_id: "2FFY",
            chain_id: "A",
            res1: 214,
        },
        ca1_ca4: CaDistanceStats {
            median_below_7a: 6.0,
            mean_below_7a: 5.96,
            median_any: 6.12,
            mean_any: 6.18,
        },
    },
    TurnCluster {
        code: "ad",
        prev_name: "I'",
        rank: 4,
        cluster_size: 748,
        frequency: 0.05741,
        medoid: [177.14, 54.08, 37.14, 174.19, 77.07, 7.66, 182.45],
        medoid_exemplar: Exemplar {
            sequence: "FDGK",
            secondary_structure: "ETTE",
            pdb_id: "3GNE",
            chain_id: "A",
            res1: 34,
        },
        mode: [182.81, 47.08, 44.65, 174.36, 82.66, 1.09, 182.92],
        mode_exemplar: Exemplar {
            sequence: "YKGR",
            secondary_structure: "ETTE",
            pdb_id: "3AWU",
            chain_id: "B",
            res1: 49,
        },
        ca1_ca4: CaDistanceStats {
            median_below_7a: 5.44,
            mean_below_7a: 5.52,
            median_any: 5.45,
            mean_any: 5.58,
        },
    },
    TurnCluster {
        code: "AB1",
        prev_name: "new_prev_VIII",
        rank: 5,
        cluster_size: 648,
        frequency: 0.04973,
        medoid: [178.29, -76.75, -33.07, 180.05, -137.67, 155.99, 179.53],
        medoid_exemplar: Exemplar {
            sequence: "DFYG",
            secondary_structure: "CSSC",
            pdb_id: "3ARX",
            chain_id: "A",
            res1: 392,
        },
        mode: [184.02, -67.2, -30.96, 172.54, -136.03, 162.29, 182.93],
        mode_exemplar: Exemplar {
            sequence: "PRVP",
            secondary_structure: "CSSC",
            pdb_id: "4ATE",
            chain_id: "A",
            res1: 219,
        },
        ca1_ca4: CaDistanceStats {
            median_below_7a: 6.72,
            mean_below_7a: 6.62,
            median_any: 7.52,
            mean_any: 7.5,
        },
    },
    TurnCluster {
        code: "AZ",
        prev_name: "new_prev_VIII",
        rank: 6,
        cluster_size: 625,
        frequency: 0.04797,
        medoid: [181.51, -83.81, -17.76, 182.7, -128.88, 61.72, 177.81],
        medoid_exemplar: Exemplar {
            sequence: "GNVP",
            secondary_structure: "TSSC",
            pdb_id: "3LO8",
            chain_id: "A",
            res1: 62,
        },
        mode: [181.01, -74.11, -27.71, 182.08, -140.41, 75.09, 190.54],
        mode_exemplar: Exemplar {
            sequence: "AGTP",
            secondary_structure: "TTBT",
            pdb_id: "4RFU",
            chain_id: "A",
            res1: 76,
        },
        ca1_ca4: CaDistanceStats {
            median_below_7a: 5.8,
            mean_below_7a: 5.84,
            median_any: 5.9,
            mean_any: 6.0,
        },
    },
    TurnCluster {
        code: "AB2",
        prev_name: "VIII",
        rank: 7,
        cluster_size: 603,
        frequency: 0.04628,
        medoid: [179.88, -76.37, -33.97, 184.3, -116.48, 120.1, 183.38],
        medoid_exemplar: Exemplar {
            sequence: "VAEK",
            secondary_structure: "SSSC",
            pdb_id: "4UAS",
            chain_id: "A",
            res1: 147,
        },
        mode: [175.48, -69.29, -30.16, 169.41, -120.25, 128.0, 177.81],
        mode_exemplar: Exemplar {
            sequence: "GLIK",
            secondary_structure: "TSSC",
            pdb_id: "4YPO",
            chain_id: "A",
            res1: 112,
        },
        ca1_ca4: CaDistanceStats {
            median_below_7a: 6.42,
            mean_below_7a: 6.32,
            median_any: 7.95,
            mean_any: 7.72,
        },
    },
    TurnCluster {
        code: "pD",
        prev_name: "II'",
        rank: 8,
        cluster_size: 402,
        frequency: 0.03085,
        medoid: [177.42, 56.16, -135.6, 183.17, -90.92, 4.81, 180.04],
        medoid_exemplar: Exemplar {
            sequence: "KGYD",
            secondary_structure: "ETTC",
            pdb_id: "4G9S",
            chain_id: "B",
            res1: 45,
        },
        mode: [179.73, 57.44, -130.18, 181.81, -95.43, 11.23, 181.96],
        mode_exemplar: Exemplar {
            sequence: "KGSR",
            secondary_structure: "TTTC",
            pdb_id: "3BS2",
            chain_id: "A",
            res1: 129,
        },
        ca1_ca4: CaDistanceStats {
            median_below_7a: 5.44,
            mean_below_7a: 5.6,
            median_any: 5.66,
            mean_any: 6.13,
        },
    },
    TurnCluster {
        code: "AG",
        prev_name: "new_prev_VIII",
        rank: 9,
        cluster_size: 166,
        frequency: 0.01274,
        medoid: [184.32, -71.78, -15.84, 187.19, -87.7, 74.65, 181.63],
        medoid_exemplar: Exemplar {
            sequence: "NANA",
            secondary_structure: "TTCH",
            pdb_id: "4L8A",
            chain_id: "A",
            res1: 119,
        },
        mode: [179.98, -66.42, -19.26, 176.01, -82.48, 63.16, 183.48],
        mode_exemplar: Exemplar {
            sequence: "VNRA",
            secondary_structure: "HTSC",
            pdb_id: "5HB7",
            chain_id: "A",
            res1: 199,
        },
        ca1_ca4: CaDistanceStats {
            median_below_7a: 6.37,
            mean_below_7a: 6.19,
            median_any: 7.24,
            mean_any: 7.21,
        },
    },
    TurnCluster {
        code: "BcisP",
        prev_name: "VIb",
        rank: 10,
        cluster_size: 135,
        frequency: 0.01036,
        medoid: [176.27, -127.05, 120.42, 358.0, -65.63, 161.27, 182.14],
        medoid_exemplar: Exemplar {
            sequence: "NNPK",
            secondary_structure: "GSSC",
            pdb_id: "2BMO",
            chain_id: "B",
            res1: 110,
        },
        mode: [178.76, -137.53, 119.38, 359.11, -66.49, 163.88, 179.76],
        mode_exemplar: Exemplar {
            sequence: "PSPA",
            secondary_structure: "CSSC",
            pdb_id: "2CIW",
            chain_id: "A",
            res1: 228,
        },
        ca1_ca4: CaDistanceStats {
            median_below_7a: 5.7,
            mean_below_7a: 5.7,
            median_any: 6.07,
            mean_any: 6.04,
        },
    },
    TurnCluster {
        code: "dD",
        prev_name: "new",
        rank: 11,
        cluster_size: 131,
        frequency: 0.01005,
        medoid: [182.57, 99.89, -17.34, 185.02, -113.78, 9.87, 180.65],
        medoid_exemplar: Exemplar {
            sequence: "PGYE",
            secondary_structure: "TTCC",
            pdb_id: "3JQ0",
            chain_id: "A",
            res1: 521,
        },
        mode: [180.94, 94.08, -1.19, 186.08, -127.95, 15.44, 170.94],
        mode_exemplar: Exemplar {
            sequence: "DGYH",
            secondary_structure: "SSCS",
            pdb_id: "4EZI",
            chain_id: "A",
            res1: 282,
        },
        ca1_ca4: CaDistanceStats {
            median_below_7a: 6.63,
            mean_below_7a: 6.48,
            median_any: 7.79,
            mean_any: 7.62,
        },
    },
    TurnCluster {
        code: "PcisD",
        prev_name: "VIa1",
        rank: 12,
        cluster_size: 125,
        frequency: 0.00959,
        medoid: [175.04, -59.7, 144.37, 9.21, -92.77, 8.32, 175.56],
        medoid_exemplar: Exemplar {
            sequence: "DSPL",
            secondary_structure: "CTTC",
            pdb_id: "5AOZ",
            chain_id: "A",
            res1: 443,
        },
        mode: [175.04, -59.7, 144.37, 9.21, -92.77, 8.32, 175.56],
        mode_exemplar: Exemplar {
            sequence: "DSPL",
            secondary_structure: "CTTC",
            pdb_id: "5AOZ",
            chain_id: "A",
            res1: 443,
        },
        ca1_ca4: CaDistanceStats {
            median_below_7a: 5.74,
            mean_below_7a: 5.76,
            median_any: 5.76,
            mean_any: 5.8,
        },
    },
    TurnCluster {
        code: "dN",
        prev_name: "new",
        rank: 13,
        cluster_size: 102,
        frequency: 0.00783,
        medoid: [178.53, 76.06, -3.15, 179.31, -122.82, -50.46, 179.84],
        medoid_exemplar: Exemplar {
            sequence: "PGVT",
            secondary_structure: "BTTT",
            pdb_id: "4E9X",
            chain_id: "A",
            res1: 1076,
        },
        mode: [183.9, 69.32, 8.93, 177.8, -131.73, -63.28, 185.11],
        mode_exemplar: Exemplar {
            sequence: "IEHG",
            secondary_structure: "TTTE",
            pdb_id: "5AGD",
            chain_id: "A",
            res1: 232,
        },
        ca1_ca4: CaDistanceStats {
            median_below_7a: 6.42,
            mean_below_7a: 6.37,
            median_any: 7.83,
            mean_any: 7.6,
        },
    },
    TurnCluster {
        code: "Dd",
        prev_name: "new",
        rank: 14,
        cluster_size: 87,
        frequency: 0.00668,
        medoid: [177.54, -99.08, 19.56, 173.8, 108.72, -14.53, 182.16],
        medoid_exemplar: Exemplar {
            sequence: "DEGG",
            secondary_structure: "HTTG",
            pdb_id: "4HZ8",
            chain_id: "A",
            res1: 167,
        },
        mode: [182.75, -115.16, 15.69, 186.11, 100.65, -12.3, 176.58],
        mode_exemplar: Exemplar {
            sequence: "LDGS",
            secondary_structure: "SSSC",
            pdb_id: "2RFR",
            chain_id: "A",
            res1: 141,
        },
        ca1_ca4: CaDistanceStats {
            median_below_7a: 6.81,
            mean_below_7a: 6.7,
            median_any: 7.6,
            mean_any: 7.65,
        },
    },
    TurnCluster {
        code: "PcisP",
        prev_name: "new_prev_VIb",
        rank: 15,
        cluster_size: 59,
        frequency: 0.00453,
        medoid: [183.55, -78.86, 145.45, 353.82, -78.06, 140.34, 178.16],
        medoid_exemplar: Exemplar {
            sequence: "MKPQ",
            secondary_structure: "HCSC",
            pdb_id: "4UDX",
            chain_id: "X",
            res1: 35,
        },
        mode: [175.26, -66.01, 147.89, 0.25, -75.72, 142.11, 176.61],
        mode_exemplar: Exemplar {
            sequence: "DAPY",
            secondary_structure: "TCSE",
            pdb_id: "5DZE",
            chain_id: "A",
            res1: 189,
        },
        ca1_ca4: CaDistanceStats {
            median_below_7a: 6.33,
            mean_below_7a: 6.24,
            median_any: 6.74,
            mean_any: 6.79,
        },
    },
    TurnCluster {
        code: "cisDA",
        prev_name: "new",
        rank: 16,
        cluster_size: 52,
        frequency: 0.00399,
        medoid: [0.14, -97.53, 3.93, 184.13, -66.86, -35.89, 182.02],
        medoid_exemplar: Exemplar {
            sequence: "APWF",
            secondary_structure: "TTTE",
            pdb_id: "1UAI",
            chain_id: "A",
            res1: 42,
        },
        mode: [3.33, -94.18, 7.96, 187.9, -61.4, -38.41, 184.42],
        mode_exemplar: Exemplar {
            sequence: "YPDD",
            secondary_structure: "ETTT",
            pdb_id: "3VGI",
            chain_id: "A",
            res1: 56,
        },
        ca1_ca4: CaDistanceStats {
            median_below_7a: 5.36,
            mean_below_7a: 5.42,
            median_any: 5.36,
            mean_any: 5.42,
        },
    },
    TurnCluster {
        code: "pG",
        prev_name: "new",
        rank: 17,
        cluster_size: 32,
        frequency: 0.00246,
        medoid: [188.7, 68.28, -139.6, 178.07, -79.92, 121.91, 175.54],
        medoid_exemplar: Exemplar {
            sequence: "HGTQ",
            secondary_structure: "SSSC",
            pdb_id: "1KQP",
            chain_id: "A",
            res1: 81,
        },
        mode: [180.06, 73.58, -162.38, 180.27, -78.96, 77.17, 188.34],
        mode_exemplar: Exemplar {
            sequence: "LGRY",
            secondary_structure: "TCSC",
            pdb_id: "4V28",
            chain_id: "A",
            res1: 95,
        },
        ca1_ca4: CaDistanceStats {
            median_below_7a: 6.58,
            mean_below_7a: 6.43,
            median_any: 8.16,
            mean_any: 8.06,
        },
    },
    TurnCluster {
        code: "cisDP",
        prev_name: "new",
        rank: 18,
        cluster_size: 25,
        frequency: 0.00192,
        medoid: [11.1, -86.47, 4.44, 169.99, -71.39, 157.8, 175.12],
        medoid_exemplar: Exemplar {
            sequence: "APLV",
            secondary_structure: "TTSC",
            pdb_id: "3B4U",
            chain_id: "A",
            res1: 268,
        },
        mode: [11.1, -86.47, 4.44, 169.99, -71.39, 157.8, 175.12],
        mode_exemplar: Exemplar {
            sequence: "APLV",
            secondary_structure: "TTSC",
            pdb_id: "3B4U",
            chain_id: "A",
            res1: 268,
        },
        ca1_ca4: CaDistanceStats {
            median_below_7a: 6.36,
            mean_below_7a: 6.29,
            median_any: 6.52,
            mean_any: 6.6,
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::mean_distance;

    #[test]
    fn eighteen_types_in_rank_order() {
        let lib = TurnLibrary::standard();
        assert_eq!(lib.len(), 18);
        for (i, c) in lib.iter().enumerate() {
            assert_eq!(c.rank as usize, i + 1);
        }
        let sizes: Vec<u32> = lib.iter().map(|c| c.cluster_size).collect();
        assert!(sizes.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn codes_are_unique() {
        let lib = TurnLibrary::standard();
        for c in lib.iter() {
            assert_eq!(lib.iter().filter(|o| o.code == c.code).count(), 1);
        }
    }

    #[test]
    fn lookup_by_code() {
        let lib = TurnLibrary::standard();
        let ad = lib.get("AD").unwrap();
        assert_eq!(ad.prev_name, "I");
        assert_eq!(ad.medoid[1], -65.27);
        assert_eq!(lib.get("pD").unwrap().prev_name, "II'");
        assert_eq!(lib.get("Pd").unwrap().prev_name, "II");
        assert!(lib.get("XX").is_none());
        assert_eq!(ad.name(), "AD");
        assert_eq!(ad.description(), Some("I"));
    }

    #[test]
    fn frequencies_cover_most_turns() {
        // The remainder are turns not assigned to any cluster.
        let total: f64 = TurnLibrary::standard().iter().map(|c| c.frequency).sum();
        assert!(total > 0.97 && total < 1.0);
    }

    #[test]
    fn medoids_are_distinct() {
        let lib = TurnLibrary::standard();
        for a in lib.iter() {
            for b in lib.iter().filter(|b| b.code != a.code) {
                assert!(mean_distance(&a.medoid, &b.medoid) > 0.0);
            }
        }
    }

    #[test]
    fn exemplars_have_four_residues() {
        for c in TurnLibrary::standard().iter() {
            assert_eq!(c.medoid_exemplar.sequence.len(), 4);
            assert_eq!(c.medoid_exemplar.secondary_structure.len(), 4);
            assert_eq!(c.mode_exemplar.sequence.len(), 4);
        }
    }
}
