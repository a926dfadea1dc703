//! Amino-acid naming helpers.

/// The 20 standard amino acids with their one-letter codes.
const STANDARD: [(&str, char); 20] = [
    ("ALA", 'A'),
    ("CYS", 'C'),
    ("ASP", 'D'),
    ("GLU", 'E'),
    ("PHE", 'F'),
    ("GLY", 'G'),
    ("HIS", 'H'),
    ("ILE", 'I'),
    ("LYS", 'K'),
    ("LEU", 'L'),
    ("MET", 'M'),
    ("ASN", 'N'),
    ("PRO", 'P'),
    ("GLN", 'Q'),
    ("ARG", 'R'),
    ("SER", 'S'),
    ("THR", 'T'),
    ("VAL", 'V'),
    ("TRP", 'W'),
    ("TYR", 'Y'),
];

/// Modified and D-amino acids that still form part of the polypeptide
/// backbone: N-methylated, phosphorylated, oxidised and otherwise derivatised
/// residues, plus the ambiguous and unknown codes. Sorted for binary search.
const MODIFIED: &[&str] = &[
    "0CS", "2AS", "2LU", "2MR", "2MT", "3AH", "4BF", "4FB", "4HT", "5HP", "6CL", "AA4", "AAR",
    "ABA", "ACL", "AGM", "AHB", "AIB", "ALM", "ALO", "ALY", "ARM", "ASA", "ASB", "ASK", "ASL",
    "ASQ", "ASX", "AYA", "BCS", "BHD", "BMT", "BNN", "BUC", "BUG", "C5C", "C6C", "CAS", "CCS",
    "CEA", "CGU", "CHG", "CLE", "CME", "CSA", "CSB", "CSD", "CSE", "CSO", "CSP", "CSR", "CSS",
    "CSW", "CSX", "CTH", "CXM", "CY1", "CY3", "CYG", "CYM", "CYQ", "DAB", "DAH", "DAL", "DAR",
    "DAS", "DCY", "DGL", "DGN", "DHA", "DHI", "DIL", "DIV", "DLE", "DLY", "DNP", "DPN", "DPP",
    "DPR", "DSG", "DSN", "DTH", "DTR", "DTY", "DVA", "EFC", "FGL", "FLA", "FLT", "FME", "GGL",
    "GL3", "GLX", "GLZ", "GMA", "GSC", "HAC", "HAR", "HIC", "HIP", "HMR", "HPQ", "HSE", "HSK",
    "HTR", "HYP", "IAS", "IIL", "IYR", "KCX", "LLP", "LLY", "LTR", "LYM", "LYZ", "M3L", "MAA",
    "MCS", "MEA", "MED", "MEN", "MGN", "MHO", "MHS", "MIS", "MLE", "MLY", "MLZ", "MME", "MPQ",
    "MSE", "MVA", "NEM", "NEP", "NLE", "NLN", "NLP", "NMC", "OAS", "OCS", "OMT", "ORN", "PAQ",
    "PBB", "PCA", "PEC", "PHI", "PHL", "PR3", "PRR", "PTH", "PTR", "PYL", "SAC", "SAR", "SCH",
    "SCS", "SCY", "SEC", "SEP", "SET", "SHC", "SHR", "SMC", "SOC", "STY", "SVA", "TIH", "TPL",
    "TPO", "TPQ", "TRG", "TRO", "TRQ", "TYB", "TYI", "TYQ", "TYS", "TYY", "UNK", "YCM",
];

/// Whether `name` denotes an amino-acid residue (standard, modified or D-form).
pub fn is_amino_acid(name: &str) -> bool {
    let name = name.trim();
    STANDARD.iter().any(|(three, _)| *three == name) || MODIFIED.binary_search(&name).is_ok()
}

/// One-letter code of a standard amino acid, `'X'` for anything else.
pub fn one_letter_code(name: &str) -> char {
    let name = name.trim();
    STANDARD
        .iter()
        .find(|(three, _)| *three == name)
        .map_or('X', |(_, one)| *one)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_codes() {
        assert_eq!(one_letter_code("ALA"), 'A');
        assert_eq!(one_letter_code("TRP"), 'W');
        assert_eq!(one_letter_code("TYR"), 'Y');
    }

    #[test]
    fn modified_residues_are_amino_acids_with_x_code() {
        assert!(is_amino_acid("MSE"));
        assert!(is_amino_acid("SEP"));
        assert_eq!(one_letter_code("MSE"), 'X');
    }

    #[test]
    fn d_and_n_methyl_residues_are_amino_acids() {
        for name in ["DAL", "DSN", "DCY", "DPN", "MED", "SAR", "MEN", "MVA", "ORN", " DTY "] {
            assert!(is_amino_acid(name), "{}", name);
            assert_eq!(one_letter_code(name), 'X');
        }
    }

    #[test]
    fn modified_table_is_sorted_and_disjoint_from_standard() {
        assert!(MODIFIED.windows(2).all(|w| w[0] < w[1]));
        assert!(STANDARD.iter().all(|(three, _)| !MODIFIED.contains(three)));
    }

    #[test]
    fn non_amino_acids() {
        assert!(!is_amino_acid("HOH"));
        assert!(!is_amino_acid("ATP"));
        assert!(!is_amino_acid("DA"));
        assert_eq!(one_letter_code("HOH"), 'X');
    }
}
