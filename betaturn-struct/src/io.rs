//! Format detection for structure files.

use std::path::Path;

use betaturn_core::{BetaTurnError, Result};

use crate::types::Structure;

/// Coordinate file formats understood by [`read_structure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureFormat {
    Pdb,
    Mmcif,
}

impl StructureFormat {
    /// Guess the format from a file name, looking through `.gz`/`.zst` suffixes.
    ///
    /// Returns `None` for extensions that are not structure files.
    pub fn from_path(path: &Path) -> Option<Self> {
        let lower = path.file_name()?.to_str()?.to_ascii_lowercase();
        let name = lower
            .strip_suffix(".gz")
            .or_else(|| lower.strip_suffix(".zst"))
            .unwrap_or(&lower);
        let ext = name.rsplit_once('.').map(|(_, ext)| ext)?;
        match ext {
            "cif" | "mmcif" => Some(Self::Mmcif),
            "pdb" | "ent" => Some(Self::Pdb),
            _ => None,
        }
    }
}

/// Read a PDB or mmCIF file, choosing the parser from its extension.
///
/// Compressed files are decompressed transparently.
///
/// # Errors
///
/// Returns [`BetaTurnError::InvalidInput`] for an unrecognised extension, and
/// propagates I/O and parse errors from the underlying reader.
pub fn read_structure(path: impl AsRef<Path>) -> Result<Structure> {
    let path = path.as_ref();
    let format = StructureFormat::from_path(path).ok_or_else(|| {
        BetaTurnError::InvalidInput(format!(
            "cannot tell the structure format of {}; expected .cif, .mmcif, .pdb or .ent",
            path.display()
        ))
    })?;
    log::debug!("reading {} as {:?}", path.display(), format);
    match format {
        StructureFormat::Mmcif => crate::mmcif::parse_mmcif_file(path),
        StructureFormat::Pdb => crate::pdb::parse_pdb_file(path),
    }
}
