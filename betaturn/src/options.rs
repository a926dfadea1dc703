//! Tunable thresholds of a scan.

use betaturn_core::{BetaTurnError, Result};

/// Mean angular distance at or below which a window is assigned a turn type.
pub const DEFAULT_DISTANCE_CUTOFF: f64 = 0.2359;

/// Largest CA(1)-CA(4) distance, in Angstroms, of a candidate turn.
pub const DEFAULT_MAX_CA_DISTANCE: f64 = 7.0;

/// Thresholds applied while scanning a structure.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    pub distance_cutoff: f64,
    pub max_ca_distance: f64,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            distance_cutoff: DEFAULT_DISTANCE_CUTOFF,
            max_ca_distance: DEFAULT_MAX_CA_DISTANCE,
        }
    }
}

impl ScanOptions {
    /// Check that both thresholds are in range.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=4.0).contains(&self.distance_cutoff) {
            return Err(BetaTurnError::InvalidInput(format!(
                "distance cutoff {} is outside [0, 4]",
                self.distance_cutoff
            )));
        }
        if !(self.max_ca_distance > 0.0 && self.max_ca_distance.is_finite()) {
            return Err(BetaTurnError::InvalidInput(format!(
                "CA1-CA4 limit {} must be a positive distance",
                self.max_ca_distance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = ScanOptions::default();
        assert_eq!(o.distance_cutoff, 0.2359);
        assert_eq!(o.max_ca_distance, 7.0);
        assert!(o.validate().is_ok());
    }

    #[test]
    fn out_of_range_rejected() {
        let o = ScanOptions {
            distance_cutoff: 4.5,
            ..Default::default()
        };
        assert!(o.validate().is_err());
        let o = ScanOptions {
            max_ca_distance: -1.0,
            ..Default::default()
        };
        assert!(o.validate().is_err());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let o: ScanOptions = serde_json::from_str(r#"{"distance_cutoff": 0.1}"#).unwrap();
        assert_eq!(o.distance_cutoff, 0.1);
        assert_eq!(o.max_ca_distance, 7.0);
    }
}
