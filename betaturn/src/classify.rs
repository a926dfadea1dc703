//! Nearest-medoid classification of turn angles.

use betaturn_core::Scored;

use crate::angle::{mean_distance, TURN_ANGLES};
use crate::library::{TurnCluster, TurnLibrary};
use crate::options::DEFAULT_DISTANCE_CUTOFF;

/// The closest library type to a set of turn angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnMatch {
    pub cluster: &'static TurnCluster,
    /// Mean angular distance to the cluster medoid, in [0, 4].
    pub distance: f64,
}

impl Scored for TurnMatch {
    fn score(&self) -> f64 {
        self.distance
    }
}

/// Assigns turn types by distance to the library medoids.
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    library: TurnLibrary,
    cutoff: f64,
}

impl Classifier {
    pub fn new(library: TurnLibrary, cutoff: f64) -> Self {
        Self { library, cutoff }
    }

    /// The 18-type library with the default cutoff.
    pub fn standard() -> Self {
        Self::new(TurnLibrary::standard(), DEFAULT_DISTANCE_CUTOFF)
    }

    pub fn library(&self) -> &TurnLibrary {
        &self.library
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Distance from `angles` to every type, in library order.
    pub fn scores<'a>(
        &'a self,
        angles: &'a [f64; TURN_ANGLES],
    ) -> impl Iterator<Item = TurnMatch> + 'a {
        self.library.iter().map(move |cluster| TurnMatch {
            cluster,
            distance: mean_distance(angles, &cluster.medoid),
        })
    }

    /// The nearest type regardless of the cutoff. On a tie the type listed
    /// first in the library wins. `None` only for an empty library.
    pub fn nearest(&self, angles: &[f64; TURN_ANGLES]) -> Option<TurnMatch> {
        self.scores(angles).fold(None, |best, m| match best {
            Some(b) if !(m.distance < b.distance) => Some(b),
            _ => Some(m),
        })
    }

    /// The nearest type if it lies within the cutoff.
    pub fn classify(&self, angles: &[f64; TURN_ANGLES]) -> Option<TurnMatch> {
        self.nearest(angles).filter(|m| m.distance <= self.cutoff)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::angular_distance;
    use crate::library::TurnLibrary;

    #[test]
    fn every_medoid_classifies_as_itself() {
        let classifier = Classifier::standard();
        for cluster in TurnLibrary::standard().iter() {
            let m = classifier.classify(&cluster.medoid).unwrap();
            assert_eq!(m.cluster.code, cluster.code);
            assert!(m.distance.abs() < 1e-12);
        }
    }

    #[test]
    fn exact_medoid_accepted_with_zero_distance() {
        // AD is further than the cutoff from every other medoid.
        let lib = TurnLibrary::standard();
        let ad = lib.get("AD").unwrap();
        for other in lib.iter().filter(|c| c.code != "AD") {
            assert!(mean_distance(&ad.medoid, &other.medoid) > 0.2359);
        }
        let m = Classifier::standard().classify(&ad.medoid).unwrap();
        assert_eq!(m.cluster.code, "AD");
        assert_eq!(format!("{:.2}", m.distance), "0.00");
    }

    #[test]
    fn wrapped_angles_match() {
        // 184.88 and -175.12 are the same direction.
        let mut angles = TurnLibrary::standard().get("AD").unwrap().medoid;
        for a in angles.iter_mut() {
            if *a > 180.0 {
                *a -= 360.0;
            }
        }
        let m = Classifier::standard().classify(&angles).unwrap();
        assert_eq!(m.cluster.code, "AD");
        assert!(m.distance < 1e-12);
    }

    #[test]
    fn orthogonal_window_rejected() {
        // Every angle 90 degrees from the AD medoid: each term is exactly 2.
        let ad = TurnLibrary::standard().get("AD").unwrap();
        let angles = ad.medoid.map(|a| a + 90.0);
        let d = mean_distance(&angles, &ad.medoid);
        assert!((d - 2.0).abs() < 1e-12);
        for (a, b) in angles.iter().zip(ad.medoid.iter()) {
            assert!((angular_distance(*a, *b) - 2.0).abs() < 1e-12);
        }
        assert!(Classifier::new(TurnLibrary::standard(), 0.2359)
            .scores(&angles)
            .find(|m| m.cluster.code == "AD")
            .is_some_and(|m| m.distance > 0.2359));
    }

    #[test]
    fn far_window_not_classified() {
        // All-zero dihedrals (cis everything) are far from every type.
        let angles = [0.0; TURN_ANGLES];
        let classifier = Classifier::standard();
        assert!(classifier.nearest(&angles).is_some());
        assert!(classifier.classify(&angles).is_none());
        assert!(classifier.scores(&angles).all(|m| m.distance > 0.2359));
    }

    #[test]
    fn first_type_wins_ties() {
        // A duplicated entry gives an exact tie.
        static DUPLICATED: std::sync::OnceLock<Vec<TurnCluster>> = std::sync::OnceLock::new();
        let clusters = DUPLICATED.get_or_init(|| {
            let ad = *TurnLibrary::standard().get("AD").unwrap();
            let mut twin = ad;
            twin.code = "AD2";
            vec![ad, twin]
        });
        let library = TurnLibrary::from_static(clusters);
        let m = Classifier::new(library, 0.2359)
            .classify(&clusters[0].medoid)
            .unwrap();
        assert_eq!(m.cluster.code, "AD");
    }

    #[test]
    fn cutoff_is_inclusive() {
        let ad = TurnLibrary::standard().get("AD").unwrap();
        let mut angles = ad.medoid;
        angles[1] += 30.0;
        let d = mean_distance(&angles, &ad.medoid);
        let at = Classifier::new(TurnLibrary::standard(), d);
        assert_eq!(at.classify(&angles).unwrap().cluster.code, "AD");
        let below = Classifier::new(TurnLibrary::standard(), d - 1e-9);
        assert!(below.classify(&angles).is_none());
    }
}
