//! Coordinate geometry: distances and dihedrals.

use crate::types::{Atom, Point3D};

/// Euclidean distance between two atoms.
pub fn distance(a1: &Atom, a2: &Atom) -> f64 {
    distance_points(&a1.coords, &a2.coords)
}

/// Euclidean distance between two points.
pub fn distance_points(p1: &Point3D, p2: &Point3D) -> f64 {
    p1.distance_to(p2)
}

/// Dihedral (torsion) angle in degrees defined by four points, in (-180, 180].
///
/// Follows the IUPAC sign convention: looking down the `p2 -> p3` bond, a
/// clockwise rotation of `p1` onto `p4` is positive.
pub fn dihedral_points(p1: &Point3D, p2: &Point3D, p3: &Point3D, p4: &Point3D) -> f64 {
    let b1 = p2.sub(p1);
    let b2 = p3.sub(p2);
    let b3 = p4.sub(p3);

    let n1 = b1.cross(&b2);
    let n2 = b2.cross(&b3);

    let m1 = n1.cross(&b2.normalize());

    let x = n1.dot(&n2);
    let y = m1.dot(&n2);

    (-y).atan2(x).to_degrees()
}
