/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Symmetry equivalence of two decorations of the same parent structure
//!
//! The reference is transformed by each operation of the parent's set and
//! compared against the candidate. The cost per candidate is proportional to
//! the size of the group, independent of the size of the combinatorial space
//! the candidate was drawn from.

use nalgebra::Vector3;

use super::apply::{apply, PeriodicFold};
use super::operations::SymmetryOperationSet;
use crate::structure::Structure;

/// Whether some operation of `operations` maps `reference` onto `candidate`
///
/// Operations are tried in stored order and the search stops at the first
/// match. Positions are compared with the detection tolerance of the set.
pub fn is_equivalent(
    operations: &SymmetryOperationSet,
    reference: &Structure,
    candidate: &Structure,
    fold: PeriodicFold,
) -> bool {
    if reference.site_count() != candidate.site_count() {
        return false;
    }
    let tolerance = operations.tolerance();

    operations.iter().any(|operation| {
        let transformed = apply(reference, operation, fold);
        match fold {
            PeriodicFold::AbsoluteLattice => site_aligned_match(&transformed, candidate, tolerance),
            PeriodicFold::WrapFractional => periodic_match(&transformed, candidate, tolerance),
        }
    })
}

/// Site-for-site identity: equal species and Cartesian positions within tolerance
pub fn site_aligned_match(a: &Structure, b: &Structure, tolerance: f64) -> bool {
    if a.species() != b.species() {
        return false;
    }
    let to_cartesian_a = a.lattice().transpose();
    let to_cartesian_b = b.lattice().transpose();

    a.positions()
        .iter()
        .zip(b.positions())
        .all(|(pa, pb)| (to_cartesian_a * pa - to_cartesian_b * pb).norm() <= tolerance)
}

/// Identity up to a permutation of sites under periodic boundary conditions
///
/// Every site of `a` must find a site of `b` with the same species at the
/// same position modulo lattice translations of `b`.
pub fn periodic_match(a: &Structure, b: &Structure, tolerance: f64) -> bool {
    if a.site_count() != b.site_count() {
        return false;
    }
    let to_cartesian = b.lattice().transpose();
    let mut claimed = vec![false; b.site_count()];

    for (pa, &za) in a.positions().iter().zip(a.species()) {
        let found = (0..b.site_count()).find(|&index| {
            !claimed[index]
                && b.species()[index] == za
                && (to_cartesian * minimum_image(&(pa - b.positions()[index]))).norm() <= tolerance
        });

        match found {
            Some(index) => claimed[index] = true,
            None => return false,
        }
    }
    true
}

/// Fractional displacement folded into [-0.5, 0.5)
fn minimum_image(delta: &Vector3<f64>) -> Vector3<f64> {
    delta.map(|x| x - x.round())
}
