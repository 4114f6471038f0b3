/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Monte-Carlo degeneracy sampler
//!
//! Each trial resamples the cation decoration of the reference and asks
//! whether the parent's symmetry maps the reference onto it. Trials share
//! only read-only inputs, so any number of them can run concurrently as long
//! as each brings its own random source.

use rand::Rng;

use super::errors::{DegeneracyError, Result};
use crate::structure::{random_resample, Structure};
use crate::symmetry::{is_equivalent, PeriodicFold, SymmetryOperationSet};

/// Read-only inputs shared by all trials of one case
#[derive(Debug, Clone)]
pub struct DegeneracyCase {
    reference: Structure,
    operations: SymmetryOperationSet,
    fold: PeriodicFold,
}

impl DegeneracyCase {
    pub fn new(reference: Structure, operations: SymmetryOperationSet, fold: PeriodicFold) -> Self {
        Self {
            reference,
            operations,
            fold,
        }
    }

    pub fn reference(&self) -> &Structure {
        &self.reference
    }

    pub fn operations(&self) -> &SymmetryOperationSet {
        &self.operations
    }

    pub fn fold(&self) -> PeriodicFold {
        self.fold
    }
}

/// One trial: 1 if a random decoration is equivalent to the reference, else 0
pub fn sample_once<R: Rng + ?Sized>(case: &DegeneracyCase, rng: &mut R) -> u32 {
    let candidate = random_resample(&case.reference, rng);
    u32::from(is_equivalent(
        &case.operations,
        &case.reference,
        &candidate,
        case.fold,
    ))
}

/// Number of trials for a decoration space of `combinations` arrangements
pub fn trial_budget(combinations: u64, scaling: f64) -> Result<u64> {
    check_scaling(scaling)?;
    Ok((combinations as f64 * scaling) as u64)
}

/// Degeneracy fraction `hits / scaling`
///
/// The divisor is the oversampling multiplier, not the trial count: the
/// fraction is the expected number of hits per arrangement of the
/// decoration space. `trial_count` only bounds `hits`.
pub fn estimate_fraction(hits: u64, trial_count: u64, scaling: f64) -> Result<f64> {
    check_scaling(scaling)?;
    if hits > trial_count {
        return Err(DegeneracyError::InvalidHitCount {
            hits,
            trials: trial_count,
        });
    }
    Ok(hits as f64 / scaling)
}

fn check_scaling(scaling: f64) -> Result<()> {
    if !(scaling.is_finite() && scaling > 0.0) {
        return Err(DegeneracyError::InvalidScaling(scaling));
    }
    Ok(())
}
