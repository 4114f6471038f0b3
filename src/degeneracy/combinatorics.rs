/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Exact size of the decoration space
//!
//! With a fixed number of substituents on each cation sublattice the number
//! of distinct decorations is `C(n_td, r_td) * C(n_oh, r_oh)`.

use super::errors::{DegeneracyError, Result};
use crate::structure::{Sublattice, SublatticeLayout};

/// Binomial coefficient `C(n, k)`, zero when `k > n`
///
/// Uses the multiplicative form so intermediate values stay exact.
pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1u64, |acc, i| acc * (n - i) / (i + 1))
}

/// Number of decorations of the spinel cell with `n_td_occupied` substituents
/// on the 8 tetrahedral sites and `n_oh_occupied` on the 16 octahedral sites
pub fn combination_count(n_td_occupied: usize, n_oh_occupied: usize) -> Result<u64> {
    combination_count_for(
        &SublatticeLayout::spinel(),
        n_td_occupied,
        n_oh_occupied,
    )
}

/// [`combination_count`] for an arbitrary layout
pub fn combination_count_for(
    layout: &SublatticeLayout,
    n_td_occupied: usize,
    n_oh_occupied: usize,
) -> Result<u64> {
    let td_sites = layout.len(Sublattice::Tetrahedral);
    let oh_sites = layout.len(Sublattice::Octahedral);
    check_occupancy(Sublattice::Tetrahedral, n_td_occupied, td_sites)?;
    check_occupancy(Sublattice::Octahedral, n_oh_occupied, oh_sites)?;

    Ok(binomial(td_sites as u64, n_td_occupied as u64)
        * binomial(oh_sites as u64, n_oh_occupied as u64))
}

fn check_occupancy(sublattice: Sublattice, count: usize, sites: usize) -> Result<()> {
    if count > sites {
        return Err(DegeneracyError::InvalidSublatticeCount {
            sublattice: sublattice.to_string(),
            count,
            sites,
        });
    }
    Ok(())
}
