/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Site decoration: de-colouring and random resampling of cation species
//!
//! Only the tetrahedral and octahedral sublattices are ever touched; the
//! anion sublattice is copied through unchanged by every operation here.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::errors::{Result, StructureError};
use super::layout::Sublattice;
use super::structure::Structure;

/// Atomic number of cobalt
pub const COBALT: i32 = 27;
/// Atomic number of manganese
pub const MANGANESE: i32 = 25;

/// The two interchangeable cation species of the alloy
///
/// `primary` is the species whose count fixes the composition of a
/// configuration (Co in Co_xMn_{3-x}O_4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstituentPair {
    pub primary: i32,
    pub secondary: i32,
}

impl SubstituentPair {
    pub fn new(primary: i32, secondary: i32) -> Self {
        Self { primary, secondary }
    }

    /// Whether `species` is one of the pair
    pub fn contains(&self, species: i32) -> bool {
        species == self.primary || species == self.secondary
    }

    /// The other member of the pair, if `species` belongs to it
    pub fn partner(&self, species: i32) -> Option<i32> {
        if species == self.primary {
            Some(self.secondary)
        } else if species == self.secondary {
            Some(self.primary)
        } else {
            None
        }
    }
}

impl Default for SubstituentPair {
    fn default() -> Self {
        Self::new(COBALT, MANGANESE)
    }
}

/// Collapse both substituent species into `target` on the td and oh sites
///
/// The result is the parent structure used for symmetry discovery.
pub fn decolor(structure: &Structure, pair: &SubstituentPair, target: i32) -> Result<Structure> {
    let replaced = pair
        .partner(target)
        .ok_or(StructureError::InvalidSpecies {
            species: target,
            primary: pair.primary,
            secondary: pair.secondary,
        })?;

    let layout = structure.layout();
    let species = structure
        .species()
        .iter()
        .enumerate()
        .map(|(index, &z)| {
            if layout.is_substitutable(index) && z == replaced {
                target
            } else {
                z
            }
        })
        .collect();

    Ok(structure.with_species(species))
}

/// Draw new td and oh species by sampling each sublattice's values with replacement
///
/// Every td site independently takes a uniformly chosen value from the
/// reference td values, and likewise for oh sites. This is a bootstrap draw,
/// not a shuffle: per-call species counts on a sublattice fluctuate around
/// the reference counts. Anion sites are copied unchanged.
pub fn random_resample<R: Rng + ?Sized>(structure: &Structure, rng: &mut R) -> Structure {
    let mut species = structure.species().to_vec();

    for sublattice in [Sublattice::Tetrahedral, Sublattice::Octahedral] {
        let pool = structure.sublattice_species(sublattice);
        if pool.is_empty() {
            continue;
        }
        for slot in &mut species[structure.layout().range(sublattice)] {
            *slot = pool[rng.random_range(0..pool.len())];
        }
    }

    structure.with_species(species)
}

/// Occurrences of `species` on the td and oh sublattices
pub fn substituent_counts(structure: &Structure, species: i32) -> (usize, usize) {
    let count = |sublattice| {
        structure
            .sublattice_species(sublattice)
            .iter()
            .filter(|&&z| z == species)
            .count()
    };
    (count(Sublattice::Tetrahedral), count(Sublattice::Octahedral))
}
