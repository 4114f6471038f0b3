/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Sublattice partition of a structure
//!
//! Sites are grouped into three contiguous index ranges: tetrahedral cation
//! sites, octahedral cation sites and the fixed anion sites, in that order.
//! The partition is structural metadata supplied alongside a structure file,
//! it is never derived from coordinates and never permuted.

use std::fmt;
use std::ops::Range;

use super::errors::{Result, StructureError};

/// Number of tetrahedral (8a) sites in the conventional spinel cell
pub const SPINEL_TETRAHEDRAL_SITES: usize = 8;
/// Number of octahedral (16d) sites in the conventional spinel cell
pub const SPINEL_OCTAHEDRAL_SITES: usize = 16;
/// Number of anion (32e) sites in the conventional spinel cell
pub const SPINEL_ANION_SITES: usize = 32;

/// One of the three site classes of the partition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sublattice {
    Tetrahedral,
    Octahedral,
    Anion,
}

impl fmt::Display for Sublattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sublattice::Tetrahedral => write!(f, "tetrahedral"),
            Sublattice::Octahedral => write!(f, "octahedral"),
            Sublattice::Anion => write!(f, "anion"),
        }
    }
}

/// Validated descriptor of the td / oh / anion index ranges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SublatticeLayout {
    tetrahedral: Range<usize>,
    octahedral: Range<usize>,
    anion: Range<usize>,
}

impl SublatticeLayout {
    /// Build a layout from the number of sites in each sublattice
    pub fn from_counts(tetrahedral: usize, octahedral: usize, anion: usize) -> Self {
        let td_end = tetrahedral;
        let oh_end = td_end + octahedral;
        Self {
            tetrahedral: 0..td_end,
            octahedral: td_end..oh_end,
            anion: oh_end..oh_end + anion,
        }
    }

    /// Build a layout from explicit ranges, checking they tile `0..N` in order
    pub fn from_ranges(
        tetrahedral: Range<usize>,
        octahedral: Range<usize>,
        anion: Range<usize>,
    ) -> Result<Self> {
        if tetrahedral.start != 0 {
            return Err(StructureError::InvalidLayout(format!(
                "tetrahedral range must start at 0, got {}",
                tetrahedral.start
            )));
        }
        for (name, range) in [
            ("tetrahedral", &tetrahedral),
            ("octahedral", &octahedral),
            ("anion", &anion),
        ] {
            if range.end < range.start {
                return Err(StructureError::InvalidLayout(format!(
                    "{} range {:?} is reversed",
                    name, range
                )));
            }
        }
        if octahedral.start != tetrahedral.end || anion.start != octahedral.end {
            return Err(StructureError::InvalidLayout(format!(
                "ranges must be contiguous: td {:?}, oh {:?}, anion {:?}",
                tetrahedral, octahedral, anion
            )));
        }

        Ok(Self {
            tetrahedral,
            octahedral,
            anion,
        })
    }

    /// The conventional 56-site spinel cell: 8 td, 16 oh, 32 anion sites
    pub fn spinel() -> Self {
        Self::from_counts(
            SPINEL_TETRAHEDRAL_SITES,
            SPINEL_OCTAHEDRAL_SITES,
            SPINEL_ANION_SITES,
        )
    }

    /// Index range of a sublattice
    pub fn range(&self, sublattice: Sublattice) -> Range<usize> {
        match sublattice {
            Sublattice::Tetrahedral => self.tetrahedral.clone(),
            Sublattice::Octahedral => self.octahedral.clone(),
            Sublattice::Anion => self.anion.clone(),
        }
    }

    /// Number of sites in a sublattice
    pub fn len(&self, sublattice: Sublattice) -> usize {
        self.range(sublattice).len()
    }

    /// Number of cation sites that can host a substituent (td + oh)
    pub fn substitutable_sites(&self) -> usize {
        self.tetrahedral.len() + self.octahedral.len()
    }

    /// Total number of sites covered by the layout
    pub fn total_sites(&self) -> usize {
        self.anion.end
    }

    /// Whether a site index lies on the td or oh sublattice
    pub fn is_substitutable(&self, index: usize) -> bool {
        index < self.octahedral.end
    }

    /// Check that the layout covers exactly `site_count` sites
    pub fn validate(&self, site_count: usize) -> Result<()> {
        if self.total_sites() != site_count {
            return Err(StructureError::InvalidLayout(format!(
                "layout covers {} sites (td {}, oh {}, anion {}) but the structure has {}",
                self.total_sites(),
                self.tetrahedral.len(),
                self.octahedral.len(),
                self.anion.len(),
                site_count
            )));
        }
        Ok(())
    }
}

impl Default for SublatticeLayout {
    fn default() -> Self {
        Self::spinel()
    }
}
