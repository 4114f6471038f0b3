/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Periodic crystal structure with a fixed sublattice partition

use nalgebra::{Matrix3, Vector3};

use super::errors::{Result, StructureError};
use super::layout::{Sublattice, SublatticeLayout};

/// Lattices with a smaller absolute determinant are treated as singular
const SINGULAR_DETERMINANT: f64 = 1e-10;

/// A crystal structure in fractional coordinates
///
/// Rows of `lattice` are the lattice vectors a, b and c. `positions` and
/// `species` are index-aligned: site `i` sits at `positions[i]` and holds
/// atomic number `species[i]`. Every structure derived from another one
/// (de-coloured, resampled, symmetry-transformed) keeps the same site indices
/// and the same layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    lattice: Matrix3<f64>,
    positions: Vec<Vector3<f64>>,
    species: Vec<i32>,
    layout: SublatticeLayout,
}

impl Structure {
    /// Create a structure, checking that all per-site data and the layout agree
    pub fn new(
        lattice: Matrix3<f64>,
        positions: Vec<Vector3<f64>>,
        species: Vec<i32>,
        layout: SublatticeLayout,
    ) -> Result<Self> {
        if positions.len() != species.len() {
            return Err(StructureError::InvalidStructure(format!(
                "{} positions but {} species",
                positions.len(),
                species.len()
            )));
        }
        layout.validate(positions.len())?;

        Ok(Self {
            lattice,
            positions,
            species,
            layout,
        })
    }

    /// Lattice vectors as matrix rows
    pub fn lattice(&self) -> &Matrix3<f64> {
        &self.lattice
    }

    /// Fractional coordinates of all sites
    pub fn positions(&self) -> &[Vector3<f64>] {
        &self.positions
    }

    /// Atomic numbers of all sites
    pub fn species(&self) -> &[i32] {
        &self.species
    }

    /// Sublattice partition of the sites
    pub fn layout(&self) -> &SublatticeLayout {
        &self.layout
    }

    /// Number of sites
    pub fn site_count(&self) -> usize {
        self.positions.len()
    }

    /// Atomic numbers on one sublattice
    pub fn sublattice_species(&self, sublattice: Sublattice) -> &[i32] {
        &self.species[self.layout.range(sublattice)]
    }

    /// Cartesian coordinates of site `index`
    pub fn cartesian_position(&self, index: usize) -> Option<Vector3<f64>> {
        self.positions
            .get(index)
            .map(|frac| self.lattice.transpose() * frac)
    }

    /// Cartesian coordinates of all sites
    pub fn cartesian_positions(&self) -> Vec<Vector3<f64>> {
        let to_cartesian = self.lattice.transpose();
        self.positions.iter().map(|frac| to_cartesian * frac).collect()
    }

    /// Count of sites holding a given atomic number
    pub fn count_species(&self, atomic_number: i32) -> usize {
        self.species.iter().filter(|&&z| z == atomic_number).count()
    }

    /// Determinant of the lattice matrix (signed cell volume)
    pub fn volume(&self) -> f64 {
        self.lattice.determinant()
    }

    /// Same sites and layout with a different lattice and coordinates
    pub(crate) fn with_geometry(
        &self,
        lattice: Matrix3<f64>,
        positions: Vec<Vector3<f64>>,
    ) -> Structure {
        debug_assert_eq!(positions.len(), self.positions.len());
        Structure {
            lattice,
            positions,
            species: self.species.clone(),
            layout: self.layout.clone(),
        }
    }

    /// Same geometry and layout with different site species
    pub(crate) fn with_species(&self, species: Vec<i32>) -> Structure {
        debug_assert_eq!(species.len(), self.species.len());
        Structure {
            lattice: self.lattice,
            positions: self.positions.clone(),
            species,
            layout: self.layout.clone(),
        }
    }
}

/// Convert Cartesian coordinates to fractional ones for the given lattice
pub fn cartesian_to_fractional(
    lattice: &Matrix3<f64>,
    cartesian: &[Vector3<f64>],
) -> Result<Vec<Vector3<f64>>> {
    let det = lattice.determinant();
    if det.abs() < SINGULAR_DETERMINANT {
        return Err(StructureError::SingularLattice(det));
    }
    let to_fractional = lattice
        .transpose()
        .try_inverse()
        .ok_or(StructureError::SingularLattice(det))?;

    Ok(cartesian.iter().map(|r| to_fractional * r).collect())
}
