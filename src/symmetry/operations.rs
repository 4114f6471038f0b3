/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Space-group operations in fractional coordinates
//!
//! An operation maps a fractional position `x` to `R x + t` with an integer
//! rotation `R` and a fractional translation `t`, the convention used by
//! spglib and moyo for the operations of an input cell.

use nalgebra::{Matrix3, Vector3};

use super::errors::{Result, SymmetryError};

/// A single (rotation, translation) pair
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetryOperation {
    rotation: Matrix3<i32>,
    translation: Vector3<f64>,
}

impl SymmetryOperation {
    pub fn new(rotation: Matrix3<i32>, translation: Vector3<f64>) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// The identity operation
    pub fn identity() -> Self {
        Self::new(Matrix3::identity(), Vector3::zeros())
    }

    /// Integer rotation matrix
    pub fn rotation(&self) -> &Matrix3<i32> {
        &self.rotation
    }

    /// Fractional translation vector
    pub fn translation(&self) -> &Vector3<f64> {
        &self.translation
    }

    /// Rotation as a floating point matrix
    pub fn rotation_f64(&self) -> Matrix3<f64> {
        self.rotation.map(f64::from)
    }

    /// The inverse operation `(R^-1, -R^-1 t)`
    ///
    /// Returns `None` when the rotation is not unimodular, in which case it
    /// is not a lattice symmetry at all.
    pub fn inverse(&self) -> Option<Self> {
        let rotation = self.rotation_f64();
        let det = rotation.determinant();
        if (det.abs() - 1.0).abs() > 1e-8 {
            return None;
        }
        let inverse = rotation.try_inverse()?;
        let translation = -(inverse * self.translation);
        Some(Self::new(inverse.map(|x| x.round() as i32), translation))
    }

    /// Same rotation and a translation equal modulo lattice vectors
    pub fn equivalent_to(&self, other: &Self, tolerance: f64) -> bool {
        self.rotation == other.rotation
            && (self.translation - other.translation)
                .iter()
                .all(|d| (d - d.round()).abs() <= tolerance)
    }

    /// Identity rotation with an integer (possibly zero) translation
    pub fn is_identity(&self, tolerance: f64) -> bool {
        self.equivalent_to(&Self::identity(), tolerance)
    }
}

/// All symmetry operations of one parent structure
///
/// Built once per case by a [`SymmetryFinder`](super::SymmetryFinder) and
/// shared read-only by every trial of that case. The set remembers the
/// detection tolerance that produced it; the equivalence test compares
/// positions with the same tolerance.
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetryOperationSet {
    operations: Vec<SymmetryOperation>,
    tolerance: f64,
}

impl SymmetryOperationSet {
    pub fn new(operations: Vec<SymmetryOperation>, tolerance: f64) -> Result<Self> {
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(SymmetryError::InvalidTolerance(tolerance));
        }
        if operations.is_empty() {
            return Err(SymmetryError::EmptyOperationSet);
        }
        Ok(Self {
            operations,
            tolerance,
        })
    }

    /// Set holding only the identity
    pub fn trivial(tolerance: f64) -> Result<Self> {
        Self::new(vec![SymmetryOperation::identity()], tolerance)
    }

    /// Number of operations
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Detection tolerance the set was discovered with
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn get(&self, index: usize) -> Result<&SymmetryOperation> {
        self.operations
            .get(index)
            .ok_or(SymmetryError::OperationOutOfRange {
                index,
                count: self.operations.len(),
            })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SymmetryOperation> {
        self.operations.iter()
    }

    pub fn contains_identity(&self) -> bool {
        self.operations
            .iter()
            .any(|op| op.is_identity(self.tolerance))
    }

    /// Whether the inverse of every operation is also in the set
    ///
    /// Transforming the reference instead of the candidate is only exact when
    /// this holds.
    pub fn is_closed_under_inversion(&self) -> bool {
        self.operations.iter().all(|op| match op.inverse() {
            Some(inverse) => self
                .operations
                .iter()
                .any(|other| other.equivalent_to(&inverse, self.tolerance)),
            None => false,
        })
    }
}

impl<'a> IntoIterator for &'a SymmetryOperationSet {
    type Item = &'a SymmetryOperation;
    type IntoIter = std::slice::Iter<'a, SymmetryOperation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.iter()
    }
}
