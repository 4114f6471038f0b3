/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for the symmetry module

use thiserror::Error;

/// Errors that can occur during symmetry discovery or application
#[derive(Error, Debug)]
pub enum SymmetryError {
    #[error("Symmetry discovery failed: {0}")]
    DiscoveryFailed(String),

    #[error("Invalid tolerance: {0}")]
    InvalidTolerance(f64),

    #[error("Operation index {index} out of range ({count} operations)")]
    OperationOutOfRange { index: usize, count: usize },

    #[error("Empty symmetry operation set")]
    EmptyOperationSet,

    #[error("Unknown periodic fold '{0}', expected 'absolute-lattice' or 'wrap-fractional'")]
    UnknownFold(String),
}

/// Result type for symmetry operations
pub type Result<T> = std::result::Result<T, SymmetryError>;
