/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for the degeneracy module

use std::io;
use thiserror::Error;

use crate::structure::StructureError;
use crate::symmetry::SymmetryError;

/// Errors that can occur while estimating a degeneracy fraction
#[derive(Error, Debug)]
pub enum DegeneracyError {
    #[error("Structure error: {0}")]
    Structure(#[from] StructureError),

    #[error("Symmetry error: {0}")]
    Symmetry(#[from] SymmetryError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid sublattice count: {count} occupied of {sites} {sublattice} sites")]
    InvalidSublatticeCount {
        sublattice: String,
        count: usize,
        sites: usize,
    },

    #[error("Invalid substituent count: {count} exceeds {sites} substitutable sites")]
    InvalidSubstituentCount { count: usize, sites: usize },

    #[error("Invalid filling convention '{0}', expected 'A' or 'B'")]
    InvalidConvention(String),

    #[error("Invalid scaling: {0}")]
    InvalidScaling(f64),

    #[error("Hit count {hits} exceeds trial count {trials}")]
    InvalidHitCount { hits: u64, trials: u64 },

    #[error("Worker pool error: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for degeneracy operations
pub type Result<T> = std::result::Result<T, DegeneracyError>;
