/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for the structure module

use std::io;
use thiserror::Error;

/// Errors that can occur while building, reading or decorating a structure
#[derive(Error, Debug)]
pub enum StructureError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("Unknown element symbol: {0}")]
    UnknownElement(String),

    #[error("Invalid structure: {0}")]
    InvalidStructure(String),

    #[error("Invalid sublattice layout: {0}")]
    InvalidLayout(String),

    #[error("Invalid species selection: {species} is not one of the substituents ({primary}, {secondary})")]
    InvalidSpecies {
        species: i32,
        primary: i32,
        secondary: i32,
    },

    #[error("Singular lattice (determinant {0:e})")]
    SingularLattice(f64),
}

/// Result type for structure operations
pub type Result<T> = std::result::Result<T, StructureError>;
