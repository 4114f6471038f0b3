/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Sublattice filling conventions
//!
//! A configuration set is generated with one sublattice saturating before
//! the other receives any substituent. Set A fills the tetrahedral sites
//! first, set B the octahedral sites.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::{DegeneracyError, Result};
use crate::structure::{Sublattice, SublatticeLayout};

/// Which sublattice saturates first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FillingConvention {
    /// Tetrahedral sites fill first
    A,
    /// Octahedral sites fill first
    #[default]
    B,
}

impl FillingConvention {
    /// Split a substituent count into (td, oh) occupied counts
    pub fn distribute(self, count: usize, layout: &SublatticeLayout) -> Result<(usize, usize)> {
        let td_sites = layout.len(Sublattice::Tetrahedral);
        let oh_sites = layout.len(Sublattice::Octahedral);
        if count > td_sites + oh_sites {
            return Err(DegeneracyError::InvalidSubstituentCount {
                count,
                sites: td_sites + oh_sites,
            });
        }

        Ok(match self {
            FillingConvention::A if count <= td_sites => (count, 0),
            FillingConvention::A => (td_sites, count - td_sites),
            FillingConvention::B if count <= oh_sites => (0, count),
            FillingConvention::B => (count - oh_sites, oh_sites),
        })
    }
}

impl FromStr for FillingConvention {
    type Err = DegeneracyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "A" | "a" => Ok(FillingConvention::A),
            "B" | "b" => Ok(FillingConvention::B),
            other => Err(DegeneracyError::InvalidConvention(other.to_string())),
        }
    }
}

impl fmt::Display for FillingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillingConvention::A => write!(f, "A"),
            FillingConvention::B => write!(f, "B"),
        }
    }
}
