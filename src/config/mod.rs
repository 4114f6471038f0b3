/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Configuration for a degeneracy batch run
//!
//! A configuration can be loaded from JSON; every field has a default so a
//! file only needs to name what differs. The command line overrides
//! individual values on top of that.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::degeneracy::FillingConvention;
use crate::structure::layout::{
    SPINEL_ANION_SITES, SPINEL_OCTAHEDRAL_SITES, SPINEL_TETRAHEDRAL_SITES,
};
use crate::structure::{SublatticeLayout, SubstituentPair};
use crate::symmetry::PeriodicFold;

/// Errors raised while loading or validating a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid configuration file {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Number of sites on each sublattice, in file order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub tetrahedral: usize,
    pub octahedral: usize,
    pub anion: usize,
}

impl LayoutConfig {
    pub fn to_layout(&self) -> SublatticeLayout {
        SublatticeLayout::from_counts(self.tetrahedral, self.octahedral, self.anion)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            tetrahedral: SPINEL_TETRAHEDRAL_SITES,
            octahedral: SPINEL_OCTAHEDRAL_SITES,
            anion: SPINEL_ANION_SITES,
        }
    }
}

/// Settings of a batch run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DegeneracyConfig {
    /// Positional tolerance for symmetry detection and structure comparison
    pub threshold: f64,
    /// Oversampling multiplier: trials = combinations * scaling
    pub scaling: f64,
    /// Which sublattice saturates first
    pub struc_type: FillingConvention,
    /// File listing one case directory per line
    pub case_list: PathBuf,
    /// Table the degeneracy column is appended to
    pub input_record: PathBuf,
    pub output_record: PathBuf,
    /// Worker threads; defaults to the number of available processors
    pub workers: Option<usize>,
    /// Structure file name inside each case directory
    pub structure_file: String,
    pub substituents: SubstituentPair,
    /// Species both substituents collapse into for the parent structure
    pub decolor_target: i32,
    pub layout: LayoutConfig,
    pub fold: PeriodicFold,
    /// Seed for reproducible sampling
    pub seed: Option<u64>,
    /// Trials per scheduled batch
    pub batch_size: usize,
}

impl Default for DegeneracyConfig {
    fn default() -> Self {
        let substituents = SubstituentPair::default();
        Self {
            threshold: 1e-3,
            scaling: 100.0,
            struc_type: FillingConvention::B,
            case_list: PathBuf::from("data/set_B.dat"),
            input_record: PathBuf::from("data/setB_all.info"),
            output_record: PathBuf::from("data/setB_all+degen.info"),
            workers: None,
            structure_file: "POSCAR_orig".to_string(),
            substituents,
            decolor_target: substituents.primary,
            layout: LayoutConfig::default(),
            fold: PeriodicFold::AbsoluteLattice,
            seed: None,
            batch_size: 4096,
        }
    }
}

impl DegeneracyConfig {
    /// Load a configuration from a JSON file and validate it
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        if !(self.threshold.is_finite() && self.threshold > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "threshold must be positive, got {}",
                self.threshold
            )));
        }
        if !(self.scaling.is_finite() && self.scaling > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "scaling must be positive, got {}",
                self.scaling
            )));
        }
        if self.workers == Some(0) {
            return Err(ConfigError::Invalid("workers must be at least 1".to_string()));
        }
        if self.batch_size == 0 {
            return Err(ConfigError::Invalid("batch_size must be at least 1".to_string()));
        }
        if self.substituents.primary == self.substituents.secondary {
            return Err(ConfigError::Invalid(format!(
                "substituent species must differ, both are {}",
                self.substituents.primary
            )));
        }
        if !self.substituents.contains(self.decolor_target) {
            return Err(ConfigError::Invalid(format!(
                "decolor_target {} is not one of the substituents ({}, {})",
                self.decolor_target, self.substituents.primary, self.substituents.secondary
            )));
        }
        if self.structure_file.trim().is_empty() {
            return Err(ConfigError::Invalid("structure_file must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = DegeneracyConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.struc_type, FillingConvention::B);
        assert_eq!(config.layout.to_layout(), SublatticeLayout::spinel());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "scaling": 10, "struc_type": "A", "fold": "wrap_fractional" }"#;
        let config: DegeneracyConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.scaling, 10.0);
        assert_eq!(config.struc_type, FillingConvention::A);
        assert_eq!(config.fold, PeriodicFold::WrapFractional);
        assert_eq!(config.threshold, 1e-3);
    }

    #[test]
    fn test_unknown_struc_type_is_rejected() {
        let json = r#"{ "struc_type": "C" }"#;
        assert!(serde_json::from_str::<DegeneracyConfig>(json).is_err());
    }

    #[test]
    fn test_validation() {
        let bad_scaling = DegeneracyConfig {
            scaling: 0.0,
            ..DegeneracyConfig::default()
        };
        assert!(bad_scaling.validate().is_err());

        let bad_target = DegeneracyConfig {
            decolor_target: 26,
            ..DegeneracyConfig::default()
        };
        assert!(bad_target.validate().is_err());

        let no_workers = DegeneracyConfig {
            workers: Some(0),
            ..DegeneracyConfig::default()
        };
        assert!(no_workers.validate().is_err());
    }
}
