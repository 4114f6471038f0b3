/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Command Line Interface (CLI) module
//!
//! Builds a [`DegeneracyConfig`] from an optional JSON file plus command-line
//! overrides, runs the batch and writes the output record.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::info;

use crate::config::DegeneracyConfig;
use crate::degeneracy::{read_case_list, write_output_record, DegeneracyDriver, FillingConvention};
use crate::symmetry::PeriodicFold;

/// Estimate symmetry degeneracy fractions for a batch of spinel configurations
#[derive(Parser, Debug, Default)]
#[command(name = "symdegen-rs", version, about)]
pub struct Cli {
    /// JSON configuration file; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File listing one case directory per line
    #[arg(long)]
    pub case_list: Option<PathBuf>,

    /// Table to append the degeneracy column to
    #[arg(long)]
    pub input_record: Option<PathBuf>,

    /// Where to write the merged table
    #[arg(long)]
    pub output_record: Option<PathBuf>,

    /// Symmetry detection tolerance
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Oversampling multiplier of the combinatorial space
    #[arg(long)]
    pub scaling: Option<f64>,

    /// Sublattice filling convention: A (td first) or B (oh first)
    #[arg(long)]
    pub struc_type: Option<FillingConvention>,

    /// Number of worker threads
    #[arg(short = 'j', long)]
    pub workers: Option<usize>,

    /// Seed for reproducible sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Periodic folding: absolute-lattice or wrap-fractional
    #[arg(long)]
    pub fold: Option<PeriodicFold>,

    /// Structure file name inside each case directory
    #[arg(long)]
    pub structure_file: Option<String>,
}

impl Cli {
    /// Resolve the effective configuration
    pub fn resolve_config(&self) -> anyhow::Result<DegeneracyConfig> {
        let mut config = match &self.config {
            Some(path) => DegeneracyConfig::from_json_file(path)?,
            None => DegeneracyConfig::default(),
        };

        if let Some(path) = &self.case_list {
            config.case_list = path.clone();
        }
        if let Some(path) = &self.input_record {
            config.input_record = path.clone();
        }
        if let Some(path) = &self.output_record {
            config.output_record = path.clone();
        }
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if let Some(scaling) = self.scaling {
            config.scaling = scaling;
        }
        if let Some(struc_type) = self.struc_type {
            config.struc_type = struc_type;
        }
        if let Some(workers) = self.workers {
            config.workers = Some(workers);
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(fold) = self.fold {
            config.fold = fold;
        }
        if let Some(name) = &self.structure_file {
            config.structure_file = name.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

/// Run a full batch as described by the command line
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let started = Instant::now();
    let config = cli.resolve_config()?;

    let cases = read_case_list(&config.case_list)
        .with_context(|| format!("reading case list {}", config.case_list.display()))?;
    info!(
        "{} cases, struc_type {}, scaling {}, threshold {}",
        cases.len(),
        config.struc_type,
        config.scaling,
        config.threshold
    );

    let driver = DegeneracyDriver::new(config.clone())?;
    let outcomes = driver.run(&cases);

    write_output_record(&config.input_record, &config.output_record, &outcomes).with_context(
        || {
            format!(
                "merging {} into {}",
                config.input_record.display(),
                config.output_record.display()
            )
        },
    )?;

    info!(
        "It took {:.2} secs to process the dataset",
        started.elapsed().as_secs_f64()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "symdegen-rs",
            "--scaling",
            "10",
            "--struc-type",
            "A",
            "--fold",
            "wrap-fractional",
            "-j",
            "2",
        ]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.scaling, 10.0);
        assert_eq!(config.struc_type, FillingConvention::A);
        assert_eq!(config.fold, PeriodicFold::WrapFractional);
        assert_eq!(config.workers, Some(2));
    }

    #[test]
    fn test_bad_struc_type_is_fatal() {
        let result = Cli::try_parse_from(["symdegen-rs", "--struc-type", "C"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let cli = Cli {
            scaling: Some(-1.0),
            ..Cli::default()
        };
        assert!(cli.resolve_config().is_err());
    }
}
