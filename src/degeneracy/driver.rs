/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Batch driver for degeneracy estimation
//!
//! Cases are processed one after another. Within a case every sampling trial
//! is scheduled on a fixed-size rayon pool in batches; each batch returns its
//! hit count and the driver sums the collected counts once all batches are
//! done. A failure anywhere in a case is recorded against that case together
//! with the stage it happened in, and the batch moves on.

use std::fmt;
use std::path::Path;

use log::{debug, error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use thiserror::Error;

use super::combinatorics::combination_count_for;
use super::errors::{DegeneracyError, Result};
use super::sampler::{estimate_fraction, sample_once, trial_budget, DegeneracyCase};
use crate::config::DegeneracyConfig;
use crate::structure::{decolor, read_poscar, substituent_counts, Structure};
use crate::symmetry::{MoyoFinder, SymmetryFinder};

/// Processing stage of a single case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStage {
    Pending,
    Reading,
    ParentDerived,
    SymmetryDiscovered,
    Sampling,
    Aggregated,
    Failed,
}

impl fmt::Display for CaseStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CaseStage::Pending => "pending",
            CaseStage::Reading => "reading",
            CaseStage::ParentDerived => "parent derivation",
            CaseStage::SymmetryDiscovered => "symmetry discovery",
            CaseStage::Sampling => "sampling",
            CaseStage::Aggregated => "aggregated",
            CaseStage::Failed => "failed",
        };
        write!(f, "{}", name)
    }
}

/// Failure of one case, tagged with the stage that was running
#[derive(Error, Debug)]
#[error("{stage} failed: {source}")]
pub struct CaseError {
    pub stage: CaseStage,
    pub source: DegeneracyError,
}

/// Result of a successfully processed case
#[derive(Debug, Clone, PartialEq)]
pub struct CaseSummary {
    /// Degeneracy fraction (exactly 1 for end-members)
    pub fraction: f64,
    /// Substituent atoms on td + oh sites
    pub substituent_count: usize,
    /// (td, oh) occupied counts under the filling convention
    pub occupied: Option<(usize, usize)>,
    /// Size of the decoration space
    pub combinations: Option<u64>,
    /// Number of operations of the parent structure
    pub operation_count: Option<usize>,
    pub trials: u64,
    pub hits: u64,
}

impl CaseSummary {
    fn end_member(substituent_count: usize) -> Self {
        Self {
            fraction: 1.0,
            substituent_count,
            occupied: None,
            combinations: None,
            operation_count: None,
            trials: 0,
            hits: 0,
        }
    }

    /// Whether the case was short-circuited as an alloy end-member
    pub fn is_end_member(&self) -> bool {
        self.combinations.is_none()
    }
}

/// Final state of one case
#[derive(Debug)]
pub struct CaseOutcome {
    pub id: String,
    pub stage: CaseStage,
    pub result: std::result::Result<CaseSummary, CaseError>,
}

impl CaseOutcome {
    pub fn fraction(&self) -> Option<f64> {
        self.result.as_ref().ok().map(|summary| summary.fraction)
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Stage bookkeeping for a case in flight
struct CaseRecord {
    id: String,
    stage: CaseStage,
}

impl CaseRecord {
    fn new(id: String) -> Self {
        Self {
            id,
            stage: CaseStage::Pending,
        }
    }

    fn advance(&mut self, stage: CaseStage) {
        debug!("{}: {} -> {}", self.id, self.stage, stage);
        self.stage = stage;
    }

    /// Tag an error with the current stage
    fn guard<T, E: Into<DegeneracyError>>(
        &self,
        result: std::result::Result<T, E>,
    ) -> std::result::Result<T, CaseError> {
        result.map_err(|e| CaseError {
            stage: self.stage,
            source: e.into(),
        })
    }

    fn finish(self, result: std::result::Result<CaseSummary, CaseError>) -> CaseOutcome {
        let stage = match &result {
            Ok(summary) => {
                info!(
                    "{}: scaled degeneracy count {} ({} hits in {} trials)",
                    self.id, summary.fraction, summary.hits, summary.trials
                );
                CaseStage::Aggregated
            }
            Err(e) => {
                error!("Error in processing config from {}: {}", self.id, e);
                CaseStage::Failed
            }
        };
        CaseOutcome {
            id: self.id,
            stage,
            result,
        }
    }
}

/// Runs degeneracy estimation over a list of cases
pub struct DegeneracyDriver {
    config: DegeneracyConfig,
    finder: Box<dyn SymmetryFinder>,
    pool: rayon::ThreadPool,
    workers: usize,
}

impl DegeneracyDriver {
    /// Driver using moyo for symmetry discovery
    pub fn new(config: DegeneracyConfig) -> Result<Self> {
        Self::with_finder(config, Box::new(MoyoFinder::new()))
    }

    /// Driver using a custom symmetry finder
    pub fn with_finder(config: DegeneracyConfig, finder: Box<dyn SymmetryFinder>) -> Result<Self> {
        let available = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        let workers = match config.workers {
            Some(requested) if requested > available => {
                warn!(
                    "Requested {} workers but only {} processors are available",
                    requested, available
                );
                available
            }
            Some(requested) => requested.max(1),
            None => available,
        };
        info!("Number of processors: {}, using {}", available, workers);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|index| format!("symdegen-worker-{}", index))
            .build()?;

        Ok(Self {
            config,
            finder,
            pool,
            workers,
        })
    }

    pub fn config(&self) -> &DegeneracyConfig {
        &self.config
    }

    /// Size of the worker pool
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Process every case directory in order
    pub fn run<I, P>(&self, case_dirs: I) -> Vec<CaseOutcome>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let outcomes: Vec<CaseOutcome> = case_dirs
            .into_iter()
            .map(|dir| self.process_case(dir))
            .collect();

        let failed = outcomes.iter().filter(|o| !o.is_success()).count();
        if failed > 0 {
            warn!("{} of {} cases failed", failed, outcomes.len());
        }
        outcomes
    }

    /// Read the structure file of a case directory and process it
    pub fn process_case<P: AsRef<Path>>(&self, case_dir: P) -> CaseOutcome {
        let case_dir = case_dir.as_ref();
        let mut record = CaseRecord::new(case_dir.display().to_string());
        info!("Analysing: {}", record.id);

        record.advance(CaseStage::Reading);
        let path = case_dir.join(&self.config.structure_file);
        let result = match record.guard(read_poscar(&path, self.config.layout.to_layout())) {
            Ok(structure) => self.evaluate(&mut record, structure),
            Err(e) => Err(e),
        };
        record.finish(result)
    }

    /// Process a structure that is already in memory
    pub fn process_structure(&self, id: &str, structure: Structure) -> CaseOutcome {
        let mut record = CaseRecord::new(id.to_string());
        record.advance(CaseStage::Reading);
        let result = self.evaluate(&mut record, structure);
        record.finish(result)
    }

    fn evaluate(
        &self,
        record: &mut CaseRecord,
        reference: Structure,
    ) -> std::result::Result<CaseSummary, CaseError> {
        let config = &self.config;

        record.advance(CaseStage::ParentDerived);
        let parent = record.guard(decolor(
            &reference,
            &config.substituents,
            config.decolor_target,
        ))?;

        let (td_count, oh_count) = substituent_counts(&reference, config.substituents.primary);
        let count = td_count + oh_count;
        let layout = reference.layout().clone();
        if count == 0 || count == layout.substitutable_sites() {
            info!("{}: symmetry degeneracy of alloy end-member is just 1", record.id);
            return Ok(CaseSummary::end_member(count));
        }
        let (n_td, n_oh) = record.guard(config.struc_type.distribute(count, &layout))?;

        record.advance(CaseStage::SymmetryDiscovered);
        let operations = record.guard(self.finder.find_operations(&parent, config.threshold))?;
        if !operations.contains_identity() {
            warn!("{}: operation set does not contain the identity", record.id);
        }
        if !operations.is_closed_under_inversion() {
            warn!(
                "{}: operation set is not closed under inversion, reference-to-candidate matching may undercount",
                record.id
            );
        }
        let operation_count = operations.len();
        debug!("{}: {} symmetry operations", record.id, operation_count);

        let combinations = record.guard(combination_count_for(&layout, n_td, n_oh))?;
        let trials = record.guard(trial_budget(combinations, config.scaling))?;
        info!(
            "{}: {} substituents (td {}, oh {}), {} combinations, {} trials",
            record.id, count, n_td, n_oh, combinations, trials
        );

        record.advance(CaseStage::Sampling);
        let case = DegeneracyCase::new(reference, operations, config.fold);
        let hits = self.run_trials(&case, trials);
        let fraction = record.guard(estimate_fraction(hits, trials, config.scaling))?;

        Ok(CaseSummary {
            fraction,
            substituent_count: count,
            occupied: Some((n_td, n_oh)),
            combinations: Some(combinations),
            operation_count: Some(operation_count),
            trials,
            hits,
        })
    }

    /// Run `trials` independent trials of a case on the worker pool
    pub fn run_trials(&self, case: &DegeneracyCase, trials: u64) -> u64 {
        let batch_size = self.config.batch_size.max(1) as u64;
        let batches = trials.div_ceil(batch_size);
        let seed = self.config.seed;

        let batch_hits: Vec<u64> = self.pool.install(|| {
            (0..batches)
                .into_par_iter()
                .map(|batch| {
                    let start = batch * batch_size;
                    let end = (start + batch_size).min(trials);
                    let mut rng = batch_rng(seed, batch);
                    (start..end)
                        .map(|_| u64::from(sample_once(case, &mut rng)))
                        .sum::<u64>()
                })
                .collect()
        });

        batch_hits.iter().sum()
    }
}

/// Independent random source for one batch
fn batch_rng(seed: Option<u64>, batch: u64) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed ^ batch.wrapping_mul(0x9E37_79B9_7F4A_7C15)),
        None => StdRng::from_os_rng(),
    }
}
