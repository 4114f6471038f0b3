/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Symmetry degeneracy estimation
//!
//! For a configuration of the Co/Mn spinel alloy this module estimates the
//! fraction of random decorations, drawn from the exact combinatorial space
//! of its composition, that are symmetry-equivalent to it under the
//! operations of its de-coloured parent. The pieces are:
//!
//! - [`combination_count`]: exact size of the decoration space
//! - [`FillingConvention`]: how a substituent count splits over td and oh sites
//! - [`sample_once`] / [`estimate_fraction`]: one Monte-Carlo trial and the
//!   normalisation of the hit count
//! - [`DegeneracyDriver`]: per-case state machine and the parallel trial loop
//! - [`merge_record`]: appending the result column to the case table

mod combinatorics;
mod driver;
pub mod errors;
mod filling;
mod record;
mod sampler;

pub use combinatorics::{binomial, combination_count, combination_count_for};
pub use driver::{CaseError, CaseOutcome, CaseStage, CaseSummary, DegeneracyDriver};
pub use errors::{DegeneracyError, Result};
pub use filling::FillingConvention;
pub use record::{
    merge_record, parse_case_list, read_case_list, write_output_record, DEGENERACY_COLUMN,
    FAILED_MARKER, MISSING_MARKER,
};
pub use sampler::{estimate_fraction, sample_once, trial_budget, DegeneracyCase};
