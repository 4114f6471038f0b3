/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Case lists and the per-case output record
//!
//! The input record is a text table with one header line and one data row
//! per case, in case-list order. The output copies it and appends a
//! `symm_degen_frac` column. Rows whose case failed are marked `FAILED`
//! rather than dropped, so the output always has as many rows as the input.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

use super::driver::CaseOutcome;
use super::errors::Result;

/// Name of the appended column
pub const DEGENERACY_COLUMN: &str = "symm_degen_frac";
/// Marker written for a case that failed
pub const FAILED_MARKER: &str = "FAILED";
/// Marker written for a row that has no corresponding case
pub const MISSING_MARKER: &str = "NA";

/// Read a case list: one directory per line, blank lines skipped
pub fn read_case_list<P: AsRef<Path>>(path: P) -> Result<Vec<PathBuf>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_case_list(&content))
}

pub fn parse_case_list(content: &str) -> Vec<PathBuf> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// Append the degeneracy column to the rows of `table`
pub fn merge_record(table: &str, outcomes: &[CaseOutcome]) -> String {
    let mut lines = table.lines();
    let Some(header) = lines.next() else {
        warn!("Input record is empty, nothing to merge");
        return String::new();
    };

    let mut output = format!("{}, {}\n", header.trim_end(), DEGENERACY_COLUMN);
    let mut rows = 0;
    for (index, row) in lines.enumerate() {
        let value = match outcomes.get(index) {
            Some(outcome) => match outcome.fraction() {
                Some(fraction) => fraction.to_string(),
                None => FAILED_MARKER.to_string(),
            },
            None => MISSING_MARKER.to_string(),
        };
        output.push_str(&format!("{} {}\n", row.trim_end(), value));
        rows += 1;
    }

    if rows != outcomes.len() {
        warn!(
            "Input record has {} data rows but {} cases were processed",
            rows,
            outcomes.len()
        );
    }
    output
}

/// Read `input`, append the degeneracy column and write the result to `output`
pub fn write_output_record<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    outcomes: &[CaseOutcome],
) -> Result<()> {
    let table = fs::read_to_string(input)?;
    fs::write(output, merge_record(&table, outcomes))?;
    Ok(())
}
