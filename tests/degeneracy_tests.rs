/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

mod common;

use std::fs;

use nalgebra::{Matrix3, Vector3};
use symdegen_rs::config::DegeneracyConfig;
use symdegen_rs::degeneracy::{
    merge_record, write_output_record, CaseStage, DegeneracyCase, DegeneracyDriver,
    FillingConvention,
};
use symdegen_rs::structure::Structure;
use symdegen_rs::symmetry::{
    PeriodicFold, SymmetryError, SymmetryFinder, SymmetryOperation, SymmetryOperationSet,
};
use tempfile::tempdir;

/// Finder returning a fixed operation list regardless of the structure
struct FixedFinder(Vec<SymmetryOperation>);

impl SymmetryFinder for FixedFinder {
    fn find_operations(
        &self,
        _structure: &Structure,
        tolerance: f64,
    ) -> symdegen_rs::symmetry::Result<SymmetryOperationSet> {
        SymmetryOperationSet::new(self.0.clone(), tolerance)
    }
}

/// Finder that always fails, to prove it is never consulted
struct FailingFinder;

impl SymmetryFinder for FailingFinder {
    fn find_operations(
        &self,
        _structure: &Structure,
        _tolerance: f64,
    ) -> symdegen_rs::symmetry::Result<SymmetryOperationSet> {
        Err(SymmetryError::DiscoveryFailed("not available".to_string()))
    }
}

fn identity_and_swap() -> Box<dyn SymmetryFinder> {
    Box::new(FixedFinder(vec![
        SymmetryOperation::identity(),
        SymmetryOperation::new(Matrix3::new(0, 1, 0, 1, 0, 0, 0, 0, 1), Vector3::zeros()),
    ]))
}

fn config(scaling: f64, seed: u64, workers: usize) -> DegeneracyConfig {
    DegeneracyConfig {
        scaling,
        seed: Some(seed),
        workers: Some(workers),
        batch_size: 1000,
        ..DegeneracyConfig::default()
    }
}

#[test]
fn test_end_members_short_circuit() {
    let driver = DegeneracyDriver::with_finder(config(10.0, 1, 1), Box::new(FailingFinder)).unwrap();

    let all_mn = common::spinel(&[25; 8], &[25; 16]);
    let outcome = driver.process_structure("all_mn", all_mn);
    assert_eq!(outcome.stage, CaseStage::Aggregated);
    let summary = outcome.result.unwrap();
    assert_eq!(summary.fraction, 1.0);
    assert!(summary.is_end_member());
    assert_eq!(summary.trials, 0);

    let all_co = common::spinel(&[27; 8], &[27; 16]);
    let outcome = driver.process_structure("all_co", all_co);
    assert_eq!(outcome.fraction(), Some(1.0));
}

#[test]
fn test_set_b_configuration_end_to_end() {
    let driver = DegeneracyDriver::with_finder(config(10.0, 2024, 2), identity_and_swap()).unwrap();
    let outcome = driver.process_structure("cfg", common::set_b_configuration(8));

    assert_eq!(outcome.stage, CaseStage::Aggregated);
    let summary = outcome.result.unwrap();
    assert_eq!(summary.substituent_count, 8);
    assert_eq!(summary.occupied, Some((0, 8)));
    assert_eq!(summary.combinations, Some(12_870));
    assert_eq!(summary.operation_count, Some(2));
    assert_eq!(summary.trials, 128_700);
    assert!(summary.hits <= summary.trials);
    assert!(
        (0.0..=1.0).contains(&summary.fraction),
        "fraction {}",
        summary.fraction
    );
}

#[test]
fn test_convention_changes_occupied_counts() {
    let mut cfg = config(0.01, 5, 1);
    cfg.struc_type = FillingConvention::A;
    let driver = DegeneracyDriver::with_finder(cfg, identity_and_swap()).unwrap();
    let summary = driver
        .process_structure("cfg", common::set_b_configuration(12))
        .result
        .unwrap();
    assert_eq!(summary.occupied, Some((8, 4)));
    // C(8,8) * C(16,4)
    assert_eq!(summary.combinations, Some(1_820));
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let reference = common::set_b_configuration(8);
    let case = DegeneracyCase::new(
        reference,
        SymmetryOperationSet::trivial(1e-3).unwrap(),
        PeriodicFold::AbsoluteLattice,
    );

    let one = DegeneracyDriver::with_finder(config(1.0, 99, 1), identity_and_swap()).unwrap();
    let two = DegeneracyDriver::with_finder(config(1.0, 99, 2), identity_and_swap()).unwrap();
    assert_eq!(one.run_trials(&case, 20_000), two.run_trials(&case, 20_000));
    assert_eq!(one.run_trials(&case, 0), 0);
}

#[test]
fn test_identical_candidates_always_hit() {
    // Every td and oh site already holds the same species, so every draw equals the reference
    let reference = common::spinel(&[25; 8], &[27; 16]);
    let case = DegeneracyCase::new(
        reference,
        SymmetryOperationSet::trivial(1e-3).unwrap(),
        PeriodicFold::WrapFractional,
    );
    let driver = DegeneracyDriver::with_finder(config(1.0, 3, 2), identity_and_swap()).unwrap();
    assert_eq!(driver.run_trials(&case, 2_500), 2_500);
}

#[test]
fn test_failures_are_isolated_and_tagged() {
    let driver = DegeneracyDriver::with_finder(config(0.01, 1, 1), Box::new(FailingFinder)).unwrap();

    let outcome = driver.process_structure("mixed", common::set_b_configuration(8));
    assert_eq!(outcome.stage, CaseStage::Failed);
    assert_eq!(
        outcome.result.unwrap_err().stage,
        CaseStage::SymmetryDiscovered
    );

    let dir = tempdir().unwrap();
    let outcome = driver.process_case(dir.path().join("does_not_exist"));
    assert_eq!(outcome.stage, CaseStage::Failed);
    assert_eq!(outcome.result.unwrap_err().stage, CaseStage::Reading);
}

#[test]
fn test_bad_decolor_target_fails_parent_derivation() {
    let mut cfg = config(0.01, 1, 1);
    cfg.decolor_target = 26;
    let driver = DegeneracyDriver::with_finder(cfg, identity_and_swap()).unwrap();
    let outcome = driver.process_structure("cfg", common::set_b_configuration(8));
    assert_eq!(outcome.result.unwrap_err().stage, CaseStage::ParentDerived);
}

#[test]
fn test_batch_output_record() {
    let dir = tempdir().unwrap();
    let good = dir.path().join("cfg_good");
    let end_member = dir.path().join("cfg_end");
    fs::create_dir(&good).unwrap();
    fs::create_dir(&end_member).unwrap();
    common::write_poscar(&good.join("POSCAR_orig"), &common::set_b_configuration(8));
    common::write_poscar(&end_member.join("POSCAR_orig"), &common::spinel(&[25; 8], &[25; 16]));

    let driver = DegeneracyDriver::with_finder(config(0.1, 8, 2), identity_and_swap()).unwrap();
    let cases = vec![good, dir.path().join("cfg_missing"), end_member];
    let outcomes = driver.run(&cases);
    assert_eq!(outcomes.len(), 3);
    assert!(outcomes[0].is_success());
    assert!(!outcomes[1].is_success());
    assert_eq!(outcomes[2].fraction(), Some(1.0));

    let input = dir.path().join("all.info");
    let output = dir.path().join("all+degen.info");
    fs::write(&input, "name, energy\ncfg_good -1.5\ncfg_missing -2.5\ncfg_end -3.5\n").unwrap();
    write_output_record(&input, &output, &outcomes).unwrap();

    let merged = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = merged.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "name, energy, symm_degen_frac");
    assert!(lines[1].starts_with("cfg_good -1.5 "));
    assert_eq!(lines[2], "cfg_missing -2.5 FAILED");
    assert_eq!(lines[3], "cfg_end -3.5 1");
}

#[test]
fn test_merge_marks_rows_without_cases() {
    let driver = DegeneracyDriver::with_finder(config(1.0, 1, 1), Box::new(FailingFinder)).unwrap();
    let outcomes = vec![driver.process_structure("all_mn", common::spinel(&[25; 8], &[25; 16]))];
    let merged = merge_record("name\na\nb\n", &outcomes);
    assert_eq!(merged, "name, symm_degen_frac\na 1\nb NA\n");
}
