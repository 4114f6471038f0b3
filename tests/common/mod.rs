/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Shared fixtures for the integration tests

#![allow(dead_code)]

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use nalgebra::{Matrix3, Vector3};
use symdegen_rs::structure::database::element_symbol;
use symdegen_rs::structure::{Structure, SublatticeLayout};

pub const LATTICE_CONSTANT: f64 = 8.4;
pub const OXYGEN_PARAMETER: f64 = 0.26;

const FCC: [[f64; 3]; 4] = [
    [0.0, 0.0, 0.0],
    [0.0, 0.5, 0.5],
    [0.5, 0.0, 0.5],
    [0.5, 0.5, 0.0],
];

fn expand(bases: &[[f64; 3]]) -> Vec<Vector3<f64>> {
    let mut sites = Vec::new();
    for base in bases {
        for shift in FCC {
            let site = Vector3::new(base[0] + shift[0], base[1] + shift[1], base[2] + shift[2]);
            sites.push(site.map(|x| x - x.floor()));
        }
    }
    sites
}

/// Fractional coordinates of a conventional spinel cell: 8 td, 16 oh, 32 O
pub fn spinel_positions() -> Vec<Vector3<f64>> {
    let x = OXYGEN_PARAMETER;
    let mut positions = expand(&[[0.125, 0.125, 0.125], [0.875, 0.375, 0.375]]);
    positions.extend(expand(&[
        [0.5, 0.5, 0.5],
        [0.25, 0.75, 0.0],
        [0.75, 0.0, 0.25],
        [0.0, 0.25, 0.75],
    ]));
    positions.extend(expand(&[
        [x, x, x],
        [0.75 - x, 0.25 - x, 0.5 + x],
        [0.25 - x, 0.5 + x, 0.75 - x],
        [0.5 + x, 0.75 - x, 0.25 - x],
        [-x, -x, -x],
        [0.25 + x, 0.75 + x, 0.5 - x],
        [0.75 + x, 0.5 - x, 0.25 + x],
        [0.5 - x, 0.25 + x, 0.75 + x],
    ]));
    positions
}

/// Spinel cell with the given td and oh species; anion sites are oxygen
pub fn spinel(td: &[i32], oh: &[i32]) -> Structure {
    assert_eq!(td.len(), 8);
    assert_eq!(oh.len(), 16);
    let mut species = td.to_vec();
    species.extend_from_slice(oh);
    species.extend(std::iter::repeat(8).take(32));
    Structure::new(
        Matrix3::identity() * LATTICE_CONSTANT,
        spinel_positions(),
        species,
        SublatticeLayout::spinel(),
    )
    .unwrap()
}

/// Set-B style configuration: all td sites Mn, `co_on_oh` Co atoms on the oh sites
pub fn set_b_configuration(co_on_oh: usize) -> Structure {
    let td = [25; 8];
    let oh: Vec<i32> = (0..16).map(|i| if i < co_on_oh { 27 } else { 25 }).collect();
    spinel(&td, &oh)
}

/// Write a structure as a Direct-coordinate POSCAR, one species block per site run
pub fn write_poscar(path: &Path, structure: &Structure) {
    let mut content = String::from("generated\n1.0\n");
    for row in 0..3 {
        let v = structure.lattice().row(row);
        writeln!(content, "{:.10} {:.10} {:.10}", v[0], v[1], v[2]).unwrap();
    }

    // Consecutive runs keep the site order of the structure
    let mut runs: Vec<(i32, usize)> = Vec::new();
    for &z in structure.species() {
        match runs.last_mut() {
            Some((last, count)) if *last == z => *count += 1,
            _ => runs.push((z, 1)),
        }
    }
    let symbols: Vec<&str> = runs.iter().map(|(z, _)| element_symbol(*z).unwrap()).collect();
    let counts: Vec<String> = runs.iter().map(|(_, n)| n.to_string()).collect();
    writeln!(content, "{}", symbols.join(" ")).unwrap();
    writeln!(content, "{}", counts.join(" ")).unwrap();
    content.push_str("Direct\n");
    for p in structure.positions() {
        writeln!(content, "{:.10} {:.10} {:.10}", p.x, p.y, p.z).unwrap();
    }
    fs::write(path, content).unwrap();
}
