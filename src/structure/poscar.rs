/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Reader for VASP POSCAR files
//!
//! Supports the VASP 5 layout: comment, universal scale, three lattice
//! vectors, species symbols, species counts, an optional `Selective dynamics`
//! line, the coordinate mode (`Direct` or `Cartesian`) and one coordinate
//! line per atom. Sites keep the order in which they appear in the file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use nalgebra::{Matrix3, Vector3};

use super::database::atomic_number_from_symbol;
use super::errors::{Result, StructureError};
use super::layout::SublatticeLayout;
use super::structure::{cartesian_to_fractional, Structure};

/// Read a POSCAR file and attach the given sublattice layout
pub fn read_poscar<P: AsRef<Path>>(path: P, layout: SublatticeLayout) -> Result<Structure> {
    let file = File::open(path.as_ref())?;
    parse_poscar(BufReader::new(file), layout)
}

/// Parse POSCAR content from any buffered reader
pub fn parse_poscar<R: BufRead>(reader: R, layout: SublatticeLayout) -> Result<Structure> {
    let mut lines = PoscarLines::new(reader);

    let _comment = lines.next_line("comment")?;

    let (line_no, scale_line) = lines.next_line("scale factor")?;
    let scale: f64 = parse_field(scale_line.split_whitespace().next(), line_no, "scale factor")?;

    let mut lattice = Matrix3::zeros();
    for row in 0..3 {
        let (line_no, line) = lines.next_line("lattice vector")?;
        let vector = parse_vector(&line, line_no, "lattice vector")?;
        lattice.set_row(row, &vector.transpose());
    }

    // A negative scale is the target cell volume
    let scale = if scale < 0.0 {
        let volume = lattice.determinant().abs();
        if volume == 0.0 {
            return Err(StructureError::SingularLattice(0.0));
        }
        (scale.abs() / volume).cbrt()
    } else {
        scale
    };
    lattice *= scale;

    let (line_no, symbols_line) = lines.next_line("species symbols")?;
    let symbols: Vec<&str> = symbols_line.split_whitespace().collect();
    let has_symbols = symbols
        .first()
        .and_then(|s| s.chars().next())
        .is_some_and(char::is_alphabetic);
    if !has_symbols {
        return Err(StructureError::ParseError {
            line: line_no,
            message: "species symbols are required (VASP 5 format)".to_string(),
        });
    }
    let atomic_numbers = symbols
        .iter()
        .map(|symbol| {
            let bare = symbol.split(['_', '/']).next().unwrap_or(symbol);
            atomic_number_from_symbol(bare)
                .ok_or_else(|| StructureError::UnknownElement(symbol.to_string()))
        })
        .collect::<Result<Vec<i32>>>()?;

    let (line_no, counts_line) = lines.next_line("species counts")?;
    let counts = counts_line
        .split_whitespace()
        .map(|field| parse_field::<usize>(Some(field), line_no, "species count"))
        .collect::<Result<Vec<usize>>>()?;
    if counts.len() != atomic_numbers.len() {
        return Err(StructureError::ParseError {
            line: line_no,
            message: format!(
                "{} species symbols but {} counts",
                atomic_numbers.len(),
                counts.len()
            ),
        });
    }

    let (mut line_no, mut mode_line) = lines.next_line("coordinate mode")?;
    if mode_line.trim_start().starts_with(['s', 'S']) {
        (line_no, mode_line) = lines.next_line("coordinate mode")?;
    }
    let cartesian = match mode_line.trim_start().chars().next() {
        Some('c' | 'C' | 'k' | 'K') => true,
        Some('d' | 'D') => false,
        _ => {
            return Err(StructureError::ParseError {
                line: line_no,
                message: format!("unrecognised coordinate mode '{}'", mode_line.trim()),
            })
        }
    };

    let total: usize = counts.iter().sum();
    let mut coordinates = Vec::with_capacity(total);
    let mut species = Vec::with_capacity(total);
    for (&z, &count) in atomic_numbers.iter().zip(&counts) {
        for _ in 0..count {
            let (line_no, line) = lines.next_line("atomic position")?;
            coordinates.push(parse_vector(&line, line_no, "atomic position")?);
            species.push(z);
        }
    }

    let positions = if cartesian {
        let scaled: Vec<Vector3<f64>> = coordinates.iter().map(|r| r * scale).collect();
        cartesian_to_fractional(&lattice, &scaled)?
    } else {
        coordinates
    };

    Structure::new(lattice, positions, species, layout)
}

/// Line iterator that remembers line numbers for error messages
struct PoscarLines<R: BufRead> {
    lines: std::io::Lines<R>,
    line_no: usize,
}

impl<R: BufRead> PoscarLines<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
        }
    }

    fn next_line(&mut self, expected: &str) -> Result<(usize, String)> {
        self.line_no += 1;
        match self.lines.next() {
            Some(line) => Ok((self.line_no, line?)),
            None => Err(StructureError::ParseError {
                line: self.line_no,
                message: format!("unexpected end of file, expected {}", expected),
            }),
        }
    }
}

fn parse_field<T: std::str::FromStr>(field: Option<&str>, line: usize, what: &str) -> Result<T> {
    let field = field.ok_or_else(|| StructureError::ParseError {
        line,
        message: format!("missing {}", what),
    })?;
    field.parse().map_err(|_| StructureError::ParseError {
        line,
        message: format!("invalid {} '{}'", what, field),
    })
}

fn parse_vector(line: &str, line_no: usize, what: &str) -> Result<Vector3<f64>> {
    let mut fields = line.split_whitespace();
    let x = parse_field(fields.next(), line_no, what)?;
    let y = parse_field(fields.next(), line_no, what)?;
    let z = parse_field(fields.next(), line_no, what)?;
    Ok(Vector3::new(x, y, z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Cursor;

    const DIRECT: &str = "CoMnO test
1.0
4.0 0.0 0.0
0.0 4.0 0.0
0.0 0.0 4.0
Co Mn O
1 1 2
Direct
0.0 0.0 0.0
0.5 0.5 0.5
0.25 0.25 0.25
0.75 0.75 0.75
";

    #[test]
    fn test_parse_direct() {
        let structure =
            parse_poscar(Cursor::new(DIRECT), SublatticeLayout::from_counts(1, 1, 2)).unwrap();
        assert_eq!(structure.species(), &[27, 25, 8, 8]);
        assert_relative_eq!(structure.lattice()[(0, 0)], 4.0);
        assert_relative_eq!(structure.positions()[2].y, 0.25);
    }

    #[test]
    fn test_parse_cartesian_with_selective_dynamics() {
        let content = "cartesian
2.0
2.0 0.0 0.0
0.0 2.0 0.0
0.0 0.0 2.0
Co_pv O
1 1
Selective dynamics
Cartesian
0.0 0.0 0.0 T T T
2.0 1.0 0.0 F F F
";
        let structure =
            parse_poscar(Cursor::new(content), SublatticeLayout::from_counts(1, 0, 1)).unwrap();
        assert_eq!(structure.species(), &[27, 8]);
        assert_relative_eq!(structure.lattice()[(1, 1)], 4.0);
        assert_relative_eq!(structure.positions()[1].x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(structure.positions()[1].y, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_scale_is_volume() {
        let content = DIRECT.replacen("1.0", "-8.0", 1);
        let structure =
            parse_poscar(Cursor::new(content), SublatticeLayout::from_counts(1, 1, 2)).unwrap();
        assert_relative_eq!(structure.volume(), 8.0, epsilon = 1e-9);
    }

    #[test]
    fn test_truncated_file() {
        let truncated: String = DIRECT.lines().take(10).collect::<Vec<_>>().join("\n");
        let result = parse_poscar(Cursor::new(truncated), SublatticeLayout::from_counts(1, 1, 2));
        assert!(matches!(result, Err(StructureError::ParseError { .. })));
    }

    #[test]
    fn test_unknown_element() {
        let content = DIRECT.replace("Co Mn O", "Co Qq O");
        let result = parse_poscar(Cursor::new(content), SublatticeLayout::from_counts(1, 1, 2));
        assert!(matches!(result, Err(StructureError::UnknownElement(_))));
    }

    #[test]
    fn test_layout_mismatch() {
        let result = parse_poscar(Cursor::new(DIRECT), SublatticeLayout::spinel());
        assert!(matches!(result, Err(StructureError::InvalidLayout(_))));
    }
}
