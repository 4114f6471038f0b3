/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Element symbol lookup
//!
//! Structure files name species by chemical symbol while every internal
//! representation (and the symmetry search) works on atomic numbers.

/// Chemical symbols indexed by atomic number (index 0 is unused)
const ELEMENT_SYMBOLS: [&str; 119] = [
    "", "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S",
    "Cl", "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge",
    "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd",
    "In", "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd",
    "Tb", "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg",
    "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm",
    "Bk", "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn",
    "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

/// Provides the element symbol for an atomic number
pub fn element_symbol(atomic_number: i32) -> Option<&'static str> {
    if atomic_number < 1 {
        return None;
    }
    ELEMENT_SYMBOLS.get(atomic_number as usize).copied()
}

/// Returns the atomic number for an element symbol
///
/// The lookup is case-insensitive, so "Co", "co" and "CO" all resolve to 27.
pub fn atomic_number_from_symbol(symbol: &str) -> Option<i32> {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return None;
    }

    ELEMENT_SYMBOLS
        .iter()
        .skip(1)
        .position(|candidate| candidate.eq_ignore_ascii_case(symbol))
        .map(|index| index as i32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_symbol() {
        assert_eq!(element_symbol(1), Some("H"));
        assert_eq!(element_symbol(8), Some("O"));
        assert_eq!(element_symbol(25), Some("Mn"));
        assert_eq!(element_symbol(27), Some("Co"));
        assert_eq!(element_symbol(118), Some("Og"));
        assert_eq!(element_symbol(0), None);
        assert_eq!(element_symbol(119), None);
        assert_eq!(element_symbol(-3), None);
    }

    #[test]
    fn test_atomic_number_from_symbol() {
        assert_eq!(atomic_number_from_symbol("Co"), Some(27));
        assert_eq!(atomic_number_from_symbol("co"), Some(27));
        assert_eq!(atomic_number_from_symbol("MN"), Some(25));
        assert_eq!(atomic_number_from_symbol(" O "), Some(8));
        assert_eq!(atomic_number_from_symbol("Xx"), None);
        assert_eq!(atomic_number_from_symbol(""), None);
    }
}
