//! Catalog of the common real hydrogenic orbitals
//!
//! Real orbitals are the usual cosine/sine combinations of the complex
//! harmonics: for m > 0 the cosine form is (Y_l^-m + (-1)^m Y_l^m)/sqrt(2)
//! and the sine form is i(Y_l^-m - (-1)^m Y_l^m)/sqrt(2).

use crate::complex::Complex;
use crate::orbital::{Component, Orbital};
use std::f64::consts::FRAC_1_SQRT_2;

/// Every name the selection panel offers, 1s through the 4f set
pub const NAMES: [&str; 20] = [
    "1s",
    "2s",
    "2px",
    "2py",
    "2pz",
    "3px",
    "3py",
    "3pz",
    "3dz^2",
    "3dxz",
    "3dyz",
    "3dx^2-y^2",
    "3dxy",
    "4fz^3",
    "4fxz^2",
    "4fyz^2",
    "4fxyz",
    "4fz(x^2-y^2)",
    "4fx(x^2-3y^2)",
    "4fy(3x^2-y^2)",
];

fn pure(name: &str, n: u32, l: u32) -> Orbital {
    Orbital::from_components(
        name.to_string(),
        n,
        vec![Component {
            coeff: Complex::ONE,
            l,
            m: 0,
        }],
    )
}

fn cosine(name: &str, n: u32, l: u32, m: u32) -> Orbital {
    let parity = if m % 2 == 1 { -1.0 } else { 1.0 };
    Orbital::from_components(
        name.to_string(),
        n,
        vec![
            Component {
                coeff: Complex::new(FRAC_1_SQRT_2, 0.0),
                l,
                m: -(m as i32),
            },
            Component {
                coeff: Complex::new(parity * FRAC_1_SQRT_2, 0.0),
                l,
                m: m as i32,
            },
        ],
    )
}

fn sine(name: &str, n: u32, l: u32, m: u32) -> Orbital {
    let parity = if m % 2 == 1 { -1.0 } else { 1.0 };
    Orbital::from_components(
        name.to_string(),
        n,
        vec![
            Component {
                coeff: Complex::new(0.0, FRAC_1_SQRT_2),
                l,
                m: -(m as i32),
            },
            Component {
                coeff: Complex::new(0.0, -parity * FRAC_1_SQRT_2),
                l,
                m: m as i32,
            },
        ],
    )
}

/// Look up a real orbital by its catalog name
pub fn by_name(name: &str) -> Option<Orbital> {
    let orbital = match name {
        "1s" => pure("1s", 1, 0),
        "2s" => pure("2s", 2, 0),
        "2px" => cosine("2px", 2, 1, 1),
        "2py" => sine("2py", 2, 1, 1),
        "2pz" => pure("2pz", 2, 1),
        "3px" => cosine("3px", 3, 1, 1),
        "3py" => sine("3py", 3, 1, 1),
        "3pz" => pure("3pz", 3, 1),
        "3dz^2" => pure("3dz^2", 3, 2),
        "3dxz" => cosine("3dxz", 3, 2, 1),
        "3dyz" => sine("3dyz", 3, 2, 1),
        "3dx^2-y^2" => cosine("3dx^2-y^2", 3, 2, 2),
        "3dxy" => sine("3dxy", 3, 2, 2),
        "4fz^3" => pure("4fz^3", 4, 3),
        "4fxz^2" => cosine("4fxz^2", 4, 3, 1),
        "4fyz^2" => sine("4fyz^2", 4, 3, 1),
        "4fxyz" => sine("4fxyz", 4, 3, 2),
        "4fz(x^2-y^2)" => cosine("4fz(x^2-y^2)", 4, 3, 2),
        "4fx(x^2-3y^2)" => cosine("4fx(x^2-3y^2)", 4, 3, 3),
        "4fy(3x^2-y^2)" => sine("4fy(3x^2-y^2)", 4, 3, 3),
        _ => return None,
    };
    Some(orbital)
}
