//! Complex spherical harmonics Y_l^m with Condon-Shortley phase
//!
//! Angle convention throughout: `polar` is measured from the +z axis in
//! [0, pi], `azimuth` winds around z in [0, 2*pi].

use crate::complex::Complex;
use std::f64::consts::PI;

/// Factorial as f64 (exact for the small arguments used here)
pub fn factorial(n: u32) -> f64 {
    (1..=n).map(|i| i as f64).product::<f64>().max(1.0)
}

/// Odd double factorial (2m-1)!!
fn double_factorial_odd(m: u32) -> f64 {
    (1..=m).map(|i| (2 * i - 1) as f64).product::<f64>().max(1.0)
}

/// Associated Legendre polynomial P_l^m(x) for m >= 0, Condon-Shortley
/// phase included, evaluated by upward recurrence in l.
pub fn associated_legendre(l: u32, m: u32, x: f64) -> f64 {
    if m > l {
        return 0.0;
    }
    let sin_term = (1.0 - x * x).max(0.0).sqrt();
    // P_m^m = (-1)^m (2m-1)!! (1-x^2)^(m/2)
    let sign = if m % 2 == 1 { -1.0 } else { 1.0 };
    let mut pmm = sign * double_factorial_odd(m) * sin_term.powi(m as i32);
    if l == m {
        return pmm;
    }
    // P_{m+1}^m = x (2m+1) P_m^m
    let mut pmm1 = x * (2 * m + 1) as f64 * pmm;
    if l == m + 1 {
        return pmm1;
    }
    let mut pll = 0.0;
    for ll in (m + 2)..=l {
        pll = ((2 * ll - 1) as f64 * x * pmm1 - (ll + m - 1) as f64 * pmm)
            / (ll - m) as f64;
        pmm = pmm1;
        pmm1 = pll;
    }
    pll
}

/// Normalization constant for Y_l^m, m >= 0
fn norm(l: u32, m: u32) -> f64 {
    let num = (2 * l + 1) as f64 * factorial(l - m);
    let den = 4.0 * PI * factorial(l + m);
    (num / den).sqrt()
}

/// Complex spherical harmonic Y_l^m(polar, azimuth)
pub fn spherical_harmonic(l: u32, m: i32, polar: f64, azimuth: f64) -> Complex {
    let m_abs = m.unsigned_abs();
    if m_abs > l {
        return Complex::ZERO;
    }
    let plm = associated_legendre(l, m_abs, polar.cos());
    let base = norm(l, m_abs) * plm;
    let phase = Complex::exp_i(m as f64 * azimuth);
    // Y_l^{-m} = (-1)^m conj(Y_l^m)
    let cs = if m < 0 && m_abs % 2 == 1 { -1.0 } else { 1.0 };
    phase * (base * cs)
}
