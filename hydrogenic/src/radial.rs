//! Hydrogenic radial wavefunctions R_nl(r)
//!
//! All distances are in units of the Bohr radius (a0 = 1).

use crate::harmonics::factorial;

/// Generalized Laguerre polynomial L_k^alpha(x) by recurrence
fn laguerre(k: u32, alpha: u32, x: f64) -> f64 {
    let a = alpha as f64;
    if k == 0 {
        return 1.0;
    }
    let mut lm1 = 1.0;
    let mut l = 1.0 + a - x;
    for i in 2..=k {
        let i = i as f64;
        let next = ((2.0 * i - 1.0 + a - x) * l - (i - 1.0 + a) * lm1) / i;
        lm1 = l;
        l = next;
    }
    l
}

/// Radial wavefunction R_nl(r) for a hydrogen-like atom.
///
/// Normalized so that the radial probability r^2 R^2 integrates to one.
/// Caller is responsible for `l < n`.
pub fn radial_wavefunction(n: u32, l: u32, r: f64) -> f64 {
    if r < 0.0 {
        return 0.0;
    }
    let nf = n as f64;
    let rho = 2.0 * r / nf;
    let norm = (2.0 / nf).powf(1.5)
        * (factorial(n - l - 1) / (2.0 * nf * factorial(n + l))).sqrt();
    norm * rho.powi(l as i32) * (-rho / 2.0).exp() * laguerre(n - l - 1, 2 * l + 1, rho)
}

/// Radial probability density P(r) = r^2 R_nl(r)^2
pub fn radial_probability(n: u32, l: u32, r: f64) -> f64 {
    let rr = radial_wavefunction(n, l, r);
    r * r * rr * rr
}

/// Radius enclosing 90% of the radial probability, by cumulative
/// trapezoid integration. Used as the length scale for orbital surfaces.
pub fn r_90p(n: u32, l: u32) -> f64 {
    let r_max = 10.0 * (n * n) as f64 + 10.0;
    let steps = 4000;
    let dr = r_max / steps as f64;

    let mut cumulative = Vec::with_capacity(steps + 1);
    let mut total = 0.0;
    let mut prev = radial_probability(n, l, 0.0);
    cumulative.push(0.0);
    for i in 1..=steps {
        let p = radial_probability(n, l, i as f64 * dr);
        total += 0.5 * (prev + p) * dr;
        cumulative.push(total);
        prev = p;
    }

    let target = 0.9 * total;
    for (i, &c) in cumulative.iter().enumerate() {
        if c >= target {
            return i as f64 * dr;
        }
    }
    r_max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_laguerre_low_orders() {
        let x = 0.4_f64;
        assert!((laguerre(0, 1, x) - 1.0).abs() < 1e-12);
        assert!((laguerre(1, 1, x) - (2.0 - x)).abs() < 1e-12);
        // L_2^1(x) = 3 - 3x + x^2/2
        assert!((laguerre(2, 1, x) - (3.0 - 3.0 * x + 0.5 * x * x)).abs() < 1e-12);
    }

    #[test]
    fn test_radial_1s_value() {
        // R_10(r) = 2 e^-r
        assert!((radial_wavefunction(1, 0, 0.0) - 2.0).abs() < 1e-12);
        assert!((radial_wavefunction(1, 0, 1.0) - 2.0 * (-1.0_f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_radial_probability_normalized() {
        for &(n, l) in &[(1u32, 0u32), (2, 0), (2, 1), (3, 2), (4, 3)] {
            let r_max = 10.0 * (n * n) as f64 + 10.0;
            let steps = 20000;
            let dr = r_max / steps as f64;
            let mut total = 0.0;
            for i in 0..steps {
                let r0 = i as f64 * dr;
                total += 0.5 * (radial_probability(n, l, r0) + radial_probability(n, l, r0 + dr)) * dr;
            }
            assert!((total - 1.0).abs() < 1e-4, "n={} l={} total={}", n, l, total);
        }
    }

    #[test]
    fn test_r_90p_ground_state() {
        // Known value for 1s: about 2.661 a0
        let r = r_90p(1, 0);
        assert!((r - 2.661).abs() < 0.05, "r_90p(1s) = {}", r);
    }

    #[test]
    fn test_r_90p_grows_with_n() {
        assert!(r_90p(1, 0) < r_90p(2, 0));
        assert!(r_90p(2, 1) < r_90p(3, 1));
        assert!(r_90p(3, 2) < r_90p(4, 3));
    }
}
