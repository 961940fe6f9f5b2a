//! Orbital states: quantum numbers and immutable orbital value objects

use crate::complex::Complex;
use crate::harmonics::spherical_harmonic;
use crate::radial;

/// Quantum numbers for a hydrogenic orbital
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantumNumbers {
    /// Principal quantum number n (1, 2, 3, ...)
    pub n: u32,
    /// Angular momentum quantum number l (0 to n-1)
    pub l: u32,
    /// Magnetic quantum number m (-l to +l)
    pub m: i32,
    /// Spin quantum number, +1 or -1
    pub s: i8,
}

impl QuantumNumbers {
    pub fn new(n: u32, l: u32, m: i32, s: i8) -> Option<Self> {
        if n == 0 || l >= n || m.unsigned_abs() > l || (s != 1 && s != -1) {
            None
        } else {
            Some(Self { n, l, m, s })
        }
    }

    /// Force arbitrary input into a valid combination, the way the
    /// selection spin-boxes do: n at least 1, l capped at n-1, m clamped
    /// into [-l, l], zero spin pushed to +1.
    pub fn clamped(n: u32, l: u32, m: i32, s: i8) -> Self {
        let n = n.max(1);
        let l = l.min(n - 1);
        let m = m.clamp(-(l as i32), l as i32);
        let s = if s < 0 { -1 } else { 1 };
        Self { n, l, m, s }
    }

    /// Orbital name (1s+0, 2p-1, etc.)
    pub fn name(&self) -> String {
        let l_char = match self.l {
            0 => 's',
            1 => 'p',
            2 => 'd',
            3 => 'f',
            _ => 'g',
        };
        format!("{}{}{:+}", self.n, l_char, self.m)
    }
}

/// One spherical-harmonic term of an orbital's angular part
#[derive(Debug, Clone, Copy)]
pub(crate) struct Component {
    pub coeff: Complex,
    pub l: u32,
    pub m: i32,
}

/// An immutable hydrogenic orbital state.
///
/// The angular part is a linear combination of spherical harmonics, which
/// covers both the pure |n l m> states and the real orbitals of the catalog.
/// Only the bohr precession frequency varies between otherwise identical
/// orbitals; selecting a new state always constructs a fresh instance.
#[derive(Debug, Clone)]
pub struct Orbital {
    label: String,
    components: Vec<Component>,
    r_90p: f64,
    bohr: f64,
}

impl Orbital {
    pub(crate) fn from_components(label: String, n: u32, components: Vec<Component>) -> Self {
        let l = components.first().map(|c| c.l).unwrap_or(0);
        Self {
            label,
            components,
            r_90p: radial::r_90p(n, l),
            bohr: 1.0,
        }
    }

    /// Pure |n l m s> state from validated quantum numbers
    pub fn from_numbers(qn: QuantumNumbers) -> Self {
        Self::from_components(
            qn.name(),
            qn.n,
            vec![Component {
                coeff: Complex::ONE,
                l: qn.l,
                m: qn.m,
            }],
        )
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Radius enclosing 90% of the radial probability, the surface length scale
    pub fn r_90p(&self) -> f64 {
        self.r_90p
    }

    /// Time-evolution (precession) angular frequency
    pub fn bohr(&self) -> f64 {
        self.bohr
    }

    pub fn with_bohr(mut self, bohr: f64) -> Self {
        self.bohr = bohr;
        self
    }

    /// Angular wavefunction at one direction. `theta` is the azimuthal
    /// angle, `phi` the polar angle, matching x = r sin(phi) cos(theta).
    pub fn angular(&self, theta: f64, phi: f64) -> Complex {
        let mut sum = Complex::ZERO;
        for c in &self.components {
            sum += c.coeff * spherical_harmonic(c.l, c.m, phi, theta);
        }
        sum
    }

    /// Angular wavefunction over parallel angle slices
    pub fn angular_many(&self, thetas: &[f64], phis: &[f64]) -> Vec<Complex> {
        debug_assert_eq!(thetas.len(), phis.len());
        thetas
            .iter()
            .zip(phis)
            .map(|(&theta, &phi)| self.angular(theta, phi))
            .collect()
    }
}
