//! Synthesis of the avoided-crossing dataset.
//!
//! The crossing view consumes a persisted dataset; this module produces one
//! from a two-state model: a bound low diabat, a repulsive high diabat that
//! crosses it inside the sampled window, and a constant diabatic coupling.
//! Adiabatic curves are the eigenvalues of the 2x2 Hamiltonian at each bond
//! length, and the molecular-orbital meshes interpolate between bonding and
//! antibonding character with the mixing angle.

use crate::constants::CROSSING_SAMPLES;
use crate::crossing::CrossingDataset;
use crate::frame::SurfaceMesh;
use crate::grid::{linspace, Grid2};
use glam::DVec3;
use nalgebra::Matrix2;
use std::f64::consts::{PI, TAU};

/// Mesh resolution of the molecular-orbital surfaces
const MESH_ROWS: usize = 25;
const MESH_COLS: usize = 50;

/// Sampled bond-length window
const BOND_MIN: f64 = 1.5;
const BOND_MAX: f64 = 5.0;

/// Morse parameters of the bound low diabat
const WELL_DEPTH: f64 = 1.0;
const MORSE_WIDTH: f64 = 1.1;
const EQUILIBRIUM: f64 = 2.2;

/// Repulsive high diabat: amplitude, decay rate, asymptote
const REPULSIVE_AMPLITUDE: f64 = 4.0;
const REPULSIVE_DECAY: f64 = 1.5;
const REPULSIVE_ASYMPTOTE: f64 = 0.55;

/// Constant diabatic coupling
const COUPLING: f64 = 0.08;

fn low_diabat(d: f64) -> f64 {
    let e = 1.0 - (-MORSE_WIDTH * (d - EQUILIBRIUM)).exp();
    WELL_DEPTH * e * e
}

fn high_diabat(d: f64) -> f64 {
    REPULSIVE_AMPLITUDE * (-REPULSIVE_DECAY * (d - BOND_MIN)).exp() + REPULSIVE_ASYMPTOTE
}

/// Parametric closed surface around a point on the bond axis: a sphere
/// stretched along z, with a radial profile over the polar angle.
fn surface(center_z: f64, rx: f64, rz: f64, profile: impl Fn(f64) -> f64) -> SurfaceMesh {
    let polar = linspace(0.0, PI, MESH_ROWS);
    let azimuth = linspace(0.0, TAU, MESH_COLS);
    let mut x = Grid2::filled(MESH_ROWS, MESH_COLS, 0.0);
    let mut y = Grid2::filled(MESH_ROWS, MESH_COLS, 0.0);
    let mut z = Grid2::filled(MESH_ROWS, MESH_COLS, 0.0);
    for (i, &u) in polar.iter().enumerate() {
        let rho = profile(u);
        for (j, &v) in azimuth.iter().enumerate() {
            let p = DVec3::new(
                rx * rho * u.sin() * v.cos(),
                rx * rho * u.sin() * v.sin(),
                center_z + rz * rho * u.cos(),
            );
            x.set(i, j, p.x);
            y.set(i, j, p.y);
            z.set(i, j, p.z);
        }
    }
    SurfaceMesh { x, y, z }
}

/// Single ellipsoidal lobe enclosing both atoms: bonding character
fn bonding_mesh(d: f64) -> SurfaceMesh {
    surface(d / 2.0, 0.9, d / 2.0 + 0.9, |_| 1.0)
}

/// Two lobes pinched at the nodal plane: antibonding character
fn antibonding_mesh(d: f64) -> SurfaceMesh {
    surface(d / 2.0, 0.9, d / 2.0 + 0.9, |u| 0.15 + 0.85 * u.cos().abs())
}

/// Pointwise interpolation between two same-shape meshes
fn blend(a: &SurfaceMesh, b: &SurfaceMesh, w: f64) -> SurfaceMesh {
    let lerp = |p: f64, q: f64| (1.0 - w) * p + w * q;
    SurfaceMesh {
        x: a.x.zip_map(&b.x, lerp),
        y: a.y.zip_map(&b.y, lerp),
        z: a.z.zip_map(&b.z, lerp),
    }
}

/// Build the full 100-sample dataset
pub fn synthesize() -> CrossingDataset {
    let bond_lengths = linspace(BOND_MIN, BOND_MAX, CROSSING_SAMPLES);

    let mut low_a_curve = Vec::with_capacity(CROSSING_SAMPLES);
    let mut high_a_curve = Vec::with_capacity(CROSSING_SAMPLES);
    let mut low_d_curve = Vec::with_capacity(CROSSING_SAMPLES);
    let mut high_d_curve = Vec::with_capacity(CROSSING_SAMPLES);
    let mut low_a_mo = Vec::with_capacity(CROSSING_SAMPLES);
    let mut high_a_mo = Vec::with_capacity(CROSSING_SAMPLES);
    let mut low_d_mo = Vec::with_capacity(CROSSING_SAMPLES);
    let mut high_d_mo = Vec::with_capacity(CROSSING_SAMPLES);

    for &d in &bond_lengths {
        let e_low = low_diabat(d);
        let e_high = high_diabat(d);
        let h = Matrix2::new(e_low, COUPLING, COUPLING, e_high);
        let eigen = nalgebra::SymmetricEigen::new(h);
        let lo = eigen.eigenvalues[0].min(eigen.eigenvalues[1]);
        let hi = eigen.eigenvalues[0].max(eigen.eigenvalues[1]);

        // Mixing angle of the diabatic -> adiabatic rotation; the adiabatic
        // low state trades bonding for antibonding character through the
        // crossing region.
        let chi = 0.5 * (2.0 * COUPLING).atan2(e_high - e_low);
        let w = chi.sin() * chi.sin();

        let bonding = bonding_mesh(d);
        let antibonding = antibonding_mesh(d);

        low_d_curve.push(e_low);
        high_d_curve.push(e_high);
        low_a_curve.push(lo);
        high_a_curve.push(hi);
        low_a_mo.push(blend(&bonding, &antibonding, w));
        high_a_mo.push(blend(&antibonding, &bonding, w));
        low_d_mo.push(bonding);
        high_d_mo.push(antibonding);
    }

    CrossingDataset {
        bond_lengths,
        low_a_curve,
        high_a_curve,
        low_d_curve,
        high_d_curve,
        low_a_mo,
        high_a_mo,
        low_d_mo,
        high_d_mo,
    }
}
