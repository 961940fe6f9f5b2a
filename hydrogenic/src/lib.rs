//! Hydrogen-like Orbital Wavefunctions
//!
//! This crate provides the quantum-mechanical building blocks for orbital
//! animations:
//!
//! - **Complex arithmetic**: lightweight complex number type for wavefunction values
//! - **Spherical harmonics**: `Y_l^m` with Condon-Shortley phase, any `l`
//! - **Radial functions**: hydrogenic `R_nl` and derived length scales
//! - **Orbitals**: immutable orbital states, by quantum numbers or by name
//!   from a catalog of the common real orbitals (1s through the 4f set)

pub mod complex;
pub mod harmonics;
pub mod radial;
pub mod orbital;
pub mod catalog;

pub use complex::Complex;
pub use orbital::{Orbital, QuantumNumbers};
