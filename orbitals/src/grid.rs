//! Flat 2-D grids and the fixed angular sampling grid

use crate::constants::{AZIMUTH_SAMPLES, POLAR_SAMPLES};
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// `count` evenly spaced values over the closed interval [start, end]
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count == 1 {
        return vec![start];
    }
    let step = (end - start) / (count - 1) as f64;
    (0..count).map(|i| start + i as f64 * step).collect()
}

/// 2-D array of f64 samples with flattened row-major storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid2 {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Grid2 {
    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    pub fn from_fn(rows: usize, cols: usize, f: impl Fn(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    fn index(&self, i: usize, j: usize) -> usize {
        i * self.cols + j
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[self.index(i, j)]
    }

    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        let idx = self.index(i, j);
        self.data[idx] = value;
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Elementwise transform
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Elementwise combination with a same-shape grid
    pub fn zip_map(&self, other: &Grid2, f: impl Fn(f64, f64) -> f64) -> Self {
        debug_assert_eq!(self.rows, other.rows);
        debug_assert_eq!(self.cols, other.cols);
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }

    pub fn max_value(&self) -> f64 {
        self.data.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }

    /// Storage length consistent with the declared shape
    pub fn shape_consistent(&self) -> bool {
        self.data.len() == self.rows * self.cols
    }
}

/// The fixed angular sampling grid: polar angle over [0, pi] along rows,
/// azimuthal angle over [0, 2*pi] along columns, endpoints included.
pub struct AngularGrid {
    polar: Vec<f64>,
    azimuth: Vec<f64>,
}

impl AngularGrid {
    pub fn standard() -> Self {
        Self {
            polar: linspace(0.0, PI, POLAR_SAMPLES),
            azimuth: linspace(0.0, TAU, AZIMUTH_SAMPLES),
        }
    }

    pub fn rows(&self) -> usize {
        self.polar.len()
    }

    pub fn cols(&self) -> usize {
        self.azimuth.len()
    }

    pub fn polar(&self) -> &[f64] {
        &self.polar
    }

    pub fn azimuth(&self) -> &[f64] {
        &self.azimuth
    }

    /// Evaluate f(theta, phi) over the full grid; theta is the azimuthal
    /// angle, phi the polar angle, matching x = r sin(phi) cos(theta).
    pub fn evaluate(&self, f: impl Fn(f64, f64) -> f64) -> Grid2 {
        Grid2::from_fn(self.rows(), self.cols(), |i, j| {
            f(self.azimuth[j], self.polar[i])
        })
    }
}
