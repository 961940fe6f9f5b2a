//! Renderable frame payloads published to the shared frame cell

use crate::grid::Grid2;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// One animation instant of a stationary or coherence surface: Cartesian
/// coordinates and the phase scalar, all on the same 50x100 angular grid.
#[derive(Debug, Clone)]
pub struct OrbitalFrame {
    pub x: Grid2,
    pub y: Grid2,
    pub z: Grid2,
    pub psi: Grid2,
}

impl OrbitalFrame {
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.psi.is_finite()
    }
}

/// A 3-D surface mesh as three same-shape coordinate grids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceMesh {
    pub x: Grid2,
    pub y: Grid2,
    pub z: Grid2,
}

impl SurfaceMesh {
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn same_shape(&self, other: &SurfaceMesh) -> bool {
        self.x.rows() == other.x.rows() && self.x.cols() == other.x.cols()
    }

    pub fn shape_consistent(&self) -> bool {
        self.x.shape_consistent()
            && self.y.shape_consistent()
            && self.z.shape_consistent()
            && self.x.rows() == self.y.rows()
            && self.x.cols() == self.y.cols()
            && self.x.rows() == self.z.rows()
            && self.x.cols() == self.z.cols()
    }
}

/// One animation instant of the avoided-crossing view: the bond-length
/// cursor plus the low and high molecular-orbital surfaces.
#[derive(Debug, Clone)]
pub struct CrossingFrame {
    pub bond_length: f64,
    pub low: SurfaceMesh,
    pub high: SurfaceMesh,
}

impl CrossingFrame {
    /// The stationary atom marker sits at the origin
    pub fn fixed_atom(&self) -> DVec3 {
        DVec3::ZERO
    }

    /// The dissociating atom marker moves out along z with the bond length
    pub fn moving_atom(&self) -> DVec3 {
        DVec3::new(0.0, 0.0, self.bond_length)
    }

    pub fn is_finite(&self) -> bool {
        self.bond_length.is_finite() && self.low.is_finite() && self.high.is_finite()
    }
}

/// The renderable payload for one animation instant
#[derive(Debug, Clone)]
pub enum Frame {
    Orbital(OrbitalFrame),
    Crossing(CrossingFrame),
}

impl Frame {
    pub fn is_finite(&self) -> bool {
        match self {
            Frame::Orbital(f) => f.is_finite(),
            Frame::Crossing(f) => f.is_finite(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mesh(value: f64) -> SurfaceMesh {
        SurfaceMesh {
            x: Grid2::filled(2, 3, value),
            y: Grid2::filled(2, 3, value),
            z: Grid2::filled(2, 3, value),
        }
    }

    #[test]
    fn test_orbital_frame_finiteness() {
        let g = Grid2::filled(2, 2, 1.0);
        let mut frame = OrbitalFrame {
            x: g.clone(),
            y: g.clone(),
            z: g.clone(),
            psi: g,
        };
        assert!(frame.is_finite());
        frame.psi.set(0, 0, f64::INFINITY);
        assert!(!frame.is_finite());
    }

    #[test]
    fn test_crossing_frame_markers() {
        let frame = CrossingFrame {
            bond_length: 2.5,
            low: mesh(0.0),
            high: mesh(1.0),
        };
        assert_eq!(frame.fixed_atom(), DVec3::ZERO);
        assert_eq!(frame.moving_atom(), DVec3::new(0.0, 0.0, 2.5));
    }

    #[test]
    fn test_mesh_shape_checks() {
        assert!(mesh(0.0).shape_consistent());
        assert!(mesh(0.0).same_shape(&mesh(4.0)));
    }
}
