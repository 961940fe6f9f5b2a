//! Hydrogenic Orbital Animation Core
//!
//! This crate computes the frame data behind interactive orbital
//! visualizations:
//!
//! - **Stationary states**: a single orbital's isosurface with its phase
//!   precessing at the bohr frequency
//! - **Coherences**: two-state superpositions, with optional Rabi cycling
//!   or a free-induction-decay window
//! - **Avoided crossings**: molecular-orbital surfaces swept along a
//!   precomputed bond-length axis
//!
//! The presentation shell is an external collaborator: it forwards user
//! selections into the [`controller::Controller`], drives the animation
//! ticks from its event loop, and reads the latest frame out of the shared
//! state whenever a render event arrives. Nothing in this crate draws.

pub mod grid;
pub mod frame;
pub mod cell;
pub mod events;
pub mod calculator;
pub mod crossing;
pub mod dataset_gen;
pub mod controller;

pub use calculator::Mode;
pub use cell::CycleMode;
pub use controller::{Controller, OrbitalSelection, StateSlot};
pub use events::RenderEvent;
pub use frame::Frame;

/// Fixed sizes and timing constants of the animation core
pub mod constants {
    use std::time::Duration;

    /// Polar-angle samples in the angular grid
    pub const POLAR_SAMPLES: usize = 50;

    /// Azimuthal-angle samples in the angular grid
    pub const AZIMUTH_SAMPLES: usize = 100;

    /// Time samples over one stationary precession period
    pub const STATIONARY_TIME_SAMPLES: usize = 100;

    /// Time samples over one coherence / Rabi period
    pub const CYCLE_TIME_SAMPLES: usize = 1000;

    /// Time samples in the free-induction-decay window
    pub const FID_TIME_SAMPLES: usize = 125;

    /// Bond-length samples in the crossing dataset
    pub const CROSSING_SAMPLES: usize = 100;

    /// Tick period for stationary and coherence animations
    pub const ORBITAL_TICK: Duration = Duration::from_millis(30);

    /// Tick period for the crossing animation
    pub const CROSSING_TICK: Duration = Duration::from_millis(50);
}
