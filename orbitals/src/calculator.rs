//! The orbital calculator: stationary and coherence frame computation
//! plus the animation bookkeeping that drives them.
//!
//! Avoided crossings are handled by the sibling [`crate::crossing`] engine;
//! in that mode the calculator only guarantees its own animation is stopped.

use crate::cell::{AppState, CycleMode};
use crate::constants::{
    CYCLE_TIME_SAMPLES, FID_TIME_SAMPLES, STATIONARY_TIME_SAMPLES,
};
use crate::events::{RenderEvent, RenderEvents};
use crate::frame::{Frame, OrbitalFrame};
use crate::grid::{linspace, AngularGrid, Grid2};
use hydrogenic::{Complex, Orbital};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_1_SQRT_2, TAU};

/// Which view the core is currently computing frames for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Stationary,
    Coherence,
    /// Delegated to the crossing engine
    Crossing,
}

/// Geometry cached per stationary orbital selection: the r_90p-scaled
/// direction basis and the angular probability, both time-invariant.
struct StationaryGeometry {
    orbital: Orbital,
    x: Grid2,
    y: Grid2,
    z: Grid2,
    prob: Grid2,
}

pub struct OrbitalCalculator {
    mode: Mode,
    cycle: CycleMode,
    animating: bool,
    i: usize,
    times: Vec<f64>,
    grid: AngularGrid,
    stationary: Option<StationaryGeometry>,
    pair: Option<(Orbital, Orbital)>,
}

fn stationary_times() -> Vec<f64> {
    linspace(0.0, TAU, STATIONARY_TIME_SAMPLES)
}

fn cycle_times(cycle: CycleMode) -> Vec<f64> {
    match cycle {
        CycleMode::Coherence | CycleMode::Rabi => linspace(0.0, TAU, CYCLE_TIME_SAMPLES),
        CycleMode::Fid => linspace(FRAC_PI_4, FRAC_PI_2, FID_TIME_SAMPLES),
    }
}

/// Surface length scale of the two-state superposition at time t
fn cycle_radius(cycle: CycleMode, t: f64, ket: &Orbital, bra: &Orbital) -> f64 {
    match cycle {
        CycleMode::Coherence => 0.5 * (ket.r_90p() + bra.r_90p()),
        CycleMode::Rabi | CycleMode::Fid => {
            t.sin() * t.sin() * ket.r_90p() + t.cos() * t.cos() * bra.r_90p()
        }
    }
}

impl OrbitalCalculator {
    pub fn new() -> Self {
        Self {
            mode: Mode::Stationary,
            cycle: CycleMode::Coherence,
            animating: false,
            i: 0,
            times: stationary_times(),
            grid: AngularGrid::standard(),
            stationary: None,
            pair: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn frame_index(&self) -> usize {
        self.i
    }

    pub fn time_samples(&self) -> usize {
        self.times.len()
    }

    /// Enter a mode: stop any running animation, restart the time sequence,
    /// and publish the new mode's first frame.
    pub fn select_mode(&mut self, mode: Mode, state: &AppState, events: &RenderEvents) {
        self.animating = false;
        self.mode = mode;
        self.i = 0;
        log::info!("mode -> {:?}", mode);
        match mode {
            Mode::Stationary => {
                self.times = stationary_times();
                self.change_stationary(state, events, true);
            }
            Mode::Coherence => {
                state.zoom.write(false);
                self.cycle = state.cycle.read();
                self.change_coherence(state, events, true);
            }
            Mode::Crossing => {}
        }
    }

    /// A new orbital landed in one of the selection cells
    pub fn orbital_changed(&mut self, state: &AppState, events: &RenderEvents) {
        match self.mode {
            Mode::Stationary => self.change_stationary(state, events, false),
            Mode::Coherence => self.change_coherence(state, events, false),
            Mode::Crossing => {}
        }
    }

    /// The coherence display mode flag changed
    pub fn cycle_changed(&mut self, state: &AppState, events: &RenderEvents) {
        self.cycle = state.cycle.read();
        if self.mode == Mode::Coherence {
            self.i = 0;
            self.change_coherence(state, events, false);
        }
    }

    /// Start or stop the animation; returns whether it is now running.
    /// Starting clears the zoom flag, continuous re-zooming mid-animation
    /// is disorienting.
    pub fn toggle_animation(&mut self, state: &AppState) -> bool {
        if self.animating {
            self.animating = false;
        } else {
            state.zoom.write(false);
            self.animating = true;
        }
        self.animating
    }

    /// Advance one animation step. A no-op unless running, so stale timer
    /// fires after a stop or mode switch fall through harmlessly.
    pub fn tick(&mut self, state: &AppState, events: &RenderEvents) {
        if !self.animating {
            return;
        }
        let frame = match self.mode {
            Mode::Stationary => self.compute_stationary(),
            Mode::Coherence => self.compute_coherence(),
            Mode::Crossing => return,
        };
        if let Some(frame) = frame {
            if store_frame(state, frame) {
                events.emit(RenderEvent::OrbitalUpdated);
            }
        }
        self.i += 1;
    }

    fn change_stationary(&mut self, state: &AppState, events: &RenderEvents, first: bool) {
        let orbital = state.stationary.read();
        let r = orbital.r_90p();
        log::debug!("stationary orbital {} (r_90p {:.3})", orbital.label(), r);
        let x = self.grid.evaluate(|theta, phi| r * phi.sin() * theta.cos());
        let y = self.grid.evaluate(|theta, phi| r * phi.sin() * theta.sin());
        let z = self.grid.evaluate(|_, phi| r * phi.cos());
        let prob = self
            .grid
            .evaluate(|theta, phi| orbital.angular(theta, phi).norm_sq());
        // let prob = prob.map(|p| p / prob.max_value() * r);
        self.stationary = Some(StationaryGeometry { orbital, x, y, z, prob });

        if let Some(frame) = self.compute_stationary() {
            if store_frame(state, frame) {
                state.zoom.write(true);
                events.emit(if first {
                    RenderEvent::OrbitalCreated
                } else {
                    RenderEvent::OrbitalUpdated
                });
            }
        }
    }

    fn change_coherence(&mut self, state: &AppState, events: &RenderEvents, first: bool) {
        let ket = state.ket.read();
        let bra = state.bra.read();
        log::debug!("coherence pair |{}> <{}|", ket.label(), bra.label());
        self.times = cycle_times(self.cycle);
        self.pair = Some((ket, bra));

        if let Some(frame) = self.compute_coherence() {
            if store_frame(state, frame) {
                events.emit(if first {
                    RenderEvent::OrbitalCreated
                } else {
                    RenderEvent::OrbitalUpdated
                });
            }
        }
    }

    fn compute_stationary(&self) -> Option<OrbitalFrame> {
        let geom = self.stationary.as_ref()?;
        let t = self.times[self.i % self.times.len()];
        let precession = Complex::exp_i(geom.orbital.bohr() * t);
        let psi = self
            .grid
            .evaluate(|theta, phi| (geom.orbital.angular(theta, phi) * precession).arg());
        Some(OrbitalFrame {
            x: geom.prob.zip_map(&geom.x, |p, v| p * v),
            y: geom.prob.zip_map(&geom.y, |p, v| p * v),
            z: geom.prob.zip_map(&geom.z, |p, v| p * v),
            psi,
        })
    }

    fn compute_coherence(&self) -> Option<OrbitalFrame> {
        let (ket, bra) = self.pair.as_ref()?;
        let t = self.times[self.i % self.times.len()];
        let radius = cycle_radius(self.cycle, t, ket, bra);
        let (ket_weight, bra_weight) = match self.cycle {
            CycleMode::Coherence => (FRAC_1_SQRT_2, FRAC_1_SQRT_2),
            CycleMode::Rabi | CycleMode::Fid => (t.sin(), t.cos()),
        };
        let ket_phase = Complex::exp_i(ket.bohr() * t) * ket_weight;
        let bra_phase = Complex::exp_i(bra.bohr() * t) * bra_weight;

        let rows = self.grid.rows();
        let cols = self.grid.cols();
        let mut rs = Grid2::filled(rows, cols, 0.0);
        let mut psi = Grid2::filled(rows, cols, 0.0);
        for i in 0..rows {
            let phi = self.grid.polar()[i];
            for j in 0..cols {
                let theta = self.grid.azimuth()[j];
                let angular =
                    ket.angular(theta, phi) * ket_phase + bra.angular(theta, phi) * bra_phase;
                rs.set(i, j, angular.norm_sq());
                psi.set(i, j, angular.arg());
            }
        }
        // let rs = rs.map(|v| v / rs.max_value());
        let x = Grid2::from_fn(rows, cols, |i, j| {
            rs.get(i, j) * radius * self.grid.polar()[i].sin() * self.grid.azimuth()[j].cos()
        });
        let y = Grid2::from_fn(rows, cols, |i, j| {
            rs.get(i, j) * radius * self.grid.polar()[i].sin() * self.grid.azimuth()[j].sin()
        });
        let z = Grid2::from_fn(rows, cols, |i, j| {
            rs.get(i, j) * radius * self.grid.polar()[i].cos()
        });
        Some(OrbitalFrame { x, y, z, psi })
    }
}

impl Default for OrbitalCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Write a frame into the shared cell. Frames with non-finite samples are
/// dropped without notification so a degenerate state never kills the
/// animation loop.
fn store_frame(state: &AppState, frame: OrbitalFrame) -> bool {
    if !frame.is_finite() {
        log::debug!("dropping non-finite frame at publish");
        return false;
    }
    state.frame.write(Some(Frame::Orbital(frame)));
    true
}
