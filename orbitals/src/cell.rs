//! Shared state cells: mutex-guarded holders for the current selections,
//! the latest computed frame, and the small display flags.
//!
//! Every cell holds exactly one current value. Writes replace the value
//! wholesale under the lock; reads hand back a clone of the latest fully
//! written value. Nothing is ever partially visible or destroyed in place.

use crate::frame::Frame;
use hydrogenic::{catalog, Orbital, QuantumNumbers};
use std::sync::{Mutex, PoisonError};

/// Which coherence display the two-state view is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleMode {
    /// Static two-term superposition, no Rabi weighting
    Coherence,
    /// Full Rabi period
    Rabi,
    /// Free-induction decay: a narrow early-time window of the Rabi cycle
    Fid,
}

/// Mutex-guarded holder of one current value
#[derive(Debug)]
pub struct SharedCell<T: Clone> {
    inner: Mutex<T>,
}

impl<T: Clone> SharedCell<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(value),
        }
    }

    pub fn read(&self) -> T {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn write(&self, value: T) {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) = value;
    }
}

/// Holder for a selected orbital.
///
/// The cell carries a fixed bohr frequency and stamps it onto every newly
/// selected orbital, so swapping states never changes the animation speed
/// configured for that slot.
#[derive(Debug)]
pub struct OrbitalCell {
    bohr: f64,
    inner: SharedCell<Orbital>,
}

impl OrbitalCell {
    pub fn new(orbital: Orbital, bohr: f64) -> Self {
        Self {
            bohr,
            inner: SharedCell::new(orbital.with_bohr(bohr)),
        }
    }

    pub fn read(&self) -> Orbital {
        self.inner.read()
    }

    /// Select a catalog orbital by name; false if the name is unknown
    pub fn write_name(&self, name: &str) -> bool {
        match catalog::by_name(name) {
            Some(orbital) => {
                self.inner.write(orbital.with_bohr(self.bohr));
                true
            }
            None => {
                log::warn!("unknown orbital name '{}'", name);
                false
            }
        }
    }

    /// Select a pure state from validated quantum numbers
    pub fn write_numbers(&self, qn: QuantumNumbers) {
        self.inner.write(Orbital::from_numbers(qn).with_bohr(self.bohr));
    }
}

fn default_orbital(name: &str, n: u32, l: u32) -> Orbital {
    catalog::by_name(name)
        .unwrap_or_else(|| Orbital::from_numbers(QuantumNumbers::clamped(n, l, 0, 1)))
}

/// All shared cells, created once at startup and owned by the controller
#[derive(Debug)]
pub struct AppState {
    /// Orbital shown in stationary mode
    pub stationary: OrbitalCell,
    /// Lower state |ket> of the coherence view
    pub ket: OrbitalCell,
    /// Upper state <bra| of the coherence view
    pub bra: OrbitalCell,
    /// Latest computed frame, replaced on every tick
    pub frame: SharedCell<Option<Frame>>,
    /// Whether the renderer should re-zoom on the next frame
    pub zoom: SharedCell<bool>,
    /// Selected coherence display mode
    pub cycle: SharedCell<CycleMode>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            stationary: OrbitalCell::new(default_orbital("1s", 1, 0), 1.0),
            ket: OrbitalCell::new(default_orbital("1s", 1, 0), 10.0),
            bra: OrbitalCell::new(default_orbital("2pz", 2, 1), 50.0),
            frame: SharedCell::new(None),
            zoom: SharedCell::new(true),
            cycle: SharedCell::new(CycleMode::Coherence),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_replaces_wholesale() {
        let cell = SharedCell::new(1);
        assert_eq!(cell.read(), 1);
        cell.write(7);
        assert_eq!(cell.read(), 7);
    }

    #[test]
    fn test_orbital_cell_stamps_bohr() {
        let cell = OrbitalCell::new(default_orbital("1s", 1, 0), 50.0);
        assert_eq!(cell.read().bohr(), 50.0);
        assert!(cell.write_name("3dxy"));
        let orbital = cell.read();
        assert_eq!(orbital.label(), "3dxy");
        assert_eq!(orbital.bohr(), 50.0);
        cell.write_numbers(QuantumNumbers::new(4, 3, -2, 1).unwrap());
        assert_eq!(cell.read().bohr(), 50.0);
    }

    #[test]
    fn test_unknown_name_keeps_current() {
        let cell = OrbitalCell::new(default_orbital("1s", 1, 0), 1.0);
        assert!(!cell.write_name("not-an-orbital"));
        assert_eq!(cell.read().label(), "1s");
    }

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert_eq!(state.stationary.read().label(), "1s");
        assert_eq!(state.stationary.read().bohr(), 1.0);
        assert_eq!(state.ket.read().label(), "1s");
        assert_eq!(state.ket.read().bohr(), 10.0);
        assert_eq!(state.bra.read().label(), "2pz");
        assert_eq!(state.bra.read().bohr(), 50.0);
        assert!(state.frame.read().is_none());
        assert!(state.zoom.read());
        assert_eq!(state.cycle.read(), CycleMode::Coherence);
    }
}
