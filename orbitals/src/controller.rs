//! Central controller: owns the shared state, the calculator, the crossing
//! engine, and the render-event sender.
//!
//! The presentation shell calls into this type for every user action and
//! drives `tick` from its event-loop timer at `tick_interval`. Ticks are
//! routed to the active mode only, and switching modes stops the previous
//! animation before the new mode computes anything, so a stale timer fire
//! can never double-advance a fresh mode.

use crate::calculator::{Mode, OrbitalCalculator};
use crate::cell::{AppState, CycleMode};
use crate::constants::{CROSSING_TICK, ORBITAL_TICK};
use crate::crossing::{CrossingDataset, CrossingEngine};
use crate::events::{render_channel, RenderEvent, RenderEvents};
use hydrogenic::QuantumNumbers;
use std::path::Path;
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// Which selection cell an orbital choice lands in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateSlot {
    Stationary,
    Ket,
    Bra,
}

/// An orbital choice, by catalog name or by raw quantum numbers.
/// Raw numbers are clamped into a valid combination before use; the
/// calculator itself never re-validates.
#[derive(Debug, Clone)]
pub enum OrbitalSelection {
    Name(String),
    Numbers { n: u32, l: u32, m: i32, s: i8 },
}

pub struct Controller {
    state: AppState,
    calculator: OrbitalCalculator,
    crossing: Option<CrossingEngine>,
    events: RenderEvents,
}

impl Controller {
    /// Build the controller; the receiver goes to the single renderer.
    /// `dataset` is None when no crossing data could be loaded, which
    /// disables crossing mode and nothing else.
    pub fn new(dataset: Option<CrossingDataset>) -> (Self, Receiver<RenderEvent>) {
        let (events, rx) = render_channel();
        let controller = Self {
            state: AppState::default(),
            calculator: OrbitalCalculator::new(),
            crossing: dataset.map(CrossingEngine::new),
            events,
        };
        (controller, rx)
    }

    /// Load the crossing dataset from disk. A missing or corrupt file is
    /// fatal to crossing mode only: it is logged loudly and the other
    /// modes stay usable.
    pub fn with_dataset_file(path: &Path) -> (Self, Receiver<RenderEvent>) {
        let dataset = match CrossingDataset::load(path) {
            Ok(dataset) => Some(dataset),
            Err(err) => {
                log::error!("crossing dataset unavailable: {:#}", err);
                None
            }
        };
        Self::new(dataset)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.calculator.mode()
    }

    pub fn has_crossing_data(&self) -> bool {
        self.crossing.is_some()
    }

    /// Crossing engine introspection, e.g. for the shell's energy-curve plot
    pub fn crossing(&self) -> Option<&CrossingEngine> {
        self.crossing.as_ref()
    }

    /// Switch views. Always stops the previous mode's animation first.
    pub fn select_mode(&mut self, mode: Mode) {
        if mode == Mode::Crossing && self.crossing.is_none() {
            log::error!("crossing mode unavailable: no dataset loaded");
            return;
        }
        if self.calculator.mode() == Mode::Crossing {
            if let Some(engine) = &mut self.crossing {
                engine.deactivate();
            }
        }
        self.calculator.select_mode(mode, &self.state, &self.events);
        if mode == Mode::Crossing {
            if let Some(engine) = &mut self.crossing {
                engine.activate(&self.state, &self.events);
            }
        }
    }

    /// Put a new orbital into a selection cell and recompute the current
    /// frame. Returns false (leaving everything untouched) for an unknown
    /// catalog name.
    pub fn select_orbital(&mut self, slot: StateSlot, selection: &OrbitalSelection) -> bool {
        let cell = match slot {
            StateSlot::Stationary => &self.state.stationary,
            StateSlot::Ket => &self.state.ket,
            StateSlot::Bra => &self.state.bra,
        };
        let written = match selection {
            OrbitalSelection::Name(name) => cell.write_name(name),
            OrbitalSelection::Numbers { n, l, m, s } => {
                cell.write_numbers(QuantumNumbers::clamped(*n, *l, *m, *s));
                true
            }
        };
        if written {
            self.calculator.orbital_changed(&self.state, &self.events);
        }
        written
    }

    pub fn select_coherence_submode(&mut self, cycle: CycleMode) {
        self.state.cycle.write(cycle);
        self.calculator.cycle_changed(&self.state, &self.events);
    }

    /// Start or stop the active mode's animation; returns whether one is
    /// now running.
    pub fn toggle_animation(&mut self) -> bool {
        match self.calculator.mode() {
            Mode::Crossing => match &mut self.crossing {
                Some(engine) => engine.toggle_animation(),
                None => false,
            },
            _ => self.calculator.toggle_animation(&self.state),
        }
    }

    /// The bond-length cursor moved. Ignored outside crossing mode, and
    /// suppressed while the traversal animates, the index advances on its
    /// own then.
    pub fn move_cursor(&mut self, position: f64) {
        if self.calculator.mode() != Mode::Crossing {
            return;
        }
        if let Some(engine) = &mut self.crossing {
            if engine.is_animating() {
                log::debug!("cursor input suppressed while the traversal runs");
                return;
            }
            engine.on_cursor_moved(position, &self.state, &self.events);
        }
    }

    pub fn select_curve_style(&mut self, adiabatic: bool) {
        if self.calculator.mode() != Mode::Crossing {
            log::debug!("curve style change ignored outside crossing mode");
            return;
        }
        if let Some(engine) = &mut self.crossing {
            engine.set_curve_style(adiabatic, &self.state, &self.events);
        }
    }

    /// One animation step, routed to the active mode. A no-op when nothing
    /// is running.
    pub fn tick(&mut self) {
        match self.calculator.mode() {
            Mode::Crossing => {
                if let Some(engine) = &mut self.crossing {
                    engine.tick(&self.state, &self.events);
                }
            }
            _ => self.calculator.tick(&self.state, &self.events),
        }
    }

    /// The timer period the shell should drive ticks at, or None while
    /// nothing animates.
    pub fn tick_interval(&self) -> Option<Duration> {
        match self.calculator.mode() {
            Mode::Crossing => match &self.crossing {
                Some(engine) if engine.is_animating() => Some(CROSSING_TICK),
                _ => None,
            },
            _ if self.calculator.is_animating() => Some(ORBITAL_TICK),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset_gen;
    use crate::frame::Frame;

    fn crossing_controller() -> (Controller, Receiver<RenderEvent>) {
        Controller::new(Some(dataset_gen::synthesize()))
    }

    #[test]
    fn test_crossing_mode_without_dataset_is_refused() {
        let (mut controller, rx) = Controller::new(None);
        controller.select_mode(Mode::Stationary);
        let _ = rx.try_iter().count();
        controller.select_mode(Mode::Crossing);
        assert_eq!(controller.mode(), Mode::Stationary);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_mode_switch_stops_previous_animation() {
        let (mut controller, _rx) = crossing_controller();
        controller.select_mode(Mode::Stationary);
        controller.toggle_animation();
        assert_eq!(controller.tick_interval(), Some(ORBITAL_TICK));
        controller.select_mode(Mode::Crossing);
        // The calculator's animation is gone; crossing starts stopped
        assert_eq!(controller.tick_interval(), None);
        controller.toggle_animation();
        assert_eq!(controller.tick_interval(), Some(CROSSING_TICK));
        controller.select_mode(Mode::Coherence);
        assert_eq!(controller.tick_interval(), None);
        assert!(!controller.crossing().unwrap().is_animating());
    }

    #[test]
    fn test_stale_tick_after_mode_switch_is_noop() {
        let (mut controller, rx) = crossing_controller();
        controller.select_mode(Mode::Stationary);
        controller.toggle_animation();
        controller.select_mode(Mode::Crossing);
        let _ = rx.try_iter().count();
        // A timer fire queued before the switch lands in the new mode,
        // where nothing is animating
        controller.tick();
        assert!(rx.try_recv().is_err());
        assert_eq!(controller.crossing().unwrap().index(), 0);
    }

    #[test]
    fn test_cursor_suppressed_while_animating() {
        let (mut controller, _rx) = crossing_controller();
        controller.select_mode(Mode::Crossing);
        controller.toggle_animation();
        for _ in 0..10 {
            controller.tick();
        }
        let index = controller.crossing().unwrap().index();
        controller.move_cursor(4.9);
        assert_eq!(controller.crossing().unwrap().index(), index);
        assert!(controller.crossing().unwrap().is_animating());
        // Once stopped, the cursor works again
        controller.toggle_animation();
        controller.move_cursor(4.9);
        assert!(controller.crossing().unwrap().index() > index);
    }

    #[test]
    fn test_unknown_orbital_name_is_rejected() {
        let (mut controller, rx) = Controller::new(None);
        controller.select_mode(Mode::Stationary);
        let _ = rx.try_iter().count();
        let ok = controller.select_orbital(
            StateSlot::Stationary,
            &OrbitalSelection::Name("17k".into()),
        );
        assert!(!ok);
        assert!(rx.try_recv().is_err());
        assert_eq!(controller.state().stationary.read().label(), "1s");
    }

    #[test]
    fn test_numbers_selection_is_clamped() {
        let (mut controller, _rx) = Controller::new(None);
        controller.select_mode(Mode::Stationary);
        let ok = controller.select_orbital(
            StateSlot::Stationary,
            &OrbitalSelection::Numbers { n: 2, l: 9, m: -7, s: 0 },
        );
        assert!(ok);
        // l capped at n-1 = 1, m clamped to -1, zero spin pushed to +1
        assert_eq!(controller.state().stationary.read().label(), "2p-1");
    }

    #[test]
    fn test_frame_cell_holds_latest_mode() {
        let (mut controller, _rx) = crossing_controller();
        controller.select_mode(Mode::Stationary);
        assert!(matches!(
            controller.state().frame.read(),
            Some(Frame::Orbital(_))
        ));
        controller.select_mode(Mode::Crossing);
        assert!(matches!(
            controller.state().frame.read(),
            Some(Frame::Crossing(_))
        ));
    }
}
