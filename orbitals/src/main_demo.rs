//! Headless demo driver
//!
//! Stands in for the presentation shell: selects orbitals, toggles the
//! animations, drives ticks at the controller's own cadence, and drains
//! the render events a renderer would consume. Useful for eyeballing the
//! core's behavior from a terminal; nothing is drawn.
//!
//! Usage: orbitals_demo [crossing_data.json]

use orbitals::cell::CycleMode;
use orbitals::controller::{Controller, OrbitalSelection, StateSlot};
use orbitals::events::RenderEvent;
use orbitals::frame::Frame;
use orbitals::Mode;
use std::path::Path;
use std::sync::mpsc::Receiver;

/// Drive ticks at the controller's reported interval until the animation
/// stops on its own or the tick limit is reached.
fn pump(controller: &mut Controller, max_ticks: usize) -> usize {
    let mut ticks = 0;
    while ticks < max_ticks {
        let interval = match controller.tick_interval() {
            Some(interval) => interval,
            None => break,
        };
        std::thread::sleep(interval);
        controller.tick();
        ticks += 1;
    }
    ticks
}

fn drain(rx: &Receiver<RenderEvent>) -> (usize, usize) {
    let mut created = 0;
    let mut updated = 0;
    for event in rx.try_iter() {
        match event {
            RenderEvent::OrbitalCreated | RenderEvent::CrossingCreated => created += 1,
            RenderEvent::OrbitalUpdated | RenderEvent::CrossingUpdated => updated += 1,
        }
    }
    (created, updated)
}

fn describe_frame(controller: &Controller) {
    match controller.state().frame.read() {
        Some(Frame::Orbital(frame)) => {
            log::info!(
                "orbital frame: {}x{} grid, psi in [{:.3}, {:.3}]",
                frame.psi.rows(),
                frame.psi.cols(),
                frame.psi.data().iter().cloned().fold(f64::INFINITY, f64::min),
                frame.psi.data().iter().cloned().fold(f64::NEG_INFINITY, f64::max),
            );
        }
        Some(Frame::Crossing(frame)) => {
            log::info!(
                "crossing frame: bond length {:.3}, moving atom at {:?}",
                frame.bond_length,
                frame.moving_atom(),
            );
        }
        None => log::info!("no frame published"),
    }
}

fn main() {
    env_logger::init();
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "crossing_data.json".to_string());
    let (mut controller, rx) = Controller::with_dataset_file(Path::new(&path));

    // Stationary: one full precession of a 2pz orbital
    controller.select_mode(Mode::Stationary);
    controller.select_orbital(StateSlot::Stationary, &OrbitalSelection::Name("2pz".into()));
    controller.toggle_animation();
    let ticks = pump(&mut controller, 100);
    controller.toggle_animation();
    let (created, updated) = drain(&rx);
    log::info!("stationary: {} ticks, {} created / {} updated", ticks, created, updated);
    describe_frame(&controller);

    // Coherence: a stretch of the Rabi cycle between the default pair
    controller.select_mode(Mode::Coherence);
    controller.select_coherence_submode(CycleMode::Rabi);
    controller.toggle_animation();
    let ticks = pump(&mut controller, 100);
    controller.toggle_animation();
    let (created, updated) = drain(&rx);
    log::info!("coherence: {} ticks, {} created / {} updated", ticks, created, updated);
    describe_frame(&controller);

    // Crossing: the full one-shot traversal, if the dataset loaded
    if controller.has_crossing_data() {
        controller.select_mode(Mode::Crossing);
        controller.select_curve_style(true);
        controller.toggle_animation();
        let ticks = pump(&mut controller, 200);
        let (created, updated) = drain(&rx);
        log::info!("crossing: {} ticks, {} created / {} updated", ticks, created, updated);
        describe_frame(&controller);
    } else {
        log::warn!("skipping crossing demo, dataset not loaded");
    }
}
