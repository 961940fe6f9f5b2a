//! Avoided-crossing engine: selects and animates molecular-orbital frames
//! from a precomputed dataset sampled along the bond-length axis.
//!
//! The animations here differ enough from the orbital calculator that the
//! engine is self-contained: a one-shot traversal instead of an infinite
//! loop, and a cursor that scrubs the bond-length axis directly.

use crate::cell::AppState;
use crate::constants::CROSSING_SAMPLES;
use crate::events::{RenderEvent, RenderEvents};
use crate::frame::{CrossingFrame, Frame, SurfaceMesh};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// The precomputed avoided-crossing dataset: energies and molecular-orbital
/// meshes at 100 bond-length samples, loaded once at startup and read-only
/// thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossingDataset {
    pub bond_lengths: Vec<f64>,
    #[serde(rename = "Low_A_Curve")]
    pub low_a_curve: Vec<f64>,
    #[serde(rename = "High_A_Curve")]
    pub high_a_curve: Vec<f64>,
    #[serde(rename = "Low_D_Curve")]
    pub low_d_curve: Vec<f64>,
    #[serde(rename = "High_D_Curve")]
    pub high_d_curve: Vec<f64>,
    #[serde(rename = "Low_A_MO")]
    pub low_a_mo: Vec<SurfaceMesh>,
    #[serde(rename = "High_A_MO")]
    pub high_a_mo: Vec<SurfaceMesh>,
    #[serde(rename = "Low_D_MO")]
    pub low_d_mo: Vec<SurfaceMesh>,
    #[serde(rename = "High_D_MO")]
    pub high_d_mo: Vec<SurfaceMesh>,
}

impl CrossingDataset {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("opening crossing dataset {}", path.display()))?;
        let dataset: CrossingDataset = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing crossing dataset {}", path.display()))?;
        dataset.validate()?;
        Ok(dataset)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let file = File::create(path)
            .with_context(|| format!("creating crossing dataset {}", path.display()))?;
        serde_json::to_writer(BufWriter::new(file), self)
            .with_context(|| format!("writing crossing dataset {}", path.display()))?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.bond_lengths.len() != CROSSING_SAMPLES {
            anyhow::bail!(
                "expected {} bond lengths, got {}",
                CROSSING_SAMPLES,
                self.bond_lengths.len()
            );
        }
        if !self.bond_lengths.windows(2).all(|w| w[0] < w[1]) {
            anyhow::bail!("bond lengths must be strictly increasing");
        }
        for (name, curve) in [
            ("Low_A_Curve", &self.low_a_curve),
            ("High_A_Curve", &self.high_a_curve),
            ("Low_D_Curve", &self.low_d_curve),
            ("High_D_Curve", &self.high_d_curve),
        ] {
            if curve.len() != CROSSING_SAMPLES {
                anyhow::bail!("{} has {} samples, expected {}", name, curve.len(), CROSSING_SAMPLES);
            }
        }
        for (name, meshes) in [
            ("Low_A_MO", &self.low_a_mo),
            ("High_A_MO", &self.high_a_mo),
            ("Low_D_MO", &self.low_d_mo),
            ("High_D_MO", &self.high_d_mo),
        ] {
            if meshes.len() != CROSSING_SAMPLES {
                anyhow::bail!("{} has {} meshes, expected {}", name, meshes.len(), CROSSING_SAMPLES);
            }
            for (i, mesh) in meshes.iter().enumerate() {
                if !mesh.shape_consistent() {
                    anyhow::bail!("{}[{}] has inconsistent grid shapes", name, i);
                }
                if !mesh.same_shape(&meshes[0]) {
                    anyhow::bail!("{}[{}] shape differs from {}[0]", name, i, name);
                }
            }
        }
        Ok(())
    }
}

/// Frame selection and animation over the loaded dataset
pub struct CrossingEngine {
    data: CrossingDataset,
    index: usize,
    animating: bool,
    adiabatic: bool,
}

impl CrossingEngine {
    pub fn new(data: CrossingDataset) -> Self {
        Self {
            data,
            index: 0,
            animating: false,
            adiabatic: true,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn is_adiabatic(&self) -> bool {
        self.adiabatic
    }

    pub fn dataset(&self) -> &CrossingDataset {
        &self.data
    }

    /// Entering crossing mode: rewind to the first sample, re-arm the zoom,
    /// and publish the scene for a fresh drawable.
    pub fn activate(&mut self, state: &AppState, events: &RenderEvents) {
        self.index = 0;
        self.animating = false;
        state.zoom.write(true);
        self.publish(state, events, RenderEvent::CrossingCreated);
    }

    /// Leaving crossing mode stops the traversal where it stands
    pub fn deactivate(&mut self) {
        self.animating = false;
    }

    /// The bond-length cursor moved: stop the animation and jump to the
    /// first sample at or past the cursor, clamped into range.
    pub fn on_cursor_moved(&mut self, position: f64, state: &AppState, events: &RenderEvents) {
        if self.animating {
            self.animating = false;
        }
        self.index = self.scan(position);
        self.publish(state, events, RenderEvent::CrossingUpdated);
    }

    /// Switch between the adiabatic and diabatic mesh pair without moving
    /// the cursor.
    pub fn set_curve_style(&mut self, adiabatic: bool, state: &AppState, events: &RenderEvents) {
        self.adiabatic = adiabatic;
        self.publish(state, events, RenderEvent::CrossingUpdated);
    }

    /// Start or stop the traversal; returns whether it is now running.
    /// Restarting after a completed traversal rewinds to the first sample.
    pub fn toggle_animation(&mut self) -> bool {
        if self.animating {
            self.animating = false;
        } else {
            if self.index >= CROSSING_SAMPLES {
                self.index = 0;
            }
            self.animating = true;
        }
        self.animating
    }

    /// Publish the frame at the current sample, then advance. The traversal
    /// is one-shot: reaching the end stops the animation rather than
    /// wrapping around.
    pub fn tick(&mut self, state: &AppState, events: &RenderEvents) {
        if !self.animating {
            return;
        }
        self.publish(state, events, RenderEvent::CrossingUpdated);
        self.index += 1;
        if self.index >= CROSSING_SAMPLES {
            self.animating = false;
            log::info!("crossing traversal complete");
        }
    }

    /// Smallest sample index whose bond length is at or past the position
    fn scan(&self, position: f64) -> usize {
        for (i, &length) in self.data.bond_lengths.iter().enumerate() {
            if length >= position {
                return i;
            }
        }
        CROSSING_SAMPLES - 1
    }

    /// The renderable scene at the current sample
    pub fn frame(&self) -> CrossingFrame {
        let i = self.index.min(CROSSING_SAMPLES - 1);
        let (low, high) = if self.adiabatic {
            (&self.data.low_a_mo[i], &self.data.high_a_mo[i])
        } else {
            (&self.data.low_d_mo[i], &self.data.high_d_mo[i])
        };
        CrossingFrame {
            bond_length: self.data.bond_lengths[i],
            low: low.clone(),
            high: high.clone(),
        }
    }

    fn publish(&self, state: &AppState, events: &RenderEvents, event: RenderEvent) {
        let frame = self.frame();
        if !frame.is_finite() {
            log::debug!("dropping non-finite crossing frame");
            return;
        }
        state.frame.write(Some(Frame::Crossing(frame)));
        events.emit(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::render_channel;
    use crate::grid::{linspace, Grid2};
    use std::sync::mpsc::Receiver;

    /// Minimal valid dataset: 100 samples with tiny constant meshes
    fn test_dataset() -> CrossingDataset {
        let bond_lengths = linspace(1.5, 5.0, CROSSING_SAMPLES);
        let mesh = |value: f64| SurfaceMesh {
            x: Grid2::filled(2, 2, value),
            y: Grid2::filled(2, 2, value),
            z: Grid2::filled(2, 2, value),
        };
        CrossingDataset {
            bond_lengths,
            low_a_curve: vec![0.0; CROSSING_SAMPLES],
            high_a_curve: vec![1.0; CROSSING_SAMPLES],
            low_d_curve: vec![0.0; CROSSING_SAMPLES],
            high_d_curve: vec![1.0; CROSSING_SAMPLES],
            low_a_mo: (0..CROSSING_SAMPLES).map(|i| mesh(i as f64)).collect(),
            high_a_mo: (0..CROSSING_SAMPLES).map(|i| mesh(-(i as f64))).collect(),
            low_d_mo: vec![mesh(100.0); CROSSING_SAMPLES],
            high_d_mo: vec![mesh(-100.0); CROSSING_SAMPLES],
        }
    }

    fn setup() -> (CrossingEngine, AppState, RenderEvents, Receiver<RenderEvent>) {
        let (events, rx) = render_channel();
        (CrossingEngine::new(test_dataset()), AppState::default(), events, rx)
    }

    #[test]
    fn test_dataset_validates() {
        assert!(test_dataset().validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_shapes() {
        let mut short = test_dataset();
        short.bond_lengths.pop();
        assert!(short.validate().is_err());

        let mut unsorted = test_dataset();
        unsorted.bond_lengths.swap(10, 11);
        assert!(unsorted.validate().is_err());

        let mut missing_mesh = test_dataset();
        missing_mesh.high_d_mo.pop();
        assert!(missing_mesh.validate().is_err());

        let mut short_curve = test_dataset();
        short_curve.low_a_curve.pop();
        assert!(short_curve.validate().is_err());
    }

    #[test]
    fn test_activation_resets_and_creates() {
        let (mut engine, state, events, rx) = setup();
        engine.index = 42;
        state.zoom.write(false);
        engine.activate(&state, &events);
        assert_eq!(engine.index(), 0);
        assert!(state.zoom.read());
        assert_eq!(rx.try_recv(), Ok(RenderEvent::CrossingCreated));
        match state.frame.read() {
            Some(Frame::Crossing(f)) => assert_eq!(f.bond_length, 1.5),
            _ => panic!("no crossing frame published"),
        }
    }

    #[test]
    fn test_full_traversal_auto_stops() {
        let (mut engine, state, events, _rx) = setup();
        engine.activate(&state, &events);
        assert!(engine.toggle_animation());
        for _ in 0..CROSSING_SAMPLES {
            engine.tick(&state, &events);
        }
        assert_eq!(engine.index(), CROSSING_SAMPLES);
        assert!(!engine.is_animating());
        // Ticking past the end must not fault or publish
        engine.tick(&state, &events);
        engine.tick(&state, &events);
        assert_eq!(engine.index(), CROSSING_SAMPLES);
    }

    #[test]
    fn test_restart_after_traversal_rewinds() {
        let (mut engine, state, events, _rx) = setup();
        engine.activate(&state, &events);
        engine.toggle_animation();
        for _ in 0..CROSSING_SAMPLES {
            engine.tick(&state, &events);
        }
        assert!(engine.toggle_animation());
        assert_eq!(engine.index(), 0);
    }

    #[test]
    fn test_cursor_clamps_to_range() {
        let (mut engine, state, events, _rx) = setup();
        engine.on_cursor_moved(0.2, &state, &events);
        assert_eq!(engine.index(), 0);
        engine.on_cursor_moved(99.0, &state, &events);
        assert_eq!(engine.index(), CROSSING_SAMPLES - 1);
    }

    #[test]
    fn test_cursor_finds_first_sample_past_position() {
        let (mut engine, state, events, _rx) = setup();
        let target = engine.dataset().bond_lengths[30];
        engine.on_cursor_moved(target, &state, &events);
        assert_eq!(engine.index(), 30);
        engine.on_cursor_moved(target + 1e-9, &state, &events);
        assert_eq!(engine.index(), 31);
    }

    #[test]
    fn test_cursor_stops_animation() {
        let (mut engine, state, events, _rx) = setup();
        engine.activate(&state, &events);
        engine.toggle_animation();
        engine.on_cursor_moved(3.0, &state, &events);
        assert!(!engine.is_animating());
    }

    #[test]
    fn test_curve_style_keeps_index() {
        let (mut engine, state, events, _rx) = setup();
        engine.on_cursor_moved(3.0, &state, &events);
        let index = engine.index();
        engine.set_curve_style(false, &state, &events);
        assert_eq!(engine.index(), index);
        assert!(!engine.is_adiabatic());
        match state.frame.read() {
            Some(Frame::Crossing(f)) => assert_eq!(f.low.x.get(0, 0), 100.0),
            _ => panic!("no crossing frame published"),
        }
        engine.set_curve_style(true, &state, &events);
        match state.frame.read() {
            Some(Frame::Crossing(f)) => assert_eq!(f.low.x.get(0, 0), index as f64),
            _ => panic!("no crossing frame published"),
        }
    }

    #[test]
    fn test_tick_publishes_then_advances() {
        let (mut engine, state, events, rx) = setup();
        engine.activate(&state, &events);
        let _ = rx.try_iter().count();
        engine.toggle_animation();
        engine.tick(&state, &events);
        assert_eq!(rx.try_recv(), Ok(RenderEvent::CrossingUpdated));
        // Published frame was sample 0; the index is now 1
        match state.frame.read() {
            Some(Frame::Crossing(f)) => assert_eq!(f.bond_length, 1.5),
            _ => panic!("no crossing frame published"),
        }
        assert_eq!(engine.index(), 1);
    }

    #[test]
    fn test_json_roundtrip_preserves_field_names() {
        let dataset = test_dataset();
        let json = serde_json::to_string(&dataset).unwrap();
        for key in [
            "bond_lengths",
            "Low_A_Curve",
            "High_A_Curve",
            "Low_D_Curve",
            "High_D_Curve",
            "Low_A_MO",
            "High_A_MO",
            "Low_D_MO",
            "High_D_MO",
        ] {
            assert!(json.contains(key), "missing field {}", key);
        }
        let back: CrossingDataset = serde_json::from_str(&json).unwrap();
        assert!(back.validate().is_ok());
        assert_eq!(back.bond_lengths, dataset.bond_lengths);
    }
}
