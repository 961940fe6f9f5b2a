//! Render event channel between the core and the presentation shell
//!
//! "Created" events tell the shell to (re)build its drawable from scratch;
//! "updated" events tell it to swap new data into the existing drawable.
//! Either way the shell reads the actual payload from the shared frame
//! cell. Exactly one consumer owns the receiving end.

use std::sync::mpsc::{channel, Receiver, Sender};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderEvent {
    /// A new orbital surface exists; rebuild the mesh drawable
    OrbitalCreated,
    /// The orbital surface changed in place; update the mesh source data
    OrbitalUpdated,
    /// A new crossing scene exists; rebuild surfaces and atom markers
    CrossingCreated,
    /// The crossing scene changed in place
    CrossingUpdated,
}

/// Sending half held by the core
#[derive(Debug, Clone)]
pub struct RenderEvents {
    tx: Sender<RenderEvent>,
}

impl RenderEvents {
    pub fn emit(&self, event: RenderEvent) {
        if self.tx.send(event).is_err() {
            log::debug!("render event {:?} dropped, consumer is gone", event);
        }
    }
}

/// Create the event channel; the receiver goes to the single renderer
pub fn render_channel() -> (RenderEvents, Receiver<RenderEvent>) {
    let (tx, rx) = channel();
    (RenderEvents { tx }, rx)
}
