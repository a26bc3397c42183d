//! Per-frame ownership of actor command buffers
//!
//! The host calls [`UiFrame::begin_frame`] before running actor scripts and
//! [`UiFrame::consume`] once they are done. Nothing survives from one frame
//! to the next.

use std::collections::HashMap;

use super::buffer::UiCommandBuffer;
use super::commands::UiCommand;
use crate::core::{ApiColorDefaults, UiConfig};
use crate::host::ActorId;

/// All actor buffers for the current frame
#[derive(Debug, Default)]
pub struct UiFrame {
    ui_config: UiConfig,
    colors: ApiColorDefaults,
    frame: u64,
    buffers: HashMap<ActorId, UiCommandBuffer>,
    /// Actors in the order their buffers were first requested this frame
    order: Vec<ActorId>,
}

impl UiFrame {
    /// Create a frame collection with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a frame collection from explicit configuration
    pub fn with_config(ui_config: UiConfig, colors: ApiColorDefaults) -> Self {
        Self {
            ui_config,
            colors,
            ..Self::default()
        }
    }

    /// Current frame number (0 before the first `begin_frame`)
    pub const fn frame(&self) -> u64 {
        self.frame
    }

    /// Reset every buffer for a new frame
    ///
    /// Buffers of actors that did not request one during the previous frame
    /// are released, so despawned actors do not keep their allocation.
    pub fn begin_frame(&mut self) {
        self.frame += 1;
        let order = &self.order;
        let before = self.buffers.len();
        self.buffers.retain(|actor, _| order.contains(actor));
        for buffer in self.buffers.values_mut() {
            buffer.begin_frame(self.frame);
        }
        self.order.clear();
        log::debug!(
            "UI frame {} started with {} actor buffers ({} idle released)",
            self.frame,
            self.buffers.len(),
            before - self.buffers.len()
        );
    }

    /// Buffer for `actor`, created on first use
    pub fn buffer_mut(&mut self, actor: ActorId) -> &mut UiCommandBuffer {
        if !self.order.contains(&actor) {
            self.order.push(actor);
        }
        let frame = self.frame;
        let (ui_config, colors) = (&self.ui_config, self.colors);
        self.buffers.entry(actor).or_insert_with(|| {
            let mut buffer = UiCommandBuffer::with_config(actor, ui_config, colors);
            buffer.begin_frame(frame);
            buffer
        })
    }

    /// Buffer for `actor`, if it was requested this frame or the last
    pub fn buffer(&self, actor: ActorId) -> Option<&UiCommandBuffer> {
        self.buffers.get(&actor)
    }

    /// Forget a despawned actor's buffer
    pub fn remove_actor(&mut self, actor: ActorId) {
        self.buffers.remove(&actor);
        self.order.retain(|a| *a != actor);
    }

    /// Total commands across every actor this frame
    pub fn total_commands(&self) -> usize {
        self.buffers.values().map(UiCommandBuffer::len).sum()
    }

    /// Drain every buffer for the renderer
    ///
    /// Batches come out in the order actors first touched their buffer this
    /// frame; commands inside a batch keep call order. Actors that issued
    /// nothing are skipped.
    pub fn consume(&mut self) -> Vec<(ActorId, Vec<UiCommand>)> {
        let batches: Vec<_> = self
            .order
            .iter()
            .filter_map(|actor| {
                let commands = self.buffers.get_mut(actor)?.take_commands();
                (!commands.is_empty()).then_some((*actor, commands))
            })
            .collect();

        log::debug!(
            "UI frame {}: renderer consumed {} commands from {} actors",
            self.frame,
            batches.iter().map(|(_, commands)| commands.len()).sum::<usize>(),
            batches.len()
        );
        batches
    }
}
