//! Outgoing actor messages
//!
//! Button clicks and script-sent messages are queued here and forwarded
//! verbatim to the host's message dispatch. Delivery is deferred to
//! [`MessageQueue::dispatch`] so a handler never runs in the middle of the
//! script call that caused it.

use crate::host::{ActorId, HostRuntime};
use crate::ui::UiCommand;

/// Message addressed to an actor's message handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorMessage {
    /// Receiving actor
    pub target: ActorId,
    /// Handler name, already validated as an identifier
    pub name: String,
    /// JSON-encoded argument
    pub arg_json: String,
}

impl ActorMessage {
    /// Create a new message
    pub fn new(target: ActorId, name: impl Into<String>, arg_json: impl Into<String>) -> Self {
        Self {
            target,
            name: name.into(),
            arg_json: arg_json.into(),
        }
    }
}

/// FIFO queue of messages awaiting delivery
#[derive(Debug, Default)]
pub struct MessageQueue {
    pending: Vec<ActorMessage>,
}

impl MessageQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a message for the next dispatch
    pub fn send(&mut self, message: ActorMessage) {
        log::trace!("Queued message '{}' for actor {:?}", message.name, message.target);
        self.pending.push(message);
    }

    /// Queue the click message of a button the host reports as clicked
    ///
    /// Returns `false` (and queues nothing) for non-button commands and
    /// buttons without a click message.
    pub fn queue_click(&mut self, command: &UiCommand) -> bool {
        match command.click_message() {
            Some(message) => {
                self.send(message);
                true
            }
            None => false,
        }
    }

    /// Messages waiting for delivery, oldest first
    pub fn pending(&self) -> &[ActorMessage] {
        &self.pending
    }

    /// Number of queued messages
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is queued
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Forward every queued message to the host, oldest first
    ///
    /// Returns the number of messages delivered. Messages queued by the host
    /// while this runs wait for the next dispatch.
    pub fn dispatch<H: HostRuntime + ?Sized>(&mut self, host: &mut H) -> usize {
        let messages = std::mem::take(&mut self.pending);
        for message in &messages {
            host.send_message(message);
        }
        if !messages.is_empty() {
            log::debug!("Dispatched {} actor messages", messages.len());
        }
        messages.len()
    }

    /// Drop all queued messages (useful for scene transitions)
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
