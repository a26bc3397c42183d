//! Script-facing API
//!
//! Every operation a behavior script can call, implemented as methods on
//! [`ScriptContext`](crate::host::ScriptContext):
//! - ui: immediate-mode draw calls, text metrics and screen size
//! - actor: transform queries and actor messages
//! - audio: sound triggers
//!
//! Where an operation takes an optional actor, `None` means the actor running
//! the script.

pub mod ui;
pub mod actor;
pub mod audio;

pub use audio::SoundOptions;

#[cfg(test)]
mod tests;
