//! Host runtime boundary
//!
//! The engine that owns actors, transforms, audio and rendering lives outside
//! this crate. Scripts reach it only through [`HostRuntime`], handed to them
//! inside an explicit [`ScriptContext`].

pub mod context;

pub use context::ScriptContext;

use serde::{Deserialize, Serialize};

use crate::events::ActorMessage;
use crate::foundation::math::{Quat, Vec3};

/// Handle of an actor in the host simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub u64);

/// Fully resolved sound trigger handed to the host
#[derive(Debug, Clone, PartialEq)]
pub struct SoundRequest {
    /// Sound asset id
    pub sound_id: String,
    /// Actor that triggered the sound
    pub actor: ActorId,
    /// Volume, 0.0 to 1.0
    pub volume: f32,
    /// Playback speed multiplier
    pub speed: f32,
    /// World position for spatial playback, `None` for 2D playback
    pub position: Option<Vec3>,
}

/// Services the host engine provides to scripts
///
/// Queries return `None` for actors the host does not know. Return values
/// are passed back to scripts unchanged.
pub trait HostRuntime {
    /// UI-space height for the current aspect ratio (width is always 1600)
    fn screen_height(&self) -> f32;

    /// Whether an image asset with this id exists
    fn has_image(&self, image_id: &str) -> bool;

    /// Whether a sound asset with this id exists
    fn has_sound(&self, sound_id: &str) -> bool;

    /// Start playing a sound; the id has already been checked with `has_sound`
    fn play_sound(&mut self, request: &SoundRequest);

    /// Whether the actor exists
    fn actor_exists(&self, actor: ActorId) -> bool;

    /// World position of an actor
    fn actor_position(&self, actor: ActorId) -> Option<Vec3>;

    /// World rotation of an actor
    fn actor_rotation(&self, actor: ActorId) -> Option<Quat>;

    /// Scale of an actor
    fn actor_scale(&self, actor: ActorId) -> Option<Vec3>;

    /// Move an existing actor
    fn set_actor_position(&mut self, actor: ActorId, position: Vec3);

    /// Rotate an existing actor
    fn set_actor_rotation(&mut self, actor: ActorId, rotation: Quat);

    /// Rescale an existing actor
    fn set_actor_scale(&mut self, actor: ActorId, scale: Vec3);

    /// Deliver a message to an actor's message handler
    fn send_message(&mut self, message: &ActorMessage);
}
