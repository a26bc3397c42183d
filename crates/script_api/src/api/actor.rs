//! Actor transform queries and messaging
//!
//! Single-call delegations to the host. The only logic here is argument
//! checking and the "current actor if omitted" default.

use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::events::ActorMessage;
use crate::foundation::math::{is_finite_quat, is_finite_vec3, Quat, Vec3};
use crate::host::{ActorId, HostRuntime, ScriptContext};
use crate::ui::validate_message_name;

fn unknown_actor(actor: ActorId) -> ApiError {
    ApiError::invalid(format!("unknown actor {actor:?}"))
}

impl<H: HostRuntime + ?Sized> ScriptContext<'_, H> {
    /// Actor running the current script
    pub const fn self_actor(&self) -> ActorId {
        self.actor
    }

    /// World position of `actor` (default: current actor)
    pub fn get_position(&self, actor: Option<ActorId>) -> ApiResult<Vec3> {
        let actor = self.resolve_actor(actor);
        self.host.actor_position(actor).ok_or_else(|| unknown_actor(actor))
    }

    /// World rotation of `actor` (default: current actor)
    pub fn get_rotation(&self, actor: Option<ActorId>) -> ApiResult<Quat> {
        let actor = self.resolve_actor(actor);
        self.host.actor_rotation(actor).ok_or_else(|| unknown_actor(actor))
    }

    /// Scale of `actor` (default: current actor)
    pub fn get_scale(&self, actor: Option<ActorId>) -> ApiResult<Vec3> {
        let actor = self.resolve_actor(actor);
        self.host.actor_scale(actor).ok_or_else(|| unknown_actor(actor))
    }

    /// Move `actor` (default: current actor)
    pub fn set_position(&mut self, position: Vec3, actor: Option<ActorId>) -> ApiResult<()> {
        if !is_finite_vec3(&position) {
            return Err(ApiError::invalid(format!("position must be finite, got {position:?}")));
        }
        let actor = self.existing_actor(actor)?;
        self.host.set_actor_position(actor, position);
        Ok(())
    }

    /// Rotate `actor` (default: current actor)
    pub fn set_rotation(&mut self, rotation: Quat, actor: Option<ActorId>) -> ApiResult<()> {
        if !is_finite_quat(&rotation) {
            return Err(ApiError::invalid("rotation must be finite"));
        }
        let actor = self.existing_actor(actor)?;
        self.host.set_actor_rotation(actor, rotation);
        Ok(())
    }

    /// Rescale `actor` (default: current actor)
    pub fn set_scale(&mut self, scale: Vec3, actor: Option<ActorId>) -> ApiResult<()> {
        if !is_finite_vec3(&scale) {
            return Err(ApiError::invalid(format!("scale must be finite, got {scale:?}")));
        }
        let actor = self.existing_actor(actor)?;
        self.host.set_actor_scale(actor, scale);
        Ok(())
    }

    /// Queue a message for `actor`'s handler (default: current actor)
    ///
    /// `arg` is JSON-encoded now; a value that cannot be encoded is an
    /// [`ApiError::Serialization`]. Delivery happens on the next
    /// [`MessageQueue::dispatch`](crate::events::MessageQueue::dispatch).
    pub fn send_message<T: Serialize + ?Sized>(
        &mut self,
        name: &str,
        arg: &T,
        actor: Option<ActorId>,
    ) -> ApiResult<()> {
        validate_message_name(name)?;
        let target = self.existing_actor(actor)?;
        let arg_json = serde_json::to_string(arg)?;
        self.messages.send(ActorMessage::new(target, name, arg_json));
        Ok(())
    }

    fn existing_actor(&self, actor: Option<ActorId>) -> ApiResult<ActorId> {
        let actor = self.resolve_actor(actor);
        if self.host.actor_exists(actor) {
            Ok(actor)
        } else {
            Err(unknown_actor(actor))
        }
    }
}
