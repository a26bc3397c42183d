//! Explicit per-invocation script context

use super::{ActorId, HostRuntime};
use crate::core::ApiConfig;
use crate::events::MessageQueue;
use crate::ui::UiCommandBuffer;

/// Everything one script invocation may touch
///
/// Built by the host for each actor callback and dropped when the callback
/// returns. The script API operations in [`crate::api`] are methods on this
/// type.
pub struct ScriptContext<'a, H: HostRuntime + ?Sized> {
    pub(crate) host: &'a mut H,
    pub(crate) actor: ActorId,
    pub(crate) ui: &'a mut UiCommandBuffer,
    pub(crate) messages: &'a mut MessageQueue,
    pub(crate) config: &'a ApiConfig,
}

impl<'a, H: HostRuntime + ?Sized> ScriptContext<'a, H> {
    /// Create a context for the actor that owns `ui`
    ///
    /// `ui` should be the actor's buffer for the current frame
    /// (see [`UiFrame::buffer_mut`](crate::ui::UiFrame::buffer_mut)); the
    /// script runs as that buffer's actor.
    pub fn new(
        host: &'a mut H,
        ui: &'a mut UiCommandBuffer,
        messages: &'a mut MessageQueue,
        config: &'a ApiConfig,
    ) -> Self {
        Self {
            host,
            actor: ui.actor(),
            ui,
            messages,
            config,
        }
    }

    /// Actor running the current script
    pub const fn actor(&self) -> ActorId {
        self.actor
    }

    /// Read-only view of this frame's UI commands
    pub fn ui(&self) -> &UiCommandBuffer {
        &*self.ui
    }

    /// API configuration in effect
    pub const fn config(&self) -> &ApiConfig {
        self.config
    }

    /// `actor` if given, otherwise the current actor
    pub(crate) fn resolve_actor(&self, actor: Option<ActorId>) -> ActorId {
        actor.unwrap_or(self.actor)
    }
}
