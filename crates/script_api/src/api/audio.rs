//! Sound triggers
//!
//! `play_sound` treats an unknown sound id as an error; `try_play_sound`
//! reports it as `false` for scripts that want to carry on.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ApiError, ApiResult, ResourceKind};
use crate::host::{HostRuntime, ScriptContext, SoundRequest};

/// Options for `play_sound` / `try_play_sound`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SoundOptions {
    /// Volume 0.0 to 1.0, clamped (default [`AudioConfig::default_volume`](crate::core::AudioConfig::default_volume))
    pub volume: Option<f32>,
    /// Playback speed multiplier, must be positive (default 1)
    pub speed: f32,
    /// Play at the current actor's position instead of as a 2D sound (default `false`)
    pub spatial: bool,
}

impl Default for SoundOptions {
    fn default() -> Self {
        Self {
            volume: None,
            speed: 1.0,
            spatial: false,
        }
    }
}

impl SoundOptions {
    /// Set volume
    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = Some(volume);
        self
    }

    /// Set playback speed
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Play at the actor's position
    pub fn spatial(mut self) -> Self {
        self.spatial = true;
        self
    }
}

impl<H: HostRuntime + ?Sized> ScriptContext<'_, H> {
    /// Play a sound, failing with [`ApiError::MissingResource`] if the host
    /// does not know `sound_id`
    pub fn play_sound(&mut self, sound_id: &str, options: Option<&SoundOptions>) -> ApiResult<()> {
        let request = self.sound_request(sound_id, options)?;
        if !self.host.has_sound(sound_id) {
            return Err(ApiError::missing(ResourceKind::Sound, sound_id));
        }
        log::trace!("Actor {:?} plays '{}' at volume {}", self.actor, sound_id, request.volume);
        self.host.play_sound(&request);
        Ok(())
    }

    /// Play a sound if it exists
    ///
    /// Returns `Ok(false)` for an unknown id and nothing reaches the host.
    /// Invalid options are still an error.
    pub fn try_play_sound(&mut self, sound_id: &str, options: Option<&SoundOptions>) -> ApiResult<bool> {
        match self.play_sound(sound_id, options) {
            Ok(()) => Ok(true),
            Err(ApiError::MissingResource { .. }) => {
                log::warn!("Actor {:?}: sound '{}' not found, skipping", self.actor, sound_id);
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    fn sound_request(&self, sound_id: &str, options: Option<&SoundOptions>) -> ApiResult<SoundRequest> {
        if sound_id.trim().is_empty() {
            return Err(ApiError::invalid("soundId must not be empty"));
        }
        let defaults = SoundOptions::default();
        let options = options.unwrap_or(&defaults);

        let volume = ensure_finite("volume", options.volume.unwrap_or(self.config.audio.default_volume))?
            .clamp(0.0, 1.0);
        let speed = ensure_finite("speed", options.speed)?;
        if speed <= 0.0 {
            return Err(ApiError::invalid(format!("speed must be positive, got {speed}")));
        }

        let position = if options.spatial {
            let position = self.host.actor_position(self.actor);
            if position.is_none() {
                log::warn!("Actor {:?} has no position, playing sound as 2D", self.actor);
            }
            position
        } else {
            None
        };

        Ok(SoundRequest {
            sound_id: sound_id.to_string(),
            actor: self.actor,
            volume,
            speed,
            position,
        })
    }
}
