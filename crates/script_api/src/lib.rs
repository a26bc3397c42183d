//! # Script API
//!
//! The surface behavior scripts use to talk to the engine.
//!
//! ## Features
//!
//! - **Immediate-Mode UI**: per-actor command buffers rebuilt every frame
//! - **Text Metrics**: fixed-pitch measurement for script-side layout
//! - **Host Delegation**: actor transforms, sounds and messages through an
//!   explicit [`ScriptContext`](host::ScriptContext), no global state
//! - **Typed Errors**: every call validates its arguments and reports an
//!   [`ApiError`](error::ApiError) before anything is recorded
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use script_api::prelude::*;
//!
//! fn draw_hud<H: HostRuntime>(ctx: &mut ScriptContext<'_, H>) -> ApiResult<()> {
//!     let center_x = ctx.get_screen_width() / 2.0;
//!     ctx.add_text(center_x, 40.0, "Score: 120", None, Some(&TextOptions::centered()))?;
//!     ctx.add_button(20.0, 20.0, 160.0, 48.0, "Pause", Some("onPause"), None)?;
//!     ctx.try_play_sound("tick", None)?;
//!     Ok(())
//! }
//!
//! fn run_frame<H: HostRuntime>(host: &mut H, actors: &[ActorId]) -> ApiResult<()> {
//!     let config = ApiConfig::default();
//!     let mut frame = UiFrame::with_config(config.ui.clone(), config.colors);
//!     let mut messages = MessageQueue::new();
//!
//!     frame.begin_frame();
//!     for &actor in actors {
//!         let mut ctx = ScriptContext::new(host, frame.buffer_mut(actor), &mut messages, &config);
//!         draw_hud(&mut ctx)?;
//!     }
//!     for (_actor, commands) in frame.consume() {
//!         // hand `commands` to the renderer
//!         let _ = commands;
//!     }
//!     messages.dispatch(host);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod core;
pub mod error;
pub mod ui;
pub mod events;
pub mod host;
pub mod api;

pub use error::{ApiError, ApiResult, ResourceKind};

/// Common imports for script bindings
pub mod prelude {
    pub use crate::{
        ApiError, ApiResult, ResourceKind,
        api::SoundOptions,
        core::{ApiConfig, UiConfig, AudioConfig, ApiColorDefaults, Config},
        events::{ActorMessage, MessageQueue},
        foundation::math::{Vec3, Quat, Point2},
        host::{ActorId, HostRuntime, ScriptContext, SoundRequest},
        ui::{
            ColorValue, DrawStyle, UiCommand, UiCommandKind, UiPayload, UiRect,
            TextOptions, ShapeOptions, ButtonOptions, ImageOptions, parse_options,
            UiCommandBuffer, UiFrame, UI_SCREEN_WIDTH,
        },
    };
}
