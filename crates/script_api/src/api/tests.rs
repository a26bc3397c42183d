//! Script API tests driven by an in-memory host

use std::cell::Cell;
use std::collections::{HashMap, HashSet};

use approx::assert_relative_eq;
use serde_json::json;

use super::SoundOptions;
use crate::core::ApiConfig;
use crate::error::{ApiError, ResourceKind};
use crate::events::{ActorMessage, MessageQueue};
use crate::foundation::math::{Quat, Vec3};
use crate::host::{ActorId, HostRuntime, ScriptContext, SoundRequest};
use crate::ui::{ButtonOptions, TextOptions, UiCommandKind, UiFrame, UiPayload};

const PLAYER: ActorId = ActorId(1);
const ENEMY: ActorId = ActorId(2);

struct Transform {
    position: Vec3,
    rotation: Quat,
    scale: Vec3,
}

/// Host double that records every call
struct RecordingHost {
    screen_height: f32,
    images: HashSet<String>,
    image_lookups: Cell<usize>,
    sounds: HashSet<String>,
    actors: HashMap<ActorId, Transform>,
    played: Vec<SoundRequest>,
    delivered: Vec<ActorMessage>,
}

impl RecordingHost {
    fn new() -> Self {
        let mut actors = HashMap::new();
        for (actor, x) in [(PLAYER, 1.0), (ENEMY, 5.0)] {
            actors.insert(
                actor,
                Transform {
                    position: Vec3::new(x, 0.0, -2.0),
                    rotation: Quat::identity(),
                    scale: Vec3::new(1.0, 1.0, 1.0),
                },
            );
        }

        Self {
            screen_height: 900.0,
            images: ["logo", "sheet"].iter().map(|s| s.to_string()).collect(),
            image_lookups: Cell::new(0),
            sounds: ["jump"].iter().map(|s| s.to_string()).collect(),
            actors,
            played: Vec::new(),
            delivered: Vec::new(),
        }
    }
}

impl HostRuntime for RecordingHost {
    fn screen_height(&self) -> f32 {
        self.screen_height
    }

    fn has_image(&self, image_id: &str) -> bool {
        self.image_lookups.set(self.image_lookups.get() + 1);
        self.images.contains(image_id)
    }

    fn has_sound(&self, sound_id: &str) -> bool {
        self.sounds.contains(sound_id)
    }

    fn play_sound(&mut self, request: &SoundRequest) {
        self.played.push(request.clone());
    }

    fn actor_exists(&self, actor: ActorId) -> bool {
        self.actors.contains_key(&actor)
    }

    fn actor_position(&self, actor: ActorId) -> Option<Vec3> {
        self.actors.get(&actor).map(|t| t.position)
    }

    fn actor_rotation(&self, actor: ActorId) -> Option<Quat> {
        self.actors.get(&actor).map(|t| t.rotation)
    }

    fn actor_scale(&self, actor: ActorId) -> Option<Vec3> {
        self.actors.get(&actor).map(|t| t.scale)
    }

    fn set_actor_position(&mut self, actor: ActorId, position: Vec3) {
        if let Some(t) = self.actors.get_mut(&actor) {
            t.position = position;
        }
    }

    fn set_actor_rotation(&mut self, actor: ActorId, rotation: Quat) {
        if let Some(t) = self.actors.get_mut(&actor) {
            t.rotation = rotation;
        }
    }

    fn set_actor_scale(&mut self, actor: ActorId, scale: Vec3) {
        if let Some(t) = self.actors.get_mut(&actor) {
            t.scale = scale;
        }
    }

    fn send_message(&mut self, message: &ActorMessage) {
        self.delivered.push(message.clone());
    }
}

/// Host, frame and queue wired the way an engine would
struct Fixture {
    host: RecordingHost,
    frame: UiFrame,
    messages: MessageQueue,
    config: ApiConfig,
}

impl Fixture {
    fn new() -> Self {
        let config = ApiConfig::default();
        let mut frame = UiFrame::with_config(config.ui.clone(), config.colors);
        frame.begin_frame();
        Self {
            host: RecordingHost::new(),
            frame,
            messages: MessageQueue::new(),
            config,
        }
    }

    fn ctx(&mut self, actor: ActorId) -> ScriptContext<'_, RecordingHost> {
        ScriptContext::new(
            &mut self.host,
            self.frame.buffer_mut(actor),
            &mut self.messages,
            &self.config,
        )
    }
}

#[test]
fn test_n_calls_yield_n_records_then_empty_next_frame() {
    let mut fx = Fixture::new();
    {
        let mut ctx = fx.ctx(PLAYER);
        ctx.add_text(10.0, 10.0, "score", None, None).unwrap();
        ctx.add_rect(0.0, 0.0, 100.0, 20.0, None, None).unwrap();
        ctx.add_circle(50.0, 50.0, 4.0, None, None).unwrap();
        ctx.add_triangle(0.0, 0.0, 10.0, 0.0, 5.0, 8.0, None, None).unwrap();
        ctx.add_line(0.0, 0.0, 30.0, 30.0, None, None).unwrap();
        ctx.add_button(0.0, 100.0, 120.0, 40.0, "Start", Some("onStart"), None).unwrap();
        ctx.add_image(200.0, 200.0, "logo", None, None, None).unwrap();
        ctx.add_image_slice(0.0, 0.0, 32.0, 32.0, 0.0, 0.0, 16.0, 16.0, "sheet", None).unwrap();
        assert_eq!(ctx.ui().len(), 8);
    }

    let batches = fx.frame.consume();
    assert_eq!(batches.len(), 1);
    let kinds: Vec<_> = batches[0].1.iter().map(|c| c.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            UiCommandKind::Text,
            UiCommandKind::Rect,
            UiCommandKind::Circle,
            UiCommandKind::Triangle,
            UiCommandKind::Line,
            UiCommandKind::Button,
            UiCommandKind::Image,
            UiCommandKind::ImageSlice,
        ]
    );

    fx.frame.begin_frame();
    assert!(fx.ctx(PLAYER).ui().is_empty());
}

#[test]
fn test_measure_text_properties() {
    let mut fx = Fixture::new();
    let ctx = fx.ctx(PLAYER);

    assert_relative_eq!(
        ctx.measure_text_width("ab\nabcd", None).unwrap(),
        ctx.measure_text_width("abcd", None).unwrap()
    );
    assert_relative_eq!(
        ctx.measure_text_width("abcd", Some(40.0)).unwrap(),
        2.0 * ctx.measure_text_width("abcd", Some(20.0)).unwrap()
    );
    assert_relative_eq!(
        ctx.measure_text_height("a\nb\nc", None).unwrap(),
        3.0 * ctx.measure_text_height("a", None).unwrap()
    );
    assert!(matches!(
        ctx.measure_text_width("a", Some(f32::NAN)),
        Err(ApiError::InvalidArgument(_))
    ));
    assert!(ctx.measure_text_height("a", Some(-3.0)).is_err());
}

#[test]
fn test_screen_size() {
    let mut fx = Fixture::new();
    assert_eq!(fx.ctx(PLAYER).get_screen_width(), 1600.0);
    assert_eq!(fx.ctx(PLAYER).get_screen_height(), 900.0);

    fx.host.screen_height = 1200.0;
    assert_eq!(fx.ctx(PLAYER).get_screen_width(), 1600.0);
    assert_eq!(fx.ctx(PLAYER).get_screen_height(), 1200.0);
}

#[test]
fn test_centered_text_through_context() {
    let mut fx = Fixture::new();
    let mut ctx = fx.ctx(PLAYER);
    let width = ctx.measure_text_width("Game Over", Some(40.0)).unwrap();
    let height = ctx.measure_text_height("Game Over", Some(40.0)).unwrap();
    ctx.add_text(800.0, 450.0, "Game Over", None, Some(&TextOptions::centered().with_size(40.0)))
        .unwrap();

    let rect = ctx.ui().commands()[0].rect;
    assert_relative_eq!(rect.x, 800.0 - width / 2.0);
    assert_relative_eq!(rect.y, 450.0 - height / 2.0);
}

#[test]
fn test_unknown_image_is_missing_resource() {
    let mut fx = Fixture::new();
    let mut ctx = fx.ctx(PLAYER);

    let result = ctx.add_image(0.0, 0.0, "nope", None, None, None);
    assert!(matches!(
        result,
        Err(ApiError::MissingResource { kind: ResourceKind::Image, ref id }) if id == "nope"
    ));
    assert!(ctx.add_image_slice(0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0, "nope", None).is_err());
    assert!(matches!(
        ctx.add_image(0.0, 0.0, "", None, None, None),
        Err(ApiError::InvalidArgument(_))
    ));
    assert!(ctx.ui().is_empty());
}

#[test]
fn test_malformed_image_call_rejected_before_host_lookup() {
    let mut fx = Fixture::new();
    {
        let mut ctx = fx.ctx(PLAYER);
        assert!(matches!(
            ctx.add_image(f32::NAN, 0.0, "nope", None, None, None),
            Err(ApiError::InvalidArgument(_))
        ));
        assert!(matches!(
            ctx.add_image_slice(0.0, 0.0, -1.0, 1.0, 0.0, 0.0, 1.0, 1.0, "nope", None),
            Err(ApiError::InvalidArgument(_))
        ));
        assert!(ctx.ui().is_empty());
    }
    assert_eq!(fx.host.image_lookups.get(), 0);
}

#[test]
fn test_context_runs_as_buffer_owner() {
    let mut fx = Fixture::new();
    {
        let mut ctx = ScriptContext::new(
            &mut fx.host,
            fx.frame.buffer_mut(ENEMY),
            &mut fx.messages,
            &fx.config,
        );
        assert_eq!(ctx.self_actor(), ENEMY);
        ctx.add_button(0.0, 0.0, 80.0, 30.0, "Go", Some("onClick"), None).unwrap();
    }

    let batches = fx.frame.consume();
    let button = &batches[0].1[0];
    assert_eq!(button.actor, ENEMY);
    assert_eq!(button.click_message().map(|m| m.target), Some(ENEMY));
}

#[test]
fn test_try_play_sound_unknown_returns_false() {
    let mut fx = Fixture::new();
    {
        let mut ctx = fx.ctx(PLAYER);
        assert!(!ctx.try_play_sound("missing", None).unwrap());
        assert!(matches!(
            ctx.play_sound("missing", None),
            Err(ApiError::MissingResource { kind: ResourceKind::Sound, .. })
        ));
    }
    assert!(fx.host.played.is_empty());
}

#[test]
fn test_play_sound_builds_request() {
    let mut fx = Fixture::new();
    {
        let mut ctx = fx.ctx(ENEMY);
        assert!(ctx.try_play_sound("jump", None).unwrap());
        ctx.play_sound("jump", Some(&SoundOptions::default().with_volume(2.0).spatial()))
            .unwrap();
    }

    assert_eq!(fx.host.played.len(), 2);
    let plain = &fx.host.played[0];
    assert_eq!(plain.actor, ENEMY);
    assert_eq!(plain.volume, 1.0);
    assert!(plain.position.is_none());

    let spatial = &fx.host.played[1];
    assert_eq!(spatial.volume, 1.0);
    assert_eq!(spatial.position, Some(Vec3::new(5.0, 0.0, -2.0)));
}

#[test]
fn test_sound_invalid_options_error_even_for_try() {
    let mut fx = Fixture::new();
    let mut ctx = fx.ctx(PLAYER);
    let result = ctx.try_play_sound("jump", Some(&SoundOptions::default().with_speed(0.0)));
    assert!(matches!(result, Err(ApiError::InvalidArgument(_))));
    assert!(ctx.play_sound("  ", None).is_err());
}

#[test]
fn test_transform_queries_default_to_current_actor() {
    let mut fx = Fixture::new();
    {
        let mut ctx = fx.ctx(PLAYER);
        assert_eq!(ctx.self_actor(), PLAYER);
        assert_eq!(ctx.get_position(None).unwrap(), Vec3::new(1.0, 0.0, -2.0));
        assert_eq!(ctx.get_position(Some(ENEMY)).unwrap(), Vec3::new(5.0, 0.0, -2.0));
        assert_eq!(ctx.get_rotation(None).unwrap(), Quat::identity());
        assert_eq!(ctx.get_scale(Some(ENEMY)).unwrap(), Vec3::new(1.0, 1.0, 1.0));

        ctx.set_position(Vec3::new(3.0, 4.0, 5.0), None).unwrap();
        ctx.set_scale(Vec3::new(2.0, 2.0, 2.0), Some(ENEMY)).unwrap();
        let turn = Quat::from_axis_angle(&Vec3::y_axis(), std::f32::consts::FRAC_PI_2);
        ctx.set_rotation(turn, None).unwrap();
    }

    assert_eq!(fx.host.actors[&PLAYER].position, Vec3::new(3.0, 4.0, 5.0));
    assert_eq!(fx.host.actors[&ENEMY].scale, Vec3::new(2.0, 2.0, 2.0));
    assert_relative_eq!(
        fx.host.actors[&PLAYER].rotation.angle(),
        std::f32::consts::FRAC_PI_2,
        epsilon = 1e-6
    );
}

#[test]
fn test_transform_errors() {
    let mut fx = Fixture::new();
    let mut ctx = fx.ctx(PLAYER);
    assert!(matches!(ctx.get_position(Some(ActorId(99))), Err(ApiError::InvalidArgument(_))));
    assert!(ctx.set_position(Vec3::new(f32::NAN, 0.0, 0.0), None).is_err());
    assert!(ctx.set_scale(Vec3::new(1.0, 1.0, 1.0), Some(ActorId(99))).is_err());
}

#[test]
fn test_button_click_round_trip_to_host() {
    let mut fx = Fixture::new();
    {
        let mut ctx = fx.ctx(PLAYER);
        let options = ButtonOptions::default()
            .with_click_arg(&json!({"item": "sword", "cost": 30}))
            .unwrap();
        ctx.add_button(10.0, 10.0, 200.0, 50.0, "Buy", Some("onBuy"), Some(&options)).unwrap();
        ctx.add_button(10.0, 70.0, 200.0, 50.0, "Back", Some("onBack"), None).unwrap();
    }

    let batches = fx.frame.consume();
    let back = &batches[0].1[1];
    assert!(matches!(
        &back.payload,
        UiPayload::Button { click_message_arg_json, .. } if click_message_arg_json == "{}"
    ));

    // Host reports clicks on both buttons
    for command in &batches[0].1 {
        assert!(fx.messages.queue_click(command));
    }
    assert_eq!(fx.messages.dispatch(&mut fx.host), 2);
    assert!(fx.messages.is_empty());

    assert_eq!(fx.host.delivered[0].target, PLAYER);
    assert_eq!(fx.host.delivered[0].name, "onBuy");
    let arg: serde_json::Value = serde_json::from_str(&fx.host.delivered[0].arg_json).unwrap();
    assert_eq!(arg, json!({"item": "sword", "cost": 30}));
    assert_eq!(fx.host.delivered[1], ActorMessage::new(PLAYER, "onBack", "{}"));
}

#[test]
fn test_send_message() {
    let mut fx = Fixture::new();
    {
        let mut ctx = fx.ctx(PLAYER);
        ctx.send_message("onHit", &json!({"damage": 5}), Some(ENEMY)).unwrap();
        assert!(matches!(
            ctx.send_message("on hit", &json!({}), Some(ENEMY)),
            Err(ApiError::InvalidIdentifier(_))
        ));
        assert!(ctx.send_message("onHit", &json!({}), Some(ActorId(42))).is_err());
    }
    assert_eq!(fx.messages.len(), 1);
    fx.messages.dispatch(&mut fx.host);
    assert_eq!(fx.host.delivered, vec![ActorMessage::new(ENEMY, "onHit", r#"{"damage":5}"#)]);
}

#[test]
fn test_unserializable_argument_is_an_error() {
    let mut fx = Fixture::new();
    let mut ctx = fx.ctx(PLAYER);

    // JSON object keys must be strings
    let mut arg = HashMap::new();
    arg.insert((1, 2), "tuple key");
    assert!(matches!(
        ctx.send_message("onData", &arg, None),
        Err(ApiError::Serialization(_))
    ));
    assert!(matches!(
        ButtonOptions::default().with_click_arg(&arg),
        Err(ApiError::Serialization(_))
    ));
    assert!(fx.messages.is_empty());
}

#[test]
fn test_actors_have_separate_buffers() {
    let mut fx = Fixture::new();
    fx.ctx(PLAYER).add_text(0.0, 0.0, "player", None, None).unwrap();
    fx.ctx(ENEMY).add_text(0.0, 0.0, "enemy", None, None).unwrap();
    fx.ctx(PLAYER).add_text(0.0, 20.0, "player again", None, None).unwrap();

    let batches = fx.frame.consume();
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0].0, PLAYER);
    assert_eq!(batches[0].1.len(), 2);
    assert!(batches[0].1.iter().all(|c| c.actor == PLAYER));
    assert_eq!(batches[1].1[0].text(), Some("enemy"));
}
