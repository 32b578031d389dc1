//! Animated model playback component.
//!
//! [`AnimatedModel`] pairs a shared
//! [`AnimatedModelDescriptor`](crate::resources::descriptor::AnimatedModelDescriptor)
//! with the mutable playback cursor of one on-screen instance: the current
//! frame and the display time it has left. Each frame the driver consumes
//! the elapsed delta, walks the descriptor's frame chain to stay in sync,
//! and publishes the frame to draw into a caller-owned
//! [`Sprite`](crate::components::sprite::Sprite).

use std::sync::Arc;

use bevy_ecs::prelude::Component;

use crate::components::sprite::{ANCHOR_CENTER, Sprite};
use crate::geometry::point::Point;
use crate::resources::descriptor::{AnimatedModelDescriptor, SpriteId, TextureRef};

/// Playback driver for one animated model instance.
///
/// The descriptor is shared and never mutated through this component; the
/// cursor fields belong to this instance alone. Not internally synchronized,
/// so drive it from the game loop context only.
#[derive(Component, Clone)]
pub struct AnimatedModel {
    descriptor: Arc<AnimatedModelDescriptor>,
    cur_sprite: SpriteId,
    sprite_left_time: f32,
}

impl AnimatedModel {
    /// Create a model positioned at the first displayable frame of the
    /// descriptor's default state.
    pub fn new(descriptor: Arc<AnimatedModelDescriptor>) -> Result<Self, String> {
        let cur_sprite = descriptor
            .state_first_sprite(descriptor.default_state_name())
            .ok_or_else(|| {
                format!(
                    "Corrupt animated model descriptor: default state \"{}\" is missing",
                    descriptor.default_state_name()
                )
            })?;

        let mut model = Self {
            descriptor,
            cur_sprite,
            sprite_left_time: 0.0,
        };
        model.init_sprite_time();
        Ok(model)
    }

    /// Shared read-only handle to the descriptor this model plays.
    pub fn descriptor(&self) -> &Arc<AnimatedModelDescriptor> {
        &self.descriptor
    }

    /// Name of the state the current frame belongs to.
    pub fn cur_state_name(&self) -> &str {
        self.descriptor.sprite(self.cur_sprite).state_name()
    }

    /// Texture of the current frame. Marker frames are skipped on entry, so
    /// this never refers to one.
    pub fn cur_texture(&self) -> &TextureRef {
        self.descriptor.sprite(self.cur_sprite).texture()
    }

    /// Display time the current frame has left, in seconds. Infinite for
    /// persistent frames.
    pub fn time_left(&self) -> f32 {
        self.sprite_left_time
    }

    /// Restart playback at the first displayable frame of `state`.
    ///
    /// Leftover time on the current frame is discarded. On an unknown state
    /// name the model is left untouched and an error is returned.
    pub fn switch_to_state(&mut self, state: &str) -> Result<(), String> {
        let first = self
            .descriptor
            .state_first_sprite(state)
            .ok_or_else(|| format!("Unknown animation state \"{state}\""))?;
        self.cur_sprite = first;
        self.init_sprite_time();
        Ok(())
    }

    /// Advance playback by `delta` seconds, then publish the resulting frame
    /// into `target` at `point`: texture key, position, the texture's scale
    /// factors, and a centered anchor.
    pub fn draw(&mut self, target: &mut Sprite, point: Point, delta: f32) {
        self.advance(delta);

        let tex = self.cur_texture();
        target.tex_key = tex.key.clone();
        target.pos = point;
        target.scale = Point::new(tex.scale_x, tex.scale_y);
        target.anchor = Point::new(ANCHOR_CENTER, ANCHOR_CENTER);
    }

    /// Skip marker frames, then start the countdown for the frame landed on.
    /// Termination: descriptor validation rejects all-marker states.
    fn init_sprite_time(&mut self) {
        while self.descriptor.sprite(self.cur_sprite).time().is_marker() {
            self.cur_sprite = self.descriptor.sprite(self.cur_sprite).next();
        }
        self.sprite_left_time = self.descriptor.sprite(self.cur_sprite).time().countdown();
    }

    /// Consume `delta` seconds of display time, stepping through as many
    /// frames as it covers. Overshoot past a frame's remaining time carries
    /// into the next frame, so cumulative timing stays exact however the
    /// elapsed time is split across calls.
    fn advance(&mut self, delta: f32) {
        self.sprite_left_time -= delta;

        while self.sprite_left_time <= 0.0 {
            let carry = -self.sprite_left_time;
            self.cur_sprite = self.descriptor.sprite(self.cur_sprite).next();
            self.init_sprite_time();
            self.sprite_left_time -= carry;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::descriptor::{DescriptorDef, SpriteFrameDef};
    use std::collections::HashMap;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn frame(texture: &str, time: f32) -> SpriteFrameDef {
        SpriteFrameDef {
            texture: texture.to_string(),
            time,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    fn descriptor(
        default_state: &str,
        states: Vec<(&str, Vec<SpriteFrameDef>)>,
    ) -> Arc<AnimatedModelDescriptor> {
        let states: HashMap<String, Vec<SpriteFrameDef>> = states
            .into_iter()
            .map(|(name, frames)| (name.to_string(), frames))
            .collect();
        Arc::new(
            AnimatedModelDescriptor::from_def(DescriptorDef {
                default_state: default_state.to_string(),
                states,
            })
            .unwrap(),
        )
    }

    /// "idle": A for 5s, a zero-duration marker B, C for 10s, cyclic.
    fn idle_descriptor() -> Arc<AnimatedModelDescriptor> {
        descriptor(
            "idle",
            vec![(
                "idle",
                vec![frame("a", 5.0), frame("b", 0.0), frame("c", 10.0)],
            )],
        )
    }

    fn two_state_descriptor() -> Arc<AnimatedModelDescriptor> {
        descriptor(
            "idle",
            vec![
                (
                    "idle",
                    vec![frame("a", 5.0), frame("b", 0.0), frame("c", 10.0)],
                ),
                ("walk", vec![frame("w0", 1.0), frame("w1", 2.0)]),
            ],
        )
    }

    fn tick(model: &mut AnimatedModel, delta: f32) {
        let mut target = Sprite::default();
        model.draw(&mut target, Point::zero(), delta);
    }

    // --- Construction ---

    #[test]
    fn starts_on_first_displayable_frame_of_default_state() {
        let model = AnimatedModel::new(idle_descriptor()).unwrap();
        assert_eq!(model.cur_state_name(), "idle");
        assert_eq!(model.cur_texture().key.as_ref(), "a");
        assert!(approx_eq(model.time_left(), 5.0));
    }

    #[test]
    fn skips_leading_markers_on_construction() {
        let model = AnimatedModel::new(descriptor(
            "idle",
            vec![("idle", vec![frame("m", 0.0), frame("a", 3.0)])],
        ))
        .unwrap();
        assert_eq!(model.cur_texture().key.as_ref(), "a");
        assert!(approx_eq(model.time_left(), 3.0));
    }

    // --- Time advance ---

    #[test]
    fn exact_duration_advances_past_marker() {
        let mut model = AnimatedModel::new(idle_descriptor()).unwrap();

        tick(&mut model, 5.0);
        assert_eq!(model.cur_texture().key.as_ref(), "c");
        assert!(approx_eq(model.time_left(), 10.0));
    }

    #[test]
    fn overshoot_carries_into_next_cycle() {
        let mut model = AnimatedModel::new(idle_descriptor()).unwrap();

        tick(&mut model, 5.0);
        tick(&mut model, 12.0);
        assert_eq!(model.cur_texture().key.as_ref(), "a");
        assert!(approx_eq(model.time_left(), 3.0));
    }

    #[test]
    fn split_deltas_match_a_single_delta() {
        let mut whole = AnimatedModel::new(idle_descriptor()).unwrap();
        let mut split = whole.clone();

        tick(&mut whole, 5.0);
        for _ in 0..10 {
            tick(&mut split, 0.5);
        }

        assert_eq!(whole.cur_texture().key, split.cur_texture().key);
        assert!(approx_eq(whole.time_left(), split.time_left()));
    }

    #[test]
    fn huge_delta_wraps_several_cycles() {
        // Cycle length 15s; 47s in lands 2s into the fourth cycle.
        let mut model = AnimatedModel::new(idle_descriptor()).unwrap();
        tick(&mut model, 47.0);
        assert_eq!(model.cur_texture().key.as_ref(), "a");
        assert!(approx_eq(model.time_left(), 3.0));
    }

    #[test]
    fn no_time_is_lost_across_transitions() {
        let mut model = AnimatedModel::new(idle_descriptor()).unwrap();

        for delta in [1.0, 2.0, 3.0, 4.0] {
            tick(&mut model, delta);
        }
        // 10s in: 5s on "a", the rest on "c".
        assert_eq!(model.cur_texture().key.as_ref(), "c");
        assert!(approx_eq(model.time_left(), 5.0));

        tick(&mut model, 5.0);
        // Exactly at the cycle boundary: back on "a" with full time.
        assert_eq!(model.cur_texture().key.as_ref(), "a");
        assert!(approx_eq(model.time_left(), 5.0));
    }

    #[test]
    fn persistent_frame_survives_large_deltas() {
        let mut model = AnimatedModel::new(descriptor(
            "pose",
            vec![("pose", vec![frame("p", -1.0), frame("q", 1.0)])],
        ))
        .unwrap();

        tick(&mut model, 10_000.0);
        assert_eq!(model.cur_texture().key.as_ref(), "p");
        assert!(model.time_left().is_infinite());
    }

    // --- State switching ---

    #[test]
    fn switch_discards_leftover_time() {
        let mut model = AnimatedModel::new(two_state_descriptor()).unwrap();

        tick(&mut model, 2.0);
        assert!(approx_eq(model.time_left(), 3.0));

        model.switch_to_state("walk").unwrap();
        assert_eq!(model.cur_state_name(), "walk");
        assert_eq!(model.cur_texture().key.as_ref(), "w0");
        assert!(approx_eq(model.time_left(), 1.0));

        model.switch_to_state("idle").unwrap();
        assert_eq!(model.cur_texture().key.as_ref(), "a");
        assert!(approx_eq(model.time_left(), 5.0));
    }

    #[test]
    fn switch_to_unknown_state_errors_and_leaves_model_untouched() {
        let mut model = AnimatedModel::new(two_state_descriptor()).unwrap();
        tick(&mut model, 1.0);

        let err = model.switch_to_state("fly").unwrap_err();
        assert!(err.contains("fly"));
        assert_eq!(model.cur_state_name(), "idle");
        assert_eq!(model.cur_texture().key.as_ref(), "a");
        assert!(approx_eq(model.time_left(), 4.0));
    }

    // --- Draw target ---

    #[test]
    fn draw_publishes_frame_into_target() {
        let mut model = AnimatedModel::new(descriptor(
            "idle",
            vec![(
                "idle",
                vec![SpriteFrameDef {
                    texture: "hero".to_string(),
                    time: 1.0,
                    scale_x: 2.0,
                    scale_y: 0.5,
                }],
            )],
        ))
        .unwrap();

        let mut target = Sprite::default();
        model.draw(&mut target, Point::new(3.0, 4.0), 0.1);

        assert_eq!(target.tex_key.as_ref(), "hero");
        assert_eq!(target.pos, Point::new(3.0, 4.0));
        assert_eq!(target.scale, Point::new(2.0, 0.5));
        assert_eq!(target.anchor, Point::new(ANCHOR_CENTER, ANCHOR_CENTER));
    }

    // --- Fuzz ---

    #[test]
    fn fuzzed_playback_keeps_cursor_invariants() {
        let mut rng = fastrand::Rng::with_seed(0x5eed);
        let mut model = AnimatedModel::new(two_state_descriptor()).unwrap();
        let states = ["idle", "walk"];

        for _ in 0..1_000 {
            if rng.f32() < 0.05 {
                model.switch_to_state(states[rng.usize(0..states.len())]).unwrap();
            }
            tick(&mut model, rng.f32() * 3.0);

            // The cursor must always sit on a displayable frame with time
            // remaining on it; "b" is the marker frame and must never show.
            assert!(model.time_left() > 0.0);
            assert_ne!(model.cur_texture().key.as_ref(), "b");
            assert!(["a", "c", "w0", "w1"].contains(&model.cur_texture().key.as_ref()));
        }
    }
}
