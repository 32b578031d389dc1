//! Animodel library.
//!
//! Sprite-sequence animation playback for 2D games: descriptors define named
//! states as cyclic chains of timed sprite frames, and [`AnimatedModel`]
//! instances walk those chains in step with the frame delta, publishing the
//! frame to draw into a renderer-agnostic [`Sprite`] target.
//!
//! - [`geometry`] – `Point` and `RectBox` value types
//! - [`components`] – ECS components (animated model, position, sprite target)
//! - [`resources`] – ECS resources (descriptor store, world time)
//! - [`systems`] – ECS systems (per-frame animation advance)
//!
//! [`AnimatedModel`]: components::animatedmodel::AnimatedModel
//! [`Sprite`]: components::sprite::Sprite

pub mod components;
pub mod geometry;
pub mod resources;
pub mod systems;
