//! Animated model descriptors.
//!
//! A descriptor is the immutable definition of every state and sprite frame
//! for one kind of animated model. Each state is a named, cyclic chain of
//! timed frames. Frames live in a flat arena and reference their successor
//! by [`SpriteId`], so playback cursors address frames by index and any
//! number of [`AnimatedModel`](crate::components::animatedmodel::AnimatedModel)
//! instances can share one descriptor behind an `Arc` without cloning frame
//! data.
//!
//! Descriptors are built only through [`AnimatedModelDescriptor::from_def`],
//! which validates the data once at load time. In particular a state whose
//! frames are all zero-duration markers is rejected there, so the playback
//! skip loop always terminates.

use std::collections::HashMap;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Handle to one frame inside a descriptor's arena.
///
/// Ids are only minted by the owning descriptor's builder, so looking one up
/// in that descriptor cannot go out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteId(usize);

/// Display duration of one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameTime {
    /// Show for this many seconds. A zero duration marks a structural frame
    /// that is skipped during playback and never displayed.
    Timed(f32),
    /// Show until the state is switched externally.
    Persistent,
}

impl FrameTime {
    /// Structural marker frames are skipped on state entry and on every
    /// frame advance.
    pub fn is_marker(&self) -> bool {
        matches!(self, FrameTime::Timed(t) if *t == 0.0)
    }

    /// Countdown start value for the advance loop. `Persistent` resolves to
    /// infinity: subtracting any finite delta leaves it positive, so the
    /// loop needs no special case.
    pub fn countdown(&self) -> f32 {
        match self {
            FrameTime::Timed(t) => *t,
            FrameTime::Persistent => f32::INFINITY,
        }
    }
}

/// Texture reference for one frame: a key into the renderer's texture store
/// plus the scale factors to draw it with.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureRef {
    pub key: Arc<str>,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl TextureRef {
    pub fn new(key: impl Into<Arc<str>>, scale_x: f32, scale_y: f32) -> Self {
        Self {
            key: key.into(),
            scale_x,
            scale_y,
        }
    }
}

/// One timed visual frame within a state, linked to its successor.
#[derive(Debug, Clone)]
pub struct SpriteFrame {
    state: Arc<str>,
    texture: TextureRef,
    time: FrameTime,
    next: SpriteId,
}

impl SpriteFrame {
    /// Name of the state this frame belongs to.
    pub fn state_name(&self) -> &str {
        &self.state
    }

    pub fn texture(&self) -> &TextureRef {
        &self.texture
    }

    pub fn time(&self) -> FrameTime {
        self.time
    }

    /// Successor in the state's cyclic chain.
    pub fn next(&self) -> SpriteId {
        self.next
    }
}

/// Serde wire format for a descriptor, as stored in JSON asset files.
///
/// Frame order within a state is the playback order; the chain wraps from
/// the last frame back to the first. A negative `time` keeps the historical
/// "display forever" sentinel and becomes [`FrameTime::Persistent`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptorDef {
    pub default_state: String,
    pub states: HashMap<String, Vec<SpriteFrameDef>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteFrameDef {
    pub texture: String,
    /// Seconds; 0 marks a structural frame, negative means display forever.
    pub time: f32,
    #[serde(default = "default_scale")]
    pub scale_x: f32,
    #[serde(default = "default_scale")]
    pub scale_y: f32,
}

fn default_scale() -> f32 {
    1.0
}

/// Immutable definition of all states and frames for one animated model type.
#[derive(Debug, Clone)]
pub struct AnimatedModelDescriptor {
    sprites: Vec<SpriteFrame>,
    first_sprite: FxHashMap<Arc<str>, SpriteId>,
    default_state: Arc<str>,
}

impl AnimatedModelDescriptor {
    /// Build a descriptor from its wire definition, validating the data.
    ///
    /// Errors when the definition has no states, names a default state it
    /// does not define, contains a state with no frames, or contains a
    /// state made only of zero-duration marker frames.
    pub fn from_def(def: DescriptorDef) -> Result<Self, String> {
        if def.states.is_empty() {
            return Err("descriptor defines no states".to_string());
        }
        if !def.states.contains_key(&def.default_state) {
            return Err(format!(
                "default state \"{}\" is not defined",
                def.default_state
            ));
        }

        let mut sprites = Vec::new();
        let mut first_sprite = FxHashMap::default();

        for (name, frames) in &def.states {
            if frames.is_empty() {
                return Err(format!("state \"{name}\" has no frames"));
            }
            if frames.iter().all(|f| f.time == 0.0) {
                return Err(format!(
                    "state \"{name}\" contains only zero-duration marker frames"
                ));
            }

            let state: Arc<str> = Arc::from(name.as_str());
            let base = sprites.len();
            let count = frames.len();
            for (i, frame) in frames.iter().enumerate() {
                let time = if frame.time < 0.0 {
                    FrameTime::Persistent
                } else {
                    FrameTime::Timed(frame.time)
                };
                sprites.push(SpriteFrame {
                    state: state.clone(),
                    texture: TextureRef::new(
                        frame.texture.as_str(),
                        frame.scale_x,
                        frame.scale_y,
                    ),
                    time,
                    next: SpriteId(base + (i + 1) % count),
                });
            }
            first_sprite.insert(state, SpriteId(base));
        }

        Ok(Self {
            sprites,
            first_sprite,
            default_state: Arc::from(def.default_state.as_str()),
        })
    }

    pub fn default_state_name(&self) -> &str {
        &self.default_state
    }

    /// First frame of the named state, or `None` if the state is unknown.
    pub fn state_first_sprite(&self, state: &str) -> Option<SpriteId> {
        self.first_sprite.get(state).copied()
    }

    pub fn sprite(&self, id: SpriteId) -> &SpriteFrame {
        &self.sprites[id.0]
    }

    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.first_sprite.keys().map(|k| k.as_ref())
    }

    pub fn state_count(&self) -> usize {
        self.first_sprite.len()
    }

    pub fn frame_count(&self) -> usize {
        self.sprites.len()
    }
}
