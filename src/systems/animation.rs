//! Animation system.
//!
//! [`animate_models`] advances every animated model by the elapsed frame
//! delta and publishes the resulting frame into the entity's
//! [`Sprite`](crate::components::sprite::Sprite) render target.
//!
//! # Animation Flow
//!
//! 1. Descriptors are loaded into [`DescriptorStore`](crate::resources::descriptorstore::DescriptorStore)
//! 2. Entities get an [`AnimatedModel`](crate::components::animatedmodel::AnimatedModel)
//!    spawned from a shared descriptor handle
//! 3. The `animate_models` system consumes [`WorldTime::delta`] each frame,
//!    walks the frame chain, and writes texture/position/scale/anchor into
//!    the [`Sprite`](crate::components::sprite::Sprite)
//! 4. Game logic switches states through `AnimatedModel::switch_to_state`
//!
//! [`WorldTime::delta`]: crate::resources::worldtime::WorldTime

use bevy_ecs::prelude::*;

use crate::components::animatedmodel::AnimatedModel;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::resources::worldtime::WorldTime;

/// Advance playback and update the sprite for every animated entity.
///
/// Contract
/// - Reads [`WorldTime`] for the scaled delta.
/// - Mutates [`AnimatedModel`] cursor state and the [`Sprite`] target.
pub fn animate_models(
    mut query: Query<(&mut AnimatedModel, &MapPosition, &mut Sprite)>,
    time: Res<WorldTime>,
) {
    for (mut model, position, mut sprite) in query.iter_mut() {
        model.draw(&mut sprite, position.pos, time.delta);
    }
}
