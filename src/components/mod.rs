//! ECS components for entities.
//!
//! Submodules overview:
//! - [`animatedmodel`] – playback driver walking a descriptor's frame chains
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`sprite`] – render target the driver publishes the current frame into

pub mod animatedmodel;
pub mod mapposition;
pub mod sprite;
