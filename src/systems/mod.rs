//! ECS systems.
//!
//! - [`animation`] – advances animated models and updates their sprites

pub mod animation;
