//! ECS resources made available to systems.
//!
//! Long-lived data injected into the ECS world and read by systems during
//! execution.
//!
//! Overview
//! - `descriptor` – immutable animated model definitions (states and frames)
//! - `descriptorstore` – descriptors keyed by string ids, shared across entities
//! - `worldtime` – simulation time and delta

pub mod descriptor;
pub mod descriptorstore;
pub mod worldtime;
