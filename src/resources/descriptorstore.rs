//! Descriptor resource registry.
//!
//! This module provides a minimal store for animated model descriptors that
//! can be reused by multiple entities. Systems and game code look up a
//! descriptor by a string key and spawn playback instances from the shared
//! handle stored here.

use std::path::Path;
use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use log::info;
use rustc_hash::FxHashMap;

use crate::resources::descriptor::{AnimatedModelDescriptor, DescriptorDef};

/// Central registry of animated model descriptors keyed by string IDs.
///
/// Entries are shared: every model spawned from one clones the `Arc`, never
/// the frame data.
#[derive(Resource, Default)]
pub struct DescriptorStore {
    pub map: FxHashMap<String, Arc<AnimatedModelDescriptor>>,
}

impl DescriptorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor under `key`, returning the shared handle.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        descriptor: AnimatedModelDescriptor,
    ) -> Arc<AnimatedModelDescriptor> {
        let descriptor = Arc::new(descriptor);
        self.map.insert(key.into(), descriptor.clone());
        descriptor
    }

    pub fn get(&self, key: &str) -> Option<&Arc<AnimatedModelDescriptor>> {
        self.map.get(key)
    }

    /// Load a descriptor from a JSON file and register it under `key`.
    ///
    /// Returns an error if the file cannot be read, parsed, or fails
    /// descriptor validation.
    pub fn load_json_file(
        &mut self,
        key: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Arc<AnimatedModelDescriptor>, String> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
        let def: DescriptorDef = serde_json::from_str(&raw)
            .map_err(|e| format!("Failed to parse {}: {e}", path.display()))?;
        let descriptor = AnimatedModelDescriptor::from_def(def)?;

        let key = key.into();
        info!(
            "Loaded descriptor \"{}\" from {}: {} states, {} frames",
            key,
            path.display(),
            descriptor.state_count(),
            descriptor.frame_count()
        );

        Ok(self.insert(key, descriptor))
    }
}
