use bevy_ecs::prelude::Resource;

/// Simulation time resource, updated once per frame.
#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Apply `time_scale` to the unscaled frame delta `dt` and update both
    /// `elapsed` and `delta`.
    pub fn tick(&mut self, dt: f32) {
        let scaled = dt * self.time_scale;
        self.elapsed += scaled;
        self.delta = scaled;
    }
}
