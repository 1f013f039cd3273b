use crate::{Ball, Config, Time, Trail, TrailSample};
use glam::Vec2;
use hecs::World;

/// Age trail samples, record the current position and drop stale history
pub fn update_trails(world: &mut World, time: &Time, config: &Config) {
    for (_entity, (ball, trail)) in world.query_mut::<(&Ball, &mut Trail)>() {
        trail.record(ball.pos, time.dt, config.trail_length);
    }
}

impl Trail {
    /// Age every sample by `dt` and push a fresh one at `pos`.
    ///
    /// The oldest sample is only dropped once the one after it is also older
    /// than `trail_length`, so any time inside the window stays bracketed.
    pub fn record(&mut self, pos: Vec2, dt: f32, trail_length: f32) {
        for sample in self.samples.iter_mut() {
            sample.age += dt;
        }
        self.samples.push_back(TrailSample { pos, age: 0.0 });

        while self.samples.len() >= 2 && self.samples[1].age > trail_length {
            self.samples.pop_front();
        }
    }

    /// Interpolated position `t` seconds ago, if the trail reaches that far back
    pub fn sample_at(&self, t: f32) -> Option<Vec2> {
        let newer = self.samples.iter().skip(1).position(|s| s.age <= t)? + 1;
        let a = self.samples[newer - 1];
        let b = self.samples[newer];
        let span = a.age - b.age;
        if span <= f32::EPSILON {
            return Some(b.pos);
        }
        Some(a.pos + (b.pos - a.pos) * ((t - a.age) / (b.age - a.age)))
    }
}
