use glam::Vec2;
use std::collections::VecDeque;

/// Which end of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Paddle component - only `pos.y` changes during a match
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2) -> Self {
        Self { side, pos }
    }
}

/// Hit points plus the time since the paddle last lost one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Health {
    pub hp: u32,
    pub invincible_elapsed: f32,
}

impl Health {
    pub fn new(hp: u32) -> Self {
        Self {
            hp,
            invincible_elapsed: 0.0,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.hp == 0
    }
}

/// Marker for the paddle steered by the AI
#[derive(Debug, Clone, Copy, Default)]
pub struct AiControlled;

/// Ball component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub age: f32, // seconds since creation, drives the speed ramp
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel, age: 0.0 }
    }
}

/// A past ball position and how long ago it was recorded
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSample {
    pub pos: Vec2,
    pub age: f32,
}

/// Time-ordered ball history, oldest sample first
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trail {
    pub samples: VecDeque<TrailSample>,
}

impl Trail {
    /// Seed a trail with a bracketing pair at `pos` so it can be drawn immediately.
    pub fn new(pos: Vec2, trail_length: f32) -> Self {
        let mut samples = VecDeque::with_capacity(8);
        samples.push_back(TrailSample {
            pos,
            age: trail_length,
        });
        samples.push_back(TrailSample { pos, age: 0.0 });
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
