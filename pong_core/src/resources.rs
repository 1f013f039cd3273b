use hecs::Entity;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self { dt: 0.0, now: 0.0 }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Direction the AI paddle is committed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiDirection {
    Up,
    Down,
    #[default]
    Idle,
}

impl AiDirection {
    /// Sign applied to paddle Y movement
    pub fn sign(self) -> f32 {
        match self {
            AiDirection::Up => 1.0,
            AiDirection::Down => -1.0,
            AiDirection::Idle => 0.0,
        }
    }
}

/// AI controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AiState {
    pub dir: AiDirection,
}

impl AiState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Tracks the most recently created ball for the spawn timer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spawner {
    pub last: Option<Entity>,
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Events that occurred during this step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub left_hp_lost: u32,
    pub right_hp_lost: u32,
    pub paddle_bounces: u32,
    pub wall_bounces: u32,
    pub balls_spawned: u32,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_direction_sign() {
        assert_eq!(AiDirection::Up.sign(), 1.0);
        assert_eq!(AiDirection::Down.sign(), -1.0);
        assert_eq!(AiDirection::Idle.sign(), 0.0);
        assert_eq!(AiState::new().dir, AiDirection::Idle);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.left_hp_lost = 1;
        events.right_hp_lost = 2;
        events.paddle_bounces = 3;
        events.wall_bounces = 4;
        events.balls_spawned = 5;

        events.clear();

        assert_eq!(events, Events::default());
    }

    #[test]
    fn test_rng_is_deterministic_per_seed() {
        use rand::Rng;
        let mut a = GameRng::new(7);
        let mut b = GameRng::new(7);
        for _ in 0..8 {
            assert_eq!(a.0.gen::<u32>(), b.0.gen::<u32>());
        }
    }
}
