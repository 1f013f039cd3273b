use crate::{AiState, Ball, Health, Paddle, Side, Time, Trail};
use hecs::World;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleState {
    pub paddle: Paddle,
    pub health: Health,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BallState {
    pub ball: Ball,
    pub trail: Trail,
}

/// Copy of everything the simulation mutates; the renderer draws from this
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub paddles: Vec<PaddleState>, // left first
    pub balls: Vec<BallState>,     // creation order
    pub ai: AiState,
    pub now: f32,
}

impl Snapshot {
    pub fn capture(world: &World, ai: &AiState, time: &Time) -> Self {
        let mut paddles: Vec<PaddleState> = world
            .query::<(&Paddle, &Health)>()
            .iter()
            .map(|(_e, (paddle, health))| PaddleState {
                paddle: *paddle,
                health: *health,
            })
            .collect();
        paddles.sort_by_key(|p| match p.paddle.side {
            Side::Left => 0,
            Side::Right => 1,
        });

        let balls = world
            .query::<(&Ball, &Trail)>()
            .iter()
            .map(|(_e, (ball, trail))| BallState {
                ball: *ball,
                trail: trail.clone(),
            })
            .collect();

        Self {
            paddles,
            balls,
            ai: *ai,
            now: time.now,
        }
    }

    pub fn paddle(&self, side: Side) -> Option<&PaddleState> {
        self.paddles.iter().find(|p| p.paddle.side == side)
    }

    /// Remaining hit points for `side`, zero if the paddle is missing
    pub fn hp(&self, side: Side) -> u32 {
        self.paddle(side).map(|p| p.health.hp).unwrap_or(0)
    }
}
