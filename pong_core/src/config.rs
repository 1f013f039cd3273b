use crate::{Params, Side};
use glam::Vec2;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub court_radius: Vec2,
    pub paddle_radius: Vec2,
    pub paddle_inset: f32,
    pub ball_radius: Vec2,
    pub ball_create_interval: f32,
    pub ball_speed_inc_ratio: f32,
    pub ball_speed_inc_interval: f32,
    pub ball_speed_max_multiplier: f32,
    pub deflect_blend: f32,
    pub start_hp: u32,
    pub invincible_sec: f32,
    pub ai_speed_factor: f32,
    pub ai_threat_slack: f32,
    pub ai_wall_margin: f32,
    pub trail_length: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            court_radius: Vec2::new(Params::COURT_RADIUS_X, Params::COURT_RADIUS_Y),
            paddle_radius: Vec2::new(Params::PADDLE_RADIUS_X, Params::PADDLE_RADIUS_Y),
            paddle_inset: Params::PADDLE_INSET,
            ball_radius: Vec2::splat(Params::BALL_RADIUS),
            ball_create_interval: Params::BALL_CREATE_INTERVAL,
            ball_speed_inc_ratio: Params::BALL_SPEED_INC_RATIO,
            ball_speed_inc_interval: Params::BALL_SPEED_INC_INTERVAL,
            ball_speed_max_multiplier: Params::BALL_SPEED_MAX_MULTIPLIER,
            deflect_blend: Params::DEFLECT_BLEND,
            start_hp: Params::START_HP,
            invincible_sec: Params::INVINCIBLE_SEC,
            ai_speed_factor: Params::AI_SPEED_FACTOR,
            ai_threat_slack: Params::AI_THREAT_SLACK,
            ai_wall_margin: Params::AI_WALL_MARGIN,
            trail_length: Params::TRAIL_LENGTH,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position for paddle based on side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => -self.court_radius.x + self.paddle_inset,
            Side::Right => self.court_radius.x - self.paddle_inset,
        }
    }

    /// Clamp paddle Y to court bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let limit = self.court_radius.y - self.paddle_radius.y;
        y.max(-limit).min(limit)
    }

    /// Age-derived speed multiplier: `min(max, (1 + ratio)^(age / interval))`
    pub fn speed_multiplier(&self, age: f32) -> f32 {
        let ramp = (1.0 + self.ball_speed_inc_ratio).powf(age / self.ball_speed_inc_interval);
        ramp.min(self.ball_speed_max_multiplier)
    }
}
