/// Game tuning parameters for Killer Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court (half-extents, centered at origin)
    pub const COURT_RADIUS_X: f32 = 7.0;
    pub const COURT_RADIUS_Y: f32 = 5.0;

    // Paddle
    pub const PADDLE_RADIUS_X: f32 = 0.2;
    pub const PADDLE_RADIUS_Y: f32 = 1.0;
    pub const PADDLE_INSET: f32 = 0.5; // distance from side wall to paddle center

    // Ball
    pub const BALL_RADIUS: f32 = 0.2;
    pub const BALL_CREATE_INTERVAL: f32 = 5.0; // new ball every 5 s
    pub const BALL_SPEED_INC_RATIO: f32 = 0.3; // +30% ...
    pub const BALL_SPEED_INC_INTERVAL: f32 = 1.0; // ... every second
    pub const BALL_SPEED_MAX_MULTIPLIER: f32 = 10.0;
    pub const DEFLECT_BLEND: f32 = 0.75; // weight of strike offset in new Y velocity

    // Hit points
    pub const START_HP: u32 = 15;
    pub const INVINCIBLE_SEC: f32 = 1.0;

    // AI
    pub const AI_SPEED_FACTOR: f32 = 7.0;
    pub const AI_THREAT_SLACK: f32 = 8.0; // in ball radii
    pub const AI_WALL_MARGIN: f32 = 0.1;

    // Trail
    pub const TRAIL_LENGTH: f32 = 0.1; // seconds
}
