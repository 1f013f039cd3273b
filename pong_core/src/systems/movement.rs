use crate::{Ball, Config, Paddle, Time};
use hecs::World;

/// Clamp both paddles to the court
pub fn clamp_paddles(world: &mut World, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.pos.y = config.clamp_paddle_y(paddle.pos.y);
    }
}

/// Age every ball and move it with its age-derived speed multiplier
pub fn move_balls(world: &mut World, time: &Time, config: &Config) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.age += time.dt;
        let multiplier = config.speed_multiplier(ball.age);
        ball.pos += time.dt * ball.vel * multiplier;
    }
}
