use crate::{create_ball, Ball, Config, Events, GameRng, Spawner};
use glam::Vec2;
use hecs::World;
use rand::Rng;

/// Random unit direction: two uniform samples in [-1, 1], normalized.
pub fn random_direction(rng: &mut GameRng) -> Vec2 {
    let x: f32 = rng.0.gen_range(-1.0..=1.0);
    let y: f32 = rng.0.gen_range(-1.0..=1.0);
    Vec2::new(x, y).try_normalize().unwrap_or(Vec2::X)
}

/// Spawn a ball at the court center when there is none, or when the newest
/// ball has lived for a full creation interval.
pub fn spawn_balls(
    world: &mut World,
    spawner: &mut Spawner,
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
) {
    let newest_age = spawner
        .last
        .and_then(|e| world.get::<&Ball>(e).ok().map(|ball| ball.age));

    let due = match newest_age {
        None => true,
        Some(age) => age >= config.ball_create_interval,
    };
    if !due {
        return;
    }

    let vel = random_direction(rng);
    let entity = create_ball(world, Vec2::ZERO, vel, config);
    spawner.last = Some(entity);
    events.balls_spawned += 1;
    log::debug!("spawned ball {:?} heading {:?}", entity, vel);
}
