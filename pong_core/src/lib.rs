pub mod components;
pub mod config;
pub mod court;
pub mod draw;
pub mod game;
pub mod mode;
pub mod params;
pub mod render;
pub mod resources;
pub mod snapshot;
pub mod systems;
pub mod view;

pub use components::*;
pub use config::*;
pub use court::*;
pub use game::*;
pub use mode::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use snapshot::*;
pub use view::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run one Killer Pong simulation tick.
///
/// Does nothing once either paddle is out of hit points.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    ai: &mut AiState,
    spawner: &mut Spawner,
    events: &mut Events,
    rng: &mut GameRng,
) {
    if is_match_over(world) {
        return;
    }

    // Clear events at start of frame
    events.clear();

    // 1. AI paddle, then keep both paddles on the court
    drive_ai_paddle(world, ai, time, config, rng);
    clamp_paddles(world, config);

    // 2. Age and move balls
    move_balls(world, time, config);

    // 3. Spawn a new ball on the creation timer
    spawn_balls(world, spawner, config, rng, events);

    // 4. Collisions (ball vs paddles, then walls)
    check_paddle_collisions(world, time, config, events);
    check_wall_collisions(world, config, events);

    // 5. Rainbow trails
    update_trails(world, time, config);

    time.now += time.dt;

    if is_match_over(world) {
        log::info!("match over at t={:.2}s", time.now);
    }
}

/// True once either paddle has run out of hit points
pub fn is_match_over(world: &World) -> bool {
    world
        .query::<&Health>()
        .iter()
        .any(|(_e, health)| health.is_dead())
}

/// Helper to create a paddle entity at its side's starting position
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    let pos = Vec2::new(config.paddle_x(side), 0.0);
    world.spawn((Paddle::new(side, pos), Health::new(config.start_hp)))
}

/// Helper to create a ball entity with a freshly seeded trail
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2, config: &Config) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel), Trail::new(pos, config.trail_length)))
}

/// Create the pointer-driven left paddle and the AI-driven right paddle
pub fn create_paddles(world: &mut World, config: &Config) -> (hecs::Entity, hecs::Entity) {
    let left = create_paddle(world, Side::Left, config);
    let right = world.spawn((
        Paddle::new(Side::Right, Vec2::new(config.paddle_x(Side::Right), 0.0)),
        Health::new(config.start_hp),
        AiControlled,
    ));
    (left, right)
}
