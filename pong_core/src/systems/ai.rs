use crate::{AiControlled, AiDirection, AiState, Ball, Config, GameRng, Paddle, Side, Time};
use glam::Vec2;
use hecs::World;
use rand::Rng;

/// Steer the AI paddle away from the nearest incoming ball.
///
/// Strategy:
/// 1. Pick the closest ball travelling toward the AI paddle.
/// 2. Extrapolate where it crosses the paddle's X.
/// 3. If that lands within the paddle plus a margin of slack, dodge: keep the
///    current direction (bouncing off the walls) or pick one at random.
/// 4. Otherwise stop.
///
/// With no incoming ball at all the paddle holds still and keeps its flag.
pub fn drive_ai_paddle(
    world: &mut World,
    ai: &mut AiState,
    time: &Time,
    config: &Config,
    rng: &mut GameRng,
) {
    let balls: Vec<(Vec2, Vec2)> = world
        .query::<&Ball>()
        .iter()
        .map(|(_e, ball)| (ball.pos, ball.vel))
        .collect();

    for (_entity, (paddle, _)) in world.query_mut::<(&mut Paddle, &AiControlled)>() {
        let Some((pos, vel)) = nearest_incoming(paddle, &balls) else {
            continue;
        };

        // Unguarded: a grazing vel.x sends this toward +/-inf or NaN, which
        // falls outside the band below and idles the paddle.
        let hit_y = pos.y + (paddle.pos.x - pos.x) * vel.y / vel.x;
        let band = config.paddle_radius.y + config.ball_radius.y * config.ai_threat_slack;
        let threatened = hit_y > paddle.pos.y - band && hit_y < paddle.pos.y + band;

        if !threatened {
            ai.dir = AiDirection::Idle;
            continue;
        }

        if ai.dir == AiDirection::Idle {
            ai.dir = if rng.0.gen_bool(0.5) {
                AiDirection::Up
            } else {
                AiDirection::Down
            };
            log::trace!("ai dodging {:?} from predicted y {}", ai.dir, hit_y);
            continue;
        }

        paddle.pos.y += ai.dir.sign() * time.dt * config.ai_speed_factor;
        let reach = config.paddle_radius.y + config.ai_wall_margin;
        if paddle.pos.y + reach >= config.court_radius.y {
            ai.dir = AiDirection::Down;
        } else if paddle.pos.y - reach <= -config.court_radius.y {
            ai.dir = AiDirection::Up;
        }
    }
}

/// Closest ball (squared distance) whose X velocity points at `paddle`
fn nearest_incoming(paddle: &Paddle, balls: &[(Vec2, Vec2)]) -> Option<(Vec2, Vec2)> {
    let mut best = None;
    let mut best_dist = f32::MAX;
    for &(pos, vel) in balls {
        let incoming = match paddle.side {
            Side::Right => vel.x > 0.0,
            Side::Left => vel.x < 0.0,
        };
        let dist = pos.distance_squared(paddle.pos);
        if incoming && dist < best_dist {
            best = Some((pos, vel));
            best_dist = dist;
        }
    }
    best
}
