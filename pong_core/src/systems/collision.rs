use crate::{Aabb, Ball, Config, Court, Events, Health, Paddle, Side, Time};
use glam::Vec2;
use hecs::{Entity, World};

/// Axis along which a paddle collision bounced the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BounceAxis {
    /// Struck the paddle's top or bottom edge
    Y,
    /// Struck the paddle's face
    X,
}

/// Outcome of a single ball/paddle contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddleHit {
    pub axis: BounceAxis,
    pub hp_lost: bool,
}

/// Resolve one ball against one paddle.
///
/// On overlap the paddle loses a hit point unless it is still inside its
/// invincibility window; the bounce applies either way. The ball is bounced
/// along the axis of narrower penetration. Face hits also bend the Y velocity
/// toward the strike offset from the paddle center.
pub fn resolve_paddle_hit(
    paddle: Vec2,
    ball: &mut Ball,
    health: &mut Health,
    config: &Config,
) -> Option<PaddleHit> {
    let paddle_radius = config.paddle_radius;
    let ball_radius = config.ball_radius;

    let overlap = Aabb::from_center_radius(paddle, paddle_radius)
        .overlap(&Aabb::from_center_radius(ball.pos, ball_radius))?;

    let hp_lost = health.invincible_elapsed >= config.invincible_sec;
    if hp_lost {
        health.hp = health.hp.saturating_sub(1);
        health.invincible_elapsed = 0.0;
    }

    let size = overlap.size();
    let axis = if size.x > size.y {
        if ball.pos.y > paddle.y {
            ball.pos.y = paddle.y + paddle_radius.y + ball_radius.y;
            ball.vel.y = ball.vel.y.abs();
        } else {
            ball.pos.y = paddle.y - paddle_radius.y - ball_radius.y;
            ball.vel.y = -ball.vel.y.abs();
        }
        BounceAxis::Y
    } else {
        if ball.pos.x > paddle.x {
            ball.pos.x = paddle.x + paddle_radius.x + ball_radius.x;
            ball.vel.x = ball.vel.x.abs();
        } else {
            ball.pos.x = paddle.x - paddle_radius.x - ball_radius.x;
            ball.vel.x = -ball.vel.x.abs();
        }
        let target = (ball.pos.y - paddle.y) / (paddle_radius.y + ball_radius.y);
        ball.vel.y += (target - ball.vel.y) * config.deflect_blend;
        BounceAxis::X
    };

    Some(PaddleHit { axis, hp_lost })
}

/// Check every ball against the left paddle, then the right paddle
pub fn check_paddle_collisions(
    world: &mut World,
    time: &Time,
    config: &Config,
    events: &mut Events,
) {
    // Collect paddle data without holding borrows
    let mut paddles: Vec<(Entity, Paddle, Health)> = world
        .query::<(&Paddle, &Health)>()
        .iter()
        .map(|(e, (p, h))| (e, *p, *h))
        .collect();
    paddles.sort_by_key(|(_, p, _)| match p.side {
        Side::Left => 0,
        Side::Right => 1,
    });

    for (_, _, health) in paddles.iter_mut() {
        health.invincible_elapsed += time.dt;
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for (_, paddle, health) in paddles.iter_mut() {
            if let Some(hit) = resolve_paddle_hit(paddle.pos, ball, health, config) {
                events.paddle_bounces += 1;
                if hit.hp_lost {
                    match paddle.side {
                        Side::Left => events.left_hp_lost += 1,
                        Side::Right => events.right_hp_lost += 1,
                    }
                    log::info!("{:?} paddle hit, {} hp left", paddle.side, health.hp);
                }
            }
        }
    }

    // Write back updated health
    for (entity, _, health) in paddles {
        if let Ok(mut h) = world.get::<&mut Health>(entity) {
            *h = health;
        }
    }
}

/// Reflect balls off the four court walls, without energy loss
pub fn check_wall_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let interior = Court::new(config.court_radius).interior(config.ball_radius);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let mut bounced = false;

        if ball.pos.y > interior.max.y {
            ball.pos.y = interior.max.y;
            if ball.vel.y > 0.0 {
                ball.vel.y = -ball.vel.y;
                bounced = true;
            }
        }
        if ball.pos.y < interior.min.y {
            ball.pos.y = interior.min.y;
            if ball.vel.y < 0.0 {
                ball.vel.y = -ball.vel.y;
                bounced = true;
            }
        }
        if ball.pos.x > interior.max.x {
            ball.pos.x = interior.max.x;
            if ball.vel.x > 0.0 {
                ball.vel.x = -ball.vel.x;
                bounced = true;
            }
        }
        if ball.pos.x < interior.min.x {
            ball.pos.x = interior.min.x;
            if ball.vel.x < 0.0 {
                ball.vel.x = -ball.vel.x;
                bounced = true;
            }
        }

        if bounced {
            events.wall_bounces += 1;
        }
    }
}
