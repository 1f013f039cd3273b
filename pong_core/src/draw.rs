//! Vertex assembly for Killer Pong
//!
//! Everything is drawn as flat-colored rectangles in court space.

use crate::{Config, Side, Snapshot};
use glam::Vec2;

/// Vertex data for the colored triangle batch
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [u8; 4],
}

const _: () = assert!(std::mem::size_of::<Vertex>() == 4 * 3 + 4);

impl Vertex {
    pub fn new(pos: Vec2, color: [u8; 4]) -> Self {
        Self {
            position: [pos.x, pos.y, 0.0],
            color,
        }
    }
}

/// 0xRRGGBBAA -> [r, g, b, a]
pub const fn hex_to_rgba(hex: u32) -> [u8; 4] {
    [
        (hex >> 24) as u8,
        (hex >> 16) as u8,
        (hex >> 8) as u8,
        hex as u8,
    ]
}

pub const BG_COLOR: [u8; 4] = hex_to_rgba(0x171714ff);
pub const FG_COLOR: [u8; 4] = hex_to_rgba(0xd1bb54ff);
pub const SHADOW_COLOR: [u8; 4] = hex_to_rgba(0x604d29ff);

/// Trail ramp, oldest segment first
pub const RAINBOW: [[u8; 4]; 22] = [
    hex_to_rgba(0x604d29ff),
    hex_to_rgba(0x624f29fc),
    hex_to_rgba(0x69542df2),
    hex_to_rgba(0x6a552df1),
    hex_to_rgba(0x6b562ef0),
    hex_to_rgba(0x6b562ef0),
    hex_to_rgba(0x6d572eed),
    hex_to_rgba(0x6f592feb),
    hex_to_rgba(0x725b31e7),
    hex_to_rgba(0x745d31e3),
    hex_to_rgba(0x755e32e0),
    hex_to_rgba(0x765f33de),
    hex_to_rgba(0x7a6234d8),
    hex_to_rgba(0x826838ca),
    hex_to_rgba(0x977840a4),
    hex_to_rgba(0x96773fa5),
    hex_to_rgba(0xa07f4493),
    hex_to_rgba(0xa1814590),
    hex_to_rgba(0x9e7e4496),
    hex_to_rgba(0xa6844887),
    hex_to_rgba(0xa9864884),
    hex_to_rgba(0xad8a4a7c),
];

pub const WALL_RADIUS: f32 = 0.05;
pub const SHADOW_OFFSET: f32 = 0.07;
pub const PADDING: f32 = 0.14; // between the walls and the edge of the window
pub const SCORE_RADIUS: f32 = 0.1;

/// Accumulates rectangles as CCW triangle pairs
#[derive(Debug, Default)]
pub struct Batch {
    pub vertices: Vec<Vertex>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rect(&mut self, center: Vec2, radius: Vec2, color: [u8; 4]) {
        let min = center - radius;
        let max = center + radius;
        self.vertices.extend_from_slice(&[
            Vertex::new(Vec2::new(min.x, min.y), color),
            Vertex::new(Vec2::new(max.x, min.y), color),
            Vertex::new(Vec2::new(max.x, max.y), color),
            Vertex::new(Vec2::new(min.x, min.y), color),
            Vertex::new(Vec2::new(max.x, max.y), color),
            Vertex::new(Vec2::new(min.x, max.y), color),
        ]);
    }
}

/// Build the full frame: shadows, trails, walls, paddles, balls, hit point pips
pub fn build_vertices(snapshot: &Snapshot, config: &Config) -> Vec<Vertex> {
    let mut batch = Batch::new();
    let court = config.court_radius;
    let shadow = Vec2::new(0.0, -SHADOW_OFFSET);

    let walls = [
        (
            Vec2::new(-court.x - WALL_RADIUS, 0.0),
            Vec2::new(WALL_RADIUS, court.y + 2.0 * WALL_RADIUS),
        ),
        (
            Vec2::new(court.x + WALL_RADIUS, 0.0),
            Vec2::new(WALL_RADIUS, court.y + 2.0 * WALL_RADIUS),
        ),
        (
            Vec2::new(0.0, -court.y - WALL_RADIUS),
            Vec2::new(court.x, WALL_RADIUS),
        ),
        (
            Vec2::new(0.0, court.y + WALL_RADIUS),
            Vec2::new(court.x, WALL_RADIUS),
        ),
    ];

    // Shadows (everything except the trails)
    for (center, radius) in walls {
        batch.rect(center + shadow, radius, SHADOW_COLOR);
    }
    for p in &snapshot.paddles {
        batch.rect(p.paddle.pos + shadow, config.paddle_radius, SHADOW_COLOR);
    }
    for b in &snapshot.balls {
        batch.rect(b.ball.pos + shadow, config.ball_radius, SHADOW_COLOR);
    }

    // Trails, oldest segment to newest
    let steps = RAINBOW.len();
    for b in &snapshot.balls {
        for i in (0..steps).rev() {
            let t = (i + 1) as f32 / steps as f32 * config.trail_length;
            let Some(at) = b.trail.sample_at(t) else {
                break;
            };
            batch.rect(at, config.ball_radius, RAINBOW[i]);
        }
    }

    // Solid objects
    for (center, radius) in walls {
        batch.rect(center, radius, FG_COLOR);
    }
    for p in &snapshot.paddles {
        batch.rect(p.paddle.pos, config.paddle_radius, FG_COLOR);
    }
    for b in &snapshot.balls {
        batch.rect(b.ball.pos, config.ball_radius, FG_COLOR);
    }

    // One pip per remaining hit point
    let pip = Vec2::splat(SCORE_RADIUS);
    let pip_y = court.y + 2.0 * WALL_RADIUS + 2.0 * SCORE_RADIUS;
    for i in 0..snapshot.hp(Side::Left) {
        let x = -court.x + (2.0 + 3.0 * i as f32) * SCORE_RADIUS;
        batch.rect(Vec2::new(x, pip_y), pip, FG_COLOR);
    }
    for i in 0..snapshot.hp(Side::Right) {
        let x = court.x - (2.0 + 3.0 * i as f32) * SCORE_RADIUS;
        batch.rect(Vec2::new(x, pip_y), pip, FG_COLOR);
    }

    batch.vertices
}

/// Background color as normalized floats for the clear pass
pub fn clear_color() -> [f32; 4] {
    BG_COLOR.map(|c| c as f32 / 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddles, AiState, Health, Time};
    use hecs::World;

    #[test]
    fn test_hex_to_rgba() {
        assert_eq!(hex_to_rgba(0x11223344), [0x11, 0x22, 0x33, 0x44]);
        assert_eq!(FG_COLOR, [0xd1, 0xbb, 0x54, 0xff]);
    }

    #[test]
    fn test_rect_is_two_ccw_triangles() {
        let mut batch = Batch::new();
        batch.rect(Vec2::new(1.0, 1.0), Vec2::new(0.5, 0.25), FG_COLOR);
        assert_eq!(batch.vertices.len(), 6);
        for tri in batch.vertices.chunks(3) {
            let a = Vec2::new(tri[0].position[0], tri[0].position[1]);
            let b = Vec2::new(tri[1].position[0], tri[1].position[1]);
            let c = Vec2::new(tri[2].position[0], tri[2].position[1]);
            assert!((b - a).perp_dot(c - a) > 0.0, "triangle winds clockwise");
        }
    }

    #[test]
    fn test_fresh_match_vertex_count() {
        let config = Config::new();
        let mut world = World::new();
        create_paddles(&mut world, &config);
        create_ball(&mut world, Vec2::ZERO, Vec2::X, &config);
        let snapshot = Snapshot::capture(&world, &AiState::new(), &Time::default());

        let vertices = build_vertices(&snapshot, &config);

        // shadows 4+2+1, full trail 22, solids 4+2+1, pips 15+15
        let rects = 7 + RAINBOW.len() + 7 + 30;
        assert_eq!(vertices.len(), rects * 6);
    }

    #[test]
    fn test_pips_follow_hit_points() {
        let config = Config::new();
        let mut world = World::new();
        let (left, right) = create_paddles(&mut world, &config);
        world.get::<&mut Health>(left).unwrap().hp = 3;
        world.get::<&mut Health>(right).unwrap().hp = 0;
        let snapshot = Snapshot::capture(&world, &AiState::new(), &Time::default());

        let vertices = build_vertices(&snapshot, &config);

        let rects = 6 + 6 + 3;
        assert_eq!(vertices.len(), rects * 6);
    }

    #[test]
    fn test_clear_color_normalized() {
        let c = clear_color();
        assert!((c[0] - 0x17 as f32 / 255.0).abs() < 1e-6);
        assert_eq!(c[3], 1.0);
    }
}
