//! Court-to-screen mapping
//!
//! Fits the court, walls and pip row into the drawable while keeping units square.

use crate::draw::{PADDING, SCORE_RADIUS, WALL_RADIUS};
use glam::{Affine2, Mat4, UVec2, Vec2, Vec4};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourtView {
    pub court_to_clip: Mat4,
    /// Inverse of `court_to_clip`, used to place the paddle under the pointer
    pub clip_to_court: Affine2,
}

impl Default for CourtView {
    fn default() -> Self {
        Self {
            court_to_clip: Mat4::IDENTITY,
            clip_to_court: Affine2::IDENTITY,
        }
    }
}

impl CourtView {
    pub fn fit(court_radius: Vec2, drawable_size: UVec2) -> Self {
        let scene_min = Vec2::new(
            -court_radius.x - 2.0 * WALL_RADIUS - PADDING,
            -court_radius.y - 2.0 * WALL_RADIUS - PADDING,
        );
        let scene_max = Vec2::new(
            court_radius.x + 2.0 * WALL_RADIUS + PADDING,
            court_radius.y + 2.0 * WALL_RADIUS + 3.0 * SCORE_RADIUS + PADDING,
        );

        let aspect = drawable_size.x.max(1) as f32 / drawable_size.y.max(1) as f32;
        // x must fit in [-aspect, aspect], y in [-1, 1]
        let scale = f32::min(
            2.0 * aspect / (scene_max.x - scene_min.x),
            2.0 / (scene_max.y - scene_min.y),
        );
        let center = 0.5 * (scene_max + scene_min);

        let court_to_clip = Mat4::from_cols(
            Vec4::new(scale / aspect, 0.0, 0.0, 0.0),
            Vec4::new(0.0, scale, 0.0, 0.0),
            Vec4::new(0.0, 0.0, 1.0, 0.0),
            Vec4::new(-center.x * (scale / aspect), -center.y * scale, 0.0, 1.0),
        );
        let clip_to_court = Affine2::from_cols(
            Vec2::new(aspect / scale, 0.0),
            Vec2::new(0.0, 1.0 / scale),
            center,
        );

        Self {
            court_to_clip,
            clip_to_court,
        }
    }

    /// Window pixel (top-left origin, +y down) to court coordinates
    pub fn window_to_court(&self, pixel: Vec2, window_size: UVec2) -> Vec2 {
        let clip = window_to_clip(pixel, window_size);
        self.clip_to_court.transform_point2(clip)
    }
}

/// Window pixel (top-left origin, +y down) to clip space ([-1,1]^2, +y up)
pub fn window_to_clip(pixel: Vec2, window_size: UVec2) -> Vec2 {
    let size = window_size.max(UVec2::ONE).as_vec2();
    Vec2::new(
        (pixel.x + 0.5) / size.x * 2.0 - 1.0,
        (pixel.y + 0.5) / size.y * -2.0 + 1.0,
    )
}
