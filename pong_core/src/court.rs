use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_radius(center: Vec2, radius: Vec2) -> Self {
        Self {
            min: center - radius,
            max: center + radius,
        }
    }

    /// Overlap region with `other`, or `None` if they are disjoint on either axis.
    ///
    /// Boxes that merely touch overlap in a zero-width region and count as intersecting.
    pub fn overlap(&self, other: &Aabb) -> Option<Aabb> {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        if min.x > max.x || min.y > max.y {
            return None;
        }
        Some(Aabb { min, max })
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// The playing field, centered at the origin
#[derive(Debug, Clone, Copy)]
pub struct Court {
    pub radius: Vec2,
}

impl Court {
    pub fn new(radius: Vec2) -> Self {
        Self { radius }
    }

    /// Region a body of half-extent `body_radius` may occupy
    pub fn interior(&self, body_radius: Vec2) -> Aabb {
        Aabb::new(-self.radius + body_radius, self.radius - body_radius)
    }
}
