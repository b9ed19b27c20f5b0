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

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Strict horizontal overlap; touching edges do not count
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        self.max.x > other.min.x && self.min.x < other.max.x
    }

    /// True if this box pokes out above `top` or below `bottom`
    pub fn escapes_span(&self, top: f32, bottom: f32) -> bool {
        self.min.y < top || self.max.y > bottom
    }
}
