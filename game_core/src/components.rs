use glam::Vec2;

use crate::{Aabb, Config};

/// Bird component - the player-controlled actor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    pub pos: Vec2, // x is fixed, y falls under gravity
    pub vel: f32,  // vertical velocity, px/s (negative = up)
}

impl Bird {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, vel: 0.0 }
    }

    /// Bird at the starting height with no velocity
    pub fn spawn(config: &Config) -> Self {
        Self::new(Vec2::new(config.bird_x, config.bird_start_y))
    }

    pub fn bounds(&self, radius: f32) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::splat(radius * 2.0))
    }
}

/// Pipe component - an upper/lower barrier pair with a gap between
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    pub x: f32,      // left edge
    pub gap_y: f32,  // gap centre, fixed at spawn
    pub scored: bool,
    pub seq: u64, // spawn order
}

impl Pipe {
    pub fn new(x: f32, gap_y: f32, seq: u64) -> Self {
        Self {
            x,
            gap_y,
            scored: false,
            seq,
        }
    }

    pub fn right(&self, config: &Config) -> f32 {
        self.x + config.pipe_width
    }

    /// Full-height column occupied by the pipe (gap included)
    pub fn bounds(&self, config: &Config) -> Aabb {
        Aabb::new(
            Vec2::new(self.x, 0.0),
            Vec2::new(self.right(config), config.ground_top()),
        )
    }

    /// True once the pipe's right edge has cleared the despawn margin
    pub fn is_offscreen(&self, config: &Config) -> bool {
        self.right(config) <= -config.despawn_margin
    }
}
