use crate::Params;

/// World parameters for one game session
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: f32,
    pub height: f32,
    pub ground_height: f32,
    pub bird_x: f32,
    pub bird_radius: f32,
    pub bird_start_y: f32,
    pub gravity: f32,
    pub flap_velocity: f32,
    pub pipe_width: f32,
    pub pipe_gap: f32,
    pub pipe_speed: f32,
    pub pipe_spawn_seconds: f32,
    pub min_gap_center: f32,
    pub max_gap_center: f32,
    pub spawn_margin: f32,
    pub despawn_margin: f32,
    pub max_dt: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Params::WIDTH,
            height: Params::HEIGHT,
            ground_height: Params::GROUND_HEIGHT,
            bird_x: Params::BIRD_X,
            bird_radius: Params::BIRD_RADIUS,
            bird_start_y: Params::HEIGHT * Params::BIRD_START_FRACTION,
            gravity: Params::GRAVITY,
            flap_velocity: Params::FLAP_VELOCITY,
            pipe_width: Params::PIPE_WIDTH,
            pipe_gap: Params::PIPE_GAP,
            pipe_speed: Params::PIPE_SPEED,
            pipe_spawn_seconds: Params::PIPE_SPAWN_SECONDS,
            min_gap_center: Params::MIN_GAP_CENTER,
            max_gap_center: Params::MAX_GAP_CENTER,
            spawn_margin: Params::SPAWN_MARGIN,
            despawn_margin: Params::DESPAWN_MARGIN,
            max_dt: Params::MAX_DT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Y coordinate of the top of the ground band
    pub fn ground_top(&self) -> f32 {
        self.height - self.ground_height
    }

    /// X position where new pipes appear, just past the right edge
    pub fn pipe_spawn_x(&self) -> f32 {
        self.width + self.spawn_margin
    }

    /// Vertical extent of a gap centred on `gap_y`, as (top, bottom)
    pub fn gap_bounds(&self, gap_y: f32) -> (f32, f32) {
        let half = self.pipe_gap / 2.0;
        (gap_y - half, gap_y + half)
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), String> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(format!(
                "surface must be non-empty, got {}x{}",
                self.width, self.height
            ));
        }
        if self.ground_height < 0.0 || self.ground_height >= self.height {
            return Err(format!(
                "ground height {} must lie within surface height {}",
                self.ground_height, self.height
            ));
        }
        if self.bird_radius <= 0.0 || self.pipe_width <= 0.0 || self.pipe_gap <= 0.0 {
            return Err("bird radius, pipe width and pipe gap must be positive".to_string());
        }
        if self.pipe_spawn_seconds <= 0.0 || self.max_dt <= 0.0 {
            return Err("spawn interval and max dt must be positive".to_string());
        }
        if !(0.0 < self.min_gap_center
            && self.min_gap_center < self.max_gap_center
            && self.max_gap_center < self.ground_top())
        {
            return Err(format!(
                "gap centre range must satisfy 0 < {} < {} < {}",
                self.min_gap_center,
                self.max_gap_center,
                self.ground_top()
            ));
        }
        Ok(())
    }
}
