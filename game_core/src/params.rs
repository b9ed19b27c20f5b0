/// Game tuning parameters for Flappy
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Play surface (logical pixels)
    pub const WIDTH: f32 = 420.0;
    pub const HEIGHT: f32 = 640.0;
    pub const GROUND_HEIGHT: f32 = 96.0;

    // Bird
    pub const BIRD_X: f32 = 100.0;
    pub const BIRD_RADIUS: f32 = 16.0;
    pub const BIRD_START_FRACTION: f32 = 0.45; // of surface height
    pub const GRAVITY: f32 = 1450.0; // px/s², downward
    pub const FLAP_VELOCITY: f32 = -420.0; // px/s, negative is up

    // Pipes
    pub const PIPE_WIDTH: f32 = 72.0;
    pub const PIPE_GAP: f32 = 180.0;
    pub const PIPE_SPEED: f32 = 185.0; // px/s
    pub const PIPE_SPAWN_SECONDS: f32 = 1.35;
    pub const MIN_GAP_CENTER: f32 = 140.0;
    pub const MAX_GAP_CENTER: f32 = 390.0;
    pub const SPAWN_MARGIN: f32 = 48.0;
    pub const DESPAWN_MARGIN: f32 = 16.0;

    // Frame timing
    pub const MAX_DT: f32 = 0.045;
}
