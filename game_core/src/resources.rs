/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Time {
    pub dt: f32,  // Delta time for this tick
    pub now: f32, // Total simulated time in the current run
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

/// Pipes cleared in the current run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub value: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        self.value += 1;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seed from the platform entropy source
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub pipes_spawned: u32,
    pub pipes_scored: u32,
    pub hit_boundary: bool,
    pub hit_pipe: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn crashed(&self) -> bool {
        self.hit_boundary || self.hit_pipe
    }
}

/// Spawn timer plus the sequence counter that orders pipes
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PipeSpawner {
    pub timer: f32, // Seconds since the last spawn
    next_seq: u64,
}

impl PipeSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the timer. Returns true when a pipe is due; the timer restarts from 0.
    pub fn update(&mut self, dt: f32, interval: f32) -> bool {
        self.timer += dt;
        if self.timer >= interval {
            self.timer = 0.0;
            true
        } else {
            false
        }
    }

    pub fn next_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}
