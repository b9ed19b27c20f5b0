//! Game Phase State Machine
//!
//! Governs ready/running/game-over transitions for one session.

/// Game phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Ready,
    Running,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Ready => "ready",
            Phase::Running => "running",
            Phase::GameOver => "gameover",
        }
    }
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Flap input (key or pointer)
    Flap,
    /// The simulation reported a collision
    Crash,
    /// Explicit restart input
    Reset,
}

/// Result of a phase transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from: Phase,
    pub to: Phase,
    pub action: GameAction,
}

impl TransitionResult {
    /// True when the phase actually changed
    pub fn changed(&self) -> bool {
        self.success && self.from != self.to
    }
}

/// Phase finite state machine
#[derive(Debug, Clone, Default)]
pub struct PhaseMachine {
    phase: Phase,
}

impl PhaseMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: GameAction) -> bool {
        self.next_phase(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from = self.phase;
        match self.next_phase(action) {
            Some(to) => {
                self.phase = to;
                TransitionResult {
                    success: true,
                    from,
                    to,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from,
                to: from,
                action,
            },
        }
    }

    /// Get next phase for a given action (if valid)
    fn next_phase(&self, action: GameAction) -> Option<Phase> {
        match (self.phase, action) {
            (Phase::Ready, GameAction::Flap) => Some(Phase::Running),

            // Flapping mid-run only kicks the bird
            (Phase::Running, GameAction::Flap) => Some(Phase::Running),
            (Phase::Running, GameAction::Crash) => Some(Phase::GameOver),

            (Phase::GameOver, GameAction::Flap) => Some(Phase::Running),
            (Phase::GameOver, GameAction::Reset) => Some(Phase::Ready),

            _ => None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}
