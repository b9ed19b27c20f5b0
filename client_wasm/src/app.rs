use crate::input::{command_for_key, Command};
use crate::scheduler::{run_frame, FrameClock};
use crate::surface::Surface;
use game_core::{RunSummary, Session, TransitionResult};

/// A session plus the clock that drives it from animation frames
pub struct App {
    session: Session,
    clock: FrameClock,
}

impl App {
    pub fn new(session: Session) -> Self {
        let clock = FrameClock::new(session.config().max_dt);
        Self { session, clock }
    }

    pub fn handle_command(&mut self, command: Command) -> TransitionResult {
        let result = match command {
            Command::Flap => self.session.flap(),
            Command::Restart => self.session.reset(),
        };
        if result.changed() {
            console_log!("Phase {} -> {}", result.from.as_str(), result.to.as_str());
        }
        result
    }

    /// Returns `None` for keys that carry no command
    pub fn handle_key(&mut self, code: &str) -> Option<TransitionResult> {
        command_for_key(code).map(|command| self.handle_command(command))
    }

    pub fn handle_pointer(&mut self) -> TransitionResult {
        self.handle_command(Command::Flap)
    }

    pub fn frame(
        &mut self,
        now_ms: f64,
        surface: &mut impl Surface,
        high_score: u32,
    ) -> Option<RunSummary> {
        let summary = run_frame(&mut self.session, &mut self.clock, now_ms, surface, high_score);
        if let Some(summary) = summary {
            console_log!("Run over with score {}", summary.score);
        }
        summary
    }

    /// Called when the frame loop stops so a later restart does not see
    /// one huge delta
    pub fn stop(&mut self) {
        self.clock.reset();
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}
