//! One game session: world, resources and phase bundled together

use crate::{
    advance, create_bird, systems::*, Bird, Config, Events, GameAction, GameRng, Outcome, Phase,
    PhaseMachine, PipeSpawner, Pipe, Score, Time, TransitionResult,
};
use hecs::World;

/// Summary of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub score: u32,
}

pub struct Session {
    world: World,
    bird: hecs::Entity,
    time: Time,
    config: Config,
    score: Score,
    events: Events,
    spawner: PipeSpawner,
    rng: GameRng,
    fsm: PhaseMachine,
}

impl Session {
    pub fn new(config: Config, rng: GameRng) -> Result<Self, String> {
        config.validate()?;

        let mut world = World::new();
        let bird = create_bird(&mut world, Bird::spawn(&config));
        let mut session = Self {
            world,
            bird,
            time: Time::default(),
            config,
            score: Score::new(),
            events: Events::new(),
            spawner: PipeSpawner::new(),
            rng,
            fsm: PhaseMachine::new(),
        };
        session.reset_world();
        Ok(session)
    }

    /// Flap input. Starts a run from ready, restarts one from game over.
    pub fn flap(&mut self) -> TransitionResult {
        let restarting = self.fsm.is_game_over();
        let result = self.fsm.transition(GameAction::Flap);
        if result.success {
            if restarting {
                self.reset_world();
            }
            if let Ok(mut bird) = self.world.get::<&mut Bird>(self.bird) {
                bird.vel = self.config.flap_velocity;
            }
        }
        result
    }

    /// Explicit restart input. Only honoured in game over; returns to ready.
    pub fn reset(&mut self) -> TransitionResult {
        let result = self.fsm.transition(GameAction::Reset);
        if result.success {
            self.reset_world();
        }
        result
    }

    /// Run one tick if the game is running. Returns the final score on the
    /// tick that ends the run.
    pub fn update(&mut self, dt: f32) -> Option<RunSummary> {
        if !self.fsm.is_running() {
            return None;
        }

        self.time.dt = dt;
        let outcome = advance(
            &mut self.world,
            &mut self.time,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.spawner,
            &mut self.rng,
        );

        match outcome {
            Outcome::Continue => None,
            Outcome::Terminated => {
                self.fsm.transition(GameAction::Crash);
                Some(RunSummary {
                    score: self.score.value,
                })
            }
        }
    }

    /// Bird at its start height, a single fresh pipe, zeroed timer and score
    fn reset_world(&mut self) {
        self.world.clear();
        self.bird = create_bird(&mut self.world, Bird::spawn(&self.config));
        self.spawner = PipeSpawner::new();
        spawn_pipe(&mut self.world, &self.config, &mut self.spawner, &mut self.rng);
        self.score = Score::new();
        self.time = Time::default();
        self.events.clear();
    }

    pub fn phase(&self) -> Phase {
        self.fsm.phase()
    }

    pub fn score(&self) -> u32 {
        self.score.value
    }

    pub fn bird(&self) -> Bird {
        self.world
            .get::<&Bird>(self.bird)
            .map(|bird| *bird)
            .unwrap_or_else(|_| Bird::spawn(&self.config))
    }

    /// Active pipes in spawn order
    pub fn pipes(&self) -> Vec<Pipe> {
        pipes_in_spawn_order(&self.world)
            .into_iter()
            .map(|(_, pipe)| pipe)
            .collect()
    }

    pub fn spawn_timer(&self) -> f32 {
        self.spawner.timer
    }

    /// Events from the most recent tick
    pub fn events(&self) -> Events {
        self.events
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_session() -> Session {
        Session::new(Config::new(), GameRng::new(42)).unwrap()
    }

    #[test]
    fn test_new_session_is_ready() {
        let session = new_session();
        assert_eq!(session.phase(), Phase::Ready);
        assert_eq!(session.score(), 0);
        assert_eq!(session.pipes().len(), 1);
        assert_eq!(session.bird(), Bird::spawn(session.config()));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = Config {
            min_gap_center: 0.0,
            ..Config::new()
        };
        assert!(Session::new(config, GameRng::default()).is_err());
    }

    #[test]
    fn test_update_is_gated_to_running() {
        let mut session = new_session();
        let before = session.bird();
        assert_eq!(session.update(0.03), None);
        assert_eq!(session.bird(), before, "ready phase does not simulate");
    }

    #[test]
    fn test_flap_sets_impulse_and_starts() {
        let mut session = new_session();
        let result = session.flap();
        assert!(result.changed());
        assert_eq!(session.phase(), Phase::Running);
        assert_eq!(session.bird().vel, session.config().flap_velocity);
    }

    #[test]
    fn test_flap_while_running_only_kicks() {
        let mut session = new_session();
        session.flap();
        session.update(0.02);
        session.update(0.02);
        let pipes_before = session.pipes();

        session.flap();

        assert_eq!(session.phase(), Phase::Running);
        assert_eq!(session.bird().vel, session.config().flap_velocity);
        assert_eq!(session.pipes(), pipes_before, "no reset mid-run");
    }

    #[test]
    fn test_reset_ignored_outside_game_over() {
        let mut session = new_session();
        session.flap();
        assert!(!session.reset().success);
        assert_eq!(session.phase(), Phase::Running);
    }

    #[test]
    fn test_falling_to_ground_ends_run() {
        let mut session = new_session();
        session.flap();
        let mut summary = None;
        for _ in 0..200 {
            summary = session.update(0.045);
            if summary.is_some() {
                break;
            }
        }
        assert_eq!(summary, Some(RunSummary { score: 0 }));
        assert_eq!(session.phase(), Phase::GameOver);
        assert!(session.events().hit_boundary);

        // Simulation stops once the run is over
        let bird = session.bird();
        assert_eq!(session.update(0.045), None);
        assert_eq!(session.bird(), bird);
    }
}
