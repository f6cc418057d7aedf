use std::time::Duration;

use super::game_state::{GameState, Rules, TickOutcome};
use super::types::{Direction, GameStatus};
use crate::config::{GameSettings, Validate};
use crate::log;
use crate::session_rng::SessionRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineCommand {
    Turn(Direction),
    TogglePause,
    Restart,
}

/// Owns the running game and everything needed to start the next one.
pub struct SnakeEngine {
    settings: GameSettings,
    rules: Rules,
    rng: SessionRng,
    state: GameState,
    games_played: u32,
}

impl SnakeEngine {
    /// Fails when `settings` do not describe a playable arena.
    pub fn new(settings: GameSettings, seed: u64) -> Result<Self, String> {
        Self::with_rng(settings, SessionRng::new(seed))
    }

    pub fn from_random(settings: GameSettings) -> Result<Self, String> {
        Self::with_rng(settings, SessionRng::from_random())
    }

    fn with_rng(settings: GameSettings, mut rng: SessionRng) -> Result<Self, String> {
        settings
            .validate()
            .map_err(|e| format!("Invalid game settings: {}", e))?;
        let state = GameState::new(&settings, &mut rng);
        log!(
            "New game on a {}x{} arena (seed {}), food at {}",
            settings.arena_width,
            settings.arena_height,
            rng.seed(),
            state.food()
        );
        Ok(Self {
            rules: settings.rules(),
            settings,
            rng,
            state,
            games_played: 1,
        })
    }

    pub fn tick(&mut self) -> TickOutcome {
        self.state.tick(&self.rules, &mut self.rng)
    }

    pub fn request_direction(&mut self, intent: Direction) -> bool {
        self.state.request_direction(intent)
    }

    pub fn toggle_pause(&mut self) -> GameStatus {
        self.state.toggle_pause()
    }

    /// Starts a fresh game. Only a finished game can be restarted.
    pub fn restart(&mut self) -> bool {
        if !self.state.is_over() {
            return false;
        }
        let previous_score = self.state.score();
        self.state = GameState::new(&self.settings, &mut self.rng);
        self.games_played += 1;
        log!(
            "Restarted (game #{}), previous score {}, food at {}",
            self.games_played,
            previous_score,
            self.state.food()
        );
        true
    }

    /// Applies one input command; returns whether it changed anything.
    pub fn apply(&mut self, command: EngineCommand) -> bool {
        match command {
            EngineCommand::Turn(direction) => self.request_direction(direction),
            EngineCommand::TogglePause => {
                let before = self.state.status();
                self.toggle_pause() != before
            }
            EngineCommand::Restart => self.restart(),
        }
    }

    /// Delay before the next tick. Re-read after every tick: meals shorten it.
    pub fn current_tick_interval(&self) -> Duration {
        self.state.tick_interval()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }
}
