use std::time::Duration;

use super::arbiter::DirectionArbiter;
use super::body::Body;
use super::collision::collision;
use super::food::place_food;
use super::types::{Arena, Cell, DeathReason, Direction, GameStatus};
use crate::config::GameSettings;
use crate::session_rng::SessionRng;
use crate::{debug_log, log};

/// Tunable scoring and pacing constants applied on every meal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rules {
    pub food_reward: u32,
    pub speed_step_ms: u64,
    pub min_speed_ms: u64,
    pub food_retry_limit: usize,
}

impl Default for Rules {
    fn default() -> Self {
        GameSettings::default().rules()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused or over; nothing changed.
    Idle,
    Moved,
    Ate { score: u32 },
    GameOver(DeathReason),
}

#[derive(Clone, Debug)]
pub struct GameState {
    arena: Arena,
    body: Body,
    direction: Direction,
    food: Cell,
    score: u32,
    speed_ms: u64,
    status: GameStatus,
    death_reason: Option<DeathReason>,
    ticks: u64,
    arbiter: DirectionArbiter,
}

impl GameState {
    pub fn new(settings: &GameSettings, rng: &mut SessionRng) -> Self {
        let arena = settings.arena();
        let body = Body::centered(&arena, settings.initial_length);
        let food = place_food(&body, &arena, rng, settings.food_retry_limit)
            .expect("Arena saturated: no free cell for the first food");

        Self::assemble(arena, body, Direction::Right, food, settings.initial_speed_ms)
    }

    /// Builds a running game from an explicit layout, e.g. to resume a
    /// scenario. The body may already sit outside the arena; the next tick
    /// reports that as a wall collision.
    pub fn from_parts(
        arena: Arena,
        body: Body,
        direction: Direction,
        food: Cell,
        speed_ms: u64,
    ) -> Result<Self, String> {
        if !arena.contains(food) {
            return Err(format!("Food {} lies outside the arena", food));
        }
        if body.contains(food) {
            return Err(format!("Food {} overlaps the snake", food));
        }
        Ok(Self::assemble(arena, body, direction, food, speed_ms))
    }

    fn assemble(
        arena: Arena,
        body: Body,
        direction: Direction,
        food: Cell,
        speed_ms: u64,
    ) -> Self {
        Self {
            arena,
            body,
            direction,
            food,
            score: 0,
            speed_ms,
            status: GameStatus::Running,
            death_reason: None,
            ticks: 0,
            arbiter: DirectionArbiter::new(),
        }
    }

    /// Advances the game by one step.
    ///
    /// The head moves first; a meal relocates the food and keeps the tail,
    /// otherwise the tail is dropped. Collisions are judged on the resulting
    /// body, so chasing one's own tail is legal.
    pub fn tick(&mut self, rules: &Rules, rng: &mut SessionRng) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::Idle;
        }

        let (dx, dy) = self.direction.velocity(self.arena.segment_size);
        let new_head = self.body.head().offset(dx, dy);
        let ate_food = new_head == self.food;

        self.body.push_head(new_head);
        self.ticks += 1;

        if ate_food {
            self.food = place_food(&self.body, &self.arena, rng, rules.food_retry_limit)
                .expect("Arena saturated: no free cell left for food");
            self.score += rules.food_reward;
            self.speed_ms = self
                .speed_ms
                .saturating_sub(rules.speed_step_ms)
                .max(rules.min_speed_ms);
            debug_log!(
                "Ate food at {}. Score: {}, length: {}, speed: {}ms, next food at {}",
                new_head,
                self.score,
                self.body.len(),
                self.speed_ms,
                self.food
            );
        } else {
            self.body.pop_tail();
        }

        if let Some(reason) = collision(&self.body, &self.arena) {
            self.status = GameStatus::Over;
            self.death_reason = Some(reason);
            log!(
                "Game over after {} ticks: snake {} at {}. Final score: {}",
                self.ticks,
                reason,
                new_head,
                self.score
            );
            return TickOutcome::GameOver(reason);
        }

        self.arbiter.rearm();

        if ate_food {
            TickOutcome::Ate { score: self.score }
        } else {
            TickOutcome::Moved
        }
    }

    /// At most one accepted turn per tick; reversals and turns after the game
    /// ended are ignored.
    pub fn request_direction(&mut self, intent: Direction) -> bool {
        if self.status == GameStatus::Over {
            return false;
        }
        let accepted = self.arbiter.request(&mut self.direction, intent);
        if accepted {
            debug_log!("Direction set to {:?}", intent);
        }
        accepted
    }

    pub fn toggle_pause(&mut self) -> GameStatus {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            GameStatus::Over => GameStatus::Over,
        };
        if self.status != GameStatus::Over {
            log!("Game {}", if self.is_paused() { "paused" } else { "resumed" });
        }
        self.status
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.speed_ms)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn can_change_direction(&self) -> bool {
        self.status != GameStatus::Over && self.arbiter.slot_available()
    }
}
