use serde::{Deserialize, Serialize};

use super::Validate;
use crate::game::{Arena, Rules};

const MIN_ARENA_CELLS: i32 = 4;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub arena_width: i32,
    pub arena_height: i32,
    pub segment_size: i32,
    pub initial_length: usize,
    pub initial_speed_ms: u64,
    pub food_reward: u32,
    pub speed_step_ms: u64,
    pub min_speed_ms: u64,
    pub food_retry_limit: usize,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            arena_width: 300,
            arena_height: 300,
            segment_size: 10,
            initial_length: 4,
            initial_speed_ms: 300,
            food_reward: 10,
            speed_step_ms: 10,
            min_speed_ms: 0,
            food_retry_limit: 100,
        }
    }
}

impl GameSettings {
    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height, self.segment_size)
    }

    pub fn rules(&self) -> Rules {
        Rules {
            food_reward: self.food_reward,
            speed_step_ms: self.speed_step_ms,
            min_speed_ms: self.min_speed_ms,
            food_retry_limit: self.food_retry_limit,
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.segment_size <= 0 {
            return Err("Segment size must be positive".to_string());
        }
        for (name, value) in [("width", self.arena_width), ("height", self.arena_height)] {
            if value <= 0 || value % self.segment_size != 0 {
                return Err(format!(
                    "Arena {} must be a positive multiple of the segment size ({})",
                    name, self.segment_size
                ));
            }
            if value / self.segment_size < MIN_ARENA_CELLS {
                return Err(format!(
                    "Arena {} must span at least {} segments",
                    name, MIN_ARENA_CELLS
                ));
            }
        }
        if self.initial_length == 0 {
            return Err("Initial snake length must be at least 1".to_string());
        }
        let centre_column = self.arena().centre().x / self.segment_size;
        if self.initial_length as i64 > centre_column as i64 {
            return Err(format!(
                "Initial snake length {} does not fit left of the arena centre ({} segments)",
                self.initial_length, centre_column
            ));
        }
        if self.initial_speed_ms < self.min_speed_ms {
            return Err("Initial speed must not be below the minimum speed".to_string());
        }
        if self.food_retry_limit == 0 {
            return Err("Food retry limit must be at least 1".to_string());
        }
        Ok(())
    }
}
