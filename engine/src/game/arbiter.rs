use super::types::Direction;

/// Accepts at most one direction change between two ticks and refuses
/// 180-degree turns.
#[derive(Clone, Debug)]
pub struct DirectionArbiter {
    slot_available: bool,
}

impl Default for DirectionArbiter {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectionArbiter {
    pub fn new() -> Self {
        Self {
            slot_available: true,
        }
    }

    pub fn slot_available(&self) -> bool {
        self.slot_available
    }

    /// Returns whether `intent` replaced `current`.
    pub fn request(&mut self, current: &mut Direction, intent: Direction) -> bool {
        if !self.slot_available || intent.is_opposite(current) {
            return false;
        }
        *current = intent;
        self.slot_available = false;
        true
    }

    pub fn rearm(&mut self) {
        self.slot_available = true;
    }
}
