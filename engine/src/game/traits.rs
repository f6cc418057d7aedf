use super::engine::EngineCommand;
use super::game_state::GameState;

/// Draws the game after every tick. Reads the state, never changes it.
pub trait Renderer {
    fn render(&mut self, state: &GameState);
}

/// Supplies player intents. Polled once between two ticks; commands are
/// applied in the order returned.
pub trait InputSource {
    fn poll(&mut self, state: &GameState) -> Vec<EngineCommand>;
}
