mod arbiter;
mod body;
mod collision;
mod engine;
mod food;
mod game_state;
mod traits;
mod types;

pub use arbiter::DirectionArbiter;
pub use body::Body;
pub use collision::{collision, is_game_over};
pub use engine::{EngineCommand, SnakeEngine};
pub use food::place_food;
pub use game_state::{GameState, Rules, TickOutcome};
pub use traits::{InputSource, Renderer};
pub use types::{Arena, Cell, DeathReason, Direction, GameStatus};
