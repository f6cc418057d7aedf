pub mod config;
pub mod game;
pub mod logger;
pub mod session_rng;

pub use config::GameSettings;
pub use game::*;
pub use session_rng::SessionRng;
