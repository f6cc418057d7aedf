mod config_content_provider;
mod config_manager;
mod config_serializer;
mod game_settings;

pub use config_content_provider::{
    ConfigContentProvider, FileContentConfigProvider, InMemoryConfigProvider,
};
pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use game_settings::GameSettings;

/// Checked before a configuration is cached or written.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
