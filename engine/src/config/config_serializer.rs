use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    /// Short format name used in error messages.
    fn format(&self) -> &'static str;
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Default)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn format(&self) -> &'static str {
        "YAML"
    }

    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config)
            .map_err(|e| format!("Failed to write settings as YAML: {}", e))
    }

    /// An empty or comment-only document reads as an empty mapping, so
    /// `#[serde(default)]` types come back with their defaults.
    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        let has_content = content
            .lines()
            .map(str::trim)
            .any(|line| !line.is_empty() && !line.starts_with('#'));
        let document = if has_content { content } else { "{}" };
        serde_yaml_ng::from_str(document)
            .map_err(|e| format!("Failed to parse YAML settings: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameSettings;

    #[test]
    fn test_empty_document_gives_defaults() {
        let serializer = YamlConfigSerializer::new();
        let settings: GameSettings = serializer.deserialize("").unwrap();
        assert_eq!(settings, GameSettings::default());
        let settings: GameSettings = serializer.deserialize("# tuned later\n\n").unwrap();
        assert_eq!(settings, GameSettings::default());
    }

    #[test]
    fn test_malformed_document_reports_format() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<GameSettings, String> = serializer.deserialize("arena_width: [1, 2");
        let err = result.unwrap_err();
        assert!(err.contains("YAML"));
        assert_eq!(ConfigSerializer::<GameSettings>::format(&serializer), "YAML");
    }
}
