use anyhow::{Context, Result};
use std::path::Path;

use crate::game::GameConfig;

/// Load persisted settings, returning `None` when the file does not exist
pub fn load(path: &Path) -> Result<Option<GameConfig>> {
    if !path.exists() {
        return Ok(None);
    }

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings from {:?}", path))?;
    let config: GameConfig =
        serde_json::from_str(&json).context("Failed to deserialize settings")?;

    Ok(Some(config))
}

/// Write settings as pretty JSON, creating parent directories
pub fn save(path: &Path, config: &GameConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }

    let json = serde_json::to_string_pretty(config).context("Failed to serialize settings")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write settings to {:?}", path))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_settings_are_none() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = load(&temp_dir.path().join("settings.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_settings_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");

        let config = GameConfig {
            board_width: 500,
            initial_tempo_ms: 80,
            ..Default::default()
        };

        save(&path, &config).unwrap();
        let loaded = load(&path).unwrap().unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_corrupt_settings_are_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(load(&path).is_err());
    }
}
