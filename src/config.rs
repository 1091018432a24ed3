use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::position::GridSize;

const APP_DIR_NAME: &str = "snake-grid";
const CONFIG_FILE_NAME: &str = "config.json";

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 20;

/// Default grid height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Default simulation speed.
pub const DEFAULT_TICKS_PER_SECOND: u32 = 5;

/// Score awarded for each food eaten.
pub const DEFAULT_POINTS_PER_FOOD: u32 = 10;

/// Narrowest grid that fits the starting snake: its tail sits at `width / 4 - 2`.
pub const MIN_GRID_WIDTH: u16 = 8;

pub const MIN_GRID_HEIGHT: u16 = 1;

/// Largest grid dimensions accepted. Food spawning scans every cell.
pub const MAX_GRID_WIDTH: u16 = 255;

pub const MAX_GRID_HEIGHT: u16 = 255;

/// Plain values the game is constructed from.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub ticks_per_second: u32,
    pub points_per_food: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            points_per_food: DEFAULT_POINTS_PER_FOOD,
        }
    }
}

impl GameConfig {
    /// Grid dimensions as a named pair.
    #[must_use]
    pub fn grid(&self) -> GridSize {
        GridSize::new(self.width, self.height)
    }

    /// Wall-clock time between two ticks.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second.max(1)
    }

    /// Rejects grids the starting snake does not fit on, oversized grids and
    /// a zero tick rate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_GRID_WIDTH {
            return Err(ConfigError::GridTooNarrow {
                width: self.width,
                min: MIN_GRID_WIDTH,
            });
        }
        if self.width > MAX_GRID_WIDTH {
            return Err(ConfigError::GridTooWide {
                width: self.width,
                max: MAX_GRID_WIDTH,
            });
        }
        if self.height < MIN_GRID_HEIGHT {
            return Err(ConfigError::GridTooShort {
                height: self.height,
                min: MIN_GRID_HEIGHT,
            });
        }
        if self.height > MAX_GRID_HEIGHT {
            return Err(ConfigError::GridTooTall {
                height: self.height,
                max: MAX_GRID_HEIGHT,
            });
        }
        if self.ticks_per_second == 0 {
            return Err(ConfigError::ZeroTickRate);
        }

        Ok(())
    }

    /// Loads config from the platform config directory.
    ///
    /// Returns defaults when no file exists yet.
    pub fn load() -> Result<Self, ConfigError> {
        match default_config_path() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads config from `path`, falling back to defaults when it is missing.
    ///
    /// Keys absent from the file keep their default value.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Returns the platform-correct config file path.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    let mut base = dirs::config_dir()?;
    base.push(APP_DIR_NAME);
    base.push(CONFIG_FILE_NAME);
    Some(base)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use crate::error::ConfigError;

    use super::GameConfig;

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!((config.width, config.height), (20, 20));
        assert_eq!(config.points_per_food, 10);
        assert_eq!(config.tick_interval(), Duration::from_millis(200));
    }

    #[test]
    fn narrow_grid_is_rejected() {
        let config = GameConfig {
            width: 7,
            ..GameConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::GridTooNarrow { width: 7, min: 8 })
        ));
    }

    #[test]
    fn empty_height_and_zero_rate_are_rejected() {
        let flat = GameConfig {
            height: 0,
            ..GameConfig::default()
        };
        let frozen = GameConfig {
            ticks_per_second: 0,
            ..GameConfig::default()
        };

        assert!(matches!(
            flat.validate(),
            Err(ConfigError::GridTooShort { height: 0, .. })
        ));
        assert!(matches!(frozen.validate(), Err(ConfigError::ZeroTickRate)));
    }

    #[test]
    fn oversized_grid_is_rejected() {
        let wide = GameConfig {
            width: 65535,
            height: 65535,
            ..GameConfig::default()
        };
        let tall = GameConfig {
            height: 256,
            ..GameConfig::default()
        };
        let largest = GameConfig {
            width: 255,
            height: 255,
            ..GameConfig::default()
        };

        assert!(matches!(
            wide.validate(),
            Err(ConfigError::GridTooWide {
                width: 65535,
                max: 255
            })
        ));
        assert!(matches!(
            tall.validate(),
            Err(ConfigError::GridTooTall { height: 256, .. })
        ));
        assert!(largest.validate().is_ok());
    }

    #[test]
    fn missing_config_file_returns_defaults() {
        let path = unique_test_path("missing");

        let loaded =
            GameConfig::load_from_path(&path).expect("missing file should return defaults");

        assert_eq!(loaded, GameConfig::default());
    }

    #[test]
    fn partial_config_file_keeps_other_defaults() {
        let path = unique_test_path("partial");
        write_test_file(&path, r#"{ "width": 32, "points_per_food": 25 }"#);

        let loaded = GameConfig::load_from_path(&path).expect("partial file should load");

        assert_eq!(loaded.width, 32);
        assert_eq!(loaded.points_per_food, 25);
        assert_eq!(loaded.height, 20);
        assert_eq!(loaded.ticks_per_second, 5);
        cleanup_test_path(&path);
    }

    #[test]
    fn malformed_config_file_returns_error() {
        let path = unique_test_path("malformed");
        write_test_file(&path, "not-json");

        assert!(matches!(
            GameConfig::load_from_path(&path),
            Err(ConfigError::Parse { .. })
        ));

        cleanup_test_path(&path);
    }

    fn write_test_file(path: &Path, contents: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(path, contents).expect("test file write should succeed");
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("snake-grid-config-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &Path) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
