use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Raised when food cannot be placed because every cell is taken.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum SpawnError {
    #[error("no free cell left to spawn food on a {width}x{height} grid")]
    BoardFull { width: u16, height: u16 },
}

/// Invalid or unreadable game configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid width {width} is too narrow, need at least {min}")]
    GridTooNarrow { width: u16, min: u16 },
    #[error("grid width {width} is too wide, at most {max} is supported")]
    GridTooWide { width: u16, max: u16 },
    #[error("grid height {height} is too short, need at least {min}")]
    GridTooShort { height: u16, min: u16 },
    #[error("grid height {height} is too tall, at most {max} is supported")]
    GridTooTall { height: u16, max: u16 },
    #[error("tick rate must be at least one tick per second")]
    ZeroTickRate,
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Any failure while setting up a game.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Spawn(#[from] SpawnError),
}
