use std::collections::HashSet;

use rand::Rng;

use crate::error::SpawnError;
use crate::position::{GridSize, Position};
use crate::snake::Snake;

/// Food currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Spawns food on a uniformly chosen cell outside `forbidden`.
    pub fn spawn_random<R: Rng + ?Sized>(
        rng: &mut R,
        bounds: GridSize,
        forbidden: &HashSet<Position>,
    ) -> Result<Self, SpawnError> {
        spawn_position(rng, bounds, forbidden).map(Self::new)
    }

    /// Spawns food in a cell the snake does not cover.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        bounds: GridSize,
        snake: &Snake,
    ) -> Result<Self, SpawnError> {
        Self::spawn_random(rng, bounds, &snake.occupied_cells())
    }
}

/// Picks a free position, or reports that the board is full.
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    forbidden: &HashSet<Position>,
) -> Result<Position, SpawnError> {
    let candidates: Vec<Position> = bounds
        .cells()
        .filter(|position| !forbidden.contains(position))
        .collect();

    if candidates.is_empty() {
        return Err(SpawnError::BoardFull {
            width: bounds.width,
            height: bounds.height,
        });
    }

    let index = rng.gen_range(0..candidates.len());
    Ok(candidates[index])
}
