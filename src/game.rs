use rand::Rng;

use crate::collision::{food_collision, has_collision};
use crate::config::GameConfig;
use crate::direction::Direction;
use crate::error::{GameError, SpawnError};
use crate::food::Food;
use crate::position::GridSize;
use crate::snake::Snake;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    Paused,
    GameOver,
    /// The snake covers every cell, so no food can spawn. Terminal, counts as a win.
    BoardFull,
}

impl GameStatus {
    /// Returns true for states no tick or resume leaves.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::GameOver | Self::BoardFull)
    }
}

/// One immutable snapshot of a game.
///
/// Transitions take `&self` and return the next snapshot.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub status: GameStatus,
    bounds: GridSize,
    points_per_food: u32,
}

impl GameState {
    /// Builds the initial snapshot: default snake, fresh food, score zero.
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self::initial(config.grid(), config.points_per_food, rng)?)
    }

    fn initial<R: Rng + ?Sized>(
        bounds: GridSize,
        points_per_food: u32,
        rng: &mut R,
    ) -> Result<Self, SpawnError> {
        let snake = Snake::create_default(bounds);
        let food = Food::spawn(rng, bounds, &snake)?;

        Ok(Self {
            snake,
            food,
            score: 0,
            status: GameStatus::Playing,
            bounds,
            points_per_food,
        })
    }

    /// Advances the simulation by one tick.
    ///
    /// A pending turn is applied before moving. Eating grows the snake, adds
    /// the food reward and respawns food in the same step; wall and self
    /// collisions are checked on the result. Outside `Playing` this returns
    /// an unchanged copy.
    ///
    /// Eating the last free cell leaves nowhere to respawn: the grown, scored
    /// snapshot comes back with status [`GameStatus::BoardFull`] and the eaten
    /// food still under the head.
    #[must_use]
    pub fn tick<R: Rng + ?Sized>(&self, pending: Option<Direction>, rng: &mut R) -> Self {
        if self.status != GameStatus::Playing {
            return self.clone();
        }

        let turned = match pending {
            Some(direction) => self.snake.change_direction(direction),
            None => self.snake.clone(),
        };

        let moved = turned.move_forward(false);
        let mut next = if food_collision(&moved, &self.food) {
            // Same head, old tail kept.
            let grown = Self {
                snake: turned.move_forward(true),
                score: self.score.saturating_add(self.points_per_food),
                ..self.clone()
            };
            match Food::spawn(rng, self.bounds, &grown.snake) {
                Ok(food) => Self { food, ..grown },
                Err(SpawnError::BoardFull { .. }) => return grown.board_full(),
            }
        } else {
            Self {
                snake: moved,
                ..self.clone()
            }
        };

        if has_collision(&next.snake, &next.food, self.bounds) {
            next.status = GameStatus::GameOver;
        }

        next
    }

    /// Returns the snapshot with the snake turned towards `direction`.
    ///
    /// Reversals are ignored.
    #[must_use]
    pub fn change_direction(&self, direction: Direction) -> Self {
        Self {
            snake: self.snake.change_direction(direction),
            ..self.clone()
        }
    }

    /// Pauses a running game. Any other status is returned unchanged.
    #[must_use]
    pub fn pause(&self) -> Self {
        self.with_status_from(GameStatus::Playing, GameStatus::Paused)
    }

    /// Resumes a paused game. Any other status is returned unchanged.
    #[must_use]
    pub fn resume(&self) -> Self {
        self.with_status_from(GameStatus::Paused, GameStatus::Playing)
    }

    /// Ends the game from any status.
    #[must_use]
    pub fn game_over(&self) -> Self {
        Self {
            status: GameStatus::GameOver,
            ..self.clone()
        }
    }

    /// Marks the board as saturated.
    #[must_use]
    pub fn board_full(&self) -> Self {
        Self {
            status: GameStatus::BoardFull,
            ..self.clone()
        }
    }

    /// Discards this snapshot and builds a fresh one on the same grid.
    pub fn restart<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self, SpawnError> {
        Self::initial(self.bounds, self.points_per_food, rng)
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    #[must_use]
    pub fn points_per_food(&self) -> u32 {
        self.points_per_food
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    fn with_status_from(&self, from: GameStatus, to: GameStatus) -> Self {
        if self.status != from {
            return self.clone();
        }

        Self {
            status: to,
            ..self.clone()
        }
    }
}
