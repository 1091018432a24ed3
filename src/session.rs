use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::direction::Direction;
use crate::error::GameError;
use crate::game::{GameState, GameStatus};

/// High-level actions a driver feeds into a session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameAction {
    Turn(Direction),
    /// Toggles between playing and paused.
    Pause,
    Restart,
    Quit,
}

/// Owns the current snapshot for one driving loop.
///
/// Holds the pending turn between ticks and the random source used for food
/// placement, so a seeded session replays identically.
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    pending_direction: Option<Direction>,
    rng: StdRng,
}

impl Session {
    /// Creates a session seeded from OS entropy.
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        Self::from_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    pub fn with_seed(config: &GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::from_rng(config, StdRng::seed_from_u64(seed))
    }

    fn from_rng(config: &GameConfig, mut rng: StdRng) -> Result<Self, GameError> {
        let state = GameState::new(config, &mut rng)?;
        debug!(
            width = config.width,
            height = config.height,
            points_per_food = config.points_per_food,
            "session created"
        );

        Ok(Self {
            state,
            pending_direction: None,
            rng,
        })
    }

    /// Applies one external input.
    pub fn apply_input(&mut self, action: GameAction) {
        match action {
            GameAction::Turn(direction) => {
                if self.state.is_playing() {
                    self.pending_direction = Some(direction);
                }
            }
            GameAction::Pause => {
                self.state = match self.state.status {
                    GameStatus::Playing => self.state.pause(),
                    GameStatus::Paused => self.state.resume(),
                    _ => return,
                };
                debug!(status = ?self.state.status, "pause toggled");
            }
            GameAction::Restart => self.restart(),
            GameAction::Quit => {
                self.state = self.state.game_over();
                info!(score = self.state.score, "game quit");
            }
        }
    }

    /// Advances one tick, consuming the pending turn.
    pub fn tick(&mut self) -> &GameState {
        if !self.state.is_playing() {
            return &self.state;
        }

        let pending = self.pending_direction.take();
        let next = self.state.tick(pending, &mut self.rng);
        match next.status {
            GameStatus::GameOver => {
                info!(score = next.score, length = next.snake.len(), "game over");
            }
            GameStatus::BoardFull => {
                let bounds = next.bounds();
                info!(
                    width = bounds.width,
                    height = bounds.height,
                    score = next.score,
                    "board full"
                );
            }
            _ if next.score != self.state.score => {
                debug!(score = next.score, food = ?next.food.position, "food eaten");
            }
            _ => {}
        }
        self.state = next;

        &self.state
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the turn that will be applied on the next tick.
    #[must_use]
    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    fn restart(&mut self) {
        self.pending_direction = None;
        match self.state.restart(&mut self.rng) {
            Ok(fresh) => {
                info!(previous_score = self.state.score, "game restarted");
                self.state = fresh;
            }
            // Unreachable on a validated grid: the default snake leaves free cells.
            Err(error) => {
                info!(%error, "restart failed");
                self.state = self.state.board_full();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GameConfig;
    use crate::direction::Direction;
    use crate::food::Food;
    use crate::game::GameStatus;
    use crate::position::Position;
    use crate::snake::Snake;

    use super::{GameAction, Session};

    fn session(seed: u64) -> Session {
        Session::with_seed(&GameConfig::default(), seed).expect("default config is valid")
    }

    #[test]
    fn pending_turn_is_consumed_once() {
        let mut session = session(1);
        session.state.food = Food::new(Position::new(0, 0));

        session.apply_input(GameAction::Turn(Direction::Up));
        assert_eq!(session.pending_direction(), Some(Direction::Up));

        session.tick();
        assert_eq!(session.pending_direction(), None);
        assert_eq!(session.state().snake.head(), Position::new(5, 9));

        session.tick();
        assert_eq!(session.state().snake.head(), Position::new(5, 8));
    }

    #[test]
    fn last_turn_before_a_tick_wins() {
        let mut session = session(2);
        session.state.food = Food::new(Position::new(0, 0));

        session.apply_input(GameAction::Turn(Direction::Up));
        session.apply_input(GameAction::Turn(Direction::Down));
        session.tick();

        assert_eq!(session.state().snake.head(), Position::new(5, 11));
    }

    #[test]
    fn pause_toggles_and_freezes_ticks() {
        let mut session = session(3);
        let before = session.state().clone();

        session.apply_input(GameAction::Pause);
        assert_eq!(session.state().status, GameStatus::Paused);

        session.apply_input(GameAction::Turn(Direction::Up));
        assert_eq!(session.pending_direction(), None);
        session.tick();
        assert_eq!(session.state().snake, before.snake);

        session.apply_input(GameAction::Pause);
        assert_eq!(session.state().status, GameStatus::Playing);
    }

    #[test]
    fn quit_ends_the_game_and_pause_cannot_revive_it() {
        let mut session = session(4);

        session.apply_input(GameAction::Quit);
        assert_eq!(session.state().status, GameStatus::GameOver);

        session.apply_input(GameAction::Pause);
        assert_eq!(session.state().status, GameStatus::GameOver);
    }

    #[test]
    fn restart_clears_pending_turn_and_score() {
        let mut session = session(5);
        session.state.score = 40;
        session.apply_input(GameAction::Turn(Direction::Up));

        session.apply_input(GameAction::Restart);

        assert_eq!(session.pending_direction(), None);
        assert_eq!(session.state().score, 0);
        assert_eq!(session.state().status, GameStatus::Playing);
        assert_eq!(
            session.state().snake,
            Snake::create_default(session.state().bounds())
        );
    }

    #[test]
    fn saturated_board_ends_as_board_full() {
        let config = GameConfig {
            width: 8,
            height: 1,
            ..GameConfig::default()
        };
        let mut session = Session::with_seed(&config, 6).expect("config is valid");
        session.state.snake = Snake::from_segments(
            (0..7).rev().map(|x| Position::new(x, 0)).collect(),
            Direction::Right,
        );
        session.state.food = Food::new(Position::new(7, 0));

        let state = session.tick();

        assert_eq!(state.status, GameStatus::BoardFull);
        assert!(state.is_over());
        assert_eq!(state.score, state.points_per_food());
        assert_eq!(state.snake.len(), 8);
    }

    #[test]
    fn same_seed_replays_identically() {
        let inputs = [
            Some(GameAction::Turn(Direction::Down)),
            None,
            Some(GameAction::Turn(Direction::Right)),
            None,
            Some(GameAction::Turn(Direction::Up)),
            None,
            None,
        ];

        let run = |seed| {
            let mut session = session(seed);
            let mut snapshots = Vec::new();
            for action in inputs {
                if let Some(action) = action {
                    session.apply_input(action);
                }
                snapshots.push(session.tick().clone());
            }
            snapshots
        };

        assert_eq!(run(42), run(42));
    }
}
