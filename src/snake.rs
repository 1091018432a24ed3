use std::collections::{HashSet, VecDeque};

use crate::direction::Direction;
use crate::position::{GridSize, Position};

/// Number of segments a fresh snake starts with.
pub const INITIAL_SNAKE_LENGTH: i32 = 3;

/// Snake body (head first) and heading.
///
/// Every transform returns a new value; a `Snake` is never mutated in place.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
}

impl Snake {
    /// Creates the starting snake: three horizontal segments with the head at
    /// `(width / 4, height / 2)`, extending left, heading right.
    ///
    /// Expects a grid that passed [`crate::config::GameConfig::validate`].
    #[must_use]
    pub fn create_default(bounds: GridSize) -> Self {
        let head = Position::new(i32::from(bounds.width / 4), i32::from(bounds.height / 2));
        let body = (0..INITIAL_SNAKE_LENGTH)
            .map(|offset| Position::new(head.x - offset, head.y))
            .collect();

        Self {
            body,
            direction: Direction::Right,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");

        Self {
            body: VecDeque::from(segments),
            direction,
        }
    }

    /// Returns the snake after one step along its heading.
    ///
    /// With `grow` the old tail is kept, so the snake gets one segment longer.
    #[must_use]
    pub fn move_forward(&self, grow: bool) -> Self {
        let mut body = self.body.clone();
        body.push_front(self.next_head_position());
        if !grow {
            let _ = body.pop_back();
        }

        Self {
            body,
            direction: self.direction,
        }
    }

    /// Returns the snake heading `direction`, or an unchanged copy when that
    /// would reverse onto the neck.
    #[must_use]
    pub fn change_direction(&self, direction: Direction) -> Self {
        if self.direction.is_opposite(direction) {
            return self.clone();
        }

        Self {
            body: self.body.clone(),
            direction,
        }
    }

    /// Returns the head position for the next movement tick.
    #[must_use]
    pub fn next_head_position(&self) -> Position {
        self.head() + self.direction.delta()
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn collides_with_self(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns the set of cells covered by the body.
    #[must_use]
    pub fn occupied_cells(&self) -> HashSet<Position> {
        self.body.iter().copied().collect()
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the last segment.
    #[must_use]
    pub fn tail(&self) -> Position {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current heading.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
