use crate::food::Food;
use crate::position::GridSize;
use crate::snake::Snake;

/// Head has left the grid.
#[must_use]
pub fn wall_collision(snake: &Snake, bounds: GridSize) -> bool {
    !snake.head().is_in_bounds(bounds)
}

/// Head overlaps the rest of the body.
#[must_use]
pub fn self_collision(snake: &Snake) -> bool {
    snake.collides_with_self()
}

/// Head sits on the food.
#[must_use]
pub fn food_collision(snake: &Snake, food: &Food) -> bool {
    snake.head() == food.position
}

/// Returns true for collisions that end the game.
///
/// Food is not one of them: eating scores instead of terminating.
#[must_use]
pub fn has_collision(snake: &Snake, _food: &Food, bounds: GridSize) -> bool {
    wall_collision(snake, bounds) || self_collision(snake)
}
