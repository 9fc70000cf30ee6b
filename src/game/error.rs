use thiserror::Error;

use super::state::Cell;

/// Construction-time validation failures for [`GameConfig`](super::GameConfig)
/// and for states handed to [`GameEngine::with_state`](super::GameEngine::with_state).
///
/// These are programmer errors: gameplay outcomes such as collisions are
/// reported through [`TickResult`](super::TickResult) instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },
    #[error("grid dimensions {width}x{height} exceed the supported maximum")]
    GridTooLarge { width: usize, height: usize },
    #[error("tick period must be non-zero")]
    ZeroTickPeriod,
    #[error("snake must contain at least one cell")]
    EmptySnake,
    #[error("snake cell {0} lies outside the grid")]
    SnakeOutOfBounds(Cell),
    #[error("snake overlaps itself at {0}")]
    SnakeOverlap(Cell),
    #[error("snake cells {0} and {1} are not orthogonally adjacent")]
    SnakeNotContiguous(Cell, Cell),
    #[error("food cell {0} lies outside the grid")]
    FoodOutOfBounds(Cell),
    #[error("food cell {0} is covered by the snake")]
    FoodOnSnake(Cell),
}
