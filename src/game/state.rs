use std::fmt;

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::engine::TickResult;

/// A cell on the game grid. Coordinates are 1-indexed; cells that have
/// stepped off the grid (x or y outside `1..=W` / `1..=H`) are representable
/// so that wall collisions can be detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move cell one step in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// True if `other` is exactly one orthogonal step away
    pub fn is_adjacent(&self, other: Cell) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Body segments, with head at index 0
    body: Vec<Cell>,
}

impl Snake {
    /// Create a snake from explicit cells, head first
    pub fn from_cells(cells: Vec<Cell>) -> Self {
        Self { body: cells }
    }

    /// Get the head position. Engines only hold validated, non-empty snakes.
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.body
    }

    /// Prepend a new head, dropping the tail unless `grow` is set
    pub fn advance(&mut self, new_head: Cell, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    /// Undo the most recent `advance(_, true)`
    pub(crate) fn retract_head(&mut self) {
        if self.body.len() > 1 {
            self.body.remove(0);
        }
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

impl fmt::Display for CollisionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollisionType::Wall => f.write_str("wall collision"),
            CollisionType::SelfCollision => f.write_str("self collision"),
        }
    }
}

/// Lifecycle of a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// No direction chosen yet; ticks do nothing
    Idle,
    /// Ticks move the snake
    Running,
    /// Terminal until `reset()`
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Cell,
    /// Current heading, `None` before the first accepted move
    pub direction: Option<Direction>,
    /// Display hint for the head sprite
    pub head_orientation: Direction,
    pub score: u32,
    pub high_score: u32,
    /// Terminal result of the run, set once the game is over
    pub outcome: Option<TickResult>,
}

impl GameState {
    /// Create a fresh state for a new run, carrying over `high_score`
    pub fn new(snake: Snake, food: Cell, high_score: u32) -> Self {
        Self {
            snake,
            food,
            direction: None,
            head_orientation: Direction::Right,
            score: 0,
            high_score,
            outcome: None,
        }
    }

    pub fn status(&self) -> GameStatus {
        if self.outcome.is_some() {
            GameStatus::GameOver
        } else if self.direction.is_none() {
            GameStatus::Idle
        } else {
            GameStatus::Running
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_movement() {
        let cell = Cell::new(5, 5);
        assert_eq!(cell.moved_by(1, 0), Cell::new(6, 5));
        assert_eq!(cell.moved_by(-1, 0), Cell::new(4, 5));
        assert_eq!(cell.moved_by(0, 1), Cell::new(5, 6));
        assert_eq!(cell.moved_in_direction(Direction::Up), Cell::new(5, 4));
    }

    #[test]
    fn test_cell_adjacency() {
        let cell = Cell::new(5, 5);
        assert!(cell.is_adjacent(Cell::new(5, 4)));
        assert!(cell.is_adjacent(Cell::new(6, 5)));
        assert!(!cell.is_adjacent(Cell::new(6, 6)));
        assert!(!cell.is_adjacent(cell));
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::new(7, 10).to_string(), "(7, 10)");
    }

    fn straight_snake() -> Snake {
        Snake::from_cells(vec![Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)])
    }

    #[test]
    fn test_snake_creation() {
        let snake = straight_snake();
        assert_eq!(snake.cells().len(), 3);
        assert_eq!(snake.head(), Cell::new(5, 5));
        assert!(snake.cells().contains(&Cell::new(3, 5)));
        assert!(!snake.cells().contains(&Cell::new(6, 5)));
    }

    #[test]
    fn test_snake_advance() {
        let mut snake = straight_snake();

        snake.advance(Cell::new(6, 5), false);
        assert_eq!(snake.cells().len(), 3);
        assert_eq!(snake.head(), Cell::new(6, 5));
        assert_eq!(snake.cells().last(), Some(&Cell::new(4, 5)));

        snake.advance(Cell::new(7, 5), true);
        assert_eq!(snake.cells().len(), 4);
        assert_eq!(snake.head(), Cell::new(7, 5));
        assert_eq!(snake.cells().last(), Some(&Cell::new(4, 5)));

        snake.retract_head();
        assert_eq!(snake.cells().len(), 3);
        assert_eq!(snake.head(), Cell::new(6, 5));
    }

    #[test]
    fn test_status_derivation() {
        let mut state = GameState::new(
            straight_snake(),
            Cell::new(10, 10),
            0,
        );
        assert_eq!(state.status(), GameStatus::Idle);

        state.direction = Some(Direction::Up);
        assert_eq!(state.status(), GameStatus::Running);

        state.outcome = Some(TickResult::GameOver(CollisionType::Wall));
        assert_eq!(state.status(), GameStatus::GameOver);
    }
}
