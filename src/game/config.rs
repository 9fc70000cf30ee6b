use std::collections::HashSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::error::ConfigError;
use super::state::{Cell, Snake};

/// Configuration for the game, fixed for the lifetime of an engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Time between two ticks, in milliseconds
    pub tick_period_ms: u64,
    /// Body the snake starts every run with, head first
    pub initial_snake: Vec<Cell>,
    /// Food position at the start of every run
    pub initial_food: Cell,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            tick_period_ms: 300,
            initial_snake: vec![Cell::new(7, 10), Cell::new(6, 10), Cell::new(5, 10)],
            initial_food: Cell::new(15, 10),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self::default().resized(width, height)
    }

    /// Parse a YAML document; missing fields take their default values
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml_ng::Error> {
        serde_yaml_ng::from_str(content)
    }

    /// Change the grid size, re-centring the starting layout if the
    /// configured one no longer fits
    pub fn resized(mut self, width: usize, height: usize) -> Self {
        self.grid_width = width;
        self.grid_height = height;

        if self.validate().is_err() {
            let (snake, food) = centered_layout(width, height);
            self.initial_snake = snake;
            self.initial_food = food;
        }

        self
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    pub fn board(&self) -> Board {
        Board::new(self.grid_width, self.grid_height)
    }

    pub fn initial_snake(&self) -> Snake {
        Snake::from_cells(self.initial_snake.clone())
    }

    /// Check every construction-time invariant
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.grid_width, self.grid_height);
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid { width, height });
        }
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(ConfigError::GridTooLarge { width, height });
        }
        if self.tick_period_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }

        validate_layout(&self.board(), &self.initial_snake, self.initial_food)
    }
}

/// Check a snake body and food cell against `board`: the snake is non-empty,
/// inside the grid, free of overlaps and contiguous; the food is inside the
/// grid and off the snake
pub(crate) fn validate_layout(
    board: &Board,
    snake: &[Cell],
    food: Cell,
) -> Result<(), ConfigError> {
    if snake.is_empty() {
        return Err(ConfigError::EmptySnake);
    }

    let mut seen = HashSet::new();
    for &cell in snake {
        if board.is_wall_collision(cell) {
            return Err(ConfigError::SnakeOutOfBounds(cell));
        }
        if !seen.insert(cell) {
            return Err(ConfigError::SnakeOverlap(cell));
        }
    }
    for pair in snake.windows(2) {
        if !pair[0].is_adjacent(pair[1]) {
            return Err(ConfigError::SnakeNotContiguous(pair[0], pair[1]));
        }
    }

    if board.is_wall_collision(food) {
        return Err(ConfigError::FoodOutOfBounds(food));
    }
    if seen.contains(&food) {
        return Err(ConfigError::FoodOnSnake(food));
    }

    Ok(())
}

/// A horizontal snake of up to three cells in the middle row, facing right,
/// with food on the rightmost free cell of that row. The snake is shortened
/// on tiny grids so at least one cell stays free for food.
fn centered_layout(width: usize, height: usize) -> (Vec<Cell>, Cell) {
    let area = width * height;
    let length = width.clamp(1, 3).min(area.saturating_sub(1)).max(1);
    let head_x = ((width + length) / 2).max(1) as i32;
    let row = height.div_ceil(2).max(1) as i32;

    let snake: Vec<Cell> = (0..length as i32)
        .map(|i| Cell::new(head_x - i, row))
        .collect();

    let food = (1..=width as i32)
        .rev()
        .map(|x| Cell::new(x, row))
        .find(|cell| !snake.contains(cell))
        .or_else(|| Board::new(width, height).free_cells(&snake).first().copied())
        .unwrap_or(Cell::new(width as i32, row));

    (snake, food)
}
