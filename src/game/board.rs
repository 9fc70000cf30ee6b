//! Board geometry and collision queries
//!
//! Everything here is a pure function of the grid size and the cells passed
//! in; the engine owns all mutable state.

use log::{debug, error};
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use super::state::Cell;

/// No free cell is left on the grid for food
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no space to place food on a {width}x{height} grid")]
pub struct BoardFull {
    pub width: usize,
    pub height: usize,
}

/// Dimensions of the 1-indexed playing field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// True if `cell` lies outside `1..=width` x `1..=height`
    pub fn is_wall_collision(&self, cell: Cell) -> bool {
        cell.x < 1 || cell.x > self.width as i32 || cell.y < 1 || cell.y > self.height as i32
    }

    pub fn contains(&self, cell: Cell) -> bool {
        !self.is_wall_collision(cell)
    }

    /// Every grid cell, column by column (x outer, y inner)
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let height = self.height as i32;
        (1..=self.width as i32).flat_map(move |x| (1..=height).map(move |y| Cell::new(x, y)))
    }

    /// Grid cells not covered by `snake`
    pub fn free_cells(&self, snake: &[Cell]) -> Vec<Cell> {
        self.cells()
            .filter(|cell| !is_self_collision(*cell, snake))
            .collect()
    }

    /// Pick a free cell uniformly at random
    pub fn place_food<R: Rng + ?Sized>(
        &self,
        snake: &[Cell],
        rng: &mut R,
    ) -> Result<Cell, BoardFull> {
        let free = self.free_cells(snake);

        match free.choose(rng) {
            Some(&cell) => {
                debug!("placed food at {} ({} free cells)", cell, free.len());
                Ok(cell)
            }
            None => {
                error!(
                    "no space to place food on {}x{} grid",
                    self.width, self.height
                );
                Err(BoardFull {
                    width: self.width,
                    height: self.height,
                })
            }
        }
    }
}

/// True iff `cell` equals any segment of `snake`, tail included
pub fn is_self_collision(cell: Cell, snake: &[Cell]) -> bool {
    snake.contains(&cell)
}
