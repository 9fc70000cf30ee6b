use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{
    board::{is_self_collision, Board},
    config::{validate_layout, GameConfig},
    direction::Direction,
    error::ConfigError,
    state::{Cell, CollisionType, GameState, GameStatus},
};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// No direction chosen yet, nothing moved
    Idle,
    /// The snake advanced one cell
    Moved,
    /// The snake advanced onto the food and grew
    Ate,
    /// Eating would leave no cell for new food; the run is over
    BoardFull,
    /// The snake hit a wall or itself; the run is over
    GameOver(CollisionType),
}

impl TickResult {
    /// True for results that end the run
    pub fn is_terminal(&self) -> bool {
        matches!(self, TickResult::BoardFull | TickResult::GameOver(_))
    }
}

/// The game engine: owns one run's state and applies moves to it
pub struct GameEngine<R = StdRng> {
    config: GameConfig,
    board: Board,
    rng: R,
    state: GameState,
}

impl GameEngine<StdRng> {
    /// Create a new game engine seeded from the operating system
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an engine whose food placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create a game engine with an injected random source
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let state = GameState::new(config.initial_snake(), config.initial_food, 0);
        info!(
            "game engine ready: {}x{} grid, {} ms ticks",
            config.grid_width, config.grid_height, config.tick_period_ms
        );

        Ok(Self {
            board: config.board(),
            config,
            rng,
            state,
        })
    }

    /// Resume from an arbitrary state, e.g. a hand-built position.
    /// The state's snake and food must satisfy the same rules as the
    /// configured starting layout.
    pub fn with_state(config: GameConfig, state: GameState, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let board = config.board();
        validate_layout(&board, state.snake.cells(), state.food)?;

        Ok(Self {
            board,
            config,
            rng,
            state,
        })
    }

    /// Request a new heading. Exact reversals and requests after game over
    /// are ignored.
    pub fn set_direction(&mut self, requested: Direction) {
        if self.state.outcome.is_some() {
            return;
        }

        if let Some(current) = self.state.direction {
            if current.is_opposite(requested) {
                debug!("ignoring reversal from {:?} to {:?}", current, requested);
                return;
            }
        }

        self.state.direction = Some(requested);
        self.state.head_orientation = requested;
    }

    /// Advance the game by one step
    pub fn tick(&mut self) -> TickResult {
        if let Some(outcome) = self.state.outcome {
            return outcome;
        }

        let Some(direction) = self.state.direction else {
            return TickResult::Idle;
        };

        let new_head = self.state.snake.head().moved_in_direction(direction);

        if let Some(collision_type) = self.check_collision(new_head) {
            return self.end_run(TickResult::GameOver(collision_type));
        }

        let ate_food = new_head == self.state.food;
        self.state.snake.advance(new_head, ate_food);

        if !ate_food {
            return TickResult::Moved;
        }

        match self.board.place_food(self.state.snake.cells(), &mut self.rng) {
            Ok(food) => {
                self.state.food = food;
                self.state.score += 1;

                if self.state.score > self.state.high_score {
                    self.state.high_score = self.state.score;
                    info!("new high score: {}", self.state.high_score);
                }

                TickResult::Ate
            }
            Err(full) => {
                // Leave the run exactly as it was before this tick
                self.state.snake.retract_head();
                warn!("{}; ending the run", full);
                self.end_run(TickResult::BoardFull)
            }
        }
    }

    /// Start a new run. The high score is kept.
    pub fn reset(&mut self) {
        self.state = GameState::new(
            self.config.initial_snake(),
            self.config.initial_food,
            self.state.high_score,
        );
        info!("game reset, high score {}", self.state.high_score);
    }

    /// Check if the new head position causes a collision
    fn check_collision(&self, cell: Cell) -> Option<CollisionType> {
        if self.board.is_wall_collision(cell) {
            return Some(CollisionType::Wall);
        }

        if is_self_collision(cell, self.state.snake.cells()) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    fn end_run(&mut self, outcome: TickResult) -> TickResult {
        self.state.outcome = Some(outcome);

        match outcome {
            TickResult::GameOver(collision_type) => info!(
                "Game Over ({}), score {}",
                collision_type, self.state.score
            ),
            _ => info!("Game Over (board full), score {}", self.state.score),
        }

        outcome
    }
}

impl<R> GameEngine<R> {
    pub fn snake_cells(&self) -> &[Cell] {
        self.state.snake.cells()
    }

    pub fn food_cell(&self) -> Cell {
        self.state.food
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn high_score(&self) -> u32 {
        self.state.high_score
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Current heading, `None` before the first move of a run
    pub fn direction(&self) -> Option<Direction> {
        self.state.direction
    }

    /// Direction the head sprite should face
    pub fn head_orientation(&self) -> Direction {
        self.state.head_orientation
    }

    /// How the current run ended, if it has
    pub fn outcome(&self) -> Option<TickResult> {
        self.state.outcome
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
}
