//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Front ends drive it through [`GameEngine::set_direction`], [`GameEngine::tick`]
//! and [`GameEngine::reset`], and read everything else back through accessors.

pub mod board;
pub mod config;
pub mod curve;
pub mod direction;
pub mod engine;
pub mod error;
pub mod state;

// Re-export commonly used types
pub use board::{is_self_collision, Board, BoardFull};
pub use config::GameConfig;
pub use curve::{classify_segment_orientation, SegmentOrientation};
pub use direction::Direction;
pub use engine::{GameEngine, TickResult};
pub use error::ConfigError;
pub use state::{Cell, CollisionType, GameState, GameStatus, Snake};
