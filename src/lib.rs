//! Grid Snake - classic single-player snake on a bounded grid
//!
//! This library provides:
//! - Core game logic with no I/O (game module)
//! - Terminal rendering with ratatui (render module)
//! - Keyboard and pointer-drag input (input module)
//! - Session metrics and the interactive play mode (metrics, modes modules)

pub mod game;
pub mod input;
pub mod logger;
pub mod metrics;
pub mod modes;
pub mod render;
