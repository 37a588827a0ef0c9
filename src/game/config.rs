use serde::{Deserialize, Serialize};

/// Configuration for a game session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the grid, border included
    pub grid_width: usize,
    /// Height of the grid, border included
    pub grid_height: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Points awarded per food eaten
    pub food_points: u32,
    /// Milliseconds between game ticks
    pub tick_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 60,
            grid_height: 25,
            initial_snake_length: 3,
            food_points: 10,
            tick_ms: 120,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Small grid, handy in tests
    pub fn small() -> Self {
        Self::new(10, 10)
    }
}
