use rand::rngs::ThreadRng;

use super::{
    action::{Action, Direction},
    board::Board,
    config::GameConfig,
    food,
    state::{EndReason, GamePhase, GameState, Snake},
};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Set on the tick the game ended, with why
    pub ended: Option<EndReason>,
}

/// The game engine: advances a `GameState` one tick at a time.
///
/// The engine holds no terminal or timer state; an external driver calls
/// `tick` at a fixed cadence and hands the state to a renderer afterwards.
pub struct GameEngine {
    config: GameConfig,
    rng: ThreadRng,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a fresh game: snake centered heading right, food placed, score
    /// zeroed. Also the restart operation after a game over.
    pub fn reset(&mut self) -> GameState {
        let board = Board::new(self.config.grid_width, self.config.grid_height);
        let snake = Snake::new(
            board.center(),
            Direction::Right,
            self.config.initial_snake_length,
        );

        let food = food::spawn(&board, snake.cells(), &mut self.rng);
        let mut state = GameState::new(board, snake, food.unwrap_or_else(|| board.center()));

        // a board too small to hold food is already won
        if food.is_none() {
            state.phase = GamePhase::Over;
            state.end_reason = Some(EndReason::BoardFull);
        }

        state
    }

    /// Advance the game by one tick.
    ///
    /// Order matters: steer, decide consumption against the cell the head is
    /// about to enter, advance the body (tail dropped first unless growing),
    /// then check the wall before the body. A tick on a finished game does
    /// nothing.
    pub fn tick(&mut self, state: &mut GameState, action: Action) -> TickOutcome {
        if !state.is_running() {
            return TickOutcome {
                ate_food: false,
                ended: None,
            };
        }

        if let Action::Move(direction) = action {
            state.snake.set_direction(direction);
        }

        let next_head = state
            .snake
            .head()
            .moved_in_direction(state.snake.direction());
        let ate_food = next_head == state.food;

        if ate_food {
            state.score += self.config.food_points;
        }

        state.snake.advance(ate_food);
        state.ticks += 1;

        let ended = self.check_end(state, ate_food);
        if let Some(reason) = ended {
            state.phase = GamePhase::Over;
            state.end_reason = Some(reason);
        }

        TickOutcome { ate_food, ended }
    }

    /// Terminal checks for the post-move state, wall first
    fn check_end(&mut self, state: &mut GameState, ate_food: bool) -> Option<EndReason> {
        if state.board.is_wall(state.snake.head()) {
            return Some(EndReason::Wall);
        }

        if state.snake.self_collision() {
            return Some(EndReason::SelfCollision);
        }

        if ate_food {
            // respawn against the post-move body so the new food never
            // overlaps the snake
            match food::spawn(&state.board, state.snake.cells(), &mut self.rng) {
                Some(pos) => state.food = pos,
                None => return Some(EndReason::BoardFull),
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::Position;

    #[test]
    fn test_reset() {
        let mut engine = GameEngine::new(GameConfig::default());
        let state = engine.reset();

        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.ticks, 0);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake.head(), Position::new(30, 12));
        assert!(state.board.is_interior(state.food));
        assert!(!state.snake.occupies(state.food));
    }

    #[test]
    fn test_straight_run_across_the_board() {
        // 60x25 board, head starts at the center (30, 12) heading right;
        // five input-free ticks land it on (35, 12) with nothing eaten
        let mut engine = GameEngine::new(GameConfig::default());
        let mut state = engine.reset();
        state.food = Position::new(1, 1);

        for _ in 0..5 {
            let outcome = engine.tick(&mut state, Action::Continue);
            assert!(!outcome.ate_food);
            assert!(outcome.ended.is_none());
        }

        assert_eq!(state.snake.head(), Position::new(35, 12));
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_food_consumption() {
        let mut engine = GameEngine::new(GameConfig::small());
        let mut state = engine.reset();

        // food directly in the snake's path
        let eaten = state
            .snake
            .head()
            .moved_in_direction(state.snake.direction());
        state.food = eaten;

        let outcome = engine.tick(&mut state, Action::Continue);

        assert!(outcome.ate_food);
        assert_eq!(state.score, 10);
        assert_eq!(state.snake.len(), 4);
        assert_eq!(state.phase, GamePhase::Running);

        // food moved somewhere legal
        assert_ne!(state.food, eaten);
        assert!(state.board.is_interior(state.food));
        assert!(!state.snake.occupies(state.food));
    }

    #[test]
    fn test_wall_collision_ends_the_game() {
        let mut engine = GameEngine::new(GameConfig::default());
        let board = Board::new(60, 25);
        let snake = Snake::new(Position::new(1, 12), Direction::Left, 3);
        let mut state = GameState::new(board, snake, Position::new(40, 5));

        let outcome = engine.tick(&mut state, Action::Continue);

        assert_eq!(outcome.ended, Some(EndReason::Wall));
        assert_eq!(state.phase, GamePhase::Over);
        assert_eq!(state.end_reason, Some(EndReason::Wall));
        assert_eq!(state.snake.head(), Position::new(0, 12));
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_self_collision_ends_the_game() {
        let mut engine = GameEngine::new(GameConfig::small());
        let board = Board::new(10, 10);
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 5);
        let mut state = GameState::new(board, snake, Position::new(8, 8));

        // walk a tight square back into the body
        engine.tick(&mut state, Action::Move(Direction::Down));
        engine.tick(&mut state, Action::Move(Direction::Left));
        let outcome = engine.tick(&mut state, Action::Move(Direction::Up));

        assert_eq!(outcome.ended, Some(EndReason::SelfCollision));
        assert_eq!(state.phase, GamePhase::Over);
    }

    #[test]
    fn test_reversal_input_is_ignored() {
        let mut engine = GameEngine::new(GameConfig::default());
        let mut state = engine.reset();
        state.food = Position::new(1, 1);

        engine.tick(&mut state, Action::Move(Direction::Left));

        // still heading right
        assert_eq!(state.snake.direction(), Direction::Right);
        assert_eq!(state.snake.head(), Position::new(31, 12));
    }

    #[test]
    fn test_tick_after_game_over_is_a_noop() {
        let mut engine = GameEngine::new(GameConfig::default());
        let board = Board::new(60, 25);
        let snake = Snake::new(Position::new(1, 12), Direction::Left, 3);
        let mut state = GameState::new(board, snake, Position::new(40, 5));

        engine.tick(&mut state, Action::Continue);
        assert_eq!(state.phase, GamePhase::Over);

        let before = state.clone();
        let outcome = engine.tick(&mut state, Action::Move(Direction::Right));

        assert!(!outcome.ate_food);
        assert!(outcome.ended.is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn test_reset_after_game_over_restarts() {
        let mut engine = GameEngine::new(GameConfig::default());
        let mut state = engine.reset();
        state.food = Position::new(1, 1);

        // drive the snake into the right wall
        loop {
            if engine.tick(&mut state, Action::Continue).ended.is_some() {
                break;
            }
        }
        assert_eq!(state.phase, GamePhase::Over);

        let state = engine.reset();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.head(), Position::new(30, 12));
    }

    #[test]
    fn test_filling_the_board_wins() {
        // 5x5 board: nine interior cells. Feed the snake along a serpentine
        // path until it covers the whole interior; the last meal leaves no
        // cell for food.
        let mut engine = GameEngine::new(GameConfig::new(5, 5));
        let board = Board::new(5, 5);
        let snake = Snake::new(Position::new(3, 1), Direction::Right, 3);
        let mut state = GameState::new(board, snake, Position::new(3, 2));

        let path = [
            (Direction::Down, Position::new(2, 2)),
            (Direction::Left, Position::new(1, 2)),
            (Direction::Left, Position::new(1, 3)),
            (Direction::Down, Position::new(2, 3)),
            (Direction::Right, Position::new(3, 3)),
        ];

        for &(dir, next_food) in &path {
            let outcome = engine.tick(&mut state, Action::Move(dir));
            assert!(outcome.ate_food);
            assert!(outcome.ended.is_none());
            state.food = next_food;
        }

        let outcome = engine.tick(&mut state, Action::Move(Direction::Right));

        assert!(outcome.ate_food);
        assert_eq!(outcome.ended, Some(EndReason::BoardFull));
        assert_eq!(state.phase, GamePhase::Over);
        assert_eq!(state.snake.len(), 9);
        assert_eq!(state.score, 60);
    }
}
