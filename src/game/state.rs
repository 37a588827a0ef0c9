use super::action::Direction;
use super::board::Board;

/// A cell on the grid; x is the column, y is the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The neighboring cell one step away in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake: an ordered body of cells, head first, plus its heading.
///
/// The body is mutated only through `set_direction` and `advance`.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: Vec<Position>,
    direction: Direction,
}

impl Snake {
    /// Build a snake of the given length with its head at `head`, the rest
    /// of the body trailing opposite to `direction`
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let (dx, dy) = direction.opposite().delta();
        let body = (0..length.max(1) as i32)
            .map(|i| head.moved_by(i * dx, i * dy))
            .collect();

        Self { body, direction }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Body cells in order, head first
    pub fn cells(&self) -> &[Position] {
        &self.body
    }

    /// Body cells behind the head
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Steer the snake. A turn straight back into the neck is silently
    /// ignored; every other direction takes effect on the next `advance`.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.direction.is_opposite(direction) {
            return;
        }
        self.direction = direction;
    }

    /// Step one cell in the current direction. The tail is dropped before
    /// anything else looks at the body, so a non-growing head may legally
    /// enter the cell the tail just left.
    pub fn advance(&mut self, grow: bool) {
        let new_head = self.head().moved_in_direction(self.direction);
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    /// True if the head overlaps any other cell of the current body.
    /// Meaningful right after `advance`.
    pub fn self_collision(&self) -> bool {
        self.body_segments().contains(&self.head())
    }
}

/// Coarse engine state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Running,
    Over,
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Head hit the border
    Wall,
    /// Head ran into the body
    SelfCollision,
    /// No interior cell left for food; the snake filled the board
    BoardFull,
}

/// Complete game state, owned by the engine and snapshotted for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub board: Board,
    pub snake: Snake,
    pub food: Position,
    pub score: u32,
    pub ticks: u32,
    pub phase: GamePhase,
    pub end_reason: Option<EndReason>,
}

impl GameState {
    pub fn new(board: Board, snake: Snake, food: Position) -> Self {
        Self {
            board,
            snake,
            food,
            score: 0,
            ticks: 0,
            phase: GamePhase::Running,
            end_reason: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}
