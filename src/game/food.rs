use rand::Rng;

use super::board::Board;
use super::state::Position;

/// Uniform samples tried before falling back to scanning for a free cell
const SAMPLE_ATTEMPTS: usize = 64;

/// Pick a fresh food cell: a uniformly random interior cell not in
/// `occupied`.
///
/// Sampling is capped at `SAMPLE_ATTEMPTS`; on a crowded board the interior
/// is then walked in row-major order and the first free cell wins. Returns
/// `None` only when every interior cell is occupied.
pub fn spawn(board: &Board, occupied: &[Position], rng: &mut impl Rng) -> Option<Position> {
    if board.interior_area() == 0 {
        return None;
    }

    for _ in 0..SAMPLE_ATTEMPTS {
        let pos = Position::new(
            rng.gen_range(1..board.width() - 1),
            rng.gen_range(1..board.height() - 1),
        );

        if !occupied.contains(&pos) {
            return Some(pos);
        }
    }

    board.interior_cells().find(|pos| !occupied.contains(pos))
}
