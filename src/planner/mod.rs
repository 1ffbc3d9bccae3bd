// Move planning between two cells

use crate::grid::Position;
use crate::movement::Move;

/// Plan the moves from `from` to `to`: the whole vertical delta first,
/// then the whole horizontal delta. Length is always the Manhattan distance.
pub fn plan(from: Position, to: Position) -> Vec<Move> {
    let mut moves = Vec::with_capacity(from.row.abs_diff(to.row) + from.col.abs_diff(to.col));

    if to.row > from.row {
        moves.extend(std::iter::repeat(Move::Down).take(to.row - from.row));
    } else if to.row < from.row {
        moves.extend(std::iter::repeat(Move::Up).take(from.row - to.row));
    }

    if to.col > from.col {
        moves.extend(std::iter::repeat(Move::Right).take(to.col - from.col));
    } else if to.col < from.col {
        moves.extend(std::iter::repeat(Move::Left).take(from.col - to.col));
    }

    moves
}
