use crate::BOARD_SIZE;
use either::Either;
use smallvec::SmallVec;
use std::cmp;

/// A tuple with row and column components for a cell on the board, each
/// component in `0..BOARD_SIZE`.
///
/// # See Also
///
/// * [Placements](crate::Placements)
/// * [Board](crate::Board)
/// * [PlayError](crate::PlayError)
pub type Position = (usize, usize);

/// Finds the minimum and maximum components from [positions](Position) for each component.
/// If `positions` is empty, [None] is returned.
///
/// # Arguments
///
/// * `positions`: An [iterator](Iterator) of [positions](Position).
///
/// # See Also
///
/// * [validate](crate::validate)
///
/// # Returns
///
/// A tuple with `4` different bounds in the following order:
///
/// * The minimum row component
/// * The minimum column component
/// * The maximum row component
/// * The maximum column component
pub fn find_component_minimums_and_maximums(
    mut positions: impl Iterator<Item = Position>,
) -> Option<(usize, usize, usize, usize)> {
    let Some((row, col)) = positions.next() else {
        return None;
    };

    let (mut min_row, mut min_col, mut max_row, mut max_col) = (row, col, row, col);

    for (row, col) in positions {
        (min_row, min_col) = (cmp::min(min_row, row), cmp::min(min_col, col));
        (max_row, max_col) = (cmp::max(max_row, row), cmp::max(max_col, col));
    }

    Some((min_row, min_col, max_row, max_col))
}

/// Determines the single line shared by [positions](Position). A move in
/// one row is horizontal and a move in one column is vertical. A lone
/// position lies in both, and the horizontal reading wins so that callers
/// which order words by direction stay stable.
///
/// # Arguments
///
/// * `positions`: An [iterator](Iterator) of [positions](Position).
///
/// # See Also
///
/// * [validate](crate::validate)
/// * [score](crate::score)
///
/// # Returns
///
/// [Either::Left] with the shared row of a horizontal move, [Either::Right]
/// with the shared column of a vertical move, or [None] when the positions
/// span more than one row and more than one column (or there are none).
pub fn line_orientation(
    positions: impl Iterator<Item = Position>,
) -> Option<Either<usize, usize>> {
    let (min_row, min_col, max_row, max_col) = find_component_minimums_and_maximums(positions)?;

    if min_row == max_row {
        Some(Either::Left(min_row))
    } else if min_col == max_col {
        Some(Either::Right(min_col))
    } else {
        None
    }
}

/// Finds the adjacent [positions](Position) from the argument
/// [position](Position) where adjacent is 4 directional and not diagonal.
/// Neighbors outside the board are omitted, so corners have `2` and edges
/// have `3`.
///
/// # Arguments
///
/// * `row`: The row component
/// * `col`: The column component
///
/// # See Also
///
/// * [validate](crate::validate)
///
/// # Returns
///
/// The in-bounds neighbors in natural lexicographic order.
pub fn adjacent_positions((row, col): Position) -> SmallVec<[Position; 4]> {
    let mut neighbors = SmallVec::new();
    if row > 0 {
        neighbors.push((row - 1, col));
    }
    if col > 0 {
        neighbors.push((row, col - 1));
    }
    if col + 1 < BOARD_SIZE {
        neighbors.push((row, col + 1));
    }
    if row + 1 < BOARD_SIZE {
        neighbors.push((row + 1, col));
    }

    neighbors
}
