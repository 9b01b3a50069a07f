use crate::{
    adjacent_positions, find_component_minimums_and_maximums, line_orientation, Board, Placements,
    Position, CENTER, RACK_CAPACITY,
};
use either::Either;
use std::collections::BTreeSet;

/// Describes the reason why a move's [placements](Placements) could not be
/// played. The rules are checked in a fixed order and the first broken
/// rule is the one reported, so callers can surface a single stable
/// message per move.
///
/// # See Also
///
/// * [validate]
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum PlayError {
    /// Attempting to place more [letters](crate::Letter) than a
    /// [rack](crate::Rack) holds.
    TooManyTiles {
        /// The number of [placements](Placements) in the move, greater
        /// than [RACK_CAPACITY].
        placed: usize,
    },
    /// Attempting to place [letters](crate::Letter) spanning more than one
    /// row and more than one column.
    NotSingleLine,
    /// Not attempting to place some [letter](crate::Letter) at
    /// [CENTER] on the first move of a game.
    MissingCenterSquare,
    /// Attempting to place [letters](crate::Letter) where none is
    /// orthogonally adjacent to a tile already on the [board](Board).
    NotConnected,
    /// Attempting to place [letters](crate::Letter) in a line with empty
    /// cells between them that no [board](Board) tile fills.
    GapInWord {
        /// The empty [positions](Position) inside the move's span.
        empty: BTreeSet<Position>,
    },
}

impl PlayError {
    /// A fixed, user-facing reason for the broken rule. Every variant maps
    /// to exactly one string so callers can match or display them stably.
    pub fn reason(&self) -> &'static str {
        match self {
            PlayError::TooManyTiles { .. } => "too many tiles",
            PlayError::NotSingleLine => "not a single line",
            PlayError::MissingCenterSquare => "must include center",
            PlayError::NotConnected => "must connect to existing tiles",
            PlayError::GapInWord { .. } => "gap in word",
        }
    }
}

/// Checks a candidate move against the placement rules. The rules are
/// applied in exactly this order, and the first failure is returned:
///
/// 1. An empty move is always valid; it represents a pass.
/// 2. At most [RACK_CAPACITY] tiles may be placed.
/// 3. The placements must share a single row or a single column.
/// 4. The first move of a game must cover [CENTER]. Connectivity is not
///    checked on the first move since the board is empty.
/// 5. A later move must have some placement orthogonally adjacent to a
///    tile already on the board.
/// 6. With the placements overlaid on a scratch copy of the board, every
///    cell of the move's line between its minimum and maximum coordinate
///    must be occupied by a new or pre-existing tile.
///
/// Duplicate positions are unrepresentable because [Placements] keys by
/// [position](Position), so no rule checks for them. Nothing here mutates
/// `board`; the overlay happens on a scratch copy.
///
/// # Arguments
///
/// * `placements`: The candidate move's new tiles.
/// * `board`: The tiles already committed to the board.
/// * `first_move`: Whether the board has no committed moves yet.
///
/// # Errors
///
/// * [PlayError::TooManyTiles] Attempting to place more
///   [letters](crate::Letter) than a rack holds.
/// * [PlayError::NotSingleLine] Attempting to place [letters](crate::Letter)
///   spanning more than one row and more than one column.
/// * [PlayError::MissingCenterSquare] Not attempting to place some
///   [letter](crate::Letter) at [CENTER] on the first move.
/// * [PlayError::NotConnected] Attempting to place [letters](crate::Letter)
///   where none touches a tile already on the board.
/// * [PlayError::GapInWord] Attempting to place [letters](crate::Letter)
///   in a line with unfilled cells between them.
///
/// # See Also
///
/// * [score](crate::score)
/// * [check_overuse](crate::check_overuse)
///
/// # Returns
///
/// `Ok(())` when every rule passes.
pub fn validate(
    placements: &Placements,
    board: &Board,
    first_move: bool,
) -> Result<(), PlayError> {
    if placements.is_empty() {
        // a pass
        return Ok(());
    }

    if placements.len() > RACK_CAPACITY {
        return Err(PlayError::TooManyTiles {
            placed: placements.len(),
        });
    }

    let Some(orientation) = line_orientation(placements.keys().copied()) else {
        return Err(PlayError::NotSingleLine);
    };

    if first_move {
        if !placements.contains_key(&CENTER) {
            return Err(PlayError::MissingCenterSquare);
        }
    } else {
        let connected = placements.keys().any(|&position| {
            adjacent_positions(position)
                .into_iter()
                .any(|neighbor| board.contains_key(&neighbor))
        });
        if !connected {
            return Err(PlayError::NotConnected);
        }
    }

    let mut scratch = board.clone();
    scratch.extend(placements.iter().map(|(&position, &letter)| (position, letter)));

    let Some((min_row, min_col, max_row, max_col)) =
        find_component_minimums_and_maximums(placements.keys().copied()) else {
        // placements is non-empty, so the bounds always exist
        return Ok(());
    };

    let span: Vec<Position> = match orientation {
        Either::Left(row) => (min_col..=max_col).map(|col| (row, col)).collect(),
        Either::Right(col) => (min_row..=max_row).map(|row| (row, col)).collect(),
    };
    let empty: BTreeSet<Position> = span
        .into_iter()
        .filter(|position| !scratch.contains_key(position))
        .collect();
    if !empty.is_empty() {
        return Err(PlayError::GapInWord { empty });
    }

    Ok(())
}
