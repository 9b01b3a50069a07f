use crate::{Letter, MoveRecord, Placements, TileCounts};

/// Flags a move that would use more tiles of some [letter](Letter) than a
/// full set contains. Advisory only: it never blocks
/// [validation](crate::validate) or [scoring](crate::score), so a caller
/// can ask the user to confirm a move reconstructed from an external
/// record that does not match the modeled set.
///
/// # See Also
///
/// * [check_overuse]
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TileOveruseWarning {
    /// The [letter](Letter) being overused.
    pub letter: Letter,
    /// The total number of tiles of the letter used across the committed
    /// history plus the candidate move.
    pub used: usize,
    /// The number of tiles of the letter in a full set.
    pub available: usize,
}

/// Counts how many tiles of each [letter](Letter) the committed moves in
/// `history` have placed. A blank-marked tile increments the
/// [blank](Letter::Blank) bucket, never the letter it represents.
///
/// # Arguments
///
/// * `history`: An ordered list of committed [moves](MoveRecord).
///
/// # See Also
///
/// * [remaining_tiles]
/// * [check_overuse]
///
/// # Returns
///
/// A map of [letters](Letter) to played counts. Letters never played are
/// absent.
pub fn played_tiles(history: &[MoveRecord]) -> TileCounts {
    let mut played = TileCounts::new();
    for record in history {
        for &letter in record.placements.values() {
            *played.entry(letter).or_insert(0) += 1;
        }
    }

    played
}

/// Counts how many tiles of each [letter](Letter) are left in a full set
/// after the committed moves in `history`. Letters fully exhausted are
/// omitted, as is any letter a malformed history over-plays.
///
/// # Arguments
///
/// * `history`: An ordered list of committed [moves](MoveRecord).
///
/// # See Also
///
/// * [played_tiles]
/// * [remaining_tile_total]
///
/// # Returns
///
/// A map of [letters](Letter) to remaining counts.
pub fn remaining_tiles(history: &[MoveRecord]) -> TileCounts {
    let played = played_tiles(history);

    Letter::letters()
        .into_iter()
        .filter_map(|letter| {
            let already_played = played.get(&letter).copied().unwrap_or(0);
            let remaining = letter.count_in_set().saturating_sub(already_played);
            (remaining > 0).then_some((letter, remaining))
        })
        .collect()
}

/// Sums the [remaining tile](remaining_tiles) counts over every
/// [letter](Letter).
///
/// # Arguments
///
/// * `history`: An ordered list of committed [moves](MoveRecord).
///
/// # Returns
///
/// The number of tiles left in a full set after `history`.
pub fn remaining_tile_total(history: &[MoveRecord]) -> usize {
    remaining_tiles(history).values().sum()
}

/// Checks whether a candidate move would use more tiles of some
/// [letter](Letter) than a full set contains, counting tiles already
/// [played](played_tiles) in `history`.
///
/// # Arguments
///
/// * `history`: An ordered list of committed [moves](MoveRecord).
/// * `placements`: The candidate move's new tiles.
///
/// # See Also
///
/// * [TileOveruseWarning]
/// * [validate](crate::validate)
///
/// # Returns
///
/// One [warning](TileOveruseWarning) per overused [letter](Letter), in
/// letter order. Empty when the move fits the set.
pub fn check_overuse(history: &[MoveRecord], placements: &Placements) -> Vec<TileOveruseWarning> {
    let played = played_tiles(history);

    let mut in_move = TileCounts::new();
    for &letter in placements.values() {
        *in_move.entry(letter).or_insert(0) += 1;
    }

    in_move
        .into_iter()
        .filter_map(|(letter, count)| {
            let used = played.get(&letter).copied().unwrap_or(0) + count;
            let available = letter.count_in_set();
            (used > available).then_some(TileOveruseWarning {
                letter,
                used,
                available,
            })
        })
        .collect()
}
