use crate::{Letter, Position, PLAYER_CAPACITY, RACK_CAPACITY};
use smallvec::SmallVec;
use std::collections::{BTreeMap, HashMap};

/// A map of [positions](Position) to [letters](Letter) newly placed in one
/// turn. Keying by [position](Position) makes duplicate placements
/// unrepresentable and keeps iteration ordered.
///
/// # See Also
///
/// * [validate](crate::validate)
/// * [score](crate::score)
/// * [check_overuse](crate::check_overuse)
pub type Placements = BTreeMap<Position, Letter>;
/// This is a map of [positions](Position) to [letters](Letter) that have
/// been committed to the board. It never includes the
/// [placements](Placements) of the move currently being checked or scored.
///
/// # See Also
///
/// * [Position]
/// * [Letter]
/// * [validate](crate::validate)
/// * [score](crate::score)
pub type Board = HashMap<Position, Letter>;
/// A map of [letters](Letter) to how many tiles of that letter a
/// computation found, ordered for stable iteration.
///
/// # See Also
///
/// * [played_tiles](crate::played_tiles)
/// * [remaining_tiles](crate::remaining_tiles)
pub type TileCounts = BTreeMap<Letter, usize>;
/// A vector of [letters](Letter) held by one player.
///
/// # See Also
///
/// * [Letter]
/// * [RACK_CAPACITY]
/// * [Racks]
pub type Rack = SmallVec<[Letter; RACK_CAPACITY]>;
/// A vector of racks for each player, where each rack is
/// a vector of [letters](Letter).
///
/// # See Also
///
/// * [Rack]
/// * [PLAYER_CAPACITY]
pub type Racks = SmallVec<[Rack; PLAYER_CAPACITY]>;

/// One committed move in a game's history: who played and which
/// [placements](Placements) were merged into the [board](Board).
///
/// # See Also
///
/// * [played_tiles](crate::played_tiles)
/// * [check_overuse](crate::check_overuse)
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MoveRecord {
    /// The index of the player who made the move.
    pub player: usize,
    /// The [letters](Letter) placed by the move at their
    /// [positions](Position).
    pub placements: Placements,
}
