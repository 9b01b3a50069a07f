use crate::Position;
use konst::primitive::parse_usize;
use konst::{option, result};

/// The number of rows and columns on the board. `15` cells per side.
///
/// The premium square layout is drawn for exactly this size, so unlike
/// [PLAYER_CAPACITY] it cannot be overridden.
///
/// # See Also
///
/// * [square_type_at](crate::square_type_at)
/// * [validate](crate::validate)
/// * [score](crate::score)
pub const BOARD_SIZE: usize = 15;
/// The center [position](Position) of the board. The first move of a game
/// must cover it, and it scores as a double-word square.
///
/// # See Also
///
/// * [SquareType::Start](crate::SquareType::Start)
/// * [validate](crate::validate)
pub const CENTER: Position = (BOARD_SIZE / 2, BOARD_SIZE / 2);
/// The maximum number of [letters](crate::Letter) in a player's rack, and
/// therefore the maximum number of placements in a single move. `7` tiles.
///
/// # See Also
///
/// * [Rack](crate::Rack)
/// * [PlayError::TooManyTiles](crate::PlayError::TooManyTiles)
/// * [BINGO_BONUS]
pub const RACK_CAPACITY: usize = 7;
/// The amount of extra points given for placing every [rack](crate::Rack)
/// tile, all [RACK_CAPACITY] of them, in a single move. `50` additional
/// points, flat, unaffected by any multiplier.
///
/// # See Also
///
/// * [score](crate::score)
pub const BINGO_BONUS: usize = 50;
/// The number of tiles in a full set, summed over
/// [every letter's count](crate::Letter::count_in_set) including both
/// blanks. `100` tiles.
///
/// # See Also
///
/// * [remaining_tiles](crate::remaining_tiles)
/// * [check_overuse](crate::check_overuse)
pub const TILE_SET_TOTAL: usize = 100;
/// All small, dynamically allocated structs which store player data will be stored on the stack
/// until the number of players becomes greater than `PLAYER_CAPACITY`. When there are more than
/// `PLAYER_CAPACITY` players, player data will be heap allocated. If the environment variable
/// named `PLAYER_CAPACITY` is present at compile time and is able to be parsed into a `usize`,
/// set to the value of the environment variable. Otherwise, it is set to `4`.
///
/// # See Also
///
/// * [Racks](crate::Racks)
/// * [Adjustments](crate::Adjustments)
pub const PLAYER_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("PLAYER_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    4
);
const _: () = assert!(PLAYER_CAPACITY > 0);
const _: () = assert!(CENTER.0 < BOARD_SIZE && CENTER.1 < BOARD_SIZE);
const _: () = assert!(RACK_CAPACITY < BOARD_SIZE);
