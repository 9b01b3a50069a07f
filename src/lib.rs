//! Pure functions to validate and score moves in a crossword tile game played on
//! a fixed 15×15 board with premium squares, plus the tile-set accounting and
//! end-of-game adjustments that go with them.
//!
//! ## Summary
//!
//! Callers own all game state. This crate only computes: given a [move's
//! placements](Placements), a [board](Board) snapshot, and a first-move flag it
//! produces a [validation verdict](validate) and a [score](score); given a
//! game's [move history](MoveRecord) it produces [played](played_tiles) and
//! [remaining](remaining_tiles) tile counts and [overuse
//! warnings](check_overuse); given each player's [unplayed rack](PlayerRack) it
//! produces the end-of-game [adjustments](adjust). Nothing here mutates an
//! input: the validator and scorer overlay placements onto scratch copies and
//! discard them, so every function is safe to call concurrently and returns the
//! same answer for the same arguments.
//!
//! ## How is a move validated?
//!
//! [validate] applies the placement rules in a fixed order and reports the
//! first broken one as a [PlayError]: an empty move is a pass and always valid;
//! at most [RACK_CAPACITY] tiles may be placed; the placements must share a
//! single row or column; the first move must cover [CENTER]; a later move must
//! touch a committed tile orthogonally; and the move's line may not contain an
//! unfilled gap. Overusing a [letter](Letter) beyond the full set is *not* a
//! placement rule — [check_overuse] reports it as an advisory
//! [warning](TileOveruseWarning) so a caller can confirm a move reconstructed
//! from an external record instead of rejecting it.
//!
//! ## How are points calculated?
//!
//! [score] reads the main word along the move's line and every perpendicular
//! cross word a new tile creates or extends. Each word sums its [letter
//! values](Letter::value), with the [square](SquareType) under each *newly
//! placed* tile doubling or tripling that letter or the whole word; tiles
//! already on the board contribute face value because their premiums were
//! consumed when they were played. A blank is worth `0` anywhere but still
//! triggers its square's multipliers for the rest of the word. Placing all
//! [RACK_CAPACITY] rack tiles at once earns the flat [BINGO_BONUS] on top.
//!
//! ## How are tiles accounted?
//!
//! The full set holds [TILE_SET_TOTAL] tiles split per
//! [letter](Letter::count_in_set), including two blanks. [played_tiles] counts
//! every placement in a history (blanks into the blank bucket, never the letter
//! they stand in for), [remaining_tiles] subtracts that from the full set and
//! omits exhausted letters, and [remaining_tile_total] sums what is left.
//!
//! ## How does a game end?
//!
//! The caller decides when the game is over and hands [adjust] each player's
//! unplayed rack plus who (if anyone) went out. Every player loses their own
//! [rack value](rack_value); the player who went out additionally collects the
//! summed value of everyone else's rack, so the [nets](Adjustment::net) cancel
//! out — or, in a blocked game with no ending player, sum to minus the total
//! rack value.
//!
//! ## What does the core not do?
//!
//! Dictionary lookup, turn and timer sequencing, rendering, and persistence
//! belong to the calling layers. A [validation](validate) verdict says a move
//! is *placeable*, not that its words exist; callers gate on their own word
//! list before committing a move and merging its placements into the board.
//!
//! ## How are these functions tested when games are random?
//!
//! The `test` build configuration adds a `random` module of fixture
//! generators: boards with a random committed run, rack-sized random
//! placements, racks, and whole histories drawn from a full-set pool without
//! replacement.

// Document!
#![forbid(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]
// Don't leave a build in a half finished state!
#![deny(
    warnings,
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    unused,
    single_use_lifetimes,
    unreachable_pub,
    missing_debug_implementations,
    unsafe_code
)]

pub use bag::*;
pub use consts::*;
pub use coordinate::*;
pub use endgame::*;
pub use letter::*;
#[cfg(test)]
pub use random::*;
pub use score::*;
pub use square::*;
pub use types::*;
pub use validate::*;

mod bag;
mod consts;
mod coordinate;
mod endgame;
mod letter;
#[cfg(test)]
mod random;
mod score;
mod square;
mod types;
mod validate;
