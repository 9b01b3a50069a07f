use crate::{Letter, PLAYER_CAPACITY};
use smallvec::SmallVec;

/// A vector of [adjustments](Adjustment) for each player.
///
/// # See Also
///
/// * [PLAYER_CAPACITY]
/// * [adjust]
pub type Adjustments = SmallVec<[Adjustment; PLAYER_CAPACITY]>;

/// One player's unplayed rack at the end of a game, as recorded by the
/// caller. Characters are matched case-insensitively against the tile
/// alphabet with `'_'` for a blank; anything else counts `0` so that
/// racks reconstructed from imperfect external records still total up.
///
/// # See Also
///
/// * [adjust]
/// * [Letter::from_char]
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PlayerRack {
    /// The index of the player holding the rack.
    pub player: usize,
    /// The unplayed letters, at most a rack's worth in a well-formed game.
    pub letters: Vec<char>,
}

/// One player's end-of-game score change.
///
/// # See Also
///
/// * [adjust]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Adjustment {
    /// The index of the player being adjusted.
    pub player: usize,
    /// Minus the [value](rack_value) of the player's own unplayed rack.
    /// Never positive.
    pub deduction: isize,
    /// The summed rack values of every other player, earned only by the
    /// player who ended the game. Never negative.
    pub bonus: isize,
    /// [deduction](Adjustment::deduction) plus [bonus](Adjustment::bonus).
    pub net: isize,
}

/// Sums the [tile values](Letter::value) of a rack's characters.
/// [Blanks](Letter::Blank) and unrecognized characters contribute `0`.
///
/// # Arguments
///
/// * `letters`: The rack's characters, matched case-insensitively.
///
/// # See Also
///
/// * [adjust]
///
/// # Returns
///
/// The total point value of the rack.
pub fn rack_value(letters: &[char]) -> usize {
    letters
        .iter()
        .map(|&character| {
            Letter::from_char(character)
                .map(Letter::value)
                .unwrap_or(0)
        })
        .sum()
}

/// Computes the end-of-game score [adjustments](Adjustment): every player
/// loses the [value](rack_value) of their own unplayed rack, and the
/// player who went out first additionally collects the summed value of
/// every other player's unplayed rack. When nobody went out (a blocked
/// game) only the deductions apply.
///
/// The bonus exactly offsets the other players' deductions, so with an
/// `ended_by` player the [nets](Adjustment::net) sum to `0`, and without
/// one they sum to minus the total rack value.
///
/// # Arguments
///
/// * `racks`: Each player's unplayed [rack](PlayerRack).
/// * `ended_by`: The index of the player who ended the game, or [None]
///   for a blocked game.
///
/// # See Also
///
/// * [rack_value]
///
/// # Returns
///
/// One [adjustment](Adjustment) per input rack, in the same order.
pub fn adjust(racks: &[PlayerRack], ended_by: Option<usize>) -> Adjustments {
    let rack_values: SmallVec<[usize; PLAYER_CAPACITY]> = racks
        .iter()
        .map(|rack| rack_value(&rack.letters))
        .collect();
    let total_rack_value: usize = rack_values.iter().sum();

    racks
        .iter()
        .zip(rack_values)
        .map(|(rack, value)| {
            let deduction = -(value as isize);
            let bonus = if Some(rack.player) == ended_by {
                (total_rack_value - value) as isize
            } else {
                0
            };

            Adjustment {
                player: rack.player,
                deduction,
                bonus,
                net: deduction + bonus,
            }
        })
        .collect()
}
