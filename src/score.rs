use crate::{
    find_component_minimums_and_maximums, line_orientation, square_type_at, Board, Letter,
    Placements, Position, BINGO_BONUS, BOARD_SIZE, RACK_CAPACITY,
};
use either::Either;
use itertools::Itertools;
use std::collections::BTreeSet;
use std::iter;

/// Computes the point value of a move without mutating the `board`; the
/// move's [placements](Placements) are overlaid onto a scratch copy.
///
/// # Points Calculation
///
/// The main word is the full contiguous run of occupied cells through the
/// placements along the move's line. Every newly placed tile additionally
/// scores the perpendicular run through it when that run is longer than
/// one cell, as an independent cross word. A single-tile move reads its
/// horizontal run as the main word and its vertical run as the cross word
/// whenever both form words.
///
/// Each word is [scored](score_word) by summing letter values, doubled or
/// tripled by the square under each *newly placed* tile, then multiplying
/// by the word multipliers of the squares under the newly placed tiles.
/// Tiles already on the board always contribute plain face value; their
/// squares were consumed when they were played.
///
/// Placing all [RACK_CAPACITY] rack tiles in one move earns the flat
/// [BINGO_BONUS] on top, unaffected by any multiplier.
///
/// An empty move scores `0`. A degenerate move that forms no word (a lone
/// tile touching nothing) also scores `0` rather than erroring; such
/// moves cannot pass [validation](crate::validate) on a live board.
///
/// # Arguments
///
/// * `placements`: The move's new tiles.
/// * `board`: The tiles already committed to the board.
///
/// # See Also
///
/// * [validate](crate::validate)
/// * [square_type_at]
///
/// # Returns
///
/// The total points earned by the move.
pub fn score(placements: &Placements, board: &Board) -> usize {
    if placements.is_empty() {
        return 0;
    }

    let mut scratch = board.clone();
    scratch.extend(placements.iter().map(|(&position, &letter)| (position, letter)));
    let new_positions: BTreeSet<Position> = placements.keys().copied().collect();

    let runs: Vec<Vec<(Position, Letter)>> = if placements.len() == 1 {
        let Some(&position) = placements.keys().next() else {
            return 0;
        };

        // horizontal before vertical: when both directions form words the
        // horizontal run is the main word and the vertical run the cross
        // word
        vec![
            horizontal_run(&scratch, position),
            vertical_run(&scratch, position),
        ]
    } else {
        let Some(orientation) = line_orientation(placements.keys().copied()) else {
            // bent placements never validate
            return 0;
        };
        let Some((min_row, min_col, _, _)) =
            find_component_minimums_and_maximums(placements.keys().copied()) else {
            return 0;
        };

        let main_word = match orientation {
            Either::Left(row) => horizontal_run(&scratch, (row, min_col)),
            Either::Right(col) => vertical_run(&scratch, (min_row, col)),
        };
        let cross_words = placements.keys().map(|&position| match orientation {
            Either::Left(_) => vertical_run(&scratch, position),
            Either::Right(_) => horizontal_run(&scratch, position),
        });

        iter::once(main_word).chain(cross_words).collect()
    };

    let mut total: usize = runs
        .iter()
        .filter(|run| run.len() > 1)
        .map(|run| score_word(run, &new_positions))
        .sum();

    if placements.len() == RACK_CAPACITY {
        total += BINGO_BONUS;
    }

    total
}

/// Scores one word: the sum over its tiles of letter value times the
/// letter multiplier of the tile's square, times the product of the word
/// multipliers of the tiles' squares. Multipliers apply only at
/// `new_positions`; every other tile contributes plain face value and no
/// word multiplier. [Blanks](Letter::Blank) contribute `0` but still
/// trigger their square's multipliers for the rest of the word.
///
/// # Arguments
///
/// * `run`: The word's tiles in line order.
/// * `new_positions`: The [positions](Position) placed by the move being
///   scored.
///
/// # See Also
///
/// * [score]
///
/// # Returns
///
/// The points earned by the word.
pub fn score_word(run: &[(Position, Letter)], new_positions: &BTreeSet<Position>) -> usize {
    let mut letter_values = 0;
    let mut word_multiplier = 1;

    for &(position, letter) in run {
        if new_positions.contains(&position) {
            let square = square_type_at(position);
            letter_values += letter.value() * square.letter_multiplier();
            word_multiplier *= square.word_multiplier();
        } else {
            letter_values += letter.value();
        }
    }

    letter_values * word_multiplier
}

/// The full contiguous horizontal run of occupied cells through
/// `position`: walk backward while occupied, then collect forward while
/// occupied.
fn horizontal_run(board: &Board, (row, col): Position) -> Vec<(Position, Letter)> {
    let mut first = col;
    while first > 0 && board.contains_key(&(row, first - 1)) {
        first -= 1;
    }

    (first..BOARD_SIZE)
        .map(|col| board.get(&(row, col)).map(|&letter| ((row, col), letter)))
        .while_some()
        .collect()
}

/// The full contiguous vertical run of occupied cells through `position`.
fn vertical_run(board: &Board, (row, col): Position) -> Vec<(Position, Letter)> {
    let mut first = row;
    while first > 0 && board.contains_key(&(first - 1, col)) {
        first -= 1;
    }

    (first..BOARD_SIZE)
        .map(|row| board.get(&(row, col)).map(|&letter| ((row, col), letter)))
        .while_some()
        .collect()
}
