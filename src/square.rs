use crate::{Position, CENTER};

/// Describes the premium (or lack of one) at a board [position](Position).
///
/// The layout is fixed for the 15×15 board and symmetric under 180°
/// rotation about [CENTER]. A premium only takes effect for tiles newly
/// placed on it; tiles already on the board contribute plain face value.
///
/// # See Also
///
/// * [square_type_at]
/// * [score](crate::score)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SquareType {
    /// No premium.
    Normal,
    /// Doubles the value of a newly placed letter.
    DoubleLetter,
    /// Triples the value of a newly placed letter.
    TripleLetter,
    /// Doubles the whole word containing a newly placed letter.
    DoubleWord,
    /// Triples the whole word containing a newly placed letter.
    TripleWord,
    /// The center square. The first move must cover it, and it scores
    /// as [SquareType::DoubleWord].
    Start,
}

impl SquareType {
    /// The factor applied to the value of a letter newly placed on this
    /// square.
    #[inline]
    pub fn letter_multiplier(self) -> usize {
        match self {
            SquareType::DoubleLetter => 2,
            SquareType::TripleLetter => 3,
            SquareType::Normal
            | SquareType::DoubleWord
            | SquareType::TripleWord
            | SquareType::Start => 1,
        }
    }

    /// The factor this square contributes to the whole-word product when a
    /// letter is newly placed on it.
    #[inline]
    pub fn word_multiplier(self) -> usize {
        match self {
            SquareType::DoubleWord | SquareType::Start => 2,
            SquareType::TripleWord => 3,
            SquareType::Normal | SquareType::DoubleLetter | SquareType::TripleLetter => 1,
        }
    }
}

/// Looks up the [square type](SquareType) at a [position](Position).
///
/// The layout is symmetric from the center, so both components are folded
/// into one quadrant before matching: triple-word squares sit on the
/// corners and edge midpoints, double-word squares run diagonally from
/// each corner toward the center, and the double/triple-letter squares
/// follow the traditional arrangement. Only positions inside the board
/// are meaningful; callers derive coordinates from already bounds-checked
/// moves or from the fixed grid.
///
/// # Arguments
///
/// * `position`: A (row, column) pair, each component in `0..BOARD_SIZE`.
///
/// # Returns
///
/// The [square type](SquareType) at the `position`.
pub fn square_type_at(position: Position) -> SquareType {
    fn fold_half(component: usize) -> usize {
        component.abs_diff(CENTER.0)
    }

    let (row, col) = position;
    match (fold_half(row), fold_half(col)) {
        (0, 0) => SquareType::Start,
        (7, 0) | (0, 7) | (7, 7) => SquareType::TripleWord,
        (1, 1) | (4, 0) | (0, 4) | (5, 1) | (1, 5) | (7, 4) | (4, 7) => SquareType::DoubleLetter,
        (2, 2) | (6, 2) | (2, 6) => SquareType::TripleLetter,
        (row, col) if row == col => SquareType::DoubleWord,
        _ => SquareType::Normal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BOARD_SIZE;
    use map_macro::hash_map;
    use std::collections::HashMap;

    #[test]
    fn center_is_start() {
        assert_eq!(SquareType::Start, square_type_at(CENTER));
    }

    #[test]
    fn corners_and_edge_midpoints_are_triple_word() {
        for position in [
            (0, 0),
            (0, 7),
            (0, 14),
            (7, 0),
            (7, 14),
            (14, 0),
            (14, 7),
            (14, 14),
        ] {
            assert_eq!(
                SquareType::TripleWord,
                square_type_at(position),
                "position {:?}",
                position
            );
        }
    }

    #[test]
    fn known_premium_squares() {
        assert_eq!(SquareType::DoubleWord, square_type_at((1, 1)));
        assert_eq!(SquareType::DoubleWord, square_type_at((13, 13)));
        assert_eq!(SquareType::DoubleWord, square_type_at((4, 10)));
        assert_eq!(SquareType::TripleLetter, square_type_at((1, 5)));
        assert_eq!(SquareType::TripleLetter, square_type_at((5, 9)));
        assert_eq!(SquareType::DoubleLetter, square_type_at((0, 3)));
        assert_eq!(SquareType::DoubleLetter, square_type_at((8, 8)));
        assert_eq!(SquareType::DoubleLetter, square_type_at((6, 6)));
        assert_eq!(SquareType::DoubleLetter, square_type_at((7, 3)));
        assert_eq!(SquareType::Normal, square_type_at((7, 8)));
        assert_eq!(SquareType::Normal, square_type_at((0, 1)));
    }

    #[test]
    fn layout_is_rotationally_symmetric() {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                assert_eq!(
                    square_type_at((row, col)),
                    square_type_at((BOARD_SIZE - 1 - row, BOARD_SIZE - 1 - col)),
                    "position {:?}",
                    (row, col)
                );
            }
        }
    }

    #[test]
    fn square_type_counts() {
        let mut counts: HashMap<SquareType, usize> = HashMap::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                *counts.entry(square_type_at((row, col))).or_insert(0) += 1;
            }
        }

        let expected = hash_map! {
            SquareType::Start => 1,
            SquareType::TripleWord => 8,
            SquareType::DoubleWord => 16,
            SquareType::TripleLetter => 12,
            SquareType::DoubleLetter => 24,
            SquareType::Normal => BOARD_SIZE * BOARD_SIZE - 61,
        };
        assert_eq!(expected, counts);
    }

    #[test]
    fn multipliers_by_square_type() {
        assert_eq!(
            (1, 1),
            (
                SquareType::Normal.letter_multiplier(),
                SquareType::Normal.word_multiplier()
            )
        );
        assert_eq!(
            (2, 1),
            (
                SquareType::DoubleLetter.letter_multiplier(),
                SquareType::DoubleLetter.word_multiplier()
            )
        );
        assert_eq!(
            (3, 1),
            (
                SquareType::TripleLetter.letter_multiplier(),
                SquareType::TripleLetter.word_multiplier()
            )
        );
        assert_eq!(
            (1, 2),
            (
                SquareType::DoubleWord.letter_multiplier(),
                SquareType::DoubleWord.word_multiplier()
            )
        );
        assert_eq!(
            (1, 3),
            (
                SquareType::TripleWord.letter_multiplier(),
                SquareType::TripleWord.word_multiplier()
            )
        );
        assert_eq!(
            (1, 2),
            (
                SquareType::Start.letter_multiplier(),
                SquareType::Start.word_multiplier()
            )
        );
    }
}
