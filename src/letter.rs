use num_derive::FromPrimitive;
use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// The number of [`Letter`] variants. 26 alphabet letters plus the blank.
pub const LETTERS_LEN: usize = 27;

/// Describes one tile face in a game: an alphabet letter or a blank.
///
/// A blank is playable as any letter for word-forming purposes but is
/// always [worth](Letter::value) `0` points, and a full set
/// [contains](Letter::count_in_set) `2` of them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, FromPrimitive)]
pub enum Letter {
    /// `'A'`.
    A = 0,
    /// `'B'`.
    B = 1,
    /// `'C'`.
    C = 2,
    /// `'D'`.
    D = 3,
    /// `'E'`.
    E = 4,
    /// `'F'`.
    F = 5,
    /// `'G'`.
    G = 6,
    /// `'H'`.
    H = 7,
    /// `'I'`.
    I = 8,
    /// `'J'`.
    J = 9,
    /// `'K'`.
    K = 10,
    /// `'L'`.
    L = 11,
    /// `'M'`.
    M = 12,
    /// `'N'`.
    N = 13,
    /// `'O'`.
    O = 14,
    /// `'P'`.
    P = 15,
    /// `'Q'`.
    Q = 16,
    /// `'R'`.
    R = 17,
    /// `'S'`.
    S = 18,
    /// `'T'`.
    T = 19,
    /// `'U'`.
    U = 20,
    /// `'V'`.
    V = 21,
    /// `'W'`.
    W = 22,
    /// `'X'`.
    X = 23,
    /// `'Y'`.
    Y = 24,
    /// `'Z'`.
    Z = 25,
    /// The blank tile, written as `'_'`.
    Blank = 26,
}

impl Letter {
    /// # Returns
    ///
    /// An array of all [`Letter`] variants in alphabetical order with
    /// [`Letter::Blank`] last.
    #[inline]
    pub fn letters() -> [Letter; LETTERS_LEN] {
        [
            Letter::A,
            Letter::B,
            Letter::C,
            Letter::D,
            Letter::E,
            Letter::F,
            Letter::G,
            Letter::H,
            Letter::I,
            Letter::J,
            Letter::K,
            Letter::L,
            Letter::M,
            Letter::N,
            Letter::O,
            Letter::P,
            Letter::Q,
            Letter::R,
            Letter::S,
            Letter::T,
            Letter::U,
            Letter::V,
            Letter::W,
            Letter::X,
            Letter::Y,
            Letter::Z,
            Letter::Blank,
        ]
    }

    /// The point value of this letter before any square multiplier.
    /// [Blanks](Letter::Blank) are worth `0` regardless of the letter
    /// they stand in for.
    ///
    /// # See Also
    ///
    /// * [score](crate::score)
    /// * [adjust](crate::adjust)
    pub fn value(self) -> usize {
        match self {
            Letter::A | Letter::E | Letter::I | Letter::O | Letter::U => 1,
            Letter::L | Letter::N | Letter::R | Letter::S | Letter::T => 1,
            Letter::D | Letter::G => 2,
            Letter::B | Letter::C | Letter::M | Letter::P => 3,
            Letter::F | Letter::H | Letter::V | Letter::W | Letter::Y => 4,
            Letter::K => 5,
            Letter::J | Letter::X => 8,
            Letter::Q | Letter::Z => 10,
            Letter::Blank => 0,
        }
    }

    /// The number of copies of this letter in a full tile set. The counts
    /// sum to [TILE_SET_TOTAL](crate::TILE_SET_TOTAL).
    ///
    /// # See Also
    ///
    /// * [remaining_tiles](crate::remaining_tiles)
    /// * [check_overuse](crate::check_overuse)
    pub fn count_in_set(self) -> usize {
        match self {
            Letter::J | Letter::K | Letter::Q | Letter::X | Letter::Z => 1,
            Letter::B | Letter::C | Letter::F | Letter::H | Letter::M => 2,
            Letter::P | Letter::V | Letter::W | Letter::Y | Letter::Blank => 2,
            Letter::G => 3,
            Letter::D | Letter::L | Letter::S | Letter::U => 4,
            Letter::N | Letter::R | Letter::T => 6,
            Letter::O => 8,
            Letter::A | Letter::I => 9,
            Letter::E => 12,
        }
    }

    /// Parses one character into a [`Letter`], ignoring case. `'_'` parses
    /// as [`Letter::Blank`]. Any other character outside `A..=Z` is not a
    /// tile face and yields [None] after a warning, so that callers
    /// normalizing external records fall back to a `0`-valued lookup.
    ///
    /// # See Also
    ///
    /// * [adjust](crate::adjust)
    pub fn from_char(character: char) -> Option<Letter> {
        if character == '_' {
            return Some(Letter::Blank);
        }

        let index = (character.to_ascii_uppercase() as usize).wrapping_sub('A' as usize);
        match num::FromPrimitive::from_usize(index) {
            Some(Letter::Blank) | None => {
                log::warn!("unrecognized letter character {:?}", character);
                None
            }
            letter => letter,
        }
    }

    /// # Returns
    ///
    /// The uppercase character form of this letter, `'_'` for
    /// [`Letter::Blank`].
    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Letter::Blank => '_',
            letter => (b'A' + letter as u8) as char,
        }
    }
}

impl Distribution<Letter> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Letter {
        let index = rng.gen_range(0..LETTERS_LEN);
        num::FromPrimitive::from_usize(index).unwrap_or_else(|| {
            dbg!(index, LETTERS_LEN);
            unreachable!(
                "index ({:?}) should be matched since letters cover all indexes \
                in range 0..LETTERS_LEN (0..{:?}).",
                index, LETTERS_LEN
            );
        })
    }
}
