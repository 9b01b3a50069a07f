use crate::{Board, Letter, MoveRecord, Placements, Rack, BOARD_SIZE, RACK_CAPACITY};
use rand::seq::SliceRandom;
use rand::Rng;
use std::iter;

/// It inserts a contiguous horizontal run of random [letters](Letter) at
/// a random row into the board.
///
/// # Returns
///
/// The number of additional [letters](Letter) on the board.
pub fn random_board<R: Rng + ?Sized>(rng: &mut R, board: &mut Board) -> usize {
    let run_len = rng.gen_range(2..=RACK_CAPACITY);
    let row = rng.gen_range(0..BOARD_SIZE);
    let start = rng.gen_range(0..=BOARD_SIZE - run_len);

    board.extend((start..start + run_len).map(|col| ((row, col), rng.gen::<Letter>())));

    run_len
}

/// A rack-sized contiguous horizontal run of random [letters](Letter) at
/// a random row.
pub fn random_placements<R: Rng + ?Sized>(rng: &mut R) -> Placements {
    let run_len = rng.gen_range(1..=RACK_CAPACITY);
    let row = rng.gen_range(0..BOARD_SIZE);
    let start = rng.gen_range(0..=BOARD_SIZE - run_len);

    (start..start + run_len)
        .map(|col| ((row, col), rng.gen::<Letter>()))
        .collect()
}

/// A full tile set flattened into one [letter](Letter) per physical tile,
/// shuffled.
///
/// # See Also
///
/// * [Letter::count_in_set]
pub fn random_tile_pool<R: Rng + ?Sized>(rng: &mut R) -> Vec<Letter> {
    let mut pool: Vec<Letter> = Letter::letters()
        .into_iter()
        .flat_map(|letter| iter::repeat(letter).take(letter.count_in_set()))
        .collect();
    pool.shuffle(rng);

    pool
}

/// A history of a few moves drawing [letters](Letter) from a full-set
/// [pool](random_tile_pool) without replacement, so no letter appears
/// more often than a full set holds. Each move occupies its own row so
/// no two placements collide.
pub fn random_history<R: Rng + ?Sized>(rng: &mut R) -> Vec<MoveRecord> {
    let mut pool = random_tile_pool(rng);
    let moves = rng.gen_range(2..=6);

    (0..moves)
        .map(|row| {
            let run_len = rng.gen_range(1..=RACK_CAPACITY);
            let start = rng.gen_range(0..=BOARD_SIZE - run_len);
            let placements = (start..start + run_len)
                .map(|col| {
                    let letter = pool.pop().expect("pool should hold enough tiles");
                    ((row, col), letter)
                })
                .collect();

            MoveRecord {
                player: row % 2,
                placements,
            }
        })
        .collect()
}

/// It inserts a random, small, non-zero number of [letters](Letter) into
/// the rack.
///
/// # Returns
///
/// The number of additional [letters](Letter) in the rack.
pub fn random_rack<R: Rng + ?Sized>(rng: &mut R, rack: &mut Rack) -> usize {
    let rack_len = rng.gen_range(1..=RACK_CAPACITY);
    rack.extend((0..rack_len).map(|_| rng.gen::<Letter>()));

    rack_len
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TILE_SET_TOTAL;
    use itertools::Itertools;

    #[test]
    fn random_board_contiguous_single_row() {
        let mut board = Board::new();

        let board_len = random_board(&mut rand::thread_rng(), &mut board);

        assert_eq!(board_len, board.len());
        let rows: Vec<usize> = board.keys().map(|&(row, _)| row).unique().collect();
        assert_eq!(1, rows.len());
        let cols: Vec<usize> = board.keys().map(|&(_, col)| col).sorted().collect();
        for (previous, next) in cols.iter().tuple_windows() {
            assert_eq!(previous + 1, *next);
        }
    }

    #[test]
    fn random_placements_rack_sized_in_bounds() {
        let placements = random_placements(&mut rand::thread_rng());

        assert!(!placements.is_empty());
        assert!(placements.len() <= RACK_CAPACITY);
        for &(row, col) in placements.keys() {
            assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        }
    }

    #[test]
    fn random_tile_pool_holds_a_full_set() {
        let pool = random_tile_pool(&mut rand::thread_rng());

        assert_eq!(TILE_SET_TOTAL, pool.len());
        for letter in Letter::letters() {
            assert_eq!(
                letter.count_in_set(),
                pool.iter().filter(|&&other| letter == other).count()
            );
        }
    }

    #[test]
    fn random_history_moves_do_not_collide() {
        let history = random_history(&mut rand::thread_rng());

        assert!(history.len() >= 2);
        let positions = history
            .iter()
            .flat_map(|record| record.placements.keys().copied())
            .collect_vec();
        assert_eq!(0, positions.iter().duplicates().count());
    }

    #[test]
    fn random_history_respects_rack_capacity() {
        for record in random_history(&mut rand::thread_rng()) {
            assert!(!record.placements.is_empty());
            assert!(record.placements.len() <= RACK_CAPACITY);
        }
    }

    #[test]
    fn random_rack_empty() {
        let mut rack = Rack::new();

        let rack_len = random_rack(&mut rand::thread_rng(), &mut rack);

        assert_eq!(rack_len, rack.len());
        assert!((1..=RACK_CAPACITY).contains(&rack_len));
    }
}
