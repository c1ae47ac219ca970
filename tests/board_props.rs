use connect_n::{Board, Cell, MoveError, PlayerId};
use proptest::prelude::*;

const ROWS: usize = 6;
const COLS: usize = 7;

fn occupied(board: &Board) -> usize {
    let mut n = 0;
    for r in 0..board.rows() {
        for c in 0..board.cols() {
            if !board.cell_at(r, c).unwrap().is_empty() {
                n += 1;
            }
        }
    }
    n
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn drop_lands_on_lowest_empty_row(ops in prop::collection::vec((0..COLS, 1u8..=2), 0..80)) {
        let mut board = Board::new(ROWS, COLS).unwrap();
        let mut heights = [0usize; COLS];
        for (col, p) in ops {
            let player = PlayerId::new(p).unwrap();
            let before = board.clone();
            match board.drop_piece(col, player) {
                Ok(row) => {
                    prop_assert_eq!(row, ROWS - 1 - heights[col]);
                    prop_assert_eq!(board.cell_at(row, col).unwrap(), Cell::Occupied(player));
                    heights[col] += 1;
                }
                Err(e) => {
                    prop_assert_eq!(e, MoveError::ColumnFull);
                    prop_assert_eq!(heights[col], ROWS);
                    prop_assert_eq!(&board, &before);
                }
            }
            prop_assert!(board.move_count() >= before.move_count());
        }
        prop_assert_eq!(board.move_count(), heights.iter().sum::<usize>());
    }

    #[test]
    fn move_log_matches_occupied_cells(cols in prop::collection::vec(0..COLS, 0..60)) {
        let mut board = Board::new(ROWS, COLS).unwrap();
        let mut accepted = Vec::new();
        for (i, col) in cols.into_iter().enumerate() {
            let player = PlayerId::new(1 + (i % 2) as u8).unwrap();
            if let Ok(row) = board.drop_piece(col, player) {
                accepted.push((row, col, player));
            }
        }
        prop_assert_eq!(occupied(&board), board.move_count());
        let logged: Vec<_> = board.moves().iter().map(|m| (m.row, m.col, m.player)).collect();
        prop_assert_eq!(logged, accepted);
        prop_assert_eq!(board.is_full(), board.move_count() == ROWS * COLS);
    }

    #[test]
    fn full_column_stays_full(col in 0..COLS, extra in 1usize..10) {
        let mut board = Board::new(ROWS, COLS).unwrap();
        let one = PlayerId::new(1).unwrap();
        for _ in 0..ROWS {
            board.drop_piece(col, one).unwrap();
        }
        let snapshot = board.clone();
        for _ in 0..extra {
            prop_assert_eq!(board.drop_piece(col, one), Err(MoveError::ColumnFull));
        }
        prop_assert_eq!(board, snapshot);
    }
}
