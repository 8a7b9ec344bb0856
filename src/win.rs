use crate::board::{Board, Cell};
use crate::player::PlayerId;

/// Pieces in a row needed to win.
pub const WIN_LENGTH: usize = 4;

/// Column/row step; rows grow downwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub dx: isize,
    pub dy: isize,
}

impl Step {
    const fn new(dx: isize, dy: isize) -> Self {
        Self { dx, dy }
    }

    fn reversed(self) -> Self {
        Self::new(-self.dx, -self.dy)
    }
}

/// Vertical, horizontal and the two diagonal axes, each given by one of its
/// two directions.
pub const AXES: [Step; 4] = [
    Step::new(0, 1),
    Step::new(-1, 0),
    Step::new(-1, 1),
    Step::new(-1, -1),
];

/// Counts consecutive cells owned by `player` starting at (`column`, `row`) and
/// moving by `step`. Stops at the board edge or the first cell that is empty or
/// the opponent's.
pub fn count_run(board: &Board, column: isize, row: isize, step: Step, player: PlayerId) -> usize {
    let limit = board.width().max(board.height());
    let (mut x, mut y) = (column, row);
    let mut count = 0;
    while count < limit {
        match board.get(x, y) {
            Some(Cell::Occupied(id)) if id == player => {
                count += 1;
                x += step.dx;
                y += step.dy;
            }
            _ => break,
        }
    }
    count
}

/// Length of the line through (`column`, `row`) along `axis`, the cell itself
/// counted once.
pub fn axis_run(board: &Board, column: usize, row: usize, axis: Step, player: PlayerId) -> usize {
    let (x, y) = (column as isize, row as isize);
    let back = axis.reversed();
    count_run(board, x, y, axis, player) + count_run(board, x + back.dx, y + back.dy, back, player)
}

/// True when the piece `player` just placed at (`column`, `row`) completes
/// four in a row on any axis. A cell not owned by `player` never wins.
pub fn check_win(board: &Board, column: usize, row: usize, player: PlayerId) -> bool {
    if board.get(column as isize, row as isize) != Some(Cell::Occupied(player)) {
        return false;
    }
    AXES
        .iter()
        .any(|&axis| axis_run(board, column, row, axis, player) >= WIN_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const X: PlayerId = PlayerId::First;
    const O: PlayerId = PlayerId::Second;

    #[test]
    fn vertical_four() {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            "...X...",
            "...X...",
            "...X...",
            "...X...",
        ]);
        assert!(check_win(&board, 3, 2, X));
        assert!(!check_win(&board, 3, 2, O));
    }

    #[test]
    fn horizontal_four_from_the_middle() {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            ".XXXXO.",
        ]);
        assert!(check_win(&board, 3, 5, X));
        assert_eq!(axis_run(&board, 3, 5, AXES[1], X), 4);
    }

    #[test]
    fn three_is_not_enough() {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            "O......",
            "XXXOXXX",
        ]);
        for column in [0, 1, 2, 4, 5, 6] {
            assert!(!check_win(&board, column, 5, X));
        }
    }

    #[test]
    fn gaps_and_opponents_stop_the_scan() {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "XX.XX..",
        ]);
        assert!(!check_win(&board, 1, 5, X));
        assert!(!check_win(&board, 3, 5, X));
    }

    #[test]
    fn down_right_diagonal_through_placed_cell() {
        // (row, col): (0,2) (1,3) (2,4) (3,5); the last piece lands at row 2, col 4.
        let board = Board::from_rows(&[
            "..X....",
            "..OX...",
            "..OXX..",
            "..OOOX.",
            "..XOXO.",
            "..OXOO.",
        ]);
        assert!(check_win(&board, 4, 2, X));
        assert_eq!(axis_run(&board, 4, 2, AXES[3], X), 4);
    }

    #[test]
    fn up_right_diagonal() {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            "......O",
            ".....OX",
            "....OXX",
            "...OXXX",
        ]);
        assert!(check_win(&board, 4, 4, O));
        assert!(check_win(&board, 6, 2, O));
        assert!(!check_win(&board, 6, 3, X));
    }

    #[test]
    fn run_is_capped_by_board_edges() {
        let board = Board::from_rows(&["XXXX"]);
        assert_eq!(count_run(&board, 0, 0, Step::new(1, 0), X), 4);
        assert_eq!(count_run(&board, -1, 0, Step::new(1, 0), X), 0);
        assert!(check_win(&board, 0, 0, X));
    }

    #[test]
    fn unowned_cell_never_wins() {
        let board = Board::from_rows(&["XXXX.."]);
        assert!(!check_win(&board, 4, 0, X));
        let flipped = Board::from_rows(&["..XXXX"]);
        assert!(!check_win(&flipped, 1, 0, X));
        assert!(!check_win(&board, 3, 0, O));
        assert!(!check_win(&board, 9, 0, X));
    }

    fn mirrored(board: &Board) -> Board {
        let rows: Vec<String> = render(board)
            .into_iter()
            .map(|r| r.chars().rev().collect())
            .collect();
        let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        Board::from_rows(&refs)
    }

    /// Quarter turn clockwise: (column, row) moves to (height - 1 - row, column).
    fn rotated(board: &Board) -> Board {
        let grid = render(board);
        let rows: Vec<String> = (0..board.width())
            .map(|new_row| {
                (0..board.height())
                    .map(|new_col| {
                        grid[board.height() - 1 - new_col]
                            .chars()
                            .nth(new_row)
                            .unwrap_or('.')
                    })
                    .collect()
            })
            .collect();
        let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        Board::from_rows(&refs)
    }

    fn render(board: &Board) -> Vec<String> {
        (0..board.height())
            .map(|row| {
                (0..board.width())
                    .map(|column| match board.occupant_at(column, row).unwrap() {
                        Cell::Empty => '.',
                        Cell::Occupied(PlayerId::First) => 'X',
                        Cell::Occupied(PlayerId::Second) => 'O',
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn rotation_turns_vertical_into_horizontal() {
        let board = Board::from_rows(&[
            "...",
            "X..",
            "X..",
            "X..",
            "X..",
        ]);
        let turned = rotated(&board);
        assert_eq!(render(&turned), vec!["XXXX.", ".....", "....."]);
        assert!(check_win(&turned, 3, 0, X));
        assert_eq!(axis_run(&turned, 3, 0, AXES[1], X), 4);
    }

    fn grid_strategy() -> impl Strategy<Value = Vec<String>> {
        (1usize..=7, 1usize..=7).prop_flat_map(|(width, height)| {
            prop::collection::vec(
                prop::collection::vec(prop::sample::select(vec!['.', 'X', 'O']), width)
                    .prop_map(|cells| cells.into_iter().collect::<String>()),
                height,
            )
        })
    }

    proptest! {
        #[test]
        fn win_detection_is_symmetric(
            rows in grid_strategy(),
            pick_column in any::<prop::sample::Index>(),
            pick_row in any::<prop::sample::Index>(),
        ) {
            let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
            let board = Board::from_rows(&refs);
            let column = pick_column.index(board.width());
            let row = pick_row.index(board.height());
            let player = board.occupant_at(column, row).unwrap().occupant().unwrap_or(X);

            let expected = check_win(&board, column, row, player);

            let flipped = mirrored(&board);
            prop_assert_eq!(
                check_win(&flipped, board.width() - 1 - column, row, player),
                expected
            );

            let turned = rotated(&board);
            prop_assert_eq!(
                check_win(&turned, board.height() - 1 - row, column, player),
                expected
            );
        }
    }
}
