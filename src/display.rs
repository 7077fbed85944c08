// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, board_layout};

#[inline(always)]
pub fn empty_label(
    board_layout: &board_layout::BoardLayout,
    cell: board::Cell,
    row: i8,
    col: i8,
) -> &'static str {
    if row == board_layout.star_row() && col == board_layout.star_col() {
        return "*";
    }
    match cell {
        board::Cell::Bonus(board_layout::Bonus::TripleWord) => "=",
        board::Cell::Bonus(board_layout::Bonus::DoubleWord) => "-",
        board::Cell::Bonus(board_layout::Bonus::TripleLetter) => "\"",
        board::Cell::Bonus(board_layout::Bonus::DoubleLetter) => "\'",
        _ => " ",
    }
}

// letters as themselves. a covered star shows its letter.
pub fn board_label(
    board_layout: &board_layout::BoardLayout,
    board: &board::Board,
    row: i8,
    col: i8,
) -> String {
    let cell = board.cell(board.dim().at_row_col(row, col));
    match cell {
        board::Cell::Letter(letter) => (letter as char).to_string(),
        _ => empty_label(board_layout, cell, row, col).to_string(),
    }
}

fn col_header(board: &board::Board) -> String {
    let mut s = String::from("  ");
    for c in 0..board.dim().cols {
        s.push(' ');
        s.push(((c as u8) + 0x61) as char);
    }
    s
}

fn rule(board: &board::Board) -> String {
    let mut s = String::from("  +");
    for _ in 1..board.dim().cols {
        s.push_str("--");
    }
    s.push_str("-+");
    s
}

pub fn fmt_board(board_layout: &board_layout::BoardLayout, board: &board::Board) -> String {
    let dim = board.dim();
    let mut lines = Vec::with_capacity(dim.rows as usize + 4);
    lines.push(col_header(board));
    lines.push(rule(board));
    for r in 0..dim.rows {
        let mut s = format!("{:2}|", r + 1);
        for c in 0..dim.cols {
            if c > 0 {
                s.push(' ');
            }
            s.push_str(&board_label(board_layout, board, r, c));
        }
        s.push_str(&format!("|{}", r + 1));
        lines.push(s);
    }
    lines.push(rule(board));
    lines.push(col_header(board));
    lines.join("\n")
}

pub fn print_board(board_layout: &board_layout::BoardLayout, board: &board::Board) {
    println!("{}", fmt_board(board_layout, board));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_layout::COMMON_BOARD_LAYOUT as LAYOUT;

    #[test]
    fn labels_bonuses_and_letters() {
        let mut board = board::Board::new(&LAYOUT).unwrap();
        let text = fmt_board(&LAYOUT, &board);
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 15 + 4);
        assert_eq!(lines[0], "   a b c d e f g h i j k l m n o");
        assert_eq!(lines[2], " 1|=     '       =       '     =|1");
        assert_eq!(lines[9], " 8|=     '       *       '     =|8");

        board
            .apply_play(board.dim().at_row_col(7, 6), false, b"CAT")
            .unwrap();
        let text = fmt_board(&LAYOUT, &board);
        assert_eq!(
            text.lines().nth(9),
            Some(" 8|=     '     C A T     '     =|8")
        );
    }
}
