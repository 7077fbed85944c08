// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board_layout, error, matrix};

// A bonus only exists on an empty square; placing a letter consumes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Bonus(board_layout::Bonus),
    Letter(u8),
}

// Number of new tiles a word from an anchor may use in one direction.
// min == 0 means no word can be formed that way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bounds {
    pub min: usize,
    pub max: usize,
}

impl Bounds {
    #[inline(always)]
    pub fn is_open(&self) -> bool {
        self.min > 0
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    dim: matrix::Dim,
    star: usize,
    cells: Box<[Cell]>,
    num_letters: usize,
}

impl Board {
    pub fn new(board_layout: &board_layout::BoardLayout) -> error::Returns<Board> {
        Self::from_snapshot(board_layout, board_layout.snapshot())
    }

    // Parses a snapshot: one token per cell, either the 15x15 playable area
    // or the whole padded grid. Whitespace only separates tokens.
    // Tokens are `A`-`Z`, bonus digits `1`-`4`, or an empty placeholder
    // (`.`, `*`, `#`, `_`). The border of a padded grid must be empty.
    pub fn from_snapshot(
        board_layout: &board_layout::BoardLayout,
        snapshot: &str,
    ) -> error::Returns<Board> {
        let dim = board_layout.dim();
        let mut tokens = Vec::with_capacity(dim.padded_len());
        for (i, b) in snapshot.bytes().filter(|b| !b.is_ascii_whitespace()).enumerate() {
            tokens.push(match b {
                b'A'..=b'Z' => Cell::Letter(b),
                b'.' | b'*' | b'#' | b'_' => Cell::Empty,
                _ => match board_layout::Bonus::from_code(b) {
                    Some(bonus) => Cell::Bonus(bonus),
                    None => {
                        return_error!(format!(
                            "invalid board token {:?} at position {}",
                            b as char, i
                        ));
                    }
                },
            });
        }
        let interior_len = (dim.rows as usize) * (dim.cols as usize);
        let cells = if tokens.len() == dim.padded_len() {
            for (idx, cell) in tokens.iter().enumerate() {
                if !dim.is_interior(idx) && *cell != Cell::Empty {
                    return_error!(format!("board border cell {} is not empty", idx));
                }
            }
            tokens
        } else if tokens.len() == interior_len {
            let mut cells = vec![Cell::Empty; dim.padded_len()];
            for (i, cell) in tokens.into_iter().enumerate() {
                let (row, col) = (i / dim.cols as usize, i % dim.cols as usize);
                cells[dim.at_row_col(row as i8, col as i8)] = cell;
            }
            cells
        } else {
            return_error!(format!(
                "board needs {} or {} cells, found {}",
                interior_len,
                dim.padded_len(),
                tokens.len()
            ));
        };
        let num_letters = cells
            .iter()
            .filter(|cell| matches!(cell, Cell::Letter(_)))
            .count();
        Ok(Board {
            dim,
            star: board_layout.star_idx(),
            cells: cells.into_boxed_slice(),
            num_letters,
        })
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.dim
    }

    #[inline(always)]
    pub fn cell(&self, idx: usize) -> Cell {
        self.cells[idx]
    }

    #[inline(always)]
    pub fn letter(&self, idx: usize) -> Option<u8> {
        match self.cells[idx] {
            Cell::Letter(letter) => Some(letter),
            _ => None,
        }
    }

    #[inline(always)]
    pub fn is_letter(&self, idx: usize) -> bool {
        matches!(self.cells[idx], Cell::Letter(_))
    }

    #[inline(always)]
    pub fn premium(&self, idx: usize) -> board_layout::Premium {
        match self.cells[idx] {
            Cell::Bonus(bonus) => bonus.premium(),
            _ => board_layout::FVS,
        }
    }

    #[inline(always)]
    pub fn num_letters(&self) -> usize {
        self.num_letters
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.num_letters == 0
    }

    // an empty cell a new tile would connect through.
    #[inline(always)]
    fn touches(&self, idx: usize, step: usize, perp: usize) -> bool {
        self.is_letter(idx - perp)
            || self.is_letter(idx + perp)
            || self.is_letter(idx + step)
            || (self.num_letters == 0 && idx == self.star)
    }

    // How many tiles a word starting its new tiles at `idx` may use.
    //
    // A letter right before `idx` already connects the word, so one tile is
    // enough. Otherwise the word must reach the first empty cell touching a
    // letter (or the star on an empty board), and that sets the minimum.
    // Cells already holding letters are passed over without using a tile.
    pub fn length_bounds(&self, idx: usize, down: bool, num_tiles: usize) -> Bounds {
        if num_tiles == 0 || !self.dim.is_interior(idx) || self.is_letter(idx) {
            return Bounds::default();
        }
        let step = self.dim.step(down);
        let perp = self.dim.step(!down);
        let mut min = self.is_letter(idx - step) as usize;
        let mut tiles = 0;
        let mut i = idx;
        while tiles < num_tiles && self.dim.is_interior(i) {
            if !self.is_letter(i) {
                tiles += 1;
                if min == 0 && self.touches(i, step, perp) {
                    min = tiles;
                }
            }
            i += step;
        }
        if min == 0 {
            Bounds::default()
        } else {
            Bounds { min, max: tiles }
        }
    }

    // Spells the main word of placing `tiles` from `idx`: the letters before
    // `idx`, then each tile after any letters in its way, then the letters
    // after the last tile.
    //
    // `settled[k]` receives how many leading characters of the word are
    // decided by the first k tiles alone, so that a failed lookup can tell
    // which shorter sequences are already hopeless. Returns false if the
    // tiles do not fit; `settled` then covers the tiles that did.
    pub fn spell(
        &self,
        idx: usize,
        down: bool,
        tiles: &[u8],
        word: &mut Vec<u8>,
        settled: &mut Vec<usize>,
    ) -> bool {
        word.clear();
        settled.clear();
        if !self.dim.is_interior(idx) {
            return false;
        }
        let step = self.dim.step(down);
        let mut pos = idx;
        while self.is_letter(pos - step) {
            pos -= step;
        }
        while pos < idx {
            word.extend(self.letter(pos));
            pos += step;
        }
        for &tile in tiles {
            while let Some(letter) = self.letter(pos) {
                word.push(letter);
                pos += step;
            }
            settled.push(word.len());
            if !self.dim.is_interior(pos) {
                return false;
            }
            word.push(tile);
            pos += step;
        }
        while let Some(letter) = self.letter(pos) {
            word.push(letter);
            pos += step;
        }
        settled.push(word.len());
        true
    }

    // Board indexes the tiles of a placement would occupy.
    pub fn squares(&self, idx: usize, down: bool, num_tiles: usize) -> error::Returns<Vec<usize>> {
        if !self.dim.is_interior(idx) {
            return_error!(format!("cell {} is not on the board", idx));
        }
        if self.is_letter(idx) {
            return_error!(format!("cell {} is already occupied", idx));
        }
        let step = self.dim.step(down);
        let mut squares = Vec::with_capacity(num_tiles);
        let mut pos = idx;
        for _ in 0..num_tiles {
            while self.is_letter(pos) {
                pos += step;
            }
            if !self.dim.is_interior(pos) {
                return_error!(format!(
                    "{} tiles from cell {} run off the board",
                    num_tiles, idx
                ));
            }
            squares.push(pos);
            pos += step;
        }
        Ok(squares)
    }

    // Puts the tiles on the board, consuming any bonuses under them.
    // Nothing is written unless every tile fits.
    pub fn apply_play(&mut self, idx: usize, down: bool, tiles: &[u8]) -> error::Returns<Vec<usize>> {
        if let Some(&bad) = tiles.iter().find(|t| !t.is_ascii_uppercase()) {
            return_error!(format!("invalid tile {:?}", bad as char));
        }
        let squares = self.squares(idx, down, tiles.len())?;
        for (&pos, &tile) in squares.iter().zip(tiles) {
            self.cells[pos] = Cell::Letter(tile);
        }
        self.num_letters += tiles.len();
        Ok(squares)
    }
}

// Writes the playable area in snapshot format.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.dim.rows {
            let strider = self.dim.across(row);
            for i in 0..strider.len() {
                if i > 0 {
                    write!(f, " ")?;
                }
                let c = match self.cells[strider.at(i)] {
                    Cell::Empty => '.',
                    Cell::Bonus(bonus) => bonus.code() as char,
                    Cell::Letter(letter) => letter as char,
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (self as &dyn std::fmt::Display).fmt(f)
    }
}
