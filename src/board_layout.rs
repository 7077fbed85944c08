// Copyright (C) 2020-2026 Andy Kurnia.

use super::matrix;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Premium {
    pub word_multiplier: i8,
    pub letter_multiplier: i8,
}

static TWS: Premium = Premium {
    word_multiplier: 3,
    letter_multiplier: 1,
};
static DWS: Premium = Premium {
    word_multiplier: 2,
    letter_multiplier: 1,
};
static TLS: Premium = Premium {
    word_multiplier: 1,
    letter_multiplier: 3,
};
static DLS: Premium = Premium {
    word_multiplier: 1,
    letter_multiplier: 2,
};
pub static FVS: Premium = Premium {
    word_multiplier: 1,
    letter_multiplier: 1,
};

// Snapshot digits: 1=DL, 2=TL, 3=DW, 4=TW.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bonus {
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

impl Bonus {
    #[inline(always)]
    pub fn from_code(code: u8) -> Option<Bonus> {
        match code {
            b'1' => Some(Bonus::DoubleLetter),
            b'2' => Some(Bonus::TripleLetter),
            b'3' => Some(Bonus::DoubleWord),
            b'4' => Some(Bonus::TripleWord),
            _ => None,
        }
    }

    #[inline(always)]
    pub fn code(self) -> u8 {
        match self {
            Bonus::DoubleLetter => b'1',
            Bonus::TripleLetter => b'2',
            Bonus::DoubleWord => b'3',
            Bonus::TripleWord => b'4',
        }
    }

    #[inline(always)]
    pub fn premium(self) -> Premium {
        match self {
            Bonus::DoubleLetter => DLS,
            Bonus::TripleLetter => TLS,
            Bonus::DoubleWord => DWS,
            Bonus::TripleWord => TWS,
        }
    }
}

pub struct StaticBoardLayout<'a> {
    snapshot: &'a str,
    dim: matrix::Dim,
    star_row: i8,
    star_col: i8,
}

pub enum BoardLayout<'a> {
    Static(StaticBoardLayout<'a>),
}

impl<'a> BoardLayout<'a> {
    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        match self {
            BoardLayout::Static(x) => x.dim,
        }
    }

    #[inline(always)]
    pub fn star_row(&self) -> i8 {
        match self {
            BoardLayout::Static(x) => x.star_row,
        }
    }

    #[inline(always)]
    pub fn star_col(&self) -> i8 {
        match self {
            BoardLayout::Static(x) => x.star_col,
        }
    }

    // board index of the star, which the opening move must cover.
    #[inline(always)]
    pub fn star_idx(&self) -> usize {
        self.dim().at_row_col(self.star_row(), self.star_col())
    }

    // the empty board in snapshot format.
    #[inline(always)]
    pub fn snapshot(&self) -> &'a str {
        match self {
            BoardLayout::Static(x) => x.snapshot,
        }
    }
}

pub static COMMON_BOARD_LAYOUT: BoardLayout = BoardLayout::Static(StaticBoardLayout {
    snapshot: "\
4 . . 1 . . . 4 . . . 1 . . 4
. 3 . . . 2 . . . 2 . . . 3 .
. . 3 . . . 1 . 1 . . . 3 . .
1 . . 3 . . . 1 . . . 3 . . 1
. . . . 3 . . . . . 3 . . . .
. 2 . . . 2 . . . 2 . . . 2 .
. . 1 . . . 1 . 1 . . . 1 . .
4 . . 1 . . . 3 . . . 1 . . 4
. . 1 . . . 1 . 1 . . . 1 . .
. 2 . . . 2 . . . 2 . . . 2 .
. . . . 3 . . . . . 3 . . . .
1 . . 3 . . . 1 . . . 3 . . 1
. . 3 . . . 1 . 1 . . . 3 . .
. 3 . . . 2 . . . 2 . . . 3 .
4 . . 1 . . . 4 . . . 1 . . 4
",
    dim: matrix::Dim { rows: 15, cols: 15 },
    star_row: 7,
    star_col: 7,
});
