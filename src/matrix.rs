// Copyright (C) 2020-2026 Andy Kurnia.

// The board is stored with a one-cell empty border on every side, so an
// interior cell can always look one step in any direction.

#[derive(Clone)]
pub struct Strider {
    base: usize,
    step: usize,
    len: i8,
}

impl Strider {
    #[inline(always)]
    pub fn base(&self) -> usize {
        self.base
    }

    #[inline(always)]
    pub fn step(&self) -> usize {
        self.step
    }

    #[inline(always)]
    pub fn len(&self) -> i8 {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn at(&self, idx: i8) -> usize {
        self.base + (idx as usize) * self.step
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dim {
    pub rows: i8,
    pub cols: i8,
}

impl Dim {
    #[inline(always)]
    pub fn stride(&self) -> usize {
        self.cols as usize + 2
    }

    #[inline(always)]
    pub fn padded_len(&self) -> usize {
        (self.rows as usize + 2) * self.stride()
    }

    // distance between neighbouring cells of one lane.
    #[inline(always)]
    pub fn step(&self, down: bool) -> usize {
        if down { self.stride() } else { 1 }
    }

    #[inline(always)]
    pub fn across(&self, row: i8) -> Strider {
        Strider {
            base: self.at_row_col(row, 0),
            step: 1,
            len: self.cols,
        }
    }

    #[inline(always)]
    pub fn down(&self, col: i8) -> Strider {
        Strider {
            base: self.at_row_col(0, col),
            step: self.stride(),
            len: self.rows,
        }
    }

    #[inline(always)]
    pub fn lane(&self, down: bool, lane: i8) -> Strider {
        if down {
            self.down(lane)
        } else {
            self.across(lane)
        }
    }

    // row and col are 0-based within the playable area.
    #[inline(always)]
    pub fn at_row_col(&self, row: i8, col: i8) -> usize {
        (row as usize + 1) * self.stride() + (col as usize + 1)
    }

    // None for border cells.
    #[inline(always)]
    pub fn row_col(&self, idx: usize) -> Option<(i8, i8)> {
        let stride = self.stride();
        let (r, c) = (idx / stride, idx % stride);
        if (1..=self.rows as usize).contains(&r) && (1..=self.cols as usize).contains(&c) {
            Some(((r - 1) as i8, (c - 1) as i8))
        } else {
            None
        }
    }

    #[inline(always)]
    pub fn is_interior(&self, idx: usize) -> bool {
        self.row_col(idx).is_some()
    }
}
