// Copyright (C) 2020-2026 Andy Kurnia.

// Counters for one search, summed over worker threads.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub anchors: u64,
    pub lookups: u64,
    pub scored: u64,
    pub pruned: u64,
}

impl SearchStats {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn update_bulk(&mut self, other: &SearchStats) {
        self.anchors += other.anchors;
        self.lookups += other.lookups;
        self.scored += other.scored;
        self.pruned += other.pruned;
    }
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} anchors, {} lookups, {} scored, {} pruned",
            self.anchors, self.lookups, self.scored, self.pruned
        )
    }
}
