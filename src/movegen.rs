// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, candidates, error, game_config, matrix, play_scorer, rack, stats, trie};

pub struct BoardSnapshot<'a> {
    pub board: &'a board::Board,
    pub game_config: &'a game_config::GameConfig<'a>,
    pub lexicon: &'a trie::Trie,
}

// anchor: board index of the first new tile.
// tiles: rack tiles in the order they go down.
// word: the main word formed, including letters already on the board.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Move {
    pub anchor: usize,
    pub down: bool,
    pub score: i32,
    pub tiles: String,
    pub word: String,
}

impl Move {
    // score -1 and no tiles.
    pub fn pass() -> Self {
        Self {
            anchor: 0,
            down: false,
            score: -1,
            tiles: String::new(),
            word: String::new(),
        }
    }

    #[inline(always)]
    pub fn is_pass(&self) -> bool {
        self.tiles.is_empty()
    }

    // higher score, else earlier in a row-major scan.
    // the two orientations of one cell never both reach this.
    #[inline(always)]
    fn beats(&self, other: &Move) -> bool {
        if self.score != other.score {
            self.score > other.score
        } else {
            !self.is_pass() && (other.is_pass() || self.anchor < other.anchor)
        }
    }

    // across: 8h, down: h8. 0-based row 7, col 7 is 8h.
    pub fn fmt_coord(&self, dim: matrix::Dim) -> String {
        match dim.row_col(self.anchor) {
            Some((row, col)) if !self.is_pass() => {
                let col = ((col as u8) + 0x61) as char;
                if self.down {
                    format!("{}{}", col, row + 1)
                } else {
                    format!("{}{}", row + 1, col)
                }
            }
            _ => "-".into(),
        }
    }

    pub fn fmt(&self, dim: matrix::Dim) -> String {
        if self.is_pass() {
            "pass".into()
        } else {
            format!(
                "{} {} ({}) {}",
                self.fmt_coord(dim),
                self.word,
                self.tiles,
                self.score
            )
        }
    }
}

// What a subtree of the candidate trie is worth exploring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Walk {
    Continue,
    // no sequence starting with the first `depth` tiles can be a word here.
    Abandon { depth: usize },
}

pub struct MoveSearcher {
    play_scorer: play_scorer::PlayScorer,
    tiles: Vec<u8>,
    word: Vec<u8>,
    settled: Vec<usize>,
    pub stats: stats::SearchStats,
}

impl Default for MoveSearcher {
    fn default() -> Self {
        Self::new()
    }
}

struct Env<'a> {
    board_snapshot: &'a BoardSnapshot<'a>,
    candidates: &'a trie::Trie,
    searcher: &'a mut MoveSearcher,
    idx: usize,
    down: bool,
    bounds: board::Bounds,
    best: Move,
}

// the current tiles form a candidate sequence of acceptable length.
fn try_tiles(env: &mut Env) -> error::Returns<Walk> {
    let searcher = &mut *env.searcher;
    let board_snapshot = env.board_snapshot;
    if !board_snapshot.board.spell(
        env.idx,
        env.down,
        &searcher.tiles,
        &mut searcher.word,
        &mut searcher.settled,
    ) {
        searcher.stats.pruned += 1;
        return Ok(Walk::Abandon {
            depth: searcher.settled.len(),
        });
    }
    searcher.stats.lookups += 1;
    match board_snapshot.lexicon.lookup_tiles(&searcher.word) {
        trie::Lookup::Found => {
            let score =
                searcher
                    .play_scorer
                    .score(board_snapshot, env.idx, env.down, &searcher.tiles)?;
            searcher.stats.scored += 1;
            if score > env.best.score {
                env.best = Move {
                    anchor: env.idx,
                    down: env.down,
                    score,
                    tiles: String::from_utf8_lossy(&searcher.tiles).into_owned(),
                    word: String::from_utf8_lossy(&searcher.word).into_owned(),
                };
            }
            Ok(Walk::Continue)
        }
        trie::Lookup::NotFound {
            longest_valid_prefix: Some(valid),
        } => {
            // settled[k] characters are fixed by the first k tiles. once that
            // covers the failing character, those k tiles are hopeless.
            searcher.stats.pruned += 1;
            let depth = searcher
                .settled
                .iter()
                .position(|&fixed| fixed > valid)
                .unwrap_or(searcher.tiles.len());
            Ok(Walk::Abandon { depth })
        }
        trie::Lookup::NotFound {
            longest_valid_prefix: None,
        } => Ok(Walk::Continue),
    }
}

fn walk(env: &mut Env, p: u32) -> error::Returns<Walk> {
    let candidates = env.candidates;
    let depth = env.searcher.tiles.len();
    if depth >= env.bounds.min && candidates[p].accepts() {
        if let abandon @ Walk::Abandon { .. } = try_tiles(env)? {
            return Ok(abandon);
        }
    }
    if depth < env.bounds.max {
        for &(tile, q) in candidates[p].arcs() {
            env.searcher.tiles.push(tile);
            let ret = walk(env, q);
            env.searcher.tiles.pop();
            match ret? {
                // a dead ancestor (or this node) takes the siblings with it.
                Walk::Abandon { depth: dead } if dead <= depth => {
                    return Ok(Walk::Abandon { depth: dead });
                }
                _ => {}
            }
        }
    }
    Ok(Walk::Continue)
}

impl MoveSearcher {
    pub fn new() -> Self {
        Self {
            play_scorer: play_scorer::PlayScorer::new(),
            tiles: Vec::new(),
            word: Vec::new(),
            settled: Vec::new(),
            stats: stats::SearchStats::new(),
        }
    }

    fn best_at(
        &mut self,
        board_snapshot: &BoardSnapshot,
        candidates: &trie::Trie,
        idx: usize,
        down: bool,
        bounds: board::Bounds,
    ) -> error::Returns<Move> {
        self.tiles.clear();
        let mut env = Env {
            board_snapshot,
            candidates,
            searcher: self,
            idx,
            down,
            bounds,
            best: Move::pass(),
        };
        walk(&mut env, trie::Trie::ROOT)?;
        Ok(env.best)
    }

    // Best move whose first new tile lies on one of these rows (0-based),
    // scanning each row left to right.
    pub fn search_rows<I: IntoIterator<Item = i8>>(
        &mut self,
        board_snapshot: &BoardSnapshot,
        candidates: &trie::Trie,
        num_tiles: usize,
        rows: I,
    ) -> error::Returns<Move> {
        let board = board_snapshot.board;
        let dim = board.dim();
        let mut best = Move::pass();
        for row in rows {
            let strider = dim.across(row);
            for i in 0..strider.len() {
                let idx = strider.at(i);
                if board.is_letter(idx) {
                    continue;
                }
                let across = board.length_bounds(idx, false, num_tiles);
                let down = board.length_bounds(idx, true, num_tiles);
                if !across.is_open() && !down.is_open() {
                    continue;
                }
                self.stats.anchors += 1;
                let mut here = Move::pass();
                if across.is_open() {
                    here = self.best_at(board_snapshot, candidates, idx, false, across)?;
                }
                if down.is_open() {
                    let down_best = self.best_at(board_snapshot, candidates, idx, true, down)?;
                    if down_best.score > here.score {
                        here = down_best;
                    }
                }
                if here.beats(&best) {
                    best = here;
                }
            }
        }
        Ok(best)
    }
}

// The highest scoring move for the rack, or a pass (score -1) if the rack
// cannot form any valid placement.
pub fn find_best_move(board_snapshot: &BoardSnapshot, rack: &[u8]) -> error::Returns<Move> {
    find_best_move_threaded(board_snapshot, rack, 1)
}

// Same result as `find_best_move`, with rows dealt out to `num_threads`
// workers that share the board, lexicon and candidate trie.
pub fn find_best_move_threaded(
    board_snapshot: &BoardSnapshot,
    rack: &[u8],
    num_threads: usize,
) -> error::Returns<Move> {
    let game_config = board_snapshot.game_config;
    let alphabet = game_config.alphabet();
    rack::check_rack(alphabet, rack, game_config.rack_size() as usize)?;
    if rack.is_empty() {
        return Ok(Move::pass());
    }
    let t0 = std::time::Instant::now();
    let candidates = candidates::build(rack, 1, rack.len())?;
    let dim = board_snapshot.board.dim();
    let num_threads = num_threads.clamp(1, dim.rows as usize);

    let mut best = Move::pass();
    let mut stats = stats::SearchStats::new();
    if num_threads == 1 {
        let mut searcher = MoveSearcher::new();
        best = searcher.search_rows(board_snapshot, &candidates, rack.len(), 0..dim.rows)?;
        stats = searcher.stats;
    } else {
        let candidates = &candidates;
        let results = std::thread::scope(|s| {
            let handles = (0..num_threads)
                .map(|t| {
                    s.spawn(move || {
                        let mut searcher = MoveSearcher::new();
                        let rows = (t as i8..dim.rows).step_by(num_threads);
                        searcher
                            .search_rows(board_snapshot, candidates, rack.len(), rows)
                            .map(|found| (found, searcher.stats))
                    })
                })
                .collect::<Vec<_>>();
            handles
                .into_iter()
                .map(|handle| handle.join())
                .collect::<Vec<_>>()
        });
        for result in results {
            let (found, shard_stats) =
                result.map_err(|_| error::new("search thread panicked".into()))??;
            stats.update_bulk(&shard_stats);
            if found.beats(&best) {
                best = found;
            }
        }
    }

    log::debug!(
        "rack {}: {} candidates, {} in {:?}",
        alphabet.fmt_rack(rack),
        candidates.num_words(),
        stats,
        t0.elapsed()
    );
    log::info!("rack {}: {}", alphabet.fmt_rack(rack), best.fmt(dim));
    Ok(best)
}

// reads what fmt_coord writes: 8h is across from row 8 col h, h8 is down.
pub fn parse_coord(dim: matrix::Dim, s: &str) -> error::Returns<(usize, bool)> {
    let s = s.trim().to_ascii_lowercase();
    let (down, col_str, row_str) = match s.find(|c: char| c.is_ascii_digit()) {
        Some(0) => {
            let split = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
            (false, &s[split..], &s[..split])
        }
        Some(split) => (true, &s[..split], &s[split..]),
        None => {
            return_error!(format!("invalid coordinate {:?}", s));
        }
    };
    let row = row_str
        .parse::<i8>()
        .ok()
        .filter(|&row| row >= 1 && row <= dim.rows);
    let col = match col_str.as_bytes() {
        &[c @ b'a'..=b'z'] if ((c - b'a') as i8) < dim.cols => Some((c - b'a') as i8),
        _ => None,
    };
    match (row, col) {
        (Some(row), Some(col)) => Ok((dim.at_row_col(row - 1, col), down)),
        _ => {
            return_error!(format!("invalid coordinate {:?}", s));
        }
    }
}

// Validates and scores a placement chosen by the player. The tiles must come
// from the rack and connect to the board, which on an empty board means
// covering the star. A single tile has no orientation of its own, so if it
// forms no valid word one way the other way is tried.
// An invalid word is not an error: it comes back with score -1.
pub fn score_placement(
    board_snapshot: &BoardSnapshot,
    rack: &[u8],
    idx: usize,
    down: bool,
    tiles: &[u8],
) -> error::Returns<Move> {
    let board = board_snapshot.board;
    let game_config = board_snapshot.game_config;
    let rack_size = game_config.rack_size() as usize;
    rack::check_rack(game_config.alphabet(), rack, rack_size)?;
    rack::check_rack(game_config.alphabet(), tiles, rack_size)?;
    if tiles.is_empty() {
        return_error!("a play needs at least one tile".into());
    }
    rack::use_tiles(&mut rack.to_vec(), tiles.iter().copied())?;
    board.squares(idx, down, tiles.len())?;

    let both_ways = [down, !down];
    let orientations = if tiles.len() == 1 {
        &both_ways[..]
    } else {
        &both_ways[..1]
    };
    let mut play_scorer = play_scorer::PlayScorer::new();
    let mut scored = None;
    for &down in orientations {
        if !board.length_bounds(idx, down, tiles.len()).is_open() {
            continue;
        }
        let score = play_scorer.score(board_snapshot, idx, down, tiles)?;
        scored = Some((down, score));
        if score >= 0 {
            break;
        }
    }
    let Some((down, score)) = scored else {
        if board.is_empty() {
            return_error!("the first play must cover the star".into());
        }
        return_error!("the tiles do not connect to any word on the board".into());
    };

    let mut word = Vec::new();
    board.spell(idx, down, tiles, &mut word, &mut Vec::new());
    Ok(Move {
        anchor: idx,
        down,
        score,
        tiles: String::from_utf8_lossy(tiles).into_owned(),
        word: String::from_utf8_lossy(&word).into_owned(),
    })
}
