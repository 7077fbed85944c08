// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, movegen};

pub struct PlayScorer {
    word: Vec<u8>,
    squares: Vec<usize>,
}

impl Default for PlayScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayScorer {
    pub fn new() -> Self {
        Self {
            word: Vec::new(),
            squares: Vec::new(),
        }
    }

    // Scores placing `tiles` in order from the empty cell `idx`, passing over
    // letters already on the board. Returns -1 if the main word or any cross
    // word is not in the lexicon. Connectedness is not checked here.
    //
    // A request that cannot be carried out on this board (bad anchor, tiles
    // running off the edge, non-letters) is an error, not an illegal play.
    pub fn score(
        &mut self,
        board_snapshot: &movegen::BoardSnapshot,
        idx: usize,
        down: bool,
        tiles: &[u8],
    ) -> error::Returns<i32> {
        let board = board_snapshot.board;
        let alphabet = board_snapshot.game_config.alphabet();
        let lexicon = board_snapshot.lexicon;
        if tiles.is_empty() {
            return_error!("a play needs at least one tile".into());
        }
        if let Some(&bad) = tiles.iter().find(|&&t| !alphabet.is_letter(t)) {
            return_error!(format!("invalid tile {:?}", bad as char));
        }
        let dim = board.dim();
        let step = dim.step(down);
        let perp = dim.step(!down);

        self.squares.clear();
        self.squares.extend(board.squares(idx, down, tiles.len())?);

        let mut total = 0i32;
        {
            self.word.clear();
            let mut word_multiplier = 1i32;
            let mut word_score = 0i32;
            let mut pos = idx;
            while board.is_letter(pos - step) {
                pos -= step;
            }
            let mut placed = self.squares.iter().zip(tiles).peekable();
            loop {
                if let Some(letter) = board.letter(pos) {
                    word_score += alphabet.score(letter) as i32;
                    self.word.push(letter);
                } else if let Some((_, &tile)) = placed.next_if(|&(&sq, _)| sq == pos) {
                    let premium = board.premium(pos);
                    word_score += alphabet.score(tile) as i32 * premium.letter_multiplier as i32;
                    word_multiplier *= premium.word_multiplier as i32;
                    self.word.push(tile);
                } else {
                    break;
                }
                pos += step;
            }
            if !lexicon.lookup_tiles(&self.word).is_found() {
                return Ok(-1);
            }
            total += word_score * word_multiplier;
        }

        for (&sq, &tile) in self.squares.iter().zip(tiles) {
            if !board.is_letter(sq - perp) && !board.is_letter(sq + perp) {
                continue;
            }
            self.word.clear();
            let premium = board.premium(sq);
            let mut word_score = alphabet.score(tile) as i32 * premium.letter_multiplier as i32;
            let mut pos = sq;
            while board.is_letter(pos - perp) {
                pos -= perp;
            }
            while let Some(letter) = board.letter(pos) {
                word_score += alphabet.score(letter) as i32;
                self.word.push(letter);
                pos += perp;
            }
            self.word.push(tile);
            pos = sq + perp;
            while let Some(letter) = board.letter(pos) {
                word_score += alphabet.score(letter) as i32;
                self.word.push(letter);
                pos += perp;
            }
            if !lexicon.lookup_tiles(&self.word).is_found() {
                return Ok(-1);
            }
            total += word_score * premium.word_multiplier as i32;
        }

        if tiles.len() == board_snapshot.game_config.rack_size() as usize {
            total += board_snapshot.game_config.bingo_bonus();
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{board, game_config, trie};

    struct Fixture {
        game_config: game_config::GameConfig<'static>,
        board: board::Board,
        lexicon: trie::Trie,
    }

    impl Fixture {
        fn new(words: &[&str]) -> Self {
            let game_config = game_config::make_common_english_game_config();
            let board = board::Board::new(game_config.board_layout()).unwrap();
            Self {
                game_config,
                board,
                lexicon: trie::Trie::from_words(words),
            }
        }

        fn play(&mut self, row: i8, col: i8, down: bool, tiles: &[u8]) {
            let idx = self.board.dim().at_row_col(row, col);
            self.board.apply_play(idx, down, tiles).unwrap();
        }

        fn score(&self, row: i8, col: i8, down: bool, tiles: &[u8]) -> error::Returns<i32> {
            let board_snapshot = movegen::BoardSnapshot {
                board: &self.board,
                game_config: &self.game_config,
                lexicon: &self.lexicon,
            };
            let idx = self.board.dim().at_row_col(row, col);
            PlayScorer::new().score(&board_snapshot, idx, down, tiles)
        }
    }

    #[test]
    fn cat_through_the_star() {
        let f = Fixture::new(&["CAT"]);
        // C=3 A=1 T=1, star is double word.
        assert_eq!(f.score(7, 5, false, b"CAT").unwrap(), 10);
        assert_eq!(f.score(7, 7, true, b"CAT").unwrap(), 10);
    }

    #[test]
    fn letter_and_word_multipliers() {
        let f = Fixture::new(&["CAT", "ZAX"]);
        // row 3: DL at col 0, DW at col 3; C on DL.
        assert_eq!(f.score(3, 0, false, b"CAT").unwrap(), 3 * 2 + 1 + 1);
        // T on the DW at col 3.
        assert_eq!(f.score(3, 1, false, b"CAT").unwrap(), (3 + 1 + 1) * 2);
        // row 1: DW at col 1, TL at col 5. Z on DW.
        assert_eq!(f.score(1, 1, false, b"ZAX").unwrap(), (10 + 1 + 8) * 2);
        // X on TL at col 5.
        assert_eq!(f.score(1, 3, false, b"ZAX").unwrap(), 10 + 1 + 8 * 3);
    }

    #[test]
    fn two_word_bonuses_multiply() {
        // row 0: TW at col 0 and col 7.
        let f = Fixture::new(&["ABCDEFGH"]);
        // D on the DL at col 3.
        let face = 1 + 3 + 3 + 2 * 2 + 1 + 4 + 2 + 4;
        assert_eq!(f.score(0, 0, false, b"ABCDEFGH").unwrap(), face * 9);
    }

    #[test]
    fn illegal_words_score_minus_one() {
        let f = Fixture::new(&["CAT"]);
        let before = f.board.clone();
        assert_eq!(f.score(7, 5, false, b"TAC").unwrap(), -1);
        assert_eq!(f.board, before);
    }

    #[test]
    fn extends_board_words_without_rescoring_bonuses() {
        let mut f = Fixture::new(&["CAT", "CATS", "SCAT"]);
        f.play(7, 5, false, b"CAT");
        // S at col 8 (plain), CAT already there at face value.
        assert_eq!(f.score(7, 8, false, b"S").unwrap(), 3 + 1 + 1 + 1);
        // S at col 4 (plain) in front.
        assert_eq!(f.score(7, 4, false, b"S").unwrap(), 6);
        // the star under A is spent.
        assert_eq!(f.board.premium(144).word_multiplier, 1);
    }

    #[test]
    fn cross_words_add_up_and_can_veto() {
        let mut f = Fixture::new(&["CAT", "AT", "TA", "AA", "TT"]);
        f.play(7, 5, false, b"CAT");
        // A under A (row 8, col 6 is a DL) and T under T: across "AT",
        // crosses "AA" and "TT".
        let across = 2 + 1;
        let aa = 1 + 2;
        let tt = 1 + 1;
        assert_eq!(f.score(8, 6, false, b"AT").unwrap(), across + aa + tt);
        // "CT" down column 5 is not a word.
        assert_eq!(f.score(8, 5, false, b"TA").unwrap(), -1);
    }

    #[test]
    fn bingo_bonus_only_for_valid_full_racks() {
        let f = Fixture::new(&["CRATERS"]);
        // cols 1..=7 on row 7; col 3 is DL (A), col 7 is the star (S).
        let face = 3 + 1 + 1 * 2 + 1 + 1 + 1 + 1;
        assert_eq!(f.score(7, 1, false, b"CRATERS").unwrap(), face * 2 + 50);
        assert_eq!(f.score(7, 1, false, b"CRATESR").unwrap(), -1);
    }

    #[test]
    fn bad_requests_are_errors() {
        let mut f = Fixture::new(&["CAT"]);
        assert!(f.score(7, 13, false, b"CAT").is_err());
        assert!(f.score(7, 5, false, b"").is_err());
        assert!(f.score(7, 5, false, b"C4T").is_err());
        f.play(7, 5, false, b"CAT");
        assert!(f.score(7, 6, true, b"CAT").is_err());
    }
}
