// Copyright (C) 2020-2026 Andy Kurnia.

// Tiles are plain uppercase ASCII letters. There are no blanks.

pub struct Tile {
    letter: u8,
    freq: u8,
    score: i8,
}

pub struct StaticAlphabet<'a> {
    tiles: &'a [Tile],
    num_tiles: u16,
}

pub enum Alphabet<'a> {
    Static(StaticAlphabet<'a>),
}

impl<'a> Alphabet<'a> {
    #[inline(always)]
    fn tiles(&self) -> &'a [Tile] {
        match self {
            Alphabet::Static(x) => x.tiles,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> u8 {
        self.tiles().len() as u8
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn num_tiles(&self) -> u16 {
        match self {
            Alphabet::Static(x) => x.num_tiles,
        }
    }

    #[inline(always)]
    fn get(&self, letter: u8) -> Option<&'a Tile> {
        let idx = letter.wrapping_sub(b'A') as usize;
        self.tiles().get(idx).filter(|tile| tile.letter == letter)
    }

    #[inline(always)]
    pub fn is_letter(&self, letter: u8) -> bool {
        self.get(letter).is_some()
    }

    // letter by position, 0 for A.
    #[inline(always)]
    pub fn letter(&self, idx: u8) -> u8 {
        self.tiles()[idx as usize].letter
    }

    // face value, 0 for anything that is not a tile.
    #[inline(always)]
    pub fn score(&self, letter: u8) -> i8 {
        self.get(letter).map_or(0, |tile| tile.score)
    }

    #[inline(always)]
    pub fn freq(&self, letter: u8) -> u8 {
        self.get(letter).map_or(0, |tile| tile.freq)
    }

    #[inline(always)]
    pub fn rack_score(&self, rack: &[u8]) -> i32 {
        rack.iter().map(|&tile| self.score(tile) as i32).sum::<i32>()
    }

    pub fn fmt_rack(&self, rack: &[u8]) -> String {
        let mut s = String::with_capacity(rack.len());
        for &letter in rack {
            s.push(if self.is_letter(letter) {
                letter as char
            } else {
                '?'
            });
        }
        s
    }
}

macro_rules! tile {
    ($letter:literal, $freq:literal, $score:literal) => {
        Tile {
            letter: $letter,
            freq: $freq,
            score: $score,
        }
    };
}

pub static ENGLISH_ALPHABET: Alphabet = Alphabet::Static(StaticAlphabet {
    tiles: &[
        tile!(b'A', 9, 1),
        tile!(b'B', 2, 3),
        tile!(b'C', 2, 3),
        tile!(b'D', 4, 2),
        tile!(b'E', 12, 1),
        tile!(b'F', 2, 4),
        tile!(b'G', 3, 2),
        tile!(b'H', 2, 4),
        tile!(b'I', 9, 1),
        tile!(b'J', 1, 8),
        tile!(b'K', 1, 5),
        tile!(b'L', 4, 1),
        tile!(b'M', 2, 3),
        tile!(b'N', 6, 1),
        tile!(b'O', 8, 1),
        tile!(b'P', 2, 3),
        tile!(b'Q', 1, 10),
        tile!(b'R', 6, 1),
        tile!(b'S', 4, 1),
        tile!(b'T', 6, 1),
        tile!(b'U', 4, 1),
        tile!(b'V', 2, 4),
        tile!(b'W', 2, 4),
        tile!(b'X', 1, 8),
        tile!(b'Y', 2, 4),
        tile!(b'Z', 1, 10),
    ],
    num_tiles: 98,
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_add_up() {
        let alphabet = &ENGLISH_ALPHABET;
        assert_eq!(alphabet.len(), 26);
        let total = (0..alphabet.len())
            .map(|i| alphabet.freq(alphabet.letter(i)) as u16)
            .sum::<u16>();
        assert_eq!(total, alphabet.num_tiles());
    }

    #[test]
    fn scores() {
        let alphabet = &ENGLISH_ALPHABET;
        assert_eq!(alphabet.score(b'C'), 3);
        assert_eq!(alphabet.score(b'Q'), 10);
        assert_eq!(alphabet.score(b'a'), 0);
        assert_eq!(alphabet.score(b'3'), 0);
        assert!(!alphabet.is_letter(b'#'));
        assert_eq!(alphabet.fmt_rack(b"CAT!"), "CAT?");
        assert_eq!(alphabet.rack_score(b"QUIZ"), 10 + 1 + 1 + 10);
    }
}
