// Copyright (C) 2020-2026 Andy Kurnia.

// Prefix tree used both as the lexicon and as the per-search candidate set.
// Node 0 is the root. Arcs are kept sorted by tile.

#[derive(Clone, Default)]
pub struct Node {
    arcs: Vec<(u8, u32)>,
    accepts: bool,
}

impl Node {
    #[inline(always)]
    pub fn accepts(&self) -> bool {
        self.accepts
    }

    #[inline(always)]
    pub fn arcs(&self) -> &[(u8, u32)] {
        &self.arcs
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lookup {
    Found,
    // Some(n): word[..n] is a path but word[..=n] is not.
    // None: the whole word is a path that does not end a word.
    NotFound { longest_valid_prefix: Option<usize> },
}

impl Lookup {
    #[inline(always)]
    pub fn is_found(&self) -> bool {
        *self == Lookup::Found
    }
}

#[derive(Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    num_words: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<u32> for Trie {
    type Output = Node;

    #[inline(always)]
    fn index(&self, p: u32) -> &Node {
        &self.nodes[p as usize]
    }
}

impl Trie {
    pub const ROOT: u32 = 0;

    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            num_words: 0,
        }
    }

    pub fn from_words<S: AsRef<str>, I: IntoIterator<Item = S>>(words: I) -> Self {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    // one word per line, surrounding whitespace and blank lines ignored.
    pub fn from_word_list(giant_string: &str) -> Self {
        Self::from_words(giant_string.lines().map(str::trim).filter(|s| !s.is_empty()))
    }

    pub fn insert(&mut self, word: &str) {
        self.insert_tiles(word.bytes().map(|b| b.to_ascii_uppercase()));
    }

    // inserts exactly these tiles. the empty sequence is ignored.
    pub fn insert_tiles<I: IntoIterator<Item = u8>>(&mut self, tiles: I) {
        let mut p = Self::ROOT;
        let mut len = 0;
        for tile in tiles {
            p = match self.seek(p, tile) {
                Some(q) => q,
                None => self.add_arc(p, tile),
            };
            len += 1;
        }
        if len > 0 && !self.nodes[p as usize].accepts {
            self.nodes[p as usize].accepts = true;
            self.num_words += 1;
        }
    }

    fn add_arc(&mut self, p: u32, tile: u8) -> u32 {
        let q = self.nodes.len() as u32;
        self.nodes.push(Node::default());
        let arcs = &mut self.nodes[p as usize].arcs;
        let pos = arcs.partition_point(|&(t, _)| t < tile);
        arcs.insert(pos, (tile, q));
        q
    }

    #[inline(always)]
    pub fn seek(&self, p: u32, tile: u8) -> Option<u32> {
        let arcs = &self.nodes[p as usize].arcs;
        arcs.binary_search_by_key(&tile, |&(t, _)| t)
            .ok()
            .map(|i| arcs[i].1)
    }

    // case-insensitive.
    pub fn lookup(&self, word: &str) -> Lookup {
        self.lookup_tiles(word.as_bytes())
    }

    pub fn lookup_tiles(&self, word: &[u8]) -> Lookup {
        let mut p = Self::ROOT;
        for (i, &tile) in word.iter().enumerate() {
            match self.seek(p, tile.to_ascii_uppercase()) {
                Some(q) => p = q,
                None => {
                    return Lookup::NotFound {
                        longest_valid_prefix: Some(i),
                    };
                }
            }
        }
        if self[p].accepts {
            Lookup::Found
        } else {
            Lookup::NotFound {
                longest_valid_prefix: None,
            }
        }
    }

    #[inline(always)]
    pub fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_found()
    }

    #[inline(always)]
    pub fn num_words(&self) -> usize {
        self.num_words
    }

    // every arc leads to exactly one non-root node.
    #[inline(always)]
    pub fn num_arcs(&self) -> usize {
        self.nodes.len() - 1
    }

    // visits words in tile order, not descending past max_len.
    pub fn for_each_word<F: FnMut(&[u8])>(&self, max_len: usize, mut f: F) {
        struct Env<'a, F: FnMut(&[u8])> {
            trie: &'a Trie,
            word: Vec<u8>,
            max_len: usize,
            f: &'a mut F,
        }
        fn iter<F: FnMut(&[u8])>(env: &mut Env<F>, p: u32) {
            if env.trie[p].accepts {
                (env.f)(&env.word);
            }
            if env.word.len() >= env.max_len {
                return;
            }
            for &(tile, q) in env.trie[p].arcs() {
                env.word.push(tile);
                iter(env, q);
                env.word.pop();
            }
        }
        iter(
            &mut Env {
                trie: self,
                word: Vec::new(),
                max_len,
                f: &mut f,
            },
            Self::ROOT,
        );
    }

    pub fn words(&self) -> Vec<String> {
        let mut ret = Vec::with_capacity(self.num_words);
        self.for_each_word(usize::MAX, |w| {
            ret.push(String::from_utf8_lossy(w).into_owned())
        });
        ret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Trie {
        Trie::from_words(["cat", "CATS", "at", "Act", "cart"])
    }

    #[test]
    fn inserted_words_are_found() {
        let trie = small();
        for word in ["CAT", "CATS", "AT", "ACT", "CART", "cat", "Cart"] {
            assert_eq!(trie.lookup(word), Lookup::Found, "{}", word);
        }
        assert_eq!(trie.num_words(), 5);
    }

    #[test]
    fn insert_is_idempotent() {
        let mut trie = small();
        let arcs = trie.num_arcs();
        trie.insert("CAT");
        trie.insert("cats");
        assert_eq!(trie.num_words(), 5);
        assert_eq!(trie.num_arcs(), arcs);
    }

    #[test]
    fn missing_character_reports_prefix() {
        let trie = small();
        assert_eq!(
            trie.lookup("CAB"),
            Lookup::NotFound {
                longest_valid_prefix: Some(2)
            }
        );
        assert_eq!(
            trie.lookup("DOG"),
            Lookup::NotFound {
                longest_valid_prefix: Some(0)
            }
        );
        assert_eq!(
            trie.lookup("CATSX"),
            Lookup::NotFound {
                longest_valid_prefix: Some(4)
            }
        );
    }

    #[test]
    fn inner_node_is_not_a_word() {
        let trie = small();
        assert_eq!(
            trie.lookup("CA"),
            Lookup::NotFound {
                longest_valid_prefix: None
            }
        );
        assert_eq!(
            trie.lookup(""),
            Lookup::NotFound {
                longest_valid_prefix: None
            }
        );
    }

    #[test]
    fn prefix_never_exceeds_common_prefix() {
        let words = ["QUIZ", "QUIT", "ZEBRA", "ZEN"];
        let trie = Trie::from_words(words);
        for probe in ["QUA", "QUIX", "ZEBU", "ZZZ", "XYZZY", "ZENITH"] {
            let common = words
                .iter()
                .map(|w| {
                    w.bytes()
                        .zip(probe.bytes())
                        .take_while(|(a, b)| a == b)
                        .count()
                })
                .max()
                .unwrap();
            match trie.lookup(probe) {
                Lookup::NotFound {
                    longest_valid_prefix: Some(p),
                } => assert!(p <= common, "{} {} {}", probe, p, common),
                other => panic!("{}: {:?}", probe, other),
            }
        }
    }

    #[test]
    fn empty_word_is_never_inserted() {
        let mut trie = Trie::new();
        trie.insert("");
        assert_eq!(trie.num_words(), 0);
        assert!(!trie[Trie::ROOT].accepts());
    }

    #[test]
    fn enumerates_in_order() {
        let trie = small();
        assert_eq!(trie.words(), ["ACT", "AT", "CART", "CAT", "CATS"]);
        let mut short = Vec::new();
        trie.for_each_word(3, |w| short.push(w.to_vec()));
        assert_eq!(short, [b"ACT".to_vec(), b"AT".to_vec(), b"CAT".to_vec()]);
    }

    #[test]
    fn word_list_skips_blank_lines() {
        let trie = Trie::from_word_list("cat\n\n  at \r\nzebra\n");
        assert_eq!(trie.words(), ["AT", "CAT", "ZEBRA"]);
    }
}
