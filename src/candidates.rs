// Copyright (C) 2020-2026 Andy Kurnia.

// Every distinct ordering of every distinct sub-multiset of a rack, as a trie
// so that orderings sharing a prefix share a path.

use super::{error, trie};

fn check_bounds(rack: &[u8], min: usize, max: usize) -> error::Returns<()> {
    if min < 1 || min > max || max > rack.len() {
        return_error!(format!(
            "invalid length bounds [{}, {}] for a rack of {} tiles",
            min,
            max,
            rack.len()
        ));
    }
    Ok(())
}

// distinct sub-multisets with length in [min, max], each sorted.
pub fn subsets(rack: &[u8], min: usize, max: usize) -> error::Returns<Vec<Vec<u8>>> {
    check_bounds(rack, min, max)?;
    let mut sorted = rack.to_vec();
    sorted.sort_unstable();

    struct Env<'a> {
        sorted: &'a [u8],
        min: usize,
        max: usize,
        current: Vec<u8>,
        out: Vec<Vec<u8>>,
    }
    fn iter(env: &mut Env, start: usize) {
        if env.current.len() >= env.min {
            env.out.push(env.current.clone());
        }
        if env.current.len() >= env.max {
            return;
        }
        for i in start..env.sorted.len() {
            // equal tiles at the same depth would repeat the same subset.
            if i > start && env.sorted[i] == env.sorted[i - 1] {
                continue;
            }
            env.current.push(env.sorted[i]);
            iter(env, i + 1);
            env.current.pop();
        }
    }
    let mut env = Env {
        sorted: &sorted,
        min,
        max,
        current: Vec::with_capacity(max),
        out: Vec::new(),
    };
    iter(&mut env, 0);
    Ok(env.out)
}

// distinct orderings of tiles.
pub fn permutations(tiles: &[u8]) -> Vec<Vec<u8>> {
    let mut sorted = tiles.to_vec();
    sorted.sort_unstable();

    struct Env<'a> {
        sorted: &'a [u8],
        used: Vec<bool>,
        current: Vec<u8>,
        out: Vec<Vec<u8>>,
    }
    fn iter(env: &mut Env) {
        if env.current.len() == env.sorted.len() {
            env.out.push(env.current.clone());
            return;
        }
        for i in 0..env.sorted.len() {
            if env.used[i] {
                continue;
            }
            // take the first unused copy of a tile only.
            if i > 0 && env.sorted[i] == env.sorted[i - 1] && !env.used[i - 1] {
                continue;
            }
            env.used[i] = true;
            env.current.push(env.sorted[i]);
            iter(env);
            env.current.pop();
            env.used[i] = false;
        }
    }
    let mut env = Env {
        sorted: &sorted,
        used: vec![false; sorted.len()],
        current: Vec::with_capacity(sorted.len()),
        out: Vec::new(),
    };
    iter(&mut env);
    env.out
}

pub fn build(rack: &[u8], min: usize, max: usize) -> error::Returns<trie::Trie> {
    let mut candidates = trie::Trie::new();
    for subset in subsets(rack, min, max)? {
        for permutation in permutations(&subset) {
            candidates.insert_tiles(permutation);
        }
    }
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    fn strings(trie: &trie::Trie) -> Vec<String> {
        trie.words()
    }

    // every sequence drawable from the rack, straight from a tally.
    fn brute_force(rack: &[u8], min: usize, max: usize) -> Vec<String> {
        fn iter(tally: &mut [u8; 26], current: &mut Vec<u8>, min: usize, max: usize, out: &mut Vec<String>) {
            if current.len() >= min {
                out.push(String::from_utf8(current.clone()).unwrap());
            }
            if current.len() >= max {
                return;
            }
            for i in 0..26 {
                if tally[i] > 0 {
                    tally[i] -= 1;
                    current.push(b'A' + i as u8);
                    iter(tally, current, min, max, out);
                    current.pop();
                    tally[i] += 1;
                }
            }
        }
        let mut tally = [0u8; 26];
        for &tile in rack {
            tally[(tile - b'A') as usize] += 1;
        }
        let mut out = Vec::new();
        iter(&mut tally, &mut Vec::new(), min, max, &mut out);
        out
    }

    #[test]
    fn aab() {
        let candidates = build(b"AAB", 1, 3).unwrap();
        assert_eq!(
            strings(&candidates),
            ["A", "AA", "AAB", "AB", "ABA", "B", "BA", "BAA"]
        );
        assert_eq!(candidates.num_words(), 8);
    }

    #[test]
    fn aab_subsets_are_distinct() {
        assert_eq!(
            subsets(b"ABA", 1, 3).unwrap(),
            [
                b"A".to_vec(),
                b"AA".to_vec(),
                b"AAB".to_vec(),
                b"AB".to_vec(),
                b"B".to_vec()
            ]
        );
        assert_eq!(subsets(b"AAB", 2, 2).unwrap().len(), 2);
    }

    #[test]
    fn distinct_permutations() {
        assert_eq!(permutations(b"AAB").len(), 3);
        assert_eq!(permutations(b"ABCD").len(), 24);
        // 7! / (3! 2! 2!)
        assert_eq!(permutations(b"EEESSTT").len(), 210);
        assert_eq!(permutations(b"").len(), 1);
    }

    #[test]
    fn window_is_respected() {
        let candidates = build(b"CAT", 2, 2).unwrap();
        assert_eq!(strings(&candidates), ["AC", "AT", "CA", "CT", "TA", "TC"]);
    }

    #[test]
    fn bad_bounds_are_rejected() {
        assert!(build(b"CAT", 0, 2).is_err());
        assert!(build(b"CAT", 3, 2).is_err());
        assert!(build(b"CAT", 1, 4).is_err());
        assert!(build(b"", 1, 1).is_err());
    }

    #[test]
    fn matches_brute_force_on_random_racks() {
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(2026);
        for _ in 0..60 {
            let len = rng.random_range(1..=7);
            // few distinct letters so that duplicates are common.
            let rack = (0..len)
                .map(|_| b'A' + rng.random_range(0..4u8))
                .collect::<Vec<u8>>();
            let min = rng.random_range(1..=len);
            let max = rng.random_range(min..=len);
            let mut expected = brute_force(&rack, min, max);
            expected.sort_unstable();
            assert_eq!(
                strings(&build(&rack, min, max).unwrap()),
                expected,
                "{:?} [{}, {}]",
                String::from_utf8_lossy(&rack),
                min,
                max
            );
        }
    }
}
