// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet;
use rand::prelude::*;

pub struct Bag(pub Vec<u8>);

impl Bag {
    pub fn new(alphabet: &alphabet::Alphabet) -> Bag {
        let mut bag = Vec::with_capacity(alphabet.num_tiles() as usize);
        for i in 0..alphabet.len() {
            let letter = alphabet.letter(i);
            for _ in 0..alphabet.freq(letter) {
                bag.push(letter);
            }
        }
        Bag(bag)
    }

    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.0.len()
    }

    // order of the bag is irrelevant, so each tile is taken with a swap_remove.
    pub fn draw(&mut self, rng: &mut dyn RngCore, amount: usize) -> Vec<u8> {
        let amount = amount.min(self.0.len());
        let mut tiles = Vec::with_capacity(amount);
        for _ in 0..amount {
            let idx = rng.random_range(0..self.0.len());
            tiles.push(self.0.swap_remove(idx));
        }
        tiles
    }

    // tops up the rack to rack_size, or as far as the bag allows.
    pub fn replenish(&mut self, rng: &mut dyn RngCore, rack: &mut Vec<u8>, rack_size: usize) {
        let wanted = rack_size.saturating_sub(rack.len());
        rack.extend(self.draw(rng, wanted));
    }
}

impl Clone for Bag {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }

    #[inline(always)]
    fn clone_from(&mut self, source: &Self) {
        self.0.clone_from(&source.0);
    }
}
