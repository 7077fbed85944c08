// Copyright (C) 2020-2026 Andy Kurnia.

#[macro_use]
pub mod error;

pub mod alphabet;
pub mod bag;
pub mod board;
pub mod board_layout;
pub mod candidates;
pub mod display;
pub mod game_config;
pub mod matrix;
pub mod movegen;
pub mod play_scorer;
pub mod rack;
pub mod stats;
pub mod trie;
