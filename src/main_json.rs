// Copyright (C) 2020-2026 Andy Kurnia.

use std::io::Read;
use tilesearch::{board, display, error, game_config, movegen, rack, return_error, trie};

// lexicon: path to a word list, one word per line.
// board: 15 strings of 15 tokens each, in board snapshot format
//   (A-Z letters, 1-4 for bonus squares, '.' for empty).
// rack: up to 7 letters.
// threads: defaults to the number of cpus.
#[derive(serde::Deserialize)]
struct Question {
    lexicon: String,
    board: Vec<String>,
    rack: String,
    #[serde(default)]
    threads: Option<usize>,
}

fn main() -> error::Returns<()> {
    env_logger::init();
    let data = match std::env::args().nth(1) {
        Some(path) if path != "-" => std::fs::read_to_string(path)?,
        _ => {
            let mut s = String::new();
            std::io::stdin().read_to_string(&mut s)?;
            s
        }
    };
    let question = serde_json::from_str::<Question>(&data)?;

    let game_config = game_config::make_common_english_game_config();
    let alphabet = game_config.alphabet();
    let board_layout = game_config.board_layout();

    let expected_dim = board_layout.dim();
    if question.board.len() != expected_dim.rows as usize {
        return_error!(format!(
            "board: need {} rows, found {} rows",
            expected_dim.rows,
            question.board.len()
        ));
    }
    let board = board::Board::from_snapshot(board_layout, &question.board.join("\n"))?;
    let rack = rack::parse_rack(alphabet, &question.rack, game_config.rack_size() as usize)?;

    // note: this allocates
    let mut available_tally = (0..alphabet.len())
        .map(|i| alphabet.freq(alphabet.letter(i)))
        .collect::<Box<_>>();
    let dim = board.dim();
    let board_letters = (0..dim.rows)
        .flat_map(|row| (0..dim.cols).map(move |col| dim.at_row_col(row, col)))
        .filter_map(|idx| board.letter(idx));
    for tile in board_letters.chain(rack.iter().copied()) {
        let i = (tile - b'A') as usize;
        if available_tally[i] > 0 {
            available_tally[i] -= 1;
        } else {
            return_error!(format!(
                "too many tile {} (bag contains only {})",
                tile as char,
                alphabet.freq(tile),
            ));
        }
    }

    let lexicon = trie::Trie::from_word_list(&std::fs::read_to_string(&question.lexicon)?);
    log::info!("lexicon {}: {} words", question.lexicon, lexicon.num_words());

    let board_snapshot = &movegen::BoardSnapshot {
        board: &board,
        game_config: &game_config,
        lexicon: &lexicon,
    };
    display::print_board(board_layout, &board);

    let best = movegen::find_best_move_threaded(
        board_snapshot,
        &rack,
        question.threads.unwrap_or_else(num_cpus::get),
    )?;
    println!("{}", best.fmt(dim));

    // across plays: down=false, row and col of the first new tile (0-based).
    // down plays: down=true, same.
    let mut ret = serde_json::to_value(&best)?;
    if let Some(obj) = ret.as_object_mut() {
        if best.is_pass() {
            obj.insert("action".into(), "pass".into());
        } else {
            obj.insert("action".into(), "play".into());
            if let Some((row, col)) = dim.row_col(best.anchor) {
                obj.insert("row".into(), row.into());
                obj.insert("col".into(), col.into());
            }
            obj.insert("coord".into(), best.fmt_coord(dim).into());
        }
    }
    println!("{}", ret);
    println!("{}", serde_json::to_string_pretty(&ret)?);

    Ok(())
}
