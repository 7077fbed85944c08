// Copyright (C) 2020-2026 Andy Kurnia.

use rand::prelude::*;
use tilesearch::{bag, board, display, error, game_config, movegen, rack, trie};

struct Player {
    rack: Vec<u8>,
    score: i32,
}

fn print_scores(players: &[Player]) {
    for (i, player) in (1..).zip(players.iter()) {
        print!("player {}: {}, ", i, player.score);
    }
}

fn main() -> error::Returns<()> {
    env_logger::init();
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() < 2 {
        println!(
            "args:
  lexicon.txt [seed] [games]
    self-play using the highest scoring move every turn"
        );
        return Ok(());
    }
    let lexicon = trie::Trie::from_word_list(&std::fs::read_to_string(&args[1])?);
    let seed = match args.get(2) {
        Some(s) => Some(s.parse::<u64>()?),
        None => None,
    };
    let num_games = match args.get(3) {
        Some(s) => s.parse::<usize>()?,
        None => 1,
    };
    log::info!("lexicon {}: {} words", args[1], lexicon.num_words());

    let game_config = &game_config::make_common_english_game_config();
    let alphabet = game_config.alphabet();
    let board_layout = game_config.board_layout();
    let rack_size = game_config.rack_size() as usize;
    let num_threads = num_cpus::get();
    let mut rng = match seed {
        Some(seed) => rand_chacha::ChaCha20Rng::seed_from_u64(seed),
        None => rand_chacha::ChaCha20Rng::from_os_rng(),
    };

    for game_num in 1..=num_games {
        println!("\nplaying self, game {}", game_num);
        let mut board = board::Board::new(board_layout)?;
        let mut bag = bag::Bag::new(alphabet);
        let mut players = (0..2)
            .map(|_| Player {
                rack: Vec::new(),
                score: 0,
            })
            .collect::<Vec<_>>();
        for player in players.iter_mut() {
            bag.replenish(&mut rng, &mut player.rack, rack_size);
        }
        let mut turn = 0;
        let mut zero_turns = 0;

        loop {
            display::print_board(board_layout, &board);
            print_scores(&players);
            println!("turn: player {}", turn + 1);
            println!("pool {:2}: {}", bag.remaining(), alphabet.fmt_rack(&bag.0));
            for (i, player) in (1..).zip(players.iter()) {
                println!("p{} rack: {}", i, alphabet.fmt_rack(&player.rack));
            }

            let best = movegen::find_best_move_threaded(
                &movegen::BoardSnapshot {
                    board: &board,
                    game_config,
                    lexicon: &lexicon,
                },
                &players[turn].rack,
                num_threads,
            )?;
            println!("making top move: {}", best.fmt(board.dim()));

            if best.is_pass() {
                zero_turns += 1;
            } else {
                zero_turns = 0;
                board.apply_play(best.anchor, best.down, best.tiles.as_bytes())?;
                let player = &mut players[turn];
                rack::use_tiles(&mut player.rack, best.tiles.bytes())?;
                player.score += best.score;
                bag.replenish(&mut rng, &mut player.rack, rack_size);
            }

            if players[turn].rack.is_empty() {
                display::print_board(board_layout, &board);
                print_scores(&players);
                println!("player {} went out (scores are before leftovers)", turn + 1);
                let leftover = alphabet.rack_score(&players[1 - turn].rack);
                players[turn].score += 2 * leftover;
                break;
            }

            if zero_turns >= players.len() * 3 {
                display::print_board(board_layout, &board);
                print_scores(&players);
                println!(
                    "player {} ended game by making yet another zero score",
                    turn + 1
                );
                for player in players.iter_mut() {
                    player.score -= alphabet.rack_score(&player.rack);
                }
                break;
            }

            turn = 1 - turn;
        }

        print_scores(&players);
        println!("final scores");
    }

    Ok(())
}
