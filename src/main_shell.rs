// Copyright (C) 2020-2026 Andy Kurnia.

mod rlhelper;

use tilesearch::{board, display, error, game_config, movegen, rack, return_error, trie};

struct Shell<'a> {
    game_config: &'a game_config::GameConfig<'a>,
    lexicon: Option<trie::Trie>,
    board: board::Board,
    rack: Vec<u8>,
    last_best: Option<movegen::Move>,
    num_threads: usize,
}

impl<'a> Shell<'a> {
    fn new(game_config: &'a game_config::GameConfig<'a>) -> error::Returns<Self> {
        Ok(Self {
            game_config,
            lexicon: None,
            board: board::Board::new(game_config.board_layout())?,
            rack: Vec::new(),
            last_best: None,
            num_threads: num_cpus::get(),
        })
    }

    fn lexicon(&self) -> error::Returns<&trie::Trie> {
        match &self.lexicon {
            Some(lexicon) => Ok(lexicon),
            None => {
                return_error!("no lexicon loaded, try: lexicon words.txt".into());
            }
        }
    }

    fn show(&self) {
        let alphabet = self.game_config.alphabet();
        display::print_board(self.game_config.board_layout(), &self.board);
        println!("rack: {}", alphabet.fmt_rack(&self.rack));
    }

    fn run(&mut self, strings: &[String]) -> error::Returns<()> {
        let alphabet = self.game_config.alphabet();
        match strings[0].as_str() {
            "help" => {
                println!(
                    "lexicon FILE      load a word list, one word per line
board [FILE]      load a board snapshot, or clear the board
rack LETTERS      set the rack
check WORD...     look words up in the lexicon
best              find the highest scoring move for the rack
play              apply the move found by best
place COORD TILES play these tiles, e.g. place 8h CAT or place h8 CAT
show              print the board and the rack
source FILE       run commands from a file
exit"
                );
            }
            "lexicon" => {
                let Some(path) = strings.get(1) else {
                    return_error!("need another arg".into());
                };
                let lexicon = trie::Trie::from_word_list(&std::fs::read_to_string(path)?);
                println!("{} words", lexicon.num_words());
                self.lexicon = Some(lexicon);
                self.last_best = None;
            }
            "board" => {
                let board_layout = self.game_config.board_layout();
                self.board = match strings.get(1) {
                    Some(path) => {
                        board::Board::from_snapshot(board_layout, &std::fs::read_to_string(path)?)?
                    }
                    None => board::Board::new(board_layout)?,
                };
                self.last_best = None;
                self.show();
            }
            "rack" => {
                self.rack = rack::parse_rack(
                    alphabet,
                    strings.get(1).map_or("", String::as_str),
                    self.game_config.rack_size() as usize,
                )?;
                self.last_best = None;
                println!("rack: {}", alphabet.fmt_rack(&self.rack));
            }
            "check" => {
                let lexicon = self.lexicon()?;
                for word in &strings[1..] {
                    println!(
                        "{} {}",
                        word.to_ascii_uppercase(),
                        if lexicon.contains(word) {
                            "is valid"
                        } else {
                            "is invalid"
                        }
                    );
                }
            }
            "best" => {
                let best = movegen::find_best_move_threaded(
                    &movegen::BoardSnapshot {
                        board: &self.board,
                        game_config: self.game_config,
                        lexicon: self.lexicon()?,
                    },
                    &self.rack,
                    self.num_threads,
                )?;
                println!("{}", best.fmt(self.board.dim()));
                self.last_best = Some(best);
            }
            "play" => {
                let Some(best) = self.last_best.take() else {
                    return_error!("nothing to play, try: best".into());
                };
                if best.is_pass() {
                    println!("pass");
                } else {
                    let mut rack = self.rack.clone();
                    rack::use_tiles(&mut rack, best.tiles.bytes())?;
                    self.board
                        .apply_play(best.anchor, best.down, best.tiles.as_bytes())?;
                    self.rack = rack;
                    println!("played {}", best.fmt(self.board.dim()));
                }
                self.show();
            }
            "place" => {
                let (Some(coord), Some(tiles)) = (strings.get(1), strings.get(2)) else {
                    return_error!("need coordinate and tiles, e.g. place 8h CAT".into());
                };
                let dim = self.board.dim();
                let (idx, down) = movegen::parse_coord(dim, coord)?;
                let tiles = tiles.to_ascii_uppercase();
                let played = movegen::score_placement(
                    &movegen::BoardSnapshot {
                        board: &self.board,
                        game_config: self.game_config,
                        lexicon: self.lexicon()?,
                    },
                    &self.rack,
                    idx,
                    down,
                    tiles.as_bytes(),
                )?;
                if played.score < 0 {
                    return_error!(format!("invalid word {}, try again", played.word));
                }
                let mut rack = self.rack.clone();
                rack::use_tiles(&mut rack, played.tiles.bytes())?;
                self.board
                    .apply_play(played.anchor, played.down, played.tiles.as_bytes())?;
                self.rack = rack;
                self.last_best = None;
                println!("played {}", played.fmt(dim));
                self.show();
            }
            "show" => {
                self.show();
            }
            _ => {
                println!("invalid input, help for help");
            }
        }
        Ok(())
    }
}

fn main() -> error::Returns<()> {
    env_logger::init();
    let game_config = game_config::make_common_english_game_config();
    let mut shell = Shell::new(&game_config)?;
    let mut rl = rlhelper::new_rl_editor()?;
    let mut cmd_stack = Vec::<(String, Option<(String, usize)>)>::new();
    loop {
        if let Some((line, source)) = cmd_stack.pop() {
            if let Some((filename, line_num)) = source {
                println!("{}:{}> {}", filename, line_num, line);
            }
            match shell_words::split(&line) {
                Ok(strings) => {
                    if !strings.is_empty() {
                        match strings[0].as_str() {
                            "exit" => {
                                break;
                            }
                            "source" => {
                                if strings.len() > 1 {
                                    match std::fs::read_to_string(&strings[1]) {
                                        Ok(whole_file) => {
                                            let v = cmd_stack.len();
                                            for (line_num, line) in whole_file.lines().enumerate() {
                                                cmd_stack.push((
                                                    line.to_string(),
                                                    Some((strings[1].clone(), line_num + 1)),
                                                ));
                                            }
                                            cmd_stack[v..].reverse();
                                        }
                                        Err(err) => {
                                            println!("cannot open file: {:?}", err);
                                        }
                                    }
                                } else {
                                    println!("need another arg");
                                }
                            }
                            _ => {
                                if let Err(err) = shell.run(&strings) {
                                    println!("error: {}", err);
                                }
                            }
                        }
                    }
                }
                Err(err) => {
                    println!("Bad quoting: {:?}", err);
                }
            }
        } else {
            match rl.readline(">> ") {
                Ok(line) => {
                    rl.add_history_entry(line.as_str())?;
                    cmd_stack.push((line, None));
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }
    }

    Ok(())
}
