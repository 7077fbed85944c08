// Copyright (C) 2020-2026 Andy Kurnia.

// https://github.com/kkawakam/rustyline/blob/master/examples/example.rs

pub static COMMANDS: &[&str] = &[
    "best", "board", "check", "exit", "help", "lexicon", "place", "play", "rack", "show",
    "source",
];

#[derive(rustyline_derive::Helper)]
pub struct MyHelper {
    completer: rustyline::completion::FilenameCompleter,
    highlighter: rustyline::highlight::MatchingBracketHighlighter,
    validator: rustyline::validate::MatchingBracketValidator,
    hinter: rustyline::hint::HistoryHinter,
    colored_prompt: String,
}

impl rustyline::completion::Completer for MyHelper {
    type Candidate = rustyline::completion::Pair;

    // command names first, file names for the arguments.
    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &rustyline::Context<'_>,
    ) -> Result<(usize, Vec<rustyline::completion::Pair>), rustyline::error::ReadlineError> {
        let head = &line[..pos];
        let start = head.len() - head.trim_start().len();
        if head[start..].contains(char::is_whitespace) {
            return self.completer.complete(line, pos, ctx);
        }
        let word = &head[start..];
        Ok((
            start,
            COMMANDS
                .iter()
                .filter(|cmd| cmd.starts_with(word))
                .map(|cmd| rustyline::completion::Pair {
                    display: cmd.to_string(),
                    replacement: format!("{} ", cmd),
                })
                .collect(),
        ))
    }
}

impl rustyline::hint::Hinter for MyHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &rustyline::Context<'_>) -> Option<String> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl rustyline::highlight::Highlighter for MyHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> std::borrow::Cow<'b, str> {
        if default {
            std::borrow::Cow::Borrowed(&self.colored_prompt)
        } else {
            std::borrow::Cow::Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> std::borrow::Cow<'h, str> {
        std::borrow::Cow::Owned("\x1b[1m".to_owned() + hint + "\x1b[m")
    }

    fn highlight<'l>(&self, line: &'l str, pos: usize) -> std::borrow::Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_char(
        &self,
        line: &str,
        pos: usize,
        kind: rustyline::highlight::CmdKind,
    ) -> bool {
        self.highlighter.highlight_char(line, pos, kind)
    }
}

impl rustyline::validate::Validator for MyHelper {
    fn validate(
        &self,
        ctx: &mut rustyline::validate::ValidationContext<'_>,
    ) -> rustyline::Result<rustyline::validate::ValidationResult> {
        self.validator.validate(ctx)
    }

    fn validate_while_typing(&self) -> bool {
        self.validator.validate_while_typing()
    }
}

pub type Editor = rustyline::Editor<MyHelper, rustyline::history::DefaultHistory>;

pub fn new_rl_editor() -> rustyline::Result<Editor> {
    let mut rl = Editor::new()?;
    rl.set_helper(Some(MyHelper {
        completer: rustyline::completion::FilenameCompleter::new(),
        highlighter: rustyline::highlight::MatchingBracketHighlighter::new(),
        hinter: rustyline::hint::HistoryHinter::new(),
        colored_prompt: ">> ".to_owned(),
        validator: rustyline::validate::MatchingBracketValidator::new(),
    }));
    Ok(rl)
}
