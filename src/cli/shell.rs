use std::{
    borrow::Cow,
    fmt,
    io::{self, BufRead, Lines, StdinLock},
};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::{ValidationContext, ValidationResult, Validator},
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};

use crate::cli::core::{CliError, CliMode, CommandError, LoopControl, ShellContext};
use crate::cli::output;
use crate::ledger::Category;

const SCRIPT_ENV: &str = "BUDGET_TRACKER_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;
    if let Err(err) = context.startup() {
        context.report_error(err)?;
    }

    let mut source = match mode {
        CliMode::Interactive => {
            output::hint("Type `help` to list commands.");
            LineSource::editor(context.command_names())?
        }
        CliMode::Script => LineSource::Script(io::stdin().lock().lines()),
    };
    run_loop(&mut context, &mut source)
}

/// Where command lines come from.
enum LineSource {
    Editor(Box<Editor<CommandHelper, DefaultHistory>>),
    Script(Lines<StdinLock<'static>>),
}

enum NextLine {
    Line(String),
    Interrupted,
    Finished,
}

impl LineSource {
    fn editor(commands: Vec<&'static str>) -> Result<Self, CliError> {
        let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
        editor.set_helper(Some(CommandHelper::new(commands)));
        editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);
        Ok(Self::Editor(Box::new(editor)))
    }

    fn next_line(&mut self, prompt: &str) -> Result<NextLine, CliError> {
        match self {
            Self::Editor(editor) => match editor.readline(prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        editor.add_history_entry(line.trim()).ok();
                    }
                    Ok(NextLine::Line(line))
                }
                Err(ReadlineError::Interrupted) => Ok(NextLine::Interrupted),
                Err(ReadlineError::Eof) => Ok(NextLine::Finished),
                Err(err) => Err(err.into()),
            },
            Self::Script(lines) => match lines.next() {
                Some(line) => Ok(NextLine::Line(line?)),
                None => Ok(NextLine::Finished),
            },
        }
    }
}

fn run_loop(context: &mut ShellContext, source: &mut LineSource) -> Result<(), CliError> {
    while context.running {
        let prompt = context.prompt();
        match source.next_line(&prompt)? {
            NextLine::Line(line) => match handle_line(context, &line) {
                Ok(LoopControl::Continue) => {}
                Ok(LoopControl::Exit) => break,
                Err(err) => context.report_error(err)?,
            },
            NextLine::Interrupted => {
                if context.confirm_exit()? {
                    break;
                }
            }
            NextLine::Finished => {
                if context.mode == CliMode::Interactive {
                    output::info("Exiting shell.");
                }
                break;
            }
        }
    }
    Ok(())
}

fn handle_line(context: &mut ShellContext, line: &str) -> Result<LoopControl, CommandError> {
    let tokens = match parse_command_line(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            output::warning(err);
            return Ok(LoopControl::Continue);
        }
    };

    // Blank lines and `#` comments are skipped so scripts can be annotated.
    let Some(first) = tokens.first().filter(|word| !word.starts_with('#')) else {
        return Ok(LoopControl::Continue);
    };
    let command = first.to_lowercase();
    let args: Vec<&str> = tokens[1..].iter().map(String::as_str).collect();

    let outcome = context.dispatch(&command, first, &args);
    if matches!(outcome, Ok(LoopControl::Exit)) {
        context.running = false;
    }
    outcome
}

/// Tab completion for command words and the category argument of `expense`.
struct CommandHelper {
    commands: Vec<String>,
}

impl CommandHelper {
    fn new(words: Vec<&'static str>) -> Self {
        let mut commands: Vec<String> = words
            .into_iter()
            .map(|word| word.to_ascii_lowercase())
            .collect();
        commands.sort();
        commands.dedup();
        Self { commands }
    }

    fn candidates(&self, before: &[&str], needle: &str) -> Vec<Pair> {
        let needle = needle.to_ascii_lowercase();
        let pool: Vec<&str> = match before {
            [] => self.commands.iter().map(String::as_str).collect(),
            [command, _amount] if command.eq_ignore_ascii_case("expense") => {
                Category::ALL.iter().map(|category| category.key()).collect()
            }
            _ => Vec::new(),
        };
        pool.into_iter()
            .filter(|word| word.starts_with(&needle))
            .map(|word| Pair {
                display: word.to_string(),
                replacement: word.to_string(),
            })
            .collect()
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = prefix
            .char_indices()
            .rev()
            .find(|(_, ch)| ch.is_whitespace())
            .map(|(idx, ch)| idx + ch.len_utf8())
            .unwrap_or(0);
        let before: Vec<&str> = prefix[..start].split_whitespace().collect();
        Ok((start, self.candidates(&before, &prefix[start..])))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for CommandHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        Ok(ValidationResult::Valid(None))
    }
}

/// Splits a line into words, honouring shell-style quoting.
pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, ParseError> {
    shell_words::split(input).map_err(|err| ParseError(err.to_string()))
}

#[derive(Debug)]
pub(crate) struct ParseError(String);

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not read command: {}", self.0)
    }
}
