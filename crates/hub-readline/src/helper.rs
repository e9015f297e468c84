use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use hub_core::routing::ROUTES;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::commands::COMMAND_NAMES;

/// Rustyline helper completing command names and, after `go`, route paths.
#[derive(Clone)]
pub struct ShellHelper {
    commands: Vec<String>,
    paths: Vec<String>,
}

impl ShellHelper {
    pub fn new() -> Self {
        Self {
            commands: COMMAND_NAMES.iter().map(|c| c.to_string()).collect(),
            paths: ROUTES.iter().map(|r| r.path.to_string()).collect(),
        }
    }

    fn candidates(&self, line: &str) -> (usize, Vec<&String>) {
        match line.strip_prefix("go ") {
            Some(partial) => {
                let start = line.len() - partial.len();
                let found = self.paths.iter().filter(|p| p.starts_with(partial)).collect();
                (start, found)
            }
            None => {
                let found = self
                    .commands
                    .iter()
                    .filter(|c| c.starts_with(line))
                    .collect();
                (0, found)
            }
        }
    }
}

impl Helper for ShellHelper {}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if line.contains(' ') && !line.starts_with("go ") {
            return Ok((pos, vec![]));
        }

        let (start, found) = self.candidates(line);
        let pairs = found
            .into_iter()
            .map(|c| Pair {
                display: c.clone(),
                replacement: c.clone(),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Highlighter for ShellHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        match line.split_once(' ') {
            Some((name, rest)) if self.commands.iter().any(|c| c == name) => {
                Owned(format!("{} {}", name.bright_cyan(), rest))
            }
            None if self.commands.iter().any(|c| c == line) => {
                Owned(line.bright_cyan().to_string())
            }
            _ => Borrowed(line),
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ShellHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if line.is_empty() || (line.contains(' ') && !line.starts_with("go ")) {
            return None;
        }

        let (start, found) = self.candidates(line);
        let typed = &line[start..];
        found
            .into_iter()
            .find(|c| c.len() > typed.len())
            .map(|c| c[typed.len()..].to_string())
    }
}

impl Validator for ShellHelper {}
