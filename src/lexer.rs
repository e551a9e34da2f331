//! Splitting a command line into whitespace-delimited tokens.

use crate::error::ShellError;
use std::ops::Deref;

/// Characters that separate tokens: space, tab, carriage return, newline and bell.
pub const DELIMITERS: [char; 5] = [' ', '\t', '\r', '\n', '\x07'];

/// Number of token slots allocated up front, and added each time they run out.
pub const TOKEN_CHUNK: usize = 64;

/// Tokens of one command line, borrowed from the line they were split from.
///
/// The first token is the command name; the rest are its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tokens<'a> {
    items: Vec<&'a str>,
}

impl<'a> Tokens<'a> {
    /// The command name, or `None` for a blank line.
    pub fn command(&self) -> Option<&'a str> {
        self.items.first().copied()
    }

    /// The full token list, command name included.
    pub fn args(&self) -> &[&'a str] {
        &self.items
    }

    fn push(&mut self, token: &'a str) -> Result<(), ShellError> {
        if self.items.len() == self.items.capacity() {
            self.items.try_reserve_exact(TOKEN_CHUNK)?;
        }
        self.items.push(token);
        Ok(())
    }
}

impl<'a> Deref for Tokens<'a> {
    type Target = [&'a str];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

/// Split `line` on runs of [`DELIMITERS`].
///
/// Only non-empty tokens are produced, so any amount or mix of whitespace
/// collapses to a single separator and a blank line yields no tokens.
pub fn split_line(line: &str) -> Result<Tokens<'_>, ShellError> {
    let mut tokens = Tokens::default();
    tokens.items.try_reserve_exact(TOKEN_CHUNK)?;

    for token in line.split(DELIMITERS).filter(|t| !t.is_empty()) {
        tokens.push(token)?;
    }
    Ok(tokens)
}
