//! A minimal interactive shell.
//!
//! Each input line is split on whitespace into a command and its arguments.
//! The command is either one of a small fixed set of builtins (`cd`, `help`,
//! `exit`) executed in-process, or an external program launched as a child
//! process that the shell waits on before prompting again.
//!
//! The main entry point is [`Interpreter`], which dispatches token lists and
//! drives the read loop over any [`LineReader`](reader::LineReader).

pub mod builtin;
pub mod command;
pub mod config;
pub mod error;
pub mod external;
mod interpreter;
pub mod lexer;
pub mod reader;

#[cfg(test)]
mod test_support;

/// Re-export of the command loop.
///
/// See [`Interpreter`] for the high-level API and examples.
pub use interpreter::{EXIT_FAILURE, EXIT_SUCCESS, Interpreter};
