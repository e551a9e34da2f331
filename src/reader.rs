//! Acquiring one line of input per loop iteration.

use crate::error::ShellError;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{BufRead, Read, Write};
use tracing::{trace, warn};

/// What ended a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// A `\n` byte, which is not part of the line.
    Newline,
    /// End of input; nothing more will be read.
    Eof,
}

/// One raw line of input, without its terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// The line's text, lossily decoded as UTF-8.
    pub text: String,
    pub terminator: Terminator,
}

impl Line {
    /// Whether input ended with this line.
    pub fn at_eof(&self) -> bool {
        self.terminator == Terminator::Eof
    }
}

/// Source of command lines for the read loop.
pub trait LineReader {
    /// Show `prompt` and block until a full line (or end of input) is available.
    ///
    /// End of input is not an error: it yields whatever was read so far,
    /// possibly an empty line, tagged with [`Terminator::Eof`].
    fn read_line(&mut self, prompt: &str) -> Result<Line, ShellError>;
}

/// Byte-at-a-time reader over any buffered stream.
///
/// The line buffer starts at a fixed capacity and doubles whenever it fills
/// up. Failure to grow it is reported as [`ShellError::Allocation`].
pub struct StreamReader<R, W> {
    input: R,
    prompt_out: W,
    initial_capacity: usize,
}

impl<R: BufRead, W: Write> StreamReader<R, W> {
    /// Read from `input`, writing prompts to `prompt_out`.
    pub fn new(input: R, prompt_out: W, initial_capacity: usize) -> Self {
        Self {
            input,
            prompt_out,
            initial_capacity: initial_capacity.max(1),
        }
    }

    fn read_raw(&mut self) -> Result<(Vec<u8>, Terminator), ShellError> {
        let mut buf: Vec<u8> = Vec::new();
        buf.try_reserve_exact(self.initial_capacity)?;

        for byte in self.input.by_ref().bytes() {
            let byte = byte.map_err(ShellError::Input)?;
            if byte == b'\n' {
                return Ok((buf, Terminator::Newline));
            }
            if buf.len() == buf.capacity() {
                let grow_by = buf.capacity();
                buf.try_reserve_exact(grow_by)?;
                trace!(capacity = buf.capacity(), "line buffer grown");
            }
            buf.push(byte);
        }
        Ok((buf, Terminator::Eof))
    }
}

impl<R: BufRead, W: Write> LineReader for StreamReader<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Line, ShellError> {
        self.prompt_out
            .write_all(prompt.as_bytes())
            .and_then(|()| self.prompt_out.flush())
            .map_err(ShellError::Input)?;

        let (raw, terminator) = self.read_raw()?;
        let text = match String::from_utf8(raw) {
            Ok(text) => text,
            Err(e) => {
                warn!("input line is not valid UTF-8, replacing invalid bytes");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        Ok(Line { text, terminator })
    }
}

/// Interactive reader with line editing and in-memory history.
pub struct EditorReader {
    editor: DefaultEditor,
}

impl EditorReader {
    /// Set up a line editor on the controlling terminal.
    pub fn new() -> rustyline::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> Result<Line, ShellError> {
        match self.editor.readline(prompt) {
            Ok(text) => {
                if !text.trim().is_empty() {
                    // A lost history entry leaves the line itself intact.
                    if let Err(e) = self.editor.add_history_entry(text.as_str()) {
                        warn!("failed to add history entry: {e}");
                    }
                }
                Ok(Line {
                    text,
                    terminator: Terminator::Newline,
                })
            }
            Err(ReadlineError::Eof) => Ok(Line {
                text: String::new(),
                terminator: Terminator::Eof,
            }),
            // Ctrl-C abandons the line being edited.
            Err(ReadlineError::Interrupted) => Ok(Line {
                text: String::new(),
                terminator: Terminator::Newline,
            }),
            Err(ReadlineError::Io(e)) => Err(ShellError::Input(e)),
            Err(e) => Err(ShellError::Input(std::io::Error::other(e))),
        }
    }
}
