use crate::builtin;
use crate::command::{Flow, Io};
use crate::config::ShellConfig;
use crate::error::ShellError;
use crate::external;
use crate::lexer;
use crate::reader::LineReader;
use std::io::Write;
use tracing::{debug, trace};

/// Process exit status after `exit`.
pub const EXIT_SUCCESS: u8 = 0;
/// Process exit status after a fatal error.
pub const EXIT_FAILURE: u8 = 1;

fn report(io: &mut Io<'_>, e: &ShellError) {
    // Nowhere left to report a broken stderr.
    let _ = writeln!(io.err, "msh: {e}");
    let _ = io.err.flush();
}

/// The shell's command loop.
///
/// Each line is split into tokens and dispatched either to a builtin from
/// [`builtin::BUILTINS`] or to an external program. Nothing is carried over
/// from one line to the next except process-level state such as the
/// working directory.
///
/// Example
/// ```
/// use msh::Interpreter;
/// use msh::command::{Flow, Io};
///
/// let sh = Interpreter::default();
/// let (mut out, mut err) = (Vec::new(), Vec::new());
/// let mut io = Io::new(&mut out, &mut err);
/// assert_eq!(sh.execute_line("help", &mut io).unwrap(), Flow::Continue);
/// assert_eq!(sh.execute_line("exit now", &mut io).unwrap(), Flow::Stop);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    config: ShellConfig,
}

impl Interpreter {
    /// Create an interpreter with the given settings.
    pub fn new(config: ShellConfig) -> Self {
        Self { config }
    }

    /// Settings this interpreter was created with.
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Dispatch one token list.
    ///
    /// An empty list is a no-op. Builtins are matched first, in table order;
    /// anything else is launched as an external program. Command errors are
    /// printed to `io.err` and never stop the loop, so only `exit` yields
    /// [`Flow::Stop`].
    pub fn execute(&self, tokens: &[&str], io: &mut Io<'_>) -> Flow {
        let Some(&name) = tokens.first() else {
            return Flow::Continue;
        };

        let result = match builtin::lookup(name) {
            Some(b) => {
                debug!(command = name, "running builtin");
                (b.handler)(tokens, io)
            }
            None => {
                debug!(command = name, "launching external command");
                external::launch(tokens, io)
            }
        };

        match result {
            Ok(flow) => flow,
            Err(e) => {
                debug!(command = name, error = %e, "command failed");
                report(io, &e);
                Flow::Continue
            }
        }
    }

    /// Run [`repl`](Self::repl) to completion and turn its outcome into a
    /// process exit status.
    ///
    /// A fatal error is reported on `io.err` and yields [`EXIT_FAILURE`];
    /// a requested stop yields [`EXIT_SUCCESS`].
    pub fn run(&self, reader: &mut dyn LineReader, io: &mut Io<'_>) -> u8 {
        match self.repl(reader, io) {
            Ok(()) => EXIT_SUCCESS,
            Err(e) => {
                report(io, &e);
                EXIT_FAILURE
            }
        }
    }

    /// Tokenize `line` and dispatch it.
    ///
    /// Only fatal errors are returned; everything else is reported through
    /// [`execute`](Self::execute).
    pub fn execute_line(&self, line: &str, io: &mut Io<'_>) -> Result<Flow, ShellError> {
        let tokens = lexer::split_line(line)?;
        trace!(bytes = line.len(), tokens = tokens.len(), "line split");
        Ok(self.execute(&tokens, io))
    }

    /// Prompt, read, dispatch, repeat.
    ///
    /// Returns `Ok` once a command asks to stop, or at end of input when
    /// [`ShellConfig::exit_on_eof`] is set. Otherwise end of input is handled
    /// like an empty line and the loop keeps prompting. Fatal errors end the
    /// loop and are returned; recoverable ones are reported on `io.err` and
    /// the loop prompts again.
    pub fn repl(&self, reader: &mut dyn LineReader, io: &mut Io<'_>) -> Result<(), ShellError> {
        loop {
            let line = match reader.read_line(&self.config.prompt) {
                Ok(line) => line,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    report(io, &e);
                    continue;
                }
            };
            let flow = self.execute_line(&line.text, io)?;
            if flow.should_stop() {
                debug!("exit requested");
                return Ok(());
            }
            if line.at_eof() && self.config.exit_on_eof {
                debug!("end of input");
                return Ok(());
            }
        }
    }
}
