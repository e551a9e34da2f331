use anyhow::Context;
use argh::FromArgs;
use msh::Interpreter;
use msh::command::Io;
use msh::config::{DEFAULT_LINE_CAPACITY, DEFAULT_PROMPT, ShellConfig};
use msh::reader::{EditorReader, LineReader, StreamReader};
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(FromArgs)]
/// A minimal interactive shell.
struct Options {
    /// text shown before each command line
    #[argh(option, default = "DEFAULT_PROMPT.to_string()")]
    prompt: String,

    /// stop once standard input is exhausted instead of waiting for `exit`
    #[argh(switch)]
    exit_on_eof: bool,

    /// read raw lines from stdin even when it is a terminal
    #[argh(switch)]
    plain: bool,

    /// log dispatch decisions and child exit statuses; RUST_LOG takes precedence
    #[argh(switch, short = 'v')]
    verbose: bool,
}

impl Options {
    fn config(&self) -> ShellConfig {
        ShellConfig {
            prompt: self.prompt.clone(),
            line_capacity: DEFAULT_LINE_CAPACITY,
            exit_on_eof: self.exit_on_eof,
        }
    }

    fn log_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(if self.verbose { "debug" } else { "warn" })
        })
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let options: Options = argh::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(options.log_filter())
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let config = options.config();
    let mut reader: Box<dyn LineReader> = if !options.plain && io::stdin().is_terminal() {
        Box::new(EditorReader::new().context("failed to initialise line editor")?)
    } else {
        Box::new(StreamReader::new(
            io::stdin().lock(),
            io::stdout(),
            config.line_capacity,
        ))
    };

    let (mut out, mut err) = (io::stdout(), io::stderr());
    let shell = Interpreter::new(config);
    let status = shell.run(reader.as_mut(), &mut Io::new(&mut out, &mut err));
    Ok(ExitCode::from(status))
}
