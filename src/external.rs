use crate::command::{Flow, Io};
use crate::error::ShellError;
use std::io::ErrorKind;
use std::process::{Command, ExitStatus};
use tracing::debug;

/// Run `args[0]` as a child process with `args[1..]` as its arguments and
/// wait for it to exit or be killed by a signal.
///
/// The program is looked up through `PATH` unless it contains a path
/// separator. The child inherits stdin, stdout, stderr, the environment and
/// the working directory. Its exit status is only logged; success and failure
/// alike return [`Flow::Continue`].
///
/// Failing to start the program is reported as an error. The parent is the
/// only process that sees it: std creates the child and replaces its image
/// in one step, so a failed exec never resumes shell code in the child.
pub fn launch(args: &[&str], _io: &mut Io<'_>) -> Result<Flow, ShellError> {
    let Some((program, rest)) = args.split_first() else {
        return Ok(Flow::Continue);
    };

    let mut child = Command::new(program)
        .args(rest)
        .spawn()
        .map_err(|source| launch_error(program, source))?;
    debug!(pid = child.id(), program, "spawned child");

    let status = child.wait().map_err(|source| ShellError::Launch {
        program: (*program).to_string(),
        source,
    })?;
    match status.code() {
        Some(code) => debug!(program, code, "child exited"),
        None => debug!(
            program,
            code = terminated_by_signal(status),
            "child terminated by signal"
        ),
    }
    Ok(Flow::Continue)
}

fn launch_error(program: &str, source: std::io::Error) -> ShellError {
    if source.kind() == ErrorKind::NotFound && !program.contains('/') {
        ShellError::CommandNotFound(program.to_string())
    } else {
        ShellError::Launch {
            program: program.to_string(),
            source,
        }
    }
}

/// Shell-style status for a child that did not exit normally: 128 + signal.
#[cfg(unix)]
pub fn terminated_by_signal(exit_status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    exit_status.signal().map_or(-1, |signal| 128 + signal)
}

#[cfg(not(unix))]
pub fn terminated_by_signal(_exit_status: ExitStatus) -> i32 {
    -1
}
