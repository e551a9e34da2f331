//! Commands executed in-process by the shell.

use crate::command::{Flow, Io};
use crate::error::ShellError;
use std::env;
use std::io::Write;

/// Signature shared by every builtin.
///
/// `args` is the full token list, so `args[0]` is the builtin's own name.
pub type Handler = fn(args: &[&str], io: &mut Io<'_>) -> Result<Flow, ShellError>;

/// One entry of the builtin table.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    /// Canonical name of the command, e.g. "cd".
    pub name: &'static str,
    /// One-line description shown by `help`.
    pub summary: &'static str,
    /// Runs the command with the full token list.
    pub handler: Handler,
}

/// All builtins known to the shell, in lookup and `help` order.
pub static BUILTINS: &[Builtin] = &[
    Builtin {
        name: "cd",
        summary: "change the working directory",
        handler: cd,
    },
    Builtin {
        name: "help",
        summary: "show this message",
        handler: help,
    },
    Builtin {
        name: "exit",
        summary: "leave the shell",
        handler: exit,
    },
];

/// Find the builtin named exactly `name`. The first match in table order wins.
pub fn lookup(name: &str) -> Option<&'static Builtin> {
    BUILTINS.iter().find(|b| b.name == name)
}

/// Builtin names in table order.
pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(|b| b.name)
}

/// `cd <dir>`: change the process working directory.
///
/// Extra arguments are ignored. A missing directory is a usage error and
/// leaves the working directory untouched.
pub fn cd(args: &[&str], _io: &mut Io<'_>) -> Result<Flow, ShellError> {
    let target = args.get(1).ok_or(ShellError::MissingArgument("cd"))?;
    env::set_current_dir(target).map_err(|source| ShellError::ChangeDir {
        path: (*target).to_string(),
        source,
    })?;
    Ok(Flow::Continue)
}

/// `help`: print a usage banner and the list of builtins.
pub fn help(_args: &[&str], io: &mut Io<'_>) -> Result<Flow, ShellError> {
    writeln!(io.out, "msh, a minimal shell.")?;
    writeln!(io.out, "Type a program name and its arguments, then hit enter.")?;
    writeln!(io.out, "The following are built in:")?;
    for builtin in BUILTINS {
        writeln!(io.out, "  {:<6}{}", builtin.name, builtin.summary)?;
    }
    writeln!(io.out, "Use the man command for information on other programs.")?;
    io.out.flush()?;
    Ok(Flow::Continue)
}

/// `exit`: stop the read loop. Arguments are ignored.
pub fn exit(_args: &[&str], _io: &mut Io<'_>) -> Result<Flow, ShellError> {
    Ok(Flow::Stop)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::lock_current_dir;
    use std::env as stdenv;
    use std::fs;
    use tempfile::TempDir;

    fn run(handler: Handler, args: &[&str]) -> (Result<Flow, ShellError>, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let res = handler(args, &mut Io::new(&mut out, &mut err));
        (res, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_lookup_is_exact_and_case_sensitive() {
        assert_eq!(lookup("cd").map(|b| b.name), Some("cd"));
        assert_eq!(lookup("exit").map(|b| b.name), Some("exit"));
        assert!(lookup("CD").is_none());
        assert!(lookup("ex").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_names_keep_table_order() {
        assert_eq!(names().collect::<Vec<_>>(), ["cd", "help", "exit"]);
    }

    #[test]
    fn test_help_lists_builtins_in_order() {
        let (res, out) = run(help, &["help", "ignored"]);
        assert_eq!(res.unwrap(), Flow::Continue);

        let positions: Vec<usize> = names()
            .map(|name| {
                out.find(&format!("  {name}"))
                    .unwrap_or_else(|| panic!("{name} missing from help output:\n{out}"))
            })
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_exit_stops_with_or_without_args() {
        assert_eq!(run(exit, &["exit"]).0.unwrap(), Flow::Stop);
        assert_eq!(run(exit, &["exit", "3", "--force"]).0.unwrap(), Flow::Stop);
    }

    #[test]
    fn test_cd_to_existing_directory() {
        let _lock = lock_current_dir();
        let orig = stdenv::current_dir().unwrap();
        let temp = TempDir::new().expect("failed to create temp dir");
        let canonical_temp = fs::canonicalize(temp.path()).unwrap();

        let target = canonical_temp.to_string_lossy().to_string();
        let (res, _) = run(cd, &["cd", &target]);
        let new_cwd = fs::canonicalize(stdenv::current_dir().unwrap()).unwrap();
        stdenv::set_current_dir(&orig).expect("failed to restore cwd");

        assert_eq!(res.unwrap(), Flow::Continue);
        assert_eq!(new_cwd, canonical_temp);
    }

    #[test]
    fn test_cd_without_argument_is_usage_error() {
        let _lock = lock_current_dir();
        let orig = stdenv::current_dir().unwrap();

        let (res, _) = run(cd, &["cd"]);

        assert!(matches!(res, Err(ShellError::MissingArgument("cd"))));
        assert_eq!(stdenv::current_dir().unwrap(), orig);
    }

    #[test]
    fn test_cd_nonexistent_path_errors() {
        let _lock = lock_current_dir();
        let orig = stdenv::current_dir().unwrap();
        let name = format!("nonexistent_dir_for_msh_test_{}", std::process::id());

        let (res, _) = run(cd, &["cd", &name]);

        match res {
            Err(ShellError::ChangeDir { path, .. }) => assert_eq!(path, name),
            other => panic!("expected ChangeDir error, got {other:?}"),
        }
        assert_eq!(stdenv::current_dir().unwrap(), orig);
    }
}
