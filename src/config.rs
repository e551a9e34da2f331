/// Runtime settings for the read loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Text written before each read.
    pub prompt: String,
    /// Initial capacity of the line buffer in bytes; it doubles when full.
    pub line_capacity: usize,
    /// Stop the loop once input is exhausted. When false, end of input is
    /// read as an empty line and the shell keeps prompting until `exit`.
    pub exit_on_eof: bool,
}

/// Prompt used when none is configured.
pub const DEFAULT_PROMPT: &str = "> ";
/// Initial line buffer capacity in bytes.
pub const DEFAULT_LINE_CAPACITY: usize = 1024;

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            line_capacity: DEFAULT_LINE_CAPACITY,
            exit_on_eof: false,
        }
    }
}
