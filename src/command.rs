use std::io::Write;

/// Control signal returned by every dispatch path back to the read loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Issue another prompt.
    Continue,
    /// Leave the read loop.
    Stop,
}

impl Flow {
    /// Integer form of the signal: nonzero keeps looping, zero stops.
    pub fn code(self) -> i32 {
        match self {
            Flow::Continue => 1,
            Flow::Stop => 0,
        }
    }

    /// True for [`Flow::Stop`].
    pub fn should_stop(self) -> bool {
        self == Flow::Stop
    }
}

/// Output streams handed to commands.
///
/// Builtins write through these; external programs inherit the process's
/// real stdio, and only the shell's own diagnostics about them go to `err`.
pub struct Io<'a> {
    /// Regular command output.
    pub out: &'a mut dyn Write,
    /// Diagnostics, always prefixed `msh: `.
    pub err: &'a mut dyn Write,
}

impl<'a> Io<'a> {
    /// Bundle the two streams.
    pub fn new(out: &'a mut dyn Write, err: &'a mut dyn Write) -> Self {
        Self { out, err }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_codes_follow_integer_convention() {
        assert_eq!(Flow::Continue.code(), 1);
        assert_eq!(Flow::Stop.code(), 0);
        assert!(Flow::Stop.should_stop());
        assert!(!Flow::Continue.should_stop());
    }
}
