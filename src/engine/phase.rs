//! Phases of the typing state machine.

use std::fmt;

/// The named state of the typewriter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Waiting out the start delay.
    #[default]
    Idle,
    /// Adding one character per typing tick.
    Typing,
    /// Holding a fully typed phrase.
    Pausing,
    /// Removing one character per deleting tick.
    Deleting,
    /// Final phrase shown; no further transitions.
    Done,
}

impl Phase {
    /// Whether the machine has halted.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done)
    }

    /// Lowercase name, as used in logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Typing => "typing",
            Self::Pausing => "pausing",
            Self::Deleting => "deleting",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
