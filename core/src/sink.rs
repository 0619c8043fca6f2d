//! Output sinks for rendered help text.
//!
//! The caller decides where help goes by handing an [`OutputSink`] to
//! [`HelpRenderer::show`](crate::HelpRenderer::show) or
//! [`CommandsSet::show_help_to`](crate::CommandsSet::show_help_to). Any
//! `FnMut(&str)` closure is a sink, which keeps tests free of global state.
//!
//! ```
//! use command_line_commands_core::OutputSink;
//!
//! let mut captured = Vec::new();
//! let mut sink = |text: &str| captured.push(text.to_string());
//! sink.write_line("hello");
//! assert_eq!(captured, vec!["hello"]);
//! ```

use std::io::Write;

use serde::{Deserialize, Serialize};

/// Destination for a block of output text.
pub trait OutputSink {
    /// Writes `text` followed by a line terminator.
    fn write_line(&mut self, text: &str);
}

impl<F> OutputSink for F
where
    F: FnMut(&str),
{
    fn write_line(&mut self, text: &str) {
        (self)(text)
    }
}

/// Writes to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn write_line(&mut self, text: &str) {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        // Write errors on a closed stdout are ignored.
        let _ = writeln!(handle, "{text}");
    }
}

/// Emits each block as an `info` event through [`tracing`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl OutputSink for LogSink {
    fn write_line(&mut self, text: &str) {
        tracing::info!("{text}");
    }
}

/// Where a catalog sends its help output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    /// Standard output (the default).
    #[default]
    Console,
    /// The `tracing` pipeline.
    Log,
}

impl OutputTarget {
    /// Returns the sink for this target.
    pub fn sink(self) -> Box<dyn OutputSink> {
        match self {
            Self::Console => Box::new(ConsoleSink),
            Self::Log => Box::new(LogSink),
        }
    }
}
