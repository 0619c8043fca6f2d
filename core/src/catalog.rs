//! The command catalog.

use crate::help::HelpRenderer;
use crate::sink::{OutputSink, OutputTarget};
use crate::types::Command;

/// Name of the built-in help command.
pub const HELP_COMMAND: &str = "help";

/// Ordered set of command templates.
///
/// Built once by the caller and read-only while parsing or rendering.
/// Names are expected to be unique; see
/// [`validate_catalog`](crate::validate_catalog).
///
/// # Examples
///
/// ```
/// use command_line_commands_core::{Command, CommandsSet};
///
/// let catalog = CommandsSet::new(vec![
///     Command::new("help").with_description("Show this information"),
///     Command::new("check").with_required_parameters(1),
/// ]);
///
/// assert_eq!(catalog.len(), 2);
/// assert!(catalog.find("check").is_some());
/// assert!(catalog.find("Check").is_none());
/// assert!(catalog.help_command().is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandsSet {
    commands: Vec<Command>,
    /// Free-text usage statement shown in help output
    pub usage_statement: Option<String>,
    /// Where [`show_help`](Self::show_help) writes
    pub output: OutputTarget,
}

impl CommandsSet {
    /// Creates a catalog from templates, keeping their order.
    pub fn new(commands: Vec<Command>) -> Self {
        Self {
            commands,
            usage_statement: None,
            output: OutputTarget::default(),
        }
    }

    /// Sets the usage statement.
    pub fn with_usage_statement(mut self, usage: impl Into<String>) -> Self {
        self.usage_statement = Some(usage.into());
        self
    }

    /// Sets the output target used by [`show_help`](Self::show_help).
    pub fn with_output(mut self, output: OutputTarget) -> Self {
        self.output = output;
        self
    }

    /// Command templates in declaration order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if the catalog holds no templates.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Looks up a template by exact (case-sensitive) name.
    pub fn find(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|command| command.name() == name)
    }

    /// Returns the `help` template, if declared.
    pub fn help_command(&self) -> Option<&Command> {
        self.find(HELP_COMMAND)
    }

    /// Builds a renderer over a snapshot of this catalog.
    pub fn help_renderer(&self, title: Option<&str>) -> HelpRenderer {
        let mut renderer = HelpRenderer::new(&self.commands);
        if let Some(title) = title {
            renderer = renderer.with_title(title);
        }
        if let Some(usage) = &self.usage_statement {
            renderer = renderer.with_usage_statement(usage.as_str());
        }
        renderer
    }

    /// Renders the help text.
    pub fn get_help(&self, title: Option<&str>) -> String {
        self.help_renderer(title).help_text().to_string()
    }

    /// Writes the help text to the configured [`OutputTarget`].
    pub fn show_help(&self, title: Option<&str>) {
        let mut sink = self.output.sink();
        self.show_help_to(title, sink.as_mut());
    }

    /// Writes the help text to `sink`.
    pub fn show_help_to(&self, title: Option<&str>, sink: &mut dyn OutputSink) {
        self.help_renderer(title).show(sink);
    }
}

impl From<Vec<Command>> for CommandsSet {
    fn from(commands: Vec<Command>) -> Self {
        Self::new(commands)
    }
}

impl FromIterator<Command> for CommandsSet {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
