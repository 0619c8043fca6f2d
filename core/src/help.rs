//! Column-aligned help text rendering.
//!
//! The renderer lays commands out in up to four columns, left to right:
//! Command, Description, Options and Parameters. A column is *active* when at
//! least one command has content for it; inactive columns are left out of
//! both the header and the body.
//!
//! Each column is as wide as its widest cell (the header label counts as a
//! cell), and every column except the last gets one extra space as a
//! separator. A command with several options or parameters wraps onto
//! several lines; the name and description only appear on the first one.
//!
//! # Example
//!
//! ```
//! use command_line_commands_core::{Command, HelpRenderer};
//!
//! let commands = vec![Command::new("help").with_description("Show this information")];
//! let renderer = HelpRenderer::new(&commands).with_title("T");
//!
//! assert_eq!(renderer.header_text(), "T\n\nUsage:\nCommand Description\n");
//! assert_eq!(renderer.body_text(), "help    Show this information\n");
//! ```

use std::fmt;
use std::sync::OnceLock;

use crate::sink::OutputSink;
use crate::types::Command;

/// A help table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandColumn {
    /// Command name.
    Command,
    /// Command description.
    Description,
    /// Declared options.
    Options,
    /// Declared parameters.
    Parameters,
}

impl CommandColumn {
    /// All columns in display order.
    pub const ALL: [CommandColumn; 4] = [
        CommandColumn::Command,
        CommandColumn::Description,
        CommandColumn::Options,
        CommandColumn::Parameters,
    ];

    /// Header label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Command => "Command",
            Self::Description => "Description",
            Self::Options => "Options",
            Self::Parameters => "Parameters",
        }
    }

    /// Content width of this column for one command, `None` when empty.
    fn content_width(self, command: &Command) -> Option<usize> {
        match self {
            Self::Command => Some(text_width(command.name())),
            Self::Description => command
                .description
                .as_deref()
                .filter(|d| !d.is_empty())
                .map(text_width),
            Self::Options => command
                .options
                .iter()
                .map(|option| {
                    option
                        .display_width()
                        .max(text_width(&option.usage_text()))
                })
                .max(),
            Self::Parameters => command
                .parameters
                .iter()
                .map(|parameter| text_width(parameter) + 2)
                .max(),
        }
    }

    /// Cell text for one line of a command's entry.
    fn cell(self, command: &Command, line: usize) -> Option<String> {
        match self {
            Self::Command => (line == 0).then(|| command.name().to_string()),
            Self::Description => (line == 0)
                .then(|| command.description.clone())
                .flatten(),
            Self::Options => command.options.get(line).map(|o| o.usage_text()),
            Self::Parameters => command.parameters.get(line).map(|p| format!("<{p}>")),
        }
    }
}

impl fmt::Display for CommandColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An active column and its content width (separator not included).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub column: CommandColumn,
    pub width: usize,
}

/// Renders help text for a list of commands.
///
/// The command list is copied at construction, so the rendered text is a
/// pure function of what was passed in and is computed at most once.
#[derive(Debug)]
pub struct HelpRenderer {
    commands: Vec<Command>,
    title: Option<String>,
    usage_statement: Option<String>,
    columns: Vec<ColumnLayout>,
    text: OnceLock<String>,
}

impl HelpRenderer {
    /// Creates a renderer over a snapshot of `commands`.
    ///
    /// Commands are emitted in the given order; sort beforehand if needed.
    pub fn new(commands: &[Command]) -> Self {
        let commands = commands.to_vec();
        let columns = compute_columns(&commands);
        Self {
            commands,
            title: None,
            usage_statement: None,
            columns,
            text: OnceLock::new(),
        }
    }

    /// Sets the title printed above `Usage:`.
    ///
    /// Without a title the header starts directly at `Usage:`, with no
    /// leading blank lines.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self.text = OnceLock::new();
        self
    }

    /// Sets a free-text usage statement printed after `Usage:`.
    pub fn with_usage_statement(mut self, usage: impl Into<String>) -> Self {
        self.usage_statement = Some(usage.into());
        self.text = OnceLock::new();
        self
    }

    /// Active columns with their widths, in display order.
    pub fn columns(&self) -> &[ColumnLayout] {
        &self.columns
    }

    /// Returns `true` if `column` is part of the layout.
    pub fn is_active(&self, column: CommandColumn) -> bool {
        self.columns.iter().any(|layout| layout.column == column)
    }

    /// Title, `Usage:` line, optional usage statement and column labels.
    pub fn header_text(&self) -> String {
        let mut out = String::new();
        if let Some(title) = &self.title {
            out.push_str(title);
            out.push_str("\n\n");
        }
        out.push_str("Usage:\n");
        if let Some(usage) = self.usage_statement.as_deref().filter(|u| !u.is_empty()) {
            out.push_str(usage);
            out.push_str("\n\n");
        }

        let labels: Vec<Option<String>> = self
            .columns
            .iter()
            .map(|layout| Some(layout.column.label().to_string()))
            .collect();
        out.push_str(&self.join_cells(&labels));
        out.push('\n');
        out
    }

    /// One or more lines per command, in list order.
    pub fn body_text(&self) -> String {
        let mut out = String::new();
        for command in &self.commands {
            for line in 0..command.help_line_count() {
                let cells: Vec<Option<String>> = self
                    .columns
                    .iter()
                    .map(|layout| layout.column.cell(command, line))
                    .collect();
                out.push_str(&self.join_cells(&cells));
                out.push('\n');
            }
        }
        out
    }

    /// Full help text: header followed by body.
    pub fn help_text(&self) -> &str {
        self.text
            .get_or_init(|| format!("{}{}", self.header_text(), self.body_text()))
    }

    /// Writes the full help text to `sink`.
    pub fn show(&self, sink: &mut dyn OutputSink) {
        sink.write_line(self.help_text());
    }

    /// Pads each cell to its column width plus separator and trims the end.
    fn join_cells(&self, cells: &[Option<String>]) -> String {
        let last = self.columns.len().saturating_sub(1);
        let mut line = String::new();
        for (index, (layout, cell)) in self.columns.iter().zip(cells).enumerate() {
            let text = cell.as_deref().unwrap_or("");
            if index == last {
                line.push_str(text);
            } else {
                let width = layout.width + 1;
                line.push_str(&format!("{text:<width$}"));
            }
        }
        line.truncate(line.trim_end_matches(' ').len());
        line
    }
}

impl fmt::Display for HelpRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.help_text())
    }
}

/// Determines the active columns and their widths.
fn compute_columns(commands: &[Command]) -> Vec<ColumnLayout> {
    CommandColumn::ALL
        .iter()
        .filter_map(|&column| {
            let content = commands
                .iter()
                .filter_map(|command| column.content_width(command))
                .max();
            // The command column is always present, even for an empty list.
            let content = match column {
                CommandColumn::Command => Some(content.unwrap_or(0)),
                _ => content,
            };
            content.map(|width| ColumnLayout {
                column,
                width: width.max(column.label().len()),
            })
        })
        .collect()
}

fn text_width(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CommandOption;

    const TITLE: &str = "CommandLine Commands Tests";
    const TOP: &str = "CommandLine Commands Tests\n\nUsage:\n";

    fn help() -> Command {
        Command::new("help").with_description("Show this information")
    }

    fn minimal() -> Vec<Command> {
        vec![help()]
    }

    fn very_simple() -> Vec<Command> {
        let mut commands = minimal();
        commands.push(
            Command::new("check")
                .with_description("Check file for some text")
                .with_parameter("file path"),
        );
        commands
    }

    fn convert() -> Command {
        Command::new("convert")
            .with_description("Convert file for some reason")
            .with_parameters(["input file path", "output file path"])
    }

    fn no_options() -> Vec<Command> {
        let mut commands = very_simple();
        commands.push(convert());
        commands
    }

    fn no_parameters() -> Vec<Command> {
        let mut commands = minimal();
        commands.push(
            Command::new("command-options")
                .with_description("A command with only options")
                .with_option(CommandOption::flag(Some("s"), Some("something")))
                .with_option(CommandOption::flag(Some("o"), Some("other"))),
        );
        commands
    }

    fn full() -> Vec<Command> {
        let mut commands = no_parameters();
        commands.push(convert());
        commands
    }

    fn no_description() -> Vec<Command> {
        vec![
            Command::new("help"),
            Command::new("check").with_parameter("file path"),
        ]
    }

    fn header(commands: &[Command]) -> String {
        HelpRenderer::new(commands).with_title(TITLE).header_text()
    }

    #[test]
    fn test_header_minimal() {
        assert_eq!(header(&minimal()), format!("{TOP}Command Description\n"));
    }

    #[test]
    fn test_header_without_title_starts_at_usage() {
        let header = HelpRenderer::new(&minimal()).header_text();
        assert_eq!(header, "Usage:\nCommand Description\n");
        assert!(!header.starts_with('\n'));
    }

    #[test]
    fn test_header_no_description() {
        assert_eq!(header(&no_description()), format!("{TOP}Command Parameters\n"));
    }

    #[test]
    fn test_header_very_simple() {
        assert_eq!(
            header(&very_simple()),
            format!("{TOP}Command Description              Parameters\n")
        );
    }

    #[test]
    fn test_header_no_options() {
        assert_eq!(
            header(&no_options()),
            format!("{TOP}Command Description                  Parameters\n")
        );
    }

    #[test]
    fn test_header_no_parameters() {
        assert_eq!(
            header(&no_parameters()),
            format!("{TOP}Command         Description                 Options\n")
        );
    }

    #[test]
    fn test_header_full() {
        // Options column is as wide as "-s, --something" (15) plus separator.
        assert_eq!(
            header(&full()),
            format!("{TOP}Command         Description                  Options         Parameters\n")
        );
    }

    #[test]
    fn test_column_suppression() {
        let renderer = HelpRenderer::new(&no_options());
        assert!(!renderer.is_active(CommandColumn::Options));
        assert!(renderer.is_active(CommandColumn::Parameters));

        let renderer = HelpRenderer::new(&minimal());
        let active: Vec<CommandColumn> = renderer.columns().iter().map(|c| c.column).collect();
        assert_eq!(active, vec![CommandColumn::Command, CommandColumn::Description]);
    }

    #[test]
    fn test_body_minimal() {
        let renderer = HelpRenderer::new(&minimal()).with_title("T");
        assert_eq!(renderer.body_text(), "help    Show this information\n");
        assert_eq!(
            renderer.help_text(),
            "T\n\nUsage:\nCommand Description\nhelp    Show this information\n"
        );
    }

    #[test]
    fn test_body_wraps_parameters() {
        let renderer = HelpRenderer::new(&no_options());
        let expected = concat!(
            "help    Show this information\n",
            "check   Check file for some text     <file path>\n",
            "convert Convert file for some reason <input file path>\n",
            "                                     <output file path>\n",
        );
        assert_eq!(renderer.body_text(), expected);
    }

    #[test]
    fn test_body_options_and_parameters() {
        let commands = vec![
            help(),
            Command::new("convert")
                .with_description("Convert a file")
                .with_option(CommandOption::with_value(Some("e"), Some("encoding")))
                .with_option(CommandOption::flag(Some("n"), Some("dryrun")))
                .with_parameters(["input", "output", "log"]),
        ];
        let renderer = HelpRenderer::new(&commands);
        let expected = concat!(
            "Usage:\n",
            "Command Description           Options                 Parameters\n",
            "help    Show this information\n",
            "convert Convert a file        -e, --encoding <option> <input>\n",
            "                              -n, --dryrun            <output>\n",
            "                                                      <log>\n",
        );
        assert_eq!(renderer.help_text(), expected);
    }

    #[test]
    fn test_body_options_without_parameters() {
        let expected = concat!(
            "help            Show this information\n",
            "command-options A command with only options -s, --something\n",
            "                                            -o, --other\n",
        );
        assert_eq!(HelpRenderer::new(&no_parameters()).body_text(), expected);
    }

    #[test]
    fn test_usage_statement() {
        let renderer = HelpRenderer::new(&minimal())
            .with_title("T")
            .with_usage_statement("tool <command> [options]");
        assert_eq!(
            renderer.header_text(),
            "T\n\nUsage:\ntool <command> [options]\n\nCommand Description\n"
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let renderer = HelpRenderer::new(&full()).with_title(TITLE);
        let first = renderer.help_text().to_string();
        assert_eq!(renderer.help_text(), first);
        assert_eq!(
            HelpRenderer::new(&full()).with_title(TITLE).to_string(),
            first
        );
    }

    #[test]
    fn test_snapshot_is_independent_of_caller() {
        let mut commands = minimal();
        let renderer = HelpRenderer::new(&commands);
        let before = renderer.help_text().to_string();
        commands.push(convert());
        assert_eq!(renderer.help_text(), before);
    }

    #[test]
    fn test_show_writes_help_text() {
        let renderer = HelpRenderer::new(&minimal()).with_title("T");
        let mut written = Vec::new();
        let mut sink = |text: &str| written.push(text.to_string());
        renderer.show(&mut sink);
        assert_eq!(written, vec![renderer.help_text().to_string()]);
    }

    #[test]
    fn test_empty_command_list() {
        let renderer = HelpRenderer::new(&[]);
        assert_eq!(renderer.help_text(), "Usage:\nCommand\n");
    }
}
