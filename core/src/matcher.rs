//! Argument matching against a command catalog.
//!
//! The first argument names the command; the rest are options (anything
//! starting with `-`) and positional parameters, in any order. Matching is a
//! single left-to-right pass that stops at the first failure.
//!
//! # Example
//!
//! ```
//! use command_line_commands_core::*;
//!
//! let catalog = CommandsSet::new(vec![
//!     Command::new("help").with_description("Show this information"),
//!     Command::new("convert")
//!         .with_option(CommandOption::with_value(Some("e"), Some("encoding")))
//!         .with_required_parameters(1),
//! ]);
//! let matcher = ArgumentMatcher::new(&catalog);
//!
//! let command = matcher.parse(&["convert", "input.txt", "--encoding", "utf8"]).unwrap();
//! assert_eq!(command.parameters, vec!["input.txt"]);
//! assert_eq!(command.options[0].parameter.as_deref(), Some("utf8"));
//!
//! let error = matcher.parse(&["convert", "-z", "input.txt"]).unwrap_err();
//! assert_eq!(error.kind(), ErrorKind::UnknownOption);
//! ```

use thiserror::Error;

use crate::catalog::{CommandsSet, HELP_COMMAND};
use crate::types::{Command, CommandOption};

/// Arguments that request help wherever they appear.
pub const HELP_MARKERS: [&str; 3] = ["-?", "-h", "--help"];

/// Failure category of a parse attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NoArguments,
    UnknownCommand,
    UnknownOption,
    TooFewParameters,
}

/// Why an argument list did not match.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The argument list was empty.
    #[error("There are no arguments given.")]
    NoArguments,
    /// The first argument names no command and nothing could be inferred.
    #[error("Unknown command: {0}.")]
    UnknownCommand(String),
    /// An option is not declared by the command.
    #[error("Unknown option: {0}.")]
    UnknownOption(String),
    /// An option that takes a value is not followed by one.
    #[error("Option {0} requires a parameter.")]
    MissingOptionParameter(String),
    /// Fewer positional parameters than the command requires.
    #[error("Incorrect amount of parameters: expected at least {required}, got {supplied}.")]
    TooFewParameters { required: usize, supplied: usize },
}

impl MatchError {
    /// Maps the error onto the four failure categories.
    ///
    /// A missing option value counts as an invalid option.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoArguments => ErrorKind::NoArguments,
            Self::UnknownCommand(_) => ErrorKind::UnknownCommand,
            Self::UnknownOption(_) | Self::MissingOptionParameter(_) => ErrorKind::UnknownOption,
            Self::TooFewParameters { .. } => ErrorKind::TooFewParameters,
        }
    }
}

/// Fallback used when the first argument is not an exact command name.
///
/// Any `Fn(&str, &[Command]) -> Option<Command>` closure implements this.
///
/// # Examples
///
/// ```
/// use command_line_commands_core::*;
///
/// // Accept unambiguous prefixes, e.g. "conv" for "convert".
/// let by_prefix = |argument: &str, templates: &[Command]| {
///     let mut found = templates.iter().filter(|t| t.name().starts_with(argument));
///     match (found.next(), found.next()) {
///         (Some(only), None) => Some(only.clone()),
///         _ => None,
///     }
/// };
///
/// let catalog = CommandsSet::new(vec![Command::new("convert"), Command::new("check")]);
/// let matcher = ArgumentMatcher::new(&catalog).with_infer(by_prefix);
/// assert_eq!(matcher.parse(&["conv"]).unwrap().name(), "convert");
/// assert!(matcher.parse(&["c"]).is_err());
/// ```
pub trait InferCommand {
    /// Returns the command meant by `argument`, if any.
    fn infer_command(&self, argument: &str, templates: &[Command]) -> Option<Command>;
}

impl<F> InferCommand for F
where
    F: Fn(&str, &[Command]) -> Option<Command>,
{
    fn infer_command(&self, argument: &str, templates: &[Command]) -> Option<Command> {
        self(argument, templates)
    }
}

/// Matches argument lists against a catalog.
///
/// Holds the catalog by reference and never modifies it, so one matcher can
/// serve any number of parses.
pub struct ArgumentMatcher<'a> {
    catalog: &'a CommandsSet,
    infer: Option<Box<dyn InferCommand + 'a>>,
}

impl<'a> ArgumentMatcher<'a> {
    /// Creates a matcher with no inference fallback.
    pub fn new(catalog: &'a CommandsSet) -> Self {
        Self {
            catalog,
            infer: None,
        }
    }

    /// Installs the fallback consulted when no name matches exactly.
    pub fn with_infer(mut self, infer: impl InferCommand + 'a) -> Self {
        self.infer = Some(Box::new(infer));
        self
    }

    /// The catalog this matcher reads from.
    pub fn catalog(&self) -> &'a CommandsSet {
        self.catalog
    }

    /// Matches `arguments` (command name first).
    ///
    /// On success the returned command is a fresh instance carrying only the
    /// options and parameters present in `arguments`.
    ///
    /// # Errors
    ///
    /// Returns the first [`MatchError`] encountered; no partial command is
    /// produced.
    pub fn parse<S: AsRef<str>>(&self, arguments: &[S]) -> Result<Command, MatchError> {
        let arguments: Vec<&str> = arguments.iter().map(|argument| argument.as_ref()).collect();
        let Some(&first) = arguments.first() else {
            return Err(MatchError::NoArguments);
        };

        if is_help_request(&arguments) {
            return Ok(self
                .catalog
                .help_command()
                .map_or_else(|| Command::new(HELP_COMMAND), Command::instantiate));
        }

        let inferred;
        let template = match self.catalog.find(first) {
            Some(template) => template,
            None => {
                inferred = self
                    .infer
                    .as_ref()
                    .and_then(|infer| infer.infer_command(first, self.catalog.commands()))
                    .ok_or_else(|| MatchError::UnknownCommand(first.to_string()))?;
                &inferred
            }
        };

        let mut command = template.instantiate();
        let mut index = 1;
        while index < arguments.len() {
            let argument = arguments[index];
            if is_option(argument) {
                let mut option = find_option(&template.options, argument)
                    .ok_or_else(|| MatchError::UnknownOption(argument.to_string()))?
                    .clone();
                // A value only ever comes from the argument list.
                option.parameter = if option.requires_parameter {
                    let value = arguments
                        .get(index + 1)
                        .filter(|next| !is_option(next))
                        .ok_or_else(|| MatchError::MissingOptionParameter(argument.to_string()))?;
                    index += 1;
                    Some(value.to_string())
                } else {
                    None
                };
                command.options.push(option);
            } else {
                command.parameters.push(argument.to_string());
            }
            index += 1;
        }

        let supplied = command.parameters.len();
        if supplied < command.required_parameter_count {
            return Err(MatchError::TooFewParameters {
                required: command.required_parameter_count,
                supplied,
            });
        }

        Ok(command)
    }
}

impl std::fmt::Debug for ArgumentMatcher<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgumentMatcher")
            .field("catalog", &self.catalog)
            .field("infer", &self.infer.is_some())
            .finish()
    }
}

/// Outcome of matching one argument list.
///
/// Offers the flag-plus-message view of a parse: `is_valid`, the matched
/// command (only when valid) and the error message (only when not).
///
/// # Examples
///
/// ```
/// use command_line_commands_core::*;
///
/// let catalog = CommandsSet::new(vec![Command::new("check").with_required_parameters(1)]);
///
/// let ok = CommandLine::new(&catalog, &["check", "file.txt"]);
/// assert!(ok.is_valid());
/// assert_eq!(ok.command().unwrap().parameters, vec!["file.txt"]);
///
/// let failed = CommandLine::new(&catalog, &["check"]);
/// assert!(!failed.is_valid());
/// assert!(failed.command().is_none());
/// assert!(failed.error_message().unwrap().starts_with("Incorrect amount of parameters"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    result: Result<Command, MatchError>,
}

impl CommandLine {
    /// Matches `arguments` against `catalog`.
    pub fn new<S: AsRef<str>>(catalog: &CommandsSet, arguments: &[S]) -> Self {
        ArgumentMatcher::new(catalog).parse(arguments).into()
    }

    /// Matches `arguments` with an inference fallback.
    pub fn with_infer<S: AsRef<str>>(
        catalog: &CommandsSet,
        arguments: &[S],
        infer: impl InferCommand,
    ) -> Self {
        ArgumentMatcher::new(catalog)
            .with_infer(infer)
            .parse(arguments)
            .into()
    }

    /// Whether the arguments matched.
    pub fn is_valid(&self) -> bool {
        self.result.is_ok()
    }

    /// The matched command.
    pub fn command(&self) -> Option<&Command> {
        self.result.as_ref().ok()
    }

    /// The failure.
    pub fn error(&self) -> Option<&MatchError> {
        self.result.as_ref().err()
    }

    /// Human-readable failure message.
    pub fn error_message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }

    /// Returns `true` if the matched command is the help command.
    pub fn is_help(&self) -> bool {
        self.command().is_some_and(|c| c.name() == HELP_COMMAND)
    }

    /// Converts into the underlying result.
    pub fn into_result(self) -> Result<Command, MatchError> {
        self.result
    }
}

impl From<Result<Command, MatchError>> for CommandLine {
    fn from(result: Result<Command, MatchError>) -> Self {
        Self { result }
    }
}

fn is_help_request(arguments: &[&str]) -> bool {
    arguments
        .first()
        .is_some_and(|first| first.eq_ignore_ascii_case(HELP_COMMAND))
        || arguments.iter().any(|argument| {
            HELP_MARKERS
                .iter()
                .any(|marker| argument.eq_ignore_ascii_case(marker))
        })
}

fn is_option(argument: &str) -> bool {
    argument.starts_with('-')
}

/// Finds the template for an option argument, first declared match wins.
fn find_option<'t>(options: &'t [CommandOption], argument: &str) -> Option<&'t CommandOption> {
    if let Some(name) = argument.strip_prefix("--") {
        options.iter().find(|option| option.matches_long(name))
    } else {
        let name = argument.strip_prefix('-').unwrap_or(argument);
        options.iter().find(|option| option.matches_short(name))
    }
}
