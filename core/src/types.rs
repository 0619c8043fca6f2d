//! Command and option type definitions.
//!
//! A [`Command`] is used in two roles: as a *template* declared in a
//! [`CommandsSet`](crate::CommandsSet), and as the *matched* command produced
//! by the [`ArgumentMatcher`](crate::ArgumentMatcher). The matched command is
//! always a fresh instance built with [`Command::instantiate`], so templates
//! are never written to during a parse.
//!
//! Both types serialize with [`serde`] using the catalog JSON field names
//! (`command`, `shortName`, `parameterCount`, ...).

use serde::{Deserialize, Serialize};

/// Placeholder appended to an option's usage text when it takes a value.
pub const OPTION_PARAMETER_PLACEHOLDER: &str = " <option>";

/// Width of the `-x, --` decoration around an option's long name.
const OPTION_DECORATION_WIDTH: usize = 6;

/// A single command option (flag).
///
/// An option has a short form (matched against `-e`) and/or a long form
/// (matched against `--encoding`). Options that require a parameter consume
/// the following argument as their value.
///
/// # Examples
///
/// ```
/// use command_line_commands_core::CommandOption;
///
/// let dry_run = CommandOption::flag(Some("n"), Some("dryrun"));
/// assert!(!dry_run.requires_parameter);
/// assert!(dry_run.matches(Some("n"), None));
///
/// let encoding = CommandOption::with_value(Some("e"), Some("encoding"));
/// assert!(encoding.requires_parameter);
/// assert_eq!(encoding.usage_text(), "-e, --encoding <option>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandOption {
    /// Short form without the leading dash (e.g. "e")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    /// Long form without the leading dashes (e.g. "encoding")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_name: Option<String>,
    /// Whether the option must be followed by a value
    #[serde(default)]
    pub requires_parameter: bool,
    /// Captured value, only set on matched options
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
}

impl CommandOption {
    /// Creates an option that takes no value.
    pub fn flag(short_name: Option<&str>, long_name: Option<&str>) -> Self {
        Self {
            short_name: short_name.map(String::from),
            long_name: long_name.map(String::from),
            requires_parameter: false,
            parameter: None,
        }
    }

    /// Creates an option that requires a value.
    pub fn with_value(short_name: Option<&str>, long_name: Option<&str>) -> Self {
        Self {
            requires_parameter: true,
            ..Self::flag(short_name, long_name)
        }
    }

    /// Returns `true` if either the short or the long name matches.
    ///
    /// Names are compared ordinally. A `None` (or empty) argument never
    /// matches, so a template with only one name set still matches on that
    /// name.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_line_commands_core::CommandOption;
    ///
    /// let option = CommandOption::flag(None, Some("verbose"));
    /// assert!(option.matches(Some("v"), Some("verbose")));
    /// assert!(!option.matches(Some("v"), None));
    /// ```
    pub fn matches(&self, short_name: Option<&str>, long_name: Option<&str>) -> bool {
        short_name.is_some_and(|name| self.matches_short(name))
            || long_name.is_some_and(|name| self.matches_long(name))
    }

    /// Checks the short form (without its dash).
    pub fn matches_short(&self, name: &str) -> bool {
        !name.is_empty() && self.short_name.as_deref() == Some(name)
    }

    /// Checks the long form (without its dashes).
    pub fn matches_long(&self, name: &str) -> bool {
        !name.is_empty() && self.long_name.as_deref() == Some(name)
    }

    /// Returns the name used in messages, long form preferred.
    pub fn canonical_name(&self) -> &str {
        self.long_name
            .as_deref()
            .or(self.short_name.as_deref())
            .unwrap_or("unknown")
    }

    /// Renders the option as it appears in the help Options column.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_line_commands_core::CommandOption;
    ///
    /// assert_eq!(CommandOption::flag(Some("s"), Some("flush")).usage_text(), "-s, --flush");
    /// assert_eq!(CommandOption::flag(Some("s"), None).usage_text(), "-s");
    /// assert_eq!(CommandOption::flag(None, Some("flush")).usage_text(), "    --flush");
    /// ```
    pub fn usage_text(&self) -> String {
        let mut text = match (&self.short_name, &self.long_name) {
            (Some(short), Some(long)) => format!("-{short}, --{long}"),
            (Some(short), None) => format!("-{short}"),
            (None, Some(long)) => format!("    --{long}"),
            (None, None) => String::new(),
        };
        if self.requires_parameter {
            text.push_str(OPTION_PARAMETER_PLACEHOLDER);
        }
        text
    }

    /// Column width this option needs in the help Options column.
    ///
    /// `len(long) + 6`, plus the placeholder width when a value is required.
    pub fn display_width(&self) -> usize {
        let long = self.long_name.as_deref().map_or(0, |l| l.chars().count());
        let mut width = long + OPTION_DECORATION_WIDTH;
        if self.requires_parameter {
            width += OPTION_PARAMETER_PLACEHOLDER.len();
        }
        width
    }
}

/// A command-line command (verb).
///
/// The name is fixed at construction; everything else can be set with the
/// builder methods.
///
/// # Examples
///
/// ```
/// use command_line_commands_core::{Command, CommandOption};
///
/// let convert = Command::new("convert")
///     .with_description("Convert file for some reason")
///     .with_option(CommandOption::with_value(Some("e"), Some("encoding")))
///     .with_parameters(["input file path", "output file path"])
///     .with_required_parameters(2);
///
/// assert_eq!(convert.name(), "convert");
/// assert!(convert.does_option_exist(Some("e"), None));
/// assert_eq!(convert.required_parameter_count, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    #[serde(rename = "command")]
    name: String,
    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Option templates, or the matched options of a parse result
    #[serde(default)]
    pub options: Vec<CommandOption>,
    /// Parameter names, or the captured positional values of a parse result
    #[serde(default)]
    pub parameters: Vec<String>,
    /// Minimum number of positional parameters
    #[serde(
        default,
        rename = "parameterCount",
        alias = "requiredParameterCount"
    )]
    pub required_parameter_count: usize,
}

impl Command {
    /// Creates a command with the given name and nothing else.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            options: Vec::new(),
            parameters: Vec::new(),
            required_parameter_count: 0,
        }
    }

    /// Returns the command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends an option.
    pub fn with_option(mut self, option: CommandOption) -> Self {
        self.options.push(option);
        self
    }

    /// Appends several options.
    pub fn with_options(mut self, options: impl IntoIterator<Item = CommandOption>) -> Self {
        self.options.extend(options);
        self
    }

    /// Appends a parameter.
    pub fn with_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.parameters.push(parameter.into());
        self
    }

    /// Appends several parameters.
    pub fn with_parameters<I, S>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameters.extend(parameters.into_iter().map(Into::into));
        self
    }

    /// Sets the minimum number of positional parameters.
    pub fn with_required_parameters(mut self, count: usize) -> Self {
        self.required_parameter_count = count;
        self
    }

    /// Returns the first option matching on short OR long name.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_line_commands_core::{Command, CommandOption};
    ///
    /// let mut encoding = CommandOption::with_value(Some("e"), Some("encoding"));
    /// encoding.parameter = Some("utf8".into());
    /// let command = Command::new("some-command").with_option(encoding);
    ///
    /// let found = command.get_option(Some("e"), Some("encoding")).unwrap();
    /// assert_eq!(found.parameter.as_deref(), Some("utf8"));
    /// assert!(command.get_option(Some("n"), Some("dryrun")).is_none());
    /// ```
    pub fn get_option(
        &self,
        short_name: Option<&str>,
        long_name: Option<&str>,
    ) -> Option<&CommandOption> {
        self.options
            .iter()
            .find(|option| option.matches(short_name, long_name))
    }

    /// Returns `true` if [`get_option`](Self::get_option) finds a match.
    pub fn does_option_exist(&self, short_name: Option<&str>, long_name: Option<&str>) -> bool {
        self.get_option(short_name, long_name).is_some()
    }

    /// Builds a fresh command from this template.
    ///
    /// Copies the name, description and required parameter count; options
    /// and parameters start empty.
    pub fn instantiate(&self) -> Self {
        Self {
            name: self.name.clone(),
            description: self.description.clone(),
            options: Vec::new(),
            parameters: Vec::new(),
            required_parameter_count: self.required_parameter_count,
        }
    }

    /// Number of help lines this command occupies.
    pub(crate) fn help_line_count(&self) -> usize {
        self.options.len().max(self.parameters.len()).max(1)
    }
}
