//! Catalog validation.
//!
//! Checks the structural invariants the matcher and renderer rely on:
//! non-empty unique command names, and options that have at least one
//! well-formed, unique name within their command.
//!
//! # Examples
//!
//! ```
//! use command_line_commands_core::*;
//!
//! let catalog = CommandsSet::new(vec![
//!     Command::new("help"),
//!     Command::new("check").with_option(CommandOption::flag(Some("n"), Some("dryrun"))),
//! ]);
//! assert!(validate_catalog(&catalog).is_empty());
//!
//! // Option names are stored without their leading dashes
//! let bad = CommandsSet::new(vec![
//!     Command::new("check").with_option(CommandOption::flag(Some("-n"), None)),
//! ]);
//! assert!(!validate_catalog(&bad).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::{Command, CommandOption, CommandsSet};

/// Catalog validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Command name is empty or whitespace-only.
    #[error("command name cannot be empty")]
    EmptyCommandName,
    /// Two templates share a name.
    #[error("duplicate command in catalog: {0}")]
    DuplicateCommand(String),
    /// An option has neither short nor long name.
    #[error("option in command '{0}' must define a short or long name")]
    MissingOptionName(String),
    /// An option name is empty, contains whitespace or starts with a dash.
    #[error("invalid option name: '{0}'")]
    InvalidOptionName(String),
    /// Two options of the same command share a name.
    #[error("duplicate option in command '{command}': {option}")]
    DuplicateOption { command: String, option: String },
}

/// Validates every template in a catalog.
///
/// Stops at the first problem found; an empty result means the catalog is
/// valid. An empty catalog is valid.
///
/// # Examples
///
/// ```
/// use command_line_commands_core::*;
///
/// let catalog = CommandsSet::new(vec![Command::new("help"), Command::new("help")]);
/// assert_eq!(
///     validate_catalog(&catalog),
///     vec![CatalogError::DuplicateCommand("help".into())]
/// );
/// ```
pub fn validate_catalog(catalog: &CommandsSet) -> Vec<CatalogError> {
    let mut errors = Vec::new();
    let mut seen_commands: HashSet<&str> = HashSet::new();

    for command in catalog.commands() {
        errors.extend(validate_command(command));
        if !errors.is_empty() {
            return errors;
        }

        if !seen_commands.insert(command.name()) {
            errors.push(CatalogError::DuplicateCommand(command.name().to_string()));
            return errors;
        }
    }

    errors
}

/// Validates a single command template.
pub fn validate_command(command: &Command) -> Vec<CatalogError> {
    let mut errors = Vec::new();

    if command.name().trim().is_empty() {
        errors.push(CatalogError::EmptyCommandName);
        return errors;
    }

    errors.extend(validate_options(command.name(), &command.options));
    errors
}

fn validate_options(command: &str, options: &[CommandOption]) -> Vec<CatalogError> {
    let mut errors = Vec::new();
    let mut seen_short = HashSet::new();
    let mut seen_long = HashSet::new();

    for option in options {
        if option.short_name.is_none() && option.long_name.is_none() {
            errors.push(CatalogError::MissingOptionName(command.to_string()));
            return errors;
        }

        for (name, seen) in [
            (&option.short_name, &mut seen_short),
            (&option.long_name, &mut seen_long),
        ] {
            let Some(name) = name else {
                continue;
            };
            if !is_valid_option_name(name) {
                errors.push(CatalogError::InvalidOptionName(name.clone()));
                return errors;
            }
            if !seen.insert(name.as_str()) {
                errors.push(CatalogError::DuplicateOption {
                    command: command.to_string(),
                    option: name.clone(),
                });
                return errors;
            }
        }
    }

    errors
}

fn is_valid_option_name(name: &str) -> bool {
    !name.is_empty() && !name.starts_with('-') && !name.chars().any(char::is_whitespace)
}
