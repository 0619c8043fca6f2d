//! Command-line argument matching and help rendering.
//!
//! This crate turns a declared set of commands into two things:
//!
//! - an [`ArgumentMatcher`] that maps a raw argument vector onto a
//!   [`Command`], its matched [`CommandOption`]s and positional parameters,
//!   or a [`MatchError`] saying why it could not;
//! - a [`HelpRenderer`] that lays the same commands out as column-aligned
//!   help text.
//!
//! Both read from a [`CommandsSet`] catalog and never modify it.
//! [`validate_catalog`] checks a catalog's structure before use, and
//! [`OutputSink`] decides where rendered help goes.
//!
//! # Example
//!
//! ```
//! use command_line_commands_core::*;
//!
//! let catalog = CommandsSet::new(vec![
//!     Command::new("help").with_description("Show this information"),
//!     Command::new("check")
//!         .with_description("Check file for some text")
//!         .with_option(CommandOption::flag(Some("n"), Some("dryrun")))
//!         .with_parameter("file path")
//!         .with_required_parameters(1),
//! ]);
//! assert!(validate_catalog(&catalog).is_empty());
//!
//! let command = ArgumentMatcher::new(&catalog)
//!     .parse(&["check", "-n", "notes.txt"])
//!     .unwrap();
//! assert_eq!(command.name(), "check");
//! assert!(command.does_option_exist(Some("n"), None));
//!
//! let help = catalog.get_help(Some("Checker"));
//! assert!(help.starts_with("Checker\n\nUsage:\nCommand Description"));
//! ```

mod catalog;
mod help;
mod matcher;
mod sink;
mod types;
mod validate;

pub use catalog::{CommandsSet, HELP_COMMAND};
pub use help::{ColumnLayout, CommandColumn, HelpRenderer};
pub use matcher::{ArgumentMatcher, CommandLine, ErrorKind, HELP_MARKERS, InferCommand, MatchError};
pub use sink::{ConsoleSink, LogSink, OutputSink, OutputTarget};
pub use types::*;
pub use validate::{CatalogError, validate_catalog, validate_command};
