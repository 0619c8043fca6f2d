//! Help presentation settings.
//!
//! A small YAML file that tells a program how to present its catalog: the
//! title above `Usage:`, an optional usage statement, and whether help goes
//! to the console or the log.
//!
//! # Example YAML
//!
//! ```yaml
//! title: "Convert Tool"
//! usage_statement: "convert-tool <command> [options] [parameters]"
//! output: console
//! catalog: commands.json
//! ```

use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use command_line_commands_core::{CommandsSet, OutputTarget};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Help presentation configuration.
///
/// Every field is optional; an empty document is a valid configuration.
///
/// # Examples
///
/// ```
/// use command_line_commands_core::{CommandsSet, OutputTarget};
/// use command_line_commands_loader::HelpConfig;
///
/// let config: HelpConfig = serde_yaml::from_str("title: Tool\noutput: log\n").unwrap();
/// assert_eq!(config.title.as_deref(), Some("Tool"));
///
/// let catalog = config.apply(CommandsSet::default());
/// assert_eq!(catalog.output, OutputTarget::Log);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpConfig {
    /// Title printed above the usage table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Free-text usage statement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_statement: Option<String>,
    /// Console or log output.
    pub output: OutputTarget,
    /// Catalog file, relative paths resolved against the config file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

impl HelpConfig {
    /// Loads configuration from a YAML file.
    ///
    /// A relative `catalog` path is resolved against the directory holding
    /// the configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::LoaderError::IoError) if the file cannot
    /// be read, or [`YamlError`](crate::LoaderError::YamlError) if parsing
    /// fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let mut config: Self = serde_yaml::from_reader(reader)?;

        if let (Some(catalog), Some(parent)) = (&config.catalog, path.parent()) {
            if catalog.is_relative() {
                config.catalog = Some(parent.join(catalog));
            }
        }

        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::LoaderError::IoError) if the file cannot
    /// be written, or [`YamlError`](crate::LoaderError::YamlError) if
    /// serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Copies the usage statement and output target onto `catalog`.
    ///
    /// A catalog's existing usage statement is kept when the configuration
    /// has none.
    pub fn apply(&self, catalog: CommandsSet) -> CommandsSet {
        let catalog = catalog.with_output(self.output);
        match &self.usage_statement {
            Some(usage) => catalog.with_usage_statement(usage.as_str()),
            None => catalog,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use command_line_commands_core::Command;

    fn sample_yaml() -> &'static str {
        r#"
title: "Convert Tool"
usage_statement: "convert-tool <command> [options]"
output: log
catalog: commands.json
"#
    }

    #[test]
    fn test_deserialize_complete() {
        let config: HelpConfig = serde_yaml::from_str(sample_yaml()).unwrap();
        assert_eq!(config.title.as_deref(), Some("Convert Tool"));
        assert_eq!(
            config.usage_statement.as_deref(),
            Some("convert-tool <command> [options]")
        );
        assert_eq!(config.output, OutputTarget::Log);
        assert_eq!(config.catalog, Some(PathBuf::from("commands.json")));
    }

    #[test]
    fn test_deserialize_empty() {
        let config: HelpConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, HelpConfig::default());
        assert_eq!(config.output, OutputTarget::Console);
    }

    #[test]
    fn test_apply_keeps_existing_usage() {
        let catalog = CommandsSet::new(vec![Command::new("help")]).with_usage_statement("old");
        let applied = HelpConfig::default().apply(catalog);
        assert_eq!(applied.usage_statement.as_deref(), Some("old"));

        let config: HelpConfig = serde_yaml::from_str(sample_yaml()).unwrap();
        let applied = config.apply(applied);
        assert_eq!(
            applied.usage_statement.as_deref(),
            Some("convert-tool <command> [options]")
        );
        assert_eq!(applied.output, OutputTarget::Log);
    }

    #[test]
    fn test_load_save_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("help.yml");

        let original: HelpConfig = serde_yaml::from_str(sample_yaml()).unwrap();
        original.save(&path).unwrap();

        let loaded = HelpConfig::load(&path).unwrap();
        assert_eq!(loaded.title, original.title);
        assert_eq!(loaded.output, original.output);
        assert_eq!(loaded.catalog, Some(dir.path().join("commands.json")));
    }
}
