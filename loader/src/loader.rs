//! Catalog loading with builder pattern and fallback chains.
//!
//! A catalog document is an array of command objects:
//!
//! ```json
//! [
//!   { "command": "help", "description": "Show this information" },
//!   {
//!     "command": "convert",
//!     "description": "Convert file for some reason",
//!     "options": [{ "shortName": "e", "longName": "encoding", "requiresParameter": true }],
//!     "parameters": ["input file path", "output file path"],
//!     "parameterCount": 2
//!   }
//! ]
//! ```
//!
//! The same shape is accepted as YAML. Every loaded catalog is validated
//! with [`validate_catalog`] before it is returned.
//!
//! ```no_run
//! use command_line_commands_loader::{CatalogLoader, load_catalog_file};
//!
//! let catalog = load_catalog_file("commands.json").unwrap();
//!
//! // First source that loads wins
//! let loaded = CatalogLoader::builder()
//!     .from_file("/etc/tool/commands.yaml")
//!     .from_file("commands.json")
//!     .build()
//!     .unwrap();
//! println!("{} commands", loaded.catalog.len());
//! ```

use std::path::{Path, PathBuf};

use command_line_commands_core::{Command, CommandsSet, validate_catalog};
use tracing::{debug, warn};

use crate::error::{LoaderError, Result};

/// Serialization format of a catalog document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    /// Picks the format from a file extension; anything but `yaml`/`yml` is
    /// JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_line_commands_loader::CatalogFormat;
    ///
    /// assert_eq!(CatalogFormat::from_path("commands.yml"), CatalogFormat::Yaml);
    /// assert_eq!(CatalogFormat::from_path("commands.json"), CatalogFormat::Json);
    /// assert_eq!(CatalogFormat::from_path("commands"), CatalogFormat::Json);
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Parses and validates a catalog document.
///
/// # Errors
///
/// Returns [`LoaderError::JsonError`] / [`LoaderError::YamlError`] for
/// malformed input and [`LoaderError::InvalidCatalog`] when validation fails.
pub fn parse_catalog(text: &str, format: CatalogFormat) -> Result<CommandsSet> {
    let commands: Vec<Command> = match format {
        CatalogFormat::Json => serde_json::from_str(text)?,
        CatalogFormat::Yaml => serde_yaml::from_str(text)?,
    };
    let catalog = CommandsSet::new(commands);

    if let Some(error) = validate_catalog(&catalog).into_iter().next() {
        return Err(error.into());
    }

    Ok(catalog)
}

/// Parses a JSON catalog document.
///
/// # Examples
///
/// ```
/// use command_line_commands_loader::load_catalog_json;
///
/// let catalog = load_catalog_json(r#"[{ "command": "help" }, { "command": "check", "parameterCount": 1 }]"#).unwrap();
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.find("check").unwrap().required_parameter_count, 1);
///
/// assert!(load_catalog_json(r#"[{ "command": "help" }, { "command": "help" }]"#).is_err());
/// ```
pub fn load_catalog_json(text: &str) -> Result<CommandsSet> {
    parse_catalog(text, CatalogFormat::Json)
}

/// Parses a YAML catalog document.
pub fn load_catalog_yaml(text: &str) -> Result<CommandsSet> {
    parse_catalog(text, CatalogFormat::Yaml)
}

/// Reads a catalog file, choosing the format from its extension.
///
/// # Errors
///
/// Returns [`LoaderError::NotFound`] if the file does not exist, plus any
/// error from [`parse_catalog`].
pub fn load_catalog_file(path: impl AsRef<Path>) -> Result<CommandsSet> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(LoaderError::NotFound(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path)?;
    let format = CatalogFormat::from_path(path);
    let catalog = parse_catalog(&text, format)?;
    debug!(path = %path.display(), ?format, commands = catalog.len(), "Loaded command catalog");
    Ok(catalog)
}

/// Writes a catalog's templates as pretty JSON (or YAML, by extension).
pub fn save_catalog_file(catalog: &CommandsSet, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let text = match CatalogFormat::from_path(path) {
        CatalogFormat::Json => serde_json::to_string_pretty(catalog.commands())?,
        CatalogFormat::Yaml => serde_yaml::to_string(catalog.commands())?,
    };
    std::fs::write(path, text)?;
    Ok(())
}

/// Describes where a catalog was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// A single catalog file.
    File(PathBuf),
    /// A fallback chain; the catalog came from the first loadable entry.
    Multiple(Vec<CatalogSource>),
}

/// A catalog together with its origin.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: CommandsSet,
    pub source: CatalogSource,
}

/// Entry point for fallback-chain loading.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Returns a new [`CatalogLoaderBuilder`].
    pub fn builder() -> CatalogLoaderBuilder {
        CatalogLoaderBuilder::new()
    }
}

/// Builder for loading a catalog from the first of several files.
///
/// Sources are tried in the order they are added. A source that is missing
/// or fails to parse is skipped; if all fail,
/// [`LoaderError::NoSourcesAvailable`] is returned.
#[derive(Debug, Default)]
pub struct CatalogLoaderBuilder {
    sources: Vec<PathBuf>,
}

impl CatalogLoaderBuilder {
    /// Creates a builder with no sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a catalog file as a source.
    pub fn from_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources.push(path.into());
        self
    }

    /// Loads from the first source that succeeds.
    pub fn build(self) -> Result<LoadedCatalog> {
        let all_sources: Vec<CatalogSource> = self
            .sources
            .iter()
            .cloned()
            .map(CatalogSource::File)
            .collect();

        for path in &self.sources {
            match load_catalog_file(path) {
                Ok(catalog) => {
                    let source = if all_sources.len() == 1 {
                        CatalogSource::File(path.clone())
                    } else {
                        CatalogSource::Multiple(all_sources)
                    };
                    return Ok(LoadedCatalog { catalog, source });
                }
                Err(error) => {
                    warn!(path = %path.display(), error = %error, "Skipping catalog source");
                }
            }
        }

        Err(LoaderError::NoSourcesAvailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use command_line_commands_core::{CatalogError, CommandOption};

    const SAMPLE_JSON: &str = r#"[
        { "command": "help", "description": "Show this information" },
        {
            "command": "command-seven",
            "description": "A command with an option that has a value.",
            "options": [{ "shortName": "e", "longName": "encoding", "requiresParameter": true }],
            "parameterCount": 1
        }
    ]"#;

    const SAMPLE_YAML: &str = r#"
- command: help
  description: Show this information
- command: command-seven
  description: A command with an option that has a value.
  options:
    - shortName: e
      longName: encoding
      requiresParameter: true
  parameterCount: 1
"#;

    #[test]
    fn test_json_and_yaml_agree() {
        let json = load_catalog_json(SAMPLE_JSON).unwrap();
        let yaml = load_catalog_yaml(SAMPLE_YAML).unwrap();
        assert_eq!(json, yaml);

        let seven = json.find("command-seven").unwrap();
        assert_eq!(
            seven.options,
            vec![CommandOption::with_value(Some("e"), Some("encoding"))]
        );
    }

    #[test]
    fn test_malformed_json() {
        let error = load_catalog_json("[{ \"command\": ").unwrap_err();
        assert!(matches!(error, LoaderError::JsonError(_)));
    }

    #[test]
    fn test_missing_command_field() {
        let error = load_catalog_json(r#"[{ "description": "nameless" }]"#).unwrap_err();
        assert!(matches!(error, LoaderError::JsonError(_)));
    }

    #[test]
    fn test_invalid_catalog_rejected() {
        let error = load_catalog_json(r#"[{ "command": "" }]"#).unwrap_err();
        assert!(matches!(
            error,
            LoaderError::InvalidCatalog(CatalogError::EmptyCommandName)
        ));
    }

    #[test]
    fn test_missing_file() {
        let error = load_catalog_file("/nonexistent/commands.json").unwrap_err();
        assert!(matches!(error, LoaderError::NotFound(_)));
    }

    #[test]
    fn test_builder_without_sources() {
        let error = CatalogLoader::builder().build().unwrap_err();
        assert!(matches!(error, LoaderError::NoSourcesAvailable));
    }
}
