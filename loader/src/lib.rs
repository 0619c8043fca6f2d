//! Catalog loading for command-line-commands.
//!
//! Loads a [`CommandsSet`](command_line_commands_core::CommandsSet) from JSON
//! or YAML text or files, validating it on the way in, and reads the
//! [`HelpConfig`] that controls how help is presented.
//!
//! # Quick start
//!
//! ```no_run
//! use command_line_commands_core::ArgumentMatcher;
//! use command_line_commands_loader::{HelpConfig, load_catalog_file};
//!
//! let config = HelpConfig::load("help.yml").unwrap();
//! let catalog = config.apply(load_catalog_file("commands.json").unwrap());
//!
//! let arguments: Vec<String> = std::env::args().skip(1).collect();
//! match ArgumentMatcher::new(&catalog).parse(&arguments) {
//!     Ok(command) => println!("running {}", command.name()),
//!     Err(error) => {
//!         eprintln!("{error}");
//!         catalog.show_help(config.title.as_deref());
//!     }
//! }
//! ```

mod config;
mod error;
mod loader;

pub use config::HelpConfig;
pub use error::{LoaderError, Result};
pub use loader::{
    CatalogFormat, CatalogLoader, CatalogLoaderBuilder, CatalogSource, LoadedCatalog,
    load_catalog_file, load_catalog_json, load_catalog_yaml, parse_catalog, save_catalog_file,
};
