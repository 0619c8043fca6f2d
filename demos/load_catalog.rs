//! Loading a catalog from disk.
//!
//! Writes a JSON catalog and a help configuration to a temporary
//! directory, loads them through the fallback builder, and matches an
//! argument list against the result.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p command-line-commands-demos --example load_catalog
//! ```

use command_line_commands_core::ArgumentMatcher;
use command_line_commands_loader::{CatalogLoader, HelpConfig};

fn main() {
    let dir = std::env::temp_dir().join("command_line_commands_demo");
    std::fs::create_dir_all(&dir).unwrap();

    let catalog = serde_json::json!([
        { "command": "help", "description": "Show this information" },
        {
            "command": "serve",
            "description": "Start the server",
            "options": [
                { "shortName": "p", "longName": "port", "requiresParameter": true },
                { "longName": "verbose" }
            ]
        }
    ]);
    std::fs::write(
        dir.join("commands.json"),
        serde_json::to_string_pretty(&catalog).unwrap(),
    )
    .unwrap();
    std::fs::write(
        dir.join("help.yml"),
        "title: Demo Server\nusage_statement: \"server <command> [options]\"\ncatalog: commands.json\n",
    )
    .unwrap();

    let config = HelpConfig::load(dir.join("help.yml")).unwrap();

    // The first path does not exist, so the loader falls through to the config's catalog.
    let mut builder = CatalogLoader::builder().from_file(dir.join("missing.yaml"));
    if let Some(path) = &config.catalog {
        builder = builder.from_file(path);
    }
    let loaded = builder.build().unwrap();
    println!("Loaded {} commands from {:?}", loaded.catalog.len(), loaded.source);

    let catalog = config.apply(loaded.catalog);
    let matcher = ArgumentMatcher::new(&catalog);
    match matcher.parse(&["serve", "--port", "8080", "--verbose"]) {
        Ok(command) => println!("{}", serde_json::to_string_pretty(&command).unwrap()),
        Err(err) => println!("error: {err}"),
    }
    println!();

    catalog.show_help(config.title.as_deref());

    let _ = std::fs::remove_dir_all(&dir);
}
