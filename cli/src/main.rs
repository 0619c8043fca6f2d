use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use command_line_commands_core::{ArgumentMatcher, CommandsSet, HELP_COMMAND, OutputTarget};
use command_line_commands_loader::{HelpConfig, load_catalog_file};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Exit code for arguments that do not match the catalog.
const EXIT_INVALID_ARGUMENTS: i32 = 2;

/// Output format for matched commands.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(name = "clc")]
#[command(about = "Match arguments against a command catalog and render its help")]
#[command(disable_help_subcommand = true)]
struct Cli {
    /// Enable debug logging on stderr.
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Print column-aligned help for a catalog.
    Help(HelpArgs),
    /// Match an argument list against a catalog and print the result.
    Parse(ParseArgs),
    /// Validate one or more catalog files.
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
struct CatalogArgs {
    /// Catalog file (JSON, or YAML by .yaml/.yml extension).
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Help configuration YAML (title, usage statement, output, catalog).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Title printed above the usage table (overrides the config).
    #[arg(long)]
    title: Option<String>,
    /// Send help through the log instead of stdout.
    #[arg(long)]
    log: bool,
}

#[derive(Debug, Args)]
struct HelpArgs {
    #[command(flatten)]
    catalog: CatalogArgs,
}

#[derive(Debug, Args)]
struct ParseArgs {
    #[command(flatten)]
    catalog: CatalogArgs,
    /// Output format for the matched command.
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
    /// Arguments to match, command name first (after `--`).
    #[arg(last = true)]
    arguments: Vec<String>,
}

#[derive(Debug, Args)]
struct ValidateArgs {
    /// Catalog files to validate.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

/// A loaded catalog plus the title to render it with.
struct Session {
    catalog: CommandsSet,
    title: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        CliCommand::Help(args) => run_help(args),
        CliCommand::Parse(args) => run_parse(args),
        CliCommand::Validate(args) => run_validate(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_session(args: CatalogArgs) -> Result<Session, String> {
    let config = match &args.config {
        Some(path) => HelpConfig::load(path)
            .map_err(|err| format!("Failed to load config '{}': {err}", path.display()))?,
        None => HelpConfig::default(),
    };

    let catalog_path = args
        .catalog
        .or_else(|| config.catalog.clone())
        .ok_or_else(|| "Specify --catalog or a --config with a catalog entry".to_string())?;

    let catalog = load_catalog_file(&catalog_path)
        .map_err(|err| format!("Failed to load catalog '{}': {err}", catalog_path.display()))?;
    debug!(path = %catalog_path.display(), commands = catalog.len(), "Catalog ready");

    let mut catalog = config.apply(catalog);
    if args.log {
        catalog = catalog.with_output(OutputTarget::Log);
    }

    Ok(Session {
        catalog,
        title: args.title.or(config.title),
    })
}

fn run_help(args: HelpArgs) -> Result<(), String> {
    let session = load_session(args.catalog)?;
    session.catalog.show_help(session.title.as_deref());
    Ok(())
}

fn run_parse(args: ParseArgs) -> Result<(), String> {
    let session = load_session(args.catalog)?;
    let matcher = ArgumentMatcher::new(&session.catalog);

    let command = match matcher.parse(&args.arguments) {
        Ok(command) => command,
        Err(err) => {
            debug!(kind = ?err.kind(), "Arguments did not match");
            eprintln!("error: {err}");
            session.catalog.show_help(session.title.as_deref());
            std::process::exit(EXIT_INVALID_ARGUMENTS);
        }
    };

    if command.name() == HELP_COMMAND {
        session.catalog.show_help(session.title.as_deref());
        return Ok(());
    }

    let raw = match args.format {
        CliOutputFormat::Json => serde_json::to_string_pretty(&command)
            .map_err(|err| format!("JSON serialization failed: {err}"))?,
        CliOutputFormat::Yaml => serde_yaml::to_string(&command)
            .map_err(|err| format!("YAML serialization failed: {err}"))?,
    };
    println!("{raw}");
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<(), String> {
    let mut commands = 0usize;
    for path in &args.inputs {
        let catalog =
            load_catalog_file(path).map_err(|err| format!("{}: {err}", path.display()))?;
        commands += catalog.len();
    }

    println!(
        "Validated {} catalog file(s) with {} command(s).",
        args.inputs.len(),
        commands
    );
    Ok(())
}
