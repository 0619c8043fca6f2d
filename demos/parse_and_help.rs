//! Matching arguments against an in-code catalog.
//!
//! Builds a small catalog, matches a few argument lists against it, falls
//! back to a prefix-based inference hook for unknown names, and prints the
//! generated help.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p command-line-commands-demos --example parse_and_help
//! ```

use command_line_commands_core::{
    ArgumentMatcher, Command, CommandLine, CommandOption, CommandsSet,
};

fn main() {
    let catalog = CommandsSet::new(vec![
        Command::new("help").with_description("Show this information"),
        Command::new("check")
            .with_description("Check file for some text")
            .with_parameter("file path")
            .with_required_parameters(1),
        Command::new("convert")
            .with_description("Convert file for some reason")
            .with_options([
                CommandOption::with_value(Some("e"), Some("encoding")),
                CommandOption::flag(Some("n"), Some("dryrun")),
            ])
            .with_parameters(["input file path", "output file path"])
            .with_required_parameters(2),
    ])
    .with_usage_statement("demo <command> [options] [parameters]");

    let inputs: [&[&str]; 5] = [
        &["convert", "in.txt", "out.txt", "-e", "utf8", "--dryrun"],
        &["check"],
        &["convert", "in.txt", "out.txt", "--verbose"],
        &["HELP"],
        &[],
    ];

    for arguments in inputs {
        let line = CommandLine::new(&catalog, arguments);
        match line.command() {
            Some(_) if line.is_help() => println!("{arguments:?} -> help requested"),
            Some(command) => {
                let options: Vec<String> = command
                    .options
                    .iter()
                    .map(|option| match &option.parameter {
                        Some(value) => format!("{}={value}", option.canonical_name()),
                        None => option.canonical_name().to_string(),
                    })
                    .collect();
                println!(
                    "{arguments:?} -> {} options={options:?} parameters={:?}",
                    command.name(),
                    command.parameters
                );
            }
            None => println!(
                "{arguments:?} -> error: {}",
                line.error_message().unwrap_or_default()
            ),
        }
    }
    println!();

    // Unknown names can be resolved by an inference hook.
    let matcher = ArgumentMatcher::new(&catalog).with_infer(
        |name: &str, commands: &[Command]| -> Option<Command> {
            commands
                .iter()
                .find(|command| command.name().starts_with(name))
                .cloned()
        },
    );
    match matcher.parse(&["conv", "a.txt", "b.txt"]) {
        Ok(command) => println!("inferred 'conv' as '{}'", command.name()),
        Err(err) => println!("inference failed: {err}"),
    }
    println!();

    print!("{}", catalog.get_help(Some("Demo Tool")));
}
