//! `roster` - CLI for the student roster
//!
//! This binary runs the scripted roster walkthrough and inspects the
//! configuration that drives it.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::{self, Write};

use clap::Parser;

use roster::cli::{Cli, Command, ConfigCommand, DemoCommand};
use roster::{demo, init_logging, Config, Roster};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;
    tracing::debug!("Loaded configuration: {:?}", config);

    // Execute the command
    match cli.command {
        Command::Demo(demo_cmd) => handle_demo(&config, &demo_cmd),
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

fn handle_demo(config: &Config, cmd: &DemoCommand) -> Result<(), Box<dyn std::error::Error>> {
    let mut roster = Roster::with_limits(config.limits);
    let steps = demo::run(&mut roster);

    let mut stdout = io::stdout().lock();
    demo::render(&mut stdout, &steps, cmd.format_or(config.output.format))?;
    stdout.flush()?;
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Limits]");
                println!(
                    "  Age:     {} to {}",
                    config.limits.min_age, config.limits.max_age
                );
                println!(
                    "  GPA:     {} to {}",
                    config.limits.min_gpa, config.limits.max_gpa
                );
                println!();
                println!("[Output]");
                println!("  Format:  {:?}", config.output.format);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
