use clap::Parser;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use tatoolkit::cli::{Cli, Commands};
use tatoolkit::commands::Command;
use tatoolkit::logging::{default_log_level, init_logging};
use tatoolkit::parser::parse_command;
use tatoolkit::storage::paths::log_dir;

const EXIT_WORDS: [&str; 2] = ["exit", "quit"];

fn main() -> Result<ExitCode, Box<dyn Error>> {
    // Load .env file from current directory
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    if let Err(err) = start_logging(level) {
        eprintln!("warning: logging disabled: {}", err);
    }

    match &cli.command {
        Some(Commands::Parse { args, json }) => {
            let line = args.join(" ");
            match parse_command(&line) {
                Ok(command) => {
                    println!("{}", render(&command, *json)?);
                    Ok(ExitCode::SUCCESS)
                }
                Err(err) => {
                    eprintln!("{}", err);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Some(Commands::Repl { json }) => {
            run_repl(*json)?;
            Ok(ExitCode::SUCCESS)
        }
        None => {
            run_repl(false)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Logging is diagnostic only; failing to start it never stops parsing.
fn start_logging(level: &str) -> Result<(), Box<dyn Error>> {
    init_logging(level, &log_dir()?)?;
    Ok(())
}

fn render(command: &Command, json: bool) -> Result<String, serde_json::Error> {
    if json {
        serde_json::to_string(command)
    } else {
        Ok(command.to_string())
    }
}

fn run_repl(json: bool) -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if EXIT_WORDS.contains(&trimmed) {
            break;
        }

        match parse_command(trimmed) {
            Ok(command) => writeln!(stdout, "{}", render(&command, json)?)?,
            Err(err) => writeln!(stdout, "{}", err)?,
        }
    }

    Ok(())
}
