use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;

use clap::Parser;

/// Render bracket-tag markup to ANSI escape sequences.
///
/// The message comes from stdin when it is piped, otherwise from the
/// arguments, joined with single spaces.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Markup text, e.g. `[b]bold[/b]` or `[color=red]alert[/]`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    message: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let message = if io::stdin().is_terminal() {
        cli.message.join(" ")
    } else {
        let mut piped = String::new();
        if let Err(err) = io::stdin().read_to_string(&mut piped) {
            eprintln!("failed to read stdin: {err}");
            return ExitCode::FAILURE;
        }
        piped.trim_end_matches(['\r', '\n']).to_string()
    };

    if message.is_empty() {
        return ExitCode::SUCCESS;
    }

    match markup::render(&message) {
        Ok(rendered) => {
            println!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err.rendered());
            ExitCode::FAILURE
        }
    }
}
