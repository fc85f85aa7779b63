//! Weaver Share - CLI
//!
//! Formats a Weaver word chain into a shareable emoji grid, interactively or
//! from the command line, with optional clipboard copy.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use weaver_share::{
    clipboard::copy_to_clipboard,
    commands::{ShareConfig, run_interactive, share_chain},
    core::CaseFormat,
    output::print_share_result,
};

#[derive(Parser)]
#[command(
    name = "weaver_share",
    about = "Shareable result grids for the Weaver word game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Display casing: upper (default), lower, title, original
    #[arg(short, long, global = true, default_value = "upper")]
    case: String,

    /// Grid date as DD/MM/YYYY (default: today)
    #[arg(short, long, global = true)]
    date: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive prompt mode (default)
    Interactive,

    /// Render a grid straight from the arguments
    Share {
        /// The start word
        start: String,

        /// The target word
        target: String,

        /// The intermediate guesses, in order
        guesses: Vec<String>,

        /// Optimal chain length for the header ratio (0 omits it)
        #[arg(short, long, default_value = "0")]
        optimal: usize,

        /// Copy the grid to the clipboard
        #[arg(long)]
        copy: bool,
    },
}

/// Parse the --date flag, defaulting to today
fn resolve_date(flag: Option<&str>) -> Result<NaiveDate> {
    match flag {
        Some(raw) => NaiveDate::parse_from_str(raw, "%d/%m/%Y")
            .map_err(|e| anyhow::anyhow!("Invalid date '{raw}' (expected DD/MM/YYYY): {e}")),
        None => Ok(Local::now().date_naive()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let case_format = CaseFormat::from_name(&cli.case);
    let date = resolve_date(cli.date.as_deref())?;

    // Default to interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Interactive);

    match command {
        Commands::Interactive => {
            run_interactive(case_format, date).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Share {
            start,
            target,
            guesses,
            optimal,
            copy,
        } => run_share_command(
            &ShareConfig {
                start,
                target,
                guesses,
                optimal_length: optimal,
                case_format,
                date,
            },
            copy,
        ),
    }
}

fn run_share_command(config: &ShareConfig, copy: bool) -> Result<()> {
    let result = share_chain(config).map_err(|e| anyhow::anyhow!(e))?;

    let copied = if copy {
        match copy_to_clipboard(&result.grid) {
            Ok(()) => true,
            Err(reason) => {
                eprintln!("⚠ {reason}");
                false
            }
        }
    } else {
        false
    };

    print_share_result(&result, copied);
    Ok(())
}
