//! validate-marketplace CLI entry point
//!
//! Parses arguments, runs the validation, and maps the outcome to an exit
//! code: 0 for a valid document, 1 for anything else.

use anyhow::Result;
use clap::Parser;
use marketplace_validator::cli::{self, is_usage_error};
use marketplace_validator::constants::usage_line;
use marketplace_validator::core::{is_already_reported, user_friendly_error};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if is_usage_error(&e) => {
            println!("{}", usage_line());
            eprint!("{e}");
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            if !is_already_reported(&e) {
                user_friendly_error(e).display();
            }
            std::process::exit(1);
        }
    }
}
