//! # Ringgame CLI Library
//!
//! The terminal front end for the ringgame poker engine: an interactive
//! session of one human seat against heuristic opponents, plus a face-up
//! deal command for inspecting hands.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses
//! command-line arguments and executes the appropriate subcommand.
//!
//! ```no_run
//! use std::io;
//! use std::io::BufRead;
//! let args = vec!["ringgame", "deal", "--seed", "42"];
//! let stdin = io::stdin();
//! let mut input = stdin.lock();
//! let code = ringgame_cli::run(
//!     args,
//!     &mut io::stdout(),
//!     &mut io::stderr(),
//!     &mut input as &mut dyn BufRead,
//! );
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play rounds against heuristic AI opponents
//! - `deal`: Deal a single hand face up for inspection

use std::ffi::OsString;
use std::io::{BufRead, Write};

use clap::Parser;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod formatters;
pub mod ui;
pub mod validation;

mod human;
mod render;

use cli::{Cli, Commands};
use commands::{handle_deal_command, handle_play_command};
pub use error::CliError;

/// Parses command-line arguments and dispatches to the subcommand handlers.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
/// * `stdin` - Input stream for interactive play (typically `stdin().lock()`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors.
pub fn run<I, S>(
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            // clap renders its own help/usage text
            let rendered = e.render();
            let _ = write!(err, "{}", rendered);
            return if e.use_stderr() { 2 } else { 0 };
        }
    };

    let result = match cli.command {
        Commands::Play(opts) => handle_play_command(opts, out, err, stdin),
        Commands::Deal { seed, players } => handle_deal_command(seed, players, out, err),
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            2
        }
    }
}
