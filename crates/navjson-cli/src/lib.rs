//! # navjson-cli — nav.json Command-Line Validator
//!
//! Provides the `navjson` binary, a thin wrapper around `navjson-core`:
//!
//! ```bash
//! navjson --file docs/nav.json --check-files
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing lives here; parsing and validation live in
//!   `navjson-core`.
//! - Only `main` decides exit codes and whether anything is printed.

pub mod validate;

pub use validate::{run_validate, ValidateArgs};

/// Log filter directive for a `-v` count, used when `RUST_LOG` is unset.
pub fn verbosity_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
