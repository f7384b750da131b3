//! # Validate Command
//!
//! Checks a nav.json file and reports the outcome:
//!
//! ```bash
//! navjson                                # docs/nav.json, document checks only
//! navjson --file site/nav.json --check-files
//! navjson --silent || echo "invalid"     # exit status only
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use navjson_core::{check, CheckConfig, DEFAULT_NAV_FILE};

/// Arguments for validating a nav.json file.
#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Path to the nav.json file.
    #[arg(long, default_value = DEFAULT_NAV_FILE)]
    pub file: PathBuf,

    /// Print nothing; report failure through the exit status only.
    #[arg(long)]
    pub silent: bool,

    /// Verify that every file referenced by the document exists, relative
    /// to the directory containing the nav.json file.
    #[arg(long)]
    pub check_files: bool,
}

impl ValidateArgs {
    /// The core configuration these arguments describe.
    pub fn config(&self) -> CheckConfig {
        CheckConfig::new(&self.file).with_check_files(self.check_files)
    }
}

/// Validate the nav.json file described by `args`.
///
/// Returns the process exit code on success. Validation failures are
/// returned as errors; the caller decides how to surface them.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let config = args.config();
    tracing::info!(
        file = %config.file.display(),
        check_files = config.check_files,
        "validating nav.json"
    );

    let loaded = check(&config)?;
    tracing::debug!(entries = loaded.document.entry_count(), "nav.json is valid");

    if !args.silent {
        println!("File `{}` is valid", args.file.display());
    }
    Ok(0)
}
