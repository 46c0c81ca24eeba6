//! Envseal - authenticated encryption for .env files.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use envseal::cli::output;
use envseal::cli::{execute, Cli};
use envseal::error::{CryptoError, Error};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("ENVSEAL_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("envseal=debug")
        } else {
            EnvFilter::new("envseal=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command, cli.key) {
        // Format error with suggestion if available
        let suggestion = match &e {
            Error::Crypto(CryptoError::Decryption) => {
                Some("check that the right key is available (ENVSEAL_KEY or .envseal.key)")
            }
            Error::Crypto(CryptoError::Format(_)) => {
                Some("the file does not look like envseal output")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
