//! Command-line front end for the safety filter.

#![allow(missing_docs)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use hero_shield::audit::DEFAULT_LOG_FILE;
use hero_shield::{
    AdminReview, CsvAuditLog, Outcome, PolicyConfig, SafetyClassifier, DEFAULT_REVIEW_COUNT,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "hero-shield", version, about = "Check text against the studio safety policy")]
struct Cli {
    /// TOML policy file; built-in lists are used when omitted
    #[arg(long, global = true, env = "HERO_SHIELD_CONFIG")]
    config: Option<PathBuf>,

    /// Audit log file
    #[arg(long, global = true, env = "HERO_SHIELD_LOG", default_value = DEFAULT_LOG_FILE)]
    log: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify text and record it if rejected
    Check {
        /// Text to check; multiple arguments are joined with spaces
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Try a word against the shields
    Drill {
        /// Word or phrase to try
        word: String,
    },
    /// Show the most recent audit records
    Review {
        /// Number of records to show
        #[arg(long, default_value_t = DEFAULT_REVIEW_COUNT)]
        count: usize,

        /// Password to unlock the review
        #[arg(long, env = PASSWORD_ENV, hide_env_values = true)]
        password: String,
    },
}

const EXIT_REJECTED: u8 = 2;

const PASSWORD_ENV: &str = "HERO_SHIELD_PASSWORD";
const ADMIN_PASSWORD_ENV: &str = "HERO_SHIELD_ADMIN_PASSWORD";
const DEFAULT_ADMIN_PASSWORD: &str = "admin";

// The expected password is never a flag, so it cannot be supplied alongside
// the guess on the same command line.
fn admin_password() -> String {
    match std::env::var(ADMIN_PASSWORD_ENV) {
        Ok(password) if !password.is_empty() => password,
        _ => {
            tracing::warn!("using the default admin password; set {ADMIN_PASSWORD_ENV}");
            DEFAULT_ADMIN_PASSWORD.to_string()
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> hero_shield::Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => PolicyConfig::load(path)?,
        None => PolicyConfig::default(),
    };
    let log = CsvAuditLog::new(cli.log);

    match cli.command {
        Command::Check { text } => {
            let shield = SafetyClassifier::new(config, log)?;
            match shield.check(&text.join(" ")) {
                Outcome::Allowed => {
                    println!("ALLOWED");
                    Ok(ExitCode::SUCCESS)
                }
                Outcome::Rejected(rejection) => {
                    println!("{rejection}");
                    Ok(ExitCode::from(EXIT_REJECTED))
                }
            }
        }
        Command::Drill { word } => {
            let shield = SafetyClassifier::new(config, log)?;
            if shield.check(&word).is_allowed() {
                println!("Try a banned word.");
            } else {
                println!("✅ SHIELD ACTIVE.");
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Review { count, password } => {
            let review = AdminReview::new(&log, admin_password());
            let records = review.recent(&password, count)?;
            if records.is_empty() {
                println!("No security events logged.");
            }
            for record in records {
                println!("{record}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
