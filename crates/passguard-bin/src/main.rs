use clap::{Parser, Subcommand};
use passguard_lib::{generate_password, hash_password, verify_password, Settings};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "passguard", about = "Password policy checks, credential hashing, and generation")]
struct Cli {
    /// Path to a settings file (defaults to passguard.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate a candidate password against the policy
    Check { password: String },
    /// Hash a password, printing the serialized stored credential
    Hash { password: String },
    /// Verify a password against a stored credential
    Verify { password: String, stored: String },
    /// Generate a random password satisfying the policy
    Generate {
        #[arg(long)]
        length: Option<usize>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize configuration
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };

    // Initialize tracing; RUST_LOG wins over the configured level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_level)),
        )
        .init();

    let policy = settings.policy();

    match cli.command {
        Command::Check { password } => {
            let report = policy.evaluate(&password);
            println!("{}", serde_json::to_string_pretty(&report)?);
            if !report.valid {
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Hash { password } => {
            let stored = hash_password(&password)?;
            println!("{stored}");
        },
        Command::Verify { password, stored } => {
            if verify_password(&password, &stored) {
                println!("match");
            } else {
                println!("no match");
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Generate { length } => {
            let length = length.unwrap_or(settings.generated_length);
            tracing::debug!(length, "generating password");
            let password = generate_password(&policy, length)?;
            println!("{password}");
        },
    }

    Ok(ExitCode::SUCCESS)
}
