//! Library of Stuff - console lending desk
//!
//! Loads configuration, seeds the catalog and runs the interactive shell
//! on stdin/stdout. Logs go to stderr.

use std::io;

use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use library_of_stuff::{
    config::{AppConfig, LoggingConfig},
    services::Catalog,
    shell::Shell,
};

#[derive(Parser)]
#[command(name = "library-of-stuff", version)]
#[command(about = "Borrow and return tools, appliances and garden equipment.")]
struct CommandLine {
    /// Log in as this user instead of prompting for one
    #[arg(short, long)]
    user: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let commands = CommandLine::parse();

    // Load configuration
    let config = AppConfig::load()?;

    init_tracing(&config.logging);

    tracing::info!("Starting Library of Stuff v{}", env!("CARGO_PKG_VERSION"));

    let mut catalog = Catalog::from_config(&config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(&mut catalog, stdin.lock(), stdout.lock());

    if let Some(user) = commands.user.as_deref() {
        shell.preselect_user(user);
    }
    shell.run()?;

    tracing::info!("Session closed");
    Ok(())
}

/// Initialize tracing, writing to stderr so logs never mix with shell output
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("library_of_stuff={}", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);

    match logging.format.as_str() {
        "json" => registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .init(),
        _ => registry
            .with(fmt::layer().with_writer(io::stderr))
            .init(),
    }
}
