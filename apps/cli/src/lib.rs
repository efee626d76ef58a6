//! # bookledger CLI
//!
//! Interactive front end for the bookstore sales ledger.
//!
//! ## Startup Sequence
//! ```text
//! 1. Initialize tracing (stderr, RUST_LOG, default "warn")
//! 2. Load AppConfig from the environment
//! 3. Create the data directory
//! 4. Open the database (migrations + seed)
//! 5. Run the menu loop on stdin/stdout
//! 6. Close the pool
//! ```

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use bookledger_db::Database;

pub mod config;
pub mod console;
pub mod error;
pub mod menu;
pub mod report;

pub use config::{AppConfig, ConfigError};
pub use console::Console;
pub use menu::{run_menu, MenuChoice};

/// Runs the application until the user exits.
pub async fn run() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::load()?;
    config.ensure_data_dir()?;
    info!(
        path = %config.database_path.display(),
        seed = config.seed_sample_data,
        "Opening ledger"
    );

    let db = Database::new(config.db_config()).await?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    let outcome = run_menu(&db, &mut console).await;

    db.close().await;
    info!("Ledger closed");

    outcome?;
    Ok(())
}

/// Logs go to stderr so they never interleave with menu output on stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
