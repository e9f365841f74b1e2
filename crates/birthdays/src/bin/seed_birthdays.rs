//! Seeds the configured SQLite database with demo birthdays for one owner.

use anyhow::Result;
use birthdays::{telemetry, BirthdayList, BirthdayStore, Config};
use birthdays_core::birthday::generate_seed_birthdays;
use clap::Parser;

/// seed-birthdays - Insert demo birthdays for development
#[derive(Parser, Debug)]
#[command(name = "seed-birthdays")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Owner to create the birthdays for
    #[arg(long, short, env = "SEED_USER_ID")]
    user_id: String,

    /// Number of birthdays to insert
    #[arg(long, short, default_value = "5")]
    count: usize,

    /// SQLite database path (overrides BIRTHDAYS_DATABASE_PATH)
    #[arg(long, short)]
    database: Option<String>,
}

/// Applies the `--database` flag on top of the environment configuration.
fn resolve_config(base: Config, database: Option<String>) -> Config {
    match database {
        Some(path) => base.with_database_path(path),
        None => base,
    }
}

fn render_birthdays(list: &BirthdayList) -> serde_json::Result<String> {
    serde_json::to_string_pretty(list)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    telemetry::init_tracing("birthdays=info,seed_birthdays=info")?;

    let config = resolve_config(Config::from_env(), cli.database);
    let store = BirthdayStore::open(&config).await?;

    for birthday in generate_seed_birthdays(&cli.user_id, cli.count) {
        let stored = store.add_birthday(birthday).await?;
        tracing::info!(id = %stored.id, name = %stored.name, date = %stored.date, "Seeded birthday");
    }

    let listed = store.get_birthdays(&cli.user_id).await?;
    println!("{}", render_birthdays(&listed)?);

    store.close().await?;
    Ok(())
}
