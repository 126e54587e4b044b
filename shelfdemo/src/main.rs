use shelf_core::ProductCache;
use shelf_sqlite::Db;
use shelfdemo::{AppConfig, Cli};
use std::io::{Write as _, stdout};
use tracing::{Level, event};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // By convention, we leverage `tracing` to instrument and log various
    // operations throughout this project. Logs go to stderr so the JSON
    // written to stdout stays machine-readable.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::import()?;

    // Create config with proper layering of CLI args
    let AppConfig {
        database,
        cache,
        seed,
        views,
    } = AppConfig::load(&cli)?;

    let db = Db::open(&database).await?;
    let mut products = ProductCache::new(db, seed.load()?, cache);
    products.init().await;

    let selected = cli.command.evaluate(&mut products, &views).await?;

    // Let any outstanding background writes finish before exiting
    products.settle().await;
    let failures = products.take_failures();

    let mut out = stdout().lock();
    serde_json::to_writer_pretty(&mut out, &selected)?;
    writeln!(out)?;

    if !failures.is_empty() {
        event!(Level::WARN, count = failures.len(), "remote store diverged from the cache");
        anyhow::bail!("{} remote operation(s) failed", failures.len());
    }

    Ok(())
}
