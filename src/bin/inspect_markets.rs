use market_index::{inspect, SqliteConfig};

fn main() -> anyhow::Result<()> {
    market_index::init_logging()?;

    let stdout = std::io::stdout();
    inspect::run(&SqliteConfig::default(), &mut stdout.lock())?;
    Ok(())
}
