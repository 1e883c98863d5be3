use market_index::{migrate, SqliteConfig};

fn main() -> anyhow::Result<()> {
    market_index::init_logging()?;

    let stdout = std::io::stdout();
    migrate::run(&SqliteConfig::default(), &mut stdout.lock())?;
    Ok(())
}
