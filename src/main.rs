use anyhow::{Context, Result};
use komari::BuildConfig;

fn main() -> Result<()> {
    let config = BuildConfig::parse();
    komari::logging::init(config.verbose);

    config.validate().context("Invalid configuration")?;
    komari::build(&config).context("Failed to build document")?;

    Ok(())
}
