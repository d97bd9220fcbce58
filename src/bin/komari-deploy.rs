use anyhow::{Context, Result};
use komari::{DeployConfig, Deployer};

fn main() -> Result<()> {
    let config = DeployConfig::parse();
    komari::logging::init(config.verbose);

    config.validate().context("Invalid configuration")?;
    Deployer::new(&config).run().context("Deploy failed")?;

    Ok(())
}
