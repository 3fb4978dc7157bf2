use anyhow::Result;

use ticker_core::TickerConfig;

pub fn run(init: bool, force: bool) -> Result<()> {
    let path = TickerConfig::config_path();

    if init {
        if path.exists() && !force {
            println!("Config already exists at {}", path.display());
            println!("\nTo overwrite it with the defaults, run:");
            println!("  ticker config --init --force");
            return Ok(());
        }
        TickerConfig::default().save()?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    println!("Config file: {}\n", path.display());
    if path.exists() {
        let config = TickerConfig::load()?;
        print!("{}", config.to_toml()?);
    } else {
        println!("No config file yet, using defaults:\n");
        print!("{}", TickerConfig::default().to_toml()?);
        println!("\nTo write them to disk, run:");
        println!("  ticker config --init");
    }

    Ok(())
}
