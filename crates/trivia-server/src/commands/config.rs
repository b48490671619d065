//! Config command handlers

use std::path::PathBuf;

use anyhow::Result;

use trivia_core::Config;

/// Show the effective configuration
pub fn show(config: &Config, config_path: Option<&PathBuf>) -> Result<()> {
    let effective_path = config_path
        .cloned()
        .unwrap_or_else(Config::config_file_path);

    println!("Configuration:");
    println!("  data_dir:  {}", config.data_dir.display());
    println!("  database:  {}", config.sqlite_path().display());
    println!("  bind_addr: {}", config.bind_addr);
    println!(
        "  log_level: {}",
        config.log_level.as_deref().unwrap_or("(not set, using info)")
    );
    println!();
    println!("Config file: {}", effective_path.display());
    println!();
    println!("As TOML:");
    print!("{}", config.to_toml()?);

    Ok(())
}
