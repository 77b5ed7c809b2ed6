//! Configuration commands.

use std::path::Path;

use crate::config::{self, Config};

/// Print the effective configuration, or write a default config file.
pub fn cmd_config(config: &Config, explicit_path: Option<&Path>, init: bool) -> anyhow::Result<()> {
    let path = match explicit_path {
        Some(path) => Some(path.to_path_buf()),
        None => config::config_path(),
    };

    if init {
        let Some(path) = path else {
            anyhow::bail!(config::ConfigError::NoConfigDir);
        };
        if path.exists() {
            println!("Config already exists at {}", path.display());
            return Ok(());
        }
        config::save_to(&Config::default(), &path)?;
        println!("✓ Wrote default config to {}", path.display());
        return Ok(());
    }

    match &path {
        Some(path) if path.exists() => println!("# {}", path.display()),
        Some(path) => println!("# {} (not created, showing defaults)", path.display()),
        None => println!("# no config directory, showing defaults"),
    }
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
