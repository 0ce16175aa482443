use crate::config::{CONFIG_FILE_NAME, DatabaseUrl, ReadlistConfig};
use crate::error::ReadlistError;
use anyhow::Result;
use colored::Colorize;

const DEFAULT_DATA_DIR: &str = ".readlist";

pub fn handle_init(database_url: Option<String>) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Err(ReadlistError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    let mut config = ReadlistConfig::default();
    config.readlist.database_url =
        database_url.unwrap_or_else(|| format!("file:{}", DEFAULT_DATA_DIR));

    // Create data directory for document stores
    let data_path = match config.database_url()?.resolve(&cwd) {
        DatabaseUrl::File(path) => {
            std::fs::create_dir_all(&path)?;
            Some(path)
        }
        DatabaseUrl::Memory => None,
    };

    config.save(&config_path)?;

    println!(
        "{} readlist project in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config: {}", config_path.display());
    match data_path {
        Some(path) => println!("  Data:   {}", path.display()),
        None => println!("  Data:   {}", "in memory".dimmed()),
    }

    Ok(())
}
