//! File-based configuration example

use envi::FromEnv;
use std::io::Write;
use tempfile::NamedTempFile;

#[derive(Debug, FromEnv)]
struct Config {
    // File-based configuration: load from API_KEY or API_KEY_FILE
    #[env(name = "API_KEY", from_file)]
    pub api_key: String,

    // Parsed after reading, like any other value
    #[env(name = "DATABASE_PORT", from_file)]
    pub database_port: u16,

    // Regular environment variable
    #[env(name = "DATABASE_HOST")]
    pub database_host: String,
}

fn main() -> anyhow::Result<()> {
    // Save API key to file
    let mut api_key_file = NamedTempFile::new()?;
    writeln!(api_key_file, "super_secret_api_key_12345")?;

    // Save database port to file
    let mut db_port_file = NamedTempFile::new()?;
    writeln!(db_port_file, "5432")?;

    // Set environment variables (with _FILE suffix)
    std::env::set_var("API_KEY_FILE", api_key_file.path());
    std::env::set_var("DATABASE_PORT_FILE", db_port_file.path());
    std::env::set_var("DATABASE_HOST", "localhost");

    // Load configuration
    let config = Config::from_env()?;

    println!("Configuration loaded from files:");
    println!("  API Key: {}", config.api_key);
    println!("  Database Port: {}", config.database_port);
    println!("  Database Host: {}", config.database_host);

    Ok(())
}
