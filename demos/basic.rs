//! Basic usage example

use envi::FromEnv;

#[derive(Debug, FromEnv)]
struct Config {
    // Loaded from DATABASE_URL
    #[env(name = "DATABASE_URL")]
    pub database_url: String,

    // With default value
    #[env(name = "SERVER_ADDR", default = "127.0.0.1:8080".to_string())]
    pub server_addr: String,

    // Numeric type
    #[env(name = "MAX_CONNECTIONS", default = 10)]
    pub max_connections: u32,

    // Boolean type: 1/t/true, 0/f/false, anything else non-empty is true
    #[env(name = "DEBUG_MODE")]
    pub debug_mode: bool,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("SERVER_ADDR", "0.0.0.0:3000");
    std::env::set_var("DEBUG_MODE", "yes");

    // Load configuration
    let config = Config::from_env()?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Server Address: {}", config.server_addr);
    println!("  Max Connections: {}", config.max_connections);
    println!("  Debug Mode: {}", config.debug_mode);

    Ok(())
}
