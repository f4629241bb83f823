//! Example demonstrating nested structs

use envi::FromEnv;

#[derive(Debug, Default, FromEnv)]
struct Database {
    #[env(name = "DB_HOST")]
    pub host: String,

    #[env(name = "DB_PORT")]
    pub port: u16,
}

#[derive(Debug, Default, FromEnv)]
struct Tls {
    #[env(name = "TLS_CERT")]
    pub cert: String,

    #[env(name = "TLS_KEY", from_file)]
    pub key: String,
}

#[derive(Debug, FromEnv)]
struct Config {
    // Always present, unset fields keep their defaults
    pub database: Database,

    // None unless at least one TLS_* variable is set
    pub tls: Option<Tls>,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("DB_HOST", "localhost");
    std::env::set_var("DB_PORT", "5432");

    let config = Config::from_env()?;

    println!("Nested configuration:");
    println!("  Database: {}:{}", config.database.host, config.database.port);
    println!("  TLS: {:?}", config.tls); // None

    std::env::set_var("DB_PORT", "http");
    if let Err(e) = Config::from_env() {
        println!("Error: {e}");
        println!("  Field path: {:?}", e.field_path()); // ["database", "port"]
    }

    Ok(())
}
