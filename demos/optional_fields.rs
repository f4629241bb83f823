//! Example demonstrating Option<T> for optional fields

use envi::FromEnv;

#[derive(Debug, FromEnv)]
struct Config {
    #[env(name = "APP_NAME")]
    pub app_name: String,

    // Optional fields - None if not set
    #[env(name = "API_KEY")]
    pub api_key: Option<String>,
    #[env(name = "PORT")]
    pub port: Option<u16>,
    #[env(name = "UPSTREAMS")]
    pub upstreams: Option<Vec<String>>,

    // Optional with from_file
    #[env(name = "DATABASE_PASSWORD", from_file)]
    pub database_password: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // Set only some environment variables
    std::env::set_var("APP_NAME", "my-application");
    std::env::set_var("PORT", "8080");
    // An empty value is None for every Option field, strings included
    std::env::set_var("UPSTREAMS", "");
    std::env::set_var("API_KEY", "");
    // DATABASE_PASSWORD not set

    let config = envi::load::<Config>()?;

    println!("Configuration:");
    println!("  App Name: {}", config.app_name);
    println!("  API Key: {:?}", config.api_key); // None
    println!("  Port: {:?}", config.port); // Some(8080)
    println!("  Upstreams: {:?}", config.upstreams); // None
    println!("  Database Password: {:?}", config.database_password); // None

    Ok(())
}
