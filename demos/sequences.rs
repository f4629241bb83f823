//! Example demonstrating comma-separated sequences

use envi::FromEnv;

#[derive(Debug, FromEnv)]
struct Config {
    // Exactly as many entries as there are tokens
    #[env(name = "ALLOWED_ORIGINS")]
    pub allowed_origins: Vec<String>,

    // Fixed length: extra tokens are dropped, missing ones stay 0
    #[env(name = "RGB")]
    pub rgb: [u8; 3],

    // Empty tokens stay at the default
    #[env(name = "WEIGHTS")]
    pub weights: Vec<f64>,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("ALLOWED_ORIGINS", "https://a.example, https://b.example");
    std::env::set_var("RGB", "255,128");
    std::env::set_var("WEIGHTS", "0.5,,1.5");

    let config = Config::from_env()?;

    println!("Sequences:");
    println!("  Allowed Origins: {:?}", config.allowed_origins);
    println!("  RGB: {:?}", config.rgb); // [255, 128, 0]
    println!("  Weights: {:?}", config.weights); // [0.5, 0.0, 1.5]

    Ok(())
}
