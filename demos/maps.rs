//! Example demonstrating maps collected by prefix

use envi::FromEnv;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, FromEnv)]
struct Config {
    // LABEL_<key>=<value>
    #[env(name = "LABEL")]
    pub labels: HashMap<String, String>,

    // SHARD_WEIGHT_<shard id>=<weight>
    #[env(name = "SHARD_WEIGHT")]
    pub shard_weights: BTreeMap<u16, f32>,

    // REPLICAS_<region>=<host>,<host>
    #[env(name = "REPLICAS")]
    pub replicas: HashMap<String, Vec<String>>,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("LABEL_team", "core");
    std::env::set_var("LABEL_tier", "backend");
    std::env::set_var("SHARD_WEIGHT_1", "0.25");
    std::env::set_var("SHARD_WEIGHT_2", "0.75");
    std::env::set_var("REPLICAS_eu", "eu-1,eu-2");
    std::env::set_var("REPLICAS_us", "us-1");

    let config = Config::from_env()?;

    println!("Maps:");
    println!("  Labels: {:?}", config.labels);
    println!("  Shard Weights: {:?}", config.shard_weights);
    println!("  Replicas: {:?}", config.replicas);

    Ok(())
}
