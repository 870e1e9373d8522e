#![allow(non_snake_case)]

mod client;

use spacex_explorer::{config::Config, error::ConfigError};

fn main() {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(client::App);
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> Result<Config, ConfigError> {
    dotenvy::dotenv().ok();

    Config::from_env()
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> Result<Config, ConfigError> {
    Ok(Config::default())
}
