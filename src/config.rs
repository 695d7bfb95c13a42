use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub prices_file: String,
    pub dividends_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            prices_file: "AAPL.csv".to_string(),
            dividends_file: "AAPL-Dividends.csv".to_string(),
        }
    }
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
