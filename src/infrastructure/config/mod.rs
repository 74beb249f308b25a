use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub page_size: usize,
    pub total_item_count: u64,
    pub scroll_threshold_px: u32,
    pub image_cache_seed_count: usize,
    pub image_url_max_attempts: u32,
    pub environment: Environment,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            page_size: env::var("PAGE_SIZE")
                .unwrap_or_else(|_| "24".to_string())
                .parse()?,
            total_item_count: env::var("TOTAL_ITEM_COUNT")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()?,
            scroll_threshold_px: env::var("SCROLL_THRESHOLD_PX")
                .unwrap_or_else(|_| "300".to_string())
                .parse()?,
            image_cache_seed_count: env::var("IMAGE_CACHE_SEED_COUNT")
                .unwrap_or_else(|_| "5".to_string())
                .parse()?,
            image_url_max_attempts: env::var("IMAGE_URL_MAX_ATTEMPTS")
                .unwrap_or_else(|_| "12".to_string())
                .parse()?,
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "production" => Environment::Production,
                    _ => Environment::Development,
                })?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}
