use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub business_rules: BusinessRules,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Path of the local JSON store file.
    pub path: String,
}

/// Knobs the workflow reads at the presentation boundary.
#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,
    /// The "up to 6 passengers" rule from the help text, enforced at the
    /// session surface rather than inside the seat model.
    #[serde(default = "default_max_seats")]
    pub max_seats_per_booking: usize,
    #[serde(default = "default_payment_delay")]
    pub payment_delay_ms: u64,
    #[serde(default = "default_tracking_refresh")]
    pub tracking_refresh_seconds: u64,
}

fn default_tax_rate() -> f64 {
    0.05
}

fn default_max_seats() -> usize {
    6
}

fn default_payment_delay() -> u64 {
    3000
}

fn default_tracking_refresh() -> u64 {
    30
}

impl Default for BusinessRules {
    fn default() -> Self {
        Self {
            tax_rate: default_tax_rate(),
            max_seats_per_booking: default_max_seats(),
            payment_delay_ms: default_payment_delay(),
            tracking_refresh_seconds: default_tracking_refresh(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Environment-specific overrides, optional.
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Machine-local overrides, not checked in.
            .add_source(config::File::with_name("config/local").required(false))
            // RIDELANE_SERVER__PORT=8080 style environment overrides.
            .add_source(config::Environment::with_prefix("RIDELANE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
