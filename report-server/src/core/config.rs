/// Server configuration
///
/// # Environment variables
///
/// Every setting can be overridden through the environment:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HTTP_PORT | 4000 | HTTP service port |
/// | DATABASE_PATH | report-server.db | SQLite database file |
/// | BUSINESS_TIMEZONE | America/New_York | Timezone report dates are interpreted in |
/// | DEFAULT_FOOD_TAX_PERCENT | 8.0 | Rate for the synthetic tax-by-rate bucket when a business has none configured |
/// | LOG_DIR | (none) | Directory for daily-rolling log files |
/// | ENVIRONMENT | development | development \| staging \| production |
///
/// # Example
///
/// ```ignore
/// DATABASE_PATH=/data/reports.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API service port
    pub http_port: u16,
    /// SQLite database file path
    pub database_path: String,
    /// Business timezone; report dates and daypart hours are local to it
    pub timezone: chrono_tz::Tz,
    /// Fallback food-tax percentage for the per-rate tax breakdown
    pub default_food_tax_percent: f64,
    /// Optional log file directory
    pub log_dir: Option<String>,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(4000),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "report-server.db".into()),
            timezone: std::env::var("BUSINESS_TIMEZONE")
                .ok()
                .and_then(|tz| tz.parse().ok())
                .unwrap_or(chrono_tz::America::New_York),
            default_food_tax_percent: std::env::var("DEFAULT_FOOD_TAX_PERCENT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8.0),
            log_dir: std::env::var("LOG_DIR").ok(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
