use std::path::PathBuf;
use std::time::Duration;

/// Client configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | database and log directory |
/// | DB_FILE | gobite.redb | database file name inside WORK_DIR |
/// | LOG_LEVEL | info | tracing max level |
/// | LOG_DIR | (unset) | daily rolling log files |
/// | DEFAULT_RESTAURANT_ID | default | restaurant bound when none is given |
/// | OTP_CODE | 1234 | accepted demo one-time code |
/// | OTP_DELAY_MS | 1000 | simulated verification latency |
/// | CHECKOUT_DELAY_MS | 2000 | simulated checkout latency |
/// | REDIRECT_COUNTDOWN_SECS | 10 | countdown after checkout |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/tmp/gobite OTP_DELAY_MS=0 gobite login Alice 5550000 1234
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub work_dir: String,
    pub db_file: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub default_restaurant_id: String,
    pub otp_code: String,
    pub otp_delay_ms: u64,
    pub checkout_delay_ms: u64,
    pub redirect_countdown_secs: u32,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            db_file: std::env::var("DB_FILE").unwrap_or_else(|_| "gobite.redb".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            default_restaurant_id: std::env::var("DEFAULT_RESTAURANT_ID")
                .unwrap_or_else(|_| "default".into()),
            otp_code: std::env::var("OTP_CODE").unwrap_or_else(|_| "1234".into()),
            otp_delay_ms: std::env::var("OTP_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            checkout_delay_ms: std::env::var("CHECKOUT_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2000),
            redirect_countdown_secs: std::env::var("REDIRECT_COUNTDOWN_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Override the working directory, keeping everything else from the environment
    ///
    /// Mostly used by tests.
    pub fn with_work_dir(work_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config
    }

    /// Full path of the session database
    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(&self.db_file)
    }

    pub fn otp_delay(&self) -> Duration {
        Duration::from_millis(self.otp_delay_ms)
    }

    pub fn checkout_delay(&self) -> Duration {
        Duration::from_millis(self.checkout_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
