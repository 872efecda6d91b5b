//! Utilities - logging and process environment setup

pub mod logger;

use crate::core::Config;

/// Make sure the working directory exists and start logging
pub fn setup_environment(config: &Config) -> std::io::Result<()> {
    std::fs::create_dir_all(&config.work_dir)?;
    logger::init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    Ok(())
}

/// Load variables from a `.env` file if one is present
pub fn load_dotenv() {
    dotenv::dotenv().ok();
}
