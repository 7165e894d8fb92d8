/*
 * Copyright (c) Huawei Technologies Co., Ltd. 2025. All rights reserved.
 * Global Trust Authority is licensed under the Mulan PSL v2.
 * You can use this software according to the terms and conditions of the Mulan PSL v2.
 * You may obtain a copy of Mulan PSL v2 at:
 *     http://license.coscl.org.cn/MulanPSL2
 * THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND, EITHER EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT, MERCHANTABILITY OR FIT FOR A PARTICULAR
 * PURPOSE.
 * See the Mulan PSL v2 for more details.
 */

pub mod config;
pub mod logger;

use std::{path::PathBuf, sync::OnceLock};

static LOGGER: OnceLock<logger::Logger> = OnceLock::new();

/// Initialize logging system using default configuration file path "logging.yaml"
///
/// # Example
/// ```no_run
/// common_log::init().expect("Failed to initialize logger");
/// log::info!("Logger initialized");
/// ```
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    init_with_yaml("logging.yaml")
}

/// Initialize logging system
///
/// # Arguments
/// * `config_path` - Path to the logging configuration file
pub fn init_with_yaml(config_path: impl Into<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let logger = logger::Logger::new_from_yaml(config_path)?;
    if LOGGER.set(logger).is_err() {
        return Err("Logger already initialized".into());
    }
    Ok(())
}

/// Initialize logging system with config
///
/// # Example
/// ```no_run
/// use common_log::config::{LogConfig, LoggerConfig};
/// use common_log::init_with_config;
///
/// let log = LoggerConfig {
///     path_prefix: "orbital::engine".to_string(),
///     log_directory: "logs".to_string(),
///     log_file_name: "engine.log".to_string(),
///     max_file_size: 10480,
///     max_zip_count: 6,
///     level: "info".to_string(),
/// };
/// let config = LogConfig { console: true, root_level: "info".to_string(), loggers: vec![log] };
/// init_with_config(config).expect("Failed to initialize logger");
/// log::info!("Logger initialized");
/// ```
pub fn init_with_config(config: LogConfig) -> Result<(), Box<dyn std::error::Error>> {
    let logger = logger::Logger::new_from_config(config)?;
    if LOGGER.set(logger).is_err() {
        return Err("Logger already initialized".into());
    }
    Ok(())
}

/// Installs the SDK's process-default engine and ecommerce destinations.
///
/// Returns `true` only when this call installed them. Nothing is installed when this
/// crate already owns the process logger or when the host registered its own `log`
/// implementation.
pub fn init_sdk_defaults(engine_target: &str, ecommerce_target: &str) -> bool {
    if LOGGER.get().is_some() {
        return false;
    }
    match logger::Logger::new_from_config(LogConfig::sdk_defaults(engine_target, ecommerce_target)) {
        Ok(logger) => LOGGER.set(logger).is_ok(),
        Err(e) => {
            debug!("SDK default loggers not installed: {}", e);
            false
        }
    }
}

/// Whether this crate owns the process logger.
pub fn is_initialized() -> bool {
    LOGGER.get().is_some()
}

/// Overrides the level of one log target.
///
/// Returns `false` when this crate does not own the process logger, in which case the
/// host's logging backend is left untouched.
pub fn set_target_level(target: &str, level: LevelFilter) -> bool {
    match LOGGER.get() {
        Some(logger) => match logger.set_level(target, level) {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to set level of {}: {}", target, e);
                false
            }
        },
        None => false,
    }
}

// Re-export log macros for convenient use in other modules
use crate::config::LogConfig;
pub use log::{debug, error, info, trace, warn, LevelFilter};
pub use logger::{parse_level, parse_level_or};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdk_defaults_and_overrides() {
        assert!(!set_target_level("hyper", LevelFilter::Off));

        assert!(init_sdk_defaults("orbital::engine", "orbital::ecommerce"));
        assert!(is_initialized());
        assert!(!init_sdk_defaults("orbital::engine", "orbital::ecommerce"));
        assert!(init_with_config(LogConfig::sdk_defaults("a", "b")).is_err());

        assert!(set_target_level("hyper", LevelFilter::Off));
        assert!(set_target_level("orbital::engine", LevelFilter::Debug));
        info!(target: "orbital::engine", "override applied");
    }
}
