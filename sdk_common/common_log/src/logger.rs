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

use crate::config::{LogConfig, LoggerConfig, ROOT_PREFIX};
use chrono::{DateTime, Local};
use env_config_parse::get_env_value;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::rolling_file::policy::compound::roll::fixed_window::FixedWindowRoller;
use log4rs::append::rolling_file::policy::compound::trigger::size::SizeTrigger as SizeBasedTriggerPolicy;
use log4rs::append::rolling_file::policy::compound::CompoundPolicy;
use log4rs::{
    append::rolling_file::RollingFileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    Config, Handle,
};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S:%3f)} {l} [{M}:{L}] - {m}{n}";
const CONSOLE_APPENDER: &str = "console";

pub struct Logger {
    handle: Handle,
    config: LogConfig,
    log_dir: Option<PathBuf>,
    overrides: Mutex<BTreeMap<String, LevelFilter>>,
}

impl Logger {
    pub fn new_from_yaml(config_path: impl Into<PathBuf>) -> Result<Self, Box<dyn std::error::Error>> {
        let config = LogConfig::from_yaml(config_path)?;
        Self::new_from_config(config)
    }

    /// Builds the log4rs configuration and installs it as the process logger.
    ///
    /// File appenders are only created when `LOG_OUTPUT_DIR` is set; otherwise every
    /// target is routed to the console.
    pub fn new_from_config(config: LogConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let log_dir = get_env_value("LOG_OUTPUT_DIR").map(PathBuf::from);
        let log4rs_config = Self::build_config(&config, log_dir.as_deref(), &BTreeMap::new())?;
        let handle = log4rs::init_config(log4rs_config)?;
        Ok(Self {
            handle,
            config,
            log_dir,
            overrides: Mutex::new(BTreeMap::new()),
        })
    }

    /// Changes the level of one log target and swaps the running configuration.
    pub fn set_level(&self, target: &str, level: LevelFilter) -> Result<(), Box<dyn std::error::Error>> {
        let mut overrides = self.overrides.lock();
        overrides.insert(target.to_string(), level);
        let log4rs_config = Self::build_config(&self.config, self.log_dir.as_deref(), &overrides)?;
        self.handle.set_config(log4rs_config);
        Ok(())
    }

    pub(crate) fn build_config(
        config: &LogConfig,
        log_dir: Option<&Path>,
        overrides: &BTreeMap<String, LevelFilter>,
    ) -> Result<Config, Box<dyn std::error::Error>> {
        let mut log4rs_config = Config::builder();
        let mut root_appenders = Vec::new();

        if config.console {
            let console = ConsoleAppender::builder()
                .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
                .build();
            log4rs_config = log4rs_config
                .appender(Appender::builder().build(CONSOLE_APPENDER, Box::new(console)));
            root_appenders.push(CONSOLE_APPENDER.to_string());
        }

        for logger_config in &config.loggers {
            let appender_name = format!("{}_appender", logger_config.path_prefix);
            if let Some(dir) = log_dir {
                let appender = Self::create_appender(dir, logger_config)?;
                log4rs_config = log4rs_config
                    .appender(Appender::builder().build(&appender_name, Box::new(appender)));
            }
            if logger_config.path_prefix == ROOT_PREFIX {
                if log_dir.is_some() {
                    root_appenders.push(appender_name);
                }
                continue;
            }

            let level = overrides
                .get(&logger_config.path_prefix)
                .copied()
                .unwrap_or_else(|| parse_level(&logger_config.level));
            let builder = log4rs::config::Logger::builder();
            let logger = if log_dir.is_some() {
                builder.appender(appender_name).additive(false)
            } else {
                builder
            };
            log4rs_config = log4rs_config.logger(logger.build(logger_config.path_prefix.clone(), level));
        }

        // Targets with only a level override inherit the root appenders
        for (target, level) in overrides {
            if config.loggers.iter().any(|l| &l.path_prefix == target) {
                continue;
            }
            log4rs_config = log4rs_config.logger(log4rs::config::Logger::builder().build(target.clone(), *level));
        }

        let root = Root::builder()
            .appenders(root_appenders)
            .build(parse_level(config.root_level()));
        Ok(log4rs_config.build(root)?)
    }

    fn create_appender(
        log_out_dir: &Path,
        config: &LoggerConfig,
    ) -> Result<RollingFileAppender, Box<dyn std::error::Error>> {
        let log_directory = log_out_dir.join(&config.log_directory);
        std::fs::create_dir_all(&log_directory)?;

        let now: DateTime<Local> = Local::now();
        let formatted_time = now.format("%Y%m%d%H%M%S%3f").to_string();

        let log_file = log_directory.join(&config.log_file_name);
        let archived_log_pattern = format!(
            "{}/{}-{{}}-{}.gz",
            log_directory.display(),
            config.log_file_name,
            formatted_time
        );

        let size_trigger = SizeBasedTriggerPolicy::new(config.max_file_size);
        let roller = FixedWindowRoller::builder().build(&archived_log_pattern, config.max_zip_count)?;
        let compound_policy = CompoundPolicy::new(Box::new(size_trigger), Box::new(roller));

        let appender = RollingFileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(log_file, Box::new(compound_policy))?;

        Ok(appender)
    }
}

/// Parses a level name, falling back to `Info`.
pub fn parse_level(level: &str) -> LevelFilter {
    parse_level_or(level, LevelFilter::Info)
}

/// Parses a level name, falling back to `default` for unknown names.
pub fn parse_level_or(level: &str, default: LevelFilter) -> LevelFilter {
    match level.trim().to_lowercase().as_str() {
        "trace" | "all" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" | "fatal" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), LevelFilter::Debug);
        assert_eq!(parse_level(" warn "), LevelFilter::Warn);
        assert_eq!(parse_level("FATAL"), LevelFilter::Error);
        assert_eq!(parse_level("bogus"), LevelFilter::Info);
        assert_eq!(parse_level_or("bogus", LevelFilter::Off), LevelFilter::Off);
        assert_eq!(parse_level_or("", LevelFilter::Off), LevelFilter::Off);
    }

    #[test]
    fn test_build_console_config_with_overrides() {
        let config = LogConfig::sdk_defaults("orbital::engine", "orbital::ecommerce");
        let mut overrides = BTreeMap::new();
        overrides.insert("hyper".to_string(), LevelFilter::Off);
        overrides.insert("orbital::engine".to_string(), LevelFilter::Debug);

        let built = Logger::build_config(&config, None, &overrides).unwrap();
        let levels: BTreeMap<_, _> = built.loggers().iter().map(|l| (l.name().to_string(), l.level())).collect();
        assert_eq!(levels.get("hyper"), Some(&LevelFilter::Off));
        assert_eq!(levels.get("orbital::engine"), Some(&LevelFilter::Debug));
        assert_eq!(levels.get("orbital::ecommerce"), Some(&LevelFilter::Info));
        assert_eq!(built.appenders().len(), 1);
        assert_eq!(built.root().level(), LevelFilter::Info);
    }

    #[test]
    fn test_build_file_config() {
        let dir = TempDir::new().unwrap();
        let config = LogConfig::sdk_defaults("orbital::engine", "orbital::ecommerce");

        let built = Logger::build_config(&config, Some(dir.path()), &BTreeMap::new()).unwrap();
        assert_eq!(built.appenders().len(), 3);
        assert!(built.loggers().iter().all(|l| !l.additive()));
        assert!(dir.path().join("logs").is_dir());
    }
}
