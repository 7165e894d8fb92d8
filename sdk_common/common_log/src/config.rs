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

use serde::Deserialize;
use std::path::PathBuf;

pub const ROOT_PREFIX: &str = "root";
const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;
const DEFAULT_MAX_ZIP_COUNT: u32 = 6;

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_console")]
    pub console: bool,
    #[serde(default = "default_level")]
    pub root_level: String,
    #[serde(default)]
    pub loggers: Vec<LoggerConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggerConfig {
    pub path_prefix: String,
    pub log_directory: String,
    pub log_file_name: String,
    pub max_file_size: u64,
    pub max_zip_count: u32,
    pub level: String,
}

fn default_console() -> bool {
    true
}

fn default_level() -> String {
    "info".to_string()
}

impl LogConfig {
    pub fn from_yaml(path: impl Into<PathBuf>) -> Result<Self, Box<dyn std::error::Error>> {
        let config_str = std::fs::read_to_string(path.into())?;
        let config: LogConfig = serde_yaml::from_str(&config_str)?;
        Ok(config)
    }

    /// Process-default routing used when the host application configured no loggers:
    /// one `engine.log` and one `eCommerce.log` destination plus the console.
    pub fn sdk_defaults(engine_target: &str, ecommerce_target: &str) -> Self {
        let logger = |target: &str, file: &str| LoggerConfig {
            path_prefix: target.to_string(),
            log_directory: "logs".to_string(),
            log_file_name: file.to_string(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            max_zip_count: DEFAULT_MAX_ZIP_COUNT,
            level: default_level(),
        };
        LogConfig {
            console: true,
            root_level: default_level(),
            loggers: vec![
                logger(engine_target, "engine.log"),
                logger(ecommerce_target, "eCommerce.log"),
            ],
        }
    }

    pub fn get_logger_config(&self, path_prefix: &str) -> Option<&LoggerConfig> {
        self.loggers.iter().find(|l| path_prefix.starts_with(&l.path_prefix))
    }

    pub fn get_root_config(&self) -> Option<&LoggerConfig> {
        self.loggers.iter().find(|l| l.path_prefix == ROOT_PREFIX)
    }

    /// Level of the root logger, taken from a `root` entry when one is configured.
    pub fn root_level(&self) -> &str {
        self.get_root_config().map_or(self.root_level.as_str(), |root| root.level.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "loggers:\n  - path_prefix: root\n    log_directory: logs\n    log_file_name: root.log\n    max_file_size: 1024\n    max_zip_count: 3\n    level: warn\n  - path_prefix: orbital::engine\n    log_directory: logs\n    log_file_name: engine.log\n    max_file_size: 1024\n    max_zip_count: 3\n    level: debug"
        )
        .unwrap();

        let config = LogConfig::from_yaml(file.path()).unwrap();
        assert!(config.console);
        assert_eq!(config.loggers.len(), 2);
        assert_eq!(config.root_level(), "warn");
        let engine = config.get_logger_config("orbital::engine::phase").unwrap();
        assert_eq!(engine.log_file_name, "engine.log");
    }

    #[test]
    fn test_sdk_defaults() {
        let config = LogConfig::sdk_defaults("orbital::engine", "orbital::ecommerce");
        assert_eq!(config.root_level(), "info");
        assert!(config.get_root_config().is_none());
        assert_eq!(
            config.get_logger_config("orbital::ecommerce").map(|l| l.log_file_name.as_str()),
            Some("eCommerce.log")
        );
    }
}
