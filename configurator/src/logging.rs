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

use common_log::{debug, parse_level, parse_level_or, set_target_level, LevelFilter};

use crate::error::ConfiguratorError;
use crate::extractor::SubConfigEntry;
use crate::types::keys::{
    DEFAULT_ECOMMERCE_TARGET, DEFAULT_ENGINE_TARGET, HTTP_CLIENT_LOG_TARGETS, LOG_ROUTING_LOGGER_PREFIX,
};

/// Log targets for general engine messages and for transactional messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkLoggers {
    engine: String,
    ecommerce: String,
}

impl SdkLoggers {
    pub fn new(engine: impl Into<String>, ecommerce: impl Into<String>) -> Result<Self, ConfiguratorError> {
        let engine = engine.into();
        let ecommerce = ecommerce.into();
        if engine.trim().is_empty() || ecommerce.trim().is_empty() {
            return Err(ConfiguratorError::Configuration(
                "Exception while initializing the configurator - Invalid logger object provided".to_string(),
            ));
        }
        Ok(Self { engine, ecommerce })
    }

    pub fn engine(&self) -> &str {
        &self.engine
    }

    pub fn ecommerce(&self) -> &str {
        &self.ecommerce
    }
}

impl Default for SdkLoggers {
    fn default() -> Self {
        Self {
            engine: DEFAULT_ENGINE_TARGET.to_string(),
            ecommerce: DEFAULT_ECOMMERCE_TARGET.to_string(),
        }
    }
}

/// Applies `HTTPClientLogLevel` to the HTTP client targets; absent or unknown is `Off`.
pub fn apply_http_client_level(level: Option<&str>) -> LevelFilter {
    let filter = level.map_or(LevelFilter::Off, |l| parse_level_or(l, LevelFilter::Off));
    for target in HTTP_CLIENT_LOG_TARGETS {
        if !set_target_level(target, filter) {
            debug!("HTTP client log level for {} left to the host logger", target);
        }
    }
    filter
}

/// Reads `log4j.logger.<target>=<LEVEL>[, appender...]` routing rules.
pub fn routing_levels(routing: &[SubConfigEntry]) -> Vec<(String, LevelFilter)> {
    routing
        .iter()
        .filter_map(|entry| {
            let target = entry.key.strip_prefix(LOG_ROUTING_LOGGER_PREFIX)?.trim();
            let level = entry.value.split(',').next()?.trim();
            if target.is_empty() || level.is_empty() {
                return None;
            }
            Some((target.to_string(), parse_level(level)))
        })
        .collect()
}

pub fn apply_log_routing(routing: &[SubConfigEntry]) {
    for (target, level) in routing_levels(routing) {
        if set_target_level(&target, level) {
            debug!("Log routing: {} set to {}", target, level);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, value: &str) -> SubConfigEntry {
        SubConfigEntry {
            key: key.to_string(),
            name: key.trim_start_matches("log4j").to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_loggers_validation() {
        assert!(SdkLoggers::new("engine", "ecommerce").is_ok());
        assert!(matches!(SdkLoggers::new("", "ecommerce"), Err(ConfiguratorError::Configuration(_))));
        assert!(matches!(SdkLoggers::new("engine", "  "), Err(ConfiguratorError::Configuration(_))));
        assert_eq!(SdkLoggers::default().engine(), DEFAULT_ENGINE_TARGET);
    }

    #[test]
    fn test_routing_levels() {
        let routing = vec![
            entry("log4j.logger.orbital::transport", "DEBUG, engine"),
            entry("log4j.rootLogger", "INFO, stdout"),
            entry("log4j.logger.hyper", "off"),
            entry("log4j.logger.", "INFO"),
        ];
        assert_eq!(
            routing_levels(&routing),
            vec![
                ("orbital::transport".to_string(), LevelFilter::Debug),
                ("hyper".to_string(), LevelFilter::Off),
            ]
        );
    }

    #[test]
    fn test_http_client_level_defaults_off() {
        assert_eq!(apply_http_client_level(None), LevelFilter::Off);
        assert_eq!(apply_http_client_level(Some("verbose")), LevelFilter::Off);
        assert_eq!(apply_http_client_level(Some("WARN")), LevelFilter::Warn);
    }
}
