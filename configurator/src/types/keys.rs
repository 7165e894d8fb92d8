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

//! Well-known resource names and configuration keys.

/// Resource loaded when no source identifier is given
pub const DEFAULT_CONFIGURATION_FILE: &str = "config/linehandler.properties";

/// Prefix of XML request template declarations
pub const XML_TEMPLATE_PREFIX: &str = "XMLTemplates.Request.";

/// Reserved namespace for composite template declarations; never a direct template
pub const COMPLEX_ROOT_TEMPLATE_PREFIX: &str = "XMLTemplates.Request.ComplexRoot.";

pub const SECURITY_PROVIDER_PREFIX: &str = "security.provider";

pub const LOG_ROUTING_PREFIX: &str = "log4j";

/// Routing keys of the form `log4j.logger.<target>=<LEVEL>[, appender...]`
pub const LOG_ROUTING_LOGGER_PREFIX: &str = "log4j.logger.";

/// Keys whose values are masked in diagnostic dumps
pub const SENSITIVE_KEYS: &[&str] = &["OrbitalConnectionPassword"];

pub const REDACTED_VALUE: &str = "########";

pub const HTTP_CLIENT_LOG_LEVEL_KEY: &str = "HTTPClientLogLevel";

/// Log targets of the HTTP client stack used by the transport
pub const HTTP_CLIENT_LOG_TARGETS: &[&str] = &["hyper", "reqwest"];

/// Directory that replaces the embedded resources when set
pub const CONFIG_HOME_ENV: &str = "ORBITAL_CONFIG_HOME";

pub const DEFAULT_ENGINE_TARGET: &str = "orbital::engine";

pub const DEFAULT_ECOMMERCE_TARGET: &str = "orbital::ecommerce";
