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

use env_config_parse::SourceError;
use security_provider::ProviderError;
use thiserror::Error;

use crate::template::TemplateError;

/// Errors raised while bootstrapping the configurator
#[derive(Error, Debug)]
pub enum ConfiguratorError {
    /// Missing, unreadable or empty source, or invalid initialization arguments
    #[error("{0}")]
    Configuration(String),

    /// A different source was requested while a configurator is already installed
    #[error("A singleton configurator is already initialized with the following [{bound}], requested [{requested}]")]
    ConfigurationConflict { bound: String, requested: String },

    /// A declared security provider could not be located, instantiated or validated
    #[error("Security provider registration failed: {0}")]
    ProviderRegistration(#[from] ProviderError),

    /// A declared XML template could not be resolved
    #[error("Failed to load XML template {name}: {source}")]
    Initialization {
        name: String,
        #[source]
        source: TemplateError,
    },
}

impl From<SourceError> for ConfiguratorError {
    fn from(err: SourceError) -> Self {
        ConfiguratorError::Configuration(err.to_string())
    }
}
