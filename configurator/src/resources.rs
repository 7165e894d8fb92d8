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

//! Packaged resource namespace holding the default configuration and templates.

use std::sync::Arc;

use env_config_parse::{get_env_value, FilePropertySource, PropertySource, SourceError};
use log::info;
use rust_embed::{Embed, EmbeddedFile};

use crate::template::{FileSystemTemplateLoader, TemplateError, TemplateLoader};
use crate::types::keys::CONFIG_HOME_ENV;

#[derive(Embed)]
#[folder = "resources/"]
struct SdkResources;

impl SdkResources {
    fn get_file(path: &str) -> Option<EmbeddedFile> {
        let path = path.trim().replace('\\', "/");
        <Self as Embed>::get(path.trim_start_matches('/'))
    }
}

/// Reads properties from the packaged resources
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedPropertySource;

impl PropertySource for EmbeddedPropertySource {
    fn read(&self, identifier: &str) -> Result<String, SourceError> {
        let file = SdkResources::get_file(identifier).ok_or_else(|| SourceError::NotFound(identifier.to_string()))?;
        String::from_utf8(file.data.into_owned()).map_err(|e| SourceError::Unreadable {
            identifier: identifier.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        })
    }
}

/// Reads templates from the packaged resources
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplateLoader;

impl TemplateLoader for EmbeddedTemplateLoader {
    fn load_template(&self, template_path: &str) -> Result<String, TemplateError> {
        let file =
            SdkResources::get_file(template_path).ok_or_else(|| TemplateError::NotFound(template_path.to_string()))?;
        String::from_utf8(file.data.into_owned()).map_err(|_| TemplateError::InvalidEncoding(template_path.to_string()))
    }
}

/// Property source used when the caller injects none.
///
/// A directory named by `ORBITAL_CONFIG_HOME` replaces the packaged resources.
pub fn default_property_source() -> Arc<dyn PropertySource> {
    match get_env_value(CONFIG_HOME_ENV) {
        Some(home) => {
            info!("Reading configuration below {}", home);
            Arc::new(FilePropertySource::new(home))
        }
        None => Arc::new(EmbeddedPropertySource),
    }
}

/// Template loader used when the caller injects none.
pub fn default_template_loader() -> Arc<dyn TemplateLoader> {
    match get_env_value(CONFIG_HOME_ENV) {
        Some(home) => Arc::new(FileSystemTemplateLoader::new(home)),
        None => Arc::new(EmbeddedTemplateLoader),
    }
}
