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

use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use env_config_parse::resolve_in_root;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Template {path} could not be read: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Template {0} is not valid UTF-8")]
    InvalidEncoding(String),

    #[error("Template declaration has no source path: {0}")]
    MissingSource(String),
}

/// Resolves a logical template path to the template text.
#[cfg_attr(test, automock)]
pub trait TemplateLoader: Send + Sync {
    fn load_template(&self, template_path: &str) -> Result<String, TemplateError>;
}

/// Loads templates from files below a fixed root directory
#[derive(Debug, Clone)]
pub struct FileSystemTemplateLoader {
    root: PathBuf,
}

impl FileSystemTemplateLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TemplateLoader for FileSystemTemplateLoader {
    fn load_template(&self, template_path: &str) -> Result<String, TemplateError> {
        let path = resolve_in_root(&self.root, template_path)
            .ok_or_else(|| TemplateError::NotFound(template_path.to_string()))?;
        std::fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => TemplateError::NotFound(template_path.to_string()),
            ErrorKind::InvalidData => TemplateError::InvalidEncoding(template_path.to_string()),
            _ => TemplateError::Unreadable {
                path: template_path.to_string(),
                source,
            },
        })
    }
}
