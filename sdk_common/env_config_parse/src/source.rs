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

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use log::debug;

use crate::error::SourceError;
use crate::properties::Properties;

/// A location that configuration properties can be read from.
///
/// Implementors only supply the raw text; parsing and the non-empty check are shared
/// by the provided [`PropertySource::load`].
pub trait PropertySource: Send + Sync {
    /// Reads the raw properties text named by `identifier`.
    fn read(&self, identifier: &str) -> Result<String, SourceError>;

    /// Reads and parses the source, rejecting a source without any entry.
    fn load(&self, identifier: &str) -> Result<Properties, SourceError> {
        let text = self.read(identifier)?;
        let properties = Properties::parse(&text).map_err(|source| SourceError::Malformed {
            identifier: identifier.to_string(),
            source,
        })?;
        if properties.is_empty() {
            return Err(SourceError::Empty(identifier.to_string()));
        }
        debug!("Loaded {} properties from {}", properties.len(), identifier);
        Ok(properties)
    }
}

/// Reads properties from files below a fixed root directory.
///
/// Identifiers are resource names relative to the root; absolute paths and `..`
/// segments never resolve.
#[derive(Debug, Clone)]
pub struct FilePropertySource {
    root: PathBuf,
}

impl FilePropertySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl PropertySource for FilePropertySource {
    fn read(&self, identifier: &str) -> Result<String, SourceError> {
        let path = resolve_in_root(&self.root, identifier)
            .ok_or_else(|| SourceError::NotFound(identifier.to_string()))?;
        std::fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => SourceError::NotFound(identifier.to_string()),
            _ => SourceError::Unreadable {
                identifier: identifier.to_string(),
                source,
            },
        })
    }
}

/// Joins a resource name onto `root`, refusing names that would leave it.
pub fn resolve_in_root(root: &Path, resource: &str) -> Option<PathBuf> {
    let resource = resource.trim().replace('\\', "/");
    let relative = Path::new(resource.trim_start_matches('/'));
    let mut resolved = root.to_path_buf();
    for component in relative.components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }
    if resolved == root {
        return None;
    }
    Some(resolved)
}
