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

use std::sync::Arc;

use log::{debug, error, info};

use crate::catalog::SecurityCatalog;
use crate::factory::create_provider;
use crate::traits::ProviderError;

/// Resolves provider identifiers and installs them into the [`SecurityCatalog`].
///
/// The registry keeps no memory of its own; repeated registration of the same
/// provider is only absorbed by the catalog's de-duplication by name.
pub struct ProviderRegistry;

impl ProviderRegistry {
    /// Instantiates the provider known under `identifier` and installs it.
    ///
    /// Returns the catalog position, or `None` when an equally named provider was
    /// already active.
    pub fn register(identifier: &str) -> Result<Option<usize>, ProviderError> {
        debug!("Loading Security Provider: {}", identifier);
        let provider = create_provider(identifier).map_err(|e| {
            error!("Failed to load security provider {}: {}", identifier, e);
            e
        })?;

        if provider.name().trim().is_empty() {
            error!("Security provider {} reports no name", identifier);
            return Err(ProviderError::InvalidProvider(identifier.to_string()));
        }

        let position = SecurityCatalog::get_instance().add_provider(Arc::from(provider));
        if let Some(position) = position {
            info!("Security provider {} registered at position {}", identifier, position);
        }
        Ok(position)
    }
}
