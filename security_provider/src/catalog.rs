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

//! Process-wide catalog of active security providers

use std::sync::{Arc, OnceLock};

use log::{debug, info};
use parking_lot::RwLock;

use crate::traits::SecurityProvider;

/// Ordered list of installed providers, de-duplicated by provider name.
///
/// Nothing is ever removed from the catalog; providers installed by an initialization
/// that later failed stay active.
pub struct SecurityCatalog {
    providers: RwLock<Vec<Arc<dyn SecurityProvider>>>,
}

impl SecurityCatalog {
    fn new() -> Self {
        Self {
            providers: RwLock::new(Vec::new()),
        }
    }

    pub fn get_instance() -> &'static Self {
        static INSTANCE: OnceLock<SecurityCatalog> = OnceLock::new();
        INSTANCE.get_or_init(SecurityCatalog::new)
    }

    /// Appends a provider.
    ///
    /// Returns its 1-based preference position, or `None` when a provider with the
    /// same name is already installed.
    pub fn add_provider(&self, provider: Arc<dyn SecurityProvider>) -> Option<usize> {
        let mut providers = self.providers.write();
        if providers.iter().any(|p| p.name() == provider.name()) {
            debug!("Security provider {} already installed", provider.name());
            return None;
        }
        info!("Installing security provider: {} {}", provider.name(), provider.version());
        providers.push(provider);
        Some(providers.len())
    }

    pub fn get_provider(&self, name: &str) -> Option<Arc<dyn SecurityProvider>> {
        self.providers.read().iter().find(|p| p.name() == name).cloned()
    }

    pub fn provider_names(&self) -> Vec<String> {
        self.providers.read().iter().map(|p| p.name().to_string()).collect()
    }

    /// First installed provider offering `algorithm`.
    pub fn provider_for(&self, algorithm: &str) -> Option<Arc<dyn SecurityProvider>> {
        self.providers.read().iter().find(|p| p.supports(algorithm)).cloned()
    }

    pub fn len(&self) -> usize {
        self.providers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.read().is_empty()
    }
}
