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

use std::collections::HashMap;

use anyhow::Result;
use log::info;
use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::impls::{OpenSslProvider, SmProvider};
use crate::traits::{ProviderError, SecurityProvider};

/// Constructor stored in the provider factory
pub type ProviderConstructor = fn() -> Result<Box<dyn SecurityProvider>>;

// Global provider factory, seeded with the built-in providers
static PROVIDER_FACTORY: Lazy<Mutex<HashMap<String, ProviderConstructor>>> = Lazy::new(|| {
    let mut factory: HashMap<String, ProviderConstructor> = HashMap::new();
    factory.insert(OpenSslProvider::IDENTIFIER.to_string(), OpenSslProvider::create);
    factory.insert(SmProvider::IDENTIFIER.to_string(), SmProvider::create);
    Mutex::new(factory)
});

/// Makes a provider implementation known under `identifier`.
///
/// Returns the constructor previously registered under the same identifier, if any.
pub fn register_factory(identifier: &str, constructor: ProviderConstructor) -> Option<ProviderConstructor> {
    info!("register security provider factory: {}", identifier);
    PROVIDER_FACTORY.lock().insert(identifier.trim().to_string(), constructor)
}

/// Instantiates the provider known under `identifier`.
pub fn create_provider(identifier: &str) -> Result<Box<dyn SecurityProvider>, ProviderError> {
    let identifier = identifier.trim();
    // Copy the constructor out so the factory lock is not held while it runs
    let ctor = PROVIDER_FACTORY
        .lock()
        .get(identifier)
        .copied()
        .ok_or_else(|| ProviderError::NotFound(identifier.to_string()))?;
    ctor().map_err(|e| ProviderError::Instantiation {
        identifier: identifier.to_string(),
        source: e.into(),
    })
}
