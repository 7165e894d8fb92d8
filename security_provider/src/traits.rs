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

// Security provider trait definitions

use std::error::Error as StdError;
use thiserror::Error;

/// Capability interface every registered security provider implements.
pub trait SecurityProvider: Send + Sync {
    /// Name the catalog de-duplicates on.
    fn name(&self) -> &str;

    fn version(&self) -> String;

    fn info(&self) -> String;

    /// Digest algorithms this provider offers.
    fn services(&self) -> Vec<String>;

    fn digest(&self, algorithm: &str, data: &[u8]) -> Result<Vec<u8>, ProviderError>;

    fn supports(&self, algorithm: &str) -> bool {
        self.services().iter().any(|s| s.eq_ignore_ascii_case(algorithm))
    }
}

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Security provider not found: {0}")]
    NotFound(String),

    #[error("Security provider {identifier} could not be instantiated: {source}")]
    Instantiation {
        identifier: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("{0} is not a valid security provider")]
    InvalidProvider(String),

    #[error("Algorithm {algorithm} not supported by provider {provider}")]
    UnsupportedAlgorithm { provider: String, algorithm: String },

    #[error("Crypto operation failed: {0}")]
    Crypto(String),
}
