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

use anyhow::Result;
use libsm::sm3::hash::Sm3Hash;

use crate::traits::{ProviderError, SecurityProvider};

/// Provider for the Chinese commercial cryptography digest SM3
#[derive(Debug, Default)]
pub struct SmProvider;

impl SmProvider {
    pub const IDENTIFIER: &'static str = "sm";
    pub const NAME: &'static str = "SM";

    pub fn create() -> Result<Box<dyn SecurityProvider>> {
        Ok(Box::new(SmProvider))
    }
}

impl SecurityProvider for SmProvider {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    fn info(&self) -> String {
        "SM3 message digest".to_string()
    }

    fn services(&self) -> Vec<String> {
        vec!["SM3".to_string()]
    }

    fn digest(&self, algorithm: &str, data: &[u8]) -> Result<Vec<u8>, ProviderError> {
        if !self.supports(algorithm) {
            return Err(ProviderError::UnsupportedAlgorithm {
                provider: Self::NAME.to_string(),
                algorithm: algorithm.to_string(),
            });
        }
        let mut sm3 = Sm3Hash::new(data);
        Ok(sm3.get_hash().to_vec())
    }
}
