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
use openssl::hash::{hash, MessageDigest};

use crate::traits::{ProviderError, SecurityProvider};

const SERVICES: [&str; 6] = ["SHA-1", "SHA-224", "SHA-256", "SHA-384", "SHA-512", "MD5"];

/// Provider backed by the system OpenSSL library
#[derive(Debug)]
pub struct OpenSslProvider {
    version: String,
}

impl OpenSslProvider {
    pub const IDENTIFIER: &'static str = "openssl";
    pub const NAME: &'static str = "OpenSSL";

    pub fn create() -> Result<Box<dyn SecurityProvider>> {
        openssl::init();
        Ok(Box::new(OpenSslProvider {
            version: openssl::version::version().to_string(),
        }))
    }

    fn message_digest(algorithm: &str) -> Option<MessageDigest> {
        match algorithm.to_ascii_uppercase().replace('-', "").as_str() {
            "SHA1" => Some(MessageDigest::sha1()),
            "SHA224" => Some(MessageDigest::sha224()),
            "SHA256" => Some(MessageDigest::sha256()),
            "SHA384" => Some(MessageDigest::sha384()),
            "SHA512" => Some(MessageDigest::sha512()),
            "MD5" => Some(MessageDigest::md5()),
            _ => None,
        }
    }
}

impl SecurityProvider for OpenSslProvider {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn version(&self) -> String {
        self.version.clone()
    }

    fn info(&self) -> String {
        format!("OpenSSL message digests ({})", self.version)
    }

    fn services(&self) -> Vec<String> {
        SERVICES.iter().map(|s| s.to_string()).collect()
    }

    fn supports(&self, algorithm: &str) -> bool {
        Self::message_digest(algorithm).is_some()
    }

    fn digest(&self, algorithm: &str, data: &[u8]) -> Result<Vec<u8>, ProviderError> {
        let md = Self::message_digest(algorithm).ok_or_else(|| ProviderError::UnsupportedAlgorithm {
            provider: Self::NAME.to_string(),
            algorithm: algorithm.to_string(),
        })?;
        let digest = hash(md, data).map_err(|e| ProviderError::Crypto(e.to_string()))?;
        Ok(digest.to_vec())
    }
}
