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

use std::env;
use std::sync::Once;

use log::{debug, info};

static DOTENV: Once = Once::new();

/// Loads a `.env` file from the working directory, at most once per process.
pub fn load_dotenv() {
    DOTENV.call_once(|| match dotenv::dotenv() {
        Ok(path) => info!("load .env file: {}", path.display()),
        Err(e) => debug!(".env not loaded: {}", e),
    });
}

/// Returns a non-blank environment value, consulting `.env` first.
pub fn get_env_value(key: &str) -> Option<String> {
    load_dotenv();
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        Ok(_) => None,
        Err(e) => {
            debug!("Environment variable {} not available: {:?}", key, e);
            None
        }
    }
}
