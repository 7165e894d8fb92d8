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

use std::io;
use thiserror::Error;

/// Errors raised while parsing properties text
#[derive(Debug, Error)]
pub enum PropertiesError {
    #[error("Malformed \\uxxxx encoding at line {line}")]
    InvalidUnicodeEscape { line: usize },
}

/// Errors raised by a configuration source
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Configuration source not found: {0}")]
    NotFound(String),

    #[error("Configuration source {identifier} could not be read: {source}")]
    Unreadable {
        identifier: String,
        #[source]
        source: io::Error,
    },

    #[error("Configuration source {identifier} is malformed: {source}")]
    Malformed {
        identifier: String,
        #[source]
        source: PropertiesError,
    },

    #[error("Configuration source {0} is empty")]
    Empty(String),
}
