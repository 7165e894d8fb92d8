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

//! Derives named sub-configurations from the flat property set.
//!
//! Every entry is looked at in its `key=value` line form. A line matches a rule when
//! it starts with the rule's prefix and not with its exclusion prefix, and is then
//! split on the first `=` only, so values may carry further `=` characters.

use env_config_parse::Properties;

use crate::types::keys::{
    COMPLEX_ROOT_TEMPLATE_PREFIX, LOG_ROUTING_PREFIX, SECURITY_PROVIDER_PREFIX, XML_TEMPLATE_PREFIX,
};

/// Prefix rule selecting the lines of one sub-configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRule {
    prefix: &'static str,
    exclude: Option<&'static str>,
}

/// XML request templates, minus the reserved ComplexRoot namespace
pub const TEMPLATE_RULE: MatchRule = MatchRule::prefix(XML_TEMPLATE_PREFIX).excluding(COMPLEX_ROOT_TEMPLATE_PREFIX);

pub const PROVIDER_RULE: MatchRule = MatchRule::prefix(SECURITY_PROVIDER_PREFIX);

pub const LOG_ROUTING_RULE: MatchRule = MatchRule::prefix(LOG_ROUTING_PREFIX);

impl MatchRule {
    pub const fn prefix(prefix: &'static str) -> Self {
        MatchRule { prefix, exclude: None }
    }

    pub const fn excluding(self, exclude: &'static str) -> Self {
        MatchRule {
            prefix: self.prefix,
            exclude: Some(exclude),
        }
    }

    pub fn matches(&self, line: &str) -> bool {
        line.starts_with(self.prefix) && !self.exclude.is_some_and(|e| line.starts_with(e))
    }
}

/// One matched line split into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubConfigEntry {
    /// Full left-hand side
    pub key: String,
    /// Left-hand side with the rule prefix stripped
    pub name: String,
    pub value: String,
}

/// Result of applying one rule, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub entries: Vec<SubConfigEntry>,
    /// Matching lines that carry no `=`
    pub malformed: Vec<String>,
}

impl Extraction {
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.value.as_str())
    }
}

pub fn extract(properties: &Properties, rule: &MatchRule) -> Extraction {
    let mut extraction = Extraction::default();
    for entry in properties {
        let line = entry.line();
        let line = line.trim();
        if !rule.matches(line) {
            continue;
        }
        match line.split_once('=') {
            Some((key, value)) => extraction.entries.push(SubConfigEntry {
                key: key.to_string(),
                name: key[rule.prefix.len().min(key.len())..].to_string(),
                value: value.to_string(),
            }),
            None => extraction.malformed.push(line.to_string()),
        }
    }
    extraction
}
