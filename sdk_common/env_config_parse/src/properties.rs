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
use std::fmt;

use crate::error::PropertiesError;

/// A single `key=value` pair as it was read from a properties source.
///
/// `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct PropertyEntry {
    key: String,
    value: String,
    separated: bool,
}

impl PropertyEntry {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the source line carried a key/value separator.
    pub fn is_separated(&self) -> bool {
        self.separated
    }

    /// Renders the entry back into its `key=value` line form.
    ///
    /// An entry declared without any separator renders as the bare key, so callers
    /// splitting on `=` can tell it apart from an entry with an empty value.
    pub fn line(&self) -> String {
        if self.separated {
            format!("{}={}", self.key, self.value)
        } else {
            self.key.clone()
        }
    }
}

/// Flat key/value configuration loaded from `.properties` text.
///
/// Entries keep the order in which their keys were first seen, which makes every
/// ordering derived from them deterministic. A repeated key keeps its first position
/// and takes the last value. `Debug` lists keys only.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: Vec<PropertyEntry>,
    index: HashMap<String, usize>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses properties text using the standard `.properties` escaping rules.
    pub fn parse(text: &str) -> Result<Self, PropertiesError> {
        let mut properties = Properties::new();
        for (line_no, logical) in logical_lines(text) {
            let entry = parse_logical_line(&logical, line_no)?;
            properties.put(entry);
        }
        Ok(properties)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.put(PropertyEntry {
            key: key.into(),
            value: value.into(),
            separated: true,
        });
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&i| self.entries[i].value())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropertyEntry> {
        self.entries.iter()
    }

    fn put(&mut self, entry: PropertyEntry) {
        match self.index.get(&entry.key) {
            Some(&i) => self.entries[i] = entry,
            None => {
                self.index.insert(entry.key.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }
}

impl fmt::Debug for PropertyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyEntry")
            .field("key", &self.key)
            .field("separated", &self.separated)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.iter().map(|e| e.key())).finish()
    }
}

impl<'a> IntoIterator for &'a Properties {
    type Item = &'a PropertyEntry;
    type IntoIter = std::slice::Iter<'a, PropertyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\x0c'
}

// Joins continuation lines; yields (first natural line number, logical line)
fn logical_lines(text: &str) -> Vec<(usize, String)> {
    let mut lines = Vec::new();
    let mut current: Option<(usize, String)> = None;

    for (idx, raw) in text.lines().enumerate() {
        let trimmed = raw.trim_start_matches(is_blank);
        let mut logical = match current.take() {
            Some(pending) => pending,
            None => {
                if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                    continue;
                }
                (idx + 1, String::new())
            }
        };

        let trailing = trimmed.chars().rev().take_while(|&c| c == '\\').count();
        if trailing % 2 == 1 {
            logical.1.push_str(&trimmed[..trimmed.len() - 1]);
            current = Some(logical);
        } else {
            logical.1.push_str(trimmed);
            lines.push(logical);
        }
    }

    if let Some(pending) = current {
        lines.push(pending);
    }
    lines
}

fn parse_logical_line(line: &str, line_no: usize) -> Result<PropertyEntry, PropertiesError> {
    let chars: Vec<char> = line.chars().collect();
    let len = chars.len();
    let mut key_end = len;
    let mut value_start = len;
    let mut has_separator = false;
    let mut ended_by_blank = false;
    let mut preceding_backslash = false;

    for (i, &c) in chars.iter().enumerate() {
        if !preceding_backslash {
            if c == '=' || c == ':' {
                key_end = i;
                value_start = i + 1;
                has_separator = true;
                break;
            }
            if is_blank(c) {
                key_end = i;
                value_start = i + 1;
                ended_by_blank = true;
                break;
            }
        }
        preceding_backslash = c == '\\' && !preceding_backslash;
    }

    let mut pos = value_start;
    while pos < len && is_blank(chars[pos]) {
        pos += 1;
    }
    if ended_by_blank && pos < len && (chars[pos] == '=' || chars[pos] == ':') {
        has_separator = true;
        pos += 1;
        while pos < len && is_blank(chars[pos]) {
            pos += 1;
        }
    }

    let key = unescape(&chars[..key_end], line_no)?;
    let value = unescape(&chars[pos..], line_no)?;
    let separated = has_separator || !value.is_empty();
    Ok(PropertyEntry { key, value, separated })
}

fn unescape(chars: &[char], line_no: usize) -> Result<String, PropertiesError> {
    let mut out = String::with_capacity(chars.len());
    let mut iter = chars.iter().copied();

    while let Some(c) = iter.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match iter.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => {
                let digits: String = iter.by_ref().take(4).collect();
                let code = if digits.len() == 4 {
                    u32::from_str_radix(&digits, 16).ok()
                } else {
                    None
                };
                let decoded = code
                    .and_then(char::from_u32)
                    .ok_or(PropertiesError::InvalidUnicodeEscape { line: line_no })?;
                out.push(decoded);
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    Ok(out)
}
