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


//! Process-wide configuration bootstrap for the payment SDK.
//!
//! A single [`ConfigurationManager`] is loaded from one properties source per process.
//! Loading runs in a fixed order: logging, properties, security providers and finally
//! XML request templates. A failure in any phase leaves no configurator installed.
//!
//! # Example
//!
//! ```no_run
//! use configurator::ConfigurationManager;
//!
//! let configurator = ConfigurationManager::initialize(None).expect("configuration not loaded");
//! if let Some(template) = configurator.xml_template("NewOrder") {
//!     println!("{}", template);
//! }
//! ```
pub mod error;
pub mod extractor;
pub mod logging;
pub mod manager;
pub mod resources;
pub mod template;
pub mod types;

pub use error::ConfiguratorError;
pub use extractor::{extract, Extraction, MatchRule, SubConfigEntry};
pub use logging::SdkLoggers;
pub use manager::{ConfigurationManager, ConfiguratorBuilder};
pub use resources::{default_property_source, default_template_loader, EmbeddedPropertySource, EmbeddedTemplateLoader};
pub use template::{FileSystemTemplateLoader, TemplateError, TemplateLoader};
