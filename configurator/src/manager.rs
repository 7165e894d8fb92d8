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

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use common_log::{debug, error, info, init_sdk_defaults};
use env_config_parse::{Properties, PropertySource};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use security_provider::ProviderRegistry;

use crate::error::ConfiguratorError;
use crate::extractor::{extract, SubConfigEntry, LOG_ROUTING_RULE, PROVIDER_RULE, TEMPLATE_RULE};
use crate::logging::{apply_http_client_level, apply_log_routing, SdkLoggers};
use crate::resources::{default_property_source, default_template_loader};
use crate::template::{TemplateError, TemplateLoader};
use crate::types::keys::{DEFAULT_CONFIGURATION_FILE, HTTP_CLIENT_LOG_LEVEL_KEY, REDACTED_VALUE, SENSITIVE_KEYS};

/// Process-wide singleton cell.
///
/// The bound source is set by a successful load, outlives a test reset and is
/// cleared when a load fails.
#[derive(Default)]
struct SingletonState {
    instance: Option<Arc<ConfigurationManager>>,
    bound_source: Option<String>,
}

static STATE: Lazy<Mutex<SingletonState>> = Lazy::new(|| Mutex::new(SingletonState::default()));

/// Global configuration of the SDK, loaded once per process.
///
/// The manager owns the raw properties of one configuration source, the XML
/// templates declared in it and the log routing pairs. It is immutable once
/// installed; every caller shares the same `Arc`.
pub struct ConfigurationManager {
    source_identifier: String,
    configurations: Properties,
    xml_templates: BTreeMap<String, String>,
    log_routing: Vec<SubConfigEntry>,
    loggers: SdkLoggers,
    log_initialized_by_sdk: bool,
    template_loader: Arc<dyn TemplateLoader>,
}

/// Collects optional collaborators for the first initialization.
///
/// Collaborators are ignored when a configurator is already installed.
#[derive(Default)]
pub struct ConfiguratorBuilder {
    source_identifier: Option<String>,
    loggers: Option<(String, String)>,
    property_source: Option<Arc<dyn PropertySource>>,
    template_loader: Option<Arc<dyn TemplateLoader>>,
}

impl ConfiguratorBuilder {
    pub fn source_identifier(mut self, source_identifier: impl Into<String>) -> Self {
        self.source_identifier = Some(source_identifier.into());
        self
    }

    /// Log targets supplied by the host application instead of the SDK defaults.
    pub fn loggers(mut self, engine: impl Into<String>, ecommerce: impl Into<String>) -> Self {
        self.loggers = Some((engine.into(), ecommerce.into()));
        self
    }

    pub fn property_source(mut self, source: Arc<dyn PropertySource>) -> Self {
        self.property_source = Some(source);
        self
    }

    pub fn template_loader(mut self, loader: Arc<dyn TemplateLoader>) -> Self {
        self.template_loader = Some(loader);
        self
    }

    /// Returns the installed configurator, loading it first when none exists.
    pub fn initialize(self) -> Result<Arc<ConfigurationManager>, ConfiguratorError> {
        let loggers = self
            .loggers
            .map(|(engine, ecommerce)| SdkLoggers::new(engine, ecommerce))
            .transpose()?;
        let requested = match self.source_identifier {
            Some(id) if id.trim().is_empty() => {
                return Err(ConfiguratorError::Configuration(
                    "Exception while initializing the configurator - Invalid config file name provided".to_string(),
                ));
            }
            other => other,
        };

        let mut state = STATE.lock();
        if let Some(instance) = &state.instance {
            if let Some(requested) = requested {
                let bound = state.bound_source.as_deref().unwrap_or(&instance.source_identifier);
                if !same_source(bound, &requested) {
                    return Err(ConfiguratorError::ConfigurationConflict {
                        bound: bound.to_string(),
                        requested,
                    });
                }
            }
            return Ok(Arc::clone(instance));
        }

        let source_identifier = requested
            .or_else(|| state.bound_source.clone())
            .unwrap_or_else(|| DEFAULT_CONFIGURATION_FILE.to_string());

        let property_source = self.property_source.unwrap_or_else(default_property_source);
        let template_loader = self.template_loader.unwrap_or_else(default_template_loader);
        match ConfigurationManager::load(source_identifier, loggers, property_source.as_ref(), template_loader) {
            Ok(manager) => {
                let manager = Arc::new(manager);
                state.bound_source = Some(manager.source_identifier.clone());
                state.instance = Some(Arc::clone(&manager));
                Ok(manager)
            }
            Err(e) => {
                state.bound_source = None;
                Err(e)
            }
        }
    }
}

impl ConfigurationManager {
    pub fn builder() -> ConfiguratorBuilder {
        ConfiguratorBuilder::default()
    }

    /// Returns the installed configurator, loading `source_identifier` (or the
    /// default resource) when none is installed yet.
    pub fn initialize(source_identifier: Option<&str>) -> Result<Arc<Self>, ConfiguratorError> {
        let builder = Self::builder();
        match source_identifier {
            Some(id) => builder.source_identifier(id).initialize(),
            None => builder.initialize(),
        }
    }

    /// Returns the installed configurator without loading one.
    pub fn get_instance() -> Result<Arc<Self>, ConfiguratorError> {
        STATE
            .lock()
            .instance
            .clone()
            .ok_or_else(|| ConfiguratorError::Configuration("Configurator not initialized".to_string()))
    }

    /// Source identifier of the installed or last bound configuration.
    pub fn bound_source() -> Option<String> {
        STATE.lock().bound_source.clone()
    }

    /// Discards the installed configurator so the next call loads again.
    ///
    /// Only meant for tests. The bound source identifier and every security
    /// provider registered so far stay in place.
    #[doc(hidden)]
    pub fn reset_for_tests() {
        STATE.lock().instance = None;
    }

    fn load(
        source_identifier: String,
        loggers: Option<SdkLoggers>,
        property_source: &dyn PropertySource,
        template_loader: Arc<dyn TemplateLoader>,
    ) -> Result<Self, ConfiguratorError> {
        // Logging has to exist before any failure can be reported
        let log_initialized_by_sdk = loggers.is_none();
        let loggers = loggers.unwrap_or_default();
        if log_initialized_by_sdk && init_sdk_defaults(loggers.engine(), loggers.ecommerce()) {
            debug!(target: loggers.engine(), "SDK default loggers installed");
        }
        let engine_target = loggers.engine().to_string();
        let engine = engine_target.as_str();

        let configurations = property_source.load(&source_identifier).map_err(|e| {
            error!(target: engine, "ConfigurationException:- {}", e);
            ConfiguratorError::from(e)
        })?;

        let log_routing = extract(&configurations, &LOG_ROUTING_RULE).entries;
        if log_initialized_by_sdk {
            apply_log_routing(&log_routing);
        } else {
            apply_http_client_level(configurations.get(HTTP_CLIENT_LOG_LEVEL_KEY));
        }

        info!(target: engine, "************ New Configurator created *************");
        info!(target: engine, "Configurator configuration file = {}", source_identifier);

        Self::load_security_providers(&configurations, engine)?;
        info!(target: engine, "************ Security Providers Loaded *************");

        let xml_templates = Self::load_xml_templates(&configurations, template_loader.as_ref(), engine)?;
        info!(target: engine, "************ XML Templates Loaded *************");

        let manager = ConfigurationManager {
            source_identifier,
            configurations,
            xml_templates,
            log_routing,
            loggers,
            log_initialized_by_sdk,
            template_loader,
        };
        info!(target: engine, "{}", manager.describe());
        Ok(manager)
    }

    fn load_security_providers(configurations: &Properties, engine: &str) -> Result<(), ConfiguratorError> {
        let providers = extract(configurations, &PROVIDER_RULE);
        for line in &providers.malformed {
            debug!(target: engine, "Failed to load Security Provider: {}", line);
        }
        for provider in providers.values() {
            debug!(target: engine, "Loading Security Provider: {}", provider);
            if let Err(e) = ProviderRegistry::register(provider) {
                error!(target: engine, "ProviderRegistrationException:- {}", e);
                return Err(e.into());
            }
        }
        Ok(())
    }

    fn load_xml_templates(
        configurations: &Properties,
        loader: &dyn TemplateLoader,
        engine: &str,
    ) -> Result<BTreeMap<String, String>, ConfiguratorError> {
        let templates = extract(configurations, &TEMPLATE_RULE);
        if let Some(line) = templates.malformed.first() {
            error!(target: engine, "InitializationException:- template declaration without source: {}", line);
            return Err(ConfiguratorError::Initialization {
                name: line.clone(),
                source: TemplateError::MissingSource(line.clone()),
            });
        }

        let mut xml_templates = BTreeMap::new();
        for template in templates.entries {
            let content = loader.load_template(&template.value).map_err(|source| {
                error!(target: engine, "InitializationException:- {}", source);
                ConfiguratorError::Initialization {
                    name: template.name.clone(),
                    source,
                }
            })?;
            xml_templates.insert(template.name, content);
        }
        Ok(xml_templates)
    }

    pub fn source_identifier(&self) -> &str {
        &self.source_identifier
    }

    pub fn configurations(&self) -> &Properties {
        &self.configurations
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.configurations.get(key)
    }

    /// Templates keyed by transaction type
    pub fn xml_templates(&self) -> &BTreeMap<String, String> {
        &self.xml_templates
    }

    pub fn xml_template(&self, name: &str) -> Option<&str> {
        self.xml_templates.get(name).map(String::as_str)
    }

    /// `log4j*` pairs exactly as declared
    pub fn log_routing(&self) -> &[SubConfigEntry] {
        &self.log_routing
    }

    pub fn loggers(&self) -> &SdkLoggers {
        &self.loggers
    }

    pub fn log_initialized_by_sdk(&self) -> bool {
        self.log_initialized_by_sdk
    }

    pub fn template_loader(&self) -> &Arc<dyn TemplateLoader> {
        &self.template_loader
    }

    /// Human readable dump of every property and template for diagnostics.
    ///
    /// Values of sensitive keys are masked.
    pub fn describe(&self) -> String {
        let mut content = String::new();
        content.push_str("\n\n************* Start Of Configuration Properties *************\n");
        for entry in &self.configurations {
            if SENSITIVE_KEYS.contains(&entry.key()) {
                content.push_str(&format!("{}={}\n", entry.key(), REDACTED_VALUE));
            } else {
                content.push_str(&format!("{}={}\n", entry.key(), entry.value()));
            }
        }
        content.push_str("************* End Of Configuration Properties *************");
        content.push_str("\n\n************* Start of XML Templates *************\n");
        for (name, template) in &self.xml_templates {
            content.push_str(&format!("{}={}\n", name, template));
        }
        content.push_str("************* End of XML Templates *************\n");
        content
    }
}

impl fmt::Display for ConfigurationManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl fmt::Debug for ConfigurationManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigurationManager")
            .field("source_identifier", &self.source_identifier)
            .field("properties", &self.configurations.len())
            .field("xml_templates", &self.xml_templates.keys().collect::<Vec<_>>())
            .field("log_initialized_by_sdk", &self.log_initialized_by_sdk)
            .finish()
    }
}

/// Case-insensitive comparison of two lexically normalized source paths.
pub(crate) fn same_source(a: &str, b: &str) -> bool {
    normalize_source(a).to_uppercase() == normalize_source(b).to_uppercase()
}

pub(crate) fn normalize_source(source: &str) -> String {
    let unified = source.trim().replace('\\', "/");
    let absolute = unified.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();
    for part in unified.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                if matches!(parts.last(), Some(last) if *last != "..") {
                    parts.pop();
                } else if !absolute {
                    parts.push(part);
                }
            }
            _ => parts.push(part),
        }
    }
    let joined = parts.join("/");
    if absolute {
        format!("/{}", joined)
    } else {
        joined
    }
}
