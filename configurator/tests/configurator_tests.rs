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
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use anyhow::Result;
use configurator::types::keys::DEFAULT_CONFIGURATION_FILE;
use configurator::extractor::PROVIDER_RULE;
use configurator::{extract, ConfigurationManager, ConfiguratorError, TemplateError, TemplateLoader};
use env_config_parse::{PropertySource, SourceError};
use security_provider::{register_factory, ProviderError, SecurityCatalog, SecurityProvider};
use serial_test::serial;

struct InlineSource(String);

impl InlineSource {
    fn shared(text: &str) -> Arc<dyn PropertySource> {
        Arc::new(InlineSource(text.to_string()))
    }
}

impl PropertySource for InlineSource {
    fn read(&self, _identifier: &str) -> Result<String, SourceError> {
        Ok(self.0.clone())
    }
}

struct CountingSource {
    text: String,
    reads: AtomicUsize,
}

impl PropertySource for CountingSource {
    fn read(&self, _identifier: &str) -> Result<String, SourceError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.text.clone())
    }
}

#[derive(Default)]
struct StaticTemplates(HashMap<String, String>);

impl StaticTemplates {
    fn with(mut self, path: &str, text: &str) -> Self {
        self.0.insert(path.to_string(), text.to_string());
        self
    }

    fn shared(self) -> Arc<dyn TemplateLoader> {
        Arc::new(self)
    }
}

impl TemplateLoader for StaticTemplates {
    fn load_template(&self, template_path: &str) -> Result<String, TemplateError> {
        self.0
            .get(template_path)
            .cloned()
            .ok_or_else(|| TemplateError::NotFound(template_path.to_string()))
    }
}

struct PanickingTemplates;

impl TemplateLoader for PanickingTemplates {
    fn load_template(&self, template_path: &str) -> Result<String, TemplateError> {
        panic!("template store unavailable for {}", template_path)
    }
}

struct FooProvider;

impl FooProvider {
    fn create() -> Result<Box<dyn SecurityProvider>> {
        Ok(Box::new(FooProvider))
    }
}

impl SecurityProvider for FooProvider {
    fn name(&self) -> &str {
        "Foo"
    }

    fn version(&self) -> String {
        "1.0".to_string()
    }

    fn info(&self) -> String {
        "Test provider".to_string()
    }

    fn services(&self) -> Vec<String> {
        vec!["FOO".to_string()]
    }

    fn digest(&self, _algorithm: &str, data: &[u8]) -> Result<Vec<u8>, ProviderError> {
        Ok(data.to_vec())
    }
}

fn initialize_inline(identifier: &str, text: &str) -> Result<Arc<ConfigurationManager>, ConfiguratorError> {
    ConfigurationManager::builder()
        .source_identifier(identifier)
        .property_source(InlineSource::shared(text))
        .template_loader(StaticTemplates::default().shared())
        .initialize()
}

#[test]
#[serial]
fn test_default_resources_load() {
    ConfigurationManager::reset_for_tests();
    let configurator = ConfigurationManager::initialize(Some(DEFAULT_CONFIGURATION_FILE)).unwrap();

    assert_eq!(configurator.source_identifier(), DEFAULT_CONFIGURATION_FILE);
    assert!(configurator.log_initialized_by_sdk());
    assert!(configurator.xml_template("NewOrder").unwrap().contains("<NewOrder>"));
    assert!(configurator.xml_templates().keys().all(|name| !name.starts_with("ComplexRoot")));
    assert_eq!(configurator.xml_templates().len(), 4);
    assert!(configurator.log_routing().iter().any(|e| e.key == "log4j.rootLogger"));

    let names = SecurityCatalog::get_instance().provider_names();
    assert!(names.contains(&"OpenSSL".to_string()));
    assert!(names.contains(&"SM".to_string()));
}

#[test]
#[serial]
fn test_initialize_is_idempotent() {
    ConfigurationManager::reset_for_tests();
    let first = ConfigurationManager::initialize(Some(DEFAULT_CONFIGURATION_FILE)).unwrap();
    let second = ConfigurationManager::initialize(None).unwrap();
    let third = ConfigurationManager::initialize(Some("CONFIG\\LineHandler.properties")).unwrap();
    let fourth = ConfigurationManager::initialize(Some("./config//linehandler.properties")).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&first, &third));
    assert!(Arc::ptr_eq(&first, &fourth));
    assert!(Arc::ptr_eq(&first, &ConfigurationManager::get_instance().unwrap()));
}

#[test]
#[serial]
fn test_repeated_initialize_has_no_side_effects() {
    ConfigurationManager::reset_for_tests();
    register_factory("com.example.FooProvider", FooProvider::create);
    let source = Arc::new(CountingSource {
        text: "security.provider.1=com.example.FooProvider\n".to_string(),
        reads: AtomicUsize::new(0),
    });
    let shared: Arc<dyn PropertySource> = source.clone();
    let initialize = || {
        ConfigurationManager::builder()
            .source_identifier("test/repeat.properties")
            .property_source(Arc::clone(&shared))
            .template_loader(StaticTemplates::default().shared())
            .initialize()
            .unwrap()
    };

    let first = initialize();
    let catalog = SecurityCatalog::get_instance();
    let installed = catalog.len();

    let second = initialize();
    let third = ConfigurationManager::initialize(Some("test/repeat.properties")).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&first, &third));
    assert_eq!(source.reads.load(Ordering::SeqCst), 1);
    assert_eq!(catalog.len(), installed);
}

#[test]
#[serial]
fn test_conflicting_source_is_rejected() {
    ConfigurationManager::reset_for_tests();
    let bound = initialize_inline("test/a.properties", "HostName=a\n").unwrap();

    match ConfigurationManager::initialize(Some("test/b.properties")) {
        Err(ConfiguratorError::ConfigurationConflict { bound, requested }) => {
            assert_eq!(bound, "test/a.properties");
            assert_eq!(requested, "test/b.properties");
        }
        other => panic!("expected a conflict, got {:?}", other),
    }
    assert!(Arc::ptr_eq(&bound, &ConfigurationManager::get_instance().unwrap()));
}

#[test]
#[serial]
fn test_missing_or_empty_source_fails() {
    ConfigurationManager::reset_for_tests();
    let missing = ConfigurationManager::initialize(Some("config/absent.properties"));
    assert!(matches!(missing, Err(ConfiguratorError::Configuration(_))));

    let empty = ConfigurationManager::initialize(Some("config/empty.properties"));
    assert!(matches!(empty, Err(ConfiguratorError::Configuration(_))));

    let comments_only = initialize_inline("test/comments.properties", "# nothing\n\n! here\n");
    assert!(matches!(comments_only, Err(ConfiguratorError::Configuration(_))));

    assert!(ConfigurationManager::get_instance().is_err());
    assert_eq!(ConfigurationManager::bound_source(), None);
}

#[test]
#[serial]
fn test_complex_root_is_not_a_template() {
    ConfigurationManager::reset_for_tests();
    let configurator = ConfigurationManager::builder()
        .source_identifier("test/complex.properties")
        .property_source(InlineSource::shared(
            "XMLTemplates.Request.NewOrder=t/NewOrder.xml\n\
             XMLTemplates.Request.ComplexRoot.Profile=never/loaded.xml\n",
        ))
        .template_loader(StaticTemplates::default().with("t/NewOrder.xml", "<NewOrder/>").shared())
        .initialize()
        .unwrap();

    assert_eq!(configurator.xml_templates().len(), 1);
    assert_eq!(configurator.xml_template("NewOrder"), Some("<NewOrder/>"));
    assert_eq!(
        configurator.property("XMLTemplates.Request.ComplexRoot.Profile"),
        Some("never/loaded.xml")
    );
}

#[test]
#[serial]
fn test_template_failure_leaves_no_instance() {
    ConfigurationManager::reset_for_tests();
    let result = initialize_inline("test/templates.properties", "XMLTemplates.Request.NewOrder=t/absent.xml\n");

    match result {
        Err(ConfiguratorError::Initialization { name, source }) => {
            assert_eq!(name, "NewOrder");
            assert!(matches!(source, TemplateError::NotFound(_)));
        }
        other => panic!("expected an initialization error, got {:?}", other),
    }
    assert!(ConfigurationManager::get_instance().is_err());
}

#[test]
#[serial]
fn test_declared_providers_are_registered() {
    ConfigurationManager::reset_for_tests();
    register_factory("com.example.FooProvider", FooProvider::create);

    let configurator = initialize_inline(
        "test/providers.properties",
        "security.provider.1=com.example.FooProvider\nsecurity.provider.2\n",
    )
    .unwrap();

    assert!(configurator.property("security.provider.2").is_some());
    let providers = extract(configurator.configurations(), &PROVIDER_RULE);
    assert_eq!(providers.malformed, vec!["security.provider.2".to_string()]);
    assert_eq!(providers.values().collect::<Vec<_>>(), vec!["com.example.FooProvider"]);
    let catalog = SecurityCatalog::get_instance();
    let foo = catalog.get_provider("Foo").unwrap();
    assert!(foo.supports("foo"));
    assert_eq!(catalog.provider_names().iter().filter(|n| n.as_str() == "Foo").count(), 1);

    ConfigurationManager::reset_for_tests();
    initialize_inline("test/providers.properties", "security.provider.1=com.example.FooProvider\n").unwrap();
    assert_eq!(catalog.provider_names().iter().filter(|n| n.as_str() == "Foo").count(), 1);
}

#[test]
#[serial]
fn test_unknown_provider_fails() {
    ConfigurationManager::reset_for_tests();
    let result = initialize_inline("test/unknown.properties", "security.provider.1=com.example.Missing\n");

    match result {
        Err(ConfiguratorError::ProviderRegistration(ProviderError::NotFound(id))) => {
            assert_eq!(id, "com.example.Missing");
        }
        other => panic!("expected a provider error, got {:?}", other),
    }
    assert!(ConfigurationManager::get_instance().is_err());
}

#[test]
#[serial]
fn test_describe_masks_password() {
    ConfigurationManager::reset_for_tests();
    let configurator = ConfigurationManager::builder()
        .source_identifier("test/secret.properties")
        .property_source(InlineSource::shared(
            "OrbitalConnectionUsername=merchant\n\
             OrbitalConnectionPassword=secret123\n\
             XMLTemplates.Request.NewOrder=t/NewOrder.xml\n",
        ))
        .template_loader(StaticTemplates::default().with("t/NewOrder.xml", "<NewOrder/>").shared())
        .initialize()
        .unwrap();

    let dump = configurator.to_string();
    assert!(!dump.contains("secret123"));
    assert!(dump.contains("OrbitalConnectionPassword=########"));
    assert!(dump.contains("OrbitalConnectionUsername=merchant"));
    assert!(dump.contains("NewOrder=<NewOrder/>"));
    assert!(dump.contains("************* Start Of Configuration Properties *************"));
    assert!(dump.contains("************* End of XML Templates *************"));
    assert_eq!(configurator.property("OrbitalConnectionPassword"), Some("secret123"));

    assert!(!format!("{:?}", configurator.configurations()).contains("secret123"));
    assert!(!format!("{:?}", configurator).contains("secret123"));
    let entries: Vec<String> = configurator.configurations().iter().map(|e| format!("{:?}", e)).collect();
    assert!(entries.iter().all(|e| !e.contains("secret123")));
}

#[test]
#[serial]
fn test_reset_keeps_bound_source() {
    ConfigurationManager::reset_for_tests();
    let first = initialize_inline("test/bound.properties", "HostName=a\n").unwrap();
    ConfigurationManager::reset_for_tests();

    let second = ConfigurationManager::builder()
        .property_source(InlineSource::shared("HostName=b\n"))
        .template_loader(StaticTemplates::default().shared())
        .initialize()
        .unwrap();

    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(second.source_identifier(), "test/bound.properties");
    assert_eq!(second.property("HostName"), Some("b"));
}

#[test]
#[serial]
fn test_panicking_loader_binds_nothing() {
    ConfigurationManager::reset_for_tests();
    // A failed load clears any earlier binding
    assert!(initialize_inline("test/cleared.properties", "").is_err());
    assert_eq!(ConfigurationManager::bound_source(), None);

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        ConfigurationManager::builder()
            .source_identifier("test/panic.properties")
            .property_source(InlineSource::shared("XMLTemplates.Request.NewOrder=t/NewOrder.xml\n"))
            .template_loader(Arc::new(PanickingTemplates))
            .initialize()
    }));

    assert!(outcome.is_err());
    assert_eq!(ConfigurationManager::bound_source(), None);
    assert!(ConfigurationManager::get_instance().is_err());

    let recovered = initialize_inline("test/after-panic.properties", "HostName=a\n").unwrap();
    assert_eq!(recovered.source_identifier(), "test/after-panic.properties");
    assert_eq!(ConfigurationManager::bound_source().as_deref(), Some("test/after-panic.properties"));
}

#[test]
#[serial]
fn test_caller_supplied_loggers() {
    ConfigurationManager::reset_for_tests();
    let configurator = ConfigurationManager::builder()
        .source_identifier("test/host-loggers.properties")
        .loggers("host::engine", "host::ecommerce")
        .property_source(InlineSource::shared("HostName=a\n"))
        .template_loader(StaticTemplates::default().shared())
        .initialize()
        .unwrap();

    assert!(!configurator.log_initialized_by_sdk());
    assert_eq!(configurator.loggers().ecommerce(), "host::ecommerce");
}

#[test]
#[serial]
fn test_concurrent_initialization_loads_once() {
    ConfigurationManager::reset_for_tests();
    let source = Arc::new(CountingSource {
        text: "HostName=concurrent\n".to_string(),
        reads: AtomicUsize::new(0),
    });
    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let source: Arc<dyn PropertySource> = source.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                ConfigurationManager::builder()
                    .source_identifier("test/concurrent.properties")
                    .property_source(source)
                    .template_loader(StaticTemplates::default().shared())
                    .initialize()
            })
        })
        .collect();

    let instances: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap())
        .collect();

    assert_eq!(source.reads.load(Ordering::SeqCst), 1);
    assert!(instances.iter().all(|i| Arc::ptr_eq(i, &instances[0])));
}
