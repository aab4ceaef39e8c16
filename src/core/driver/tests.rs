// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Unit tests for the driver registry and selection

use super::*;
use crate::core::error::MenuError;
use log::{Level, Log, Metadata, Record};
use std::cell::RefCell;
use std::sync::{Arc, Once};

struct NamedDriver(&'static str);

impl MenuDriver for NamedDriver {
    fn ident(&self) -> &'static str {
        self.0
    }
}

/// Logger that keeps each test thread's records apart
struct CaptureLogger;

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let line = record.args().to_string();
        RECORDS.with(|records| records.borrow_mut().push((record.level(), line)));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static LOGGER_INIT: Once = Once::new();

/// Run `f` and return the warnings it logged on this thread
fn capture_warnings(f: impl FnOnce()) -> Vec<String> {
    LOGGER_INIT.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(log::LevelFilter::Trace);
        }
    });
    RECORDS.with(|records| records.borrow_mut().clear());
    f();
    RECORDS.with(|records| {
        records
            .borrow_mut()
            .drain(..)
            .filter(|(level, _)| *level == Level::Warn)
            .map(|(_, line)| line)
            .collect()
    })
}

fn new_test_registry() -> DriverRegistry {
    DriverRegistry::new(vec![
        Arc::new(NamedDriver("alpha")),
        Arc::new(NamedDriver("beta")),
    ])
}

#[test]
fn test_null_is_always_last() {
    let registry = new_test_registry();
    assert_eq!(registry.len(), 3);
    assert_eq!(registry.find_ident(2), Some("null"));
    assert_eq!(registry.find_ident(3), None);
    assert!(registry.find_handle(3).is_none());
}

#[test]
fn test_find_handle_and_ident() {
    let registry = new_test_registry();
    assert_eq!(registry.find_handle(1).unwrap().ident(), "beta");
    assert_eq!(registry.find_ident(0), Some("alpha"));
    assert_eq!(registry.find_index("beta"), Some(1));
    assert_eq!(registry.find_index("gamma"), None);
}

#[test]
fn test_enumerate_options() {
    let registry = new_test_registry();
    assert_eq!(registry.enumerate_options().as_deref(), Some("alpha|beta|null"));

    let registry = DriverRegistry::new(Vec::new());
    assert_eq!(registry.enumerate_options().as_deref(), Some("null"));

    let registry = DriverRegistry::empty();
    assert_eq!(registry.enumerate_options().as_deref(), Some(""));
}

#[test]
fn test_enumerate_options_exact_capacity() {
    let registry = new_test_registry();
    let options = registry.enumerate_options().unwrap();
    assert_eq!(options.len(), "alpha|beta|null".len());
    assert!(!options.starts_with('|'));
    assert!(!options.ends_with('|'));
}

#[test]
fn test_select_exact_match() {
    let registry = new_test_registry();
    for name in ["alpha", "beta", "null"] {
        let selection = registry.select_with_report(name).unwrap();
        assert_eq!(selection.driver.ident(), name);
        assert!(!selection.fallback);
    }
}

#[test]
fn test_select_is_case_sensitive() {
    let registry = new_test_registry();
    let selection = registry.select_with_report("BETA").unwrap();
    assert_eq!(selection.index, 0);
    assert!(selection.fallback);
}

#[test]
fn test_select_falls_back_to_first() {
    let registry = new_test_registry();
    let selection = registry.select_with_report("missing").unwrap();
    assert_eq!(selection.index, 0);
    assert_eq!(selection.driver.ident(), "alpha");
    assert!(selection.fallback);

    assert_eq!(registry.select("").unwrap().ident(), "alpha");
}

#[test]
fn test_select_fallback_is_logged_once() {
    let registry = new_test_registry();

    let warnings = capture_warnings(|| {
        assert!(registry.select_with_report("missing").unwrap().fallback);
    });
    let fallbacks = warnings
        .iter()
        .filter(|line| line.contains("default to first menu driver"))
        .count();
    assert_eq!(fallbacks, 1, "{:?}", warnings);
    assert!(warnings.iter().any(|line| line.contains("\"missing\"")));

    let warnings = capture_warnings(|| {
        assert!(!registry.select_with_report("beta").unwrap().fallback);
    });
    assert!(warnings.is_empty(), "{:?}", warnings);
}

#[test]
fn test_select_only_fallback_registered() {
    let registry = DriverRegistry::new(Vec::new());
    assert_eq!(registry.select("rgui").unwrap().ident(), "null");
}

#[test]
fn test_select_empty_registry_is_fatal() {
    let registry = DriverRegistry::empty();
    let err = registry.select("rgui").err().unwrap();
    assert!(matches!(err, MenuError::RegistryExhausted));
    assert!(err.is_fatal());
}

#[test]
fn test_builtin_registry() {
    let registry = DriverRegistry::builtin();
    assert_eq!(registry.find_ident(registry.len() - 1), Some("null"));

    #[cfg(all(feature = "rgui", feature = "glui"))]
    assert_eq!(registry.enumerate_options().as_deref(), Some("rgui|glui|null"));

    // Shared, not rebuilt
    assert!(Arc::ptr_eq(&registry, &DriverRegistry::builtin()));
}

#[test]
fn test_null_driver_hooks_are_noops() {
    let driver = NullDriver;
    let mut menu = MenuHandle::new(Arc::new(NullDriver), driver.init().unwrap(), true);
    menu.init_entries().unwrap();
    driver.frame(&mut menu);
    driver.navigation_increment(&mut menu);
    driver.set_texture(&mut menu);
    assert_eq!(driver.entry_iterate(&mut menu, MenuAction::Down), 0);
    assert_eq!(menu.selection(), Some(0));
}
