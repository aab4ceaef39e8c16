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

//! Unit tests for callback binding and the default handlers

use super::*;
use crate::action_handler;
use crate::core::driver::NullDriver;
use crate::core::handle::MenuHandle;
use crate::core::list::{entry_types, EntryInfo, FileList};
use std::sync::Arc;

fn action_down_custom(_menu: &mut MenuHandle, _entry: &EntryInfo) -> i32 {
    42
}

fn action_down_typed(_menu: &mut MenuHandle, _entry: &EntryInfo) -> i32 {
    7
}

/// Handle with a pushed list of `count` plain entries
fn new_test_menu(count: usize) -> MenuHandle {
    let mut menu = MenuHandle::new(Arc::new(NullDriver), Box::new(()), true);
    menu.init_entries().unwrap();
    let mut list = FileList::new("test");
    for i in 0..count {
        let path = format!("Entry {}", i);
        list.push(EntryInfo::new(&path, "entry", entry_types::PLAIN).with_elements("", "Help text"));
    }
    menu.push_list(list).unwrap();
    menu
}

#[test]
fn test_bind_none_is_invalid_argument() {
    let binder = CallbackBinder::new();
    let err = binder.bind(None).unwrap_err();
    assert!(matches!(err, MenuError::InvalidArgument(_)));
}

#[test]
fn test_bind_defaults() {
    let binder = CallbackBinder::empty();
    let entry = EntryInfo::new("Plain", "plain", entry_types::PLAIN);
    let callbacks = binder.bind(Some(&entry)).unwrap();

    assert_eq!(callbacks.ident(ActionSlot::Down), "action_down_generic");
    assert_eq!(callbacks.ident(ActionSlot::Up), "action_up_generic");
    assert_eq!(callbacks.ident(ActionSlot::Info), "action_info_default");
    assert_eq!(callbacks.ident(ActionSlot::Cancel), "action_cancel_pop");
    for slot in ActionSlot::ALL {
        assert_eq!(callbacks.ident(slot), default_handler(slot).ident());
    }
}

#[test]
fn test_label_override_beats_type_override() {
    let binder = CallbackBinder::empty()
        .with_type_override(
            entry_types::SETTING,
            ActionSlot::Down,
            action_handler!(action_down_typed),
        )
        .with_label_override("special", ActionSlot::Down, action_handler!(action_down_custom));

    let special = EntryInfo::new("Special", "special", entry_types::SETTING);
    let callbacks = binder.bind(Some(&special)).unwrap();
    assert_eq!(callbacks.ident(ActionSlot::Down), "action_down_custom");
    // Other slots fall through to the defaults
    assert_eq!(callbacks.ident(ActionSlot::Up), "action_up_generic");

    let setting = EntryInfo::new("Other", "other", entry_types::SETTING);
    let callbacks = binder.bind(Some(&setting)).unwrap();
    assert_eq!(callbacks.ident(ActionSlot::Down), "action_down_typed");

    let plain = EntryInfo::new("Plain", "other", entry_types::PLAIN);
    let callbacks = binder.bind(Some(&plain)).unwrap();
    assert_eq!(callbacks.ident(ActionSlot::Down), "action_down_generic");
}

#[test]
fn test_builtin_overrides() {
    let binder = CallbackBinder::new();

    let separator = EntryInfo::new("----", "separator", entry_types::SEPARATOR);
    let callbacks = binder.bind(Some(&separator)).unwrap();
    assert_eq!(callbacks.ident(ActionSlot::Ok), "action_ok_null");
    assert_eq!(callbacks.ident(ActionSlot::Info), "action_info_none");
    assert_eq!(callbacks.ident(ActionSlot::Down), "action_down_generic");

    let help = FileList::help(0, None);
    let callbacks = binder.bind(help.entry(0)).unwrap();
    assert_eq!(callbacks.ident(ActionSlot::Info), "action_info_none");
}

#[test]
fn test_bound_override_runs() {
    let mut menu = new_test_menu(3);
    menu.set_binder(
        CallbackBinder::new().with_label_override(
            "entry",
            ActionSlot::Down,
            action_handler!(action_down_custom),
        ),
    );
    let mut list = FileList::new("custom");
    list.push(EntryInfo::new("Entry", "entry", entry_types::PLAIN));
    menu.push_list(list).unwrap();

    assert_eq!(menu.dispatch_action(ActionSlot::Down), 42);
}

#[test]
fn test_down_moves_selection() {
    let mut menu = new_test_menu(5);
    assert_eq!(menu.dispatch_action(ActionSlot::Down), 0);
    assert_eq!(menu.selection(), Some(1));

    // accel 6 gives speed 2
    menu.set_scroll_accel(6);
    assert_eq!(menu.dispatch_action(ActionSlot::Down), 0);
    assert_eq!(menu.selection(), Some(3));
}

#[test]
fn test_down_without_list_fails() {
    let mut menu = MenuHandle::new(Arc::new(NullDriver), Box::new(()), true);
    let entry = EntryInfo::new("Plain", "plain", entry_types::PLAIN);
    let handler = default_handler(ActionSlot::Down);
    assert_eq!(handler.call(&mut menu, &entry), -1);

    // Info degrades to a no-op instead
    let handler = default_handler(ActionSlot::Info);
    assert_eq!(handler.call(&mut menu, &entry), 0);
    assert!(menu.list().is_none());
}

#[test]
fn test_down_and_up_on_empty_list() {
    let mut menu = MenuHandle::new(Arc::new(NullDriver), Box::new(()), true);
    menu.init_entries().unwrap();
    let entry = EntryInfo::new("Plain", "plain", entry_types::PLAIN);

    assert_eq!(default_handler(ActionSlot::Down).call(&mut menu, &entry), 0);
    assert_eq!(default_handler(ActionSlot::Up).call(&mut menu, &entry), 0);
    assert_eq!(menu.selection(), Some(0));
}

#[test]
fn test_up_wraps_to_last() {
    let mut menu = new_test_menu(4);
    assert_eq!(menu.dispatch_action(ActionSlot::Up), 0);
    assert_eq!(menu.selection(), Some(3));
}

#[test]
fn test_left_right_fast_scroll() {
    let mut menu = new_test_menu(20);

    // speed 1 gives a jump of 8
    assert_eq!(menu.dispatch_action(ActionSlot::Right), 0);
    assert_eq!(menu.selection(), Some(8));
    assert_eq!(menu.dispatch_action(ActionSlot::Right), 0);
    assert_eq!(menu.selection(), Some(16));
    assert_eq!(menu.dispatch_action(ActionSlot::Right), 0);
    assert_eq!(menu.selection(), Some(19));

    assert_eq!(menu.dispatch_action(ActionSlot::Left), 0);
    assert_eq!(menu.selection(), Some(11));
    assert_eq!(menu.dispatch_action(ActionSlot::Left), 0);
    assert_eq!(menu.selection(), Some(3));
    assert_eq!(menu.dispatch_action(ActionSlot::Left), 0);
    assert_eq!(menu.selection(), Some(0));
}

#[test]
fn test_info_pushes_help_and_cancel_returns() {
    let mut menu = new_test_menu(3);
    menu.navigation_set(2, true);

    assert_eq!(menu.dispatch_action(ActionSlot::Info), 0);
    let stack = menu.list().unwrap();
    assert_eq!(stack.depth(), 3);
    assert_eq!(stack.current().label(), labels::INFO_SCREEN);
    assert_eq!(stack.current().directory_ptr(), 2);
    assert_eq!(stack.current().entry(0).unwrap().path, "Help text");

    // Info on the info screen itself does nothing
    assert_eq!(menu.dispatch_action(ActionSlot::Info), 0);
    assert_eq!(menu.list().unwrap().depth(), 3);

    assert_eq!(menu.dispatch_action(ActionSlot::Cancel), 0);
    assert_eq!(menu.list().unwrap().depth(), 2);
    assert_eq!(menu.selection(), Some(2));
}

#[test]
fn test_select_runs_ok() {
    let mut menu = new_test_menu(2);
    menu.set_binder(CallbackBinder::new().with_type_override(
        entry_types::PLAIN,
        ActionSlot::Ok,
        action_handler!(action_down_custom),
    ));
    let mut list = FileList::new("custom");
    list.push(EntryInfo::new("Entry", "entry", entry_types::PLAIN));
    menu.push_list(list).unwrap();

    assert_eq!(menu.dispatch_action(ActionSlot::Select), 42);
}

#[test]
fn test_callback_set_idents() {
    let idents = CallbackSet::defaults().idents();
    assert_eq!(idents.len(), ActionSlot::COUNT);
    assert_eq!(idents[&ActionSlot::Start], "action_start_null");
}
