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

//! menudrv: menu driver selection and callback dispatch
//!
//! This crate provides the driver layer of an emulator frontend's on-screen
//! menu: choosing one menu backend at startup, forwarding lifecycle events
//! to it, and binding input handlers to menu entries.
//!
//! # Architecture
//!
//! - [`core`]: drivers, registry, navigation, lists and callback binding
//! - [`frontend`]: the [`MenuContext`](frontend::MenuContext) owning the live
//!   menu, and the output surface drivers draw onto
//!
//! # Example
//!
//! ```
//! use menudrv::core::cbs::MenuAction;
//! use menudrv::core::config::MenuConfig;
//! use menudrv::core::list::{entry_types, EntryInfo};
//! use menudrv::frontend::MenuContext;
//!
//! let mut ctx = MenuContext::new();
//! ctx.init_menu(&MenuConfig::default())?;
//!
//! if let Some(menu) = ctx.menu_mut() {
//!     menu.append_entries(vec![
//!         EntryInfo::new("Resume", "resume", entry_types::PLAIN),
//!         EntryInfo::new("Quit", "quit", entry_types::PLAIN),
//!     ])?;
//! }
//!
//! ctx.handle_action(MenuAction::Down);
//! assert_eq!(ctx.menu().and_then(|m| m.selection()), Some(1));
//! ctx.free();
//! # Ok::<(), menudrv::MenuError>(())
//! ```
//!
//! # Error Handling
//!
//! Fallible operations return [`core::error::Result<T>`], an alias for
//! `Result<T, MenuError>`. Only initialization errors are fatal; every other
//! failure degrades to a no-op or a log line.

pub mod core;
pub mod frontend;

// Re-export commonly used types
pub use core::error::{MenuError, Result};
