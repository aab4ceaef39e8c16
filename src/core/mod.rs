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

//! Core menu components
//!
//! - [`driver`]: driver trait, built-in drivers and the registry
//! - [`handle`]: the live menu instance
//! - [`navigation`]: selection and scroll acceleration
//! - [`list`]: entries and the list stack
//! - [`cbs`]: per-entry callback binding and default handlers
//! - [`config`]: menu settings
//! - [`error`]: error types

pub mod cbs;
pub mod config;
pub mod driver;
pub mod error;
pub mod handle;
pub mod hash;
pub mod list;
pub mod navigation;
