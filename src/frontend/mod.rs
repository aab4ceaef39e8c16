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

//! Frontend module
//!
//! The host-facing side of the menu subsystem: the context object that owns
//! the live menu and the output surface the drivers draw onto.
//!
//! # Architecture
//!
//! - [`MenuContext`]: driver selection, menu lifetime and event dispatch
//! - [`video`]: output surface trait and an in-memory text grid

pub mod context;
pub mod video;

#[cfg(test)]
mod tests;

pub use context::MenuContext;
pub use video::{TextSurface, VideoSurface};
