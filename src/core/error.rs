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

//! Error types for the menu subsystem
//!
//! Most failures inside the menu layer degrade to a no-op or a log line.
//! Only the variants returned from [`MenuContext::init_menu`] are fatal to
//! the host.
//!
//! [`MenuContext::init_menu`]: crate::frontend::MenuContext::init_menu

use thiserror::Error;

/// Menu subsystem error
#[derive(Debug, Error)]
pub enum MenuError {
    /// No driver at all is available in the registry
    #[error("no menu driver available in registry")]
    RegistryExhausted,

    /// The selected driver failed to create its runtime state
    #[error("cannot initialize menu: {0}")]
    InitFailed(String),

    /// A required argument was missing
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Configuration could not be parsed or serialized
    #[error("configuration error: {0}")]
    Config(String),

    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MenuError {
    /// Whether the error must terminate the host
    ///
    /// Everything except an empty registry or a failed driver init is
    /// recoverable by the caller.
    pub fn is_fatal(&self) -> bool {
        matches!(self, MenuError::RegistryExhausted | MenuError::InitFailed(_))
    }
}

/// Result alias for menu operations
pub type Result<T> = std::result::Result<T, MenuError>;
