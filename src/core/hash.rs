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

//! Label hashing
//!
//! Menu labels are matched by a 32-bit djb2 hash computed once when an
//! entry is created, so callback resolution never compares strings.

/// Compute the djb2 hash of a menu label
///
/// # Example
///
/// ```
/// use menudrv::core::hash::label_hash;
///
/// assert_eq!(label_hash(""), 5381);
/// assert_eq!(label_hash("a"), 5381 * 33 + 0x61);
/// ```
pub fn label_hash(label: &str) -> u32 {
    label
        .bytes()
        .fold(5381u32, |hash, c| hash.wrapping_mul(33).wrapping_add(c as u32))
}

/// Labels with built-in meaning
pub mod labels {
    /// Root list pushed by the menu initializer
    pub const MAIN_MENU: &str = "main_menu";
    /// Help list pushed by the default info action
    pub const INFO_SCREEN: &str = "info_screen";
}
