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

//! Menu navigation state
//!
//! Tracks the selected entry and the scroll acceleration counter that grows
//! while a direction is held. The scroll speed is always derived from the
//! counter and never stored.
//!
//! The methods here only update state. [`MenuHandle`] wraps them and forwards
//! the resulting [`NavEvent`] to the active driver.
//!
//! [`MenuHandle`]: crate::core::handle::MenuHandle

/// Derive the scroll speed from the acceleration counter
///
/// Computed as `(max(scroll_accel, 2) - 2) / 4 + 1`: speed 1 for
/// `scroll_accel` in `0..=5`, then one more every 4 ticks.
///
/// # Example
///
/// ```
/// use menudrv::core::navigation::scroll_speed;
///
/// assert_eq!(scroll_speed(0), 1);
/// assert_eq!(scroll_speed(5), 1);
/// assert_eq!(scroll_speed(6), 2);
/// assert_eq!(scroll_speed(10), 3);
/// ```
#[inline]
pub fn scroll_speed(scroll_accel: usize) -> usize {
    (scroll_accel.max(2) - 2) / 4 + 1
}

/// Outcome of a navigation step, used to pick the driver hook to notify
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// Nothing changed (empty list)
    Unchanged,
    /// Selection moved down to the given index
    Incremented(usize),
    /// Selection moved up to the given index
    Decremented(usize),
    /// Selection wrapped to the first entry
    Cleared,
    /// Selection clamped to the last entry
    SetLast(usize),
}

/// Selection and scroll acceleration for the current list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigation {
    /// Index of the selected entry
    selection: usize,
    /// Held-direction counter
    scroll_accel: usize,
    /// Wrap around past either end instead of clamping
    wraparound: bool,
}

impl Navigation {
    /// Create navigation state with the selection on the first entry
    pub fn new(wraparound: bool) -> Self {
        Self {
            selection: 0,
            scroll_accel: 0,
            wraparound,
        }
    }

    #[inline]
    pub fn selection(&self) -> usize {
        self.selection
    }

    #[inline]
    pub fn scroll_accel(&self) -> usize {
        self.scroll_accel
    }

    #[inline]
    pub fn scroll_speed(&self) -> usize {
        scroll_speed(self.scroll_accel)
    }

    #[inline]
    pub fn wraparound(&self) -> bool {
        self.wraparound
    }

    pub fn set_wraparound(&mut self, wraparound: bool) {
        self.wraparound = wraparound;
    }

    pub fn set_scroll_accel(&mut self, scroll_accel: usize) {
        self.scroll_accel = scroll_accel;
    }

    /// Move the selection down by `speed` entries in a list of `size`
    pub fn increment(&mut self, speed: usize, size: usize) -> NavEvent {
        if size == 0 {
            return NavEvent::Unchanged;
        }

        let target = self.selection.saturating_add(speed);
        if target < size {
            self.selection = target;
            NavEvent::Incremented(target)
        } else if self.wraparound {
            self.selection = 0;
            NavEvent::Cleared
        } else {
            self.selection = size - 1;
            NavEvent::SetLast(self.selection)
        }
    }

    /// Move the selection up by `speed` entries in a list of `size`
    pub fn decrement(&mut self, speed: usize, size: usize) -> NavEvent {
        if size == 0 {
            return NavEvent::Unchanged;
        }

        if self.selection >= speed {
            self.selection -= speed;
        } else if self.wraparound {
            self.selection = size - 1;
        } else {
            self.selection = 0;
        }
        NavEvent::Decremented(self.selection)
    }

    /// Reset the selection to the first entry
    pub fn clear(&mut self) {
        self.selection = 0;
    }

    /// Select `index`, clamped into a list of `size`
    pub fn set(&mut self, index: usize, size: usize) {
        self.selection = if size == 0 { 0 } else { index.min(size - 1) };
    }

    /// Select the last entry of a list of `size`
    pub fn set_last(&mut self, size: usize) {
        self.selection = size.saturating_sub(1);
    }
}
