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

//! Action slots and input actions

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Named callback slot on a menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionSlot {
    Up,
    Down,
    Left,
    Right,
    Ok,
    Cancel,
    Select,
    Start,
    Info,
}

impl ActionSlot {
    /// Number of slots
    pub const COUNT: usize = 9;

    /// Every slot, in table order
    pub const ALL: [ActionSlot; Self::COUNT] = [
        ActionSlot::Up,
        ActionSlot::Down,
        ActionSlot::Left,
        ActionSlot::Right,
        ActionSlot::Ok,
        ActionSlot::Cancel,
        ActionSlot::Select,
        ActionSlot::Start,
        ActionSlot::Info,
    ];

    /// Position of this slot in a callback table
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            ActionSlot::Up => "up",
            ActionSlot::Down => "down",
            ActionSlot::Left => "left",
            ActionSlot::Right => "right",
            ActionSlot::Ok => "ok",
            ActionSlot::Cancel => "cancel",
            ActionSlot::Select => "select",
            ActionSlot::Start => "start",
            ActionSlot::Info => "info",
        }
    }
}

impl fmt::Display for ActionSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Input action delivered to the menu
///
/// Every action except [`MenuAction::Noop`] maps onto one [`ActionSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Noop,
    Up,
    Down,
    Left,
    Right,
    Ok,
    Cancel,
    Select,
    Start,
    Info,
}

impl MenuAction {
    /// Numeric action code
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Action for a numeric code
    pub fn from_code(code: u32) -> Option<Self> {
        const ACTIONS: [MenuAction; 10] = [
            MenuAction::Noop,
            MenuAction::Up,
            MenuAction::Down,
            MenuAction::Left,
            MenuAction::Right,
            MenuAction::Ok,
            MenuAction::Cancel,
            MenuAction::Select,
            MenuAction::Start,
            MenuAction::Info,
        ];
        ACTIONS.get(code as usize).copied()
    }

    /// Callback slot this action triggers
    pub fn slot(self) -> Option<ActionSlot> {
        match self {
            MenuAction::Noop => None,
            MenuAction::Up => Some(ActionSlot::Up),
            MenuAction::Down => Some(ActionSlot::Down),
            MenuAction::Left => Some(ActionSlot::Left),
            MenuAction::Right => Some(ActionSlot::Right),
            MenuAction::Ok => Some(ActionSlot::Ok),
            MenuAction::Cancel => Some(ActionSlot::Cancel),
            MenuAction::Select => Some(ActionSlot::Select),
            MenuAction::Start => Some(ActionSlot::Start),
            MenuAction::Info => Some(ActionSlot::Info),
        }
    }
}

impl FromStr for MenuAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("noop") {
            return Ok(MenuAction::Noop);
        }
        ActionSlot::ALL
            .iter()
            .position(|slot| s.eq_ignore_ascii_case(slot.name()))
            .and_then(|i| MenuAction::from_code(i as u32 + 1))
            .ok_or_else(|| format!("Unknown menu action: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_index_matches_table_order() {
        for (i, slot) in ActionSlot::ALL.iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
    }

    #[test]
    fn test_action_codes() {
        assert_eq!(MenuAction::from_code(0), Some(MenuAction::Noop));
        assert_eq!(MenuAction::from_code(MenuAction::Info.code()), Some(MenuAction::Info));
        assert_eq!(MenuAction::from_code(10), None);
        assert_eq!(MenuAction::Noop.slot(), None);
        assert_eq!(MenuAction::Down.slot(), Some(ActionSlot::Down));
    }

    #[test]
    fn test_parse_action() {
        assert_eq!("down".parse::<MenuAction>(), Ok(MenuAction::Down));
        assert_eq!("INFO".parse::<MenuAction>(), Ok(MenuAction::Info));
        assert_eq!("noop".parse::<MenuAction>(), Ok(MenuAction::Noop));
        assert!("jump".parse::<MenuAction>().is_err());
    }
}
