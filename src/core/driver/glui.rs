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

//! GLUI menu driver
//!
//! Minimal list layout that keeps the selection centered on screen and
//! blinks the cursor. It leaves the navigation hooks unset and derives its
//! layout from the selection at render time.

use super::MenuDriver;
use crate::core::error::Result;
use crate::core::handle::MenuHandle;
use crate::frontend::video::VideoSurface;
use std::any::Any;

/// Frames between cursor blink toggles
pub const GLUI_BLINK_FRAMES: u64 = 30;

/// Driver-private state
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GluiState {
    /// Frames since init
    pub frame_count: u64,
    /// Cursor currently drawn
    pub cursor_visible: bool,
    /// Wallpaper texture loaded
    pub texture_loaded: bool,
}

/// Centered-list menu driver
#[derive(Debug, Default, Clone, Copy)]
pub struct GluiDriver;

impl MenuDriver for GluiDriver {
    fn ident(&self) -> &'static str {
        "glui"
    }

    fn init(&self) -> Result<Box<dyn Any>> {
        Ok(Box::new(GluiState {
            cursor_visible: true,
            ..Default::default()
        }))
    }

    fn context_reset(&self, menu: &mut MenuHandle) {
        if let Some(state) = menu.userdata_mut::<GluiState>() {
            state.texture_loaded = false;
        }
        self.set_texture(menu);
    }

    fn frame(&self, menu: &mut MenuHandle) {
        if let Some(state) = menu.userdata_mut::<GluiState>() {
            state.frame_count += 1;
            if state.frame_count % GLUI_BLINK_FRAMES == 0 {
                state.cursor_visible = !state.cursor_visible;
            }
        }
    }

    fn render(&self, menu: &mut MenuHandle, video: &mut dyn VideoSurface) {
        let Some(cursor_visible) = menu.userdata::<GluiState>().map(|s| s.cursor_visible) else {
            return;
        };
        let Some(list) = menu.list().map(|stack| stack.current()) else {
            return;
        };

        let (columns, rows) = video.size();
        let visible = rows.saturating_sub(1);
        let selection = menu.navigation().selection();
        let begin = selection
            .saturating_sub(visible / 2)
            .min(list.len().saturating_sub(visible));

        video.clear();
        let header = format!("== {} ==", list.label());
        video.draw_text(0, 0, &header);
        if columns > header.len() {
            video.draw_text(header.len(), 0, &"=".repeat(columns - header.len()));
        }

        for entry in list.entries().iter().skip(begin).take(visible) {
            let info = entry.info();
            let cursor = if info.idx == selection && cursor_visible {
                '*'
            } else {
                ' '
            };
            let line = if info.elem0.is_empty() {
                format!("{} {}", cursor, info.path)
            } else {
                format!("{} {}: {}", cursor, info.path, info.elem0)
            };
            video.draw_text(0, 1 + info.idx - begin, &line);
        }
    }

    fn set_texture(&self, menu: &mut MenuHandle) {
        if let Some(state) = menu.userdata_mut::<GluiState>() {
            state.texture_loaded = true;
        }
    }
}
