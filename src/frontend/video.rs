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

//! Output surface
//!
//! Menu drivers draw through the [`VideoSurface`] trait. The host owns the
//! surface and attaches it to the [`MenuContext`]; while none is attached,
//! render calls are skipped.
//!
//! [`MenuContext`]: crate::frontend::MenuContext

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Character-cell output surface
pub trait VideoSurface {
    /// Surface size as (columns, rows)
    fn size(&self) -> (usize, usize);

    /// Blank the whole surface
    fn clear(&mut self);

    /// Draw `text` starting at column `x`, row `y`
    ///
    /// Text past the right edge and rows past the bottom are clipped.
    fn draw_text(&mut self, x: usize, y: usize, text: &str);
}

/// In-memory character grid
///
/// # Example
///
/// ```
/// use menudrv::frontend::{TextSurface, VideoSurface};
///
/// let mut surface = TextSurface::new(8, 2);
/// surface.draw_text(2, 1, "menu");
/// assert_eq!(surface.line(1).as_deref(), Some("  menu"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSurface {
    columns: usize,
    rows: usize,
    cells: Vec<char>,
}

impl TextSurface {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            cells: vec![' '; columns * rows],
        }
    }

    /// Row `y` with trailing blanks removed
    pub fn line(&self, y: usize) -> Option<String> {
        if y >= self.rows {
            return None;
        }
        let start = y * self.columns;
        let row: String = self.cells[start..start + self.columns].iter().collect();
        Some(row.trim_end().to_string())
    }

    /// All rows with trailing blanks removed
    pub fn lines(&self) -> Vec<String> {
        (0..self.rows).filter_map(|y| self.line(y)).collect()
    }
}

impl VideoSurface for TextSurface {
    fn size(&self) -> (usize, usize) {
        (self.columns, self.rows)
    }

    fn clear(&mut self) {
        self.cells.fill(' ');
    }

    fn draw_text(&mut self, x: usize, y: usize, text: &str) {
        if y >= self.rows {
            return;
        }
        let row = y * self.columns;
        for (column, c) in (x..self.columns).zip(text.chars()) {
            self.cells[row + column] = c;
        }
    }
}

/// Shared surface, so the host can read back what the driver drew
impl<T: VideoSurface> VideoSurface for Rc<RefCell<T>> {
    fn size(&self) -> (usize, usize) {
        self.borrow().size()
    }

    fn clear(&mut self) {
        self.borrow_mut().clear();
    }

    fn draw_text(&mut self, x: usize, y: usize, text: &str) {
        self.borrow_mut().draw_text(x, y, text);
    }
}

impl fmt::Display for TextSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
