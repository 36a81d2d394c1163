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

//! Edge/level input tracker
//!
//! Keeps the live level of the 32 input lines and the sticky edge latch.
//! An edge is latched whenever a line changes in the direction given by the
//! source's polarity, regardless of the configured sensitivity, so switching
//! a source to edge mode later observes a consistent latch.

/// Live line levels and latched edges, one bit per source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputLines {
    /// Current level of each line (1 = high)
    levels: u32,

    /// Unacknowledged qualifying transitions
    edges: u32,
}

impl InputLines {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drive line `line` to `level`
    ///
    /// `positive` holds one bit per source, set for positive polarity.
    /// Returns true if the line actually changed.
    ///
    /// # Example
    ///
    /// ```
    /// use at91aic::core::aic::InputLines;
    ///
    /// let mut lines = InputLines::new();
    /// // Source 3 is positive polarity: rising edge latches
    /// lines.set_line(3, true, 1 << 3);
    /// assert_eq!(lines.edges(), 1 << 3);
    /// ```
    pub fn set_line(&mut self, line: u8, level: bool, positive: u32) -> bool {
        let bit = 1u32 << line;
        let old_levels = self.levels;

        if level {
            self.levels |= bit;
        } else {
            self.levels &= !bit;
        }

        // A rising edge qualifies for positive sources, a falling one otherwise
        let changed = old_levels ^ self.levels;
        self.edges |= changed & !(self.levels ^ positive);

        changed != 0
    }

    /// Level-sensitive assertion: line level matches the configured polarity
    pub fn asserted_levels(&self, positive: u32) -> u32 {
        !(self.levels ^ positive)
    }

    /// Software-forced edges (AIC_ISCR)
    pub fn force_edges(&mut self, bits: u32) {
        self.edges |= bits;
    }

    /// Clear latched edges (AIC_ICCR, vector fetch acknowledge)
    pub fn clear_edges(&mut self, bits: u32) {
        self.edges &= !bits;
    }

    pub fn levels(&self) -> u32 {
        self.levels
    }

    pub fn edges(&self) -> u32 {
        self.edges
    }

    /// Restore both bitmaps verbatim
    pub(crate) fn restore(&mut self, levels: u32, edges: u32) {
        self.levels = levels;
        self.edges = edges;
    }
}
