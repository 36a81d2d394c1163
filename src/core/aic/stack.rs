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

//! In-service priority stack
//!
//! One slot per priority level holds the source being serviced at that
//! level. A spurious acknowledge occupies level 7 with an empty slot so the
//! matching EOI still pops it.

use super::mode::MAX_PRIORITY;

const LEVELS: usize = MAX_PRIORITY as usize + 1;

/// Nested interrupt stack, indexed by priority level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InServiceStack {
    /// Source in service at each level (None = empty or spurious)
    slots: [Option<u8>; LEVELS],

    /// Current in-service level (None = idle)
    current: Option<u8>,
}

impl InServiceStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current level as the hardware reports it: -1 when idle
    pub fn priority(&self) -> i32 {
        self.current.map_or(-1, i32::from)
    }

    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    /// Source in service at the current level, if any
    pub fn active_source(&self) -> Option<u8> {
        self.current.and_then(|level| self.slots[level as usize])
    }

    /// Enter `level` with `source` in service (None for spurious)
    pub fn push(&mut self, level: u8, source: Option<u8>) {
        let level = level.min(MAX_PRIORITY);
        self.slots[level as usize] = source;
        self.current = Some(level);
    }

    /// Leave the current level and fall back to the next lower occupied one
    ///
    /// Returns false when the stack was already idle.
    pub fn pop(&mut self) -> bool {
        let Some(level) = self.current else {
            return false;
        };

        self.slots[level as usize] = None;
        self.current = (0..level).rev().find(|&l| self.slots[l as usize].is_some());
        true
    }

    /// Raw slot words (0 = empty) for snapshots and debugging
    pub fn slots(&self) -> [u32; LEVELS] {
        self.slots.map(|slot| slot.map_or(0, u32::from))
    }

    /// Rebuild from raw slot words and a hardware priority value
    pub(crate) fn restore(&mut self, slots: [u32; LEVELS], priority: i32) {
        self.slots = slots.map(|word| match word {
            0 => None,
            source => Some(source as u8),
        });
        self.current = match priority {
            -1 => None,
            level => Some(level as u8),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let stack = InServiceStack::new();
        assert!(stack.is_idle());
        assert_eq!(stack.priority(), -1);
        assert_eq!(stack.active_source(), None);
    }

    #[test]
    fn test_push_pop_nested() {
        let mut stack = InServiceStack::new();
        stack.push(2, Some(4));
        stack.push(5, Some(9));
        assert_eq!(stack.priority(), 5);
        assert_eq!(stack.active_source(), Some(9));

        assert!(stack.pop());
        assert_eq!(stack.priority(), 2);
        assert_eq!(stack.active_source(), Some(4));

        assert!(stack.pop());
        assert!(stack.is_idle());
        assert!(!stack.pop());
    }

    #[test]
    fn test_pop_skips_empty_levels() {
        let mut stack = InServiceStack::new();
        stack.push(1, Some(3));
        stack.push(6, Some(8));
        stack.pop();
        assert_eq!(stack.priority(), 1);
    }

    #[test]
    fn test_spurious_slot_pops() {
        let mut stack = InServiceStack::new();
        stack.push(3, Some(5));
        stack.push(MAX_PRIORITY, None);
        assert_eq!(stack.priority(), 7);
        assert_eq!(stack.active_source(), None);

        stack.pop();
        assert_eq!(stack.priority(), 3);
        assert_eq!(stack.active_source(), Some(5));
    }

    #[test]
    fn test_slots_restore() {
        let mut stack = InServiceStack::new();
        stack.push(0, Some(12));
        stack.push(4, Some(30));

        let mut copy = InServiceStack::new();
        copy.restore(stack.slots(), stack.priority());
        assert_eq!(copy, stack);
    }
}
