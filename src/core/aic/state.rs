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

//! Snapshot support for the controller

use super::mode::{Polarity, Sensitivity, SourceMode};
use super::{Aic, CoreStatus, DebugControl, MAX_PRIORITY, SOURCE_COUNT, SYSTEM_SOURCE};
use crate::core::error::{AicError, Result};
use crate::core::save_state::{AicState, StateSave};

impl StateSave for Aic {
    type State = AicState;

    fn to_state(&self) -> AicState {
        AicState {
            source_modes: self.modes.map(SourceMode::bits),
            source_vectors: self.vectors,
            in_service: self.stack.slots(),
            in_service_priority: self.stack.priority(),
            levels: self.lines.levels(),
            edges: self.lines.edges(),
            pending: self.pending,
            mask: self.mask,
            core_status: self.status.bits(),
            spurious_vector: self.spurious_vector,
            debug_control: self.debug.bits(),
        }
    }

    fn restore_from_state(&mut self, state: &AicState) -> Result<()> {
        if !(-1..=i32::from(MAX_PRIORITY)).contains(&state.in_service_priority) {
            return Err(AicError::InvalidState(format!(
                "in-service priority {} out of range",
                state.in_service_priority
            )));
        }
        if let Some(source) = state
            .in_service
            .iter()
            .find(|&&source| source as usize >= SOURCE_COUNT)
        {
            return Err(AicError::InvalidState(format!(
                "in-service source {} out of range",
                source
            )));
        }

        self.modes = state.source_modes.map(SourceMode::from_bits);
        self.modes[SYSTEM_SOURCE as usize] = self.modes[SYSTEM_SOURCE as usize].with_positive();
        self.vectors = state.source_vectors;

        self.edge_triggered = 0;
        self.positive = 0;
        for (source, mode) in self.modes.iter().enumerate() {
            if mode.sensitivity() == Sensitivity::Edge {
                self.edge_triggered |= 1 << source;
            }
            if mode.polarity() == Polarity::Positive {
                self.positive |= 1 << source;
            }
        }

        self.stack.restore(state.in_service, state.in_service_priority);
        self.lines.restore(state.levels, state.edges);
        self.pending = state.pending;
        self.mask = state.mask;
        self.status = CoreStatus::from_bits_truncate(state.core_status);
        self.spurious_vector = state.spurious_vector;
        self.debug = DebugControl::from_bits_truncate(state.debug_control);

        log::debug!(
            "AIC restored: priority={} pending=0x{:08X} mask=0x{:08X}",
            state.in_service_priority,
            state.pending,
            state.mask
        );

        self.drive_lines();
        Ok(())
    }
}
