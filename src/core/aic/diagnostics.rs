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

//! Inspectable diagnostic log

use crate::core::error::Diagnostic;
use std::collections::VecDeque;

/// Number of diagnostics kept before the oldest are dropped
pub const DIAGNOSTIC_CAPACITY: usize = 256;

/// Bounded record of anomalies seen by the controller
#[derive(Debug, Clone, Default)]
pub struct DiagnosticLog {
    entries: VecDeque<Diagnostic>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log `diagnostic` through the `log` facade and keep it
    pub fn report(&mut self, diagnostic: Diagnostic) {
        log::warn!("AIC: {}", diagnostic);
        if self.entries.len() == DIAGNOSTIC_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(diagnostic);
    }

    pub fn entries(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drain everything recorded so far
    pub fn take(&mut self) -> Vec<Diagnostic> {
        self.entries.drain(..).collect()
    }
}
