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

//! Helper functions for AIC tests

use super::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Configure, vector and unmask a positive-polarity source
///
/// The vector is `0x1000 * source` so tests can tell dispatches apart.
pub fn setup_source(aic: &mut Aic, source: u8, priority: u8, sensitivity: Sensitivity) {
    aic.configure_source(
        source,
        SourceMode::new(priority, sensitivity, Polarity::Positive),
    )
    .unwrap();
    aic.set_vector(source, vector_of(source)).unwrap();
    aic.enable_sources(1 << source);
}

pub fn vector_of(source: u8) -> u32 {
    0x1000 * source as u32
}

/// Controller with a recognizable spurious vector
pub fn create_test_aic() -> Aic {
    let mut aic = Aic::new();
    aic.set_spurious_vector(SPURIOUS);
    aic
}

pub const SPURIOUS: u32 = 0xDEAD_BEEF;

/// Sink that records every level it is driven to
#[derive(Default)]
pub struct RecordingSink {
    pub irq: Vec<bool>,
    pub fiq: Vec<bool>,
}

impl InterruptSink for RecordingSink {
    fn set_irq(&mut self, level: bool) {
        self.irq.push(level);
    }

    fn set_fiq(&mut self, level: bool) {
        self.fiq.push(level);
    }
}

/// Attach a recording sink and hand back a shared handle to it
pub fn attach_recorder(aic: &mut Aic) -> Rc<RefCell<RecordingSink>> {
    let sink = Rc::new(RefCell::new(RecordingSink::default()));
    aic.connect(Box::new(sink.clone()));
    sink
}
