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

//! Test fixtures for common controller setups

use at91aic::core::aic::registers::{smr, svr, AIC_IECR, AIC_SPU};
use at91aic::core::aic::{Aic, Polarity, Sensitivity, SourceMode};

/// Base address of the AIC on AT91SAM7 parts
#[allow(dead_code)]
pub const AIC_BASE: u32 = 0xFFFF_F000;

/// Spurious vector used by every fixture
#[allow(dead_code)]
pub const SPURIOUS_VECTOR: u32 = 0xFFFF_0000;

/// Vector assigned to `source` by the fixtures
#[allow(dead_code)]
pub fn vector_for(source: u8) -> u32 {
    0x2000_0000 | (source as u32) << 8
}

/// Controller mapped at [`AIC_BASE`] with the fixture spurious vector
#[allow(dead_code)]
pub fn create_test_aic() -> Aic {
    let mut aic = Aic::with_base(AIC_BASE);
    aic.write(AIC_SPU, SPURIOUS_VECTOR);
    aic
}

/// Program and unmask a positive-polarity source through its registers
#[allow(dead_code)]
pub fn program_source(aic: &mut Aic, source: u8, priority: u8, sensitivity: Sensitivity) {
    let mode = SourceMode::new(priority, sensitivity, Polarity::Positive);
    aic.write(smr(source), mode.bits());
    aic.write(svr(source), vector_for(source));
    aic.write(AIC_IECR, 1 << source);
}
