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

//! Custom assertions for controller state

use at91aic::core::aic::registers::AIC_ISR;
use at91aic::core::aic::Aic;

/// Assert both output lines
#[allow(dead_code)]
pub fn assert_lines(aic: &Aic, irq: bool, fiq: bool) {
    assert_eq!(
        (aic.irq_line(), aic.fiq_line()),
        (irq, fiq),
        "Output lines mismatch: expected irq={} fiq={}, got irq={} fiq={}",
        irq,
        fiq,
        aic.irq_line(),
        aic.fiq_line()
    );
}

/// Assert the current in-service level and the source reported by AIC_ISR
#[allow(dead_code)]
pub fn assert_in_service(aic: &mut Aic, priority: i32, source: u32) {
    assert_eq!(
        aic.in_service_priority(),
        priority,
        "In-service priority mismatch"
    );
    let isr = aic.read(AIC_ISR);
    assert_eq!(
        isr, source,
        "AIC_ISR mismatch: expected {}, got {}",
        source, isr
    );
}

/// Assert a single bit of a register word
#[allow(dead_code)]
pub fn assert_bit(word: u32, bit: u8, expected: bool) {
    assert_eq!(
        word & (1 << bit) != 0,
        expected,
        "Bit {} of 0x{:08X} should be {}",
        bit,
        word,
        expected
    );
}
