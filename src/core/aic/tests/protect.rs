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

//! Debug control tests

use super::helpers::*;
use super::super::*;

fn protected_aic() -> Aic {
    let mut aic = create_test_aic();
    aic.set_debug_control(DebugControl::PROTECT);
    aic
}

#[test]
fn test_protect_mode_read_is_a_peek() {
    let mut aic = protected_aic();
    setup_source(&mut aic, 7, 4, Sensitivity::Edge);
    aic.set_line(7, true);

    assert_eq!(aic.fetch_vector(FetchKind::Read), vector_of(7));
    assert_eq!(aic.fetch_vector(FetchKind::Read), vector_of(7));
    assert_eq!(aic.in_service_priority(), -1);
    assert_eq!(aic.edges() & (1 << 7), 1 << 7);
    assert!(aic.irq_line());
}

#[test]
fn test_protect_mode_write_fetch_acknowledges() {
    let mut aic = protected_aic();
    setup_source(&mut aic, 7, 4, Sensitivity::Edge);
    aic.set_line(7, true);

    assert_eq!(aic.fetch_vector(FetchKind::Write), vector_of(7));
    assert_eq!(aic.in_service_priority(), 4);
    assert_eq!(aic.edges() & (1 << 7), 0);
    assert!(!aic.irq_line());
}

#[test]
fn test_protect_mode_register_write_fetch() {
    let mut aic = protected_aic();
    setup_source(&mut aic, 7, 4, Sensitivity::Edge);
    aic.set_line(7, true);

    // Debugger reads do not disturb the controller
    assert_eq!(aic.read(registers::AIC_IVR), vector_of(7));
    assert_eq!(aic.read(registers::AIC_ISR), 0);

    aic.write(registers::AIC_IVR, 0);
    assert_eq!(aic.read(registers::AIC_ISR), 7);
    assert_eq!(aic.in_service_priority(), 4);
}

#[test]
fn test_protect_mode_spurious_does_not_push() {
    let mut aic = protected_aic();

    assert_eq!(aic.fetch_vector(FetchKind::Read), SPURIOUS);
    assert_eq!(aic.in_service_priority(), -1);

    assert_eq!(aic.fetch_vector(FetchKind::Write), SPURIOUS);
    assert_eq!(aic.in_service_priority(), 7);
}

#[test]
fn test_without_protect_read_acknowledges() {
    let mut aic = create_test_aic();
    setup_source(&mut aic, 7, 4, Sensitivity::Edge);
    aic.set_line(7, true);

    aic.read(registers::AIC_IVR);
    assert_eq!(aic.in_service_priority(), 4);
}

#[test]
fn test_global_mask_forces_lines_low() {
    let mut aic = create_test_aic();
    setup_source(&mut aic, 0, 0, Sensitivity::Level);
    setup_source(&mut aic, 3, 2, Sensitivity::Level);
    aic.set_line(0, true);
    aic.set_line(3, true);
    assert!(aic.irq_line());
    assert!(aic.fiq_line());

    aic.set_debug_control(DebugControl::GLOBAL_MASK);
    assert!(!aic.irq_line());
    assert!(!aic.fiq_line());
    assert_eq!(aic.core_status(), CoreStatus::empty());

    // Pending state is untouched
    assert_ne!(aic.pending() & (1 << 3), 0);

    aic.set_debug_control(DebugControl::empty());
    assert!(aic.irq_line());
    assert!(aic.fiq_line());
}

#[test]
fn test_global_mask_still_dispatches() {
    let mut aic = create_test_aic();
    aic.set_debug_control(DebugControl::GLOBAL_MASK);
    setup_source(&mut aic, 3, 2, Sensitivity::Level);
    aic.set_line(3, true);
    assert!(!aic.irq_line());

    assert_eq!(aic.fetch_vector(FetchKind::Read), vector_of(3));
    assert_eq!(aic.in_service_priority(), 2);
}

#[test]
fn test_global_mask_with_sink() {
    let mut aic = create_test_aic();
    let sink = attach_recorder(&mut aic);
    setup_source(&mut aic, 3, 2, Sensitivity::Level);
    aic.set_line(3, true);

    aic.set_debug_control(DebugControl::GLOBAL_MASK);
    assert_eq!(sink.borrow().irq, vec![false, true, false]);
}
