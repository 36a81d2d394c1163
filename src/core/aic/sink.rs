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

//! Output line sink
//!
//! The controller drives two lines towards the CPU core: nIRQ and nFIQ.
//! Whatever consumes them (a CPU model, a test harness) implements
//! [`InterruptSink`].

use std::cell::RefCell;
use std::rc::Rc;

/// Consumer of the controller's IRQ and FIQ output lines
pub trait InterruptSink {
    /// Drive the normal interrupt line
    fn set_irq(&mut self, level: bool);

    /// Drive the fast interrupt line
    fn set_fiq(&mut self, level: bool);
}

impl<T: InterruptSink> InterruptSink for Rc<RefCell<T>> {
    fn set_irq(&mut self, level: bool) {
        self.borrow_mut().set_irq(level);
    }

    fn set_fiq(&mut self, level: bool) {
        self.borrow_mut().set_fiq(level);
    }
}

/// Plain pair of line levels, as seen by a CPU core
///
/// # Example
///
/// ```
/// use at91aic::core::aic::{Aic, CpuLines};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let lines = Rc::new(RefCell::new(CpuLines::default()));
/// let mut aic = Aic::new();
/// aic.connect(Box::new(lines.clone()));
/// assert!(!lines.borrow().irq);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuLines {
    pub irq: bool,
    pub fiq: bool,
}

impl InterruptSink for CpuLines {
    fn set_irq(&mut self, level: bool) {
        self.irq = level;
    }

    fn set_fiq(&mut self, level: bool) {
        self.fiq = level;
    }
}
