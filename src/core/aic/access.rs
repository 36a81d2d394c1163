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

//! Register interface
//!
//! Offset decode and per-register read/write contracts. Reads are not
//! side-effect free: AIC_IVR dispatches. Bad accesses are reported as
//! diagnostics; reads then return 0 and writes are dropped.

use super::registers::{Register, AIC_WINDOW_SIZE};
use super::{Aic, DebugControl, FetchKind};
use crate::core::error::{Diagnostic, Result};
use crate::core::io_device::{AccessWidth, IODevice};

impl Aic {
    /// Read the register at `offset`
    ///
    /// # Example
    ///
    /// ```
    /// use at91aic::core::aic::{registers, Aic};
    ///
    /// let mut aic = Aic::new();
    /// aic.write(registers::AIC_IECR, 0x0000_0F00);
    /// assert_eq!(aic.read(registers::AIC_IMR), 0x0000_0F00);
    /// ```
    pub fn read(&mut self, offset: u32) -> u32 {
        match Register::decode(offset) {
            Some(Register::SourceMode(n)) => self.modes[n as usize].bits(),
            Some(Register::SourceVector(n)) => self.vectors[n as usize],
            Some(Register::InterruptVector) => self.fetch_vector(FetchKind::Read),
            Some(Register::FastVector) => self.fast_vector(),
            Some(Register::InterruptStatus) => self.interrupt_status(),
            Some(Register::InterruptPending) => self.pending,
            Some(Register::InterruptMask) => self.mask,
            Some(Register::CoreStatus) => self.status.bits(),
            Some(Register::SpuriousVector) => self.spurious_vector,
            Some(Register::DebugControl) => self.debug.bits(),
            // Write-only command registers
            Some(
                Register::InterruptEnable
                | Register::InterruptDisable
                | Register::InterruptClear
                | Register::InterruptSet
                | Register::EndOfInterrupt,
            )
            | None => {
                self.report(Diagnostic::UnmappedRead { offset });
                0
            }
        }
    }

    /// Write `value` to the register at `offset`
    pub fn write(&mut self, offset: u32, value: u32) {
        match Register::decode(offset) {
            Some(Register::SourceMode(n)) => self.write_source_mode(n, value),
            Some(Register::SourceVector(n)) => self.vectors[n as usize] = value,
            Some(Register::InterruptVector) => {
                self.fetch_vector(FetchKind::Write);
            }
            Some(Register::InterruptEnable) => self.enable_sources(value),
            Some(Register::InterruptDisable) => self.disable_sources(value),
            Some(Register::InterruptClear) => self.clear_pending(value),
            Some(Register::InterruptSet) => self.set_pending(value),
            Some(Register::EndOfInterrupt) => self.end_of_interrupt(),
            Some(Register::SpuriousVector) => self.spurious_vector = value,
            Some(Register::DebugControl) => {
                self.set_debug_control(DebugControl::from_bits_truncate(value))
            }
            // Read-only status registers
            Some(
                Register::FastVector
                | Register::InterruptStatus
                | Register::InterruptPending
                | Register::InterruptMask
                | Register::CoreStatus,
            )
            | None => self.report(Diagnostic::UnmappedWrite { offset, value }),
        }
    }
}

impl IODevice for Aic {
    fn address_range(&self) -> (u32, u32) {
        // Windows at the top of the address space are clipped
        (self.base, self.base.saturating_add(AIC_WINDOW_SIZE - 1))
    }

    fn read_register(&mut self, offset: u32, width: AccessWidth) -> Result<u32> {
        if width != AccessWidth::Word {
            self.report(Diagnostic::UnsupportedWidth {
                offset,
                width: width.bits(),
            });
            return Ok(0);
        }
        Ok(self.read(offset))
    }

    fn write_register(&mut self, offset: u32, value: u32, width: AccessWidth) -> Result<()> {
        if width != AccessWidth::Word {
            self.report(Diagnostic::UnsupportedWidth {
                offset,
                width: width.bits(),
            });
            return Ok(());
        }
        self.write(offset, value);
        Ok(())
    }

    fn name(&self) -> &str {
        "AIC"
    }
}
