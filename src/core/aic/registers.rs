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

//! AIC register map
//!
//! All registers are 32 bits wide; offsets are relative to the controller base.
//!
//! ```text
//! Offset      | Name      | Access | Description
//! ------------|-----------|--------|----------------------------------
//! 0x000-0x07C | AIC_SMRn  | R/W    | Source mode (priority/type/polarity)
//! 0x080-0x0FC | AIC_SVRn  | R/W    | Source vector
//! 0x100       | AIC_IVR   | R      | Interrupt vector (dispatches)
//! 0x104       | AIC_FVR   | R      | Fast interrupt vector
//! 0x108       | AIC_ISR   | R      | Interrupt status (source in service)
//! 0x10C       | AIC_IPR   | R      | Interrupt pending
//! 0x110       | AIC_IMR   | R      | Interrupt mask
//! 0x114       | AIC_CISR  | R      | Core interrupt status
//! 0x120       | AIC_IECR  | W      | Interrupt enable command
//! 0x124       | AIC_IDCR  | W      | Interrupt disable command
//! 0x128       | AIC_ICCR  | W      | Interrupt clear command
//! 0x12C       | AIC_ISCR  | W      | Interrupt set command
//! 0x130       | AIC_EOICR | W      | End of interrupt command
//! 0x134       | AIC_SPU   | R/W    | Spurious interrupt vector
//! 0x138       | AIC_DCR   | R/W    | Debug control
//! ```

pub const AIC_SMR0: u32 = 0x000;
pub const AIC_SMR31: u32 = 0x07C;
pub const AIC_SVR0: u32 = 0x080;
pub const AIC_SVR31: u32 = 0x0FC;
pub const AIC_IVR: u32 = 0x100;
pub const AIC_FVR: u32 = 0x104;
pub const AIC_ISR: u32 = 0x108;
pub const AIC_IPR: u32 = 0x10C;
pub const AIC_IMR: u32 = 0x110;
pub const AIC_CISR: u32 = 0x114;
pub const AIC_IECR: u32 = 0x120;
pub const AIC_IDCR: u32 = 0x124;
pub const AIC_ICCR: u32 = 0x128;
pub const AIC_ISCR: u32 = 0x12C;
pub const AIC_EOICR: u32 = 0x130;
pub const AIC_SPU: u32 = 0x134;
pub const AIC_DCR: u32 = 0x138;

/// Size of the register window in bytes
pub const AIC_WINDOW_SIZE: u32 = 0x200;

/// Offset of AIC_SMRn
pub const fn smr(source: u8) -> u32 {
    AIC_SMR0 + 4 * source as u32
}

/// Offset of AIC_SVRn
pub const fn svr(source: u8) -> u32 {
    AIC_SVR0 + 4 * source as u32
}

/// A decoded register offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    SourceMode(u8),
    SourceVector(u8),
    InterruptVector,
    FastVector,
    InterruptStatus,
    InterruptPending,
    InterruptMask,
    CoreStatus,
    InterruptEnable,
    InterruptDisable,
    InterruptClear,
    InterruptSet,
    EndOfInterrupt,
    SpuriousVector,
    DebugControl,
}

impl Register {
    /// Decode an offset; misaligned and unmapped offsets yield None
    pub fn decode(offset: u32) -> Option<Self> {
        if offset & 0x3 != 0 {
            return None;
        }

        let reg = match offset {
            AIC_SMR0..=AIC_SMR31 => Register::SourceMode(((offset - AIC_SMR0) >> 2) as u8),
            AIC_SVR0..=AIC_SVR31 => Register::SourceVector(((offset - AIC_SVR0) >> 2) as u8),
            AIC_IVR => Register::InterruptVector,
            AIC_FVR => Register::FastVector,
            AIC_ISR => Register::InterruptStatus,
            AIC_IPR => Register::InterruptPending,
            AIC_IMR => Register::InterruptMask,
            AIC_CISR => Register::CoreStatus,
            AIC_IECR => Register::InterruptEnable,
            AIC_IDCR => Register::InterruptDisable,
            AIC_ICCR => Register::InterruptClear,
            AIC_ISCR => Register::InterruptSet,
            AIC_EOICR => Register::EndOfInterrupt,
            AIC_SPU => Register::SpuriousVector,
            AIC_DCR => Register::DebugControl,
            _ => return None,
        };
        Some(reg)
    }

    /// Register name as printed in the datasheet
    pub fn name(self) -> &'static str {
        match self {
            Register::SourceMode(_) => "AIC_SMR",
            Register::SourceVector(_) => "AIC_SVR",
            Register::InterruptVector => "AIC_IVR",
            Register::FastVector => "AIC_FVR",
            Register::InterruptStatus => "AIC_ISR",
            Register::InterruptPending => "AIC_IPR",
            Register::InterruptMask => "AIC_IMR",
            Register::CoreStatus => "AIC_CISR",
            Register::InterruptEnable => "AIC_IECR",
            Register::InterruptDisable => "AIC_IDCR",
            Register::InterruptClear => "AIC_ICCR",
            Register::InterruptSet => "AIC_ISCR",
            Register::EndOfInterrupt => "AIC_EOICR",
            Register::SpuriousVector => "AIC_SPU",
            Register::DebugControl => "AIC_DCR",
        }
    }
}
