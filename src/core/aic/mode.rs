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

//! Source Mode Register and control/status bit definitions
//!
//! ## Source Mode Register (AIC_SMRn) format
//!
//! ```text
//! 31-7: Not used (always 0)
//! 6:    Positive polarity (1 = rising edge / high level, 0 = falling edge / low level)
//! 5:    Edge triggered (1 = edge sensitive, 0 = level sensitive)
//! 4-3:  Not used (always 0)
//! 2-0:  Priority level (0 = lowest, 7 = highest)
//! ```

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Bits of a source mode word that are stored; everything else reads back 0
pub const SMR_MASK: u32 = 0b0110_0111;

/// Priority field of a source mode word
pub const PRIORITY_MASK: u32 = 0b0000_0111;

/// Highest priority level
pub const MAX_PRIORITY: u8 = 7;

/// Edge-triggered bit of a source mode word
pub const SMR_EDGE: u32 = 1 << 5;

/// Positive polarity bit of a source mode word
pub const SMR_POSITIVE: u32 = 1 << 6;

/// How a source's pending state is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sensitivity {
    /// Pending while the line is at its asserted level
    #[default]
    Level,
    /// Pending once a qualifying transition has been latched
    Edge,
}

/// Which direction of the line counts as asserted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// Falling edge / low level
    #[default]
    Negative,
    /// Rising edge / high level
    Positive,
}

/// Decoded source mode word
///
/// # Example
///
/// ```
/// use at91aic::core::aic::{Polarity, Sensitivity, SourceMode};
///
/// let mode = SourceMode::new(3, Sensitivity::Edge, Polarity::Positive);
/// assert_eq!(mode.bits(), 0x63);
/// assert_eq!(SourceMode::from_bits(0x63), mode);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceMode(u32);

impl SourceMode {
    /// Build a mode word from its fields (priority is truncated to 3 bits)
    pub fn new(priority: u8, sensitivity: Sensitivity, polarity: Polarity) -> Self {
        let mut bits = priority as u32 & PRIORITY_MASK;
        if sensitivity == Sensitivity::Edge {
            bits |= SMR_EDGE;
        }
        if polarity == Polarity::Positive {
            bits |= SMR_POSITIVE;
        }
        Self(bits)
    }

    /// Decode a raw register value, dropping unused bits
    pub fn from_bits(bits: u32) -> Self {
        Self(bits & SMR_MASK)
    }

    /// Raw register value
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Priority level (0-7)
    pub fn priority(self) -> u8 {
        (self.0 & PRIORITY_MASK) as u8
    }

    pub fn sensitivity(self) -> Sensitivity {
        if self.0 & SMR_EDGE != 0 {
            Sensitivity::Edge
        } else {
            Sensitivity::Level
        }
    }

    pub fn polarity(self) -> Polarity {
        if self.0 & SMR_POSITIVE != 0 {
            Polarity::Positive
        } else {
            Polarity::Negative
        }
    }

    /// Same mode with the positive polarity bit forced on
    pub fn with_positive(self) -> Self {
        Self(self.0 | SMR_POSITIVE)
    }
}

bitflags! {
    /// Debug Control Register (AIC_DCR)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct DebugControl: u32 {
        /// Protect mode: plain IVR reads have no side effects
        const PROTECT = 1 << 0;
        /// General mask: both core interrupt lines are held low
        const GLOBAL_MASK = 1 << 1;
    }
}

bitflags! {
    /// Core Interrupt Status Register (AIC_CISR)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CoreStatus: u32 {
        /// nFIQ line asserted
        const FIQ = 1 << 0;
        /// nIRQ line asserted
        const IRQ = 1 << 1;
    }
}
