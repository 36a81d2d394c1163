// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! I/O Device Trait
//!
//! Memory-mapped register devices expose themselves to whatever bus the
//! embedder builds through the `IODevice` trait. The bus translates physical
//! addresses to device-relative offsets and forwards the access together
//! with its width.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │            Embedder's bus                   │
//! ├─────────────────────────────────────────────┤
//! │  if device.contains(addr) {                 │
//! │    device.read_register(addr - start, w)    │
//! │  }                                          │
//! └─────────────────────────────────────────────┘
//!                      ▲
//!                      │
//!               ┌──────┴──────┐
//!               │    AIC      │
//!               │ (IODevice)  │
//!               └─────────────┘
//! ```
//!
//! Unlike plain memory, reads take `&mut self`: reading a register may
//! acknowledge an interrupt.
//!
//! # Example
//!
//! ```
//! use at91aic::core::aic::{registers, Aic};
//! use at91aic::core::io_device::{AccessWidth, IODevice};
//!
//! let mut aic = Aic::with_base(0xFFFF_F000);
//! assert!(aic.contains(0xFFFF_F100));
//!
//! let (start, _) = aic.address_range();
//! aic.write_register(registers::AIC_SPU, 0xDEAD, AccessWidth::Word).unwrap();
//! let offset = 0xFFFF_F134 - start;
//! assert_eq!(aic.read_register(offset, AccessWidth::Word).unwrap(), 0xDEAD);
//! ```

use crate::core::error::Result;

/// Size of a bus access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessWidth {
    Byte,
    Half,
    Word,
}

impl AccessWidth {
    /// Width in bits
    pub fn bits(self) -> u8 {
        match self {
            AccessWidth::Byte => 8,
            AccessWidth::Half => 16,
            AccessWidth::Word => 32,
        }
    }
}

/// Trait for memory-mapped I/O devices
///
/// # Address Translation
///
/// Offsets passed to the register methods are relative to the start of
/// [`address_range`](IODevice::address_range). For example:
///
/// - Device address range: `0xFFFFF000 - 0xFFFFF1FF`
/// - Physical address: `0xFFFFF108`
/// - Offset passed to device: `0x108`
///
/// # Thread Safety
///
/// Devices are driven by a single caller at a time and need not be `Send`
/// or `Sync`. An embedder that shares one across threads must serialize all
/// calls into it.
pub trait IODevice {
    /// Inclusive `(start, end)` physical address range of the device
    fn address_range(&self) -> (u32, u32);

    /// Check if `addr` falls inside this device's range
    fn contains(&self, addr: u32) -> bool {
        let (start, end) = self.address_range();
        addr >= start && addr <= end
    }

    /// Read a register
    ///
    /// # Arguments
    ///
    /// * `offset` - Offset from the device base address
    /// * `width` - Access width
    ///
    /// # Errors
    ///
    /// Devices that treat bad accesses as faults return an error; devices
    /// that log them instead return a synthesized value.
    fn read_register(&mut self, offset: u32, width: AccessWidth) -> Result<u32>;

    /// Write a register
    ///
    /// # Arguments
    ///
    /// * `offset` - Offset from the device base address
    /// * `value` - Value to write (low `width` bits significant)
    /// * `width` - Access width
    fn write_register(&mut self, offset: u32, value: u32, width: AccessWidth) -> Result<()>;

    /// Device name for debugging
    fn name(&self) -> &str {
        "Unknown Device"
    }
}
