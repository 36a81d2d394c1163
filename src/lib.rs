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

//! AT91 Advanced Interrupt Controller model
//!
//! This library provides a freestanding model of the Atmel AT91 AIC: 32
//! prioritized interrupt sources multiplexed onto the nIRQ and nFIQ lines of
//! an ARM core, with the register interface a CPU model or test harness uses
//! to dispatch and acknowledge them.
//!
//! # Example
//!
//! ```
//! use at91aic::core::aic::{registers, Aic};
//!
//! let mut aic = Aic::new();
//!
//! // Source 4: priority 2, positive level
//! aic.write(registers::smr(4), 0x42);
//! aic.write(registers::svr(4), 0x0000_4000);
//! aic.write(registers::AIC_IECR, 1 << 4);
//!
//! aic.set_line(4, true);
//! assert!(aic.irq_line());
//! assert_eq!(aic.read(registers::AIC_IVR), 0x0000_4000);
//! aic.write(registers::AIC_EOICR, 0);
//! ```

pub mod core;
