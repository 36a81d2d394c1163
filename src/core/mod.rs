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

//! Core controller components
//!
//! - AIC (arbiter, input tracker, in-service stack, register interface)
//! - Memory-mapped device trait
//! - Snapshots
//! - Board configuration
//! - Scripted sessions

pub mod aic;
pub mod config;
pub mod error;
pub mod io_device;
pub mod save_state;
pub mod scenario;

// Re-export commonly used types
pub use aic::{Aic, FetchKind, InterruptSink};
pub use config::AicConfig;
pub use error::{AicError, Diagnostic, Result};
pub use io_device::{AccessWidth, IODevice};
pub use save_state::{AicState, SaveState, StateSave};
pub use scenario::{Report, Scenario, Step};
