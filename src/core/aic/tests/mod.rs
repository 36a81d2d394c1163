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

//! AIC Tests
//!
//! Organized into logical categories:
//!
//! - `basic`: Reset state, configuration and the input tracker wiring
//! - `priority`: Candidate selection and output line computation
//! - `nesting`: In-service stack, EOI and spurious handling
//! - `edge`: Edge latching, acknowledge and software set/clear
//! - `protect`: Debug protect mode and general mask
//! - `registers`: Register interface decode and bad accesses
//! - `helpers`: Common test utilities

use super::*;

mod helpers;
mod protect;
