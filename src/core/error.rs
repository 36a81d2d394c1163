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

/// Controller error types
use thiserror::Error;

/// Result type for fallible embedding operations
pub type Result<T> = std::result::Result<T, AicError>;

/// Errors raised by the parts of the crate that sit around the controller
///
/// The register interface itself never fails; anomalies there are reported
/// as [`Diagnostic`]s instead.
#[derive(Error, Debug)]
pub enum AicError {
    #[error("Invalid interrupt source: {0} (valid range: 0-31)")]
    InvalidSource(u32),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Incompatible save state version: expected {expected}, got {got}")]
    IncompatibleVersion { expected: u32, got: u32 },

    #[error("Invalid controller state: {0}")]
    InvalidState(String),

    #[error("Encode error: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("Decode error: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Scenario error: {0}")]
    Scenario(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Protocol misuse and bad register accesses
///
/// None of these are fatal. The controller logs them, records them in its
/// diagnostic log and carries on with the access treated as a no-op.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    #[error("write to AIC_EOICR without corresponding read from AIC_IVR")]
    EoiWithoutFetch,

    #[error("AIC_IVR read while already at max priority")]
    FetchAtMaxPriority,

    #[error("bad read offset 0x{offset:03X} (returning zero)")]
    UnmappedRead { offset: u32 },

    #[error("bad write offset 0x{offset:03X} (value 0x{value:08X} dropped)")]
    UnmappedWrite { offset: u32, value: u32 },

    #[error("unsupported {width}-bit access at offset 0x{offset:03X}")]
    UnsupportedWidth { offset: u32, width: u8 },

    #[error("input line {line} out of range (valid range: 0-31)")]
    LineOutOfRange { line: u32 },
}
