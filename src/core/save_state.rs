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

//! Controller snapshots
//!
//! Every field of the controller's register and stack state can be captured
//! into an [`AicState`] and restored verbatim. [`SaveState`] wraps that with
//! a version and metadata for storage.
//!
//! # Save State Format
//!
//! Save states are serialized using bincode (standard configuration). The
//! state includes:
//! - Metadata (timestamp, label)
//! - Source mode and vector tables
//! - In-service stack and current priority
//! - Line levels, latched edges, pending and mask registers
//! - Core status, spurious vector and debug control
//!
//! # Version Compatibility
//!
//! Loading a save state with a different version fails with
//! [`AicError::IncompatibleVersion`].
//!
//! # Example
//!
//! ```no_run
//! use at91aic::core::aic::Aic;
//! use at91aic::core::save_state::{SaveState, StateSave};
//!
//! let aic = Aic::new();
//! let state = SaveState::from_aic(&aic, "boot");
//! state.save_to_file("aic.state").unwrap();
//!
//! let loaded = SaveState::load_from_file("aic.state").unwrap();
//! let mut restored = Aic::new();
//! restored.restore_from_state(&loaded.aic).unwrap();
//! ```

use crate::core::aic::{Aic, SOURCE_COUNT};
use crate::core::error::{AicError, Result};
use bincode::{config, Decode, Encode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Save state version for compatibility checking
pub const SAVE_STATE_VERSION: u32 = 1;

/// Number of in-service stack levels
pub const STACK_LEVELS: usize = 8;

/// Complete save state
#[derive(Debug, Clone, Serialize, Deserialize, Encode, Decode)]
pub struct SaveState {
    /// Version number for compatibility checking
    pub version: u32,

    pub metadata: SaveStateMetadata,

    /// Controller state
    pub aic: AicState,
}

/// Save state metadata
#[derive(Debug, Clone, Serialize, Deserialize, Encode, Decode)]
#[bincode(encode_bounds = "", decode_bounds = "")]
pub struct SaveStateMetadata {
    /// Timestamp when the save state was created
    #[bincode(with_serde)]
    pub timestamp: DateTime<Utc>,

    /// Free-form label (board name, test case, ...)
    pub label: String,
}

/// Controller register and stack state
///
/// Field values are the raw register words, so a snapshot can be compared
/// directly against a register dump.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct AicState {
    /// AIC_SMR0-31
    pub source_modes: [u32; SOURCE_COUNT],

    /// AIC_SVR0-31
    pub source_vectors: [u32; SOURCE_COUNT],

    /// Source in service per priority level (0 = empty)
    pub in_service: [u32; STACK_LEVELS],

    /// Current in-service priority (-1 = idle)
    pub in_service_priority: i32,

    /// Live input line levels
    pub levels: u32,

    /// Latched edges
    pub edges: u32,

    /// AIC_IPR
    pub pending: u32,

    /// AIC_IMR
    pub mask: u32,

    /// AIC_CISR
    pub core_status: u32,

    /// AIC_SPU
    pub spurious_vector: u32,

    /// AIC_DCR
    pub debug_control: u32,
}

impl SaveState {
    /// Capture the state of `aic`
    ///
    /// # Arguments
    ///
    /// * `aic` - Controller to save
    /// * `label` - Free-form label stored in the metadata
    pub fn from_aic(aic: &Aic, label: &str) -> Self {
        Self {
            version: SAVE_STATE_VERSION,
            metadata: SaveStateMetadata {
                timestamp: Utc::now(),
                label: label.to_string(),
            },
            aic: aic.to_state(),
        }
    }

    /// Encode with bincode
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::encode_to_vec(self, config::standard())?)
    }

    /// Decode with bincode and check the version
    ///
    /// # Errors
    ///
    /// Returns error if decoding fails or the version is incompatible
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (state, _): (SaveState, usize) =
            bincode::decode_from_slice(bytes, config::standard())?;

        if state.version != SAVE_STATE_VERSION {
            return Err(AicError::IncompatibleVersion {
                expected: SAVE_STATE_VERSION,
                got: state.version,
            });
        }

        Ok(state)
    }

    /// Save state to file
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be created
    /// - Serialization fails
    /// - Write operation fails
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let encoded = self.to_bytes()?;
        let mut file = File::create(path)?;
        file.write_all(&encoded)?;
        Ok(())
    }

    /// Load state from file
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be opened or read
    /// - Deserialization fails
    /// - Version is incompatible
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)?;
        Self::from_bytes(&buffer)
    }
}

/// Trait for components that can be saved and restored
///
/// # Example
///
/// ```
/// use at91aic::core::aic::Aic;
/// use at91aic::core::save_state::StateSave;
///
/// let mut aic = Aic::new();
/// aic.enable_sources(0x10);
/// let state = aic.to_state();
///
/// let mut other = Aic::new();
/// other.restore_from_state(&state).unwrap();
/// assert_eq!(other.mask(), 0x10);
/// ```
pub trait StateSave {
    /// The state type for this component
    type State: Serialize + for<'de> Deserialize<'de>;

    /// Convert this component to a saveable state
    fn to_state(&self) -> Self::State;

    /// Restore this component from a saved state
    ///
    /// # Errors
    ///
    /// Returns error if the state is internally inconsistent
    fn restore_from_state(&mut self, state: &Self::State) -> Result<()>;
}
