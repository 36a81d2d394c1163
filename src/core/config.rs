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

//! Board presets for the controller
//!
//! A board description names which lines are wired, how they are configured
//! and which vectors they dispatch to. Presets are applied through the
//! register interface, exactly as boot firmware would program the AIC.
//!
//! ```toml
//! spurious_vector = 0xFFFF0000
//! protect_mode = false
//!
//! [[source]]
//! line = 1
//! priority = 7
//! sensitivity = "level"
//! vector = 0x20001000
//!
//! [[source]]
//! line = 12
//! priority = 3
//! sensitivity = "edge"
//! polarity = "positive"
//! vector = 0x20002000
//! ```

use crate::core::aic::registers::{smr, svr, AIC_DCR, AIC_IDCR, AIC_IECR, AIC_SPU};
use crate::core::aic::{
    Aic, DebugControl, Polarity, Sensitivity, SourceMode, MAX_PRIORITY, SOURCE_COUNT,
};
use crate::core::error::{AicError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Controller configuration that can be saved/loaded
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AicConfig {
    /// Value of AIC_SPU
    pub spurious_vector: u32,

    /// DCR protect bit
    pub protect_mode: bool,

    /// DCR general mask bit
    pub global_mask: bool,

    /// Per-line presets
    #[serde(rename = "source")]
    pub sources: Vec<SourcePreset>,
}

/// Configuration of a single wired line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePreset {
    /// Source number (0-31)
    pub line: u8,

    #[serde(default)]
    pub priority: u8,

    #[serde(default)]
    pub sensitivity: Sensitivity,

    #[serde(default)]
    pub polarity: Polarity,

    #[serde(default)]
    pub vector: u32,

    /// Unmask the source after programming it
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl SourcePreset {
    pub fn mode(&self) -> SourceMode {
        SourceMode::new(self.priority, self.sensitivity, self.polarity)
    }
}

impl AicConfig {
    /// Load configuration from TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: AicConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Check line numbers, priorities and duplicate lines
    pub fn validate(&self) -> Result<()> {
        let mut seen = 0u32;
        for preset in &self.sources {
            if preset.line as usize >= SOURCE_COUNT {
                return Err(AicError::Config(format!(
                    "line {} out of range (valid range: 0-31)",
                    preset.line
                )));
            }
            if preset.priority > MAX_PRIORITY {
                return Err(AicError::Config(format!(
                    "line {}: priority {} out of range (valid range: 0-7)",
                    preset.line, preset.priority
                )));
            }
            let bit = 1u32 << preset.line;
            if seen & bit != 0 {
                return Err(AicError::Config(format!(
                    "line {} configured twice",
                    preset.line
                )));
            }
            seen |= bit;
        }
        Ok(())
    }

    /// Debug control word described by this configuration
    pub fn debug_control(&self) -> DebugControl {
        let mut dcr = DebugControl::empty();
        dcr.set(DebugControl::PROTECT, self.protect_mode);
        dcr.set(DebugControl::GLOBAL_MASK, self.global_mask);
        dcr
    }

    /// Program `aic` through its register interface
    ///
    /// # Errors
    ///
    /// Returns [`AicError::Config`] if validation fails; nothing is written then.
    pub fn apply(&self, aic: &mut Aic) -> Result<()> {
        self.validate()?;

        let mut enabled = 0u32;
        let mut disabled = 0u32;
        for preset in &self.sources {
            aic.write(smr(preset.line), preset.mode().bits());
            aic.write(svr(preset.line), preset.vector);
            if preset.enabled {
                enabled |= 1 << preset.line;
            } else {
                disabled |= 1 << preset.line;
            }
        }

        aic.write(AIC_SPU, self.spurious_vector);
        aic.write(AIC_IDCR, disabled);
        aic.write(AIC_IECR, enabled);
        aic.write(AIC_DCR, self.debug_control().bits());

        log::info!(
            "AIC configured: {} sources, mask=0x{:08X}",
            self.sources.len(),
            aic.mask()
        );
        Ok(())
    }
}
