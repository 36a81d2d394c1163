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

//! Scripted controller sessions
//!
//! A scenario plays the role of the supervisor: it drives input lines,
//! reads and writes registers and checks the values it gets back. Scenarios
//! are written in TOML and produce a JSON-serializable [`Report`].
//!
//! ```toml
//! name = "single level source"
//!
//! [config]
//! [[config.source]]
//! line = 5
//! priority = 3
//! polarity = "positive"
//! vector = 0x500
//!
//! [[step]]
//! op = "set_line"
//! line = 5
//! level = true
//!
//! [[step]]
//! op = "fetch"
//! expect = 0x500
//!
//! [[step]]
//! op = "eoi"
//! ```

use crate::core::aic::registers::{AIC_EOICR, AIC_IVR};
use crate::core::aic::{Aic, FetchKind};
use crate::core::config::AicConfig;
use crate::core::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One supervisor action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Drive an input line
    SetLine { line: u8, level: bool },

    /// Read a register, optionally checking the value
    Read {
        offset: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        expect: Option<u32>,
    },

    /// Write a register
    Write { offset: u32, value: u32 },

    /// Vector fetch: a plain AIC_IVR read, or a write-triggered fetch
    Fetch {
        #[serde(default)]
        write: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        expect: Option<u32>,
    },

    /// End of interrupt
    Eoi,

    /// Controller reset
    Reset,
}

/// A scripted session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: String,

    /// Applied before the first step
    #[serde(default)]
    pub config: Option<AicConfig>,

    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

/// Result of one step
#[derive(Debug, Clone, Serialize)]
pub struct StepOutcome {
    pub index: usize,
    pub step: Step,

    /// Value read back, for reads and fetches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u32>,

    /// False when an expectation did not hold
    pub passed: bool,

    pub irq: bool,
    pub fiq: bool,
    pub in_service_priority: i32,
}

/// Result of a whole scenario
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub name: String,
    pub outcomes: Vec<StepOutcome>,
    pub failures: usize,
    pub irq: bool,
    pub fiq: bool,
    pub in_service_priority: i32,
    pub diagnostics: Vec<String>,
}

impl Report {
    pub fn passed(&self) -> bool {
        self.failures == 0
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Scenario {
    /// Load a scenario from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let scenario: Scenario = toml::from_str(contents)?;
        if let Some(config) = &scenario.config {
            config.validate()?;
        }
        Ok(scenario)
    }

    /// Play the scenario against `aic`
    ///
    /// Failed expectations are recorded in the report, not returned as
    /// errors. Diagnostics raised during the run are drained into the report.
    ///
    /// # Errors
    ///
    /// Returns error if the embedded configuration cannot be applied
    pub fn run(&self, aic: &mut Aic) -> Result<Report> {
        if let Some(config) = &self.config {
            config.apply(aic)?;
        }

        let mut outcomes = Vec::with_capacity(self.steps.len());
        for (index, step) in self.steps.iter().enumerate() {
            let (value, passed) = execute(aic, step);
            if !passed {
                log::warn!(
                    "Scenario '{}' step {}: {:?} read 0x{:08X}",
                    self.name,
                    index,
                    step,
                    value.unwrap_or(0)
                );
            }
            outcomes.push(StepOutcome {
                index,
                step: step.clone(),
                value,
                passed,
                irq: aic.irq_line(),
                fiq: aic.fiq_line(),
                in_service_priority: aic.in_service_priority(),
            });
        }

        let failures = outcomes.iter().filter(|o| !o.passed).count();
        Ok(Report {
            name: self.name.clone(),
            outcomes,
            failures,
            irq: aic.irq_line(),
            fiq: aic.fiq_line(),
            in_service_priority: aic.in_service_priority(),
            diagnostics: aic
                .take_diagnostics()
                .iter()
                .map(ToString::to_string)
                .collect(),
        })
    }
}

fn execute(aic: &mut Aic, step: &Step) -> (Option<u32>, bool) {
    match *step {
        Step::SetLine { line, level } => {
            aic.set_line(line, level);
            (None, true)
        }
        Step::Read { offset, expect } => {
            let value = aic.read(offset);
            (Some(value), expect.is_none_or(|e| e == value))
        }
        Step::Write { offset, value } => {
            aic.write(offset, value);
            (None, true)
        }
        Step::Fetch { write: false, expect } => {
            let value = aic.read(AIC_IVR);
            (Some(value), expect.is_none_or(|e| e == value))
        }
        Step::Fetch { write: true, expect } => {
            let value = aic.fetch_vector(FetchKind::Write);
            (Some(value), expect.is_none_or(|e| e == value))
        }
        Step::Eoi => {
            aic.write(AIC_EOICR, 0);
            (None, true)
        }
        Step::Reset => {
            aic.reset();
            (None, true)
        }
    }
}
