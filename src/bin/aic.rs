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

//! AIC scenario runner
//!
//! Plays scripted supervisor sessions against the controller and inspects
//! saved controller states.

use at91aic::core::aic::Aic;
use at91aic::core::config::AicConfig;
use at91aic::core::error::{AicError, Result};
use at91aic::core::save_state::SaveState;
use at91aic::core::scenario::Scenario;
use clap::{Parser, Subcommand};
use log::{error, info};

/// AT91 AIC model
#[derive(Parser)]
#[command(name = "aic")]
#[command(about = "AT91 Advanced Interrupt Controller model", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a TOML scenario
    Run {
        /// Path to the scenario file
        scenario: String,

        /// Board configuration applied before the scenario's own
        #[arg(short = 'c', long)]
        config: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Save the final controller state to this file
        #[arg(short = 's', long)]
        save_state: Option<String>,
    },
    /// Print a saved controller state as JSON
    Inspect {
        /// Path to the state file
        state: String,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (for RUST_LOG and friends)
    if let Err(e) = dotenvy::dotenv() {
        if !e.to_string().contains("not found") {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("aic v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    match args.command {
        Command::Run {
            scenario,
            config,
            json,
            save_state,
        } => run(&scenario, config.as_deref(), json, save_state.as_deref()),
        Command::Inspect { state } => inspect(&state),
    }
}

fn run(path: &str, config: Option<&str>, json: bool, save_state: Option<&str>) -> Result<()> {
    info!("Loading scenario from: {}", path);
    let scenario = Scenario::load(path).inspect_err(|e| error!("Failed to load scenario: {}", e))?;

    let mut aic = Aic::new();
    if let Some(config_path) = config {
        info!("Loading board configuration from: {}", config_path);
        AicConfig::load(config_path)?.apply(&mut aic)?;
    }

    let report = scenario.run(&mut aic)?;

    if json {
        println!("{}", report.to_json()?);
    } else {
        for outcome in &report.outcomes {
            let value = outcome
                .value
                .map(|v| format!(" -> 0x{:08X}", v))
                .unwrap_or_default();
            info!(
                "[{:3}] {:?}{} | irq={} fiq={} prio={}{}",
                outcome.index,
                outcome.step,
                value,
                outcome.irq as u8,
                outcome.fiq as u8,
                outcome.in_service_priority,
                if outcome.passed { "" } else { "  FAILED" }
            );
        }
        for diagnostic in &report.diagnostics {
            info!("diagnostic: {}", diagnostic);
        }
    }

    if let Some(state_path) = save_state {
        SaveState::from_aic(&aic, &report.name).save_to_file(state_path)?;
        info!("Controller state saved to: {}", state_path);
    }

    if !report.passed() {
        error!("{} of {} steps failed", report.failures, report.outcomes.len());
        return Err(AicError::Scenario(format!(
            "{} expectation(s) failed",
            report.failures
        )));
    }

    info!("Scenario '{}' passed", report.name);
    Ok(())
}

fn inspect(path: &str) -> Result<()> {
    let state = SaveState::load_from_file(path)?;
    info!(
        "State '{}' saved at {}",
        state.metadata.label, state.metadata.timestamp
    );
    println!("{}", serde_json::to_string_pretty(&state.aic)?);
    Ok(())
}
