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

//! AT91 Advanced Interrupt Controller Implementation
//!
//! The AIC multiplexes up to 32 interrupt sources onto the two interrupt
//! inputs of the ARM core (nIRQ and nFIQ). Each source has a programmable
//! priority, sensitivity (level or edge) and polarity. Nested interrupts are
//! tracked in an 8-level in-service stack that is pushed by reading the
//! interrupt vector register and popped by writing the end-of-interrupt
//! command register.
//!
//! ## Interrupt Sources
//!
//! ```text
//! Source | Description
//! -------|------------------------------------------------------------
//! 0      | FIQ - drives nFIQ directly, never dispatched through AIC_IVR
//! 1      | SYSIRQ - system peripherals, always positive polarity
//! 2-31   | Peripheral and external interrupt lines
//! ```
//!
//! ## Data Flow
//!
//! ```text
//! set_line ──► InputLines ──► pending ──► candidate ──► CISR ──► nIRQ / nFIQ
//!              (level/edge)    (IPR)     (vs. stack)
//! ```
//!
//! Register semantics live in [`access`]; this module holds the arbitration
//! logic itself.
//!
//! ## References
//!
//! - AT91SAM7X datasheet, section "Advanced Interrupt Controller (AIC)"

mod access;
mod diagnostics;
mod input;
mod mode;
pub mod registers;
mod sink;
mod stack;
mod state;

#[cfg(test)]
mod tests;

pub use diagnostics::{DiagnosticLog, DIAGNOSTIC_CAPACITY};
pub use input::InputLines;
pub use mode::{
    CoreStatus, DebugControl, Polarity, Sensitivity, SourceMode, MAX_PRIORITY, SMR_MASK,
};
pub use registers::Register;
pub use sink::{CpuLines, InterruptSink};
pub use stack::InServiceStack;

use crate::core::error::{AicError, Diagnostic, Result};

/// Number of interrupt sources
pub const SOURCE_COUNT: usize = 32;

/// Fast interrupt source
pub const FIQ_SOURCE: u8 = 0;

/// System interrupt source, hard-wired to positive polarity
pub const SYSTEM_SOURCE: u8 = 1;

/// How the interrupt vector register is being accessed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// Plain read; suppressed side effects in protect mode
    Read,
    /// Write-triggered fetch; always acknowledges
    Write,
}

/// AT91 Advanced Interrupt Controller
///
/// # Example
///
/// ```
/// use at91aic::core::aic::{Aic, FetchKind, Polarity, Sensitivity, SourceMode};
///
/// let mut aic = Aic::new();
/// aic.configure_source(5, SourceMode::new(3, Sensitivity::Level, Polarity::Positive))
///     .unwrap();
/// aic.set_vector(5, 0x2000_0500).unwrap();
/// aic.enable_sources(1 << 5);
///
/// aic.set_line(5, true);
/// assert!(aic.irq_line());
///
/// assert_eq!(aic.fetch_vector(FetchKind::Read), 0x2000_0500);
/// assert_eq!(aic.in_service_priority(), 3);
/// assert!(!aic.irq_line());
///
/// aic.end_of_interrupt();
/// assert_eq!(aic.in_service_priority(), -1);
/// ```
pub struct Aic {
    /// Base address for memory-mapped access
    base: u32,

    /// AIC_SMR0-31
    modes: [SourceMode; SOURCE_COUNT],

    /// AIC_SVR0-31
    vectors: [u32; SOURCE_COUNT],

    /// Sources configured as edge triggered (bit per source)
    edge_triggered: u32,

    /// Sources configured with positive polarity (bit per source)
    positive: u32,

    /// Live line levels and latched edges
    lines: InputLines,

    /// AIC_IPR, recomputed on every update
    pending: u32,

    /// AIC_IMR
    mask: u32,

    /// Nested in-service levels
    stack: InServiceStack,

    /// AIC_CISR
    status: CoreStatus,

    /// AIC_SPU
    spurious_vector: u32,

    /// AIC_DCR
    debug: DebugControl,

    /// Current level of nIRQ
    irq_line: bool,

    /// Current level of nFIQ
    fiq_line: bool,

    sink: Option<Box<dyn InterruptSink>>,

    diagnostics: DiagnosticLog,
}

impl Aic {
    /// Create a controller in its reset state with all input lines low
    pub fn new() -> Self {
        let mut aic = Self {
            base: 0,
            modes: [SourceMode::default(); SOURCE_COUNT],
            vectors: [0; SOURCE_COUNT],
            edge_triggered: 0,
            positive: 0,
            lines: InputLines::new(),
            pending: 0,
            mask: 0,
            stack: InServiceStack::new(),
            status: CoreStatus::empty(),
            spurious_vector: 0,
            debug: DebugControl::empty(),
            irq_line: false,
            fiq_line: false,
            sink: None,
            diagnostics: DiagnosticLog::new(),
        };
        aic.reset();
        aic
    }

    /// Create a controller mapped at `base` for [`IODevice`](crate::core::io_device::IODevice) access
    pub fn with_base(base: u32) -> Self {
        Self {
            base,
            ..Self::new()
        }
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    /// Attach the consumer of the output lines
    ///
    /// The sink is immediately driven to the current line levels.
    pub fn connect(&mut self, mut sink: Box<dyn InterruptSink>) {
        sink.set_fiq(self.fiq_line);
        sink.set_irq(self.irq_line);
        self.sink = Some(sink);
    }

    /// Detach and return the output line consumer
    pub fn disconnect(&mut self) -> Option<Box<dyn InterruptSink>> {
        self.sink.take()
    }

    /// Return to construction-time defaults
    ///
    /// Input line levels are wiring state and survive the reset.
    pub fn reset(&mut self) {
        self.modes = [SourceMode::default(); SOURCE_COUNT];
        self.modes[SYSTEM_SOURCE as usize] = SourceMode::default().with_positive();
        self.vectors = [0; SOURCE_COUNT];
        self.edge_triggered = 0;
        self.positive = 1 << SYSTEM_SOURCE;
        self.lines.clear_edges(u32::MAX);
        self.mask = 0;
        self.stack = InServiceStack::new();
        self.spurious_vector = 0;
        self.debug = DebugControl::empty();

        log::debug!("AIC reset (levels=0x{:08X})", self.lines.levels());

        // Sets pending and core status
        self.update();
    }

    /// Drive input line `line` to `level`
    ///
    /// Records the level, latches a qualifying edge and re-evaluates the
    /// output lines before returning.
    ///
    /// # Arguments
    ///
    /// * `line` - Source number (0-31)
    /// * `level` - New line level (true = high)
    pub fn set_line(&mut self, line: u8, level: bool) {
        if line as usize >= SOURCE_COUNT {
            self.diagnostics.report(Diagnostic::LineOutOfRange {
                line: u32::from(line),
            });
            return;
        }

        self.lines.set_line(line, level, self.positive);
        log::trace!(
            "AIC line {} -> {}, levels=0x{:08X} edges=0x{:08X}",
            line,
            level as u8,
            self.lines.levels(),
            self.lines.edges()
        );

        self.update();
    }

    /// Program the mode of `source`
    ///
    /// # Errors
    ///
    /// Returns [`AicError::InvalidSource`] if `source` is not 0-31.
    pub fn configure_source(&mut self, source: u8, mode: SourceMode) -> Result<()> {
        check_source(source)?;
        self.write_source_mode(source, mode.bits());
        Ok(())
    }

    /// Program the vector returned when `source` is dispatched
    ///
    /// # Errors
    ///
    /// Returns [`AicError::InvalidSource`] if `source` is not 0-31.
    pub fn set_vector(&mut self, source: u8, vector: u32) -> Result<()> {
        check_source(source)?;
        self.vectors[source as usize] = vector;
        Ok(())
    }

    /// Mode of `source`, or None when out of range
    pub fn source_mode(&self, source: u8) -> Option<SourceMode> {
        self.modes.get(source as usize).copied()
    }

    /// Vector of `source`, or None when out of range
    pub fn vector(&self, source: u8) -> Option<u32> {
        self.vectors.get(source as usize).copied()
    }

    /// AIC_SMR write
    pub(crate) fn write_source_mode(&mut self, source: u8, value: u32) {
        let bit = 1u32 << source;
        let mut mode = SourceMode::from_bits(value);

        if mode.sensitivity() == Sensitivity::Edge {
            self.edge_triggered |= bit;
        } else {
            self.edge_triggered &= !bit;
        }

        if mode.polarity() == Polarity::Positive || source == SYSTEM_SOURCE {
            mode = mode.with_positive();
            self.positive |= bit;
        } else {
            self.positive &= !bit;
        }

        self.modes[source as usize] = mode;
        log::debug!(
            "AIC source {} mode: priority={} {:?} {:?}",
            source,
            mode.priority(),
            mode.sensitivity(),
            mode.polarity()
        );

        self.update();
    }

    /// Enable sources (AIC_IECR)
    pub fn enable_sources(&mut self, bits: u32) {
        self.mask |= bits;
        log::debug!("AIC mask set: 0x{:08X}", self.mask);
        self.update();
    }

    /// Disable sources (AIC_IDCR)
    pub fn disable_sources(&mut self, bits: u32) {
        self.mask &= !bits;
        log::debug!("AIC mask set: 0x{:08X}", self.mask);
        self.update();
    }

    /// Clear latched edges (AIC_ICCR)
    pub fn clear_pending(&mut self, bits: u32) {
        self.lines.clear_edges(bits);
        self.update();
    }

    /// Force edges from software (AIC_ISCR)
    ///
    /// Only edge-triggered sources become pending this way.
    pub fn set_pending(&mut self, bits: u32) {
        self.lines.force_edges(bits);
        self.update();
    }

    /// Read the interrupt vector register
    ///
    /// If a pending, enabled source has a priority strictly above the current
    /// in-service level its vector is returned; otherwise the spurious vector
    /// is. The stack is pushed and the source's edge acknowledged unless
    /// protect mode is on and this is a plain read.
    ///
    /// # Arguments
    ///
    /// * `kind` - Plain read or write-triggered fetch
    ///
    /// # Returns
    ///
    /// The dispatched source's vector, or the spurious vector
    pub fn fetch_vector(&mut self, kind: FetchKind) -> u32 {
        let side_effects = kind == FetchKind::Write || !self.debug.contains(DebugControl::PROTECT);

        match self.candidate() {
            Some((source, priority)) if i32::from(priority) > self.stack.priority() => {
                if side_effects {
                    self.stack.push(priority, Some(source));
                    self.lines.clear_edges(1 << source);
                    log::debug!("AIC dispatch source {} at priority {}", source, priority);
                    self.update();
                }
                self.vectors[source as usize]
            }
            _ => {
                if self.stack.priority() == i32::from(MAX_PRIORITY) {
                    self.diagnostics.report(Diagnostic::FetchAtMaxPriority);
                } else if side_effects {
                    self.stack.push(MAX_PRIORITY, None);
                    log::debug!("AIC spurious interrupt");
                    self.update();
                }
                self.spurious_vector
            }
        }
    }

    /// End of interrupt (AIC_EOICR)
    ///
    /// Pops the current in-service level. Without a matching vector fetch
    /// this is reported and ignored.
    pub fn end_of_interrupt(&mut self) {
        if !self.stack.pop() {
            self.diagnostics.report(Diagnostic::EoiWithoutFetch);
            return;
        }

        log::debug!("AIC EOI, priority now {}", self.stack.priority());
        self.update();
    }

    /// AIC_FVR: vector of the fast interrupt source, no side effects
    pub fn fast_vector(&self) -> u32 {
        self.vectors[FIQ_SOURCE as usize]
    }

    /// AIC_ISR: source in service at the current level, 0 when idle
    pub fn interrupt_status(&self) -> u32 {
        self.stack.active_source().map_or(0, u32::from)
    }

    /// AIC_IPR
    pub fn pending(&self) -> u32 {
        self.pending
    }

    /// AIC_IMR
    pub fn mask(&self) -> u32 {
        self.mask
    }

    /// AIC_CISR
    pub fn core_status(&self) -> CoreStatus {
        self.status
    }

    pub fn spurious_vector(&self) -> u32 {
        self.spurious_vector
    }

    pub fn set_spurious_vector(&mut self, vector: u32) {
        self.spurious_vector = vector;
    }

    pub fn debug_control(&self) -> DebugControl {
        self.debug
    }

    /// AIC_DCR write
    pub fn set_debug_control(&mut self, debug: DebugControl) {
        self.debug = debug;
        log::debug!("AIC debug control: {:?}", debug);
        self.update();
    }

    /// Current in-service priority, -1 when idle
    pub fn in_service_priority(&self) -> i32 {
        self.stack.priority()
    }

    pub fn in_service(&self) -> &InServiceStack {
        &self.stack
    }

    /// Live input line levels
    pub fn levels(&self) -> u32 {
        self.lines.levels()
    }

    /// Latched edges
    pub fn edges(&self) -> u32 {
        self.lines.edges()
    }

    pub fn irq_line(&self) -> bool {
        self.irq_line
    }

    pub fn fiq_line(&self) -> bool {
        self.fiq_line
    }

    pub fn diagnostics(&self) -> &DiagnosticLog {
        &self.diagnostics
    }

    /// Drain the diagnostic log
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }

    pub(crate) fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.report(diagnostic);
    }

    /// Highest priority enabled pending source other than FIQ
    ///
    /// Among equal priorities the highest source number wins.
    fn candidate(&self) -> Option<(u8, u8)> {
        let active = self.pending & self.mask;
        let mut best: Option<(u8, u8)> = None;

        for source in (FIQ_SOURCE + 1)..SOURCE_COUNT as u8 {
            if active & (1 << source) == 0 {
                continue;
            }
            let priority = self.modes[source as usize].priority();
            if best.is_none_or(|(_, best_priority)| priority >= best_priority) {
                best = Some((source, priority));
            }
        }

        best
    }

    /// Recompute AIC_IPR and AIC_CISR, then drive the output lines
    fn update(&mut self) {
        let levels = self.lines.asserted_levels(self.positive);
        self.pending =
            (levels & !self.edge_triggered) | (self.lines.edges() & self.edge_triggered);

        let candidate_priority = self.candidate().map_or(-1, |(_, p)| i32::from(p));

        let mut status = CoreStatus::empty();
        if candidate_priority > self.stack.priority() {
            status |= CoreStatus::IRQ;
        }
        if self.pending & self.mask & (1 << FIQ_SOURCE) != 0 {
            status |= CoreStatus::FIQ;
        }
        if self.debug.contains(DebugControl::GLOBAL_MASK) {
            status = CoreStatus::empty();
        }
        self.status = status;

        self.drive_lines();
    }

    /// Propagate CISR to the output lines; the only place they change
    fn drive_lines(&mut self) {
        let fiq = self.status.contains(CoreStatus::FIQ);
        if fiq != self.fiq_line {
            self.fiq_line = fiq;
            log::trace!("AIC nFIQ -> {}", fiq as u8);
            if let Some(sink) = self.sink.as_mut() {
                sink.set_fiq(fiq);
            }
        }

        let irq = self.status.contains(CoreStatus::IRQ);
        if irq != self.irq_line {
            self.irq_line = irq;
            log::trace!("AIC nIRQ -> {}", irq as u8);
            if let Some(sink) = self.sink.as_mut() {
                sink.set_irq(irq);
            }
        }
    }
}

impl Default for Aic {
    fn default() -> Self {
        Self::new()
    }
}

fn check_source(source: u8) -> Result<()> {
    if source as usize >= SOURCE_COUNT {
        return Err(AicError::InvalidSource(u32::from(source)));
    }
    Ok(())
}
