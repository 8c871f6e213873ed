//! In-memory form state: time field, ratio fields and the last results.

use crate::core::allocator::{Allocation, ClockRounding, compute_allocations_with};
use crate::core::clipboard::{self, Clipboard, CopyOutcome};
use crate::core::ratios::RatioList;
use crate::core::time_input::{COMPACT_LEN, TimeInputMode};
use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct Form {
    pub mode: TimeInputMode,
    pub rounding: ClockRounding,
    pub auto_calculate: bool,
    time_input: String,
    ratios: RatioList,
    results: Vec<Allocation>,
}

impl Form {
    pub fn new(mode: TimeInputMode) -> Self {
        Self {
            mode,
            rounding: ClockRounding::default(),
            auto_calculate: false,
            time_input: String::new(),
            ratios: RatioList::new(),
            results: Vec::new(),
        }
    }

    pub fn with_rounding(mut self, rounding: ClockRounding) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn with_auto_calculate(mut self, on: bool) -> Self {
        self.auto_calculate = on;
        self
    }

    pub fn with_ratios(mut self, ratios: RatioList) -> Self {
        self.ratios = ratios;
        self
    }

    pub fn time_input(&self) -> &str {
        &self.time_input
    }

    pub fn ratios(&self) -> &RatioList {
        &self.ratios
    }

    pub fn results(&self) -> &[Allocation] {
        &self.results
    }

    pub fn total_minutes(&self) -> i64 {
        self.mode.parse(&self.time_input)
    }

    /// Store the (sanitized) time text. In compact mode a completed four digit
    /// code recalculates right away when auto calculation is on. Returns
    /// whether that happened.
    pub fn set_time(&mut self, text: &str) -> bool {
        self.time_input = self.mode.sanitize(text);

        let complete = self.mode == TimeInputMode::Compact && self.time_input.len() == COMPACT_LEN;
        if self.auto_calculate && complete {
            self.calculate();
            return true;
        }
        false
    }

    pub fn set_ratio(&mut self, index: usize, text: &str) -> AppResult<()> {
        self.ratios.set(index, text)
    }

    pub fn add_ratio(&mut self) -> usize {
        self.ratios.push_empty()
    }

    /// Recompute every share from the current fields, replacing old results.
    pub fn calculate(&mut self) -> &[Allocation] {
        let total = self.total_minutes() as f64;
        self.results = compute_allocations_with(total, &self.ratios.weights(), self.rounding);
        &self.results
    }

    pub fn copy_all(&self, cb: &mut dyn Clipboard) -> CopyOutcome {
        clipboard::copy_all(cb, &self.results)
    }

    pub fn copy_single(&self, index: usize, cb: &mut dyn Clipboard) -> AppResult<CopyOutcome> {
        let res = self
            .results
            .get(index)
            .ok_or(AppError::InvalidResultIndex(index + 1))?;
        Ok(clipboard::copy_single(cb, &res.formatted))
    }
}
