//! Ratio entries as typed by the user and their numeric weights.

use crate::core::time_input::to_halfwidth;
use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::LazyLock;

/// Leading decimal number, the way browsers read a number field prefix.
static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("valid number regex")
});

/// Number of entries a fresh list starts with.
pub const MIN_RATIOS: usize = 2;

/// Coerce ratio text into a weight.
///
/// Empty, unparsable, negative and non-finite input all count as 0.
pub fn coerce_weight(text: &str) -> f64 {
    let text = to_halfwidth(text);
    let text = text.trim();

    LEADING_NUMBER
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|w| w.is_finite() && *w >= 0.0)
        .unwrap_or(0.0)
}

/// Split a comma separated list (`"50,30,20"`) into ratio entries.
pub fn parse_ratio_list(text: &str) -> Vec<String> {
    to_halfwidth(text)
        .split(',')
        .map(|s| s.trim().to_string())
        .collect()
}

/// Ordered, append-only list of ratio entries.
#[derive(Clone, Debug, PartialEq)]
pub struct RatioList {
    entries: Vec<String>,
}

impl Default for RatioList {
    fn default() -> Self {
        Self {
            entries: vec![String::new(); MIN_RATIOS],
        }
    }
}

impl RatioList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from existing entries, padding with empty ones up to two.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        while entries.len() < MIN_RATIOS {
            entries.push(String::new());
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn set(&mut self, index: usize, text: impl Into<String>) -> AppResult<()> {
        let slot = self
            .entries
            .get_mut(index)
            .ok_or(AppError::InvalidRatioIndex(index + 1))?;
        *slot = text.into();
        Ok(())
    }

    /// Append an empty entry and return its index.
    pub fn push_empty(&mut self) -> usize {
        self.entries.push(String::new());
        self.entries.len() - 1
    }

    pub fn weights(&self) -> Vec<f64> {
        self.entries.iter().map(|e| coerce_weight(e)).collect()
    }
}
