//! Total working time input: compact `HHMM` codes or plain minutes.

use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static LEADING_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+").expect("valid regex"));

/// Max characters accepted by the compact time field.
pub const COMPACT_LEN: usize = 4;

/// Which kind of text the total-time field holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TimeInputMode {
    /// Four digits, hours then minutes (`0123` = 1h 23m).
    #[default]
    Compact,
    /// A plain number of minutes.
    Minutes,
}

impl TimeInputMode {
    /// Turn raw field text into total minutes.
    pub fn parse(&self, input: &str) -> i64 {
        match self {
            TimeInputMode::Compact => parse_compact_time(input),
            TimeInputMode::Minutes => parse_minutes(input),
        }
    }

    /// Filter applied while the user types.
    pub fn sanitize(&self, input: &str) -> String {
        match self {
            TimeInputMode::Compact => sanitize_compact_input(input),
            TimeInputMode::Minutes => to_halfwidth(input).trim().to_string(),
        }
    }

    /// Label shown next to the time field.
    pub fn label(&self) -> &'static str {
        match self {
            TimeInputMode::Compact => "Working time (4 digits: e.g. 0123 = 1h 23m)",
            TimeInputMode::Minutes => "Working time (minutes)",
        }
    }
}

/// Map full-width digits, commas and dots to their ASCII forms.
pub fn to_halfwidth(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{FF10}'..='\u{FF19}' => {
                char::from(b'0' + (c as u32 - 0xFF10) as u8)
            }
            '\u{FF0C}' => ',',
            '\u{FF0E}' => '.',
            other => other,
        })
        .collect()
}

/// Keep only digits (full-width ones converted) and cap at four characters.
pub fn sanitize_compact_input(input: &str) -> String {
    to_halfwidth(input)
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(COMPACT_LEN)
        .collect()
}

/// Parse a four digit `HHMM` code into minutes.
///
/// Anything that is not exactly four ASCII digits yields 0. The minutes part is
/// not range checked, so `"0199"` is 1h 99m = 159.
pub fn parse_compact_time(code: &str) -> i64 {
    if code.len() != COMPACT_LEN || !code.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }

    let hours: i64 = code[0..2].parse().unwrap_or(0);
    let minutes: i64 = code[2..4].parse().unwrap_or(0);
    hours * 60 + minutes
}

/// Minutes passthrough: the leading whole number, so `"90.5"` and `"90min"`
/// both give 90. Text without leading digits (including a minus sign) yields 0.
pub fn parse_minutes(input: &str) -> i64 {
    let text = to_halfwidth(input);
    LEADING_INTEGER
        .find(text.trim())
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .unwrap_or(0)
}
