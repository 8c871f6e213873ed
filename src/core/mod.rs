//! Core logic: proportional allocation, time input strategies, ratio entries,
//! the form state and the clipboard collaborator.

pub mod allocator;
pub mod clipboard;
pub mod form;
pub mod ratios;
pub mod time_input;

pub use allocator::{Allocation, ClockRounding, compute_allocations, format_as_clock};
pub use form::Form;
pub use time_input::{TimeInputMode, parse_compact_time};
