//! Clipboard collaborator: write text, report success or failure once.

use crate::core::allocator::Allocation;
use crate::errors::AppResult;
use crate::ui::messages::{error_line, success_line};
use std::io::Write;
use std::time::Duration;

pub const COPY_OK: &str = "Time copied!";
pub const COPY_FAILED: &str = "Copy failed, please copy manually.";

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> AppResult<()>;
}

/// System clipboard through `arboard`, opened lazily on first write.
///
/// On X11 and Wayland the copied text lives only as long as its owner. The
/// interactive form keeps one instance for the whole session. One-shot
/// commands use [`SystemClipboard::holding`], which blocks after the write until
/// a clipboard manager takes the selection over or the hold time runs out.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
    hold: Option<Duration>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep ownership of the written text for up to `hold` (zero disables it).
    pub fn holding(hold: Duration) -> Self {
        Self {
            inner: None,
            hold: (!hold.is_zero()).then_some(hold),
        }
    }

    pub fn hold(&self) -> Option<Duration> {
        self.hold
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> AppResult<()> {
        let cb = match self.inner.as_mut() {
            Some(cb) => cb,
            None => self.inner.insert(arboard::Clipboard::new()?),
        };

        match self.hold {
            #[cfg(all(
                unix,
                not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
            ))]
            Some(hold) => {
                use arboard::SetExtLinux;
                cb.set()
                    .wait_until(std::time::Instant::now() + hold)
                    .text(text.to_string())?;
            }
            _ => cb.set_text(text.to_string())?,
        }
        Ok(())
    }
}

/// Result of a copy request as seen by the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
    /// Nothing to copy; no notice shown.
    Skipped,
}

impl CopyOutcome {
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            CopyOutcome::Copied => Some(COPY_OK),
            CopyOutcome::Failed => Some(COPY_FAILED),
            CopyOutcome::Skipped => None,
        }
    }
}

/// Text for "copy all": one formatted time per line.
pub fn joined_times(results: &[Allocation]) -> String {
    results
        .iter()
        .map(|r| r.formatted.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn copy_all(clipboard: &mut dyn Clipboard, results: &[Allocation]) -> CopyOutcome {
    if results.is_empty() {
        return CopyOutcome::Skipped;
    }
    copy_single(clipboard, &joined_times(results))
}

/// Write `text`; the caller reports the outcome with [`report`].
pub fn copy_single(clipboard: &mut dyn Clipboard, text: &str) -> CopyOutcome {
    match clipboard.write_text(text) {
        Ok(()) => CopyOutcome::Copied,
        Err(_) => CopyOutcome::Failed,
    }
}

/// Show the copy notice. Success goes to `out` unless `out` carries data
/// (JSON/CSV), in which case it goes to stderr. Failures always go to stderr.
pub fn report<W: Write>(
    outcome: CopyOutcome,
    out: &mut W,
    out_carries_data: bool,
) -> AppResult<()> {
    match outcome {
        CopyOutcome::Copied if out_carries_data => eprintln!("{}", success_line(COPY_OK)),
        CopyOutcome::Copied => writeln!(out, "{}", success_line(COPY_OK))?,
        CopyOutcome::Failed => eprintln!("{}", error_line(COPY_FAILED)),
        CopyOutcome::Skipped => {}
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::testing::MemoryClipboard;
    use super::*;
    use crate::core::allocator::compute_allocations;

    #[test]
    fn test_copy_all_joins_lines() {
        let results = compute_allocations(90.0, &[1.0, 2.0]);
        let mut cb = MemoryClipboard::default();
        assert_eq!(copy_all(&mut cb, &results), CopyOutcome::Copied);
        assert_eq!(cb.writes, vec!["00:30\n01:00".to_string()]);
    }

    #[test]
    fn test_copy_all_without_results_is_skipped() {
        let mut cb = MemoryClipboard::default();
        assert_eq!(copy_all(&mut cb, &[]), CopyOutcome::Skipped);
        assert!(cb.writes.is_empty());
    }

    #[test]
    fn test_copy_failure_is_reported() {
        let mut cb = MemoryClipboard {
            fail: true,
            ..Default::default()
        };
        let outcome = copy_single(&mut cb, "01:00");
        assert_eq!(outcome, CopyOutcome::Failed);
        assert_eq!(outcome.notice(), Some(COPY_FAILED));
        assert!(cb.writes.is_empty());
    }

    #[test]
    fn test_report_keeps_data_sink_clean() {
        crate::ui::messages::set_color(false);
        let mut out = Vec::new();
        report(CopyOutcome::Copied, &mut out, true).unwrap();
        report(CopyOutcome::Failed, &mut out, false).unwrap();
        report(CopyOutcome::Skipped, &mut out, false).unwrap();
        assert!(out.is_empty());

        report(CopyOutcome::Copied, &mut out, false).unwrap();
        assert!(String::from_utf8(out).unwrap().contains(COPY_OK));
    }

    #[test]
    fn test_holding_zero_disables_hold() {
        assert_eq!(SystemClipboard::new().hold(), None);
        assert_eq!(SystemClipboard::holding(Duration::ZERO).hold(), None);
        assert_eq!(
            SystemClipboard::holding(Duration::from_secs(5)).hold(),
            Some(Duration::from_secs(5))
        );
    }
}
