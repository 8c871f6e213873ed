use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clipboard::{Clipboard, SystemClipboard, report};
use crate::core::form::Form;
use crate::core::ratios::{RatioList, parse_ratio_list};
use crate::core::time_input::TimeInputMode;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info_err, warning_line};
use crate::ui::output::{OutputFormat, build_rows, render};
use std::io::{self, Write};
use std::time::Duration;

pub const NOTHING_TO_SHOW: &str = "Please enter a valid working time and ratios.";

/// Handle the `calc` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut clipboard = SystemClipboard::holding(Duration::from_secs(cfg.clipboard_hold_secs));

    if let Commands::Calc { copy, copy_index, .. } = cmd
        && (*copy || copy_index.is_some())
        && let Some(hold) = clipboard.hold()
    {
        info_err(format!(
            "Clipboard is kept for up to {}s (set clipboard_hold_secs: 0 to skip)",
            hold.as_secs()
        ));
    }

    let stdout = io::stdout();
    execute(cmd, cfg, &mut stdout.lock(), &mut clipboard)
}

/// Run `calc` against any sink and clipboard. Data goes to `out`; with JSON or
/// CSV output every notice goes to stderr so `out` stays machine readable.
pub fn execute<W: Write>(
    cmd: &Commands,
    cfg: &Config,
    out: &mut W,
    clipboard: &mut dyn Clipboard,
) -> AppResult<()> {
    if let Commands::Calc {
        time,
        ratios,
        minutes,
        format,
        rounding,
        copy,
        copy_index,
    } = cmd
    {
        let data_only = *format != OutputFormat::Text;

        //
        // 1. Build the form from arguments and config defaults
        //
        let mode = if *minutes {
            TimeInputMode::Minutes
        } else {
            cfg.input_mode
        };
        let ratio_text = ratios.as_deref().unwrap_or(&cfg.default_ratios);

        let mut form = Form::new(mode)
            .with_rounding(rounding.unwrap_or(cfg.clock_rounding))
            .with_ratios(RatioList::from_entries(parse_ratio_list(ratio_text)));
        form.set_time(time);

        //
        // 2. Calculate
        //
        if form.calculate().is_empty() {
            if data_only {
                eprintln!("{}", warning_line(NOTHING_TO_SHOW));
            } else {
                writeln!(out, "{}", warning_line(NOTHING_TO_SHOW))?;
            }
            return Ok(());
        }

        //
        // 3. Print
        //
        let rows = build_rows(&cfg.task_label, form.ratios().entries(), form.results());
        write!(out, "{}", render(&rows, *format, &cfg.task_label, cfg.raw_decimals)?)?;
        if *format == OutputFormat::Json {
            writeln!(out)?;
        }
        out.flush()?;

        //
        // 4. Copy (optional)
        //
        let outcome = if *copy {
            Some(form.copy_all(clipboard))
        } else if let Some(n) = copy_index {
            let index = n.checked_sub(1).ok_or(AppError::InvalidResultIndex(0))?;
            Some(form.copy_single(index, clipboard)?)
        } else {
            None
        };

        if let Some(outcome) = outcome {
            report(outcome, out, data_only)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clipboard::COPY_OK;
    use crate::core::clipboard::testing::MemoryClipboard;

    fn calc(format: OutputFormat, copy: bool, copy_index: Option<usize>) -> Commands {
        Commands::Calc {
            time: "90".into(),
            ratios: Some("1,2".into()),
            minutes: true,
            format,
            rounding: None,
            copy,
            copy_index,
        }
    }

    #[test]
    fn test_json_with_copy_keeps_stdout_parseable() {
        let cfg = Config::default();
        let mut out = Vec::new();
        let mut cb = MemoryClipboard::default();

        execute(&calc(OutputFormat::Json, true, None), &cfg, &mut out, &mut cb).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[1]["time"], "01:00");
        assert_eq!(cb.writes, vec!["00:30\n01:00".to_string()]);
    }

    #[test]
    fn test_csv_with_copy_index_has_only_rows() {
        let cfg = Config::default();
        let mut out = Vec::new();
        let mut cb = MemoryClipboard::default();

        execute(&calc(OutputFormat::Csv, false, Some(2)), &cfg, &mut out, &mut cb).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(!text.contains(COPY_OK));
        assert_eq!(cb.writes, vec!["01:00".to_string()]);
    }

    #[test]
    fn test_text_with_copy_shows_notice_after_table() {
        crate::ui::messages::set_color(false);
        let cfg = Config::default();
        let mut out = Vec::new();
        let mut cb = MemoryClipboard::default();

        execute(&calc(OutputFormat::Text, true, None), &cfg, &mut out, &mut cb).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Task"));
        assert!(text.trim_end().ends_with(COPY_OK));
    }

    #[test]
    fn test_copy_index_zero_is_an_error() {
        let cfg = Config::default();
        let mut out = Vec::new();
        let mut cb = MemoryClipboard::default();

        let err = execute(&calc(OutputFormat::Text, false, Some(0)), &cfg, &mut out, &mut cb)
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidResultIndex(0)));
        assert!(cb.writes.is_empty());
    }
}
