//! Interactive, line oriented form: one command per line on stdin.

use crate::cli::commands::calc::NOTHING_TO_SHOW;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clipboard::{Clipboard, SystemClipboard, report};
use crate::core::form::Form;
use crate::core::ratios::{RatioList, parse_ratio_list};
use crate::core::time_input::TimeInputMode;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, warning_line};
use crate::ui::output::{build_rows, render_text};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  time <TEXT>        set the working time
  ratio <N> <VALUE>  set ratio N (1-based)
  add                append an empty ratio
  calc               calculate the shares
  copy [N]           copy all times, or only task N
  show               show the current form
  help               show this help
  quit               leave the form";

#[derive(Debug, Clone, PartialEq)]
pub enum FormCommand {
    Time(String),
    Ratio(usize, String),
    Add,
    Calc,
    Copy(Option<usize>),
    Show,
    Help,
    Quit,
}

/// Parse one input line. Indexes in the result are 0-based.
pub fn parse_command(line: &str) -> AppResult<FormCommand> {
    let mut parts = line.split_whitespace();
    let verb = parts.next().unwrap_or("").to_ascii_lowercase();
    let rest: Vec<&str> = parts.collect();

    let index = |s: &str| -> AppResult<usize> {
        s.parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .ok_or_else(|| AppError::UnknownCommand(line.trim().to_string()))
    };

    match (verb.as_str(), rest.as_slice()) {
        ("time", _) => Ok(FormCommand::Time(rest.join(""))),
        ("ratio", [n, value @ ..]) => Ok(FormCommand::Ratio(index(*n)?, value.join(" "))),
        ("add", []) => Ok(FormCommand::Add),
        ("calc", []) => Ok(FormCommand::Calc),
        ("copy", []) => Ok(FormCommand::Copy(None)),
        ("copy", [n]) => Ok(FormCommand::Copy(Some(index(*n)?))),
        ("show", []) => Ok(FormCommand::Show),
        ("help", []) | ("?", []) => Ok(FormCommand::Help),
        ("quit", []) | ("exit", []) | ("q", []) => Ok(FormCommand::Quit),
        _ => Err(AppError::UnknownCommand(line.trim().to_string())),
    }
}

/// Handle the `form` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Form { minutes, rounding } = cmd {
        let mode = if *minutes {
            TimeInputMode::Minutes
        } else {
            cfg.input_mode
        };
        let form = Form::new(mode)
            .with_rounding(rounding.unwrap_or(cfg.clock_rounding))
            .with_auto_calculate(cfg.auto_calculate)
            .with_ratios(RatioList::from_entries(parse_ratio_list(
                &cfg.default_ratios,
            )));

        header("rTimesplit form");
        let stdin = io::stdin();
        let mut clipboard = SystemClipboard::new();
        run_session(form, cfg, stdin.lock(), &mut io::stdout(), &mut clipboard)?;
    }
    Ok(())
}

/// Drive the form until `quit` or end of input.
pub fn run_session<R: BufRead, W: Write>(
    mut form: Form,
    cfg: &Config,
    input: R,
    out: &mut W,
    clipboard: &mut dyn Clipboard,
) -> AppResult<Form> {
    writeln!(out, "{}", form.mode.label())?;
    writeln!(out, "{HELP}")?;
    prompt(out)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            prompt(out)?;
            continue;
        }

        match parse_command(&line) {
            Ok(FormCommand::Quit) => break,
            Ok(command) => {
                if let Err(e) = apply(&mut form, cfg, command, out, clipboard) {
                    writeln!(out, "{}", warning_line(e))?;
                }
            }
            Err(e) => writeln!(out, "{}", warning_line(e))?,
        }
        prompt(out)?;
    }

    writeln!(out)?;
    Ok(form)
}

fn apply<W: Write>(
    form: &mut Form,
    cfg: &Config,
    command: FormCommand,
    out: &mut W,
    clipboard: &mut dyn Clipboard,
) -> AppResult<()> {
    match command {
        FormCommand::Time(text) => {
            let recalculated = form.set_time(&text);
            writeln!(out, "Working time: {} ({} min)", form.time_input(), form.total_minutes())?;
            if recalculated {
                print_results(form, cfg, out)?;
            }
        }
        FormCommand::Ratio(i, value) => {
            form.set_ratio(i, &value)?;
            writeln!(out, "Ratio {} = {}", i + 1, value)?;
        }
        FormCommand::Add => {
            let i = form.add_ratio();
            writeln!(out, "Added ratio {}", i + 1)?;
        }
        FormCommand::Calc => {
            form.calculate();
            print_results(form, cfg, out)?;
        }
        FormCommand::Copy(None) => {
            report(form.copy_all(clipboard), out, false)?;
        }
        FormCommand::Copy(Some(i)) => {
            report(form.copy_single(i, clipboard)?, out, false)?;
        }
        FormCommand::Show => show(form, out)?,
        FormCommand::Help => writeln!(out, "{HELP}")?,
        FormCommand::Quit => {}
    }
    Ok(())
}

fn show<W: Write>(form: &Form, out: &mut W) -> AppResult<()> {
    writeln!(out, "{}: {}", form.mode.label(), form.time_input())?;
    for (i, r) in form.ratios().entries().iter().enumerate() {
        writeln!(out, "  Ratio {}: {}", i + 1, r)?;
    }
    Ok(())
}

fn print_results<W: Write>(form: &Form, cfg: &Config, out: &mut W) -> AppResult<()> {
    if form.results().is_empty() {
        writeln!(out, "{}", warning_line(NOTHING_TO_SHOW))?;
        return Ok(());
    }
    let rows = build_rows(&cfg.task_label, form.ratios().entries(), form.results());
    write!(out, "{}", render_text(&rows, &cfg.task_label, cfg.raw_decimals))?;
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> AppResult<()> {
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clipboard::testing::MemoryClipboard;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("time 01 30").unwrap(), FormCommand::Time("0130".into()));
        assert_eq!(
            parse_command("ratio 2 7.5").unwrap(),
            FormCommand::Ratio(1, "7.5".into())
        );
        assert_eq!(parse_command("ADD").unwrap(), FormCommand::Add);
        assert_eq!(parse_command("copy 3").unwrap(), FormCommand::Copy(Some(2)));
        assert_eq!(parse_command("copy").unwrap(), FormCommand::Copy(None));
        assert_eq!(parse_command("q").unwrap(), FormCommand::Quit);
    }

    #[test]
    fn test_parse_rejects_bad_lines() {
        assert!(parse_command("ratio 0 5").is_err());
        assert!(parse_command("copy x").is_err());
        assert!(parse_command("dance").is_err());
    }

    #[test]
    fn test_session_calculates_and_copies() {
        let cfg = Config::default();
        let form = Form::new(TimeInputMode::Compact);
        let script = "time 0130\nratio 1 1\nratio 2 2\ncalc\ncopy 2\nquit\nratio 1 99\n";
        let mut out = Vec::new();
        let mut cb = MemoryClipboard::default();

        let form = run_session(form, &cfg, script.as_bytes(), &mut out, &mut cb).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Working time: 0130 (90 min)"));
        assert!(text.contains("Task 1"));
        assert!(text.contains("All times:\n00:30\n01:00\n"));
        assert!(text.contains(crate::core::clipboard::COPY_OK));
        assert_eq!(cb.writes, vec!["01:00".to_string()]);
        // input after quit is ignored
        assert_eq!(form.ratios().get(0), Some("1"));
    }

    #[test]
    fn test_session_survives_bad_commands() {
        let cfg = Config::default();
        let form = Form::new(TimeInputMode::Minutes);
        let script = "ratio 9 1\nfoo\nadd\nshow\n";
        let mut out = Vec::new();
        let mut cb = MemoryClipboard::default();

        let form = run_session(form, &cfg, script.as_bytes(), &mut out, &mut cb).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(form.ratios().len(), 3);
        assert!(text.contains("Added ratio 3"));
        assert!(text.contains("  Ratio 3: "));
    }

    #[test]
    fn test_session_warnings_go_to_session_output() {
        crate::ui::messages::set_color(false);
        let cfg = Config::default();
        let form = Form::new(TimeInputMode::Minutes);
        let script = "dance
ratio 9 1
calc
copy 1
";
        let mut out = Vec::new();
        let mut cb = MemoryClipboard::default();

        run_session(form, &cfg, script.as_bytes(), &mut out, &mut cb).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Unknown command: dance"));
        assert!(text.contains("Invalid ratio index: 9"));
        assert!(text.contains(NOTHING_TO_SHOW));
        assert!(text.contains("Invalid result index: 1"));
        assert!(cb.writes.is_empty());
    }
}
