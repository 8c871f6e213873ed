use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, success, warning};

use crate::cli::parser::Commands;
use std::fs;
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            info(format!("Current configuration ({}):\n", path.display()));
            println!("{}", cfg.to_yaml()?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            check_file(path)?;
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit_file(path, editor.clone())?;
        }
    }

    Ok(())
}

fn check_file(path: &Path) -> AppResult<()> {
    if !path.exists() {
        warning(format!(
            "No configuration file at {} (defaults in use). Run `rtimesplit init` to create one.",
            path.display()
        ));
        return Ok(());
    }

    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    Config::from_yaml(&content)?;

    let missing = Config::missing_keys(&content)?;
    if missing.is_empty() {
        success("Configuration file is complete");
    } else {
        warning(format!(
            "Missing fields (defaults will be used): {}",
            missing.join(", ")
        ));
    }
    Ok(())
}

fn edit_file(path: &Path, requested_editor: Option<String>) -> AppResult<()> {
    if !path.exists() {
        Config::default().save(path)?;
    }

    // Platform default editor
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested_editor.unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using '{}'",
                editor_to_use
            ));
        }
        Ok(_) | Err(_) => {
            warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            ));

            match Command::new(&default_editor).arg(path).status() {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited successfully using fallback '{}'",
                        default_editor
                    ));
                }
                Ok(_) | Err(_) => {
                    error(format!(
                        "Failed to edit configuration file using fallback '{}'",
                        default_editor
                    ));
                }
            }
        }
    }
    Ok(())
}
