use crate::core::allocator::ClockRounding;
use crate::ui::output::OutputFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimesplit
/// CLI application to split a working time by ratios
#[derive(Parser)]
#[command(
    name = "rtimesplit",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple time ratio CLI: split a working time into proportional HH:MM shares",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Disable colored output
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Split a working time by ratios and print each share
    Calc {
        /// Working time: 4 digits HHMM (e.g. 0123 = 1h 23m), or minutes with --minutes
        #[arg(long = "time", short = 't', help = "Working time (HHMM, or minutes with --minutes)")]
        time: String,

        /// Comma separated ratios (e.g. 50,30,20). Defaults to the configured ratios.
        #[arg(long = "ratios", short = 'r', help = "Comma separated ratios (e.g. 50,30,20)")]
        ratios: Option<String>,

        #[arg(long = "minutes", short = 'm', help = "Read --time as plain minutes")]
        minutes: bool,

        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        #[arg(long, value_enum, help = "Rounding of the minutes part (legacy or carry)")]
        rounding: Option<ClockRounding>,

        #[arg(long = "copy", short = 'c', help = "Copy all times to the clipboard")]
        copy: bool,

        #[arg(
            long = "copy-index",
            value_name = "N",
            conflicts_with = "copy",
            help = "Copy only the time of task N (1-based)"
        )]
        copy_index: Option<usize>,
    },

    /// Interactive form: edit time and ratios, calculate, copy
    Form {
        #[arg(long = "minutes", short = 'm', help = "Enter the working time as plain minutes")]
        minutes: bool,

        #[arg(long, value_enum, help = "Rounding of the minutes part (legacy or carry)")]
        rounding: Option<ClockRounding>,
    },
}
