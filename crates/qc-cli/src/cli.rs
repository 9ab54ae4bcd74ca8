//! CLI argument definitions for `quebrada`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use qc_persistence::FontSize;

#[derive(Parser)]
#[command(
    name = "quebrada",
    version,
    about = "Quebrada Conectada - digital literacy journey driver",
    long_about = "Drive a Quebrada Conectada learning session from the terminal.\n\n\
                  Runs scripted journeys through the four modules, the evidence lab\n\
                  and the certificate, and manages accessibility preferences."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Allow learner names in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Preferences file (default: platform config directory).
    #[arg(long = "prefs", value_name = "PATH", global = true)]
    pub prefs: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a journey script and print a completion summary.
    Journey(JourneyArgs),

    /// List the journey modules.
    Modules,

    /// Show or change accessibility preferences.
    Prefs {
        #[command(subcommand)]
        action: Option<PrefsAction>,
    },
}

#[derive(Parser)]
pub struct JourneyArgs {
    /// Script file with one command per line (reads stdin when omitted).
    #[arg(value_name = "SCRIPT")]
    pub script: Option<PathBuf>,

    /// Directory for exported certificates.
    #[arg(long = "out-dir", value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Modules required to open the evidence lab.
    #[arg(long = "lab-threshold", value_name = "N")]
    pub lab_threshold: Option<usize>,

    /// Number of telemetry events kept in the session log.
    #[arg(long = "log-capacity", value_name = "N")]
    pub log_capacity: Option<usize>,
}

#[derive(Clone, Copy, Subcommand)]
pub enum PrefsAction {
    /// Print the current preferences.
    Show,
    /// Switch between light and dark.
    ToggleTheme,
    /// Set the base font size.
    Font {
        #[arg(value_enum)]
        size: FontSizeArg,
    },
    /// Show or hide the Libras widget.
    ToggleLibras,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FontSizeArg {
    Sm,
    Base,
    Lg,
}

impl From<FontSizeArg> for FontSize {
    fn from(arg: FontSizeArg) -> Self {
        match arg {
            FontSizeArg::Sm => FontSize::Sm,
            FontSizeArg::Base => FontSize::Base,
            FontSizeArg::Lg => FontSize::Lg,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
