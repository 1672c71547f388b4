//! Command line arguments for design-preflight.
//!
//! Running with no subcommand is the same as `check`.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::data::palette::Theme;
use crate::CheckCategory;

#[derive(Parser, Debug)]
#[command(
    name = "design-preflight",
    version,
    about = "Design-system compliance checks for the contest platform front-end",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
    #[command(flatten)]
    pub check: CheckArgs,
}

impl Cli {
    /// The command to execute, defaulting to `check`
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Check(self.check))
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run compliance checks against a design config (default)
    Check(CheckArgs),
    /// Show palette and navigation status of the built-in design system
    Status(StatusArgs),
    /// Compute the contrast ratio of two colors
    Contrast(ContrastArgs),
    /// List all available checks
    List,
    /// Print version information
    Version,
}

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
    /// JUnit XML for CI/CD integration
    Junit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Color,
    Navigation,
    Layout,
    Cards,
    Accessibility,
}

impl From<CategoryArg> for CheckCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Color => CheckCategory::Color,
            CategoryArg::Navigation => CheckCategory::Navigation,
            CategoryArg::Layout => CheckCategory::Layout,
            CategoryArg::Cards => CheckCategory::Cards,
            CategoryArg::Accessibility => CheckCategory::Accessibility,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "DESIGN_PREFLIGHT_FORMAT")]
    pub format: OutputFormat,
    /// Only output failures and warnings
    #[arg(short, long)]
    pub quiet: bool,
    /// Include details for every check and enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
    /// Disable colored output (also honors NO_COLOR)
    #[arg(long)]
    pub no_color: bool,
}

impl OutputArgs {
    pub fn color_enabled(&self) -> bool {
        !self.no_color && std::env::var_os("NO_COLOR").is_none()
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// Design config file (JSON)
    #[arg(long, env = "DESIGN_PREFLIGHT_CONFIG")]
    pub config: Option<String>,
    /// Theme used to resolve palette roles in contrast pairs
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,
    /// Run only this check ID (repeatable)
    #[arg(long, value_name = "ID")]
    pub only: Vec<String>,
    /// Skip this check ID (repeatable)
    #[arg(long, value_name = "ID")]
    pub skip: Vec<String>,
    /// Run only checks in this category (repeatable)
    #[arg(long, value_enum)]
    pub category: Vec<CategoryArg>,
    /// Stop on first failure
    #[arg(long)]
    pub fail_fast: bool,
    /// Compare results against a saved baseline report
    #[arg(long, value_name = "FILE")]
    pub baseline: Option<String>,
    /// Save this run as a baseline report
    #[arg(long, value_name = "FILE")]
    pub save_baseline: Option<String>,
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct StatusArgs {
    /// Active theme; overrides the saved and system preferences
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,
    /// Theme the visitor saved earlier (e.g. contest-dark)
    #[arg(long, value_name = "THEME")]
    pub saved_theme: Option<String>,
    /// The system prefers a dark color scheme
    #[arg(long)]
    pub prefers_dark: bool,
    /// Report the theme after pressing the navbar theme toggle
    #[arg(long)]
    pub toggle: bool,
    /// Output machine-readable JSON
    #[arg(long)]
    pub json: bool,
    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl StatusArgs {
    /// Theme shown on first load, then toggled if requested
    pub fn active_theme(&self) -> Theme {
        let theme = match self.theme {
            Some(theme) => Theme::from(theme),
            None => Theme::initial(self.saved_theme.as_deref(), self.prefers_dark),
        };
        if self.toggle {
            theme.toggle()
        } else {
            theme
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ContrastArgs {
    /// Text color (#rrggbb or #rgb)
    pub foreground: String,
    /// Background color (#rrggbb or #rgb)
    pub background: String,
    /// Output machine-readable JSON
    #[arg(long)]
    pub json: bool,
}
