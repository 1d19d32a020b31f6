//! Clap argument types and output format selection.

use clap::{Parser, ValueEnum};

use roster::output::OutputRenderer;
use roster::output::json::JsonRenderer;
use roster::output::terminal::TerminalRenderer;

/// User registration, debounced search and formatting demo.
#[derive(Parser, Debug)]
#[command(name = "roster", version = roster::constants::VERSION)]
pub struct Cli {
    /// Disable colored output.
    #[arg(long, global = true, default_value_t = false)]
    pub no_color: bool,

    /// Subcommand to run (default: demo).
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The requested command, falling back to a default demo run.
    pub fn command_or_default(self) -> Command {
        self.command.unwrap_or_else(|| Command::Demo(DemoArgs::default()))
    }
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Run the registration, debounced search and utilities demo.
    Demo(DemoArgs),

    /// Title-case each word of the given text.
    Capitalize(CapitalizeArgs),

    /// Check whether email addresses are syntactically valid.
    Email(EmailArgs),

    /// Generate a random identifier.
    Id(IdArgs),

    /// Format a date (default: today).
    Date(DateArgs),

    /// Format an amount as currency.
    Currency(CurrencyArgs),

    /// Print version and build information.
    Version,
}

/// Arguments for the `demo` subcommand.
#[derive(Parser, Debug, Default)]
pub struct DemoArgs {
    /// Output format for search results and the final user listing.
    #[arg(long, default_value = "terminal")]
    pub format: OutputFormat,

    /// Debounce window in milliseconds (overrides config and environment).
    #[arg(long)]
    pub debounce_ms: Option<u64>,

    /// How long to wait after the search burst, in milliseconds
    /// (default: debounce window plus 200).
    #[arg(long)]
    pub settle_ms: Option<u64>,
}

/// Arguments for the `capitalize` subcommand.
#[derive(Parser, Debug)]
pub struct CapitalizeArgs {
    /// Words to capitalise; joined with single spaces.
    #[arg(required = true)]
    pub text: Vec<String>,
}

/// Arguments for the `email` subcommand.
#[derive(Parser, Debug)]
pub struct EmailArgs {
    /// Addresses to check.
    #[arg(required = true)]
    pub emails: Vec<String>,

    /// Exit non-zero if any address is invalid.
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

/// Arguments for the `id` subcommand.
#[derive(Parser, Debug)]
pub struct IdArgs {
    /// Identifier length (default: the configured registry id length).
    #[arg(long, short = 'l')]
    pub length: Option<usize>,
}

/// Arguments for the `date` subcommand.
#[derive(Parser, Debug)]
pub struct DateArgs {
    /// Date as YYYY-MM-DD.
    pub date: Option<String>,
}

/// Arguments for the `currency` subcommand.
#[derive(Parser, Debug)]
pub struct CurrencyArgs {
    /// Amount to format. Non-numeric or missing input renders the fallback.
    #[arg(allow_hyphen_values = true)]
    pub amount: Option<String>,

    /// ISO 4217 currency code (default: configured currency).
    #[arg(long, short = 'c')]
    pub currency: Option<String>,

    /// Locale tag such as de-DE (default: configured locale).
    #[arg(long, short = 'l')]
    pub locale: Option<String>,

    /// Render the amount in every supported locale.
    #[arg(long, default_value_t = false, conflicts_with = "locale")]
    pub all_locales: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl OutputFormat {
    /// The renderer for this format.
    pub fn renderer(&self) -> Box<dyn OutputRenderer> {
        match self {
            OutputFormat::Terminal => Box::new(TerminalRenderer),
            OutputFormat::Json => Box::new(JsonRenderer),
        }
    }
}
