//! roster — user registration, debounced search and formatting demo.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use roster::config;
use roster::constants;
use roster::env;
use roster::logging;
use roster::models;
use roster::output;
use roster::session;
use roster::utils;

use std::process;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;

use cli::args::{CapitalizeArgs, Cli, Command, CurrencyArgs, DateArgs, DemoArgs, EmailArgs, IdArgs};
use config::Config;
use env::Env;
use models::Amount;
use output::StdoutReporter;
use session::{SessionSettings, UserSession};
use utils::{SharedUtils, StandardUtils};

/// Users registered by the demo; the third one has a bad address.
const DEMO_USERS: &[(&str, &str)] = &[
    ("john doe", "john@example.com"),
    ("JANE SMITH", "jane.smith@company.org"),
    ("bob wilson", "invalid-email"),
    ("alice JOHNSON", "alice@test.co.uk"),
];

/// Fired back to back; only the last one should run.
const DEMO_QUERIES: &[&str] = &["john", "jane", "alice"];

const DEMO_EMAILS: &[&str] = &[
    "test@valid.com",
    "invalid.email",
    "user@domain.co.uk",
    "@invalid.com",
];

/// (amount, currency, locale) triples shown in the currency section.
const DEMO_AMOUNTS: &[(f64, &str, &str)] = &[
    (1234.56, "USD", "en-US"),
    (1234.56, "EUR", "de-DE"),
    (1234.56, "EUR", "fr-FR"),
    (1234.56, "GBP", "en-GB"),
    (1234.56, "JPY", "ja-JP"),
    (1234567.891, "INR", "en-IN"),
    (0.0, "USD", "en-US"),
    (-42.5, "USD", "en-US"),
];

/// Extra wait after the debounce window so the search has printed.
const SETTLE_MARGIN: Duration = Duration::from_millis(200);

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let work_dir = std::env::current_dir().context("failed to determine working directory")?;
    let config = Config::load(Some(work_dir.as_path()), &Env::real())
        .context("failed to load configuration")?;
    logging::init_logging(&config.logging.filter, !cli.no_color);

    let utils = Arc::new(StandardUtils::new(
        config.currency.code.clone(),
        config.currency.locale.clone(),
    ));

    match cli.command_or_default() {
        Command::Demo(args) => run_demo(args, &config, utils).await,
        Command::Capitalize(args) => run_capitalize(args, &*utils),
        Command::Email(args) => run_email(args, &*utils),
        Command::Id(args) => run_id(args, &config, &*utils),
        Command::Date(args) => run_date(args, &*utils),
        Command::Currency(args) => run_currency(args, &*utils),
        Command::Version => run_version(),
    }
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!("{} {}", constants::APP_NAME.bold(), constants::VERSION.green().bold());
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    println!("{}    {}", "profile:".dimmed(), constants::BUILD_PROFILE);
    Ok(())
}

/// The three-part walkthrough: registration, debounced search, utilities.
async fn run_demo(args: DemoArgs, config: &Config, utils: Arc<StandardUtils>) -> Result<()> {
    let mut settings = SessionSettings::from(config);
    if let Some(ms) = args.debounce_ms {
        settings.debounce_delay = Duration::from_millis(ms);
    }

    let reporter = Arc::new(StdoutReporter::new(args.format.renderer()));
    let session = UserSession::new(utils.clone(), reporter, settings)
        .context("failed to start user session")?;

    cli::print_banner();

    cli::print_section(1, "User registration");
    demo_registration(&session);
    println!();

    cli::print_section(2, "Debounced search");
    let settle = args
        .settle_ms
        .map(Duration::from_millis)
        .unwrap_or(settings.debounce_delay + SETTLE_MARGIN);
    demo_search(&session, settle).await;
    println!();

    cli::print_section(3, "Utility functions");
    demo_utilities(&*utils);
    println!();

    print!("{}", args.format.renderer().render_users(&session.list_users()));
    println!();
    cli::print_status(true, "Demo completed.");
    Ok(())
}

fn demo_registration(session: &UserSession) {
    for (name, email) in DEMO_USERS {
        if session.register_user(name, email) {
            cli::print_status(true, &format!("registered {name:?} <{email}>"));
        } else {
            cli::print_status(false, &format!("invalid email {email:?}, {name:?} not registered"));
        }
    }
    cli::print_item("Registered", session.user_count());
}

async fn demo_search(session: &UserSession, settle: Duration) {
    cli::print_item(
        "Searching",
        format!(
            "{} rapid queries, {}ms window; only {:?} should run",
            DEMO_QUERIES.len(),
            session.debounce_delay().as_millis(),
            DEMO_QUERIES.last().copied().unwrap_or_default(),
        ),
    );
    for query in DEMO_QUERIES {
        session.search_users(query);
    }
    tokio::time::sleep(settle).await;

    if session.search_pending() {
        cli::print_status(false, "search still pending; raise --settle-ms");
    }
}

fn demo_utilities(utils: &dyn SharedUtils) {
    cli::print_item("Short ID", utils.generate_id(6));
    cli::print_item("Long ID", utils.generate_id(16));
    cli::print_item(
        "Formatted",
        format!("{:?}", utils.capitalize_words("hello WORLD from RUST")),
    );

    for email in DEMO_EMAILS {
        let verdict = if utils.is_valid_email(email) { "valid" } else { "invalid" };
        cli::print_item("Email", format!("{email:?} is {verdict}"));
    }

    cli::print_item("Today", utils.format_date(None));
    let holidays = [("Christmas 2025", (2025, 12, 25)), ("New Year 2026", (2026, 1, 1))];
    for (label, (y, m, d)) in holidays {
        let date = chrono::NaiveDate::from_ymd_opt(y, m, d);
        cli::print_item(label, utils.format_date(date));
    }

    for (amount, code, locale) in DEMO_AMOUNTS {
        let rendered = utils.format_currency(&Amount::from(*amount), Some(*code), Some(*locale));
        cli::print_item(&format!("{code} {locale}"), rendered);
    }
    cli::print_item(
        "Missing amount",
        utils.format_currency(&Amount::Absent, None, None),
    );
    cli::print_item(
        "Invalid amount",
        utils.format_currency(&Amount::parse("twelve"), None, None),
    );
}

fn run_capitalize(args: CapitalizeArgs, utils: &dyn SharedUtils) -> Result<()> {
    println!("{}", utils.capitalize_words(&args.text.join(" ")));
    Ok(())
}

fn run_email(args: EmailArgs, utils: &dyn SharedUtils) -> Result<()> {
    let mut invalid = 0;
    for email in &args.emails {
        let ok = utils.is_valid_email(email);
        if !ok {
            invalid += 1;
        }
        cli::print_status(ok, &format!("{email:?} is {}", if ok { "valid" } else { "invalid" }));
    }

    if args.strict && invalid > 0 {
        bail!("{invalid} of {} address(es) invalid", args.emails.len());
    }
    Ok(())
}

fn run_id(args: IdArgs, config: &Config, utils: &dyn SharedUtils) -> Result<()> {
    let length = args.length.unwrap_or(config.registry.id_length);
    println!("{}", utils.generate_id(length));
    Ok(())
}

fn run_date(args: DateArgs, utils: &dyn SharedUtils) -> Result<()> {
    let date = args
        .date
        .as_deref()
        .map(|raw| {
            utils::date::parse_date(raw)
                .with_context(|| format!("invalid date {raw:?}, expected YYYY-MM-DD"))
        })
        .transpose()?;
    println!("{}", utils.format_date(date));
    Ok(())
}

fn run_currency(args: CurrencyArgs, utils: &dyn SharedUtils) -> Result<()> {
    let amount = args.amount.as_deref().map_or(Amount::Absent, Amount::parse);
    let currency = args.currency.as_deref();

    if args.all_locales {
        for locale in utils::currency::supported_locales() {
            cli::print_item(locale, utils.format_currency(&amount, currency, Some(locale)));
        }
    } else {
        println!("{}", utils.format_currency(&amount, currency, args.locale.as_deref()));
    }
    Ok(())
}
