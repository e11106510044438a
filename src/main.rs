use std::io::IsTerminal;

use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use payables::cli::{
    handle_calendar_command, handle_due_command, handle_invoice_command, handle_order_command,
    CalendarArgs, CommandContext, InvoiceCommands, OrderCommands,
};
use payables::config::{PayablesPaths, Settings, StorageBackend};
use payables::models::parse_date;
use payables::storage::Storage;

/// Environment variable holding a log filter (`debug`, `payables=trace`, ...)
const LOG_ENV: &str = "PAYABLES_LOG";

#[derive(Parser)]
#[command(
    name = "payables",
    version,
    about = "Payment calendar for orders and invoices",
    long_about = "payables keeps track of what clients and suppliers owe and when. \
                  It flags overdue and soon-due orders and invoices and lays them \
                  out on a monthly payment calendar."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Decrease log verbosity (-q warn, -qq error)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    quiet: u8,

    /// Evaluate due dates as of this day instead of the system date (YYYY-MM-DD)
    #[arg(long, env = "PAYABLES_TODAY", global = true, hide = true)]
    today: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and default settings
    Init,

    /// Order management commands
    #[command(subcommand)]
    Order(OrderCommands),

    /// Invoice management commands
    #[command(subcommand)]
    Invoice(InvoiceCommands),

    /// Show the payment calendar for a month
    #[command(alias = "cal")]
    Calendar(CalendarArgs),

    /// List overdue and soon-due orders and invoices
    Due,

    /// Show current configuration and paths
    Config,
}

fn init_tracing(verbose: u8, quiet: u8) -> Result<()> {
    let default_level = if quiet >= 2 {
        "error"
    } else if quiet == 1 {
        "warn"
    } else if verbose >= 3 {
        "trace"
    } else if verbose == 2 {
        "debug"
    } else if verbose == 1 {
        "info"
    } else {
        "warn"
    };

    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| anyhow!("invalid {} filter: {e}", LOG_ENV))?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet)?;

    let today: NaiveDate = match &cli.today {
        Some(day) => parse_date(day).context("invalid --today")?,
        None => Local::now().date_naive(),
    };

    let paths = PayablesPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    debug!(base = %paths.base_dir().display(), %today, "starting");

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing payables at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            if settings.storage_backend == StorageBackend::File {
                Storage::open(paths.clone(), &settings)?.save_all()?;
            }
            println!("Initialization complete!");
            println!();
            println!("Run 'payables order add' or 'payables invoice add' to record payables,");
            println!("then 'payables calendar' to see them by due date.");
        }
        Some(Commands::Config) => {
            println!("payables configuration");
            println!("======================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Due-soon window: {} days", settings.due_soon_days);
            println!("  Storage backend: {:?}", settings.storage_backend);
        }
        Some(command) => {
            let storage = Storage::open(paths, &settings)?;
            let ctx = CommandContext {
                storage: &storage,
                settings: &settings,
                today,
            };

            match command {
                Commands::Order(cmd) => handle_order_command(&ctx, cmd)?,
                Commands::Invoice(cmd) => handle_invoice_command(&ctx, cmd)?,
                Commands::Calendar(args) => handle_calendar_command(&ctx, args)?,
                Commands::Due => handle_due_command(&ctx)?,
                Commands::Init | Commands::Config => {}
            }
        }
        None => {
            println!("payables - payment calendar for orders and invoices");
            println!();
            println!("Run 'payables --help' for usage information.");
            println!("Run 'payables calendar' to see this month's payments.");
        }
    }

    Ok(())
}
