use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_budget_command, handle_category_command, handle_dashboard_command,
    handle_export_command, handle_import_command, handle_login_command, handle_logout_command,
    handle_report_command, handle_transaction_command, handle_whoami_command, BudgetCommands,
    CategoryCommands, ExportArgs, ReportArgs, TransactionCommands,
};
use expense_tracker::config::{Settings, TrackerPaths};
use expense_tracker::session::{FileSession, Session};
use expense_tracker::storage::open_file_slot;
use expense_tracker::store::Store;

#[derive(Parser)]
#[command(
    name = "expense",
    author = "Kaylee Beyene",
    version,
    about = "Local-first personal expense tracker",
    long_about = "Expense Tracker records income and expenses, organizes them into \
                  categories, tracks spending limits and summarizes everything in \
                  dashboards and period reports. All data stays on this machine."
)]
struct Cli {
    /// Directory holding settings, data and backups
    #[arg(long, global = true, env = "EXPENSE_TRACKER_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in (any name and email are accepted)
    Login {
        /// Your name
        name: String,
        /// Your email address
        email: String,
    },

    /// Sign out
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Show balance, breakdowns and recent transactions
    #[command(alias = "dash")]
    Dashboard,

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Income and expense trends for the current period
    Report(ReportArgs),

    /// Export data to a file
    Export(ExportArgs),

    /// Replace all data with a JSON backup
    Import {
        /// Path to the backup file
        file: PathBuf,
    },

    /// Show current configuration and paths
    Config,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

/// Open the persisted store; every store command needs a signed-in user
fn open_store(session: &FileSession, paths: &TrackerPaths) -> Result<Store> {
    session.require_authenticated()?;
    Ok(Store::open(open_file_slot(paths)?))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => TrackerPaths::with_base_dir(dir),
        None => TrackerPaths::new()?,
    };
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;
    let mut session = FileSession::load(&paths);

    let command = match cli.command {
        Some(command) => command,
        None => {
            println!("Expense Tracker - local-first personal expense tracking");
            println!();
            println!("Run 'expense --help' for usage information.");
            println!("Run 'expense login <name> <email>' to get started.");
            return Ok(());
        }
    };

    match command {
        Commands::Login { name, email } => handle_login_command(&mut session, &name, &email)?,
        Commands::Logout => handle_logout_command(&mut session)?,
        Commands::Whoami => handle_whoami_command(&session)?,
        Commands::Config => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data file:        {}", paths.store_file().display());
            println!("Backup directory: {}", paths.backup_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:       {}", settings.currency_symbol);
            println!("  Date format:           {}", settings.date_format);
            println!("  Default category icon: {}", settings.default_category_icon);
        }
        Commands::Dashboard => {
            let store = open_store(&session, &paths)?;
            handle_dashboard_command(&store, &settings)?;
        }
        Commands::Transaction(cmd) => {
            let mut store = open_store(&session, &paths)?;
            handle_transaction_command(&mut store, &settings, cmd)?;
        }
        Commands::Category(cmd) => {
            let mut store = open_store(&session, &paths)?;
            handle_category_command(&mut store, &settings, cmd)?;
        }
        Commands::Budget(cmd) => {
            let mut store = open_store(&session, &paths)?;
            handle_budget_command(&mut store, &settings, cmd)?;
        }
        Commands::Report(args) => {
            let store = open_store(&session, &paths)?;
            handle_report_command(&store, &settings, args)?;
        }
        Commands::Export(args) => {
            let store = open_store(&session, &paths)?;
            handle_export_command(&store, &paths, args)?;
        }
        Commands::Import { file } => {
            let mut store = open_store(&session, &paths)?;
            handle_import_command(&mut store, &file)?;
        }
    }

    Ok(())
}
