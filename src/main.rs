use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use fintrack::cli::{
    handle_analysis_command, handle_budget_command, handle_export_command, handle_history_command,
    handle_report_command, handle_transaction_command, AnalysisCommands, BudgetCommands,
    ExportArgs, ReportCommands, Session, TransactionCommands,
};
use fintrack::config::{audit_log_for, budgets_file_for, FintrackPaths, Settings};

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal finance ledger for the terminal",
    long_about = "fintrack records dated income and expense transactions in a CSV \
                  ledger and summarizes them: totals, spending by category, monthly \
                  balances, spending trends and per-category budgets."
)]
struct Cli {
    /// Ledger store to use instead of the one in the data directory
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Log level for diagnostics written to stderr (RUST_LOG takes precedence)
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Transaction(TransactionCommands),

    #[command(flatten)]
    Analysis(AnalysisCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Generate reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export the ledger to a file
    Export(ExportArgs),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, default_value_t = 20)]
        n: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level);
    debug!("Log level set to {}", cli.log_level.to_string().to_lowercase());

    let paths = FintrackPaths::new()?;

    let Some(command) = cli.command else {
        println!("fintrack - personal finance ledger");
        println!();
        println!("Run 'fintrack --help' for usage information.");
        return Ok(());
    };

    if let Commands::Config = command {
        let settings = Settings::load_or_create(&paths)?;
        let store = cli.file.unwrap_or_else(|| paths.transactions_file());

        println!("fintrack Configuration");
        println!("======================");
        println!("Base directory: {}", paths.base_dir().display());
        println!("Ledger store:   {}", store.display());
        println!("Budgets file:   {}", budgets_file_for(&store).display());
        println!("Settings file:  {}", paths.settings_file().display());
        println!("Audit log:      {}", audit_log_for(&store).display());
        println!();
        println!("Settings:");
        println!("  Recent count:  {}", settings.recent_count);
        println!("  Trend days:    {}", settings.trend_days);
        println!("  Audit enabled: {}", settings.audit_enabled);
        return Ok(());
    }

    let mut session = Session::open(paths, cli.file)?;

    match command {
        Commands::Transaction(cmd) => handle_transaction_command(&mut session, cmd)?,
        Commands::Analysis(cmd) => handle_analysis_command(&session, cmd)?,
        Commands::Budget(cmd) => handle_budget_command(&mut session, cmd)?,
        Commands::Report(cmd) => handle_report_command(&session, cmd)?,
        Commands::Export(args) => handle_export_command(&session, args)?,
        Commands::History { n } => handle_history_command(&session, n)?,
        // Handled before the ledger is opened
        Commands::Config => {}
    }

    Ok(())
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "{}={},{}={}",
            env!("CARGO_CRATE_NAME"),
            level,
            env!("CARGO_BIN_NAME"),
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
