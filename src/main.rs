use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pesbuddy::cli::{handle_audit_command, handle_init_command, handle_session, handle_stats_command};
use pesbuddy::config::{paths::PesBuddyPaths, settings::Settings};
use pesbuddy::storage::Storage;

/// Environment variable holding the diagnostics filter
const LOG_ENV: &str = "PESBUDDY_LOG";

#[derive(Parser)]
#[command(
    name = "pesbuddy",
    author = "PES Buddy Contributors",
    version,
    about = "Expense tracking, scooter booking and canteen ordering in one terminal",
    long_about = "PES Buddy is a terminal companion for campus life. After registering \
                  or logging in you can summarize weekly expenses, book a scooter \
                  between campus blocks, or order food from the canteens."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize data directory, settings and starter menus
    Init,

    /// Show current configuration and paths
    Config,

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
        /// Only show entries for this user
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Show booking and ordering totals
    Stats {
        /// Only count activity by this user
        #[arg(short, long)]
        user: Option<String>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = PesBuddyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Init) => handle_init_command(&paths, &settings)?,
        Some(Commands::Config) => {
            println!("PES Buddy Configuration");
            println!("=======================");
            println!("Data directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Credential store: {}", paths.users_file().display());
            println!("Menu directory:   {}", settings.resolve_menu_dir(&paths).display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Max login attempts: {}", settings.max_login_attempts);
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Audit enabled:      {}", settings.audit_enabled);
        }
        Some(Commands::Audit { limit, user }) => {
            let storage = Storage::new(paths, &settings)?;
            handle_audit_command(&storage, limit, user.as_deref())?;
        }
        Some(Commands::Stats { user }) => {
            let storage = Storage::new(paths, &settings)?;
            handle_stats_command(&storage, &settings, user.as_deref())?;
        }
        None => {
            handle_session(&paths, &settings)?;
        }
    }

    Ok(())
}
