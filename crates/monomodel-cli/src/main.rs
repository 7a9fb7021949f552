//! MonoModel CLI
//!
//! Opens one SQLite database, injects it into the connection holder once and
//! drives the demo entities through it.

use clap::{Parser, Subcommand, ValueEnum};
use monomodel_core::logging_facility::{self, Profile};
use monomodel_store::{db, Db};
use std::path::PathBuf;

mod commands;
mod models;

#[derive(Debug, Parser)]
#[command(name = "monomodel")]
#[command(about = "MonoModel - Active-record demo over SQLite", long_about = None)]
struct Cli {
    /// SQLite database file
    #[arg(long, env = "MONOMODEL_DB", default_value = "monomodel.db", global = true)]
    db: PathBuf,

    /// Logging profile
    #[arg(long, env = "MONOMODEL_LOG", value_enum, default_value_t = LogMode::Off, global = true)]
    log: LogMode,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogMode {
    Dev,
    Prod,
    Off,
}

impl LogMode {
    fn profile(self) -> Option<Profile> {
        match self {
            LogMode::Dev => Some(Profile::Development),
            LogMode::Prod => Some(Profile::Production),
            LogMode::Off => None,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create the demo tables
    Init,
    /// Customer operations
    Customer(commands::customer::CustomerArgs),
    /// User operations
    User(commands::user::UserArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Some(profile) = cli.log.profile() {
        logging_facility::init(profile);
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let conn = db::open(&cli.db)?;
    db::configure(&conn)?;

    let db = Db::new();
    db.connect(Some(conn))?;

    match cli.command {
        Commands::Init => commands::init::execute(&db),
        Commands::Customer(args) => commands::customer::execute(&db, args),
        Commands::User(args) => commands::user::execute(&db, args),
    }
}
