//! toolshelf: browse a curated tool directory, like and save tools, and
//! manage user-added entries from the admin commands

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use toolshelf::catalog::{PreferenceKind, ToolDraft};
use toolshelf::config::Settings;

mod commands;

#[derive(Parser)]
#[command(name = "toolshelf")]
#[command(about = "Curated tool directory", long_about = None)]
#[command(version)]
struct Cli {
    /// Storage database file (default: <data dir>/storage.db)
    #[arg(long, global = true)]
    storage: Option<PathBuf>,

    /// Keep all state in memory for this run only
    #[arg(long, global = true, conflicts_with = "storage")]
    ephemeral: bool,

    /// Verbose logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List tools, most liked first
    Browse {
        /// Category: All, Development, Design, Productivity, AI, Other
        #[arg(long, short, default_value = "All")]
        category: String,

        /// Case-insensitive text to find in title or description
        #[arg(long, short, default_value = "")]
        search: String,

        /// Limit number of results
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single tool
    Show {
        id: String,

        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// List categories present in the catalog
    Categories,

    /// Like or unlike a tool
    Like { id: String },

    /// Save or unsave a tool
    Save { id: String },

    /// List saved tools
    Saves {
        /// Case-insensitive text to find in title or description
        #[arg(long, short, default_value = "")]
        search: String,

        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage user-added tools
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },
}

#[derive(Subcommand)]
enum AdminCommands {
    /// Start an admin session (password from TOOLSHELF_ADMIN_PASSWORD)
    Login { password: String },

    /// End the admin session
    Logout,

    /// Show whether an admin session is active
    Status,

    /// List all tools with built-in/custom totals
    List {
        #[arg(long, short, default_value = "All")]
        category: String,

        #[arg(long, short, default_value = "")]
        search: String,

        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a new tool
    Add {
        #[command(flatten)]
        fields: ToolFields,
    },

    /// Edit a user-added tool (only the given fields change)
    Edit {
        id: String,

        #[command(flatten)]
        fields: ToolFields,
    },

    /// Delete a user-added tool
    Delete {
        id: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args)]
struct ToolFields {
    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    description: Option<String>,

    /// Image URL
    #[arg(long)]
    image: Option<String>,

    /// Tool homepage URL
    #[arg(long)]
    link: Option<String>,

    /// Development, Design, Productivity, AI or Other
    #[arg(long)]
    category: Option<String>,

    /// Baseline like count (non-negative)
    #[arg(long)]
    initial_likes: Option<String>,
}

impl From<ToolFields> for ToolDraft {
    fn from(fields: ToolFields) -> Self {
        ToolDraft {
            title: fields.title,
            description: fields.description,
            image: fields.image,
            link: fields.link,
            category: fields.category,
            initial_likes: fields.initial_likes,
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "toolshelf=debug"
    } else {
        "toolshelf=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = Settings::from_env()?;
    let storage_path = if cli.ephemeral {
        None
    } else {
        Some(cli.storage.unwrap_or_else(|| settings.storage_path.clone()))
    };
    tracing::debug!(?storage_path, id_strategy = ?settings.id_strategy, "starting");

    let shelf = commands::utils::open_shelf(&settings, storage_path.as_deref())?;

    match cli.command {
        Commands::Browse {
            category,
            search,
            limit,
            json,
        } => {
            let options = commands::browse::BrowseOptions {
                category,
                search,
                limit,
                json,
            };
            println!("{}", commands::browse::execute(&shelf, options)?);
        }

        Commands::Show { id, json } => {
            println!("{}", commands::browse::show(&shelf, &id, json)?);
        }

        Commands::Categories => {
            println!("{}", commands::browse::categories(&shelf));
        }

        Commands::Like { id } => {
            println!(
                "{}",
                commands::prefs::toggle(&shelf, PreferenceKind::Liked, &id)?
            );
        }

        Commands::Save { id } => {
            println!(
                "{}",
                commands::prefs::toggle(&shelf, PreferenceKind::Saved, &id)?
            );
        }

        Commands::Saves { search, json } => {
            println!("{}", commands::browse::saves(&shelf, &search, json)?);
        }

        Commands::Admin { command } => match command {
            AdminCommands::Login { password } => commands::admin::login(&shelf, &password)?,
            AdminCommands::Logout => commands::admin::logout(&shelf)?,
            AdminCommands::Status => println!("{}", commands::admin::status(&shelf)),
            AdminCommands::List {
                category,
                search,
                json,
            } => {
                println!(
                    "{}",
                    commands::admin::list(&shelf, &category, &search, json)?
                );
            }
            AdminCommands::Add { fields } => commands::admin::add(&shelf, fields.into())?,
            AdminCommands::Edit { id, fields } => {
                commands::admin::edit(&shelf, &id, fields.into())?
            }
            AdminCommands::Delete { id, yes } => commands::admin::delete(&shelf, &id, yes)?,
        },
    }

    Ok(())
}
