use bingewatcher::{
    AddShowRequest, BingeWatcherError, CatalogEntry, CatalogStore, ImdbApiProvider,
    ProgressEvent, Settings, ShowUpdate, Status, add_show, catalog, delete_show, toggle_notify,
    update_show,
};
use clap::{ArgAction, Parser, Subcommand};
use log::{LevelFilter, debug, error};
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;
use thiserror::Error;

#[derive(Parser)]
#[command(name = "bingewatcher", about, version)]
struct Cli {
    /// Path of the catalog database
    #[arg(long, env = "BINGEWATCHER_DB", global = true)]
    database: Option<PathBuf>,

    /// Base URL of the metadata API
    #[arg(long, env = "BINGEWATCHER_API_URL", global = true)]
    api_url: Option<String>,

    /// More log output, can be repeated
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Also write a debug log to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add tv shows into your local storage
    Add {
        /// Name of the show
        name: String,

        /// Link to the IMDb page for the show
        imdb_link: String,

        /// Watching status of the show
        #[arg(value_enum, default_value_t = Status::Watching)]
        status: Status,

        /// Number of the last watched episode
        #[arg(short, long, default_value_t = 0)]
        last_watched: u32,

        /// Rating for the show between 0 and 10
        #[arg(short, long, default_value_t = 0.0)]
        rating: f64,

        /// Get notified of new episodes (on by default)
        #[arg(long, conflicts_with = "no_notify")]
        notify: bool,

        /// Don't get notified of new episodes
        #[arg(short = 'n', long)]
        no_notify: bool,
    },

    /// Update information about shows
    Update {
        /// Name of the show you want to update
        name: String,

        /// Rename the show
        #[arg(short = 'n', long)]
        new_name: Option<String>,

        /// Number of the last watched episode
        #[arg(short, long)]
        last_watched: Option<u32>,

        /// Rating of the show
        #[arg(short, long)]
        rating: Option<f64>,

        /// Notification flag for the show (true/false)
        #[arg(short = 't', long)]
        notify: Option<bool>,

        /// Watching status of the show
        #[arg(short, long, value_enum)]
        status: Option<Status>,
    },

    /// Delete one show from storage
    Delete {
        /// Name of the show you want to delete
        name: String,

        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Print out the catalog with all new episodes
    #[command(alias = "list")]
    Catalog,

    /// Flip the notify flag of a show
    Notify {
        /// Name of the show
        name: String,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Command(#[from] BingeWatcherError),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl From<bingewatcher::StoreError> for CliError {
    fn from(err: bingewatcher::StoreError) -> Self {
        CliError::Command(err.into())
    }
}

impl From<bingewatcher::ConfigError> for CliError {
    fn from(err: bingewatcher::ConfigError) -> Self {
        CliError::Command(err.into())
    }
}

impl From<bingewatcher::MetadataRetrievalError> for CliError {
    fn from(err: bingewatcher::MetadataRetrievalError) -> Self {
        CliError::Command(err.into())
    }
}

/// Handles progress events and prints formatted output to stdout
fn handle_progress_event(event: ProgressEvent) {
    match event {
        ProgressEvent::FetchingMetadata { title_id } => {
            println!("Fetching episodes for {}...", title_id);
        }
        ProgressEvent::EpisodesFetched { count } => {
            println!("Found {} released episode(s)", count);
        }
        ProgressEvent::PendingEpisodesStored { show_name, count } => {
            if count > 0 {
                println!("{} new episode(s) to watch for '{}'", count, show_name);
            }
        }
        ProgressEvent::PendingEpisodesPruned { show_name, count } => {
            if count > 0 {
                println!("Cleared {} watched episode(s) of '{}'", count, show_name);
            }
        }
    }
}

fn print_entry(entry: &CatalogEntry) {
    let show = &entry.show;

    println!("{} [{}] - {}", show.name, show.title_id, show.status);
    println!(
        "  Progress: {}/{}  Rating: {:.1}  Notify: {}",
        show.last_watched,
        show.latest_episode,
        show.rating,
        if show.notify { "on" } else { "off" }
    );
    println!("  {}", show.imdb_link);

    for episode in &entry.pending {
        println!(
            "    E{:02} - {} ({:.1}){}",
            episode.number,
            episode.title,
            episode.rating,
            if episode.has_trailer() { " [trailer]" } else { "" }
        );
        if !episode.plot.is_empty() {
            println!("          {}", episode.plot);
        }
    }
}

fn print_catalog(store: &CatalogStore) -> Result<(), CliError> {
    let entries = catalog(store)?;

    if entries.is_empty() {
        println!("No shows in the catalog.");
        return Ok(());
    }

    for entry in &entries {
        print_entry(entry);
        println!();
    }

    let pending: usize = entries.iter().map(|e| e.pending.len()).sum();
    println!("{} show(s), {} new episode(s)", entries.len(), pending);
    Ok(())
}

/// Resolves the settings and opens the catalog, creating both on first use
fn open_catalog(
    database: Option<PathBuf>,
    api_url: Option<String>,
) -> Result<(Settings, CatalogStore), CliError> {
    let settings = Settings::resolve(database, api_url)?;
    debug!("Using catalog at {}", settings.database_path.display());

    let store = CatalogStore::open(&settings.database_path)?;
    Ok((settings, store))
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Add {
            name,
            imdb_link,
            status,
            last_watched,
            rating,
            notify,
            no_notify,
        } => {
            let request = AddShowRequest {
                name,
                imdb_link,
                status,
                last_watched,
                rating,
                notify: match (notify, no_notify) {
                    (true, _) => Some(true),
                    (_, true) => Some(false),
                    _ => None,
                },
            };
            // Nothing is created on disk for a request that can't succeed
            request.validate()?;

            let (settings, mut store) = open_catalog(cli.database, cli.api_url)?;
            let provider = ImdbApiProvider::with_base_url(&settings.api_url)?;

            let show = add_show(&mut store, &provider, request, handle_progress_event)?;
            println!("Added '{}'.\n", show.name);
            print_catalog(&store)?;
        }
        Command::Update {
            name,
            new_name,
            last_watched,
            rating,
            notify,
            status,
        } => {
            let update = ShowUpdate {
                new_name,
                last_watched,
                rating,
                notify,
                status,
            };

            if update.is_empty() {
                println!("Nothing to update.");
                return Ok(());
            }

            let (_, mut store) = open_catalog(cli.database, cli.api_url)?;
            let show = update_show(&mut store, &name, update, handle_progress_event)?;
            println!("Updated '{}'.", show.name);
        }
        Command::Delete { name, yes } => {
            let confirmed = yes
                || dialoguer::Confirm::new()
                    .with_prompt(format!("Are you sure you want to delete {}?", name))
                    .default(false)
                    .interact()?;

            if !confirmed {
                println!("Delete canceled.");
                return Ok(());
            }

            let (_, mut store) = open_catalog(cli.database, cli.api_url)?;
            delete_show(&mut store, &name)?;
            println!("Deleted successfully.");
        }
        Command::Catalog => {
            let (_, store) = open_catalog(cli.database, cli.api_url)?;
            print_catalog(&store)?;
        }
        Command::Notify { name } => {
            let (_, mut store) = open_catalog(cli.database, cli.api_url)?;
            let notify = toggle_notify(&mut store, &name)?;
            println!(
                "Notifications for '{}' are now {}.",
                name,
                if notify { "on" } else { "off" }
            );
        }
    }

    Ok(())
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let file_config = ConfigBuilder::new()
        .add_filter_allow_str("bingewatcher")
        .build();
    let term_config = ConfigBuilder::new()
        .add_filter_allow_str("bingewatcher")
        .set_time_level(LevelFilter::Off)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        log_level(verbose),
        term_config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    if let Some(path) = log_file {
        loggers.push(WriteLogger::new(
            LevelFilter::Debug,
            file_config,
            File::create(path)?,
        ));
    }

    CombinedLogger::init(loggers)?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.log_file.as_deref()) {
        eprintln!("Error: Failed to initialise logging: {}", e);
        process::exit(1);
    }

    if let Err(e) = run(cli) {
        debug!("{:?}", e);
        error!("{}", e);
        process::exit(1);
    }
}
