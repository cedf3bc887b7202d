//! versebook - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use versebook::content::ContentStore;
use versebook::listing::{write_listing, ListingFormat};
use versebook::model::{Chapter, CHAPTER_COUNT};
use versebook::state::{ActiveFilter, DisplayOptions};
use versebook::view::StartupOptions;

/// versebook - browse Korean verses with Japanese renderings in the terminal
#[derive(Parser, Debug)]
#[command(name = "versebook")]
#[command(version)]
#[command(about = "Terminal browser for a bundled corpus of Korean and Japanese verses")]
pub struct Args {
    /// Start with a search filter on the Korean text
    #[arg(short, long, conflicts_with = "chapter")]
    pub search: Option<String>,

    /// Start with a chapter filter
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=CHAPTER_COUNT as i64))]
    pub chapter: Option<u8>,

    /// Open the detail view on entry N of the full list (1-based)
    #[arg(
        short,
        long,
        value_name = "N",
        conflicts_with = "list",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub open: Option<u32>,

    /// Print the filtered entries to stdout and exit
    #[arg(long)]
    pub list: bool,

    /// With --list, print JSON instead of text
    #[arg(long, requires = "list")]
    pub json: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Hide the romanization line
    #[arg(long)]
    pub hide_romanization: bool,

    /// Hide the commentary line
    #[arg(long)]
    pub hide_commentary: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Filter requested on the command line.
    fn initial_filter(&self) -> Result<ActiveFilter, Box<dyn std::error::Error>> {
        if let Some(query) = &self.search {
            return Ok(ActiveFilter::search(query.as_str()));
        }
        match self.chapter {
            Some(n) => Ok(ActiveFilter::Chapter(Chapter::new(n)?)),
            None => Ok(ActiveFilter::None),
        }
    }

    /// 0-based position for `--open`, checked against the store size.
    fn open_position(&self, total: usize) -> Result<Option<usize>, String> {
        match self.open {
            None => Ok(None),
            Some(n) => {
                let position = usize::try_from(n).unwrap_or(usize::MAX).saturating_sub(1);
                if position < total {
                    Ok(Some(position))
                } else {
                    Err(format!("--open {} is outside 1..={}", n, total))
                }
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = versebook::config::load_config_with_precedence(args.config.clone())?;
        let merged = versebook::config::merge_config(config_file);
        let with_env = versebook::config::apply_env_overrides(merged);
        versebook::config::apply_cli_overrides(
            with_env,
            args.hide_romanization,
            args.hide_commentary,
        )
    };

    versebook::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let store = ContentStore::load();
    let initial_filter = args.initial_filter()?;
    let open_position = args.open_position(store.len())?;
    let display = DisplayOptions {
        show_romanization: config.show_romanization,
        show_commentary: config.show_commentary,
    };

    if args.list {
        let format = if args.json {
            ListingFormat::Json
        } else {
            ListingFormat::Plain
        };
        let positions = initial_filter.positions(store.entries());
        info!(count = positions.len(), ?format, "Writing listing");
        let stdout = std::io::stdout();
        write_listing(&mut stdout.lock(), &store, &positions, format, display)?;
        return Ok(());
    }

    versebook::view::run_with_options(
        store,
        StartupOptions {
            initial_filter,
            open_position,
            display,
            no_color: args.no_color,
        },
    )?;

    Ok(())
}
