use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use termcolor::ColorChoice;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trieseek::index::{build_index, stats, IndexConfig};
use trieseek::output::{self, print_outcome, print_outcome_json};
use trieseek::query::{run_query, run_repl};

#[derive(Parser)]
#[command(name = "trieseek")]
#[command(about = "Index the lines of a text file and look up substrings")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// File to index and query interactively (when no subcommand is given)
    file: Option<PathBuf>,

    /// JSON file with index options
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Only index the first N characters of each suffix
    #[arg(long, global = true, value_name = "N")]
    max_suffix_len: Option<usize>,

    /// Hide the progress bar while indexing
    #[arg(long, global = true)]
    no_progress: bool,

    /// When to use colours
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up strings in a file (interactive when no query is given)
    Search {
        /// File to index
        file: PathBuf,

        /// Strings to look up
        query: Vec<String>,

        /// Print one JSON object per query
        #[arg(long)]
        json: bool,
    },
    /// Show index statistics for a file
    Stats {
        /// File to index
        file: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl From<ColorMode> for ColorChoice {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Auto => ColorChoice::Auto,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    let color = ColorChoice::from(cli.color);

    match cli.command {
        Some(Commands::Search { file, query, json }) => {
            if query.is_empty() {
                interactive(&file, &config, color)?;
            } else {
                answer(&file, &query, &config, color, json)?;
            }
        }
        Some(Commands::Stats { file, json }) => {
            stats::show_stats(&file, &config, json)?;
        }
        None => match cli.file {
            Some(file) => interactive(&file, &config, color)?,
            None => {
                use clap::CommandFactory;
                Cli::command().print_help()?;
            }
        },
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "trieseek=debug" } else { "trieseek=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Merge the optional config file with command-line overrides
fn load_config(cli: &Cli) -> Result<IndexConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            serde_json::from_str(&content).context("Failed to parse config file")?
        }
        None => IndexConfig::default(),
    };

    if cli.max_suffix_len.is_some() {
        config.max_suffix_len = cli.max_suffix_len;
    }
    if cli.no_progress {
        config.show_progress = false;
    }

    Ok(config)
}

fn interactive(file: &Path, config: &IndexConfig, color: ColorChoice) -> Result<()> {
    println!("Building a suffix trie for {}.", file.display());
    println!("This may take some time, please be patient.");

    let built = build_index(file, config)?;

    println!("Done building suffix trie ({} nodes)!", built.index.node_count());
    println!("*******************************************************************\n");

    let mut out = output::stdout(color);
    let name = file.display().to_string();
    run_repl(&built.index, &name, io::stdin().lock(), &mut out)?;

    Ok(())
}

fn answer(
    file: &Path,
    queries: &[String],
    config: &IndexConfig,
    color: ColorChoice,
    json: bool,
) -> Result<()> {
    let built = build_index(file, config)?;
    let mut out = output::stdout(color);

    for query in queries {
        let outcome = run_query(&built.index, query);
        if json {
            print_outcome_json(&mut out, query, &outcome)?;
        } else {
            print_outcome(&mut out, query, &outcome)?;
        }
    }

    Ok(())
}
