use std::{error::Error, path::PathBuf, process::exit};

use clap::{ArgAction, Parser, Subcommand};
use placeholder::{
    DEFAULT_END, DEFAULT_START, Delimiter, EnvironmentProvider, PlaceholderError,
    StructuredFileProvider, ValueProvider,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Manage the placeholders in text files
#[derive(Parser, Debug)]
#[command(
    name = "placeholder",
    author,
    version,
    about = "Manage the placeholders in text files",
    long_about = None,
    arg_required_else_help = true
)]
struct Args {
    /// Token that starts a placeholder
    #[arg(short, long, global = true, env = "PLACEHOLDER_START", default_value = DEFAULT_START)]
    start: String,

    /// Token that ends a placeholder
    #[arg(short, long, global = true, env = "PLACEHOLDER_END", default_value = DEFAULT_END)]
    end: String,

    /// Log more details to stderr (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List placeholders in the provided files
    #[command(visible_alias = "ls")]
    List {
        /// Files to scan
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Print names as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Replace placeholders in the provided files
    #[command(visible_alias = "rp")]
    Replace {
        /// JSON, YAML, or properties file with values. Defaults to the environment.
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Files to rewrite in place
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() {
    let args = Args::parse();

    init_tracing(args.verbose);

    let delimiter = Delimiter::from_literals(args.start, args.end);

    debug!(%delimiter, "using delimiter");

    let result = match args.command {
        Commands::List { files, json } => list(&files, &delimiter, json),
        Commands::Replace { input, files } => replace(&files, &delimiter, input),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        exit(1);
    }
}

fn list(files: &[PathBuf], delimiter: &Delimiter, json: bool) -> Result<(), Box<dyn Error>> {
    let names = placeholder::list(files, delimiter);

    if json {
        println!("{}", serde_json::to_string_pretty(&names)?);

        return Ok(());
    }

    for name in names {
        println!("{name}");
    }

    Ok(())
}

fn replace(
    files: &[PathBuf],
    delimiter: &Delimiter,
    input: Option<PathBuf>,
) -> Result<(), Box<dyn Error>> {
    let provider: Box<dyn ValueProvider> = match input {
        Some(path) => Box::new(
            StructuredFileProvider::load(path).map_err(PlaceholderError::from)?,
        ),
        None => Box::new(EnvironmentProvider::new()),
    };

    placeholder::replace(files, delimiter, provider.as_ref())?;

    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` or else the verbosity flag
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
