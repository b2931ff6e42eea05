use bingo_index::prelude::*;
use clap::{Parser, Subcommand, ValueEnum};
use std::env;
use std::process::ExitCode;
use thiserror::Error;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum FormatArg {
    Smiles,
    Molfile,
    ReactionSmiles,
    Rxnfile,
}
impl From<FormatArg> for StructureFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Smiles => Self::Smiles,
            FormatArg::Molfile => Self::Molfile,
            FormatArg::ReactionSmiles => Self::ReactionSmiles,
            FormatArg::Rxnfile => Self::Rxnfile,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the index name for a key constant, like BINGO_MOLECULE
    Key { key: String },
    /// Print the index name for a record kind, like "molecule"
    Kind { kind: String },
    /// Print the index a structure in the given format would be stored in
    Format {
        format: FormatArg,
        /// Structure text. If given, a record is built to check it isn't blank.
        structure: Option<String>,
    },
    /// List every registered key and its index name
    List,
}

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Log more, can be repeated
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Index(#[from] IndexError),
    #[error(transparent)]
    Record(#[from] RecordError),
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let targets = match env::var("BINGO_INDEX_LOG") {
        Ok(var) => var.parse::<Targets>().unwrap_or_else(|e| {
            eprintln!("Ignoring `BINGO_INDEX_LOG={var:?}`: {e}");
            Targets::new().with_default(default)
        }),
        Err(env::VarError::NotPresent) => Targets::new().with_default(default),
        Err(env::VarError::NotUnicode(_)) => {
            eprintln!("Error in BINGO_INDEX_LOG environment variable: not valid UTF-8");
            Targets::new().with_default(default)
        }
    };
    tracing_subscriber::registry()
        .with(targets)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Key { key } => println!("{}", IndexName::from_key(&key)?),
        Command::Kind { kind } => println!("{}", IndexName::for_kind_str(&kind)?),
        Command::Format { format, structure } => {
            let format = StructureFormat::from(format);
            let name = match structure {
                Some(text) => RecordBuilder::new()
                    .with_structure(Structure::new(format, text))
                    .build_inferred()?
                    .index_name(),
                None => IndexName::for_kind(format.record_kind()),
            };
            println!("{name}");
        }
        Command::List => {
            for key in IndexKey::ALL {
                println!("{key}\t{}", IndexName::new(key));
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
