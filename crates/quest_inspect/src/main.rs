#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]

mod options;
mod report;

pub use options::*;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming};
use quest_engine_edit::{MapEditState, TilesetEditState};

#[derive(Parser, Debug)]
#[command(version, about = "Prints the editor model of quest maps and tilesets", long_about = None)]
pub struct Args {
    /// Log debug output to stderr as well
    #[clap(long, short, global = true, default_value_t = false)]
    verbose: bool,

    /// Output format, overrides options.toml
    #[clap(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the entities of a map with their presentation
    Map {
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Only list this layer
        #[clap(long)]
        layer: Option<i32>,

        /// Also list the field values of every entity
        #[clap(long, default_value_t = false)]
        fields: bool,
    },
    /// List the patterns of a tileset in index order
    Tileset {
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
    /// List the presentation defaults of every entity type
    EntityTypes,
}

fn start_logger(verbose: bool) -> Option<LoggerHandle> {
    let Some(log_dir) = Options::get_config_dir() else {
        eprintln!("Failed to create log file");
        return None;
    };
    let spec = if verbose { "debug" } else { "info" };
    let duplicate = if verbose { Duplicate::Debug } else { Duplicate::Warn };
    let result = Logger::try_with_env_or_str(spec).and_then(|logger| {
        logger
            .log_to_file(FileSpec::default().directory(&log_dir).basename("quest_inspect").suffix("log").suppress_timestamp())
            .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
            .duplicate_to_stderr(duplicate)
            .start()
    });
    match result {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Failed to start logger: {err}");
            None
        }
    }
}

fn print_map(path: &Path, layer: Option<i32>, fields: bool, options: &Options, format: OutputFormat) -> anyhow::Result<()> {
    let state = MapEditState::load(path).with_context(|| format!("Can't load map {}", path.display()))?;
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            report::write_map(&mut out, &state, layer.or(options.default_layer), fields || options.show_fields)?;
            print!("{out}");
        }
        OutputFormat::Toml => print!("{}", state.to_map_data()?.to_toml_string()?),
    }
    Ok(())
}

fn print_tileset(path: &Path, format: OutputFormat) -> anyhow::Result<()> {
    let state = TilesetEditState::load(path).with_context(|| format!("Can't load tileset {}", path.display()))?;
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            report::write_tileset(&mut out, &state)?;
            print!("{out}");
        }
        OutputFormat::Toml => print!("{}", state.tileset().to_toml_string()?),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _logger = start_logger(args.verbose);
    log::info!("Starting quest_inspect {}", env!("CARGO_PKG_VERSION"));

    let options = Options::load_options();
    let format = args.format.unwrap_or(options.output_format);

    match args.command {
        Command::Map { path, layer, fields } => print_map(&path, layer, fields, &options, format),
        Command::Tileset { path } => print_tileset(&path, format),
        Command::EntityTypes => {
            let mut out = String::new();
            report::write_entity_types(&mut out)?;
            print!("{out}");
            Ok(())
        }
    }
}
