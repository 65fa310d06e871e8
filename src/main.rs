use anyhow::{Context, anyhow};
use clap::Parser;
use gp102_poi::coord::Coordinates;
use gp102_poi::poi::{self, DecodeError};
use gp102_poi::{Icon, PoiRecord};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Reads and writes GP-102 POI files.
///
/// Without options, every FILE is decoded and printed as
/// `<name> (<icon>) <latitude> <longitude>`. With `-e`, a POI is written to
/// standard output instead.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Options {
    /// Encode a POI from NAME and COORDINATES (e.g. "N 48° 30' 15\" E 2° 20'")
    #[arg(
        short = 'e',
        long = "encode",
        num_args = 2,
        value_names = ["NAME", "COORDINATES"],
        conflicts_with = "files"
    )]
    encode: Option<Vec<String>>,

    /// POI files to decode
    #[arg(required_unless_present = "encode")]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = match Options::try_parse() {
        Ok(options) => options,
        Err(err) => {
            // --help and --version are reported through the error path too
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let result = match options.encode {
        Some(values) => <[String; 2]>::try_from(values)
            .map_err(|values| {
                anyhow!("expected NAME and COORDINATES, got {} values", values.len())
            })
            .and_then(|[name, coordinates]| encode(&name, &coordinates)),
        None => return decode_all(&options.files),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn decode_all(files: &[PathBuf]) -> ExitCode {
    let mut stdout = io::stdout().lock();
    let mut failed = false;
    for path in files {
        match read_file(path) {
            Ok(record) => {
                if let Err(warning) = record.check_signature() {
                    eprintln!(
                        "Warning: {}: {warning}, continuing anyway.",
                        path.display()
                    );
                }
                if let Err(err) = record.write_line(&mut stdout) {
                    eprintln!("Error writing to standard output: {err}");
                    failed = true;
                }
            }
            Err(DecodeError::Io(err)) => {
                eprintln!("Error reading from `{}': {err}", path.display());
                failed = true;
            }
            Err(err) => {
                eprintln!("Error: {}: {err}", path.display());
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn read_file(path: &Path) -> Result<PoiRecord, DecodeError> {
    let file = File::open(path)?;
    poi::read_record(BufReader::new(file))
}

fn encode(name: &str, coordinates: &str) -> anyhow::Result<()> {
    let position: Coordinates = coordinates
        .parse()
        .map_err(|err: gp102_poi::coord::ParseError| {
            anyhow!("{err}\n{}", err.caret(coordinates))
        })
        .context("invalid coordinates")?;

    let record = PoiRecord::new(name, Icon::default(), position.latitude, position.longitude)
        .context("invalid name")?;

    let mut writer = poi::Writer::new(io::stdout().lock());
    writer
        .write(&record)
        .context("failed to write POI to standard output")?;

    Ok(())
}
