// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `trajc`: convert `ST_TRAJECTORY(...)` text to binary records and back.
//!
//! Records travel as lower-case hex. Any `<INPUT>` argument may be `-` to read
//! from stdin.
//!
//! Codec settings come from `codec.json` in the config directory; command-line
//! flags override the stored values, and `trajc config --save` persists them.

// The CLI is expected to print to stdout/stderr.
#![allow(clippy::print_stdout, clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use traj_codec::{
    decode_with, render, to_wkt, CodecConfig, SizeMismatchPolicy, TrajectoryRecord,
};
use traj_config::ConfigDir;
use traj_geom::{format_time, Timestamp};

#[derive(Parser)]
#[command(
    name = "trajc",
    version,
    about = "Convert ST_TRAJECTORY text to binary trajectory records and back",
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    codec: CodecArgs,

    /// Directory holding `codec.json` (defaults to the platform config dir).
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Log decode steps (same as `RUST_LOG=debug`).
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode trajectory text and print the record as hex.
    Decode {
        /// `ST_TRAJECTORY(...)` text, or `-` for stdin.
        input: String,
    },
    /// Render a hex record as text.
    Render {
        /// Hex record, or `-` for stdin.
        input: String,
        /// Emit `ST_TRAJECTORY(...)` text instead of the summary form.
        #[arg(long)]
        wkt: bool,
    },
    /// Print the header fields and points of a hex record.
    Inspect {
        /// Hex record, or `-` for stdin.
        input: String,
    },
    /// Print the effective codec settings as JSON.
    Config {
        /// Persist the effective settings to `codec.json`.
        #[arg(long)]
        save: bool,
    },
}

/// Command-line overrides for [`CodecConfig`].
#[derive(Args, Debug, Default)]
struct CodecArgs {
    /// Log size mismatches instead of failing the decode.
    #[arg(long, global = true)]
    warn_on_size_mismatch: bool,

    /// Accept intervals whose start lies after their end.
    #[arg(long, global = true)]
    allow_inverted_interval: bool,

    /// Largest accepted point count.
    #[arg(long, global = true, value_name = "N")]
    max_points: Option<usize>,
}

impl CodecArgs {
    fn apply(&self, mut config: CodecConfig) -> CodecConfig {
        if self.warn_on_size_mismatch {
            config.size_mismatch = SizeMismatchPolicy::Warn;
        }
        if self.allow_inverted_interval {
            config.allow_inverted_interval = true;
        }
        if let Some(max) = self.max_points {
            config.max_points = max;
        }
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_dir = open_config(cli.config_dir);
    let stored = match &config_dir {
        Some(dir) => dir.load_codec().context("failed to load codec config")?,
        None => CodecConfig::default(),
    };
    let config = cli.codec.apply(stored);
    debug!(?config, "effective codec config");

    match cli.command {
        Commands::Decode { input } => {
            let text = read_input(&input)?;
            let record = decode_with(&text, &config).context("failed to decode trajectory text")?;
            println!("{}", record.to_hex());
        }
        Commands::Render { input, wkt } => {
            let record = read_record(&input)?;
            let text = (if wkt { to_wkt(&record) } else { render(&record) })
                .context("failed to format record times")?;
            println!("{text}");
        }
        Commands::Inspect { input } => {
            let record = read_record(&input)?;
            print!("{}", describe(&record));
        }
        Commands::Config { save } => {
            if save {
                let dir = config_dir.context("no config directory available")?;
                let path = dir
                    .save_codec(&config)
                    .context("failed to save codec config")?;
                eprintln!("saved {}", path.display());
            }
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// An explicit directory always wins; the platform directory is best-effort.
fn open_config(dir: Option<PathBuf>) -> Option<ConfigDir> {
    match dir {
        Some(dir) => Some(ConfigDir::at(dir)),
        None => match ConfigDir::platform() {
            Ok(dir) => Some(dir),
            Err(err) => {
                warn!(%err, "config directory unavailable; using defaults");
                None
            }
        },
    }
}

fn read_input(arg: &str) -> Result<String> {
    if arg != "-" {
        return Ok(arg.to_owned());
    }
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("failed to read stdin")?;
    Ok(text)
}

fn read_record(arg: &str) -> Result<TrajectoryRecord> {
    let text = read_input(arg)?;
    TrajectoryRecord::from_hex(&text).context("invalid trajectory record")
}

fn time_text(ts: Timestamp) -> String {
    format_time(ts).unwrap_or_else(|_| format!("{} us", ts.micros()))
}

fn describe(record: &TrajectoryRecord) -> String {
    let duration = record
        .duration()
        .map_or_else(|_| "n/a".to_owned(), |d| d.to_string());
    let mut out = format!(
        "record_length: {}\nflags: {}\nstart_time: {}\nend_time: {}\nduration: {}\npoints: {}\n",
        record.record_length(),
        record.flags(),
        time_text(record.start_time()),
        time_text(record.end_time()),
        duration,
        record.num_points(),
    );
    for (index, point) in record.points().enumerate() {
        out.push_str(&format!("  {index}: {point}\n"));
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use traj_codec::decode;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_stored_config() {
        let stored = CodecConfig {
            max_points: 5,
            ..CodecConfig::default()
        };
        let args = CodecArgs {
            warn_on_size_mismatch: true,
            allow_inverted_interval: false,
            max_points: None,
        };
        let cfg = args.apply(stored);
        assert_eq!(cfg.size_mismatch, SizeMismatchPolicy::Warn);
        assert_eq!(cfg.max_points, 5);
        assert!(!cfg.allow_inverted_interval);

        let cli = Cli::try_parse_from(["trajc", "decode", "-", "--max-points", "9"]).unwrap();
        assert_eq!(cli.codec.apply(CodecConfig::default()).max_points, 9);
    }

    #[test]
    fn explicit_config_dir_is_used_as_given() {
        let dir = open_config(Some(PathBuf::from("/srv/trajc"))).unwrap();
        assert_eq!(dir.base(), std::path::Path::new("/srv/trajc"));
    }

    #[test]
    fn inline_input_is_used_verbatim() {
        assert_eq!(read_input("ST_TRAJECTORY(x)").unwrap(), "ST_TRAJECTORY(x)");
    }

    #[test]
    fn describe_lists_header_and_points() {
        let rec = decode(
            "ST_TRAJECTORY(2020-01-01 00:00:00;2020-01-01 01:00:00;POINT(1 2),2020-01-01 00:10:00;)",
        )
        .unwrap();
        assert_eq!(
            describe(&rec),
            "record_length: 40\nflags: 0\nstart_time: 2020-01-01 00:00:00\n\
end_time: 2020-01-01 01:00:00\nduration: PT3600S\npoints: 1\n  0: POINT(1 2)\n"
        );
    }
}
