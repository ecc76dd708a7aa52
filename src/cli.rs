use crate::errors::{Error, Result};
use crate::runs::EditRun;
use crate::stats::MatchStats;
use crate::{compare_edits, stats, EditType};
use clap::{ArgAction, Parser, ValueEnum};
use colored::Colorize;
use log::{debug, info};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(Parser, Debug)]
#[clap(name = "wordiff", version, about = "Compare two texts word by word")]
pub struct Cli {
    /// The original text, or its path with --files
    pub a: String,
    /// The revised text, or its path with --files
    pub b: String,
    /// Read both texts from files
    #[clap(short, long)]
    pub files: bool,
    /// Print match statistics after the runs
    #[clap(short, long)]
    pub stats: bool,
    /// Print only the match statistics
    #[clap(long)]
    pub stats_only: bool,
    #[clap(long, value_enum, default_value = "text")]
    pub format: Format,
    #[clap(long, value_enum, default_value = "auto")]
    pub color: ColorWhen,
    /// Log more, up to -vvv
    #[clap(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(Serialize)]
struct Report<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    runs: Option<&'a [EditRun]>,
    stats: Option<&'a MatchStats>,
}

/// Initialise `env_logger`, letting `RUST_LOG` override the `-v` level.
pub fn init_logging(verbose: u64) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init();
}

pub fn execute<O: Write>(opt: &Cli, mut stdout: O, isatty: bool) -> Result<()> {
    if let Some(enabled) = color_override(opt.color, isatty) {
        colored::control::set_override(enabled);
    }

    let (a, b) = if opt.files {
        (read_document(Path::new(&opt.a))?, read_document(Path::new(&opt.b))?)
    } else {
        (opt.a.clone(), opt.b.clone())
    };
    info!("comparing {} and {} characters", a.len(), b.len());

    let runs = compare_edits(&a, &b);
    let match_stats = stats::summarize(&runs, &a, &b);
    debug!("{:?}", match_stats);

    match opt.format {
        Format::Json => {
            let report = Report {
                runs: (!opt.stats_only).then(|| runs.as_slice()),
                stats: match_stats.as_ref(),
            };
            serde_json::to_writer_pretty(&mut stdout, &report)?;
            writeln!(stdout)?;
        }
        Format::Text => {
            if !opt.stats_only {
                for run in &runs {
                    print_run(&mut stdout, run)?;
                }
            }
            if opt.stats || opt.stats_only {
                print_stats(&mut stdout, match_stats.as_ref())?;
            }
        }
    }

    Ok(())
}

/// Auto on a tty leaves the decision to `colored`, which honours `NO_COLOR`
/// and `CLICOLOR`.
fn color_override(when: ColorWhen, isatty: bool) -> Option<bool> {
    match when {
        ColorWhen::Always => Some(true),
        ColorWhen::Never => Some(false),
        ColorWhen::Auto if !isatty => Some(false),
        ColorWhen::Auto => None,
    }
}

fn read_document(path: &Path) -> Result<String> {
    let data = fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    String::from_utf8(data).map_err(|_| Error::InvalidUtf8(path.to_path_buf()))
}

fn print_run<O: Write>(stdout: &mut O, run: &EditRun) -> Result<()> {
    let line = run.to_string().replace(['\r', '\n'], " ");

    match run.tag {
        EditType::Eql => writeln!(stdout, "{}", line)?,
        EditType::Ins => writeln!(stdout, "{}", line.green())?,
        EditType::Del => writeln!(stdout, "{}", line.red())?,
    }

    Ok(())
}

fn print_stats<O: Write>(stdout: &mut O, match_stats: Option<&MatchStats>) -> Result<()> {
    let match_stats = match match_stats {
        Some(match_stats) => match_stats,
        None => {
            writeln!(stdout, "{}", "no overlap".bold())?;
            return Ok(());
        }
    };

    writeln!(stdout, "max_match_len: {}", match_stats.max_match_len)?;
    writeln!(stdout, "avg_match_len: {:.2}", match_stats.avg_match_len)?;
    writeln!(stdout, "tot_match_len: {}", match_stats.tot_match_len)?;
    writeln!(stdout, "num_edits: {}", match_stats.num_edits)?;
    writeln!(stdout, "pct_matching: {:.2}", match_stats.pct_matching)?;

    Ok(())
}
