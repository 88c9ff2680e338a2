//! Command-line arguments

use chrono::{NaiveDate, NaiveDateTime};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use supervision_domain::{Period, ShiftSlot, SupervisionRole};

/// Operating-room supervision planning checks
#[derive(Parser, Debug)]
#[command(name = "bloc-supervision")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
Examples:
  bloc-supervision check --layout bloc.json --plan 2024-01-15.json \\
      --supervisor 1 --room 3 --period morning --role supervision
  bloc-supervision validate --layout bloc.json --plan 2024-01-15.json
  bloc-supervision save --layout bloc.json --plan 2024-01-15.json
  bloc-supervision rest --shift 2024-01-16T08:00/2024-01-16T18:00 \\
      --existing 2024-01-15T20:00/2024-01-16T02:00")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check one candidate assignment against a day plan
    Check(CheckArgs),

    /// Validate a whole day plan
    Validate(PlanArgs),

    /// Save a day plan into the planning store
    Save(SaveArgs),

    /// Show the stored plan of a date
    Show(ShowArgs),

    /// Check rest periods and weekly load for a proposed shift
    Rest(RestArgs),

    /// Show the effective rule catalog and configuration issues
    Config,
}

/// Theatre layout and day plan files
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Layout JSON file (sectors and rooms)
    #[arg(long, value_name = "PATH")]
    pub layout: PathBuf,

    /// Day plan JSON file
    #[arg(long, value_name = "PATH")]
    pub plan: PathBuf,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub files: PlanArgs,

    /// Supervisor identifier
    #[arg(long)]
    pub supervisor: u32,

    /// Room identifier
    #[arg(long)]
    pub room: u32,

    /// Half-day slot (morning, afternoon)
    #[arg(long)]
    pub period: Period,

    /// Role in the room (supervision, anesthesia)
    #[arg(long, default_value = "supervision")]
    pub role: SupervisionRole,

    /// Write the assignment into the plan file when it passes
    #[arg(long)]
    pub apply: bool,
}

#[derive(Args, Debug)]
pub struct SaveArgs {
    #[command(flatten)]
    pub files: PlanArgs,

    /// Save without validating first
    #[arg(long)]
    pub no_validate: bool,

    /// Override the configured store directory
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Date of the plan (YYYY-MM-DD)
    #[arg(long)]
    pub date: NaiveDate,

    /// Override the configured store directory
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct RestArgs {
    /// Proposed shift, START/END (e.g. 2024-01-16T08:00/2024-01-16T18:00)
    #[arg(long, value_parser = parse_shift)]
    pub shift: ShiftSlot,

    /// Shift already held by the same person (repeatable)
    #[arg(long, value_parser = parse_shift)]
    pub existing: Vec<ShiftSlot>,
}

fn parse_shift(value: &str) -> Result<ShiftSlot, String> {
    let (start, end) = value
        .split_once('/')
        .ok_or_else(|| format!("expected START/END, got '{value}'"))?;
    let start = parse_instant(start)?;
    let end = parse_instant(end)?;
    if end <= start {
        return Err(format!("shift must end after it starts: '{value}'"));
    }
    Ok(ShiftSlot::new(start, end))
}

fn parse_instant(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value.trim(), "%Y-%m-%dT%H:%M")
        .map_err(|e| format!("invalid instant '{value}': {e}"))
}
