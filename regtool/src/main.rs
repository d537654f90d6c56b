use std::io::Read;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};

use regload::{MemBackend, RegionSpec, RegisterTable, apply, provision, validate};

mod config;

#[derive(Parser)]
#[command(about = "Validate and apply hardware register maps")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check a register table for internal consistency
    Check {
        #[command(flatten)]
        source: TableSource,
    },
    /// Provision regions and apply the table to a fresh memory model
    Apply {
        #[command(flatten)]
        source: TableSource,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct TableSource {
    /// Built-in chip database
    #[arg(long, value_enum)]
    chip: Option<Chip>,

    /// TOML table file ('-' for stdin)
    #[arg(long)]
    file: Option<clio::Input>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Chip {
    Sc14481,
}

impl TableSource {
    fn load(self) -> anyhow::Result<(Vec<RegionSpec>, RegisterTable)> {
        match (self.chip, self.file) {
            (Some(Chip::Sc14481), None) => Ok((sc144xx::regions(), sc144xx::table())),
            (None, Some(mut file)) => {
                let mut text = String::new();
                file.read_to_string(&mut text)
                    .with_context(|| format!("could not read {file}"))?;
                config::TableFile::parse(&text)?.into_parts()
            }
            // clap's group guarantees exactly one source.
            _ => unreachable!(),
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Check { source } => check(source),
        Command::Apply { source } => run_apply(source),
    }
}

fn check(source: TableSource) -> anyhow::Result<ExitCode> {
    let (regions, table) = source.load()?;

    // Provision into a scratch backend first, so incoherent region sets
    // (overlaps, duplicate names) are caught as well.
    let mut backend = MemBackend::new();
    provision(&mut backend, &regions)?;

    match validate(&table, &regions) {
        Ok(_) => {
            println!(
                "{} register(s) in {} region(s): ok",
                table.len(),
                regions.len()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(errors) => {
            eprint!("{errors}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run_apply(source: TableSource) -> anyhow::Result<ExitCode> {
    let (regions, table) = source.load()?;

    let mut backend = MemBackend::new();
    let provisioned = provision(&mut backend, &regions)?;
    for region in provisioned.regions() {
        log::info!("region {:?}: {:?}", region.name, region.outcome);
    }

    let validated = match validate(&table, &regions) {
        Ok(validated) => validated,
        Err(errors) => {
            eprint!("{errors}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let report = apply(&mut backend, validated);
    println!(
        "{} applied, {} skipped, {} failed",
        report.applied(),
        report.skipped(),
        report.failed()
    );
    for failure in report.failures() {
        if let regload::EntryStatus::Failed(reason) = &failure.status {
            eprintln!(
                "failed: {} @ 0x{:06x}: {reason}",
                failure.name, failure.address
            );
        }
    }

    Ok(if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
