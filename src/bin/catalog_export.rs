//! Serializes the shipped catalog tables into the dashboard's JSON document.
//!
//! This binary is the authoritative exporter for the static dashboard data:
//! it assembles the status-category table for the requested view together
//! with the sort-filter options, optionally validates the document against
//! the shipped schema, and prints a single JSON document to stdout (or writes
//! it to `--output`).

use anyhow::{Context, Result, bail};
use readiness_catalog::{CatalogExport, DashboardView, validate_export};
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

const USAGE: &str =
    "usage: catalog-export --view <today|historical> [--output <path>] [--check] [--pretty]";

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse()?;

    let export = CatalogExport::for_view(args.view);
    let document = serde_json::to_value(&export)?;

    if args.check {
        validate_export(&document)?;
    }

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{rendered}\n"))
                .with_context(|| format!("writing catalog export to {}", path.display()))?;
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

/// Parsed command-line arguments for one export run.
struct CliArgs {
    view: DashboardView,
    output: Option<PathBuf>,
    check: bool,
    pretty: bool,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args_os().skip(1);
        let mut view: Option<DashboardView> = None;
        let mut output: Option<PathBuf> = None;
        let mut check = false;
        let mut pretty = false;

        while let Some(arg_os) = args.next() {
            let arg = os_to_string(arg_os);
            match arg.as_str() {
                "--view" => view = Some(parse_view(&next_value(&mut args, "--view")?)?),
                "--output" => output = Some(PathBuf::from(next_value(&mut args, "--output")?)),
                "--check" => check = true,
                "--pretty" => pretty = true,
                "--help" | "-h" => bail!("{USAGE}"),
                other => bail!("Unknown argument '{other}'\n{USAGE}"),
            }
        }

        let Some(view) = view else {
            bail!("Missing required --view\n{USAGE}");
        };

        Ok(Self {
            view,
            output,
            check,
            pretty,
        })
    }
}

fn parse_view(value: &str) -> Result<DashboardView> {
    match value {
        "today" => Ok(DashboardView::Today),
        "historical" | "history" => Ok(DashboardView::Historical),
        other => bail!("Unknown view '{other}'; expected 'today' or 'historical'"),
    }
}

fn next_value(args: &mut impl Iterator<Item = OsString>, flag: &str) -> Result<String> {
    match args.next() {
        Some(value) => Ok(os_to_string(value)),
        None => bail!("Missing value for {flag}"),
    }
}

fn os_to_string(value: OsString) -> String {
    value.to_string_lossy().into_owned()
}
