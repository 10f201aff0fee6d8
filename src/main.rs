//! k6-report: HTML report generator CLI

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use k6_report::reporter::ConsoleReporter;
use k6_report::ReportConfig;
use std::path::PathBuf;
use std::process::ExitCode;

/// Generate a static HTML report from a k6 JSON summary
#[derive(Parser, Debug)]
#[command(name = "k6-report")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// k6 summary JSON (e.g. from --summary-export)
    input: PathBuf,

    /// HTML file to write
    output: PathBuf,
}

fn main() -> ExitCode {
    let console = ConsoleReporter::new();
    match run(&console) {
        Ok(code) => code,
        Err(e) => {
            console.error(e);
            ExitCode::from(1)
        }
    }
}

fn run(console: &ConsoleReporter) -> Result<ExitCode> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(ExitCode::SUCCESS);
        }
        Err(_) => {
            console.usage();
            return Ok(ExitCode::from(2));
        }
    };

    console.start(&args.input, &args.output);

    let report = k6_report::generate(&args.input, &args.output, &ReportConfig::default())?;
    console.generated(&args.output, report.html.len(), &report.evaluation);

    Ok(ExitCode::SUCCESS)
}
