use crate::model::*;
use anyhow::anyhow;
use anyhow::Context;
use anyhow::Result;
use chrono::Utc;
use progrun::{run_program_async, RunError};
use std::{fs, io, path, time};
use structopt::clap::AppSettings;
use structopt::StructOpt;

#[macro_use]
extern crate yaserde_derive;

mod model;

#[derive(StructOpt, Debug)]
#[structopt(setting = AppSettings::TrailingVarArg)]
struct Opt {
    /// Silence all output
    #[structopt(short = "q", long)]
    quiet: bool,

    /// Verbose mode (-v, -vv, -vvv, -vvvv). The levels are warnings, informational, debugging, and trace message.
    #[structopt(short = "v", long, parse(from_occurrences))]
    verbose: usize,

    /// Timestamp (sec, ms, ns, none)
    #[structopt(short = "t", long = "timestamp")]
    ts: Option<stderrlog::Timestamp>,

    /// An optional target file to write the result to.
    #[structopt(short = "o", long)]
    output: Option<String>,

    /// Report a non-zero exit code instead of failing.
    #[structopt(long)]
    error_ok: bool,

    /// The program to run, followed by its arguments.
    #[structopt(required = true)]
    command: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::from_args();

    stderrlog::new()
        .module(module_path!())
        .quiet(opt.quiet)
        .verbosity(opt.verbose)
        .timestamp(opt.ts.unwrap_or(stderrlog::Timestamp::Off))
        .init()?;

    let timestamp = Utc::now();
    let start = time::Instant::now();
    let outcome = run_program_async(opt.command, opt.error_ok).await;
    let time = start.elapsed().as_secs_f32();

    let (result, failure) = match outcome {
        Ok(result) => (result, None),
        Err(RunError::NonZeroExit { result }) => {
            let message = result.error_msg().unwrap_or_default().to_string();
            (*result, Some(message))
        }
        Err(error) => return Err(error.into()),
    };

    let report = ProgramReport::new(&result, timestamp.to_rfc3339(), time);
    write_report(&report, opt.output.as_deref())?;

    match failure {
        Some(message) => Err(anyhow!(message)),
        None => Ok(()),
    }
}

fn render_report(report: &ProgramReport) -> Result<String> {
    let yaserde_cfg = yaserde::ser::Config {
        perform_indent: true,
        ..Default::default()
    };

    yaserde::ser::to_string_with_config(report, &yaserde_cfg).map_err(|msg| anyhow!(msg))
}

fn write_report(report: &ProgramReport, output: Option<&str>) -> Result<()> {
    let mut out_writer = match output {
        Some(x) => {
            let path = path::Path::new(x);
            let file = fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Box::new(file) as Box<dyn io::Write>
        }
        None => Box::new(io::stdout()) as Box<dyn io::Write>,
    };

    let output = render_report(report)?;

    out_writer
        .write_all(output.as_bytes())
        .map_err(|err| anyhow!("Failed to output program result: {:?}", err))?;

    Ok(())
}
