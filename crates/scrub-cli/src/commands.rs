use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;

use scrub_filter::HeaderPolicy;
use scrub_output::OutputPaths;

use scrub_cli::config::ScrubConfig;
use scrub_cli::pipeline::{RunRequest, execute};
use scrub_cli::prompt::{confirm, describe_run, prompt_paths};

use crate::cli::{ConfigArgs, RunArgs};
use crate::summary::{print_schema, print_summary, report_json};

pub fn run_schema(args: &ConfigArgs) -> Result<()> {
    let config = ScrubConfig::load(args.config.as_deref())?;
    print_schema(&config.schema);
    Ok(())
}

pub fn run_contacts(args: &RunArgs) -> Result<()> {
    let config = ScrubConfig::load(args.config.config.as_deref())?;
    let request = RunRequest {
        input: args.input.clone(),
        output_dir: args.output_dir.clone(),
        header_policy: if args.lenient_header {
            HeaderPolicy::Lenient
        } else {
            config.input.header_policy
        },
        dry_run: args.dry_run,
    };
    let report = execute(&request, &config)?;
    if args.json {
        let document = report_json(&report).context("serialize report")?;
        let text = serde_json::to_string_pretty(&document).context("serialize report")?;
        println!("{text}");
    } else {
        print_summary(&report);
    }
    Ok(())
}

/// Prompts for the paths on the terminal, then converts.
///
/// Returns without doing anything when the user cancels.
pub fn run_interactive(args: &ConfigArgs) -> Result<()> {
    let config = ScrubConfig::load(args.config.as_deref())?;
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut writer = io::stdout();

    let Some(answers) = prompt_paths(&mut reader, &mut writer).context("read answers")? else {
        info!("Interactive run cancelled");
        return Ok(());
    };
    let paths = OutputPaths::derive(&answers.input, answers.output_dir.as_deref(), &config.output)
        .context("derive output paths")?;
    describe_run(&mut writer, &paths.source, &paths.edited, &paths.log)
        .context("write prompt")?;
    if !confirm(&mut reader, &mut writer, "Convert now?").context("read answers")? {
        writeln!(writer, "Cancelled.").context("write prompt")?;
        return Ok(());
    }

    let request = RunRequest {
        input: answers.input,
        output_dir: answers.output_dir,
        header_policy: config.input.header_policy,
        dry_run: false,
    };
    let report = execute(&request, &config)?;
    print_summary(&report);
    Ok(())
}
