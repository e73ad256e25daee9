//! Command implementations for the CLI

use crate::{
    config::Config,
    core::{
        plan::SearchPlan,
        request::{OutputMode, SearchRequest},
    },
    error::SearchError,
    utils::{capture::CaptureFile, process::ProcessRunner},
};
use anyhow::Context;
use std::io::{self, Write};
use std::process::Stdio;
use tracing::{debug, info, instrument, warn};

/// Render the request and act on it according to its output mode
#[instrument(skip_all, fields(mode = %request.output_mode))]
pub fn execute_command(config: &Config, request: &SearchRequest) -> anyhow::Result<()> {
    let plan = SearchPlan::from_request(request, config);
    let runner = ProcessRunner::new(request.output_mode == OutputMode::Debug);
    let mut stdout = io::stdout().lock();

    match request.output_mode {
        OutputMode::DryRun => {
            writeln!(stdout, "{}", plan.describe()).context("Failed to print command")?;
            Ok(())
        }
        OutputMode::Debug => {
            writeln!(stdout, "{}", plan.dump(request)).context("Failed to print search state")?;
            Ok(())
        }
        OutputMode::Normal => {
            writeln!(stdout, "{}", plan.describe()).context("Failed to print command")?;
            drop(stdout);
            execute_search(&runner, &plan)
        }
        OutputMode::Quiet => {
            drop(stdout);
            execute_search(&runner, &plan)
        }
        OutputMode::EditorCapture => {
            drop(stdout);
            execute_capture(config, &runner, &plan)
        }
    }
}

/// Run the plan with inherited output
fn execute_search(runner: &ProcessRunner, plan: &SearchPlan) -> anyhow::Result<()> {
    info!("Searching with {}", plan.program);
    runner
        .run_command(&plan.program, &plan.args)
        .context("Search finished with errors")
}

/// Run the plan into a capture file, then open it in the viewer
fn execute_capture(
    config: &Config,
    runner: &ProcessRunner,
    plan: &SearchPlan,
) -> anyhow::Result<()> {
    let capture = CaptureFile::new().context("Failed to create capture file")?;
    let (out, err) = capture.stdio()?;

    let search = runner.run_command_with_stdio(&plan.program, &plan.args, out, err);
    if let Err(e) = &search {
        warn!("Search finished with errors: {}", e);
        if matches!(e, SearchError::Spawn { .. }) {
            return search.context("Search could not start");
        }
    }

    let path = capture.path().to_string_lossy().into_owned();
    debug!("Opening {} in {}", path, config.viewer);
    runner
        .run_command_with_stdio(&config.viewer, &[path], Stdio::inherit(), Stdio::inherit())
        .context("Viewer failed")?;

    search.context("Search finished with errors")
}
