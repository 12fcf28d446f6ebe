// ABOUTME: Watch module for compiling slide documents once or on a polling loop
// ABOUTME: Regenerates only outputs older than their source in watch mode

use log::{debug, error, info};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use crate::config::Config as AppConfig;
use crate::document;
use crate::errors::{DeckError, Result};
use crate::input::{InputSource, Job};
use crate::utils;

/// How the driver repeats its passes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Compile every document once and return
    SinglePass,
    /// Poll forever, compiling only stale documents
    Watch,
}

/// Configuration for the compile driver
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Source/output pairs, fixed for the lifetime of the driver
    pub jobs: Vec<Job>,

    pub mode: Mode,

    /// Sleep between two passes in watch mode
    pub poll_interval: Duration,
}

impl WatchConfig {
    /// Build the job list for a resolved input
    pub fn new(source: &InputSource, mode: Mode, app_config: &AppConfig) -> Result<Self> {
        Ok(Self {
            jobs: source.jobs(app_config)?,
            mode,
            poll_interval: app_config.poll_interval,
        })
    }
}

/// What happened to each job during one pass
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PassReport {
    pub generated: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

impl PassReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Whether a job's output is stale.
///
/// The output is regenerated unless it was modified strictly after its
/// source. A missing output always counts as stale.
pub fn needs_regeneration(job: &Job) -> Result<bool> {
    let input_time = utils::modified_time(&job.input)?
        .ok_or_else(|| DeckError::InputNotFound(job.input.clone()))?;

    Ok(match utils::modified_time(&job.output)? {
        Some(output_time) => output_time <= input_time,
        None => true,
    })
}

/// Compile a single job, returning whether anything was written
fn process_job(job: &Job, mode: Mode) -> Result<bool> {
    if mode == Mode::Watch && !needs_regeneration(job)? {
        debug!("{:?} is up to date", job.output);
        return Ok(false);
    }

    document::compile_file(&job.input, &job.output)?;
    Ok(true)
}

/// Run every job once.
///
/// Jobs are independent: a failing document is reported and counted, and the
/// remaining documents are still processed.
pub fn run_pass(config: &WatchConfig) -> PassReport {
    let mut report = PassReport::default();

    for job in &config.jobs {
        match process_job(job, config.mode) {
            Ok(true) => report.generated.push(job.output.clone()),
            Ok(false) => report.skipped.push(job.output.clone()),
            Err(e) => {
                error!("Failed to compile {:?}: {}", job.input, e);
                report.failed.push(job.input.clone());
            }
        }
    }

    report
}

/// Drive the compiler.
///
/// In single-pass mode this returns the report of the only pass. In watch
/// mode it polls until the process is interrupted.
pub fn run(config: &WatchConfig) -> PassReport {
    if config.mode == Mode::SinglePass {
        return run_pass(config);
    }

    info!(
        "Watching {} document(s), polling every {:?}",
        config.jobs.len(),
        config.poll_interval
    );
    println!("Watching for changes, hit C-c to stop");

    loop {
        let report = run_pass(config);
        if !report.generated.is_empty() || report.has_failures() {
            info!(
                "Pass finished: {} generated, {} up to date, {} failed",
                report.generated.len(),
                report.skipped.len(),
                report.failed.len()
            );
        }
        thread::sleep(config.poll_interval);
    }
}
