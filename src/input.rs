// ABOUTME: Input resolution for the reveal-deck compiler
// ABOUTME: Turns the command line input into source/output job pairs

use crate::config::Config;
use crate::errors::{DeckError, Result};
use log::{debug, warn};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// What the input argument points at, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A single slide document
    File(PathBuf),
    /// A directory whose matching documents are all compiled
    Directory(PathBuf),
}

/// One source document and the HTML file generated from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl InputSource {
    /// Classify an input path, failing when it does not exist
    pub fn resolve(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DeckError::InputNotFound(path.to_path_buf()));
        }
        if path.is_dir() {
            Ok(InputSource::Directory(path.to_path_buf()))
        } else {
            Ok(InputSource::File(path.to_path_buf()))
        }
    }

    /// Source documents in processing order
    pub fn sources(&self, extension: &str) -> Result<Vec<PathBuf>> {
        match self {
            InputSource::File(path) => Ok(vec![path.clone()]),
            InputSource::Directory(dir) => {
                let pattern = format!(
                    "{}/*.{}",
                    glob::Pattern::escape(&dir.to_string_lossy()),
                    extension
                );
                debug!("Collecting sources matching {}", pattern);

                let mut paths: Vec<PathBuf> = glob::glob(&pattern)?
                    .flatten()
                    .filter(|p| p.is_file())
                    .collect();
                paths.sort();

                if paths.is_empty() {
                    warn!("No *.{} files found in {:?}", extension, dir);
                }
                Ok(paths)
            }
        }
    }

    /// Pair every source document with its output path
    pub fn jobs(&self, config: &Config) -> Result<Vec<Job>> {
        self.sources(&config.source_extension)?
            .into_iter()
            .map(|input| Job::for_input(input, config))
            .collect()
    }
}

impl Job {
    /// Output goes to `<output_dir>/<file stem>.<output extension>`
    pub fn for_input(input: PathBuf, config: &Config) -> Result<Self> {
        let stem = input
            .file_stem()
            .ok_or_else(|| DeckError::InvalidInput(input.clone()))?;

        let mut file_name = OsString::from(stem);
        file_name.push(".");
        file_name.push(&config.output_extension);

        Ok(Self {
            output: config.output_dir.join(file_name),
            input,
        })
    }
}
