use log::{debug, info};
use reqwest::StatusCode;

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::fetcher::{FetchOutcome, ProxyListException, ProxySource};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Written { path: PathBuf, bytes: usize },
    NoResult { status: StatusCode },
}

fn remove_previous(output: &Path) -> io::Result<()> {
    match fs::remove_file(output) {
        Ok(()) => {
            debug!("Removed previous proxy list at {}", output.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

/// Number of non-blank lines, for the log only. The payload itself is never
/// interpreted.
fn count_entries(payload: &[u8]) -> usize {
    payload
        .split(|&b| b == b'\n')
        .filter(|line| !line.trim_ascii().is_empty())
        .count()
}

fn write_payload(output: &Path, payload: &[u8]) -> io::Result<()> {
    let mut file = File::create(output)?;
    file.write_all(payload)?;
    file.flush()
}

/// One run: drop the old list, fetch a fresh one and save it if the API
/// answered with 200. A rejected request leaves no file behind.
pub fn run(source: &dyn ProxySource, output: &Path) -> Result<RunOutcome, ProxyListException> {
    remove_previous(output)?;

    match source.fetch()? {
        FetchOutcome::Payload(payload) => {
            write_payload(output, &payload)?;

            info!(
                "Saved {} proxies to {}",
                count_entries(&payload),
                output.display()
            );

            Ok(RunOutcome::Written {
                path: output.to_path_buf(),
                bytes: payload.len(),
            })
        }
        FetchOutcome::Rejected { status, .. } => {
            debug!("No proxy list saved, API answered {}", status);
            Ok(RunOutcome::NoResult { status })
        }
    }
}
