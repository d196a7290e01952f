use std::io::{self, BufRead};

use anstream::println;
use flexver::FlexVer;
use tracing::{debug, instrument};

use super::OutputFormat;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum Error {
    #[error("Failed to read versions from stdin")]
    ReadStdin(#[source] io::Error),
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}

type Result<T> = miette::Result<T, Error>;

/// Reads one version per line, skipping blank lines.
fn read_versions(reader: impl BufRead) -> io::Result<Vec<String>> {
    reader
        .lines()
        .filter(|line| !matches!(line, Ok(line) if line.trim().is_empty()))
        .collect()
}

fn sort_versions(versions: Vec<String>, reverse: bool) -> Vec<FlexVer> {
    let mut versions: Vec<FlexVer> = versions.into_iter().map(FlexVer::from).collect();
    if reverse {
        versions.sort_by(|a, b| b.cmp(a));
    } else {
        versions.sort();
    }
    versions
}

#[instrument(skip(versions))]
pub fn sort(versions: Vec<String>, reverse: bool, format: OutputFormat) -> Result<()> {
    let versions = if versions.is_empty() {
        debug!("No versions given, reading from stdin");
        read_versions(io::stdin().lock()).map_err(Error::ReadStdin)?
    } else {
        versions
    };

    debug!("Sorting {} versions", versions.len());
    let versions = sort_versions(versions, reverse);

    match format {
        OutputFormat::Text => {
            for version in &versions {
                println!("{version}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&versions)?);
        }
    }

    Ok(())
}
