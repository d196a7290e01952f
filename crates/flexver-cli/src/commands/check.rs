use anstream::println;
use camino::{Utf8Path, Utf8PathBuf};
use flexver::vectors::{Outcome, TestVector, VectorError, ordering_symbol, parse_vectors};
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error("Invalid test vector file {path}")]
    InvalidVectors {
        path: Utf8PathBuf,
        #[source]
        source: VectorError,
    },
    #[error("{failed} of {total} test vectors failed")]
    #[diagnostic(help("each failure is listed above as `file:line`"))]
    Failures { failed: usize, total: usize },
}

type Result<T> = miette::Result<T, Error>;

fn describe_failure(vector: &TestVector, outcome: &Outcome) -> String {
    let TestVector { left, right, .. } = vector;
    if outcome.is_antisymmetric() {
        format!(
            "expected `{vector}`, got `{left} {} {right}`",
            ordering_symbol(outcome.actual)
        )
    } else {
        format!(
            "comparison is not antisymmetric: `{left} {} {right}` but `{right} {} {left}`",
            ordering_symbol(outcome.actual),
            ordering_symbol(outcome.reversed)
        )
    }
}

/// Runs every vector in one file, printing failures. Returns the number of
/// vectors run and the number that failed.
fn check_file(path: &Utf8Path) -> Result<(usize, usize)> {
    let content = fs_err::read_to_string(path)?;
    let vectors = parse_vectors(&content).map_err(|source| Error::InvalidVectors {
        path: path.to_owned(),
        source,
    })?;
    debug!("Parsed {} test vectors from {path}", vectors.len());

    let mut failed = 0;
    for vector in &vectors {
        let outcome = vector.evaluate();
        if !outcome.passed() {
            failed += 1;
            println!(
                "{}: {}",
                format!("{path}:{}", vector.line).bold(),
                describe_failure(vector, &outcome).red()
            );
        }
    }

    Ok((vectors.len(), failed))
}

#[instrument(skip_all, fields(files = files.len()))]
pub fn check(files: &[Utf8PathBuf]) -> Result<()> {
    let mut total = 0;
    let mut failed = 0;

    for path in files {
        let (ran, failures) = check_file(path)?;
        total += ran;
        failed += failures;
    }

    if failed > 0 {
        return Err(Error::Failures { failed, total });
    }

    println!("{} test vectors passed", total.green());
    Ok(())
}
