//! Parsing and evaluation of FlexVer test vector files.
//!
//! A test vector file holds one comparison per line, written as
//! `<left> <op> <right>` where `<op>` is one of `<`, `=` or `>`. Fields are
//! separated by exactly one space, which allows empty versions (` = `). A `#`
//! starts a comment that runs to the end of the line.

use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VectorError {
    #[error("Expected `<version> <op> <version>` at line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },
    #[error("Unrecognized comparison `{op}` at line {line}, expected one of `<`, `=`, `>`")]
    UnknownOperator { line: usize, op: String },
}

impl VectorError {
    pub fn line(&self) -> usize {
        match self {
            VectorError::MalformedLine { line, .. } => *line,
            VectorError::UnknownOperator { line, .. } => *line,
        }
    }
}

/// The symbol used for an ordering in test vector files.
pub fn ordering_symbol(ordering: Ordering) -> char {
    match ordering {
        Ordering::Less => '<',
        Ordering::Equal => '=',
        Ordering::Greater => '>',
    }
}

fn parse_ordering(op: &str) -> Option<Ordering> {
    match op {
        "<" => Some(Ordering::Less),
        "=" => Some(Ordering::Equal),
        ">" => Some(Ordering::Greater),
        _ => None,
    }
}

/// A single expected comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestVector {
    /// 1-based line number in the source file.
    pub line: usize,
    pub left: String,
    pub expected: Ordering,
    pub right: String,
}

/// The result of running a [`TestVector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub expected: Ordering,
    pub actual: Ordering,
    /// The ordering of `right` against `left`, which must be the reverse of
    /// `actual`.
    pub reversed: Ordering,
}

impl Outcome {
    pub fn is_antisymmetric(&self) -> bool {
        self.reversed == self.actual.reverse()
    }

    pub fn passed(&self) -> bool {
        self.actual == self.expected && self.is_antisymmetric()
    }
}

impl TestVector {
    pub fn evaluate(&self) -> Outcome {
        Outcome {
            expected: self.expected,
            actual: crate::compare(&self.left, &self.right),
            reversed: crate::compare(&self.right, &self.left),
        }
    }
}

impl std::fmt::Display for TestVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.left,
            ordering_symbol(self.expected),
            self.right
        )
    }
}

fn parse_line(line: usize, content: &str) -> Result<Option<TestVector>, VectorError> {
    let content = match content.split_once('#') {
        Some((before, _)) => before,
        None => content,
    };
    let content = content.trim_end_matches(['\r', '\n']);

    if content.trim().is_empty() {
        return Ok(None);
    }

    let mut fields: Vec<&str> = content.split(' ').collect();
    // Spaces left between a comparison and a trailing comment.
    while fields.len() > 3 && fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }

    let [left, op, right] = fields[..] else {
        return Err(VectorError::MalformedLine {
            line,
            content: content.to_string(),
        });
    };

    let expected = parse_ordering(op).ok_or_else(|| VectorError::UnknownOperator {
        line,
        op: op.to_string(),
    })?;

    Ok(Some(TestVector {
        line,
        left: left.to_string(),
        expected,
        right: right.to_string(),
    }))
}

/// Parses every comparison in a test vector file, skipping blank lines and
/// comments.
pub fn parse_vectors(input: &str) -> Result<Vec<TestVector>, VectorError> {
    let mut vectors = Vec::new();
    for (index, content) in input.lines().enumerate() {
        if let Some(vector) = parse_line(index + 1, content)? {
            vectors.push(vector);
        }
    }
    Ok(vectors)
}
