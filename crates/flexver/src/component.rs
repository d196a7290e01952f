use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// The kind of a [`Component`], without its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ComponentKind {
    Numeric,
    Lexical,
    SemverPrerelease,
}

/// A maximal run of characters of a single kind within a version string.
///
/// Equality on `Component` is textual: `Numeric("01")` and `Numeric("1")` are
/// different components even though they compare as [`Ordering::Equal`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", content = "text", rename_all = "snake_case")
)]
pub enum Component {
    /// A run of ASCII digits, compared by magnitude.
    Numeric(String),
    /// Any other run of non-digit characters, compared byte-wise.
    Lexical(String),
    /// A run starting with `-` followed by at least one more character.
    SemverPrerelease(String),
}

impl Component {
    fn classify(numeric: bool, run: String) -> Self {
        if numeric {
            Self::Numeric(run)
        } else if run.len() > 1 && run.starts_with('-') {
            Self::SemverPrerelease(run)
        } else {
            Self::Lexical(run)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Numeric(s) | Self::Lexical(s) | Self::SemverPrerelease(s) => s,
        }
    }

    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::Numeric(_) => ComponentKind::Numeric,
            Self::Lexical(_) => ComponentKind::Lexical,
            Self::SemverPrerelease(_) => ComponentKind::SemverPrerelease,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }

    pub fn is_prerelease(&self) -> bool {
        matches!(self, Self::SemverPrerelease(_))
    }

    /// The digits of a numeric component without leading zeros, or the text of
    /// any other component. Two components compare equal exactly when their
    /// kinds and significant text match.
    pub(crate) fn significant(&self) -> &str {
        match self {
            Self::Numeric(digits) => digits.trim_start_matches('0'),
            other => other.as_str(),
        }
    }

    pub(crate) fn hash_significant<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        self.significant().hash(state);
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Splits off the build metadata: everything from the first `+` onwards.
///
/// Returns the part that takes part in comparison, and the metadata without its
/// leading `+`.
pub fn split_build_metadata(version: &str) -> (&str, Option<&str>) {
    match version.split_once('+') {
        Some((version, metadata)) => (version, Some(metadata)),
        None => (version, None),
    }
}

/// Breaks a version string apart into components, splitting it wherever a run
/// of characters changes between ASCII digits and anything else, and wherever a
/// `-` begins a new run.
///
/// Build metadata after the first `+` is dropped. Every string, including the
/// empty one, has a decomposition.
pub fn decompose(version: &str) -> Vec<Component> {
    let (version, _) = split_build_metadata(version);

    let mut components = Vec::new();
    let mut current = String::new();
    let mut last_was_digit = false;

    for ch in version.chars() {
        let is_digit = ch.is_ascii_digit();

        if !current.is_empty()
            && (is_digit != last_was_digit || (ch == '-' && !current.starts_with('-')))
        {
            components.push(Component::classify(
                last_was_digit,
                std::mem::take(&mut current),
            ));
        }

        current.push(ch);
        last_was_digit = is_digit;
    }

    if !current.is_empty() {
        components.push(Component::classify(last_was_digit, current));
    }

    components
}

fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');

    // Without leading zeros, a longer run of digits is a larger number.
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Compares two components at the same position of two decompositions.
///
/// `None` stands for a position past the end of the shorter decomposition. An
/// absent component sorts before any present one, except a prerelease
/// component, which sorts before its absence: `1.0-rc` precedes `1.0`.
pub fn compare_components(left: Option<&Component>, right: Option<&Component>) -> Ordering {
    use Component::*;

    match (left, right) {
        (Some(SemverPrerelease(_)), None) => Ordering::Less,
        (None, Some(SemverPrerelease(_))) => Ordering::Greater,
        (Some(Numeric(a)), Some(Numeric(b))) => compare_numeric(a, b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
        (Some(a), Some(b)) => a.as_str().cmp(b.as_str()),
    }
}

/// Compares two decompositions component by component, padding the shorter one
/// with absent components.
pub fn compare_decomposed(left: &[Component], right: &[Component]) -> Ordering {
    (0..left.len().max(right.len()))
        .map(|i| compare_components(left.get(i), right.get(i)))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}
