//! FlexVer: an intuitive comparator for free-form version strings.
//!
//! FlexVer sorts versions the way people do instead of forcing them into a
//! rigid grammar. Any string is a valid version. A version is broken into runs
//! of ASCII digits and runs of everything else, and the runs are compared
//! pairwise: digits by magnitude, everything else byte-wise. SemVer-style
//! prereleases (`1.0-rc1`) sort before the release they precede, and build
//! metadata after a `+` is ignored.
//!
//! Comparing versions of wildly different formats gives an ordering, but not
//! necessarily a meaningful one.
//!
//! ```
//! use std::cmp::Ordering;
//!
//! assert_eq!(flexver::compare("1.0.0", "1.0.0_01"), Ordering::Less);
//! assert_eq!(flexver::compare("0.17.1-beta.1", "0.17.1"), Ordering::Less);
//! assert_eq!(flexver::compare("10", "2"), Ordering::Greater);
//! ```

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

pub mod component;
pub mod vectors;

pub use component::{
    Component, ComponentKind, compare_components, compare_decomposed, decompose,
    split_build_metadata,
};

/// Compares two version strings.
///
/// Returns [`Ordering::Less`] when `a` precedes (is older than) `b`,
/// [`Ordering::Greater`] when `a` follows `b`, and [`Ordering::Equal`] when they
/// only differ in build metadata or in leading zeros of numbers.
pub fn compare(a: &str, b: &str) -> Ordering {
    compare_decomposed(&decompose(a), &decompose(b))
}

/// Sorts a slice of version strings from oldest to newest.
///
/// The sort is stable: versions that compare equal keep their relative order.
pub fn sort<S: AsRef<str>>(versions: &mut [S]) {
    versions.sort_by_cached_key(|version| FlexVer::new(version.as_ref()));
}

/// Returns the newest version, or `None` if there are no versions.
///
/// If several versions are equally new, the last one is returned.
pub fn latest<I, S>(versions: I) -> Option<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    versions
        .into_iter()
        .max_by(|a, b| compare(a.as_ref(), b.as_ref()))
}

/// A version string together with its decomposition.
///
/// Equality, ordering and hashing follow FlexVer semantics, so `1.01` equals
/// `1.1` and `1.0+build` equals `1.0`. Displaying a `FlexVer` reproduces the
/// original string verbatim.
#[derive(Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde_with::DeserializeFromStr, serde_with::SerializeDisplay)
)]
pub struct FlexVer {
    version: String,
    components: Vec<Component>,
}

impl FlexVer {
    pub fn new(version: impl Into<String>) -> Self {
        let version = version.into();
        let components = decompose(&version);
        Self {
            version,
            components,
        }
    }

    /// The original version string, including any build metadata.
    pub fn as_str(&self) -> &str {
        &self.version
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// The text after the first `+`, which takes no part in comparisons.
    pub fn build_metadata(&self) -> Option<&str> {
        split_build_metadata(&self.version).1
    }

    pub fn is_prerelease(&self) -> bool {
        self.components.iter().any(Component::is_prerelease)
    }

    pub fn into_string(self) -> String {
        self.version
    }
}

impl std::fmt::Debug for FlexVer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FlexVer").field(&self.version).finish()
    }
}

impl std::fmt::Display for FlexVer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.version)
    }
}

impl AsRef<str> for FlexVer {
    fn as_ref(&self) -> &str {
        &self.version
    }
}

impl From<&str> for FlexVer {
    fn from(version: &str) -> Self {
        Self::new(version)
    }
}

impl From<String> for FlexVer {
    fn from(version: String) -> Self {
        Self::new(version)
    }
}

impl std::str::FromStr for FlexVer {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl PartialEq for FlexVer {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for FlexVer {}

impl Hash for FlexVer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Equal versions always have the same number of components, and
        // components of different kinds never compare equal.
        self.components.len().hash(state);
        for component in &self.components {
            component.hash_significant(state);
        }
    }
}

impl PartialOrd for FlexVer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FlexVer {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_decomposed(&self.components, &other.components)
    }
}
