//! Semantic version value.
//!
//! Companion value type for the semantic_version_parser parser.
//! A [`SemanticVersion`] never changes after it has been constructed, and it formats
//! back into the canonical string it was parsed from.
#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    no_mangle_generic_items,
    non_shorthand_field_patterns,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unsafe_code,
    unused_allocation,
    unused_comparisons,
    unused_extern_crates,
    unused_import_braces,
    unused_parens,
    unused_qualifications,
    unused_results,
    unused,
    while_true
)]

use semantic_version_builder::VersionBuilder;
use std::fmt::{self, Display, Write};

#[cfg(feature = "parser")]
use semantic_version_parser::{Error, Mode, OwnedError};

/// Represents a semantic version number.
///
/// Equality compares all five components, build metadata included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SemanticVersion {
    major: u64,
    minor: u64,
    patch: u64,
    pre_releases: Vec<String>,
    build_metadata: Vec<String>,
}

impl SemanticVersion {
    /// Constructs a version out of its five components.
    ///
    /// The components are taken as they are, nothing is validated.
    /// Use this when the components are known to be valid, e.g. because they came out of
    /// another version.
    ///
    /// ## Examples
    ///
    /// ```
    /// # use semantic_version_value::SemanticVersion;
    /// let version = SemanticVersion::new(
    ///     1,
    ///     2,
    ///     3,
    ///     vec!["alpha".into(), "1".into()],
    ///     vec!["build".into(), "5".into()],
    /// );
    /// assert_eq!(version.to_string(), "1.2.3-alpha.1+build.5")
    /// ```
    pub fn new(
        major: u64,
        minor: u64,
        patch: u64,
        pre_releases: Vec<String>,
        build_metadata: Vec<String>,
    ) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
            pre_releases,
            build_metadata,
        }
    }

    /// Constructs a release version without pre-release or build metadata.
    ///
    /// ## Examples
    ///
    /// ```
    /// # use semantic_version_value::SemanticVersion;
    /// let version = SemanticVersion::release(1, 2, 3);
    /// assert_eq!(version.to_string(), "1.2.3")
    /// ```
    pub const fn release(major: u64, minor: u64, patch: u64) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
            pre_releases: Vec::new(),
            build_metadata: Vec::new(),
        }
    }

    /// Parse a string slice into a version.
    ///
    /// The input must follow the Semantic Version 2.0.0 grammar exactly.
    /// For more information, see [`semantic_version_parser::parse`].
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use semantic_version_value::SemanticVersion;
    /// let version = SemanticVersion::parse("1.0.0-alpha+build.123").unwrap();
    /// assert_eq!(version.pre_releases(), ["alpha"]);
    /// assert_eq!(version.build_metadata(), ["build", "123"]);
    ///
    /// assert!(SemanticVersion::parse("v1.0.0").is_err());
    /// ```
    #[cfg(feature = "parser")]
    pub fn parse(input: &str) -> Result<Self, Error<'_>> {
        Self::parse_with(input, Mode::Strict)
    }

    /// Parse a string slice into a version, allowing a leading `v`.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use semantic_version_value::SemanticVersion;
    /// let version = SemanticVersion::parse_lenient("v1.0.0").unwrap();
    /// assert_eq!(version, SemanticVersion::release(1, 0, 0));
    /// assert_eq!(version.to_string(), "1.0.0");
    /// ```
    #[cfg(feature = "parser")]
    pub fn parse_lenient(input: &str) -> Result<Self, Error<'_>> {
        Self::parse_with(input, Mode::Lenient)
    }

    /// Parse a string slice into a version using the grammar of the given [`Mode`].
    #[cfg(feature = "parser")]
    pub fn parse_with(input: &str, mode: Mode) -> Result<Self, Error<'_>> {
        semantic_version_parser::parse_with::<SemanticVersionBuilder>(input, mode)
    }

    /// Parse a string slice into a version, panicking if it is not a valid version.
    ///
    /// Meant for inputs that are known to be valid, e.g. literals in the source code,
    /// where an invalid version is a bug rather than something to recover from.
    ///
    /// ## Panics
    ///
    /// If the input is not a valid strict version.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use semantic_version_value::SemanticVersion;
    /// let version = SemanticVersion::must_parse("1.0.0");
    /// assert_eq!(version.major(), 1);
    /// ```
    ///
    /// ```rust,should_panic
    /// # use semantic_version_value::SemanticVersion;
    /// let version = SemanticVersion::must_parse("1.0");
    /// ```
    #[cfg(feature = "parser")]
    pub fn must_parse(input: &str) -> Self {
        match Self::parse(input) {
            Ok(version) => version,
            Err(error) => panic!("must_parse on an invalid version: {}", error),
        }
    }

    /// The major version.
    pub fn major(&self) -> u64 {
        self.major
    }

    /// The minor version.
    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// The patch version.
    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// The pre-release identifiers, in order. Empty if there is no pre-release.
    pub fn pre_releases(&self) -> &[String] {
        &self.pre_releases
    }

    /// The build metadata identifiers, in order. Empty if there is no build metadata.
    pub fn build_metadata(&self) -> &[String] {
        &self.build_metadata
    }

    /// Returns true if this version has pre-release identifiers, i.e. it represents a pre-release.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use semantic_version_value::SemanticVersion;
    /// assert!(!SemanticVersion::must_parse("1.2.3").is_pre_release());
    /// assert!(SemanticVersion::must_parse("1.2.3-pre").is_pre_release());
    /// assert!(!SemanticVersion::must_parse("1.2.3+build").is_pre_release());
    /// ```
    pub fn is_pre_release(&self) -> bool {
        !self.pre_releases.is_empty()
    }

    /// Returns true if this version has build metadata.
    pub fn has_build_metadata(&self) -> bool {
        !self.build_metadata.is_empty()
    }
}

impl From<(u64, u64, u64)> for SemanticVersion {
    fn from((x, y, z): (u64, u64, u64)) -> Self {
        SemanticVersion::release(x, y, z)
    }
}

impl From<[u64; 3]> for SemanticVersion {
    fn from(v: [u64; 3]) -> Self {
        SemanticVersion::release(v[0], v[1], v[2])
    }
}

#[cfg(feature = "parser")]
impl std::str::FromStr for SemanticVersion {
    type Err = OwnedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).map_err(|e| e.owned())
    }
}

#[cfg(feature = "parser")]
impl<'input> std::convert::TryFrom<&'input str> for SemanticVersion {
    type Error = Error<'input>;

    fn try_from(value: &'input str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result = String::with_capacity(16);
        write!(result, "{}.{}.{}", self.major, self.minor, self.patch)?;
        push_identifiers(&mut result, '-', &self.pre_releases);
        push_identifiers(&mut result, '+', &self.build_metadata);
        f.pad(result.as_ref())
    }
}

/// Writes `marker` once, followed by the dot-joined identifiers.
/// Writes nothing at all for an empty list.
fn push_identifiers(out: &mut String, marker: char, identifiers: &[String]) {
    if let Some((first, rest)) = identifiers.split_first() {
        out.push(marker);
        out.push_str(first);
        for identifier in rest {
            out.push('.');
            out.push_str(identifier);
        }
    }
}

/// Builds a [`SemanticVersion`] out of parsed components.
///
/// Use it to parse into a [`SemanticVersion`] through the generic parser functions.
///
/// ## Examples
///
/// ```rust
/// use semantic_version_value::{SemanticVersion, SemanticVersionBuilder};
///
/// let version = semantic_version_parser::parse::<SemanticVersionBuilder>("1.2.3-rc.1").unwrap();
/// assert_eq!(version, SemanticVersion::must_parse("1.2.3-rc.1"));
/// ```
#[derive(Debug, Default)]
pub struct SemanticVersionBuilder {
    version: SemanticVersion,
}

impl<'input> VersionBuilder<'input> for SemanticVersionBuilder {
    type Out = SemanticVersion;

    fn new() -> Self {
        Self::default()
    }

    fn set_major(&mut self, major: u64) {
        self.version.major = major;
    }

    fn set_minor(&mut self, minor: u64) {
        self.version.minor = minor;
    }

    fn set_patch(&mut self, patch: u64) {
        self.version.patch = patch;
    }

    fn add_pre_release(&mut self, pre_release: &'input str) {
        self.version.pre_releases.push(pre_release.into());
    }

    fn add_build(&mut self, build: &'input str) {
        self.version.build_metadata.push(build.into());
    }

    fn build(self) -> Self::Out {
        self.version
    }
}

#[cfg(all(feature = "serde", feature = "parser"))]
use serde::de::{self, Deserialize, Deserializer, Visitor};
#[cfg(feature = "serde")]
use serde::ser::{Serialize, Serializer};
#[cfg(feature = "serde")]
impl Serialize for SemanticVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(all(feature = "serde", feature = "parser"))]
impl<'de> Deserialize<'de> for SemanticVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VersionVisitor;

        impl<'de> Visitor<'de> for VersionVisitor {
            type Value = SemanticVersion;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a semantic version string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                SemanticVersion::parse(v).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(VersionVisitor)
    }
}

#[cfg(feature = "semver")]
impl From<&semver::Version> for SemanticVersion {
    fn from(v: &semver::Version) -> Self {
        SemanticVersion {
            major: v.major,
            minor: v.minor,
            patch: v.patch,
            pre_releases: split_identifiers(v.pre.as_str()),
            build_metadata: split_identifiers(v.build.as_str()),
        }
    }
}

#[cfg(feature = "semver")]
impl From<semver::Version> for SemanticVersion {
    fn from(v: semver::Version) -> Self {
        SemanticVersion::from(&v)
    }
}

/// Fails if the version was constructed with identifiers that semver rejects.
#[cfg(feature = "semver")]
impl std::convert::TryFrom<&SemanticVersion> for semver::Version {
    type Error = semver::Error;

    fn try_from(v: &SemanticVersion) -> Result<Self, Self::Error> {
        Ok(semver::Version {
            major: v.major,
            minor: v.minor,
            patch: v.patch,
            pre: semver::Prerelease::new(&v.pre_releases.join("."))?,
            build: semver::BuildMetadata::new(&v.build_metadata.join("."))?,
        })
    }
}

#[cfg(feature = "semver")]
fn split_identifiers(identifiers: &str) -> Vec<String> {
    if identifiers.is_empty() {
        Vec::new()
    } else {
        identifiers.split('.').map(String::from).collect()
    }
}
