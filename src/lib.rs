//! Semantic Version 2.0.0 numbers, parsed and formatted.
//!
//! ## Motivation
//!
//! This crate parses version strings that follow the grammar of <https://semver.org>,
//! and nothing else, into a value that formats back into the exact same string.
//!
//! There are two grammars:
//!
//! - strict: the Semantic Version 2.0.0 grammar (e.g. "1.2.3-rc.1+build.5")
//! - lenient: the strict grammar with an optional leading `v` (e.g. "v1.2.3-rc.1+build.5")
//!
//! Neither grammar trims whitespace or defaults missing numbers.
//!
//! ## Examples
//!
//! ```rust
//! use semantic_version::{ErrorKind, SemanticVersion};
//!
//! let version = semantic_version::parse("1.0.0-alpha+build.123").unwrap();
//! assert_eq!(version.major(), 1);
//! assert_eq!(version.pre_releases(), ["alpha"]);
//! assert_eq!(version.build_metadata(), ["build", "123"]);
//! assert_eq!(version.to_string(), "1.0.0-alpha+build.123");
//!
//! let error = semantic_version::parse("1.0").unwrap_err();
//! assert_eq!(error.error_kind(), ErrorKind::InvalidVersion);
//!
//! assert!(semantic_version::parse("v1.0.0").is_err());
//! assert_eq!(
//!     semantic_version::parse_lenient("v1.0.0").unwrap(),
//!     SemanticVersion::release(1, 0, 0)
//! );
//!
//! const MINIMUM: &str = "1.2.0";
//! let minimum = semantic_version::must_parse(MINIMUM);
//! assert_eq!(minimum.minor(), 2);
//! ```
//!
//! ## Parsing into other types
//!
//! The parser is generic over its output through the [`VersionBuilder`] trait.
//! With the `semver` feature, it can parse directly into a [`semver::Version`](https://docs.rs/semver).
//!
//! ```rust
//! # use semantic_version::VersionBuilder;
//! /// Checks whether a valid version is a pre-release, without allocating anything.
//! struct IsPreRelease(bool);
//!
//! impl VersionBuilder<'_> for IsPreRelease {
//!     type Out = bool;
//!
//!     fn new() -> Self {
//!         IsPreRelease(false)
//!     }
//!
//!     fn add_pre_release(&mut self, _pre_release: &str) {
//!         self.0 = true;
//!     }
//!
//!     fn build(self) -> Self::Out {
//!         self.0
//!     }
//! }
//!
//! assert_eq!(semantic_version::parse_into::<IsPreRelease>("1.2.3-pre"), Ok(true));
//! assert_eq!(semantic_version::parse_into::<IsPreRelease>("1.2.3+build"), Ok(false));
//! assert!(semantic_version::parse_into::<IsPreRelease>("1.2").is_err());
//! ```
//!
//! ## Features
//!
//! - `version` (default): the [`SemanticVersion`] value type and the functions returning it.
//! - `semver`: parse into [`semver::Version`](https://docs.rs/semver) and convert between both types.
//! - `serde`: serialize [`SemanticVersion`] as its canonical string, deserialize it strictly.

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

pub use semantic_version_parser::{
    is_valid, Error, ErrorKind, Mode, OwnedError, VersionBuilder,
};

#[cfg(feature = "version")]
pub use semantic_version_value::{SemanticVersion, SemanticVersionBuilder};

/// Parse a string slice into a [`SemanticVersion`], following the Semantic Version 2.0.0 grammar.
///
/// ## Examples
///
/// ```rust
/// let version = semantic_version::parse("1.0.0+build.123").unwrap();
/// assert_eq!(version.build_metadata(), ["build", "123"]);
///
/// assert!(semantic_version::parse("1.0").is_err());
/// ```
#[cfg(feature = "version")]
pub fn parse(input: &str) -> Result<SemanticVersion, Error<'_>> {
    SemanticVersion::parse(input)
}

/// Parse a string slice into a [`SemanticVersion`], allowing a leading `v`.
///
/// ## Examples
///
/// ```rust
/// let version = semantic_version::parse_lenient("v1.0.0").unwrap();
/// assert_eq!(version.to_string(), "1.0.0");
/// ```
#[cfg(feature = "version")]
pub fn parse_lenient(input: &str) -> Result<SemanticVersion, Error<'_>> {
    SemanticVersion::parse_lenient(input)
}

/// Parse a string slice into a [`SemanticVersion`], panicking if it is not a valid strict version.
///
/// See [`SemanticVersion::must_parse`].
#[cfg(feature = "version")]
pub fn must_parse(input: &str) -> SemanticVersion {
    SemanticVersion::must_parse(input)
}

/// Parse a string slice into any [`VersionBuilder`], following the Semantic Version 2.0.0 grammar.
pub fn parse_into<'input, V>(input: &'input str) -> Result<V::Out, Error<'input>>
where
    V: VersionBuilder<'input>,
{
    semantic_version_parser::parse::<V>(input)
}

/// Parse a string slice into any [`VersionBuilder`], allowing a leading `v`.
pub fn parse_lenient_into<'input, V>(input: &'input str) -> Result<V::Out, Error<'input>>
where
    V: VersionBuilder<'input>,
{
    semantic_version_parser::parse_lenient::<V>(input)
}

/// Parse a string slice into any [`VersionBuilder`] using the grammar of the given [`Mode`].
pub fn parse_into_with<'input, V>(input: &'input str, mode: Mode) -> Result<V::Out, Error<'input>>
where
    V: VersionBuilder<'input>,
{
    semantic_version_parser::parse_with::<V>(input, mode)
}

#[cfg(test)]
mod tests;
