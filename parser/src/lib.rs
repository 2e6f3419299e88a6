//! Parser for Semantic Version 2.0.0 numbers.
//!
//! The input is matched as a whole against the grammar from <https://semver.org>.
//! Nothing is trimmed and nothing is defaulted: `1.2` is not a version, neither is ` 1.2.3`.
//!
//! Two grammars are available, selected by [`Mode`]:
//!
//! - [`Mode::Strict`] accepts exactly the Semantic Version 2.0.0 grammar.
//! - [`Mode::Lenient`] additionally accepts a single lowercase `v` in front of the major number.
//!
//! The parser is generic over the resulting type through [`VersionBuilder`].
//!
//! ## Examples
//!
//! ```rust
//! use semantic_version_parser::{parse, parse_lenient, ErrorKind};
//!
//! let version = parse::<semver::Version>("1.2.3-alpha.1+build.42");
//! assert_eq!(version, Ok(semver::Version::parse("1.2.3-alpha.1+build.42").unwrap()));
//!
//! let error = parse::<semver::Version>("v1.2.3").unwrap_err();
//! assert_eq!(error.error_kind(), ErrorKind::InvalidVersion);
//!
//! let version = parse_lenient::<semver::Version>("v1.2.3");
//! assert_eq!(version, Ok(semver::Version::new(1, 2, 3)));
//! ```
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

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::{
    fmt::{self, Display},
    ops::Range,
};
use tracing::trace;

pub use semantic_version_builder::VersionBuilder;

macro_rules! grammar {
    ($prefix:literal) => {
        concat!(
            "^",
            $prefix,
            r"(?P<major>0|[1-9][0-9]*)\.(?P<minor>0|[1-9][0-9]*)\.(?P<patch>0|[1-9][0-9]*)",
            r"(?:-(?P<prerelease>(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*))?",
            r"(?:\+(?P<buildmetadata>[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?",
            "$"
        )
    };
}

const STRICT_GRAMMAR: &str = grammar!("");
const LENIENT_GRAMMAR: &str = grammar!("v?");

static STRICT: Lazy<Regex> = Lazy::new(|| compile(STRICT_GRAMMAR));
static LENIENT: Lazy<Regex> = Lazy::new(|| compile(LENIENT_GRAMMAR));

fn compile(grammar: &str) -> Regex {
    Regex::new(grammar).expect("the semantic version grammar is a valid regex")
}

/// Selects the grammar a version is parsed with.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Mode {
    /// The Semantic Version 2.0.0 grammar, nothing more.
    Strict,
    /// The strict grammar with an optional lowercase `v` in front of the major number.
    Lenient,
}

impl Mode {
    fn grammar(self) -> &'static Regex {
        match self {
            Mode::Strict => &*STRICT,
            Mode::Lenient => &*LENIENT,
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Strict
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Strict => f.pad("strict"),
            Mode::Lenient => f.pad("lenient"),
        }
    }
}

/// Parse a string slice into a version, following the Semantic Version 2.0.0 grammar.
///
/// ## Examples
///
/// ```rust
/// use semantic_version_parser::{parse, ErrorKind};
///
/// assert_eq!(parse::<semver::Version>("1.0.0"), Ok(semver::Version::new(1, 0, 0)));
/// assert_eq!(parse::<semver::Version>("1.0").unwrap_err().error_kind(), ErrorKind::InvalidVersion);
/// assert_eq!(parse::<semver::Version>("v1.0.0").unwrap_err().error_kind(), ErrorKind::InvalidVersion);
/// ```
pub fn parse<'input, V>(input: &'input str) -> Result<V::Out, Error<'input>>
where
    V: VersionBuilder<'input>,
{
    parse_with::<V>(input, Mode::Strict)
}

/// Parse a string slice into a version, allowing a leading `v`.
///
/// Apart from the optional `v`, this is the same grammar as [`parse`].
///
/// ## Examples
///
/// ```rust
/// use semantic_version_parser::{parse_lenient, ErrorKind};
///
/// assert_eq!(parse_lenient::<semver::Version>("v1.0.0"), Ok(semver::Version::new(1, 0, 0)));
/// assert_eq!(parse_lenient::<semver::Version>("1.0.0"), Ok(semver::Version::new(1, 0, 0)));
/// assert_eq!(parse_lenient::<semver::Version>("V1.0.0").unwrap_err().error_kind(), ErrorKind::InvalidVersion);
/// assert_eq!(parse_lenient::<semver::Version>("v1.0").unwrap_err().error_kind(), ErrorKind::InvalidVersion);
/// ```
pub fn parse_lenient<'input, V>(input: &'input str) -> Result<V::Out, Error<'input>>
where
    V: VersionBuilder<'input>,
{
    parse_with::<V>(input, Mode::Lenient)
}

/// Parse a string slice into a version using the grammar of the given [`Mode`].
///
/// The builder is only created once the whole input has been validated.
/// Pre-release and build identifiers are passed to the builder one by one, in input order.
pub fn parse_with<'input, V>(input: &'input str, mode: Mode) -> Result<V::Out, Error<'input>>
where
    V: VersionBuilder<'input>,
{
    parse_version::<V>(input, mode.grammar()).map_err(|ErrorSpan { error, span }| {
        trace!(input, %mode, kind = %error, "rejected version");
        Error { input, span, error }
    })
}

/// Returns true if the input is a valid version in the given [`Mode`].
///
/// ## Examples
///
/// ```rust
/// use semantic_version_parser::{is_valid, Mode};
///
/// assert!(is_valid("1.2.3-rc.1", Mode::Strict));
/// assert!(!is_valid("v1.2.3", Mode::Strict));
/// assert!(is_valid("v1.2.3", Mode::Lenient));
/// ```
pub fn is_valid(input: &str, mode: Mode) -> bool {
    parse_with::<()>(input, mode).is_ok()
}

/// Possible errors that happen during parsing
/// and the location of the input where the error occurred.
///
/// # Example
///
/// ```rust
/// use semantic_version_parser::parse;
///
/// let error = parse::<semver::Version>("1.0").unwrap_err();
/// assert_eq!(error.to_string(), "invalid version format: `1.0`");
///
/// let error = parse::<semver::Version>("1.99999999999999999999.0").unwrap_err();
/// assert_eq!(error.to_string(), "invalid minor version value: `99999999999999999999`");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Error<'input> {
    input: &'input str,
    span: Span,
    error: ErrorKind,
}

impl<'input> Error<'input> {
    /// Creates a new [`OwnedError`] out of this [`Error`].
    ///
    /// This is specialized version of [`Clone`] which returns a different type.
    #[inline]
    pub fn owned(&self) -> OwnedError {
        OwnedError {
            input: self.input.into(),
            span: self.span,
            error: self.error,
        }
    }

    /// Returns the original input line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = semantic_version_parser::parse::<()>("1.2").unwrap_err();
    /// assert_eq!(error.input(), "1.2");
    /// ```
    #[inline]
    pub fn input(&self) -> &'input str {
        self.input
    }

    /// Returns range into the input string that points to the erroneous input.
    ///
    /// This is the whole input if the grammar did not match,
    /// or the numeric component that could not be represented.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = semantic_version_parser::parse::<()>("1.2").unwrap_err();
    /// assert_eq!(error.error_span(), 0..3);
    ///
    /// let error = semantic_version_parser::parse::<()>("1.2.99999999999999999999").unwrap_err();
    /// assert_eq!(error.error_span(), 4..24);
    /// ```
    #[inline]
    pub fn error_span(&self) -> Range<usize> {
        self.span.into()
    }

    /// Returns the kind of error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semantic_version_parser::{parse, ErrorKind};
    ///
    /// assert_eq!(parse::<()>("1.0").unwrap_err().error_kind(), ErrorKind::InvalidVersion);
    /// assert_eq!(
    ///     parse::<()>("99999999999999999999.0.0").unwrap_err().error_kind(),
    ///     ErrorKind::InvalidMajorValue
    /// );
    /// assert_eq!(
    ///     parse::<()>("0.99999999999999999999.0").unwrap_err().error_kind(),
    ///     ErrorKind::InvalidMinorValue
    /// );
    /// assert_eq!(
    ///     parse::<()>("0.0.99999999999999999999").unwrap_err().error_kind(),
    ///     ErrorKind::InvalidPatchValue
    /// );
    /// ```
    #[inline]
    pub fn error_kind(&self) -> ErrorKind {
        self.error
    }

    /// Returns a slice from the original input line that triggered the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = semantic_version_parser::parse::<()>("1.99999999999999999999.0").unwrap_err();
    /// assert_eq!(error.erroneous_input(), "99999999999999999999");
    /// ```
    #[inline]
    pub fn erroneous_input(&self) -> &'input str {
        &self.input[self.error_span()]
    }

    /// Returns a text representation of the error.
    ///
    /// This is equivalent to the [`Display`] implementation, which can be further customized with format specifiers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = semantic_version_parser::parse::<()>("1.0").unwrap_err();
    /// assert_eq!(error.error_line(), String::from("invalid version format: `1.0`"));
    /// assert_eq!(format!("{:-^35}", error), String::from("---invalid version format: `1.0`---"));
    /// ```
    pub fn error_line(&self) -> String {
        format!("{}: `{}`", self.error, self.erroneous_input())
    }

    /// Returns a caret line indication the erroneous input if it was written under the original input line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = semantic_version_parser::parse::<()>("foo").unwrap_err();
    /// assert_eq!(error.indicate_erroneous_input(), "^^^");
    ///
    /// let error = semantic_version_parser::parse::<()>("1.2.99999999999999999999").unwrap_err();
    /// assert_eq!(error.indicate_erroneous_input(), "~~~~^^^^^^^^^^^^^^^^^^^^");
    /// ```
    pub fn indicate_erroneous_input(&self) -> String {
        format!(
            "{0:~<start$}{0:^<width$}",
            "",
            start = self.input[..self.span.start].chars().count(),
            width = self.erroneous_input().chars().count()
        )
    }
}

/// Owned version of [`Error`] which clones the input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedError {
    input: String,
    span: Span,
    error: ErrorKind,
}

impl OwnedError {
    /// Return a borrowed version of this error.
    pub fn borrowed(&self) -> Error<'_> {
        Error {
            input: &self.input,
            span: self.span,
            error: self.error,
        }
    }

    /// See [`Error::input`].
    #[inline]
    pub fn input(&self) -> &str {
        self.borrowed().input()
    }

    /// See [`Error::error_span`].
    #[inline]
    pub fn error_span(&self) -> Range<usize> {
        self.borrowed().error_span()
    }

    /// See [`Error::error_kind`].
    #[inline]
    pub fn error_kind(&self) -> ErrorKind {
        self.error
    }

    /// See [`Error::erroneous_input`].
    #[inline]
    pub fn erroneous_input(&self) -> &str {
        self.borrowed().erroneous_input()
    }

    /// See [`Error::error_line`].
    #[inline]
    pub fn error_line(&self) -> String {
        self.borrowed().error_line()
    }

    /// See [`Error::indicate_erroneous_input`].
    #[inline]
    pub fn indicate_erroneous_input(&self) -> String {
        self.borrowed().indicate_erroneous_input()
    }
}

impl From<Error<'_>> for OwnedError {
    fn from(error: Error<'_>) -> Self {
        error.owned()
    }
}

/// The four ways a version can be rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ErrorKind {
    /// The input does not match the grammar.
    #[error("invalid version format")]
    InvalidVersion,
    /// The major number matched the grammar, but does not fit into an u64.
    #[error("invalid major version value")]
    InvalidMajorValue,
    /// The minor number matched the grammar, but does not fit into an u64.
    #[error("invalid minor version value")]
    InvalidMinorValue,
    /// The patch number matched the grammar, but does not fit into an u64.
    #[error("invalid patch version value")]
    InvalidPatchValue,
}

impl Display for Error<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.error_line())?;
        if f.alternate() {
            writeln!(f)?;
            writeln!(f, "|    {}", self.input)?;
            writeln!(f, "|    {}", self.indicate_erroneous_input())?;
        }
        Ok(())
    }
}

impl Display for OwnedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.borrowed().fmt(f)
    }
}

impl std::error::Error for Error<'_> {}

impl std::error::Error for OwnedError {}

#[derive(Debug, PartialEq, Eq)]
struct ErrorSpan {
    error: ErrorKind,
    span: Span,
}

impl ErrorSpan {
    fn new(error: ErrorKind, span: Span) -> Self {
        Self { error, span }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Part {
    Major,
    Minor,
    Patch,
}

impl Part {
    fn group(self) -> &'static str {
        match self {
            Part::Major => "major",
            Part::Minor => "minor",
            Part::Patch => "patch",
        }
    }

    fn invalid(self) -> ErrorKind {
        match self {
            Part::Major => ErrorKind::InvalidMajorValue,
            Part::Minor => ErrorKind::InvalidMinorValue,
            Part::Patch => ErrorKind::InvalidPatchValue,
        }
    }
}

fn parse_version<'input, V>(input: &'input str, grammar: &Regex) -> Result<V::Out, ErrorSpan>
where
    V: VersionBuilder<'input>,
{
    let captures = grammar
        .captures(input)
        .ok_or_else(|| ErrorSpan::new(ErrorKind::InvalidVersion, Span::new(0, input.len())))?;

    let major = parse_number(input, &captures, Part::Major)?;
    let minor = parse_number(input, &captures, Part::Minor)?;
    let patch = parse_number(input, &captures, Part::Patch)?;

    let mut version = V::new();
    version.set_major(major);
    version.set_minor(minor);
    version.set_patch(patch);
    for pre_release in identifiers(&captures, "prerelease") {
        version.add_pre_release(pre_release);
    }
    for build in identifiers(&captures, "buildmetadata") {
        version.add_build(build);
    }

    Ok(version.build())
}

/// The numeric groups are mandatory in both grammars.
/// Should one be missing anyway, the error spans the whole input.
fn parse_number(input: &str, captures: &Captures<'_>, part: Part) -> Result<u64, ErrorSpan> {
    let number = captures
        .name(part.group())
        .ok_or_else(|| ErrorSpan::new(part.invalid(), Span::new(0, input.len())))?;
    number
        .as_str()
        .parse::<u64>()
        .map_err(|_| ErrorSpan::new(part.invalid(), number.range().into()))
}

/// Splits the captured group into its identifiers.
/// An absent or empty group yields no identifiers at all.
fn identifiers<'input>(
    captures: &Captures<'input>,
    group: &str,
) -> impl Iterator<Item = &'input str> {
    captures
        .name(group)
        .map(|m| m.as_str())
        .filter(|identifiers| !identifiers.is_empty())
        .into_iter()
        .flat_map(|identifiers| identifiers.split('.'))
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
struct Span {
    start: usize,
    end: usize,
}

impl Span {
    fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl From<Range<usize>> for Span {
    fn from(r: Range<usize>) -> Self {
        Span::new(r.start, r.end)
    }
}

impl From<Span> for Range<usize> {
    fn from(s: Span) -> Self {
        s.start..s.end
    }
}
