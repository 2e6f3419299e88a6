//! Builder seam between the Semantic Version 2.0.0 grammar and the types it parses into.
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

/// Trait to abstract over version building.
///
/// The methods to implement in this trait represent the five components of a semantic version,
/// but allow for parsing into a custom type.
///
/// The trait is generic over the lifetime of the input string, so that one could
/// parse into a version without having to allocate.
///
/// A parser only starts calling into the builder once the complete input has been validated,
/// so a builder never observes a partial version.
/// Most methods have a default implementation that does nothing and ignores the input.
/// This can be used to implement some form of validation without needing to keep the result.
pub trait VersionBuilder<'input> {
    /// The return type of the final version.
    type Out;

    /// Construct a new version builder.
    ///
    /// The function must not fail and the version (if returned from [`VersionBuilder::build`] at this point)
    /// should represent something akin to "0.0.0"
    fn new() -> Self;

    /// Set the major version component.
    ///
    /// Always called exactly once before [`VersionBuilder::build`].
    #[allow(unused)]
    fn set_major(&mut self, major: u64) {}

    /// Set the minor version component.
    ///
    /// Always called exactly once before [`VersionBuilder::build`].
    #[allow(unused)]
    fn set_minor(&mut self, minor: u64) {}

    /// Set the patch version component.
    ///
    /// Always called exactly once before [`VersionBuilder::build`].
    #[allow(unused)]
    fn set_patch(&mut self, patch: u64) {}

    /// Add a single pre-release identifier.
    ///
    /// The identifier is never empty and never contains a `.`.
    /// It is either a number without leading zeroes or an alpha-numeric identifier,
    /// it is up to the implementor to parse numbers, if required.
    ///
    /// This method is called once per identifier, in input order,
    /// or not at all if the version has no pre-release.
    #[allow(unused)]
    fn add_pre_release(&mut self, pre_release: &'input str) {}

    /// Add a single build metadata identifier.
    ///
    /// The identifier is never empty and never contains a `.`.
    /// Leading zeroes are allowed in build metadata, so `001` is passed as is.
    ///
    /// This method is called once per identifier, in input order,
    /// or not at all if the version has no build metadata.
    #[allow(unused)]
    fn add_build(&mut self, build: &'input str) {}

    /// Construct the final version.
    fn build(self) -> Self::Out;
}

/// Builds nothing, accepting every call.
///
/// Useful to check that an input is valid without allocating anything.
impl VersionBuilder<'_> for () {
    type Out = ();

    fn new() -> Self {}

    fn build(self) -> Self::Out {}
}

/// Builds a [`semver::Version`].
///
/// Identifiers are appended one at a time and validated by semver.
/// An identifier that semver rejects (e.g. a numeric pre-release with leading zeroes)
/// is dropped and the version is built without it.
/// The parser never passes such identifiers, this only matters when driving the builder by hand.
#[cfg(feature = "semver")]
impl<'input> VersionBuilder<'input> for semver::Version {
    type Out = Self;

    fn new() -> Self {
        semver::Version::new(0, 0, 0)
    }

    fn set_major(&mut self, major: u64) {
        self.major = major;
    }

    fn set_minor(&mut self, minor: u64) {
        self.minor = minor;
    }

    fn set_patch(&mut self, patch: u64) {
        self.patch = patch;
    }

    fn add_pre_release(&mut self, pre_release: &'input str) {
        let pre = append_identifier(self.pre.as_str(), pre_release);
        if let Ok(pre) = semver::Prerelease::new(&pre) {
            self.pre = pre;
        }
    }

    fn add_build(&mut self, build: &'input str) {
        let build = append_identifier(self.build.as_str(), build);
        if let Ok(build) = semver::BuildMetadata::new(&build) {
            self.build = build;
        }
    }

    fn build(self) -> Self::Out {
        self
    }
}

/// Appends `identifier` to a dot-separated list of identifiers.
#[cfg(feature = "semver")]
fn append_identifier<'s>(identifiers: &str, identifier: &'s str) -> std::borrow::Cow<'s, str> {
    if identifiers.is_empty() {
        identifier.into()
    } else {
        format!("{}.{}", identifiers, identifier).into()
    }
}
