//! These tests are replicated in the crate documentation as a doc test
//! Please try to keep them in sync

mod custom_test {
    use crate::VersionBuilder;

    /// Simpler version struct that lives only on the stack
    #[derive(Debug, Default)]
    struct MyVersion {
        numbers: [u64; 3],
        is_pre_release: bool,
    }

    /// The VersionBuilder trait is generic over the lifetime of the input string.
    /// We don't store references to those strings, so we don't care about the specific lifetime.
    impl VersionBuilder<'_> for MyVersion {
        /// We will modify the target struct directly
        type Out = Self;

        /// Construct a new builder instance.
        /// Only a valid input reaches the setters, so `set_major`, `set_minor`, and `set_patch` are always called.
        fn new() -> Self {
            Self::default()
        }

        /// Construct the final result. In this case, we can just return ourselves.
        fn build(self) -> Self::Out {
            self
        }

        fn set_major(&mut self, major: u64) {
            self.numbers[0] = major;
        }

        fn set_minor(&mut self, minor: u64) {
            self.numbers[1] = minor;
        }

        fn set_patch(&mut self, patch: u64) {
            self.numbers[2] = patch;
        }

        /// Called once per pre-release identifier.
        /// For this implementation, we don't care about the value, just its presence.
        fn add_pre_release(&mut self, _pre_release: &str) {
            self.is_pre_release = true
        }
    }

    #[test]
    fn test_custom_version_builder() {
        let input = "1.3.37-alpha21+build.42";

        let my_version = crate::parse_into::<MyVersion>(input).unwrap();

        assert_eq!([1, 3, 37], my_version.numbers);
        assert!(my_version.is_pre_release);
    }

    #[test]
    fn test_custom_version_builder_lenient() {
        assert!(crate::parse_into::<MyVersion>("v1.3.37").is_err());

        let my_version = crate::parse_lenient_into::<MyVersion>("v1.3.37").unwrap();
        assert_eq!([1, 3, 37], my_version.numbers);
        assert!(!my_version.is_pre_release);
    }

    #[test]
    fn test_custom_version_builder_with_mode() {
        let my_version = crate::parse_into_with::<MyVersion>("v4.2.0-rc", crate::Mode::Lenient).unwrap();
        assert_eq!([4, 2, 0], my_version.numbers);
        assert!(my_version.is_pre_release);

        let error = crate::parse_into_with::<MyVersion>("v4.2.0-rc", crate::Mode::Strict).unwrap_err();
        assert_eq!(error.error_kind(), crate::ErrorKind::InvalidVersion);
    }
}

mod builder_as_validation_test {

    //! This test is replicated in the crate documentation as a doc test
    //! Please try to keep them in sync

    use crate::VersionBuilder;

    /// newtype around bool, so we can implement the VersionBuilder trait for it
    #[derive(Debug, Default)]
    struct IsPreRelease(bool);

    impl VersionBuilder<'_> for IsPreRelease {
        /// Here we parse into a different value than Self
        type Out = bool;

        fn new() -> Self {
            Self::default()
        }

        /// Return the wrapped bool
        fn build(self) -> Self::Out {
            self.0
        }

        /// We only care about this method and can ignore all the other ones
        fn add_pre_release(&mut self, _pre_release: &str) {
            self.0 = true;
        }
    }

    /// This method also return false for invalid version strings,
    /// which is technically true, as those are not pre-release versions.
    /// Usually you would want to have a better error handling.
    fn is_pre_release(v: &str) -> bool {
        crate::parse_into::<IsPreRelease>(v).unwrap_or_default()
    }

    #[test]
    fn test_custom_version_validation() {
        assert!(is_pre_release("1.2.3-pre"));
        assert!(!is_pre_release("1.2.3"));
        assert!(!is_pre_release("1.2.3+build"));
        assert!(!is_pre_release("1.2-pre"));
    }

    #[test]
    fn test_is_valid() {
        assert!(crate::is_valid("1.2.3-pre", crate::Mode::Strict));
        assert!(!crate::is_valid("v1.2.3-pre", crate::Mode::Strict));
        assert!(crate::is_valid("v1.2.3-pre", crate::Mode::Lenient));
        assert!(!crate::is_valid("1.2.3.4", crate::Mode::Lenient));
    }
}

#[cfg(feature = "version")]
mod version_test {

    use crate::SemanticVersion;

    #[test]
    fn test_version() {
        let input = "1.3.37-beta.21+build.42";
        // make an owned copy, so we don't cheat by using the 'static lifetime.
        let input = String::from(input);

        let version = crate::parse(input.as_ref()).unwrap();

        // The version owns its identifiers, so the input can go away
        drop(input);

        assert_eq!(version.major(), 1);
        assert_eq!(version.minor(), 3);
        assert_eq!(version.patch(), 37);
        assert_eq!(version.pre_releases(), ["beta", "21"]);
        assert_eq!(version.build_metadata(), ["build", "42"]);
        assert_eq!("1.3.37-beta.21+build.42", version.to_string());
    }

    #[test]
    fn test_owned_error_outlives_input() {
        let input = String::from("1.3.37.1");

        let error = crate::parse(input.as_ref()).unwrap_err().owned();
        drop(input);

        assert_eq!(error.input(), "1.3.37.1");
        assert_eq!(error.error_kind(), crate::ErrorKind::InvalidVersion);
        assert_eq!(error.to_string(), "invalid version format: `1.3.37.1`");
    }

    #[test]
    fn test_lenient_version() {
        let version = crate::parse_lenient("v2.0.0-rc.1").unwrap();
        assert_eq!(
            version,
            SemanticVersion::new(2, 0, 0, vec![String::from("rc"), String::from("1")], Vec::new())
        );
        assert_eq!(version.to_string(), "2.0.0-rc.1");
    }

    #[test]
    fn test_must_parse() {
        assert_eq!(crate::must_parse("0.1.0"), SemanticVersion::release(0, 1, 0));
    }

    #[test]
    #[should_panic(expected = "invalid version format: `0.1`")]
    fn test_must_parse_panics() {
        let _ = crate::must_parse("0.1");
    }
}

mod serde_test {

    use semantic_version_value::SemanticVersion;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Deserialize, Serialize)]
    struct DependencySpec {
        /// Refer to name as owned value
        name: String,
        /// Parsed strictly from a JSON string
        version: SemanticVersion,
    }

    #[test]
    fn test_serde_feature() {
        let input = "
            {
                \"name\": \"semantic_version\",
                \"version\": \"1.3.37+build.42\"
            }";
        // make an owned copy, so we don't cheat by using the 'static lifetime.
        let input = String::from(input);

        let dep = serde_json::from_str::<DependencySpec>(input.as_ref()).unwrap();

        // nothing borrows from the input
        drop(input);

        let expected = SemanticVersion::new(1, 3, 37, Vec::new(), vec![String::from("build"), String::from("42")]);
        assert_eq!(dep.version, expected);

        let json = serde_json::to_string(&dep).unwrap();
        assert_eq!(json, r#"{"name":"semantic_version","version":"1.3.37+build.42"}"#);
    }

    #[test]
    fn test_serializes_canonical_string() {
        let version = SemanticVersion::new(
            1,
            2,
            3,
            vec![String::from("alpha"), String::from("1")],
            vec![String::from("build"), String::from("5")],
        );
        assert_eq!(serde_json::to_string(&version).unwrap(), r#""1.2.3-alpha.1+build.5""#);
    }

    #[test]
    fn test_serde_rejects_lenient_input() {
        let input = r#"{"name": "semantic_version", "version": "v1.3.37"}"#;
        let error = serde_json::from_str::<DependencySpec>(input).unwrap_err();
        assert!(error.to_string().starts_with("invalid version format: `v1.3.37`"));
    }

    #[test]
    fn test_serde_rejects_non_string() {
        let input = r#"{"name": "semantic_version", "version": 1}"#;
        assert!(serde_json::from_str::<DependencySpec>(input).is_err());
    }
}

mod semver_test {

    use semantic_version_value::SemanticVersion;
    use std::convert::TryFrom;

    #[test]
    fn test_parse_into_semver() {
        let version = crate::parse_into::<semver::Version>("1.3.37-beta.21+build.42").unwrap();
        assert_eq!(version, semver::Version::parse("1.3.37-beta.21+build.42").unwrap());
    }

    #[test]
    fn test_parse_lenient_into_semver() {
        let version = crate::parse_lenient_into::<semver::Version>("v1.3.37").unwrap();
        assert_eq!(version, semver::Version::new(1, 3, 37));
    }

    #[test]
    fn test_semver_conversions() {
        let semver = semver::Version::parse("1.3.37-beta.21+build.001").unwrap();
        let version = SemanticVersion::from(&semver);
        assert_eq!(version.pre_releases(), ["beta", "21"]);
        assert_eq!(version.build_metadata(), ["build", "001"]);
        assert_eq!(semver::Version::try_from(&version).unwrap(), semver);
    }

    #[test]
    fn test_semver_rejects_leading_zero_pre_release() {
        let version = SemanticVersion::new(1, 0, 0, vec![String::from("01")], Vec::new());
        assert!(semver::Version::try_from(&version).is_err());
    }
}
